//! `typeCheckValue`: host JSON value → checked/serialized JSON value, the
//! inverse direction of [`crate::value_from_ast`] used when a resolved value
//! is about to be handed back to a caller.

use iris_diagnostics::{Error, PathSegment};
use iris_schema::{IrisType, TypeDefKind, VariantShape};
use serde_json::{Map, Value as Json};

/// Checks `value` against `ty`, serializing scalars through their
/// `ScalarBehavior::serialize` and recursing through lists, optionals, and
/// record/union shapes. On failure, the returned error's `path` names the
/// nested position (list index or field name) where coercion broke down.
pub fn type_check_value(value: &Json, ty: &IrisType) -> Result<Json, Error> {
    match ty {
        IrisType::Maybe(inner) => {
            if value.is_null() {
                Ok(Json::Null)
            } else {
                type_check_value(value, inner)
            }
        }
        IrisType::List(inner) => {
            if value.is_null() {
                return Err(Error::coercion("Cannot return null for non-nullable field."));
            }
            // Unlike `value_from_ast`'s input-side promotion of a bare value
            // to a one-element list, the output side requires an iterable —
            // spec §4.5 `typeCheckValue`: "a non-iterable under list type is
            // a type error."
            let Json::Array(items) = value else {
                return Err(Error::coercion(format!("Expected iterable, but did not find one for value: {value}.")));
            };
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                out.push(type_check_value(item, inner).map_err(|mut e| {
                    e.path.insert(0, PathSegment::Index(i));
                    e
                })?);
            }
            Ok(Json::Array(out))
        }
        IrisType::Named(def) => {
            if value.is_null() {
                return Err(Error::coercion("Cannot return null for non-nullable field."));
            }
            match &def.kind {
                TypeDefKind::Scalar(behavior) => {
                    (behavior.serialize)(value).map_err(Error::coercion)
                }
                TypeDefKind::Data | TypeDefKind::Resolver => {
                    if def.is_record() {
                        let fields = def.record_fields().expect("record type has record fields");
                        let Json::Object(obj) = value else {
                            return Err(Error::coercion(format!("{} cannot represent a non-object value.", def.name)));
                        };
                        let mut out = Map::with_capacity(fields.len());
                        for (name, field_def) in fields.iter() {
                            let field_value = obj.get(name).cloned().unwrap_or(Json::Null);
                            let checked = type_check_value(&field_value, &field_def.ty).map_err(|mut e| {
                                e.path.insert(0, PathSegment::Field(name.to_string()));
                                e
                            })?;
                            out.insert(name.to_string(), checked);
                        }
                        Ok(Json::Object(out))
                    } else {
                        type_check_tagged_union(value, def)
                    }
                }
            }
        }
    }
}

/// Normalizes a host value into `{ __typename?, fields }` — spec §4.5
/// `typeCheckValue` "Variant type" rule: a bare string is an empty-fields
/// variant name; an object carries `__typename` plus the variant's own
/// fields flat (not nested under a variant-keyed wrapper); a variant whose
/// declared fields are all satisfiable as empty collapses back to the bare
/// name string.
fn type_check_tagged_union(value: &Json, def: &iris_schema::IrisTypeDefinition) -> Result<Json, Error> {
    if let Json::String(name) = value {
        let variant = def
            .find_variant(name)
            .ok_or_else(|| Error::coercion(format!("{} has no variant named \"{name}\".", def.name)))?;
        return match &variant.shape {
            VariantShape::Record(fields) if fields.is_empty() => Ok(Json::String(variant.name.clone())),
            _ => Err(Error::coercion(format!("Variant \"{name}\" of {} requires fields.", def.name))),
        };
    }

    let Json::Object(obj) = value else {
        return Err(Error::coercion(format!("{} cannot represent value: {value}", def.name)));
    };
    let typename = obj.get("__typename");
    let variant_name = match typename {
        Some(Json::String(name)) => name.clone(),
        Some(other) => return Err(Error::coercion(format!("{} has non-string __typename: {other}.", def.name))),
        None => {
            let variants = def
                .variants()
                .ok_or_else(|| Error::coercion(format!("{} has no variants.", def.name)))?;
            match variants {
                [single] => single.name.clone(),
                _ => {
                    return Err(Error::coercion(format!(
                        "{} is a union of multiple variants and requires a __typename to disambiguate.",
                        def.name
                    )));
                }
            }
        }
    };
    let variant = def
        .find_variant(&variant_name)
        .ok_or_else(|| Error::coercion(format!("{} has no variant named \"{variant_name}\".", def.name)))?;
    match &variant.shape {
        VariantShape::Record(fields) => {
            let mut out = Map::with_capacity(fields.len() + 1);
            for (name, field_def) in fields.iter() {
                let field_value = obj.get(name).cloned().unwrap_or(Json::Null);
                let checked = type_check_value(&field_value, &field_def.ty).map_err(|mut e| {
                    e.path.insert(0, PathSegment::Field(name.to_string()));
                    e
                })?;
                out.insert(name.to_string(), checked);
            }
            if fields.is_empty() {
                return Ok(Json::String(variant.name.clone()));
            }
            if typename.is_some() {
                out.insert("__typename".to_string(), Json::String(variant.name.clone()));
            }
            Ok(Json::Object(out))
        }
        VariantShape::Subtype(inner_ty) => type_check_value(value, inner_ty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iris_parser::{parse, ParseOptions};
    use iris_schema::{build_schema, BuildSchemaOptions};

    fn build(src: &str) -> iris_schema::Schema {
        let doc = parse(iris_lexer::Source::new(src), ParseOptions::default()).unwrap();
        build_schema(&doc, BuildSchemaOptions::default()).unwrap()
    }

    #[test]
    fn serializes_int_from_bool() {
        let schema = build("resolver Query = { ok: Int }");
        let fields = schema.query.as_ref().unwrap().record_fields().unwrap();
        let ty = &fields.get("ok").unwrap().ty;
        assert_eq!(type_check_value(&Json::Bool(true), ty).unwrap(), Json::from(1));
    }

    #[test]
    fn null_at_required_position_errors() {
        let schema = build("resolver Query = { ok: Int }");
        let fields = schema.query.as_ref().unwrap().record_fields().unwrap();
        let ty = &fields.get("ok").unwrap().ty;
        assert!(type_check_value(&Json::Null, ty).is_err());
    }

    #[test]
    fn non_iterable_at_list_position_errors() {
        let schema = build("resolver Query = { tags: [String] }");
        let fields = schema.query.as_ref().unwrap().record_fields().unwrap();
        let ty = &fields.get("tags").unwrap().ty;
        assert!(type_check_value(&Json::String("a".into()), ty).is_err());
    }

    #[test]
    fn null_at_maybe_position_is_ok() {
        let schema = build("resolver Query = { ok: Int? }");
        let fields = schema.query.as_ref().unwrap().record_fields().unwrap();
        let ty = &fields.get("ok").unwrap().ty;
        assert_eq!(type_check_value(&Json::Null, ty).unwrap(), Json::Null);
    }

    #[test]
    fn serializes_tagged_union_variant() {
        let schema = build(
            "data Tree = Leaf { name: String } | Node { children: [Tree] }\n\
             resolver Query = { tree: Tree }",
        );
        let fields = schema.query.as_ref().unwrap().record_fields().unwrap();
        let ty = &fields.get("tree").unwrap().ty;
        let value = serde_json::json!({ "__typename": "Leaf", "name": "a" });
        assert_eq!(type_check_value(&value, ty).unwrap(), value);
    }

    #[test]
    fn missing_required_field_on_selected_variant_errors() {
        let schema = build(
            "data Tree = Leaf { name: String } | Node { children: [Tree] }\n\
             resolver Query = { tree: Tree }",
        );
        let fields = schema.query.as_ref().unwrap().record_fields().unwrap();
        let ty = &fields.get("tree").unwrap().ty;
        let value = serde_json::json!({ "__typename": "Node" });
        assert!(type_check_value(&value, ty).is_err());
    }

    #[test]
    fn ambiguous_union_without_typename_errors() {
        let schema = build(
            "data Tree = Leaf { name: String } | Node { children: [Tree] }\n\
             resolver Query = { tree: Tree }",
        );
        let fields = schema.query.as_ref().unwrap().record_fields().unwrap();
        let ty = &fields.get("tree").unwrap().ty;
        let value = serde_json::json!({ "name": "a" });
        assert!(type_check_value(&value, ty).is_err());
    }
}
