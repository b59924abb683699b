//! `valueFromAST`: AST literal (optionally containing variables) → host JSON
//! value, checked against a target `IrisType`.

use iris_ast::Value;
use iris_schema::{IrisType, OrderedMap, TypeDefKind, VariantShape, Variables};
use serde_json::{Map, Value as Json};

/// Coerces a single AST literal against `ty`. Returns `None` if the literal
/// cannot represent a value of that type — mirroring `serialize`'s scalar
/// behaviors, this function reports *that* coercion failed, not *why*; the
/// validator is responsible for surfacing a located, human-readable error
/// before this ever runs against untrusted input.
pub fn value_from_ast(node: &Value, ty: &IrisType, variables: Option<&Variables>) -> Option<Json> {
    if let Value::Variable(var) = node {
        return match variables.and_then(|vars| vars.get(&var.name.value)) {
            Some(bound) => Some(bound.clone()),
            None if ty.is_maybe() => Some(Json::Null),
            None => None,
        };
    }

    if let Value::Null(_) = node {
        return if ty.is_maybe() { Some(Json::Null) } else { None };
    }

    match ty {
        IrisType::Maybe(inner) => value_from_ast(node, inner, variables),
        IrisType::List(inner) => coerce_list(node, inner, variables),
        IrisType::Named(def) => match &def.kind {
            TypeDefKind::Scalar(behavior) => (behavior.parse_literal)(node),
            TypeDefKind::Data | TypeDefKind::Resolver => {
                if def.is_record() {
                    let fields = def.record_fields()?;
                    let Value::Object(obj) = node else { return None };
                    coerce_record_fields(fields, obj, variables).map(Json::Object)
                } else {
                    coerce_tagged_union(node, def, variables)
                }
            }
        },
    }
}

fn coerce_list(node: &Value, item_ty: &IrisType, variables: Option<&Variables>) -> Option<Json> {
    match node {
        Value::List(list) => {
            let mut out = Vec::with_capacity(list.values.len());
            for item in &list.values {
                out.push(value_from_ast(item, item_ty, variables)?);
            }
            Some(Json::Array(out))
        }
        // A single non-list literal at a list position is promoted to a
        // one-element list, matching the established GraphQL coercion rule.
        _ => value_from_ast(node, item_ty, variables).map(|v| Json::Array(vec![v])),
    }
}

fn coerce_record_fields(
    fields: &OrderedMap<iris_schema::IrisField>,
    obj: &iris_ast::ObjectValueNode,
    variables: Option<&Variables>,
) -> Option<Map<String, Json>> {
    let mut out = Map::with_capacity(fields.len());
    for (name, field_def) in fields.iter() {
        let provided = obj.fields.iter().find(|f| f.name.value == name);
        let value = match provided {
            Some(f) => value_from_ast(&f.value, &field_def.ty, variables)?,
            None => match &field_def.default_value {
                Some(default) => default.clone(),
                None if field_def.ty.is_maybe() => Json::Null,
                None => return None,
            },
        };
        out.insert(name.to_string(), value);
    }
    Some(out)
}

/// A tagged-union value is spelled either as a bare enum literal (for a
/// zero-field variant, e.g. `RED`) or as an object literal discriminated by
/// an optional `__typename` field (`{ __typename: "Leaf", name: "a" }`),
/// flat alongside the variant's own fields rather than nested under a
/// variant-keyed wrapper — spec §4.5 "Optional `__typename` field picks a
/// variant ... Result is a plain map (with `__typename` copied if it was the
/// discriminator)." With no `__typename` present, a type carrying exactly
/// one variant uses it as the default; more than one is ambiguous.
fn coerce_tagged_union(
    node: &Value,
    def: &iris_schema::IrisTypeDefinition,
    variables: Option<&Variables>,
) -> Option<Json> {
    match node {
        Value::Enum(name) => {
            let variant = def.find_variant(&name.value)?;
            match &variant.shape {
                VariantShape::Record(fields) if fields.is_empty() => Some(Json::String(variant.name.clone())),
                _ => None,
            }
        }
        Value::Object(obj) => {
            let typename = obj.fields.iter().find(|f| f.name.value == "__typename");
            let variant_name = match typename {
                Some(f) => match &f.value {
                    Value::String(s) => s.value.clone(),
                    Value::Enum(e) => e.value.clone(),
                    _ => return None,
                },
                None => {
                    let variants = def.variants()?;
                    let [single] = variants else { return None };
                    single.name.clone()
                }
            };
            let variant = def.find_variant(&variant_name)?;
            match &variant.shape {
                VariantShape::Record(fields) => {
                    let mut out = coerce_record_fields(fields, obj, variables)?;
                    if typename.is_some() {
                        out.insert("__typename".to_string(), Json::String(variant.name.clone()));
                    }
                    Some(Json::Object(out))
                }
                VariantShape::Subtype(inner_ty) => value_from_ast(node, inner_ty, variables),
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iris_parser::{parse, parse_value, ParseOptions};
    use iris_schema::{build_schema, BuildSchemaOptions};

    fn build(src: &str) -> iris_schema::Schema {
        let doc = parse(iris_lexer::Source::new(src), ParseOptions::default()).unwrap();
        build_schema(&doc, BuildSchemaOptions::default()).unwrap()
    }

    #[test]
    fn coerces_record_with_default() {
        let schema = build(
            "data Point = { x: Int, y: Int = 0 }\n\
             resolver Query = { origin: Point }",
        );
        let ty = iris_schema::IrisType::Named(schema.get_type("Point").unwrap().clone());
        let lit = parse_value(iris_lexer::Source::new("{ x: 1 }"), ParseOptions::default()).unwrap();
        let json = value_from_ast(&lit, &ty, None).unwrap();
        assert_eq!(json, serde_json::json!({ "x": 1, "y": 0 }));
    }

    #[test]
    fn promotes_single_value_to_list() {
        let schema = build("resolver Query = { tags: [String] }");
        let fields = schema.query.as_ref().unwrap().record_fields().unwrap();
        let ty = &fields.get("tags").unwrap().ty;
        let lit = parse_value(iris_lexer::Source::new("\"a\""), ParseOptions::default()).unwrap();
        assert_eq!(value_from_ast(&lit, ty, None).unwrap(), serde_json::json!(["a"]));
    }

    #[test]
    fn bare_enum_tag_serializes_as_string() {
        let schema = build(
            "data Color = RED | GREEN | BLUE\n\
             resolver Query = { color: Color }",
        );
        let ty = iris_schema::IrisType::Named(schema.get_type("Color").unwrap().clone());
        let lit = parse_value(iris_lexer::Source::new("RED"), ParseOptions::default()).unwrap();
        assert_eq!(value_from_ast(&lit, &ty, None).unwrap(), serde_json::json!("RED"));
    }

    #[test]
    fn typename_discriminated_object_coerces_flat() {
        let schema = build(
            "data Tree = Leaf { name: String } | Node { children: [Tree] }\n\
             resolver Query = { tree: Tree }",
        );
        let ty = iris_schema::IrisType::Named(schema.get_type("Tree").unwrap().clone());
        let lit = parse_value(
            iris_lexer::Source::new(r#"{ __typename: "Leaf", name: "abcd" }"#),
            ParseOptions::default(),
        )
        .unwrap();
        assert_eq!(
            value_from_ast(&lit, &ty, None).unwrap(),
            serde_json::json!({ "__typename": "Leaf", "name": "abcd" })
        );
    }

    #[test]
    fn required_field_missing_is_invalid() {
        let schema = build(
            "data Point = { x: Int, y: Int }\n\
             resolver Query = { origin: Point }",
        );
        let ty = iris_schema::IrisType::Named(schema.get_type("Point").unwrap().clone());
        let lit = parse_value(iris_lexer::Source::new("{ x: 1 }"), ParseOptions::default()).unwrap();
        assert!(value_from_ast(&lit, &ty, None).is_none());
    }
}
