//! The fixed introspection type definitions (`__Schema`, `__Type`, ...),
//! built directly as `IrisTypeDefinition`s rather than parsed from SDL,
//! since the `__` name prefix they use is reserved and cannot appear in a
//! user document.

use std::sync::Arc;

use iris_ast::TypeRole;

use crate::ordered_map::OrderedMap;
use crate::scalars::builtin_scalars;
use crate::types::{IrisField, IrisType, IrisTypeDefinition, IrisVariant, VariantShape};

fn placeholder(name: &str) -> Arc<IrisTypeDefinition> {
    Arc::new(IrisTypeDefinition::new_introspection(name, TypeRole::Resolver))
}

fn named(def: &Arc<IrisTypeDefinition>) -> IrisType {
    IrisType::Named(def.clone())
}

fn maybe(ty: IrisType) -> IrisType {
    IrisType::Maybe(Box::new(ty))
}

fn list(ty: IrisType) -> IrisType {
    IrisType::List(Box::new(ty))
}

fn field(name: &str, ty: IrisType) -> (String, IrisField) {
    (
        name.to_string(),
        IrisField { name: name.to_string(), description: None, deprecation_reason: None, ty, args: Vec::new(), loc: None },
    )
}

fn record(def: &Arc<IrisTypeDefinition>, fields: Vec<(String, IrisField)>) {
    let mut map = OrderedMap::new();
    for (name, f) in fields {
        map.insert(name, f);
    }
    def.set_variants(vec![IrisVariant {
        name: def.name.clone(),
        description: None,
        deprecation_reason: None,
        shape: VariantShape::Record(map),
    }]);
}

fn enum_like(def: &Arc<IrisTypeDefinition>, tags: &[&str]) {
    let variants = tags
        .iter()
        .map(|tag| IrisVariant {
            name: (*tag).to_string(),
            description: None,
            deprecation_reason: None,
            shape: VariantShape::Record(OrderedMap::new()),
        })
        .collect();
    def.set_variants(variants);
}

/// Builds the full set of introspection type definitions, cross-linked to
/// one another (`__Schema.types: [__Type]`, `__Type.fields: [__Field]`, ...)
/// and to the five built-in scalars.
pub fn introspection_types() -> Vec<Arc<IrisTypeDefinition>> {
    let scalars: Vec<_> = builtin_scalars();
    let string_ty = scalars.iter().find(|s| s.name == "String").unwrap().clone();
    let boolean_ty = scalars.iter().find(|s| s.name == "Boolean").unwrap().clone();

    let schema = placeholder("__Schema");
    let ty = placeholder("__Type");
    let field_ty = placeholder("__Field");
    let input_value = placeholder("__InputValue");
    let enum_value = placeholder("__EnumValue");
    let directive = placeholder("__Directive");
    let type_kind = placeholder("__TypeKind");
    let directive_location = placeholder("__DirectiveLocation");

    record(
        &schema,
        vec![
            field("description", maybe(named(&string_ty))),
            field("types", list(named(&ty))),
            field("queryType", named(&ty)),
            field("mutationType", maybe(named(&ty))),
            field("subscriptionType", maybe(named(&ty))),
            field("directives", list(named(&directive))),
        ],
    );

    record(
        &ty,
        vec![
            field("kind", named(&type_kind)),
            field("name", maybe(named(&string_ty))),
            field("description", maybe(named(&string_ty))),
            field("fields", maybe(list(named(&field_ty)))),
            field("variants", maybe(list(named(&ty)))),
            field("ofType", maybe(named(&ty))),
        ],
    );

    record(
        &field_ty,
        vec![
            field("name", named(&string_ty)),
            field("description", maybe(named(&string_ty))),
            field("args", list(named(&input_value))),
            field("type", named(&ty)),
            field("isDeprecated", named(&boolean_ty)),
            field("deprecationReason", maybe(named(&string_ty))),
        ],
    );

    record(
        &input_value,
        vec![
            field("name", named(&string_ty)),
            field("description", maybe(named(&string_ty))),
            field("type", named(&ty)),
            field("defaultValue", maybe(named(&string_ty))),
        ],
    );

    record(
        &enum_value,
        vec![
            field("name", named(&string_ty)),
            field("description", maybe(named(&string_ty))),
            field("isDeprecated", named(&boolean_ty)),
            field("deprecationReason", maybe(named(&string_ty))),
        ],
    );

    record(
        &directive,
        vec![
            field("name", named(&string_ty)),
            field("description", maybe(named(&string_ty))),
            field("locations", list(named(&directive_location))),
            field("args", list(named(&input_value))),
            field("isRepeatable", named(&boolean_ty)),
        ],
    );

    enum_like(&type_kind, &["SCALAR", "DATA", "RESOLVER", "LIST", "MAYBE"]);
    enum_like(
        &directive_location,
        &[
            "QUERY",
            "MUTATION",
            "SUBSCRIPTION",
            "FIELD",
            "FRAGMENT_DEFINITION",
            "FRAGMENT_SPREAD",
            "INLINE_FRAGMENT",
            "VARIABLE_DEFINITION",
            "SCHEMA",
            "SCALAR",
            "OBJECT",
            "FIELD_DEFINITION",
            "ARGUMENT_DEFINITION",
            "INTERFACE",
            "UNION",
            "ENUM",
            "ENUM_VALUE",
            "INPUT_OBJECT",
            "INPUT_FIELD_DEFINITION",
        ],
    );

    let mut all = scalars;
    all.extend([schema, ty, field_ty, input_value, enum_value, directive, type_kind, directive_location]);
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_links_resolve() {
        let types = introspection_types();
        let schema = types.iter().find(|t| t.name == "__Schema").unwrap();
        let fields = schema.record_fields().unwrap();
        assert_eq!(fields.get("types").unwrap().ty.named().name, "__Type");
    }

    #[test]
    fn type_kind_has_five_tags() {
        let types = introspection_types();
        let kind = types.iter().find(|t| t.name == "__TypeKind").unwrap();
        assert_eq!(kind.variants().unwrap().len(), 5);
    }
}
