//! The two-pass schema builder: AST `Document` → `Schema`.
//!
//! Pass one registers every top-level `data`/`resolver` definition as a
//! placeholder behind an `Arc`, alongside the pre-registered built-in
//! scalars and fixed introspection types. Pass two fills in each
//! definition's variants: because a field's type is just another `Arc`
//! pointer into the already-complete name table, building one type's
//! variants never needs another type's variants to already be resolved, so
//! cyclic type graphs (`data Tree = Leaf { ... } | Node { children: [Tree] }`)
//! build without special-casing recursion.

use std::collections::HashMap;
use std::sync::Arc;

use iris_ast::{
    ArgumentDefinitionNode, DataTypeDefinitionNode, Definition, DirectiveDefinitionNode,
    DirectiveLocation, DirectiveNode, DocumentNode, FieldDefinitionNode, ResolverTypeDefinitionNode,
    TypeRef, TypeRole, VariantDefinitionNode,
};
use iris_diagnostics::Error;

use crate::directive::Directive;
use crate::introspection::introspection_types;
use crate::ordered_map::OrderedMap;
use crate::schema::Schema;
use crate::types::{
    IrisArgument, IrisField, IrisType, IrisTypeDefinition, TypeDefAstNode, TypeDefKind, VariantShape,
};
use crate::untyped::value_from_ast_untyped;

#[derive(Debug, Clone, Copy, Default)]
pub struct BuildSchemaOptions {
    /// Skip the validate-then-build orchestration entirely. `build_schema`
    /// never runs SDL validation itself (see DESIGN.md); this flag exists
    /// so callers that already validated can request the same behavior the
    /// conceptual `assumeValidSDL` option describes, namely that no
    /// revalidation work happens here either way.
    pub assume_valid_sdl: bool,
    pub assume_valid: bool,
    pub no_location: bool,
}

type TypeMap = HashMap<String, Arc<IrisTypeDefinition>>;

pub fn build_schema(document: &DocumentNode, _options: BuildSchemaOptions) -> std::result::Result<Schema, Error> {
    // Built-in scalars and the fixed introspection types are pre-registered
    // before any user definition is seen, so user SDL can neither redeclare
    // a scalar nor collide with a reserved `__`-prefixed name.
    let mut type_map: TypeMap = HashMap::new();
    for def in introspection_types() {
        type_map.insert(def.name.clone(), def);
    }

    // Pass one: register every user type definition as a placeholder.
    let mut data_defs: Vec<(String, Arc<DataTypeDefinitionNode>)> = Vec::new();
    let mut resolver_defs: Vec<(String, Arc<ResolverTypeDefinitionNode>)> = Vec::new();
    let mut directive_def_nodes: Vec<&DirectiveDefinitionNode> = Vec::new();

    for def in &document.definitions {
        match def {
            Definition::DataType(node) => {
                let name = node.name.value.clone();
                if type_map.contains_key(&name) {
                    return Err(duplicate_type_error(&name));
                }
                let arc_node = Arc::new(node.clone());
                let placeholder = Arc::new(IrisTypeDefinition::new_placeholder(
                    name.clone(),
                    node.description.as_ref().map(|d| d.value.clone()),
                    TypeRole::Data,
                    TypeDefAstNode::Data(arc_node.clone()),
                ));
                type_map.insert(name.clone(), placeholder);
                data_defs.push((name, arc_node));
            }
            Definition::ResolverType(node) => {
                let name = node.name.value.clone();
                if type_map.contains_key(&name) {
                    return Err(duplicate_type_error(&name));
                }
                let arc_node = Arc::new(node.clone());
                let placeholder = Arc::new(IrisTypeDefinition::new_placeholder(
                    name.clone(),
                    node.description.as_ref().map(|d| d.value.clone()),
                    TypeRole::Resolver,
                    TypeDefAstNode::Resolver(arc_node.clone()),
                ));
                type_map.insert(name.clone(), placeholder);
                resolver_defs.push((name, arc_node));
            }
            Definition::Directive(node) => directive_def_nodes.push(node),
            Definition::Operation(_) | Definition::Fragment(_) => {}
        }
    }

    // Pass two: materialize every user type's variants now that every name
    // in the document resolves to some `Arc<IrisTypeDefinition>`.
    for (name, node) in &data_defs {
        let variants = build_variants(&node.variants, TypeRole::Data, &type_map)?;
        type_map[name].set_variants(variants);
    }
    for (name, node) in &resolver_defs {
        let variants = build_variants(&node.variants, TypeRole::Resolver, &type_map)?;
        type_map[name].set_variants(variants);
    }

    let mut directives = Vec::new();
    for node in &directive_def_nodes {
        directives.push(Arc::new(build_directive(node, &type_map)?));
    }
    if !directives.iter().any(|d: &Arc<Directive>| d.name == "deprecated") {
        directives.push(Arc::new(builtin_deprecated_directive(&type_map)));
    }

    let query = resolve_root("Query", true, &type_map)?;
    let mutation = resolve_root("Mutation", false, &type_map)?;
    let subscription = resolve_root("Subscription", false, &type_map)?;

    Ok(Schema::new(None, query, mutation, subscription, directives, type_map))
}

fn duplicate_type_error(name: &str) -> Error {
    Error::schema(format!(
        "Schema must contain uniquely named types but contains multiple types named \"{name}\"."
    ))
}

fn resolve_root(
    name: &str,
    required: bool,
    type_map: &TypeMap,
) -> std::result::Result<Option<Arc<IrisTypeDefinition>>, Error> {
    match type_map.get(name) {
        Some(def) => {
            if !matches!(def.kind, TypeDefKind::Resolver) || !def.is_record() {
                return Err(Error::schema(format!(
                    "{name} root type must be a record resolver type."
                )));
            }
            Ok(Some(def.clone()))
        }
        None if required => Err(Error::schema("Query root type must be provided.")),
        None => Ok(None),
    }
}

fn resolve_wrapped_type(ty: &TypeRef, type_map: &TypeMap) -> std::result::Result<IrisType, Error> {
    match ty {
        TypeRef::Named(n) => type_map
            .get(&n.name.value)
            .cloned()
            .map(IrisType::Named)
            .ok_or_else(|| Error::schema(format!("Unknown type \"{}\".", n.name.value))),
        TypeRef::List(n) => Ok(IrisType::List(Box::new(resolve_wrapped_type(&n.ty, type_map)?))),
        TypeRef::Maybe(n) => Ok(IrisType::Maybe(Box::new(resolve_wrapped_type(&n.ty, type_map)?))),
    }
}

fn deprecation_reason(directives: &[DirectiveNode]) -> Option<String> {
    let directive = directives.iter().find(|d| d.name.value == "deprecated")?;
    let reason = directive
        .arguments
        .iter()
        .find(|a| a.name.value == "reason")
        .and_then(|a| value_from_ast_untyped(&a.value, None))
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default();
    Some(reason)
}

fn build_args(
    arg_defs: &[ArgumentDefinitionNode],
    type_map: &TypeMap,
) -> std::result::Result<Vec<IrisArgument>, Error> {
    arg_defs
        .iter()
        .map(|arg| {
            Ok(IrisArgument {
                name: arg.name.value.clone(),
                description: arg.description.as_ref().map(|d| d.value.clone()),
                ty: resolve_wrapped_type(&arg.ty, type_map)?,
                default_value: arg.default_value.as_ref().and_then(|v| value_from_ast_untyped(v, None)),
                deprecation_reason: deprecation_reason(&arg.directives),
                loc: arg.loc.clone(),
            })
        })
        .collect()
}

fn build_field(
    field: &FieldDefinitionNode,
    role: TypeRole,
    type_map: &TypeMap,
) -> std::result::Result<IrisField, Error> {
    Ok(IrisField {
        name: field.name.value.clone(),
        description: field.description.as_ref().map(|d| d.value.clone()),
        deprecation_reason: deprecation_reason(&field.directives),
        ty: resolve_wrapped_type(&field.ty, type_map)?,
        args: if role == TypeRole::Resolver { build_args(&field.arguments, type_map)? } else { Vec::new() },
        loc: field.loc.clone(),
    })
}

fn build_variants(
    ast_variants: &[VariantDefinitionNode],
    role: TypeRole,
    type_map: &TypeMap,
) -> std::result::Result<Vec<crate::types::IrisVariant>, Error> {
    ast_variants
        .iter()
        .map(|variant| {
            let shape = match &variant.fields {
                Some(field_nodes) => {
                    let mut fields = OrderedMap::new();
                    for field in field_nodes {
                        fields.insert(field.name.value.clone(), build_field(field, role, type_map)?);
                    }
                    VariantShape::Record(fields)
                }
                // A bare name either refers to another declared type (a
                // union member) or, if no such type exists, stands for
                // itself as a plain enum tag with no fields.
                None => match type_map.get(&variant.name.value) {
                    Some(referenced) => VariantShape::Subtype(IrisType::Named(referenced.clone())),
                    None => VariantShape::Record(OrderedMap::new()),
                },
            };
            Ok(crate::types::IrisVariant {
                name: variant.name.value.clone(),
                description: variant.description.as_ref().map(|d| d.value.clone()),
                deprecation_reason: deprecation_reason(&variant.directives),
                shape,
            })
        })
        .collect()
}

fn build_directive(node: &DirectiveDefinitionNode, type_map: &TypeMap) -> std::result::Result<Directive, Error> {
    Ok(Directive {
        name: node.name.value.clone(),
        description: node.description.as_ref().map(|d| d.value.clone()),
        args: build_args(&node.arguments, type_map)?,
        is_repeatable: node.repeatable,
        locations: node.locations.clone(),
    })
}

fn builtin_deprecated_directive(type_map: &TypeMap) -> Directive {
    let string_ty = IrisType::Named(type_map["String"].clone());
    Directive {
        name: "deprecated".to_string(),
        description: Some("Marks a field, argument, or variant as deprecated.".to_string()),
        args: vec![IrisArgument {
            name: "reason".to_string(),
            description: Some("Explains why this is deprecated.".to_string()),
            ty: string_ty,
            default_value: Some(serde_json::Value::String(String::new())),
            deprecation_reason: None,
            loc: None,
        }],
        is_repeatable: false,
        // Iris's grammar has no `ENUM_VALUE` production distinct from its
        // own variant concept; `EnumValue` is the closest location in the
        // closed set to the "VARIANT_DEFINITION" the open question calls
        // for, so it stands in for it here.
        locations: vec![
            DirectiveLocation::ArgumentDefinition,
            DirectiveLocation::FieldDefinition,
            DirectiveLocation::EnumValue,
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iris_parser::{parse, ParseOptions};

    fn build(src: &str) -> std::result::Result<Schema, Error> {
        let doc = parse(iris_lexer::Source::new(src), ParseOptions::default()).unwrap();
        build_schema(&doc, BuildSchemaOptions::default())
    }

    #[test]
    fn builds_simple_record_with_query_root() {
        let schema = build("resolver Query = { hello: String }").unwrap();
        let query = schema.query.as_ref().unwrap();
        assert!(query.is_record());
        let fields = query.record_fields().unwrap();
        assert_eq!(fields.get("hello").unwrap().ty.named().name, "String");
    }

    #[test]
    fn missing_query_is_an_error() {
        let err = build("data Foo = { x: Int }").unwrap_err();
        assert!(err.to_string().contains("Query root type must be provided"));
    }

    #[test]
    fn cyclic_type_graph_builds() {
        let schema = build(
            "data Tree = Leaf { name: String } | Node { children: [Tree] }\n\
             resolver Query = { tree: Tree }",
        )
        .unwrap();
        let tree = schema.get_type("Tree").unwrap();
        let node_variant = tree.find_variant("Node").unwrap();
        let VariantShape::Record(fields) = &node_variant.shape else { panic!("expected record") };
        let children_ty = &fields.get("children").unwrap().ty;
        assert_eq!(children_ty.named().name, "Tree");
    }

    #[test]
    fn unknown_type_reference_is_an_error() {
        let err = build("resolver Query = { hello: DoesNotExist }").unwrap_err();
        assert!(err.to_string().contains("Unknown type \"DoesNotExist\""));
    }

    #[test]
    fn bare_enum_style_variant_without_backing_type_has_no_fields() {
        let schema = build(
            "data Color = RED | GREEN | BLUE\n\
             resolver Query = { color: Color }",
        )
        .unwrap();
        let color = schema.get_type("Color").unwrap();
        let red = color.find_variant("RED").unwrap();
        assert!(matches!(&red.shape, VariantShape::Record(fields) if fields.is_empty()));
    }

    #[test]
    fn deprecated_directive_is_always_present() {
        let schema = build("resolver Query = { hello: String }").unwrap();
        assert!(schema.get_directive("deprecated").is_some());
    }

    #[test]
    fn field_deprecation_reason_defaults_to_empty_string() {
        let schema = build("resolver Query = { hello: String @deprecated }").unwrap();
        let fields = schema.query.as_ref().unwrap().record_fields().unwrap();
        assert_eq!(fields.get("hello").unwrap().deprecation_reason.as_deref(), Some(""));
    }
}
