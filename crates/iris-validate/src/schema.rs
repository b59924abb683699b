//! Post-build schema validation: invariants that need the fully resolved
//! type graph (`Schema`), not just the AST.

use iris_diagnostics::Error;
use iris_schema::{IrisArgument, IrisType, Schema, TypeDefAstNode, TypeDefKind, VariantShape};

/// The enclosing type definition's own span, used when a diagnostic has no
/// more specific node (e.g. a root-type-shape error names the whole type,
/// not one of its fields).
fn type_def_loc(ast_node: &Option<TypeDefAstNode>) -> Option<iris_ast::Loc> {
    match ast_node {
        Some(TypeDefAstNode::Data(node)) => node.loc.clone(),
        Some(TypeDefAstNode::Resolver(node)) => node.loc.clone(),
        None => None,
    }
}

/// True for a type usable as input: a data type or a scalar (spec §4.6
/// "directive args must be data types", "every data field type is a data
/// type").
fn is_data_type(ty: &IrisType) -> bool {
    matches!(ty.named().kind, TypeDefKind::Data | TypeDefKind::Scalar(_))
}

/// True for a type usable as output: a resolver type or a scalar (spec §4.6
/// "every resolver field type is an output type").
fn is_output_type(ty: &IrisType) -> bool {
    matches!(ty.named().kind, TypeDefKind::Resolver | TypeDefKind::Scalar(_))
}

/// An argument with no `Maybe` wrapper and no default value: omitting it is
/// not possible, so it cannot also be `@deprecated`.
fn is_required(arg: &IrisArgument) -> bool {
    !arg.ty.is_maybe() && arg.default_value.is_none()
}

/// Attaches `arg`'s own declaration site to `error`, if the type graph kept
/// one (always true for SDL-built arguments; built-in arguments like
/// `@deprecated(reason:)` carry no `Loc`).
fn at(error: Error, loc: &Option<iris_ast::Loc>) -> Error {
    match loc {
        Some(loc) => error.with_source(loc.source.clone(), loc.start_offset),
        None => error,
    }
}

fn check_argument(arg: &IrisArgument, owner: &str, errors: &mut Vec<Error>) {
    if !is_data_type(&arg.ty) {
        errors.push(at(
            Error::validation(format!("The type of {owner} argument \"{}\" must be a data type.", arg.name)),
            &arg.loc,
        ));
    }
    if is_required(arg) && arg.deprecation_reason.is_some() {
        errors.push(at(
            Error::validation(format!("Required argument \"{}\" of {owner} cannot be deprecated.", arg.name)),
            &arg.loc,
        ));
    }
}

/// Checks invariants of an already-built `Schema`. `build_schema` already
/// rejects a missing/malformed `Query` root at construction time, so this
/// mostly re-confirms that and catches anything a hand-built `Schema` (not
/// assembled through the builder) might violate; the remaining rules
/// (directive argument types, output/data field types) only make sense once
/// every type reference in the schema is resolved, so they live here rather
/// than in `iris-validate::sdl`.
pub fn validate_schema(schema: &Schema) -> Vec<Error> {
    let mut errors = Vec::new();

    for root_name in ["Query", "Mutation", "Subscription"] {
        if let Some(def) = schema.get_type(root_name) {
            if !matches!(def.kind, TypeDefKind::Resolver) || !def.is_record() {
                errors.push(at(
                    Error::validation(format!("{root_name} root type must be a record resolver type.")),
                    &type_def_loc(&def.ast_node),
                ));
            }
        } else if root_name == "Query" {
            errors.push(Error::validation("Query root type must be provided."));
        }
    }

    for directive in &schema.directives {
        for arg in &directive.args {
            check_argument(arg, &format!("directive \"@{}\"", directive.name), &mut errors);
        }
    }

    for def in schema.type_map.values() {
        let Some(variants) = def.variants() else { continue };
        for variant in variants {
            let VariantShape::Record(fields) = &variant.shape else { continue };
            for (field_name, field) in fields.iter() {
                match def.kind {
                    TypeDefKind::Resolver if !is_output_type(&field.ty) => {
                        errors.push(at(
                            Error::validation(format!("The type of {}.{field_name} must be an output type.", def.name)),
                            &field.loc,
                        ));
                    }
                    TypeDefKind::Data if !is_data_type(&field.ty) => {
                        errors.push(at(
                            Error::validation(format!("The type of {}.{field_name} must be a data type.", def.name)),
                            &field.loc,
                        ));
                    }
                    _ => {}
                }
                for arg in &field.args {
                    check_argument(arg, &format!("field \"{}.{field_name}\"", def.name), &mut errors);
                }
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use iris_lexer::Source;
    use iris_parser::{parse, ParseOptions};
    use iris_schema::{build_schema, BuildSchemaOptions};

    #[test]
    fn valid_schema_has_no_errors() {
        let doc = parse(Source::new("resolver Query = { hello: String }"), ParseOptions::default()).unwrap();
        let schema = build_schema(&doc, BuildSchemaOptions::default()).unwrap();
        assert!(validate_schema(&schema).is_empty());
    }

    #[test]
    fn data_field_pointing_at_resolver_type_errors() {
        let doc = parse(
            Source::new("data Foo = { q: Query }\nresolver Query = { hello: String }"),
            ParseOptions::default(),
        )
        .unwrap();
        let schema = build_schema(&doc, BuildSchemaOptions::default()).unwrap();
        let errors = validate_schema(&schema);
        assert!(errors.iter().any(|e| e.to_string().contains("Foo.q")));
    }

    #[test]
    fn resolver_field_pointing_at_data_type_errors() {
        let doc = parse(
            Source::new("data Point = { x: Int }\nresolver Query = { origin: Point }"),
            ParseOptions::default(),
        )
        .unwrap();
        let schema = build_schema(&doc, BuildSchemaOptions::default()).unwrap();
        let errors = validate_schema(&schema);
        assert!(errors.iter().any(|e| e.to_string().contains("Query.origin")));
    }

    #[test]
    fn required_argument_cannot_be_deprecated() {
        let doc = parse(
            Source::new(
                "resolver Query = { hello(name: String @deprecated(reason: \"unused\")): String }",
            ),
            ParseOptions::default(),
        )
        .unwrap();
        let schema = build_schema(&doc, BuildSchemaOptions::default()).unwrap();
        let errors = validate_schema(&schema);
        assert!(errors.iter().any(|e| e.to_string().contains("cannot be deprecated")));
    }

    #[test]
    fn directive_argument_type_error_must_be_a_data_type() {
        let doc = parse(
            Source::new(
                "directive @pick(field: Query) on FIELD_DEFINITION\n\
                 resolver Query = { hello: String }",
            ),
            ParseOptions::default(),
        )
        .unwrap();
        let schema = build_schema(&doc, BuildSchemaOptions::default()).unwrap();
        let errors = validate_schema(&schema);
        assert!(errors.iter().any(|e| e.to_string().contains("must be a data type")));
    }

    #[test]
    fn field_type_error_carries_a_source_location() {
        let doc = parse(
            Source::new("data Foo = { q: Query }\nresolver Query = { hello: String }"),
            ParseOptions::default(),
        )
        .unwrap();
        let schema = build_schema(&doc, BuildSchemaOptions::default()).unwrap();
        let errors = validate_schema(&schema);
        let error = errors.iter().find(|e| e.to_string().contains("Foo.q")).unwrap();
        assert!(!error.locations().is_empty());
    }
}
