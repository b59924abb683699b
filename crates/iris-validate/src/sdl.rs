//! SDL-level validation: checks that only need the AST `Document` itself,
//! run before (or instead of) building a `Schema` from it.

use std::collections::{HashMap, HashSet};

use iris_ast::{
    ArgumentDefinitionNode, DataTypeDefinitionNode, Definition, DirectiveDefinitionNode, DirectiveLocation,
    DirectiveNode, DocumentNode, FieldDefinitionNode, Loc, NameNode, ResolverTypeDefinitionNode, TypeRef,
    VariantDefinitionNode,
};
use iris_diagnostics::Error;

use crate::suggest::did_you_mean;

/// Attaches `loc`'s source/offset to `error`, if there is one. AST nodes
/// built with `ParseOptions { no_location: true }` carry no `Loc`, so this
/// stays a best-effort attachment rather than a required one.
fn at(error: Error, loc: Option<&Loc>) -> Error {
    match loc {
        Some(loc) => error.with_source(loc.source.clone(), loc.start_offset),
        None => error,
    }
}

const BUILTIN_SCALAR_NAMES: [&str; 5] = ["Int", "Float", "String", "Boolean", "ID"];
const INTROSPECTION_TYPE_NAMES: [&str; 8] =
    ["__Schema", "__Type", "__Field", "__InputValue", "__EnumValue", "__Directive", "__TypeKind", "__DirectiveLocation"];

/// Where a directive usage was found, used to pick the `DirectiveLocation`
/// it must be declared for. Iris's closed location set predates the
/// data/resolver/variant vocabulary, so these map onto the closest existing
/// GraphQL-shaped location rather than a dedicated one per site.
#[derive(Clone, Copy)]
enum DirectiveSite {
    TypeDefinition,
    VariantDefinition,
    FieldDefinition,
    ArgumentDefinition,
}

impl DirectiveSite {
    fn location(self) -> DirectiveLocation {
        match self {
            DirectiveSite::TypeDefinition => DirectiveLocation::Object,
            DirectiveSite::VariantDefinition => DirectiveLocation::EnumValue,
            DirectiveSite::FieldDefinition => DirectiveLocation::FieldDefinition,
            DirectiveSite::ArgumentDefinition => DirectiveLocation::ArgumentDefinition,
        }
    }
}

struct DirectiveDecl {
    args: Vec<ArgumentDefinitionNode>,
    locations: Vec<DirectiveLocation>,
    name_loc: Option<Loc>,
}

/// Validates a type-system document on its own terms — no built `Schema`
/// required. `existing_type_names` lets an extension-style document be
/// checked against a previously built schema's names; pass an empty slice
/// when validating a standalone document.
pub fn validate_sdl(document: &DocumentNode, existing_type_names: &[&str]) -> Vec<Error> {
    let mut errors = Vec::new();

    let mut known_names: HashSet<String> = BUILTIN_SCALAR_NAMES.iter().map(|s| s.to_string()).collect();
    known_names.extend(INTROSPECTION_TYPE_NAMES.iter().map(|s| s.to_string()));
    known_names.extend(existing_type_names.iter().map(|s| s.to_string()));

    let mut data_defs = Vec::new();
    let mut resolver_defs = Vec::new();
    let mut directive_defs: HashMap<String, DirectiveDecl> = HashMap::new();
    directive_defs.insert(
        "deprecated".to_string(),
        DirectiveDecl {
            args: Vec::new(),
            locations: vec![DirectiveLocation::ArgumentDefinition, DirectiveLocation::FieldDefinition, DirectiveLocation::EnumValue],
            name_loc: None,
        },
    );

    for def in &document.definitions {
        match def {
            Definition::DataType(node) => {
                check_unique_name(&node.name, &mut known_names, &mut errors);
                data_defs.push(node);
            }
            Definition::ResolverType(node) => {
                check_unique_name(&node.name, &mut known_names, &mut errors);
                resolver_defs.push(node);
            }
            Definition::Directive(node) => {
                if directive_defs.contains_key(&node.name.value) {
                    errors.push(at(
                        Error::validation(format!(
                            "There can be only one directive named \"@{}\".",
                            node.name.value
                        )),
                        node.name.loc.as_ref(),
                    ));
                }
                directive_defs.insert(
                    node.name.value.clone(),
                    DirectiveDecl {
                        args: node.arguments.clone(),
                        locations: node.locations.clone(),
                        name_loc: node.name.loc.clone(),
                    },
                );
            }
            Definition::Operation(_) | Definition::Fragment(_) => {}
        }
    }

    for node in &data_defs {
        validate_type_definition(node.name.value.as_str(), &node.variants, &node.directives, &known_names, &mut errors);
    }
    for node in &resolver_defs {
        validate_type_definition(node.name.value.as_str(), &node.variants, &node.directives, &known_names, &mut errors);
    }
    for (name, decl) in directive_defs.iter().filter(|(n, _)| *n != "deprecated") {
        validate_directive_definition(name, decl.name_loc.as_ref(), &decl.args, &known_names, &mut errors);
    }

    for def in &document.definitions {
        if let Definition::DataType(DataTypeDefinitionNode { variants, .. })
        | Definition::ResolverType(ResolverTypeDefinitionNode { variants, .. }) = def
        {
            for variant in variants {
                check_directive_usages(&variant.directives, DirectiveSite::VariantDefinition, &directive_defs, &known_names, &mut errors);
                if let Some(fields) = &variant.fields {
                    for field in fields {
                        check_directive_usages(&field.directives, DirectiveSite::FieldDefinition, &directive_defs, &known_names, &mut errors);
                        for arg in &field.arguments {
                            check_directive_usages(&arg.directives, DirectiveSite::ArgumentDefinition, &directive_defs, &known_names, &mut errors);
                        }
                    }
                }
            }
        }
    }

    errors
}

fn check_unique_name(name: &NameNode, known_names: &mut HashSet<String>, errors: &mut Vec<Error>) {
    if name.value.starts_with("__") {
        errors.push(at(
            Error::validation(format!(
                "Name \"{}\" must not begin with \"__\", which is reserved.",
                name.value
            )),
            name.loc.as_ref(),
        ));
        return;
    }
    if !known_names.insert(name.value.clone()) {
        errors.push(at(
            Error::validation(format!("There can be only one type named \"{}\".", name.value)),
            name.loc.as_ref(),
        ));
    }
}

fn validate_type_definition(
    type_name: &str,
    variants: &[VariantDefinitionNode],
    directives: &[DirectiveNode],
    known_names: &HashSet<String>,
    errors: &mut Vec<Error>,
) {
    let _ = directives;
    let mut seen_variants = HashSet::new();
    for variant in variants {
        if variant.name.value.starts_with("__") {
            errors.push(at(
                Error::validation(format!(
                    "Name \"{}\" must not begin with \"__\", which is reserved.",
                    variant.name.value
                )),
                variant.name.loc.as_ref(),
            ));
        }
        if !seen_variants.insert(variant.name.value.clone()) {
            errors.push(at(
                Error::validation(format!(
                    "Type \"{type_name}\" can only declare one variant named \"{}\".",
                    variant.name.value
                )),
                variant.name.loc.as_ref(),
            ));
        }
        let Some(fields) = &variant.fields else { continue };
        let mut seen_fields = HashSet::new();
        for field in fields {
            if field.name.value.starts_with("__") {
                errors.push(at(
                    Error::validation(format!(
                        "Name \"{}\" must not begin with \"__\", which is reserved.",
                        field.name.value
                    )),
                    field.name.loc.as_ref(),
                ));
            }
            if !seen_fields.insert(field.name.value.clone()) {
                errors.push(at(
                    Error::validation(format!(
                        "Field \"{}\" can only be defined once on variant \"{}\".",
                        field.name.value, variant.name.value
                    )),
                    field.name.loc.as_ref(),
                ));
            }
            check_known_type(&field.ty, known_names, errors);
            validate_arguments(&field.arguments, known_names, errors);
        }
    }
}

fn validate_arguments(args: &[ArgumentDefinitionNode], known_names: &HashSet<String>, errors: &mut Vec<Error>) {
    let mut seen = HashSet::new();
    for arg in args {
        if !seen.insert(arg.name.value.clone()) {
            errors.push(at(
                Error::validation(format!("Argument \"{}\" can only be defined once.", arg.name.value)),
                arg.name.loc.as_ref(),
            ));
        }
        check_known_type(&arg.ty, known_names, errors);
    }
}

fn validate_directive_definition(
    name: &str,
    name_loc: Option<&Loc>,
    args: &[ArgumentDefinitionNode],
    known_names: &HashSet<String>,
    errors: &mut Vec<Error>,
) {
    if name.starts_with("__") {
        errors.push(at(
            Error::validation(format!("Name \"{name}\" must not begin with \"__\", which is reserved.")),
            name_loc,
        ));
    }
    validate_arguments(args, known_names, errors);
}

fn check_known_type(ty: &TypeRef, known_names: &HashSet<String>, errors: &mut Vec<Error>) {
    let name = &ty.named().name.value;
    if !known_names.contains(name) {
        let suggestion = did_you_mean(name, known_names.iter());
        errors.push(at(
            Error::validation(format!("Unknown type \"{name}\".{suggestion}")),
            ty.loc(),
        ));
    }
}

fn check_directive_usages(
    usages: &[DirectiveNode],
    site: DirectiveSite,
    decls: &HashMap<String, DirectiveDecl>,
    known_names: &HashSet<String>,
    errors: &mut Vec<Error>,
) {
    for usage in usages {
        let Some(decl) = decls.get(&usage.name.value) else {
            let suggestion = did_you_mean(&usage.name.value, decls.keys());
            errors.push(at(
                Error::validation(format!("Unknown directive \"@{}\".{suggestion}", usage.name.value)),
                usage.name.loc.as_ref(),
            ));
            continue;
        };
        if !decl.locations.contains(&site.location()) {
            errors.push(at(
                Error::validation(format!("Directive \"@{}\" may not be used here.", usage.name.value)),
                usage.loc.as_ref(),
            ));
        }
        for required in decl.args.iter().filter(|a| a.default_value.is_none() && !a.ty.is_maybe()) {
            if !usage.arguments.iter().any(|a| a.name.value == required.name.value) {
                errors.push(at(
                    Error::validation(format!(
                        "Directive \"@{}\" argument \"{}\" of required type \"{}\" was not provided.",
                        usage.name.value, required.name.value, required.ty
                    )),
                    usage.loc.as_ref(),
                ));
            }
        }
        for provided in &usage.arguments {
            if !decl.args.iter().any(|a| a.name.value == provided.name.value) {
                let suggestion = did_you_mean(&provided.name.value, decl.args.iter().map(|a| a.name.value.as_str()));
                errors.push(at(
                    Error::validation(format!(
                        "Unknown argument \"{}\" on directive \"@{}\".{suggestion}",
                        provided.name.value, usage.name.value
                    )),
                    provided.name.loc.as_ref(),
                ));
            }
        }
        let _ = known_names;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iris_lexer::Source;
    use iris_parser::{parse, ParseOptions};

    fn validate(src: &str) -> Vec<Error> {
        let doc = parse(Source::new(src), ParseOptions::default()).unwrap();
        validate_sdl(&doc, &[])
    }

    #[test]
    fn accepts_valid_document() {
        assert!(validate("resolver Query = { hello: String }").is_empty());
    }

    #[test]
    fn flags_unknown_type_with_suggestion() {
        let errors = validate("resolver Query = { hello: Sting }");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("Did you mean \"String\"?"));
    }

    #[test]
    fn flags_duplicate_type_names() {
        let errors = validate("data Foo = { x: Int }\ndata Foo = { y: Int }\nresolver Query = { hello: String }");
        assert!(errors.iter().any(|e| e.message.contains("only one type named \"Foo\"")));
    }

    #[test]
    fn flags_reserved_name() {
        let errors = validate("data __Foo = { x: Int }\nresolver Query = { hello: String }");
        assert!(errors.iter().any(|e| e.message.contains("reserved")));
    }

    #[test]
    fn flags_duplicate_field_names() {
        let errors = validate("resolver Query = { hello: String, hello: Int }");
        assert!(errors.iter().any(|e| e.message.contains("only be defined once")));
    }

    #[test]
    fn flags_missing_required_directive_argument() {
        let errors = validate(
            "directive @needsReason(reason: String) on FIELD_DEFINITION\n\
             resolver Query = { hello: String @needsReason }",
        );
        assert!(errors.iter().any(|e| e.message.contains("was not provided")));
    }

    #[test]
    fn deprecated_directive_is_known_without_a_declaration() {
        let errors = validate("resolver Query = { hello: String @deprecated(reason: \"use x\") }");
        assert!(errors.is_empty());
    }

    #[test]
    fn unknown_type_error_carries_a_source_location() {
        let errors = validate("resolver Query = { hello: Sting }");
        assert_eq!(errors.len(), 1);
        assert!(!errors[0].locations().is_empty());
    }

    #[test]
    fn duplicate_type_name_error_carries_a_source_location() {
        let errors = validate("data Foo = { x: Int }\ndata Foo = { y: Int }\nresolver Query = { hello: String }");
        let dup = errors.iter().find(|e| e.message.contains("only one type named \"Foo\"")).unwrap();
        assert!(!dup.locations().is_empty());
    }
}
