//! Validation of executable documents (operations/fragments) against an
//! already-built `Schema`: that selected fields exist on their parent type,
//! and that fragments are spread onto a compatible type.

use std::sync::Arc;

use iris_ast::{Definition, DocumentNode, FragmentDefinitionNode, Selection, SelectionSetNode};
use iris_diagnostics::Error;
use iris_schema::{IrisTypeDefinition, Schema, VariantShape};

use crate::suggest::did_you_mean;

pub fn validate_executable(document: &DocumentNode, schema: &Schema) -> Vec<Error> {
    let mut errors = Vec::new();
    let fragments: std::collections::HashMap<&str, &FragmentDefinitionNode> = document
        .definitions
        .iter()
        .filter_map(|d| match d {
            Definition::Fragment(f) => Some((f.name.value.as_str(), f)),
            _ => None,
        })
        .collect();

    for def in &document.definitions {
        match def {
            Definition::Operation(op) => {
                let Some(root) = root_type_for(&op.operation, schema) else { continue };
                check_selection_set(&op.selection_set, &root, &fragments, &mut errors);
            }
            Definition::Fragment(frag) => {
                let Some(ty) = schema.get_type(&frag.type_condition.name.value) else {
                    errors.push(Error::validation(format!(
                        "Unknown type \"{}\" for fragment \"{}\".",
                        frag.type_condition.name.value, frag.name.value
                    )));
                    continue;
                };
                check_selection_set(&frag.selection_set, ty, &fragments, &mut errors);
            }
            Definition::DataType(_) | Definition::ResolverType(_) | Definition::Directive(_) => {}
        }
    }
    errors
}

fn root_type_for<'a>(op: &iris_ast::OperationType, schema: &'a Schema) -> Option<&'a Arc<IrisTypeDefinition>> {
    use iris_ast::OperationType::*;
    match op {
        Query => schema.query.as_ref(),
        Mutation => schema.mutation.as_ref(),
        Subscription => schema.subscription.as_ref(),
    }
}

fn check_selection_set(
    set: &SelectionSetNode,
    parent: &Arc<IrisTypeDefinition>,
    fragments: &std::collections::HashMap<&str, &FragmentDefinitionNode>,
    errors: &mut Vec<Error>,
) {
    let Some(fields) = parent.record_fields() else {
        // A non-record (tagged-union) type may only be further narrowed by
        // inline fragments / fragment spreads, not selected directly. When
        // the field does exist on some of the union's members, suggest
        // narrowing with an inline fragment before falling back to a plain
        // "cannot query field" error — spec §4.6 FieldsOnCorrectType.
        for selection in &set.selections {
            if let Selection::Field(f) = selection {
                if f.name.value == "__typename" {
                    continue;
                }
                let candidates = member_types_defining_field(parent, &f.name.value);
                if candidates.is_empty() {
                    errors.push(Error::validation(format!(
                        "Cannot query field \"{}\" on type \"{}\".",
                        f.name.value, parent.name
                    )));
                } else {
                    errors.push(Error::validation(format!(
                        "Cannot query field \"{}\" on type \"{}\". Did you mean to use an inline fragment on {}?",
                        f.name.value,
                        parent.name,
                        join_or(&candidates)
                    )));
                }
            }
        }
        return;
    };

    for selection in &set.selections {
        match selection {
            Selection::Field(field) => {
                if field.name.value == "__typename" {
                    continue;
                }
                match fields.get(&field.name.value) {
                    Some(field_def) => {
                        if let Some(nested) = &field.selection_set {
                            check_selection_set(nested, field_def.ty.named(), fragments, errors);
                        }
                    }
                    None => {
                        let suggestion = did_you_mean(&field.name.value, fields.keys());
                        errors.push(Error::validation(format!(
                            "Cannot query field \"{}\" on type \"{}\".{suggestion}",
                            field.name.value, parent.name
                        )));
                    }
                }
            }
            Selection::InlineFragment(inline) => {
                let target = match &inline.type_condition {
                    Some(cond) => match find_type(cond.name.value.as_str(), parent) {
                        Some(t) => t,
                        None => continue,
                    },
                    None => parent.clone(),
                };
                check_selection_set(&inline.selection_set, &target, fragments, errors);
            }
            Selection::FragmentSpread(spread) => {
                let Some(frag) = fragments.get(spread.name.value.as_str()) else {
                    errors.push(Error::validation(format!("Unknown fragment \"{}\".", spread.name.value)));
                    continue;
                };
                if frag.type_condition.name.value != parent.name {
                    // Not necessarily invalid (the union case), but with no
                    // interface/possible-types model beyond variant subtypes
                    // we only accept an exact or variant-subtype match.
                    if parent.find_variant(&frag.type_condition.name.value).is_none() {
                        errors.push(Error::validation(format!(
                            "Fragment \"{}\" cannot be spread here as objects of type \"{}\" can never be of type \"{}\".",
                            spread.name.value, parent.name, frag.type_condition.name.value
                        )));
                        continue;
                    }
                }
            }
        }
    }
}

fn find_type(name: &str, parent: &Arc<IrisTypeDefinition>) -> Option<Arc<IrisTypeDefinition>> {
    if name == parent.name {
        return Some(parent.clone());
    }
    match parent.find_variant(name)?.shape {
        VariantShape::Subtype(ref ty) => Some(ty.named().clone()),
        VariantShape::Record(_) => None,
    }
}

/// Names of `parent`'s union members (its `Subtype` variants) that define a
/// record field named `field_name`, sorted by name — the stand-in "ranking"
/// spec §4.6 describes as "by usage count then name" (a document-wide usage
/// frequency isn't tracked anywhere else in this validator, so name order is
/// the deterministic, testable substitute; see DESIGN.md).
fn member_types_defining_field(parent: &IrisTypeDefinition, field_name: &str) -> Vec<String> {
    let Some(variants) = parent.variants() else { return Vec::new() };
    let mut names: Vec<String> = variants
        .iter()
        .filter_map(|v| match &v.shape {
            VariantShape::Subtype(ty) => Some(ty.named()),
            VariantShape::Record(_) => None,
        })
        .filter(|member| member.record_fields().is_some_and(|fields| fields.contains_key(field_name)))
        .map(|member| member.name.clone())
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Renders `["A"]` / `["A", "B"]` / `["A", "B", "C"]` as the GraphQL-style
/// `"A"` / `"A" or "B"` / `"A", "B", or "C"` disjunction.
fn join_or(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [one] => format!("\"{one}\""),
        many => {
            let (last, rest) = many.split_last().unwrap();
            let quoted: Vec<String> = rest.iter().map(|n| format!("\"{n}\"")).collect();
            if rest.len() == 1 {
                format!("{} or \"{last}\"", quoted[0])
            } else {
                format!("{}, or \"{last}\"", quoted.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iris_lexer::Source;
    use iris_parser::{parse, ParseOptions};
    use iris_schema::{build_schema, BuildSchemaOptions};

    fn build(src: &str) -> Schema {
        let doc = parse(Source::new(src), ParseOptions::default()).unwrap();
        build_schema(&doc, BuildSchemaOptions::default()).unwrap()
    }

    #[test]
    fn flags_unknown_field_in_query() {
        let schema = build("resolver Query = { hello: String }");
        let doc = parse(Source::new("query { nope }"), ParseOptions::default()).unwrap();
        let errors = validate_executable(&doc, &schema);
        assert!(errors.iter().any(|e| e.message.contains("Cannot query field \"nope\"")));
    }

    #[test]
    fn accepts_known_field() {
        let schema = build("resolver Query = { hello: String }");
        let doc = parse(Source::new("query { hello }"), ParseOptions::default()).unwrap();
        assert!(validate_executable(&doc, &schema).is_empty());
    }

    #[test]
    fn suggests_inline_fragment_on_union_members_defining_the_field() {
        let schema = build(
            "resolver A = { f: String }\n\
             resolver B = { f: String }\n\
             resolver T = A | B\n\
             resolver Query = { t: T }",
        );
        let doc = parse(Source::new("query { t { f } }"), ParseOptions::default()).unwrap();
        let errors = validate_executable(&doc, &schema);
        assert!(errors.iter().any(|e| {
            e.message == "Cannot query field \"f\" on type \"T\". Did you mean to use an inline fragment on \"A\" or \"B\"?"
        }));
    }
}
