//! Iris: a schema-definition language and value-coercion toolkit for a
//! data/resolver GraphQL-family type system.
//!
//! This crate re-exports the pipeline assembled from its component crates:
//! lexing and parsing ([`parse`], [`parse_value`], [`parse_const_value`],
//! [`parse_type`]), schema construction ([`build_schema`]), validation
//! ([`validate_sdl`], [`validate_schema`], [`validate_executable`]), and
//! value coercion ([`value_from_ast`], [`value_from_ast_untyped`],
//! [`type_check_value`]).

pub use iris_ast::*;
pub use iris_diagnostics::{Error, ErrorKind, Location, PathSegment, Result, Source};
pub use iris_parser::{parse, parse_const_value, parse_type, parse_value, ParseOptions};
pub use iris_schema::{
    build_schema, introspection_types, BuildSchemaOptions, Directive, IrisArgument, IrisField, IrisType,
    IrisTypeDefinition, IrisVariant, OrderedMap, Schema, ScalarBehavior, TypeDefKind, VariantShape,
};
pub use iris_validate::{validate_executable, validate_schema, validate_sdl};
pub use iris_value::{type_check_value, value_from_ast, value_from_ast_untyped, Variables};

use std::sync::Arc;

/// Parses `source` and builds a `Schema` from it in one step, running SDL
/// validation first unless `options.assume_valid_sdl` is set. This is the
/// orchestration the individual crates deliberately leave to the top level:
/// `iris-schema`'s builder never calls into `iris-validate`, since the
/// validator itself depends on the built type graph to check executable
/// documents against.
pub fn build_schema_from_source(
    source: impl Into<Arc<Source>>,
    parse_options: ParseOptions,
    build_options: BuildSchemaOptions,
) -> Result<Schema> {
    let document = parse(source, parse_options)?;
    if !build_options.assume_valid_sdl {
        let errors = validate_sdl(&document, &[]);
        if let Some(first) = errors.into_iter().next() {
            return Err(first);
        }
    }
    build_schema(&document, build_options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_and_validates_a_small_schema() {
        let schema = build_schema_from_source(
            Source::new("resolver Query = { hello: String }"),
            ParseOptions::default(),
            BuildSchemaOptions::default(),
        )
        .unwrap();
        assert!(schema.query.is_some());
        assert!(validate_schema(&schema).is_empty());
    }

    #[test]
    fn rejects_invalid_sdl_before_building() {
        let err = build_schema_from_source(
            Source::new("resolver Query = { hello: NotAType }"),
            ParseOptions::default(),
            BuildSchemaOptions::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Unknown type"));
    }
}
