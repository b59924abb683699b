//! Type graph, two-pass schema builder, and the fixed introspection schema
//! for Iris.

mod build;
mod directive;
mod introspection;
mod ordered_map;
mod scalars;
mod schema;
mod types;
mod untyped;

pub use build::{build_schema, BuildSchemaOptions};
pub use directive::Directive;
pub use introspection::introspection_types;
pub use ordered_map::OrderedMap;
pub use schema::Schema;
pub use types::{
    IrisArgument, IrisField, IrisType, IrisTypeDefinition, IrisVariant, ScalarBehavior, TypeDefAstNode,
    TypeDefKind, VariantShape,
};
pub use untyped::{value_from_ast_untyped, Variables};

pub use iris_ast::TypeRole;
pub use iris_diagnostics::{Error, Result};
