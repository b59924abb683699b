//! Typed value coercion layered on top of [`iris_schema`]'s type graph:
//! AST literal → JSON (`value_from_ast`) and JSON → checked JSON
//! (`type_check_value`), the two directions a host program needs once a
//! `Schema` exists.

mod from_ast;
mod serialize;

pub use from_ast::value_from_ast;
pub use serialize::type_check_value;

pub use iris_schema::{value_from_ast_untyped, Variables};
