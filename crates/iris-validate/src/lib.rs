//! Validation rules for Iris documents and schemas: SDL-level checks that
//! only need an AST, post-build schema invariants, and executable-document
//! checks (selected fields exist, fragments spread onto a compatible type).

mod executable;
mod schema;
mod sdl;
mod suggest;

pub use executable::validate_executable;
pub use schema::validate_schema;
pub use sdl::validate_sdl;
