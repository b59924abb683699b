//! Source buffers, locations, and structured errors shared across the Iris
//! front end.

mod error;
mod source;

pub use error::{Error, ErrorKind, PathSegment};
pub use source::{Location, Source};

pub type Result<T> = std::result::Result<T, Error>;
