//! Structured diagnostics with lazily-rendered source excerpts.

use std::fmt;
use std::sync::Arc;

use crate::source::{Location, Source};

/// Selects the constant prefix `Display` renders before the message, mirroring
/// the two fatal-error families in spec §7 ("Syntax Error: ..." for
/// lexer/parser failures, bare message for everything else).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    Schema,
    Validation,
    Coercion,
}

impl ErrorKind {
    fn prefix(self) -> Option<&'static str> {
        match self {
            ErrorKind::Syntax => Some("Syntax Error"),
            ErrorKind::Schema | ErrorKind::Validation | ErrorKind::Coercion => None,
        }
    }
}

/// A single step of a value-coercion or field-resolution path, attached to
/// errors raised while walking a nested value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, ".{name}"),
            PathSegment::Index(i) => write!(f, "[{i}]"),
        }
    }
}

/// A structured Iris diagnostic. `Display` renders the full human-readable
/// form (message + source excerpts) on demand; nothing is formatted eagerly
/// at construction time, so building an `Error` never requires a `Source` to
/// already have its excerpt cached.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
    /// Byte offsets into `source`, one per `Display`-rendered excerpt.
    pub positions: Vec<usize>,
    pub source: Option<Arc<Source>>,
    pub path: Vec<PathSegment>,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            positions: Vec::new(),
            source: None,
            path: Vec::new(),
        }
    }

    pub fn syntax(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Syntax, message)
    }

    pub fn schema(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Schema, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn coercion(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Coercion, message)
    }

    pub fn with_source(mut self, source: Arc<Source>, position: usize) -> Self {
        self.source = Some(source);
        self.positions = vec![position];
        self
    }

    pub fn with_positions(mut self, source: Arc<Source>, positions: Vec<usize>) -> Self {
        self.source = Some(source);
        self.positions = positions;
        self
    }

    pub fn with_path(mut self, path: Vec<PathSegment>) -> Self {
        self.path = path;
        self
    }

    /// Resolved (line, column) pairs for every recorded position.
    pub fn locations(&self) -> Vec<Location> {
        match &self.source {
            Some(source) => self.positions.iter().map(|&p| source.location(p)).collect(),
            None => Vec::new(),
        }
    }

    /// `{ message, locations }`, matching spec §4.7 `toJSON()`.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "message": self.message,
            "locations": self.locations().into_iter().map(|l| serde_json::json!({
                "line": l.line,
                "column": l.column,
            })).collect::<Vec<_>>(),
        })
    }

    fn render_excerpt(&self, source: &Source, position: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let loc = source.location(position);
        writeln!(f)?;
        writeln!(f, "{}:{}:{}", source.name(), loc.line, loc.column)?;
        let gutter_width = (loc.line + 1).to_string().len();
        for line_no in loc.line.saturating_sub(1)..=loc.line + 1 {
            let Some(text) = source.line_text(line_no) else { continue };
            if line_no == loc.line {
                writeln!(f, "{:>width$} | {}", line_no, text, width = gutter_width)?;
                let caret_col = loc.column.saturating_sub(1);
                writeln!(
                    f,
                    "{:width$} | {}^",
                    "",
                    " ".repeat(caret_col),
                    width = gutter_width
                )?;
            } else if line_no >= 1 {
                writeln!(f, "{:>width$} | {}", line_no, text, width = gutter_width)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind.prefix() {
            Some(prefix) => write!(f, "{prefix}: {}", self.message)?,
            None => write!(f, "{}", self.message)?,
        }
        if let Some(source) = &self.source {
            for &position in &self.positions {
                self.render_excerpt(source, position, f)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_syntax_error_with_excerpt() {
        let source = Arc::new(Source::with_name("data Hello = true", "schema.iris"));
        let pos = source.body().find("true").unwrap();
        let err = Error::syntax("Name \"true\" is reserved and cannot be used for an enum value.")
            .with_source(source, pos);
        let rendered = err.to_string();
        assert!(rendered.starts_with("Syntax Error: Name \"true\" is reserved"));
        assert!(rendered.contains("schema.iris:1:"));
        assert!(rendered.contains("^"));
    }

    #[test]
    fn non_syntax_error_has_no_prefix() {
        let err = Error::schema("Query root type must be provided.");
        assert_eq!(err.to_string(), "Query root type must be provided.");
    }
}
