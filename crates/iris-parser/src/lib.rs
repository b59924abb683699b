//! Recursive-descent SDL and value/type literal parser for Iris.

mod options;
mod parser;

use std::sync::Arc;

pub use iris_ast::*;
pub use iris_lexer::{Error, Result, Source};
pub use options::ParseOptions;
pub use parser::Parser;

/// Parses a full SDL (or mixed SDL + executable) document.
pub fn parse(source: impl Into<Arc<Source>>, options: ParseOptions) -> Result<DocumentNode> {
    let mut parser = Parser::new(source.into(), options)?;
    let doc = parser.parse_document()?;
    parser.expect_eof()?;
    Ok(doc)
}

/// Parses a single value literal (may contain variables).
pub fn parse_value(source: impl Into<Arc<Source>>, options: ParseOptions) -> Result<Value> {
    let mut parser = Parser::new(source.into(), options)?;
    let value = parser.parse_value_entry(false)?;
    parser.expect_eof()?;
    Ok(value)
}

/// Parses a single const value literal (no variables allowed).
pub fn parse_const_value(source: impl Into<Arc<Source>>, options: ParseOptions) -> Result<Value> {
    let mut parser = Parser::new(source.into(), options)?;
    let value = parser.parse_value_entry(true)?;
    parser.expect_eof()?;
    Ok(value)
}

/// Parses a single type reference (`Name`, `[Name]`, `Name?`, ...).
pub fn parse_type(source: impl Into<Arc<Source>>, options: ParseOptions) -> Result<TypeRef> {
    let mut parser = Parser::new(source.into(), options)?;
    let ty = parser.parse_type_entry()?;
    parser.expect_eof()?;
    Ok(ty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_record() {
        let doc = parse(Source::new("data Hello = { world: String }"), ParseOptions::default()).unwrap();
        assert_eq!(doc.definitions.len(), 1);
    }

    #[test]
    fn parses_value_literal() {
        let v = parse_value(Source::new("[true, null]"), ParseOptions::default()).unwrap();
        assert!(matches!(v, Value::List(_)));
    }

    #[test]
    fn rejects_variable_in_const_value() {
        let err = parse_const_value(Source::new("$x"), ParseOptions::default()).unwrap_err();
        assert!(err.to_string().contains("constant value"));
    }

    #[test]
    fn parses_type_reference() {
        let ty = parse_type(Source::new("[String?]"), ParseOptions::default()).unwrap();
        assert_eq!(ty.to_string(), "[String?]");
    }
}
