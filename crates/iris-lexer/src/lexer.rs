//! Token-stream production.
//!
//! Unlike the JavaScript reference this spec distills from, a Rust `&str` is
//! statically guaranteed to be valid UTF-8: lone surrogates and other
//! invalid-encoding sequences cannot occur in the raw source buffer itself.
//! They can still arise from `\uXXXX` escapes *inside* string literals
//! (e.g. an unpaired high surrogate), which is where this lexer checks for
//! them (see [`Lexer::read_string`]).

use std::sync::Arc;

use iris_diagnostics::{Error, Result, Source};

use crate::token::{Token, TokenId, TokenKind};

/// Produces tokens from a [`Source`] on demand. Mirrors the source system's
/// incremental lexer: `advance()` returns the next non-comment token,
/// stitching it into the doubly linked arena, while comment tokens stay
/// reachable through `prev`/`next`.
pub struct Lexer {
    source: Arc<Source>,
    tokens: Vec<Token>,
    token: TokenId,
    last_token: TokenId,
}

const BOM: char = '\u{feff}';

impl Lexer {
    pub fn new(source: Arc<Source>) -> Self {
        let sof = Token {
            kind: TokenKind::Sof,
            start: 0,
            end: 0,
            line: 1,
            column: 1,
            value: None,
            block: false,
            prev: None,
            next: None,
        };
        Self {
            source,
            tokens: vec![sof],
            token: TokenId(0),
            last_token: TokenId(0),
        }
    }

    pub fn source(&self) -> &Arc<Source> {
        &self.source
    }

    pub fn get(&self, id: TokenId) -> &Token {
        &self.tokens[id.0]
    }

    pub fn token(&self) -> &Token {
        &self.tokens[self.token.0]
    }

    pub fn token_id(&self) -> TokenId {
        self.token
    }

    pub fn last_token(&self) -> &Token {
        &self.tokens[self.last_token.0]
    }

    pub fn last_token_id(&self) -> TokenId {
        self.last_token
    }

    /// Advances past any intervening comments and returns the next
    /// non-comment token, linking every token (including comments) into the
    /// arena's doubly linked list.
    pub fn advance(&mut self) -> Result<TokenId> {
        loop {
            let prev_id = self.token;
            let start = self.tokens[prev_id.0].end;
            let mut next = self.lex_one(start)?;
            next.prev = Some(prev_id);
            let next_id = TokenId(self.tokens.len());
            self.tokens.push(next);
            self.tokens[prev_id.0].next = Some(next_id);
            self.token = next_id;
            if self.tokens[next_id.0].kind != TokenKind::Comment {
                self.last_token = next_id;
                return Ok(next_id);
            }
        }
    }

    fn err(&self, pos: usize, message: impl Into<String>) -> Error {
        Error::syntax(message).with_source(self.source.clone(), pos)
    }

    fn lex_one(&self, mut pos: usize) -> Result<Token> {
        let bytes = self.source.body().as_bytes();
        loop {
            if pos >= bytes.len() {
                let loc = self.source.location(pos);
                return Ok(Token {
                    kind: TokenKind::Eof,
                    start: pos,
                    end: pos,
                    line: loc.line,
                    column: loc.column,
                    value: None,
                    block: false,
                    prev: None,
                    next: None,
                });
            }
            let c = bytes[pos];
            match c {
                b' ' | b'\t' => pos += 1,
                b',' => pos += 1,
                b'\n' => pos += 1,
                b'\r' => {
                    pos += 1;
                    if bytes.get(pos) == Some(&b'\n') {
                        pos += 1;
                    }
                }
                0xEF if self.source.body()[pos..].starts_with(BOM) => pos += BOM.len_utf8(),
                b'#' => return self.read_comment(pos),
                _ => break,
            }
        }

        let loc = self.source.location(pos);
        let ch = self.source.body()[pos..].chars().next().unwrap();

        if is_name_start(ch) {
            return self.read_name(pos, loc.line, loc.column);
        }
        if ch == '-' || ch.is_ascii_digit() {
            return self.read_number(pos, loc.line, loc.column);
        }
        if ch == '"' {
            return self.read_string(pos, loc.line, loc.column);
        }
        if let Some(kind) = single_char_punctuator(ch) {
            return Ok(Token {
                kind,
                start: pos,
                end: pos + ch.len_utf8(),
                line: loc.line,
                column: loc.column,
                value: None,
                block: false,
                prev: None,
                next: None,
            });
        }
        if ch == '.' {
            if self.source.body()[pos..].starts_with("...") {
                return Ok(Token {
                    kind: TokenKind::Spread,
                    start: pos,
                    end: pos + 3,
                    line: loc.line,
                    column: loc.column,
                    value: None,
                    block: false,
                    prev: None,
                    next: None,
                });
            }
            return Err(self.err(pos, "Unexpected character: \".\" (expected \"...\")."));
        }
        if ch == '\'' {
            return Err(self.err(
                pos,
                "Unexpected single quote character ('), did you mean to use a double quote (\")?",
            ));
        }
        if !is_source_character(ch) {
            return Err(self.err(pos, format!("Invalid character: U+{:04X}.", ch as u32)));
        }
        Err(self.err(pos, format!("Unexpected character: {}.", describe_char(ch))))
    }

    fn read_comment(&self, start: usize) -> Result<Token> {
        let body = self.source.body();
        let loc = self.source.location(start);
        let mut end = start + 1;
        while end < body.len() {
            let c = body[end..].chars().next().unwrap();
            if c == '\n' || c == '\r' {
                break;
            }
            end += c.len_utf8();
        }
        Ok(Token {
            kind: TokenKind::Comment,
            start,
            end,
            line: loc.line,
            column: loc.column,
            value: Some(body[start + 1..end].to_string()),
            block: false,
            prev: None,
            next: None,
        })
    }

    fn read_name(&self, start: usize, line: usize, column: usize) -> Result<Token> {
        let bytes = self.source.body().as_bytes();
        let mut end = start;
        while end < bytes.len() && is_name_continue(bytes[end] as char) {
            end += 1;
        }
        Ok(Token {
            kind: TokenKind::Name,
            start,
            end,
            line,
            column,
            value: Some(self.source.body()[start..end].to_string()),
            block: false,
            prev: None,
            next: None,
        })
    }

    fn read_number(&self, start: usize, line: usize, column: usize) -> Result<Token> {
        let bytes = self.source.body().as_bytes();
        let mut pos = start;
        let mut is_float = false;

        if bytes[pos] == b'-' {
            pos += 1;
        }

        if bytes.get(pos) == Some(&b'0') {
            pos += 1;
            if matches!(bytes.get(pos), Some(b) if b.is_ascii_digit()) {
                return Err(self.err(
                    pos,
                    format!("Invalid number, unexpected digit after 0: {}.", describe_byte(bytes.get(pos).copied())),
                ));
            }
        } else {
            pos = self.read_digits(bytes, pos)?;
        }

        if bytes.get(pos) == Some(&b'.') {
            is_float = true;
            pos += 1;
            pos = self.read_digits(bytes, pos)?;
        }

        if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
            is_float = true;
            pos += 1;
            if matches!(bytes.get(pos), Some(b'+') | Some(b'-')) {
                pos += 1;
            }
            pos = self.read_digits(bytes, pos)?;
        }

        if let Some(&b) = bytes.get(pos) {
            let c = b as char;
            if c == '.' || is_name_start(c) {
                return Err(self.err(pos, format!("Invalid number, expected digit but got: {}.", describe_byte(Some(b)))));
            }
        }

        Ok(Token {
            kind: if is_float { TokenKind::Float } else { TokenKind::Int },
            start,
            end: pos,
            line,
            column,
            value: Some(self.source.body()[start..pos].to_string()),
            block: false,
            prev: None,
            next: None,
        })
    }

    fn read_digits(&self, bytes: &[u8], mut pos: usize) -> Result<usize> {
        let start = pos;
        while matches!(bytes.get(pos), Some(b) if b.is_ascii_digit()) {
            pos += 1;
        }
        if pos == start {
            return Err(self.err(pos, format!("Invalid number, expected digit but got: {}.", describe_byte(bytes.get(pos).copied()))));
        }
        Ok(pos)
    }

    fn read_string(&self, start: usize, line: usize, column: usize) -> Result<Token> {
        let body = self.source.body();
        if body[start..].starts_with("\"\"\"") {
            return self.read_block_string(start, line, column);
        }
        let mut pos = start + 1;
        let mut value = std::string::String::new();
        loop {
            if pos >= body.len() {
                return Err(self.err(pos, "Unterminated string."));
            }
            let c = body[pos..].chars().next().unwrap();
            match c {
                '"' => {
                    pos += 1;
                    break;
                }
                '\n' | '\r' => return Err(self.err(pos, "Unterminated string.")),
                '\\' => {
                    pos += 1;
                    let (decoded, next_pos) = self.read_escape(pos)?;
                    value.push_str(&decoded);
                    pos = next_pos;
                }
                _ if !is_source_character(c) => {
                    return Err(self.err(pos, format!("Invalid character within String: U+{:04X}.", c as u32)));
                }
                _ => {
                    value.push(c);
                    pos += c.len_utf8();
                }
            }
        }
        Ok(Token {
            kind: TokenKind::String,
            start,
            end: pos,
            line,
            column,
            value: Some(value),
            block: false,
            prev: None,
            next: None,
        })
    }

    fn read_escape(&self, pos: usize) -> Result<(std::string::String, usize)> {
        let body = self.source.body();
        let Some(c) = body[pos..].chars().next() else {
            return Err(self.err(pos, "Unterminated string."));
        };
        let simple = match c {
            '"' => Some('"'),
            '\\' => Some('\\'),
            '/' => Some('/'),
            'b' => Some('\u{8}'),
            'f' => Some('\u{c}'),
            'n' => Some('\n'),
            'r' => Some('\r'),
            't' => Some('\t'),
            _ => None,
        };
        if let Some(decoded) = simple {
            return Ok((decoded.to_string(), pos + c.len_utf8()));
        }
        if c == 'u' {
            return self.read_unicode_escape(pos + 1);
        }
        Err(self.err(pos, format!("Invalid character escape sequence: \\{c}.")))
    }

    fn read_unicode_escape(&self, pos: usize) -> Result<(std::string::String, usize)> {
        let body = self.source.body();
        if body[pos..].starts_with('{') {
            let close = body[pos..]
                .find('}')
                .map(|i| pos + i)
                .ok_or_else(|| self.err(pos, "Invalid Unicode escape sequence: unterminated \\u{...}."))?;
            let hex = &body[pos + 1..close];
            if hex.is_empty() || hex.len() > 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(self.err(pos, format!("Invalid Unicode escape sequence: \\u{{{hex}}}.")));
            }
            let value = u32::from_str_radix(hex, 16).unwrap();
            if value > 0x10FFFF || (0xD800..=0xDFFF).contains(&value) {
                return Err(self.err(pos, format!("Invalid Unicode escape sequence: \\u{{{hex}}} is not a valid code point.")));
            }
            let ch = char::from_u32(value).unwrap();
            return Ok((ch.to_string(), close + 1));
        }

        let high = self.read_hex4(pos)?;
        if (0xD800..=0xDBFF).contains(&high) {
            let next_pos = pos + 4;
            if body[next_pos..].starts_with("\\u") {
                if let Ok(low) = self.read_hex4(next_pos + 2) {
                    if (0xDC00..=0xDFFF).contains(&low) {
                        let combined = 0x10000 + (high - 0xD800) * 0x400 + (low - 0xDC00);
                        let ch = char::from_u32(combined).unwrap();
                        return Ok((ch.to_string(), next_pos + 6));
                    }
                }
            }
            return Err(self.err(pos, format!("Invalid Unicode escape sequence: \\u{high:04X} is a lone surrogate.")));
        }
        if (0xDC00..=0xDFFF).contains(&high) {
            return Err(self.err(pos, format!("Invalid Unicode escape sequence: \\u{high:04X} is a lone surrogate.")));
        }
        let ch = char::from_u32(high).ok_or_else(|| self.err(pos, format!("Invalid Unicode escape sequence: \\u{high:04X}.")))?;
        Ok((ch.to_string(), pos + 4))
    }

    fn read_hex4(&self, pos: usize) -> Result<u32> {
        let body = self.source.body();
        let hex = body.get(pos..pos + 4).filter(|s| s.chars().all(|c| c.is_ascii_hexdigit()));
        match hex {
            Some(hex) => Ok(u32::from_str_radix(hex, 16).unwrap()),
            None => Err(self.err(pos, format!("Invalid Unicode escape sequence: \\u{}.", body.get(pos..(pos + 4).min(body.len())).unwrap_or("")))),
        }
    }

    fn read_block_string(&self, start: usize, line: usize, column: usize) -> Result<Token> {
        let body = self.source.body();
        let mut pos = start + 3;
        let mut raw = std::string::String::new();
        loop {
            if pos >= body.len() {
                return Err(self.err(pos, "Unterminated string."));
            }
            if body[pos..].starts_with("\"\"\"") {
                pos += 3;
                break;
            }
            if body[pos..].starts_with("\\\"\"\"") {
                raw.push_str("\"\"\"");
                pos += 4;
                continue;
            }
            let c = body[pos..].chars().next().unwrap();
            if !is_source_character(c) && c != '\n' && c != '\r' {
                return Err(self.err(pos, format!("Invalid character within String: U+{:04X}.", c as u32)));
            }
            raw.push(c);
            pos += c.len_utf8();
        }
        Ok(Token {
            kind: TokenKind::BlockString,
            start,
            end: pos,
            line,
            column,
            value: Some(block_string_value(&raw)),
            block: true,
            prev: None,
            next: None,
        })
    }
}

/// `NAME: [_A-Za-z][_0-9A-Za-z]*` is intentionally ASCII-only.
fn is_name_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

fn is_name_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

fn is_source_character(c: char) -> bool {
    c == '\t' || c == '\n' || c == '\r' || (c as u32) >= 0x20
}

fn single_char_punctuator(c: char) -> Option<TokenKind> {
    use TokenKind::*;
    Some(match c {
        '!' => Bang,
        '$' => Dollar,
        '&' => Amp,
        '(' => ParenL,
        ')' => ParenR,
        ':' => Colon,
        '=' => Equals,
        '@' => At,
        '[' => BracketL,
        ']' => BracketR,
        '{' => BraceL,
        '|' => Pipe,
        '}' => BraceR,
        '?' => Question,
        _ => return None,
    })
}

fn describe_char(c: char) -> std::string::String {
    if c.is_ascii_graphic() || c == ' ' {
        format!("\"{c}\"")
    } else {
        format!("U+{:04X}", c as u32)
    }
}

fn describe_byte(b: Option<u8>) -> std::string::String {
    match b {
        Some(b) => describe_char(b as char),
        None => "<EOF>".to_string(),
    }
}

/// Strips common leading indentation and blank boundary lines from a raw
/// block-string body.
pub fn block_string_value(raw: &str) -> std::string::String {
    let normalized = raw.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = normalized.split('\n').collect();

    let mut common_indent: Option<usize> = None;
    for line in lines.iter().skip(1) {
        let indent = line.len() - line.trim_start_matches([' ', '\t']).len();
        if indent < line.len() {
            common_indent = Some(match common_indent {
                Some(current) => current.min(indent),
                None => indent,
            });
        }
    }

    let mut out_lines: Vec<std::string::String> = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        if i == 0 {
            out_lines.push((*line).to_string());
        } else if let Some(indent) = common_indent {
            out_lines.push(line.get(indent.min(line.len())..).unwrap_or("").to_string());
        } else {
            out_lines.push(std::string::String::new());
        }
    }

    while out_lines.first().is_some_and(|l| l.trim().is_empty()) {
        out_lines.remove(0);
    }
    while out_lines.last().is_some_and(|l| l.trim().is_empty()) {
        out_lines.pop();
    }

    out_lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(input: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(Arc::new(Source::new(input)));
        let mut kinds = Vec::new();
        loop {
            let id = lexer.advance().expect("lex ok");
            let kind = lexer.get(id).kind;
            kinds.push(kind);
            if kind == TokenKind::Eof {
                break;
            }
        }
        kinds
    }

    #[test]
    fn lexes_simple_record() {
        let kinds = lex_all("data Hello = { world: String }");
        use TokenKind::*;
        assert_eq!(
            kinds,
            vec![Name, Name, Equals, BraceL, Name, Colon, Name, BraceR, Eof]
        );
    }

    #[test]
    fn comments_are_skipped_by_advance_but_linked() {
        let mut lexer = Lexer::new(Arc::new(Source::new("# hi\nfoo")));
        let id = lexer.advance().unwrap();
        assert_eq!(lexer.get(id).kind, TokenKind::Name);
        let comment_id = lexer.get(id).prev.unwrap();
        assert_eq!(lexer.get(comment_id).kind, TokenKind::Comment);
        assert_eq!(lexer.get(comment_id).value.as_deref(), Some(" hi"));
    }

    #[test]
    fn token_list_is_well_formed() {
        let mut lexer = Lexer::new(Arc::new(Source::new("a b c")));
        loop {
            let id = lexer.advance().unwrap();
            let tok = lexer.get(id);
            if let Some(prev) = tok.prev {
                assert_eq!(lexer.get(prev).next, Some(id));
            }
            if tok.kind == TokenKind::Eof {
                break;
            }
        }
    }

    #[test]
    fn rejects_leading_zero() {
        let mut lexer = Lexer::new(Arc::new(Source::new("01")));
        assert!(lexer.advance().is_err());
    }

    #[test]
    fn accepts_bare_zero_and_negative_zero() {
        assert_eq!(lex_all("0"), vec![TokenKind::Int, TokenKind::Eof]);
        assert_eq!(lex_all("-0"), vec![TokenKind::Int, TokenKind::Eof]);
    }

    #[test]
    fn rejects_name_start_immediately_after_number() {
        let mut lexer = Lexer::new(Arc::new(Source::new("1x")));
        assert!(lexer.advance().is_err());
    }

    #[test]
    fn rejects_empty_exponent() {
        let mut lexer = Lexer::new(Arc::new(Source::new("1e")));
        assert!(lexer.advance().is_err());
    }

    #[test]
    fn parses_float_forms() {
        assert_eq!(lex_all("1.5"), vec![TokenKind::Float, TokenKind::Eof]);
        assert_eq!(lex_all("1e10"), vec![TokenKind::Float, TokenKind::Eof]);
        assert_eq!(lex_all("1.2e-10"), vec![TokenKind::Float, TokenKind::Eof]);
    }

    #[test]
    fn decodes_simple_string_escapes() {
        let mut lexer = Lexer::new(Arc::new(Source::new(r#""a\nb\"c""#)));
        let id = lexer.advance().unwrap();
        assert_eq!(lexer.get(id).value.as_deref(), Some("a\nb\"c"));
    }

    #[test]
    fn decodes_unicode_escape() {
        let mut lexer = Lexer::new(Arc::new(Source::new(r#""A""#)));
        let id = lexer.advance().unwrap();
        assert_eq!(lexer.get(id).value.as_deref(), Some("A"));
    }

    #[test]
    fn decodes_surrogate_pair_escape() {
        let mut lexer = Lexer::new(Arc::new(Source::new(r#""😀""#)));
        let id = lexer.advance().unwrap();
        assert_eq!(lexer.get(id).value.as_deref(), Some("\u{1f600}"));
    }

    #[test]
    fn rejects_lone_surrogate_escape() {
        let mut lexer = Lexer::new(Arc::new(Source::new(r#""\ud800""#)));
        assert!(lexer.advance().is_err());
    }

    #[test]
    fn decodes_brace_unicode_escape() {
        let mut lexer = Lexer::new(Arc::new(Source::new(r#""\u{1F600}""#)));
        let id = lexer.advance().unwrap();
        assert_eq!(lexer.get(id).value.as_deref(), Some("\u{1f600}"));
    }

    #[test]
    fn rejects_too_large_brace_escape() {
        let mut lexer = Lexer::new(Arc::new(Source::new(r#""\u{110000}""#)));
        assert!(lexer.advance().is_err());
    }

    #[test]
    fn rejects_raw_newline_in_string() {
        let mut lexer = Lexer::new(Arc::new(Source::new("\"a\nb\"")));
        assert!(lexer.advance().is_err());
    }

    #[test]
    fn rejects_unterminated_string() {
        let mut lexer = Lexer::new(Arc::new(Source::new("\"abc")));
        assert!(lexer.advance().is_err());
    }

    #[test]
    fn suggests_double_quote_for_single_quote() {
        let mut lexer = Lexer::new(Arc::new(Source::new("'abc'")));
        let err = lexer.advance().unwrap_err();
        assert!(err.to_string().contains("double quote"));
    }

    #[test]
    fn lexes_block_string_with_dedent() {
        let mut lexer = Lexer::new(Arc::new(Source::new("\"\"\"\n    Hello,\n    world.\n    \"\"\"")));
        let id = lexer.advance().unwrap();
        let tok = lexer.get(id);
        assert_eq!(tok.kind, TokenKind::BlockString);
        assert!(tok.block);
        assert_eq!(tok.value.as_deref(), Some("Hello,\nworld."));
    }

    #[test]
    fn block_string_escape_keeps_triple_quote() {
        let mut lexer = Lexer::new(Arc::new(Source::new(r#""""a \""" b""""#)));
        let id = lexer.advance().unwrap();
        assert_eq!(lexer.get(id).value.as_deref(), Some("a \"\"\" b"));
    }

    #[test]
    fn skips_bom_and_commas() {
        assert_eq!(lex_all("\u{feff}a, b"), vec![TokenKind::Name, TokenKind::Name, TokenKind::Eof]);
    }

    #[test]
    fn spread_requires_three_dots() {
        assert_eq!(lex_all("..."), vec![TokenKind::Spread, TokenKind::Eof]);
        let mut lexer = Lexer::new(Arc::new(Source::new("..")));
        assert!(lexer.advance().is_err());
    }
}
