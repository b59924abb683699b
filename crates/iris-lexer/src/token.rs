//! Token kinds and the doubly linked token stream.

/// Index of a [`Token`] inside a [`crate::Lexer`]'s token arena. Stands in
/// for the source system's pointer-chasing doubly linked list: cheap to
/// copy, and the `prev`/`next` invariants are exercised the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenId(pub(crate) usize);

impl TokenId {
    pub fn raw(self) -> usize {
        self.0
    }

    /// The id of the `Sof` token every [`crate::Lexer`] seeds its arena with.
    pub fn default_sof() -> Self {
        TokenId(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Sof,
    Eof,
    Name,
    Int,
    Float,
    String,
    BlockString,
    Comment,
    Bang,
    Dollar,
    Amp,
    ParenL,
    ParenR,
    Spread,
    Colon,
    Equals,
    At,
    BracketL,
    BracketR,
    BraceL,
    Pipe,
    BraceR,
    /// Required by the `TypeRef '?'` grammar for `MaybeType` — Iris's
    /// optionality marker has to lex as something. See DESIGN.md.
    Question,
}

impl TokenKind {
    /// The quoted punctuator text, or `None` for non-punctuator kinds.
    pub fn punctuator(self) -> Option<&'static str> {
        use TokenKind::*;
        Some(match self {
            Bang => "!",
            Dollar => "$",
            Amp => "&",
            ParenL => "(",
            ParenR => ")",
            Spread => "...",
            Colon => ":",
            Equals => "=",
            At => "@",
            BracketL => "[",
            BracketR => "]",
            BraceL => "{",
            Pipe => "|",
            BraceR => "}",
            Question => "?",
            _ => return None,
        })
    }

    pub fn description(self) -> &'static str {
        use TokenKind::*;
        match self {
            Sof => "<SOF>",
            Eof => "<EOF>",
            Name => "Name",
            Int => "Int",
            Float => "Float",
            String => "String",
            BlockString => "BlockString",
            Comment => "Comment",
            other => other.punctuator().unwrap_or("Token"),
        }
    }
}

/// A single lexical token. `value` carries the decoded payload for `Name`,
/// numeric, and string kinds; punctuators and `Sof`/`Eof` leave it empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
    pub value: Option<String>,
    /// Only meaningful for `String`/`BlockString`: whether the literal used
    /// triple-quote block-string syntax.
    pub block: bool,
    pub prev: Option<TokenId>,
    pub next: Option<TokenId>,
}

impl Token {
    pub fn desc(&self) -> std::string::String {
        match self.kind {
            TokenKind::Name | TokenKind::Int | TokenKind::Float => {
                format!("{} \"{}\"", self.kind.description(), self.value.as_deref().unwrap_or(""))
            }
            TokenKind::String | TokenKind::BlockString => "String".to_string(),
            _ => self.kind.description().to_string(),
        }
    }
}
