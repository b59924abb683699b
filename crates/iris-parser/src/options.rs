//! Parse-time configuration.

/// `no_location` skips attaching [`iris_ast::Loc`] to every node, which the
/// source system recommends for throwaway parses (e.g. re-parsing a printed
/// AST just to diff it) where the extra bookkeeping isn't worth it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    pub no_location: bool,
}
