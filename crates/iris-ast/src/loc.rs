//! Node source spans.

use std::sync::Arc;

use iris_lexer::{Source, TokenId};

/// A node's span over the token stream it was parsed from. `start`/`end` are
/// [`TokenId`]s rather than byte offsets because the spec ties a node's loc
/// to the tokens that opened/closed it, not just a byte range; byte offsets
/// for diagnostics are derived from `start`/`end` plus `source` on demand.
#[derive(Debug, Clone)]
pub struct Loc {
    pub start: TokenId,
    pub end: TokenId,
    pub start_offset: usize,
    pub end_offset: usize,
    pub source: Arc<Source>,
}

impl Loc {
    pub fn new(start: TokenId, start_offset: usize, end: TokenId, end_offset: usize, source: Arc<Source>) -> Self {
        Self { start, end, start_offset, end_offset, source }
    }
}

impl PartialEq for Loc {
    fn eq(&self, other: &Self) -> bool {
        self.start_offset == other.start_offset && self.end_offset == other.end_offset
    }
}
