//! Nodes shared between the type-system and executable grammars.

use crate::loc::Loc;
use crate::value::Value;

#[derive(Debug, Clone)]
pub struct NameNode {
    pub value: String,
    pub loc: Option<Loc>,
}

impl NameNode {
    /// A copy of this name detached from its source location, for reuse at a
    /// different syntactic position (e.g. synthesizing a record variant's
    /// name from its enclosing type name).
    pub fn clone_shallow(&self) -> Self {
        NameNode { value: self.value.clone(), loc: None }
    }
}

/// `name: value`, used both for directive arguments and field arguments in
/// selection sets.
#[derive(Debug, Clone)]
pub struct ArgumentNode {
    pub name: NameNode,
    pub value: Value,
    pub loc: Option<Loc>,
}

/// A directive *occurrence* (`@name(args...)`), as opposed to a
/// `DirectiveDefinitionNode` which declares one.
#[derive(Debug, Clone)]
pub struct DirectiveNode {
    pub name: NameNode,
    pub arguments: Vec<ArgumentNode>,
    pub loc: Option<Loc>,
}
