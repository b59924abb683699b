//! Executable-document nodes: parsed, visited, and
//! validated, but consumed by the out-of-scope external executor, not by the
//! type system itself.

use crate::common::{ArgumentNode, DirectiveNode, NameNode};
use crate::loc::Loc;
use crate::ty::TypeRef;
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

#[derive(Debug, Clone)]
pub struct VariableDefinitionNode {
    pub variable: crate::value::VariableNode,
    pub ty: TypeRef,
    pub default_value: Option<Value>,
    pub directives: Vec<DirectiveNode>,
    pub loc: Option<Loc>,
}

#[derive(Debug, Clone)]
pub struct FieldNode {
    pub alias: Option<NameNode>,
    pub name: NameNode,
    pub arguments: Vec<ArgumentNode>,
    pub directives: Vec<DirectiveNode>,
    pub selection_set: Option<SelectionSetNode>,
    pub loc: Option<Loc>,
}

#[derive(Debug, Clone)]
pub struct FragmentSpreadNode {
    pub name: NameNode,
    pub directives: Vec<DirectiveNode>,
    pub loc: Option<Loc>,
}

#[derive(Debug, Clone)]
pub struct InlineFragmentNode {
    pub type_condition: Option<crate::ty::NamedTypeNode>,
    pub directives: Vec<DirectiveNode>,
    pub selection_set: SelectionSetNode,
    pub loc: Option<Loc>,
}

#[derive(Debug, Clone)]
pub enum Selection {
    Field(FieldNode),
    FragmentSpread(FragmentSpreadNode),
    InlineFragment(InlineFragmentNode),
}

#[derive(Debug, Clone)]
pub struct SelectionSetNode {
    pub selections: Vec<Selection>,
    pub loc: Option<Loc>,
}

#[derive(Debug, Clone)]
pub struct OperationDefinitionNode {
    pub operation: OperationType,
    pub name: Option<NameNode>,
    pub variable_definitions: Vec<VariableDefinitionNode>,
    pub directives: Vec<DirectiveNode>,
    pub selection_set: SelectionSetNode,
    pub loc: Option<Loc>,
}

#[derive(Debug, Clone)]
pub struct FragmentDefinitionNode {
    pub name: NameNode,
    pub type_condition: crate::ty::NamedTypeNode,
    pub directives: Vec<DirectiveNode>,
    pub selection_set: SelectionSetNode,
    pub loc: Option<Loc>,
}
