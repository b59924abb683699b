//! AST node kinds, predicates, and the generic visitor.

mod common;
mod definition;
mod executable;
mod kind;
mod loc;
mod node;
mod predicates;
mod ty;
mod value;
mod visitor;

pub use common::{ArgumentNode, DirectiveNode, NameNode};
pub use definition::{
    ArgumentDefinitionNode, DataTypeDefinitionNode, Definition, DirectiveDefinitionNode,
    DirectiveLocation, DocumentNode, FieldDefinitionNode, ResolverTypeDefinitionNode, TypeRole,
    VariantDefinitionNode,
};
pub use executable::{
    FieldNode, FragmentDefinitionNode, FragmentSpreadNode, InlineFragmentNode, OperationDefinitionNode,
    OperationType, Selection, SelectionSetNode, VariableDefinitionNode,
};
pub use kind::NodeKind;
pub use loc::Loc;
pub use node::NodeRef;
pub use predicates::{
    is_const_value_node, is_definition_node, is_executable_definition_node, is_selection_node,
    is_type_definition_node, is_type_node, is_type_system_definition_node, is_value_node,
};
pub use ty::{ListTypeNode, MaybeTypeNode, NamedTypeNode, TypeRef};
pub use value::{
    BooleanValueNode, EnumValueNode, FloatValueNode, IntValueNode, ListValueNode, NullValueNode,
    ObjectFieldNode, ObjectValueNode, StringValueNode, Value, VariableNode,
};
pub use visitor::{visit, Break, ParallelVisitor, VisitAction, Visitor};
