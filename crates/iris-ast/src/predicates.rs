//! Node classification.

use crate::kind::NodeKind;
use crate::value::Value;

pub fn is_definition_node(kind: NodeKind) -> bool {
    is_type_system_definition_node(kind) || is_executable_definition_node(kind)
}

pub fn is_executable_definition_node(kind: NodeKind) -> bool {
    matches!(kind, NodeKind::OperationDefinition | NodeKind::FragmentDefinition)
}

pub fn is_type_system_definition_node(kind: NodeKind) -> bool {
    is_type_definition_node(kind) || matches!(kind, NodeKind::DirectiveDefinition)
}

pub fn is_type_definition_node(kind: NodeKind) -> bool {
    matches!(kind, NodeKind::DataTypeDefinition | NodeKind::ResolverTypeDefinition)
}

pub fn is_selection_node(kind: NodeKind) -> bool {
    matches!(kind, NodeKind::Field | NodeKind::FragmentSpread | NodeKind::InlineFragment)
}

pub fn is_value_node(kind: NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::Variable
            | NodeKind::IntValue
            | NodeKind::FloatValue
            | NodeKind::StringValue
            | NodeKind::BooleanValue
            | NodeKind::NullValue
            | NodeKind::EnumValue
            | NodeKind::ListValue
            | NodeKind::ObjectValue
    )
}

pub fn is_type_node(kind: NodeKind) -> bool {
    matches!(kind, NodeKind::NamedType | NodeKind::ListType | NodeKind::MaybeType)
}

/// A `List`/`Object` value is const iff every child it (recursively)
/// contains is const; a bare `Variable` is never const.
pub fn is_const_value_node(value: &Value) -> bool {
    match value {
        Value::Variable(_) => false,
        Value::Int(_)
        | Value::Float(_)
        | Value::String(_)
        | Value::Boolean(_)
        | Value::Null(_)
        | Value::Enum(_) => true,
        Value::List(n) => n.values.iter().all(is_const_value_node),
        Value::Object(n) => n.fields.iter().all(|f| is_const_value_node(&f.value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{IntValueNode, ListValueNode, VariableNode};
    use crate::common::NameNode;

    #[test]
    fn list_of_scalars_is_const() {
        let v = Value::List(ListValueNode {
            values: vec![Value::Int(IntValueNode { value: "1".into(), loc: None })],
            loc: None,
        });
        assert!(is_const_value_node(&v));
    }

    #[test]
    fn list_containing_variable_is_not_const() {
        let v = Value::List(ListValueNode {
            values: vec![Value::Variable(VariableNode {
                name: NameNode { value: "x".into(), loc: None },
                loc: None,
            })],
            loc: None,
        });
        assert!(!is_const_value_node(&v));
    }
}
