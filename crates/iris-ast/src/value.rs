//! Lexical value nodes.

use crate::common::NameNode;
use crate::loc::Loc;

#[derive(Debug, Clone)]
pub struct VariableNode {
    pub name: NameNode,
    pub loc: Option<Loc>,
}

#[derive(Debug, Clone)]
pub struct IntValueNode {
    pub value: String,
    pub loc: Option<Loc>,
}

#[derive(Debug, Clone)]
pub struct FloatValueNode {
    pub value: String,
    pub loc: Option<Loc>,
}

#[derive(Debug, Clone)]
pub struct StringValueNode {
    pub value: String,
    pub block: bool,
    pub loc: Option<Loc>,
}

#[derive(Debug, Clone)]
pub struct BooleanValueNode {
    pub value: bool,
    pub loc: Option<Loc>,
}

#[derive(Debug, Clone)]
pub struct NullValueNode {
    pub loc: Option<Loc>,
}

#[derive(Debug, Clone)]
pub struct EnumValueNode {
    pub value: String,
    pub loc: Option<Loc>,
}

#[derive(Debug, Clone)]
pub struct ListValueNode {
    pub values: Vec<Value>,
    pub loc: Option<Loc>,
}

#[derive(Debug, Clone)]
pub struct ObjectFieldNode {
    pub name: NameNode,
    pub value: Value,
    pub loc: Option<Loc>,
}

#[derive(Debug, Clone)]
pub struct ObjectValueNode {
    pub fields: Vec<ObjectFieldNode>,
    pub loc: Option<Loc>,
}

/// Any value literal. `Variable` is the only constructor that makes a value
/// non-const; see [`crate::predicates::is_const_value_node`].
#[derive(Debug, Clone)]
pub enum Value {
    Variable(VariableNode),
    Int(IntValueNode),
    Float(FloatValueNode),
    String(StringValueNode),
    Boolean(BooleanValueNode),
    Null(NullValueNode),
    Enum(EnumValueNode),
    List(ListValueNode),
    Object(ObjectValueNode),
}

impl Value {
    pub fn loc(&self) -> Option<&Loc> {
        match self {
            Value::Variable(n) => n.loc.as_ref(),
            Value::Int(n) => n.loc.as_ref(),
            Value::Float(n) => n.loc.as_ref(),
            Value::String(n) => n.loc.as_ref(),
            Value::Boolean(n) => n.loc.as_ref(),
            Value::Null(n) => n.loc.as_ref(),
            Value::Enum(n) => n.loc.as_ref(),
            Value::List(n) => n.loc.as_ref(),
            Value::Object(n) => n.loc.as_ref(),
        }
    }
}
