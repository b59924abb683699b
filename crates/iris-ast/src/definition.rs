//! Type-system definition nodes.

use crate::common::{DirectiveNode, NameNode};
use crate::executable::{FragmentDefinitionNode, OperationDefinitionNode};
use crate::loc::Loc;
use crate::ty::TypeRef;
use crate::value::{StringValueNode, Value};

/// Whether a type definition was introduced with `data` or `resolver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeRole {
    Data,
    Resolver,
}

#[derive(Debug, Clone)]
pub struct ArgumentDefinitionNode {
    pub description: Option<StringValueNode>,
    pub name: NameNode,
    pub ty: TypeRef,
    pub default_value: Option<Value>,
    pub directives: Vec<DirectiveNode>,
    pub loc: Option<Loc>,
}

#[derive(Debug, Clone)]
pub struct FieldDefinitionNode {
    pub description: Option<StringValueNode>,
    pub name: NameNode,
    /// Populated only when the enclosing type has `role = Resolver` (spec §3
    /// `IrisField<role>`: `args` only for resolver fields).
    pub arguments: Vec<ArgumentDefinitionNode>,
    pub ty: TypeRef,
    pub directives: Vec<DirectiveNode>,
    pub loc: Option<Loc>,
}

/// `name directives? ('{' fieldDef* '}')?`. A variant with no `recordBody`
/// is a bare reference to another named type.
#[derive(Debug, Clone)]
pub struct VariantDefinitionNode {
    pub description: Option<StringValueNode>,
    pub name: NameNode,
    pub directives: Vec<DirectiveNode>,
    pub fields: Option<Vec<FieldDefinitionNode>>,
    pub loc: Option<Loc>,
}

#[derive(Debug, Clone)]
pub struct DataTypeDefinitionNode {
    pub description: Option<StringValueNode>,
    pub name: NameNode,
    pub directives: Vec<DirectiveNode>,
    pub variants: Vec<VariantDefinitionNode>,
    pub loc: Option<Loc>,
}

#[derive(Debug, Clone)]
pub struct ResolverTypeDefinitionNode {
    pub description: Option<StringValueNode>,
    pub name: NameNode,
    pub directives: Vec<DirectiveNode>,
    pub variants: Vec<VariantDefinitionNode>,
    pub loc: Option<Loc>,
}

/// Closed set of `on` locations a `directive` definition may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    pub fn from_name(name: &str) -> Option<Self> {
        use DirectiveLocation::*;
        Some(match name {
            "QUERY" => Query,
            "MUTATION" => Mutation,
            "SUBSCRIPTION" => Subscription,
            "FIELD" => Field,
            "FRAGMENT_DEFINITION" => FragmentDefinition,
            "FRAGMENT_SPREAD" => FragmentSpread,
            "INLINE_FRAGMENT" => InlineFragment,
            "VARIABLE_DEFINITION" => VariableDefinition,
            "SCHEMA" => Schema,
            "SCALAR" => Scalar,
            "OBJECT" => Object,
            "FIELD_DEFINITION" => FieldDefinition,
            "ARGUMENT_DEFINITION" => ArgumentDefinition,
            "INTERFACE" => Interface,
            "UNION" => Union,
            "ENUM" => Enum,
            "ENUM_VALUE" => EnumValue,
            "INPUT_OBJECT" => InputObject,
            "INPUT_FIELD_DEFINITION" => InputFieldDefinition,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone)]
pub struct DirectiveDefinitionNode {
    pub description: Option<StringValueNode>,
    pub name: NameNode,
    pub arguments: Vec<ArgumentDefinitionNode>,
    pub repeatable: bool,
    pub locations: Vec<DirectiveLocation>,
    pub loc: Option<Loc>,
}

/// Any top-level definition. Type-system and executable definitions share
/// one enum because the parser's `Document` can contain both (spec §9 Open
/// Questions: executable parsing is "in scope for parser, out of scope for
/// the type system").
#[derive(Debug, Clone)]
pub enum Definition {
    DataType(DataTypeDefinitionNode),
    ResolverType(ResolverTypeDefinitionNode),
    Directive(DirectiveDefinitionNode),
    Operation(OperationDefinitionNode),
    Fragment(FragmentDefinitionNode),
}

impl Definition {
    pub fn loc(&self) -> Option<&Loc> {
        match self {
            Definition::DataType(n) => n.loc.as_ref(),
            Definition::ResolverType(n) => n.loc.as_ref(),
            Definition::Directive(n) => n.loc.as_ref(),
            Definition::Operation(n) => n.loc.as_ref(),
            Definition::Fragment(n) => n.loc.as_ref(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DocumentNode {
    pub definitions: Vec<Definition>,
    pub loc: Option<Loc>,
}
