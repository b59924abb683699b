//! A borrowing, kind-tagged view over every concrete node type, and the
//! static child table that drives the generic visitor: each kind maps to
//! the ordered list of attribute names that contain child nodes.
//!
//! Real production ASTs (e.g. `rustc_ast`) keep each node strongly typed and
//! give up a single walkable supertype; here the spec asks for exactly that
//! supertype; so `NodeRef` exists purely as the visitor's substrate; typed
//! code (the parser, schema builder, value coercion) never touches it and
//! works with the concrete structs/enums directly.

use crate::common::{ArgumentNode, DirectiveNode, NameNode};
use crate::definition::*;
use crate::executable::*;
use crate::kind::NodeKind;
use crate::loc::Loc;
use crate::ty::{ListTypeNode, MaybeTypeNode, NamedTypeNode, TypeRef};
use crate::value::*;

#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Name(&'a NameNode),
    Variable(&'a VariableNode),
    Int(&'a IntValueNode),
    Float(&'a FloatValueNode),
    String(&'a StringValueNode),
    Boolean(&'a BooleanValueNode),
    Null(&'a NullValueNode),
    Enum(&'a EnumValueNode),
    List(&'a ListValueNode),
    Object(&'a ObjectValueNode),
    ObjectField(&'a ObjectFieldNode),
    Argument(&'a ArgumentNode),
    NamedType(&'a NamedTypeNode),
    ListType(&'a ListTypeNode),
    MaybeType(&'a MaybeTypeNode),
    Document(&'a DocumentNode),
    DataType(&'a DataTypeDefinitionNode),
    ResolverType(&'a ResolverTypeDefinitionNode),
    Variant(&'a VariantDefinitionNode),
    FieldDef(&'a FieldDefinitionNode),
    ArgumentDef(&'a ArgumentDefinitionNode),
    DirectiveDef(&'a DirectiveDefinitionNode),
    Directive(&'a DirectiveNode),
    Operation(&'a OperationDefinitionNode),
    Fragment(&'a FragmentDefinitionNode),
    FragmentSpread(&'a FragmentSpreadNode),
    InlineFragment(&'a InlineFragmentNode),
    Field(&'a FieldNode),
    SelectionSet(&'a SelectionSetNode),
    VariableDefinition(&'a VariableDefinitionNode),
}

impl<'a> NodeRef<'a> {
    pub fn from_value(value: &'a Value) -> Self {
        match value {
            Value::Variable(n) => NodeRef::Variable(n),
            Value::Int(n) => NodeRef::Int(n),
            Value::Float(n) => NodeRef::Float(n),
            Value::String(n) => NodeRef::String(n),
            Value::Boolean(n) => NodeRef::Boolean(n),
            Value::Null(n) => NodeRef::Null(n),
            Value::Enum(n) => NodeRef::Enum(n),
            Value::List(n) => NodeRef::List(n),
            Value::Object(n) => NodeRef::Object(n),
        }
    }

    pub fn from_type(ty: &'a TypeRef) -> Self {
        match ty {
            TypeRef::Named(n) => NodeRef::NamedType(n),
            TypeRef::List(n) => NodeRef::ListType(n),
            TypeRef::Maybe(n) => NodeRef::MaybeType(n),
        }
    }

    pub fn from_definition(def: &'a Definition) -> Self {
        match def {
            Definition::DataType(n) => NodeRef::DataType(n),
            Definition::ResolverType(n) => NodeRef::ResolverType(n),
            Definition::Directive(n) => NodeRef::DirectiveDef(n),
            Definition::Operation(n) => NodeRef::Operation(n),
            Definition::Fragment(n) => NodeRef::Fragment(n),
        }
    }

    pub fn from_selection(sel: &'a Selection) -> Self {
        match sel {
            Selection::Field(n) => NodeRef::Field(n),
            Selection::FragmentSpread(n) => NodeRef::FragmentSpread(n),
            Selection::InlineFragment(n) => NodeRef::InlineFragment(n),
        }
    }

    pub fn kind(&self) -> NodeKind {
        use NodeRef::*;
        match self {
            Name(_) => NodeKind::Name,
            Variable(_) => NodeKind::Variable,
            Int(_) => NodeKind::IntValue,
            Float(_) => NodeKind::FloatValue,
            String(_) => NodeKind::StringValue,
            Boolean(_) => NodeKind::BooleanValue,
            Null(_) => NodeKind::NullValue,
            Enum(_) => NodeKind::EnumValue,
            List(_) => NodeKind::ListValue,
            Object(_) => NodeKind::ObjectValue,
            ObjectField(_) => NodeKind::ObjectField,
            Argument(_) => NodeKind::Argument,
            NamedType(_) => NodeKind::NamedType,
            ListType(_) => NodeKind::ListType,
            MaybeType(_) => NodeKind::MaybeType,
            Document(_) => NodeKind::Document,
            DataType(_) => NodeKind::DataTypeDefinition,
            ResolverType(_) => NodeKind::ResolverTypeDefinition,
            Variant(_) => NodeKind::VariantDefinition,
            FieldDef(_) => NodeKind::FieldDefinition,
            ArgumentDef(_) => NodeKind::ArgumentDefinition,
            DirectiveDef(_) => NodeKind::DirectiveDefinition,
            Directive(_) => NodeKind::Directive,
            Operation(_) => NodeKind::OperationDefinition,
            Fragment(_) => NodeKind::FragmentDefinition,
            FragmentSpread(_) => NodeKind::FragmentSpread,
            InlineFragment(_) => NodeKind::InlineFragment,
            Field(_) => NodeKind::Field,
            SelectionSet(_) => NodeKind::SelectionSet,
            VariableDefinition(_) => NodeKind::VariableDefinition,
        }
    }

    pub fn loc(&self) -> Option<&'a Loc> {
        use NodeRef::*;
        match self {
            Name(n) => n.loc.as_ref(),
            Variable(n) => n.loc.as_ref(),
            Int(n) => n.loc.as_ref(),
            Float(n) => n.loc.as_ref(),
            String(n) => n.loc.as_ref(),
            Boolean(n) => n.loc.as_ref(),
            Null(n) => n.loc.as_ref(),
            Enum(n) => n.loc.as_ref(),
            List(n) => n.loc.as_ref(),
            Object(n) => n.loc.as_ref(),
            ObjectField(n) => n.loc.as_ref(),
            Argument(n) => n.loc.as_ref(),
            NamedType(n) => n.loc.as_ref(),
            ListType(n) => n.loc.as_ref(),
            MaybeType(n) => n.loc.as_ref(),
            Document(n) => n.loc.as_ref(),
            DataType(n) => n.loc.as_ref(),
            ResolverType(n) => n.loc.as_ref(),
            Variant(n) => n.loc.as_ref(),
            FieldDef(n) => n.loc.as_ref(),
            ArgumentDef(n) => n.loc.as_ref(),
            DirectiveDef(n) => n.loc.as_ref(),
            Directive(n) => n.loc.as_ref(),
            Operation(n) => n.loc.as_ref(),
            Fragment(n) => n.loc.as_ref(),
            FragmentSpread(n) => n.loc.as_ref(),
            InlineFragment(n) => n.loc.as_ref(),
            Field(n) => n.loc.as_ref(),
            SelectionSet(n) => n.loc.as_ref(),
            VariableDefinition(n) => n.loc.as_ref(),
        }
    }

    /// The ordered child nodes for this node's kind, per the static
    /// child-key table.
    pub fn children(&self) -> Vec<NodeRef<'a>> {
        use NodeRef::*;
        match self {
            Name(_) | Int(_) | Float(_) | Boolean(_) | Null(_) | Enum(_) => vec![],
            Variable(n) => vec![Name(&n.name)],
            String(_) => vec![],
            List(n) => n.values.iter().map(NodeRef::from_value).collect(),
            Object(n) => n.fields.iter().map(ObjectField).collect(),
            ObjectField(n) => vec![Name(&n.name), NodeRef::from_value(&n.value)],
            Argument(n) => vec![Name(&n.name), NodeRef::from_value(&n.value)],
            NamedType(n) => vec![Name(&n.name)],
            ListType(n) => vec![NodeRef::from_type(&n.ty)],
            MaybeType(n) => vec![NodeRef::from_type(&n.ty)],
            Document(n) => n.definitions.iter().map(NodeRef::from_definition).collect(),
            DataType(n) => {
                let mut kids = vec![Name(&n.name)];
                kids.extend(n.directives.iter().map(Directive));
                kids.extend(n.variants.iter().map(Variant));
                kids
            }
            ResolverType(n) => {
                let mut kids = vec![Name(&n.name)];
                kids.extend(n.directives.iter().map(Directive));
                kids.extend(n.variants.iter().map(Variant));
                kids
            }
            Variant(n) => {
                let mut kids = vec![Name(&n.name)];
                kids.extend(n.directives.iter().map(Directive));
                if let Some(fields) = &n.fields {
                    kids.extend(fields.iter().map(FieldDef));
                }
                kids
            }
            FieldDef(n) => {
                let mut kids = vec![Name(&n.name)];
                kids.extend(n.arguments.iter().map(ArgumentDef));
                kids.push(NodeRef::from_type(&n.ty));
                kids.extend(n.directives.iter().map(Directive));
                kids
            }
            ArgumentDef(n) => {
                let mut kids = vec![Name(&n.name), NodeRef::from_type(&n.ty)];
                if let Some(v) = &n.default_value {
                    kids.push(NodeRef::from_value(v));
                }
                kids.extend(n.directives.iter().map(Directive));
                kids
            }
            DirectiveDef(n) => {
                let mut kids = vec![Name(&n.name)];
                kids.extend(n.arguments.iter().map(ArgumentDef));
                kids
            }
            Directive(n) => {
                let mut kids = vec![Name(&n.name)];
                kids.extend(n.arguments.iter().map(Argument));
                kids
            }
            Operation(n) => {
                let mut kids = vec![];
                if let Some(name) = &n.name {
                    kids.push(Name(name));
                }
                kids.extend(n.variable_definitions.iter().map(VariableDefinition));
                kids.extend(n.directives.iter().map(Directive));
                kids.push(SelectionSet(&n.selection_set));
                kids
            }
            Fragment(n) => {
                let mut kids = vec![Name(&n.name), NamedType(&n.type_condition)];
                kids.extend(n.directives.iter().map(Directive));
                kids.push(SelectionSet(&n.selection_set));
                kids
            }
            FragmentSpread(n) => {
                let mut kids = vec![Name(&n.name)];
                kids.extend(n.directives.iter().map(Directive));
                kids
            }
            InlineFragment(n) => {
                let mut kids = vec![];
                if let Some(tc) = &n.type_condition {
                    kids.push(NamedType(tc));
                }
                kids.extend(n.directives.iter().map(Directive));
                kids.push(SelectionSet(&n.selection_set));
                kids
            }
            Field(n) => {
                let mut kids = vec![];
                if let Some(alias) = &n.alias {
                    kids.push(Name(alias));
                }
                kids.push(Name(&n.name));
                kids.extend(n.arguments.iter().map(Argument));
                kids.extend(n.directives.iter().map(Directive));
                if let Some(ss) = &n.selection_set {
                    kids.push(SelectionSet(ss));
                }
                kids
            }
            SelectionSet(n) => n.selections.iter().map(NodeRef::from_selection).collect(),
            VariableDefinition(n) => {
                let mut kids = vec![Variable(&n.variable), NodeRef::from_type(&n.ty)];
                if let Some(v) = &n.default_value {
                    kids.push(NodeRef::from_value(v));
                }
                kids.extend(n.directives.iter().map(Directive));
                kids
            }
        }
    }
}
