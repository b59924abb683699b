//! The closed set of AST node kinds.

/// Stable discriminant for every node kind the parser can produce. Mirrors
/// the source system's `kind` string tag; kept as a plain enum here so
/// `match` over it is exhaustive and the compiler catches missing arms when
/// a new kind is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    Name,
    Variable,
    IntValue,
    FloatValue,
    StringValue,
    BooleanValue,
    NullValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,
    Argument,

    NamedType,
    ListType,
    MaybeType,

    Document,
    DataTypeDefinition,
    ResolverTypeDefinition,
    VariantDefinition,
    FieldDefinition,
    ArgumentDefinition,
    DirectiveDefinition,
    Directive,

    OperationDefinition,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    Field,
    SelectionSet,
    VariableDefinition,
}

impl NodeKind {
    pub fn description(self) -> &'static str {
        use NodeKind::*;
        match self {
            Name => "Name",
            Variable => "Variable",
            IntValue => "IntValue",
            FloatValue => "FloatValue",
            StringValue => "StringValue",
            BooleanValue => "BooleanValue",
            NullValue => "NullValue",
            EnumValue => "EnumValue",
            ListValue => "ListValue",
            ObjectValue => "ObjectValue",
            ObjectField => "ObjectField",
            Argument => "Argument",
            NamedType => "NamedType",
            ListType => "ListType",
            MaybeType => "MaybeType",
            Document => "Document",
            DataTypeDefinition => "DataTypeDefinition",
            ResolverTypeDefinition => "ResolverTypeDefinition",
            VariantDefinition => "VariantDefinition",
            FieldDefinition => "FieldDefinition",
            ArgumentDefinition => "ArgumentDefinition",
            DirectiveDefinition => "DirectiveDefinition",
            Directive => "Directive",
            OperationDefinition => "OperationDefinition",
            FragmentDefinition => "FragmentDefinition",
            FragmentSpread => "FragmentSpread",
            InlineFragment => "InlineFragment",
            Field => "Field",
            SelectionSet => "SelectionSet",
            VariableDefinition => "VariableDefinition",
        }
    }
}
