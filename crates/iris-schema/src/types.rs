//! The type graph: `IrisType`, `IrisTypeDefinition`, `IrisVariant`,
//! `IrisField`, `IrisArgument`.
//!
//! `IrisTypeDefinition::variants` is a `OnceLock`-memoized thunk rather than
//! a plain field so that cyclic type graphs (a variant field referencing its
//! own enclosing type, or a mutually recursive pair of types) can be built
//! without a separate arena/index indirection: every `IrisTypeDefinition` is
//! allocated once behind an `Arc` during the builder's first pass, and the
//! thunk closure captures the already-complete name→`Arc` map, filling in
//! the variant vector lazily on first access.

use std::sync::{Arc, OnceLock};

use iris_ast::{DataTypeDefinitionNode, Loc, ResolverTypeDefinitionNode, TypeRole};

use crate::ordered_map::OrderedMap;

/// Two behaviors a built-in or custom scalar must supply: parsing an AST
/// literal into a host value, and serializing a host value back out.
/// Neither takes a `Schema`, so scalars have no dependency on the builder.
#[derive(Clone, Copy)]
pub struct ScalarBehavior {
    pub parse_literal: fn(&iris_ast::Value) -> Option<serde_json::Value>,
    pub serialize: fn(&serde_json::Value) -> std::result::Result<serde_json::Value, String>,
}

/// What kind of definition an `IrisTypeDefinition` is. Scalars carry their
/// coercion behavior directly; `Data`/`Resolver` carry a role matching the
/// keyword (`data`/`resolver`) the type was declared with.
#[derive(Clone)]
pub enum TypeDefKind {
    Scalar(ScalarBehavior),
    Data,
    Resolver,
}

impl TypeDefKind {
    pub fn role(&self) -> Option<TypeRole> {
        match self {
            TypeDefKind::Data => Some(TypeRole::Data),
            TypeDefKind::Resolver => Some(TypeRole::Resolver),
            TypeDefKind::Scalar(_) => None,
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, TypeDefKind::Scalar(_))
    }
}

/// The AST node a user-defined type was built from, kept for diagnostics
/// (e.g. reporting the definition site of a duplicate type).
#[derive(Clone)]
pub enum TypeDefAstNode {
    Data(Arc<DataTypeDefinitionNode>),
    Resolver(Arc<ResolverTypeDefinitionNode>),
}

pub struct IrisTypeDefinition {
    pub name: String,
    pub description: Option<String>,
    pub kind: TypeDefKind,
    pub ast_node: Option<TypeDefAstNode>,
    variants: OnceLock<Vec<IrisVariant>>,
}

impl IrisTypeDefinition {
    pub fn new_scalar(name: impl Into<String>, behavior: ScalarBehavior) -> Self {
        Self {
            name: name.into(),
            description: None,
            kind: TypeDefKind::Scalar(behavior),
            ast_node: None,
            variants: OnceLock::new(),
        }
    }

    pub fn new_placeholder(name: impl Into<String>, description: Option<String>, role: TypeRole, ast_node: TypeDefAstNode) -> Self {
        Self {
            name: name.into(),
            description,
            kind: match role {
                TypeRole::Data => TypeDefKind::Data,
                TypeRole::Resolver => TypeDefKind::Resolver,
            },
            ast_node: Some(ast_node),
            variants: OnceLock::new(),
        }
    }

    /// Like `new_placeholder`, but for the fixed introspection types, which
    /// have no backing SDL definition to keep around for diagnostics.
    pub fn new_introspection(name: impl Into<String>, role: TypeRole) -> Self {
        Self {
            name: name.into(),
            description: None,
            kind: match role {
                TypeRole::Data => TypeDefKind::Data,
                TypeRole::Resolver => TypeDefKind::Resolver,
            },
            ast_node: None,
            variants: OnceLock::new(),
        }
    }

    /// Returns the memoized variant list, computing it on first access via
    /// `init`. `init` is only ever invoked once even if called from
    /// multiple threads sharing this `Arc`, matching the "at-most-once"
    /// memoization the concurrency model requires.
    pub fn variants_or_init(&self, init: impl FnOnce() -> Vec<IrisVariant>) -> &[IrisVariant] {
        self.variants.get_or_init(init)
    }

    /// The memoized variants, or `None` if never populated (scalars, or a
    /// definition whose thunk has not yet run).
    pub fn variants(&self) -> Option<&[IrisVariant]> {
        self.variants.get().map(|v| v.as_slice())
    }

    /// True if this is a "record" type: exactly one variant whose name
    /// equals the type's own name (the `data Name = { ... }` shorthand).
    pub fn is_record(&self) -> bool {
        match self.variants() {
            Some([single]) => single.name == self.name && matches!(single.shape, VariantShape::Record(_)),
            _ => false,
        }
    }

    /// The single variant's field map, if this is a record type.
    pub fn record_fields(&self) -> Option<&OrderedMap<IrisField>> {
        match self.variants()? {
            [single] if single.name == self.name => match &single.shape {
                VariantShape::Record(fields) => Some(fields),
                VariantShape::Subtype(_) => None,
            },
            _ => None,
        }
    }

    pub fn find_variant(&self, name: &str) -> Option<&IrisVariant> {
        self.variants().and_then(|vs| vs.iter().find(|v| v.name == name))
    }

    /// Populates the variant thunk directly. Used only by the schema
    /// builder, which already knows variants are computed exactly once per
    /// definition; `variants_or_init` remains the entry point for any other
    /// caller that wants lazy, concurrency-safe first-access semantics.
    pub(crate) fn set_variants(&self, variants: Vec<IrisVariant>) {
        let _ = self.variants.set(variants);
    }
}

impl std::fmt::Debug for IrisTypeDefinition {
    /// Deliberately shallow: the full structure is cyclic (a variant field
    /// can reference the enclosing type, directly or through another type),
    /// so a derived recursive `Debug` would not terminate.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IrisTypeDefinition")
            .field("name", &self.name)
            .field("kind", &match &self.kind {
                TypeDefKind::Scalar(_) => "Scalar",
                TypeDefKind::Data => "Data",
                TypeDefKind::Resolver => "Resolver",
            })
            .finish()
    }
}

/// Whether a variant carries its own field set or is a bare reference to
/// another named type (the "subtype" case inside a union).
#[derive(Clone)]
pub enum VariantShape {
    Record(OrderedMap<IrisField>),
    Subtype(IrisType),
}

#[derive(Clone)]
pub struct IrisVariant {
    pub name: String,
    pub description: Option<String>,
    pub deprecation_reason: Option<String>,
    pub shape: VariantShape,
}

#[derive(Clone)]
pub struct IrisField {
    pub name: String,
    pub description: Option<String>,
    pub deprecation_reason: Option<String>,
    pub ty: IrisType,
    /// Only ever non-empty when the enclosing type has `role = Resolver`.
    pub args: Vec<IrisArgument>,
    /// The defining `FieldDefinitionNode`'s span, kept so a post-build
    /// validator (which only has the `Schema`, not the AST) can still point
    /// a diagnostic at the field's declaration site. `None` for
    /// introspection fields and anything built with `no_location`.
    pub loc: Option<Loc>,
}

#[derive(Clone)]
pub struct IrisArgument {
    pub name: String,
    pub description: Option<String>,
    pub ty: IrisType,
    pub default_value: Option<serde_json::Value>,
    pub deprecation_reason: Option<String>,
    pub loc: Option<Loc>,
}

/// A resolved type reference: a named definition, or a `List`/`Maybe`
/// wrapper around one. Mirrors `NamedType`/`ListType`/`MaybeType` in the AST
/// but points at the built `IrisTypeDefinition` rather than a bare name.
#[derive(Clone)]
pub enum IrisType {
    Named(Arc<IrisTypeDefinition>),
    List(Box<IrisType>),
    Maybe(Box<IrisType>),
}

impl IrisType {
    pub fn is_maybe(&self) -> bool {
        matches!(self, IrisType::Maybe(_))
    }

    /// Peels `List`/`Maybe` wrappers to the innermost named definition.
    pub fn named(&self) -> &Arc<IrisTypeDefinition> {
        match self {
            IrisType::Named(def) => def,
            IrisType::List(inner) | IrisType::Maybe(inner) => inner.named(),
        }
    }

    /// Wraps `self` in `Maybe` unless it already is one (used when a
    /// position is optional and the inner type is required).
    pub fn into_maybe(self) -> IrisType {
        if self.is_maybe() {
            self
        } else {
            IrisType::Maybe(Box::new(self))
        }
    }
}

impl std::fmt::Debug for IrisType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IrisType::Named(def) => write!(f, "{}", def.name),
            IrisType::List(inner) => write!(f, "[{inner:?}]"),
            IrisType::Maybe(inner) => write!(f, "{inner:?}?"),
        }
    }
}
