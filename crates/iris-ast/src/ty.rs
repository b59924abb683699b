//! Type reference nodes. Iris has no `NonNullType`:
//! optionality is spelled with the `MaybeType` wrapper (`T?`), and absence of
//! the wrapper means required.

use crate::common::NameNode;
use crate::loc::Loc;

#[derive(Debug, Clone)]
pub struct NamedTypeNode {
    pub name: NameNode,
    pub loc: Option<Loc>,
}

#[derive(Debug, Clone)]
pub struct ListTypeNode {
    pub ty: Box<TypeRef>,
    pub loc: Option<Loc>,
}

#[derive(Debug, Clone)]
pub struct MaybeTypeNode {
    pub ty: Box<TypeRef>,
    pub loc: Option<Loc>,
}

#[derive(Debug, Clone)]
pub enum TypeRef {
    Named(NamedTypeNode),
    List(ListTypeNode),
    Maybe(MaybeTypeNode),
}

impl TypeRef {
    pub fn loc(&self) -> Option<&Loc> {
        match self {
            TypeRef::Named(n) => n.loc.as_ref(),
            TypeRef::List(n) => n.loc.as_ref(),
            TypeRef::Maybe(n) => n.loc.as_ref(),
        }
    }

    /// The innermost named type, peeling off `List`/`Maybe` wrappers.
    pub fn named(&self) -> &NamedTypeNode {
        match self {
            TypeRef::Named(n) => n,
            TypeRef::List(n) => n.ty.named(),
            TypeRef::Maybe(n) => n.ty.named(),
        }
    }

    pub fn is_maybe(&self) -> bool {
        matches!(self, TypeRef::Maybe(_))
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeRef::Named(n) => write!(f, "{}", n.name.value),
            TypeRef::List(n) => write!(f, "[{}]", n.ty),
            TypeRef::Maybe(n) => write!(f, "{}?", n.ty),
        }
    }
}
