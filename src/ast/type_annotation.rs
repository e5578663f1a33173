use crate::SourcePosition;
use crate::token::TokenText;
use serde::Serialize;

/// A type reference: named, list-wrapped, or non-null-wrapped.
///
/// Note that a `NonNullType` carries the position of the type it
/// wraps (its first token), not of the trailing `!`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum TypeAnnotation<'src> {
    Named(TypeName<'src>),
    List(ListType<'src>),
    NonNull(NonNullType<'src>),
}

impl TypeAnnotation<'_> {
    pub fn position(&self) -> SourcePosition {
        match self {
            TypeAnnotation::Named(annot) => annot.position,
            TypeAnnotation::List(annot) => annot.position,
            TypeAnnotation::NonNull(annot) => annot.position,
        }
    }
}

/// A plain type name. Also used for fragment type conditions and
/// `implements` / union member lists.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TypeName<'src> {
    pub position: SourcePosition,
    pub name: TokenText<'src>,
}

/// `[Inner]` — position is the `[`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ListType<'src> {
    pub position: SourcePosition,
    pub of_type: Box<TypeAnnotation<'src>>,
}

/// `Inner!` — position is the wrapped type's first token.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NonNullType<'src> {
    pub position: SourcePosition,
    pub of_type: Box<TypeAnnotation<'src>>,
}
