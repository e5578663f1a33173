use crate::SourcePosition;
use crate::ast::Argument;
use crate::token::TokenText;
use serde::Serialize;

/// A directive usage: `@name(args)` — position is the `@`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Directive<'src> {
    pub position: SourcePosition,
    pub name: TokenText<'src>,
    pub arguments: Vec<Argument<'src>>,
}

/// One location name in a directive definition (`QUERY`, `FIELD`,
/// `OBJECT`, ...). Locations are not validated syntactically; any name
/// is accepted here and checked by later semantic passes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DirectiveLocation<'src> {
    pub position: SourcePosition,
    pub name: TokenText<'src>,
}
