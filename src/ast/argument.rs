use crate::SourcePosition;
use crate::ast::Value;
use crate::token::TokenText;
use serde::Serialize;

/// A `name: value` pair, used both for field/directive arguments and
/// for the fields of an input object literal.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Argument<'src> {
    pub position: SourcePosition,
    pub name: TokenText<'src>,
    pub value: Value<'src>,
}
