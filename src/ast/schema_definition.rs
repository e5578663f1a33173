use crate::SourcePosition;
use crate::ast::Directive;
use crate::token::TokenText;
use serde::Serialize;

/// `schema @directives { query: ..., mutation: ..., subscription: ... }`
///
/// Root operation type names are recorded individually; when the same
/// root operation appears twice the later entry wins, as in the
/// reference grammar. Duplicate detection belongs to validation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SchemaDefinition<'src> {
    pub position: SourcePosition,
    pub description: Option<String>,
    pub directives: Vec<Directive<'src>>,
    pub query: Option<TokenText<'src>>,
    pub mutation: Option<TokenText<'src>>,
    pub subscription: Option<TokenText<'src>>,
}
