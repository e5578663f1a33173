use crate::SourcePosition;
use crate::ast::DirectiveLocation;
use crate::ast::InputValueDefinition;
use crate::token::TokenText;
use serde::Serialize;

/// `directive @name(args) repeatable on LOC1 | LOC2`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DirectiveDefinition<'src> {
    pub position: SourcePosition,
    pub description: Option<String>,
    pub name: TokenText<'src>,
    pub arguments: Vec<InputValueDefinition<'src>>,
    pub repeatable: bool,
    pub locations: Vec<DirectiveLocation<'src>>,
}
