use crate::SourcePosition;
use crate::ast::Directive;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use crate::token::TokenText;
use serde::Serialize;

/// A query, mutation, or subscription.
///
/// Shorthand documents (`{ field }`) parse as an anonymous query whose
/// position is the opening `{`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OperationDefinition<'src> {
    pub position: SourcePosition,
    pub operation_kind: OperationKind,
    pub name: Option<TokenText<'src>>,
    pub variable_definitions: Vec<VariableDefinition<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: SelectionSet<'src>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
