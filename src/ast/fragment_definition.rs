use crate::SourcePosition;
use crate::ast::Directive;
use crate::ast::SelectionSet;
use crate::ast::TypeName;
use crate::token::TokenText;
use serde::Serialize;

/// `fragment Name on Type { ... }`
///
/// The fragment name can be any name except the keyword `on`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FragmentDefinition<'src> {
    pub position: SourcePosition,
    pub name: TokenText<'src>,
    pub type_condition: TypeName<'src>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: SelectionSet<'src>,
}
