use crate::SourcePosition;
use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::TypeName;
use crate::token::TokenText;
use serde::Serialize;

/// A braced list of selections. May be empty (`{}`).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SelectionSet<'src> {
    /// Position of the opening `{`.
    pub position: SourcePosition,
    pub selections: Vec<Selection<'src>>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Selection<'src> {
    Field(Field<'src>),
    FragmentSpread(FragmentSpread<'src>),
    InlineFragment(InlineFragment<'src>),
}

impl Selection<'_> {
    pub fn position(&self) -> SourcePosition {
        match self {
            Selection::Field(sel) => sel.position,
            Selection::FragmentSpread(sel) => sel.position,
            Selection::InlineFragment(sel) => sel.position,
        }
    }
}

/// `alias: name(args) @directives { subselections }`
///
/// Position is the first token: the alias when present, otherwise the
/// field name.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Field<'src> {
    pub position: SourcePosition,
    pub alias: Option<TokenText<'src>>,
    pub name: TokenText<'src>,
    pub arguments: Vec<Argument<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: Option<SelectionSet<'src>>,
}

/// `...FragmentName @directives` — position is the `...`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FragmentSpread<'src> {
    pub position: SourcePosition,
    pub name: TokenText<'src>,
    pub directives: Vec<Directive<'src>>,
}

/// `... on Type @directives { ... }` — position is the `...`. The type
/// condition is optional.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InlineFragment<'src> {
    pub position: SourcePosition,
    pub type_condition: Option<TypeName<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: SelectionSet<'src>,
}
