use crate::SourcePosition;
use crate::ast::Directive;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::token::TokenText;
use serde::Serialize;

/// `$name: Type = default @directives` — position is the `$`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VariableDefinition<'src> {
    pub position: SourcePosition,
    pub variable: VariableIdentifier<'src>,
    pub type_annotation: TypeAnnotation<'src>,
    pub default_value: Option<Value<'src>>,
    pub directives: Vec<Directive<'src>>,
}

/// A `$name` reference, either defining a variable or using one in a
/// value position. Position is the `$`; the name excludes it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VariableIdentifier<'src> {
    pub position: SourcePosition,
    pub name: TokenText<'src>,
}
