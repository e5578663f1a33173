use crate::SourcePosition;
use crate::ast::Directive;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::token::TokenText;
use serde::Serialize;

/// One field inside an object or interface definition:
/// `name(args): Type @directives`, optionally preceded by a
/// description.
///
/// Position is the description string when one is present, otherwise
/// the field name.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldDefinition<'src> {
    pub position: SourcePosition,
    pub description: Option<String>,
    pub name: TokenText<'src>,
    pub arguments: Vec<InputValueDefinition<'src>>,
    pub type_annotation: TypeAnnotation<'src>,
    pub directives: Vec<Directive<'src>>,
}

/// `name: Type = default @directives`, used for argument definitions
/// and input object fields. Unlike usage-site argument lists, a
/// definition list `()` may be empty.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InputValueDefinition<'src> {
    pub position: SourcePosition,
    pub description: Option<String>,
    pub name: TokenText<'src>,
    pub type_annotation: TypeAnnotation<'src>,
    pub default_value: Option<Value<'src>>,
    pub directives: Vec<Directive<'src>>,
}
