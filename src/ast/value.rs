use crate::SourcePosition;
use crate::ast::Argument;
use crate::ast::VariableIdentifier;
use crate::token::TokenText;
use serde::Serialize;

/// Any input value: literals, enum values, lists, input objects, and
/// variable references.
///
/// A bare name in value position is an [`EnumValue`]; that includes
/// keywords like `query` or `on`, which are contextual. Only `true`,
/// `false` and `null` lex as their own literals.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Value<'src> {
    Int(IntValue<'src>),
    Float(FloatValue<'src>),
    String(StringValue),
    Boolean(BooleanValue),
    Null(NullValue),
    Enum(EnumValue<'src>),
    List(ListValue<'src>),
    Object(ObjectValue<'src>),
    Variable(VariableIdentifier<'src>),
}

impl Value<'_> {
    pub fn position(&self) -> SourcePosition {
        match self {
            Value::Int(value) => value.position,
            Value::Float(value) => value.position,
            Value::String(value) => value.position,
            Value::Boolean(value) => value.position,
            Value::Null(value) => value.position,
            Value::Enum(value) => value.position,
            Value::List(value) => value.position,
            Value::Object(value) => value.position,
            Value::Variable(value) => value.position,
        }
    }
}

/// An integer literal, kept as raw source text. GraphQL `Int` is
/// 32-bit for validators, but the syntax layer does not range-check.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IntValue<'src> {
    pub position: SourcePosition,
    pub raw: TokenText<'src>,
}

impl IntValue<'_> {
    pub fn as_i64(&self) -> Result<i64, std::num::ParseIntError> {
        self.raw.parse()
    }
}

/// A float literal, kept as raw source text.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FloatValue<'src> {
    pub position: SourcePosition,
    pub raw: TokenText<'src>,
}

impl FloatValue<'_> {
    pub fn as_f64(&self) -> Result<f64, std::num::ParseFloatError> {
        self.raw.parse()
    }
}

/// A string or block-string literal, cooked.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StringValue {
    pub position: SourcePosition,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BooleanValue {
    pub position: SourcePosition,
    pub value: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NullValue {
    pub position: SourcePosition,
}

/// A bare name in value position.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EnumValue<'src> {
    pub position: SourcePosition,
    pub name: TokenText<'src>,
}

/// `[v1, v2, ...]` — position is the `[`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ListValue<'src> {
    pub position: SourcePosition,
    pub values: Vec<Value<'src>>,
}

/// `{ name: value, ... }` — position is the `{`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ObjectValue<'src> {
    pub position: SourcePosition,
    pub fields: Vec<Argument<'src>>,
}
