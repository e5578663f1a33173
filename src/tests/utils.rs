//! Shared helpers for extracting AST nodes in tests.

use crate::ParseOptions;
use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::Field;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::TypeDefinition;
use crate::ast::Value;
use crate::token::Token;

/// Parses source that is expected to be valid.
///
/// # Panics
/// Panics with the formatted error if parsing fails.
pub(super) fn parse_ok(source: &str) -> Document<'_> {
    match crate::parse(source) {
        Ok(doc) => doc,
        Err(err) => panic!("expected valid document, got: {}", err.format_oneline()),
    }
}

/// Tokenizes source that is expected to be lexically valid.
pub(super) fn tokenize_ok(source: &str) -> Vec<Token<'_>> {
    match crate::tokenize(source, &ParseOptions::default()) {
        Ok(tokens) => tokens,
        Err(err) => panic!("expected valid tokens, got: {}", err.format_oneline()),
    }
}

/// Parses source and extracts its first (and only expected) operation.
pub(super) fn extract_operation(source: &str) -> OperationDefinition<'_> {
    let doc = parse_ok(source);
    match doc.definitions.into_iter().next() {
        Some(Definition::OperationDefinition(op)) => op,
        other => panic!("expected an operation definition, got: {other:?}"),
    }
}

/// Parses source and extracts its first fragment definition.
pub(super) fn extract_fragment(source: &str) -> FragmentDefinition<'_> {
    let doc = parse_ok(source);
    match doc.definitions.into_iter().next() {
        Some(Definition::FragmentDefinition(frag)) => frag,
        other => panic!("expected a fragment definition, got: {other:?}"),
    }
}

/// Parses source and extracts its first type definition.
pub(super) fn extract_type_definition(source: &str) -> TypeDefinition<'_> {
    let doc = parse_ok(source);
    match doc.definitions.into_iter().next() {
        Some(Definition::TypeDefinition(def)) => def,
        other => panic!("expected a type definition, got: {other:?}"),
    }
}

/// The first selection of a selection set, which must be a field.
pub(super) fn first_field<'a, 'src>(
    selection_set: &'a SelectionSet<'src>,
) -> &'a Field<'src> {
    match selection_set.selections.first() {
        Some(Selection::Field(field)) => field,
        other => panic!("expected a field selection, got: {other:?}"),
    }
}

/// The value of the first argument of a field.
pub(super) fn first_arg_value<'a, 'src>(field: &'a Field<'src>) -> &'a Value<'src> {
    &field
        .arguments
        .first()
        .expect("field should have at least one argument")
        .value
}

/// Parses `query { field(arg: <value>) }` and extracts the value.
pub(super) fn parse_value(value_source: &str) -> Value<'static> {
    let source = format!("query {{ field(arg: {value_source}) }}");
    let op = extract_operation(&source);
    let field = first_field(&op.selection_set);
    to_owned_value(first_arg_value(field))
}

// Values borrow from the formatted source string above, so tests get a
// detached deep copy. Cloning through serde or a visitor would be
// overkill; a manual rebuild keeps it simple.
fn to_owned_value(value: &Value<'_>) -> Value<'static> {
    use crate::ast::Argument;
    use crate::ast::BooleanValue;
    use crate::ast::EnumValue;
    use crate::ast::FloatValue;
    use crate::ast::IntValue;
    use crate::ast::ListValue;
    use crate::ast::NullValue;
    use crate::ast::ObjectValue;
    use crate::ast::StringValue;
    use crate::ast::VariableIdentifier;
    use crate::token::TokenText;

    fn owned_text(text: &TokenText<'_>) -> TokenText<'static> {
        TokenText::Shared(text.as_str().into())
    }

    match value {
        Value::Int(v) => Value::Int(IntValue {
            position: v.position,
            raw: owned_text(&v.raw),
        }),
        Value::Float(v) => Value::Float(FloatValue {
            position: v.position,
            raw: owned_text(&v.raw),
        }),
        Value::String(v) => Value::String(StringValue {
            position: v.position,
            value: v.value.clone(),
        }),
        Value::Boolean(v) => Value::Boolean(BooleanValue {
            position: v.position,
            value: v.value,
        }),
        Value::Null(v) => Value::Null(NullValue {
            position: v.position,
        }),
        Value::Enum(v) => Value::Enum(EnumValue {
            position: v.position,
            name: owned_text(&v.name),
        }),
        Value::List(v) => Value::List(ListValue {
            position: v.position,
            values: v.values.iter().map(to_owned_value).collect(),
        }),
        Value::Object(v) => Value::Object(ObjectValue {
            position: v.position,
            fields: v
                .fields
                .iter()
                .map(|field| Argument {
                    position: field.position,
                    name: owned_text(&field.name),
                    value: to_owned_value(&field.value),
                })
                .collect(),
        }),
        Value::Variable(v) => Value::Variable(VariableIdentifier {
            position: v.position,
            name: owned_text(&v.name),
        }),
    }
}
