//! AST node types.
//!
//! The AST is a closed set of owned structs and enums, one file per
//! node family. Every node records the [`SourcePosition`] of the first
//! token that produced it. Name-carrying nodes borrow from the source
//! string (or share interner entries) via
//! [`TokenText`](crate::token::TokenText); cooked string values own
//! their text.

mod argument;
mod directive;
mod directive_definition;
mod field_definition;
mod fragment_definition;
mod operation_definition;
mod schema_definition;
mod selection;
mod type_annotation;
mod type_definition;
mod type_extension;
mod value;
mod variable_definition;

pub use argument::Argument;
pub use directive::Directive;
pub use directive::DirectiveLocation;
pub use directive_definition::DirectiveDefinition;
pub use field_definition::FieldDefinition;
pub use field_definition::InputValueDefinition;
pub use fragment_definition::FragmentDefinition;
pub use operation_definition::OperationDefinition;
pub use operation_definition::OperationKind;
pub use schema_definition::SchemaDefinition;
pub use selection::Field;
pub use selection::FragmentSpread;
pub use selection::InlineFragment;
pub use selection::Selection;
pub use selection::SelectionSet;
pub use type_annotation::ListType;
pub use type_annotation::NonNullType;
pub use type_annotation::TypeAnnotation;
pub use type_annotation::TypeName;
pub use type_definition::EnumTypeDefinition;
pub use type_definition::EnumValueDefinition;
pub use type_definition::InputObjectTypeDefinition;
pub use type_definition::InterfaceTypeDefinition;
pub use type_definition::ObjectTypeDefinition;
pub use type_definition::ScalarTypeDefinition;
pub use type_definition::TypeDefinition;
pub use type_definition::UnionTypeDefinition;
pub use type_extension::EnumTypeExtension;
pub use type_extension::InputObjectTypeExtension;
pub use type_extension::InterfaceTypeExtension;
pub use type_extension::ObjectTypeExtension;
pub use type_extension::ScalarTypeExtension;
pub use type_extension::SchemaExtension;
pub use type_extension::TypeExtension;
pub use type_extension::UnionTypeExtension;
pub use value::BooleanValue;
pub use value::EnumValue;
pub use value::FloatValue;
pub use value::IntValue;
pub use value::ListValue;
pub use value::NullValue;
pub use value::ObjectValue;
pub use value::StringValue;
pub use value::Value;
pub use variable_definition::VariableDefinition;
pub use variable_definition::VariableIdentifier;

use crate::SourcePosition;
use serde::Serialize;

/// The root of a parsed document: an ordered list of definitions.
///
/// An empty (or ignored-tokens-only) document is valid and yields no
/// definitions, positioned at the start of the source.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Document<'src> {
    pub position: SourcePosition,
    pub definitions: Vec<Definition<'src>>,
}

impl<'src> Document<'src> {
    /// Iterates the executable definitions (operations and fragments).
    pub fn executable_definitions(
        &self,
    ) -> impl Iterator<Item = &Definition<'src>> {
        self.definitions.iter().filter(|def| {
            matches!(
                def,
                Definition::OperationDefinition(_) | Definition::FragmentDefinition(_)
            )
        })
    }

    /// Iterates the type-system definitions and extensions.
    pub fn type_system_definitions(
        &self,
    ) -> impl Iterator<Item = &Definition<'src>> {
        self.definitions.iter().filter(|def| {
            !matches!(
                def,
                Definition::OperationDefinition(_) | Definition::FragmentDefinition(_)
            )
        })
    }
}

/// Any top-level definition in a document.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Definition<'src> {
    OperationDefinition(OperationDefinition<'src>),
    FragmentDefinition(FragmentDefinition<'src>),
    SchemaDefinition(SchemaDefinition<'src>),
    SchemaExtension(SchemaExtension<'src>),
    TypeDefinition(TypeDefinition<'src>),
    TypeExtension(TypeExtension<'src>),
    DirectiveDefinition(DirectiveDefinition<'src>),
}

impl Definition<'_> {
    pub fn position(&self) -> SourcePosition {
        match self {
            Definition::OperationDefinition(def) => def.position,
            Definition::FragmentDefinition(def) => def.position,
            Definition::SchemaDefinition(def) => def.position,
            Definition::SchemaExtension(def) => def.position,
            Definition::TypeDefinition(def) => def.position(),
            Definition::TypeExtension(def) => def.position(),
            Definition::DirectiveDefinition(def) => def.position,
        }
    }
}
