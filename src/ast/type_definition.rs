use crate::SourcePosition;
use crate::ast::Directive;
use crate::ast::FieldDefinition;
use crate::ast::InputValueDefinition;
use crate::ast::TypeName;
use crate::token::TokenText;
use serde::Serialize;

/// Any of the six named type definitions.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum TypeDefinition<'src> {
    Scalar(ScalarTypeDefinition<'src>),
    Object(ObjectTypeDefinition<'src>),
    Interface(InterfaceTypeDefinition<'src>),
    Union(UnionTypeDefinition<'src>),
    Enum(EnumTypeDefinition<'src>),
    InputObject(InputObjectTypeDefinition<'src>),
}

impl<'src> TypeDefinition<'src> {
    pub fn position(&self) -> SourcePosition {
        match self {
            TypeDefinition::Scalar(def) => def.position,
            TypeDefinition::Object(def) => def.position,
            TypeDefinition::Interface(def) => def.position,
            TypeDefinition::Union(def) => def.position,
            TypeDefinition::Enum(def) => def.position,
            TypeDefinition::InputObject(def) => def.position,
        }
    }

    pub fn name(&self) -> &TokenText<'src> {
        match self {
            TypeDefinition::Scalar(def) => &def.name,
            TypeDefinition::Object(def) => &def.name,
            TypeDefinition::Interface(def) => &def.name,
            TypeDefinition::Union(def) => &def.name,
            TypeDefinition::Enum(def) => &def.name,
            TypeDefinition::InputObject(def) => &def.name,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            TypeDefinition::Scalar(def) => def.description.as_deref(),
            TypeDefinition::Object(def) => def.description.as_deref(),
            TypeDefinition::Interface(def) => def.description.as_deref(),
            TypeDefinition::Union(def) => def.description.as_deref(),
            TypeDefinition::Enum(def) => def.description.as_deref(),
            TypeDefinition::InputObject(def) => def.description.as_deref(),
        }
    }
}

/// `scalar Name @directives`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScalarTypeDefinition<'src> {
    pub position: SourcePosition,
    pub description: Option<String>,
    pub name: TokenText<'src>,
    pub directives: Vec<Directive<'src>>,
}

/// `type Name implements ... @directives { fields }`
///
/// The field block is optional here (but not on interfaces).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ObjectTypeDefinition<'src> {
    pub position: SourcePosition,
    pub description: Option<String>,
    pub name: TokenText<'src>,
    pub interfaces: Vec<TypeName<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
}

/// `interface Name implements ... @directives { fields }`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InterfaceTypeDefinition<'src> {
    pub position: SourcePosition,
    pub description: Option<String>,
    pub name: TokenText<'src>,
    pub interfaces: Vec<TypeName<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
}

/// `union Name @directives = A | B | C`
///
/// The member list (including the `=`) is optional, and a leading `|`
/// before the first member is allowed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UnionTypeDefinition<'src> {
    pub position: SourcePosition,
    pub description: Option<String>,
    pub name: TokenText<'src>,
    pub directives: Vec<Directive<'src>>,
    pub types: Vec<TypeName<'src>>,
}

/// `enum Name @directives { VALUES }`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EnumTypeDefinition<'src> {
    pub position: SourcePosition,
    pub description: Option<String>,
    pub name: TokenText<'src>,
    pub directives: Vec<Directive<'src>>,
    pub values: Vec<EnumValueDefinition<'src>>,
}

/// One value inside an enum definition. `true`, `false` and `null`
/// are rejected as enum value names.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EnumValueDefinition<'src> {
    pub position: SourcePosition,
    pub description: Option<String>,
    pub name: TokenText<'src>,
    pub directives: Vec<Directive<'src>>,
}

/// `input Name @directives { fields }`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InputObjectTypeDefinition<'src> {
    pub position: SourcePosition,
    pub description: Option<String>,
    pub name: TokenText<'src>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<InputValueDefinition<'src>>,
}
