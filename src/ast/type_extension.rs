use crate::SourcePosition;
use crate::ast::Directive;
use crate::ast::EnumValueDefinition;
use crate::ast::FieldDefinition;
use crate::ast::InputValueDefinition;
use crate::ast::TypeName;
use crate::token::TokenText;
use serde::Serialize;

/// Any `extend <kind> Name ...` definition. Extensions mirror their
/// definition counterparts but never carry a description.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum TypeExtension<'src> {
    Scalar(ScalarTypeExtension<'src>),
    Object(ObjectTypeExtension<'src>),
    Interface(InterfaceTypeExtension<'src>),
    Union(UnionTypeExtension<'src>),
    Enum(EnumTypeExtension<'src>),
    InputObject(InputObjectTypeExtension<'src>),
}

impl<'src> TypeExtension<'src> {
    pub fn position(&self) -> SourcePosition {
        match self {
            TypeExtension::Scalar(ext) => ext.position,
            TypeExtension::Object(ext) => ext.position,
            TypeExtension::Interface(ext) => ext.position,
            TypeExtension::Union(ext) => ext.position,
            TypeExtension::Enum(ext) => ext.position,
            TypeExtension::InputObject(ext) => ext.position,
        }
    }

    pub fn name(&self) -> &TokenText<'src> {
        match self {
            TypeExtension::Scalar(ext) => &ext.name,
            TypeExtension::Object(ext) => &ext.name,
            TypeExtension::Interface(ext) => &ext.name,
            TypeExtension::Union(ext) => &ext.name,
            TypeExtension::Enum(ext) => &ext.name,
            TypeExtension::InputObject(ext) => &ext.name,
        }
    }
}

/// `extend scalar Name @directives`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScalarTypeExtension<'src> {
    pub position: SourcePosition,
    pub name: TokenText<'src>,
    pub directives: Vec<Directive<'src>>,
}

/// `extend type Name implements ... @directives { fields }`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ObjectTypeExtension<'src> {
    pub position: SourcePosition,
    pub name: TokenText<'src>,
    pub interfaces: Vec<TypeName<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
}

/// `extend interface Name implements ... @directives { fields }`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InterfaceTypeExtension<'src> {
    pub position: SourcePosition,
    pub name: TokenText<'src>,
    pub interfaces: Vec<TypeName<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
}

/// `extend union Name @directives = A | B`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UnionTypeExtension<'src> {
    pub position: SourcePosition,
    pub name: TokenText<'src>,
    pub directives: Vec<Directive<'src>>,
    pub types: Vec<TypeName<'src>>,
}

/// `extend enum Name @directives { VALUES }`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EnumTypeExtension<'src> {
    pub position: SourcePosition,
    pub name: TokenText<'src>,
    pub directives: Vec<Directive<'src>>,
    pub values: Vec<EnumValueDefinition<'src>>,
}

/// `extend input Name @directives { fields }`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InputObjectTypeExtension<'src> {
    pub position: SourcePosition,
    pub name: TokenText<'src>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<InputValueDefinition<'src>>,
}

/// `extend schema @directives { query: ... }` — the braced root
/// operation block is optional on extensions.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SchemaExtension<'src> {
    pub position: SourcePosition,
    pub directives: Vec<Directive<'src>>,
    pub query: Option<TokenText<'src>>,
    pub mutation: Option<TokenText<'src>>,
    pub subscription: Option<TokenText<'src>>,
}
