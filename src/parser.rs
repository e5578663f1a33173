use crate::ParseError;
use crate::ParseErrorKind;
use crate::ParseOptions;
use crate::SourcePosition;
use crate::TokenStream;
use crate::Tokenizer;
use crate::ast::Argument;
use crate::ast::BooleanValue;
use crate::ast::Definition;
use crate::ast::Directive;
use crate::ast::DirectiveDefinition;
use crate::ast::DirectiveLocation;
use crate::ast::Document;
use crate::ast::EnumTypeDefinition;
use crate::ast::EnumTypeExtension;
use crate::ast::EnumValue;
use crate::ast::EnumValueDefinition;
use crate::ast::Field;
use crate::ast::FieldDefinition;
use crate::ast::FloatValue;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InputObjectTypeExtension;
use crate::ast::InputValueDefinition;
use crate::ast::IntValue;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::InterfaceTypeExtension;
use crate::ast::ListType;
use crate::ast::ListValue;
use crate::ast::NonNullType;
use crate::ast::NullValue;
use crate::ast::ObjectTypeDefinition;
use crate::ast::ObjectTypeExtension;
use crate::ast::ObjectValue;
use crate::ast::OperationDefinition;
use crate::ast::OperationKind;
use crate::ast::ScalarTypeDefinition;
use crate::ast::ScalarTypeExtension;
use crate::ast::SchemaDefinition;
use crate::ast::SchemaExtension;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::StringValue;
use crate::ast::TypeAnnotation;
use crate::ast::TypeDefinition;
use crate::ast::TypeExtension;
use crate::ast::TypeName;
use crate::ast::UnionTypeDefinition;
use crate::ast::UnionTypeExtension;
use crate::ast::Value;
use crate::ast::VariableDefinition;
use crate::ast::VariableIdentifier;
use crate::token::Token;
use crate::token::TokenKind;
use crate::token::TokenText;

/// Token kinds that can begin a value.
const VALUE_EXPECTED: &[&str] = &["Int", "Float", "String", "Name", "`$`", "`[`", "`{`"];

/// Token kinds that can begin a top-level definition.
const DEFINITION_EXPECTED: &[&str] = &[
    "`{`",
    "`query`",
    "`mutation`",
    "`subscription`",
    "`fragment`",
    "`schema`",
    "`scalar`",
    "`type`",
    "`interface`",
    "`union`",
    "`enum`",
    "`input`",
    "`directive`",
    "`extend`",
    "String",
];

/// Keywords that can follow an (optional) description at top level.
const TYPE_SYSTEM_EXPECTED: &[&str] = &[
    "`schema`",
    "`scalar`",
    "`type`",
    "`interface`",
    "`union`",
    "`enum`",
    "`input`",
    "`directive`",
];

/// Keywords that can follow `extend`.
const EXTENSION_EXPECTED: &[&str] = &[
    "`schema`",
    "`scalar`",
    "`type`",
    "`interface`",
    "`union`",
    "`enum`",
    "`input`",
];

/// A recursive-descent parser over a buffered [`TokenStream`].
///
/// One method per grammar production; each consumes exactly the tokens
/// of its production. Parsing is strict and single-pass with one token
/// of lookahead in almost every position: the first error aborts the
/// parse, and no partial AST is produced.
pub struct Parser<'src> {
    stream: TokenStream<'src>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self::with_options(source, &ParseOptions::default())
    }

    pub fn with_options(source: &'src str, options: &ParseOptions) -> Self {
        Self::from_tokenizer(Tokenizer::with_options(source, options))
    }

    /// Builds a parser over a pre-configured tokenizer, e.g. one that
    /// shares a [`NameInterner`](crate::NameInterner) across documents.
    pub fn from_tokenizer(tokenizer: Tokenizer<'src>) -> Self {
        Self {
            stream: TokenStream::new(tokenizer),
        }
    }

    /// Parses a complete document: executable definitions, type-system
    /// definitions and extensions, in any order and mix.
    pub fn parse_document(mut self) -> Result<Document<'src>, ParseError> {
        let mut definitions = Vec::new();
        while !matches!(self.peek()?.kind, TokenKind::Eof) {
            definitions.push(self.parse_definition()?);
        }
        let position = definitions
            .first()
            .map(Definition::position)
            .unwrap_or(SourcePosition::DOCUMENT_START);
        Ok(Document {
            position,
            definitions,
        })
    }

    // ------------------------------------------------------------------
    // Token plumbing

    /// Peeks the next token, converting lexical marker tokens into
    /// errors: an `UnknownChar` the tokenizer scanned past, or a
    /// string literal whose escapes were invalid (reported when the
    /// parser reaches it, not before).
    fn peek(&mut self) -> Result<&Token<'src>, ParseError> {
        let marker = {
            let token = self.stream.peek()?;
            match &token.kind {
                TokenKind::UnknownChar(ch) => Some(ParseError::new(
                    format!("unexpected character `{ch}`"),
                    token.position,
                    ParseErrorKind::UnknownCharacter { found: *ch },
                )),
                TokenKind::BadUnicodeEscape(raw) => Some(ParseError::new(
                    "bad unicode escape sequence in string literal",
                    token.position,
                    ParseErrorKind::BadUnicodeEscape {
                        literal: raw.clone(),
                    },
                )),
                _ => None,
            }
        };
        match marker {
            Some(err) => Err(err),
            None => self.stream.peek(),
        }
    }

    fn consume(&mut self) -> Result<Token<'src>, ParseError> {
        self.peek()?;
        self.stream.consume()
    }

    /// Consumes the next token if it matches, errors otherwise.
    fn expect(&mut self, expected: &TokenKind<'src>) -> Result<Token<'src>, ParseError> {
        if self.peek()?.kind.same_kind(expected) {
            self.stream.consume()
        } else {
            Err(self.error_at_next(&[expected.expected_label()]))
        }
    }

    /// Builds a syntax error at the next (unconsumed) token.
    fn error_at_next(&mut self, expected: &[&str]) -> ParseError {
        match self.peek() {
            Err(err) => err,
            Ok(token) => syntax_error(&token.kind, token.position, expected),
        }
    }

    /// Consumes a name: an identifier or any contextual keyword.
    fn parse_name(&mut self) -> Result<(TokenText<'src>, SourcePosition), ParseError> {
        if !self.peek()?.kind.is_name() {
            return Err(self.error_at_next(&["Name"]));
        }
        let token = self.stream.consume()?;
        let position = token.position;
        let text = match token.kind {
            TokenKind::Identifier(text) => text,
            kind => TokenText::Borrowed(
                kind.keyword_str()
                    .expect("non-identifier name tokens are keywords"),
            ),
        };
        Ok((text, position))
    }

    /// Like [`parse_name`](Self::parse_name) but rejecting `on`, which
    /// is reserved in fragment-name positions.
    fn parse_name_without_on(
        &mut self,
    ) -> Result<(TokenText<'src>, SourcePosition), ParseError> {
        if matches!(self.peek()?.kind, TokenKind::On) {
            return Err(self.error_at_next(&["Name"]));
        }
        self.parse_name()
    }

    /// Consumes a string-literal description if one is next; otherwise
    /// checks the upcoming token's leading comments for a contiguous
    /// comment block ending on the line directly above it.
    fn parse_description(&mut self) -> Result<Option<String>, ParseError> {
        let token = self.peek()?;
        if matches!(token.kind, TokenKind::Str(_)) {
            let token = self.stream.consume()?;
            let TokenKind::Str(text) = token.kind else {
                unreachable!("kind checked above");
            };
            return Ok(Some(text));
        }
        Ok(comment_description(token))
    }

    // ------------------------------------------------------------------
    // Top-level definitions

    fn parse_definition(&mut self) -> Result<Definition<'src>, ParseError> {
        match self.peek()?.kind {
            TokenKind::Fragment => Ok(Definition::FragmentDefinition(
                self.parse_fragment_definition()?,
            )),
            TokenKind::LCurly
            | TokenKind::Query
            | TokenKind::Mutation
            | TokenKind::Subscription => Ok(Definition::OperationDefinition(
                self.parse_operation_definition()?,
            )),
            TokenKind::Extend => self.parse_type_system_extension(),
            TokenKind::Str(_)
            | TokenKind::Schema
            | TokenKind::Scalar
            | TokenKind::Type
            | TokenKind::Interface
            | TokenKind::Union
            | TokenKind::Enum
            | TokenKind::Input
            | TokenKind::Directive => self.parse_type_system_definition(),
            _ => Err(self.error_at_next(DEFINITION_EXPECTED)),
        }
    }

    // ------------------------------------------------------------------
    // Executable definitions

    fn parse_operation_definition(
        &mut self,
    ) -> Result<OperationDefinition<'src>, ParseError> {
        let position = self.peek()?.position;
        let operation_kind = match self.peek()?.kind {
            TokenKind::LCurly => OperationKind::Query,
            TokenKind::Query => OperationKind::Query,
            TokenKind::Mutation => OperationKind::Mutation,
            TokenKind::Subscription => OperationKind::Subscription,
            _ => {
                return Err(self.error_at_next(&[
                    "`{`",
                    "`query`",
                    "`mutation`",
                    "`subscription`",
                ]));
            }
        };
        if !matches!(self.peek()?.kind, TokenKind::LCurly) {
            self.stream.consume()?; // operation keyword
        }

        let name = match self.peek()?.kind {
            TokenKind::LParen | TokenKind::LCurly | TokenKind::At => None,
            _ => Some(self.parse_name()?.0),
        };
        let variable_definitions = if matches!(self.peek()?.kind, TokenKind::LParen) {
            self.parse_variable_definitions()?
        } else {
            Vec::new()
        };
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;

        Ok(OperationDefinition {
            position,
            operation_kind,
            name,
            variable_definitions,
            directives,
            selection_set,
        })
    }

    fn parse_variable_definitions(
        &mut self,
    ) -> Result<Vec<VariableDefinition<'src>>, ParseError> {
        self.stream.consume()?; // '(' checked by caller
        let mut definitions = Vec::new();
        loop {
            match self.peek()?.kind {
                TokenKind::RParen if !definitions.is_empty() => break,
                TokenKind::RParen => return Err(self.error_at_next(&["`$`"])),
                TokenKind::Dollar => {
                    let dollar = self.stream.consume()?;
                    let position = dollar.position;
                    let (name, _) = self.parse_name()?;
                    self.expect(&TokenKind::Colon)?;
                    let type_annotation = self.parse_type_annotation()?;
                    let default_value = if matches!(self.peek()?.kind, TokenKind::Equals)
                    {
                        self.stream.consume()?;
                        Some(self.parse_value()?)
                    } else {
                        None
                    };
                    let directives = self.parse_directives()?;
                    definitions.push(VariableDefinition {
                        position,
                        variable: VariableIdentifier { position, name },
                        type_annotation,
                        default_value,
                        directives,
                    });
                }
                _ => return Err(self.error_at_next(&["`$`", "`)`"])),
            }
        }
        self.stream.consume()?; // ')'
        Ok(definitions)
    }

    fn parse_fragment_definition(
        &mut self,
    ) -> Result<FragmentDefinition<'src>, ParseError> {
        let keyword = self.stream.consume()?; // 'fragment'
        let position = keyword.position;
        let (name, _) = self.parse_name_without_on()?;
        self.expect(&TokenKind::On)?;
        let type_condition = self.parse_type_name()?;
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;
        Ok(FragmentDefinition {
            position,
            name,
            type_condition,
            directives,
            selection_set,
        })
    }

    // ------------------------------------------------------------------
    // Selections

    fn parse_selection_set(&mut self) -> Result<SelectionSet<'src>, ParseError> {
        let position = self.peek()?.position;
        self.expect(&TokenKind::LCurly)?;
        let mut selections = Vec::new();
        loop {
            match self.peek()?.kind {
                TokenKind::RCurly => break,
                TokenKind::Ellipsis => selections.push(self.parse_fragment_selection()?),
                ref kind if kind.is_name() => {
                    selections.push(Selection::Field(self.parse_field()?));
                }
                _ => return Err(self.error_at_next(&["Name", "`...`", "`}`"])),
            }
        }
        self.stream.consume()?; // '}'
        Ok(SelectionSet {
            position,
            selections,
        })
    }

    fn parse_field(&mut self) -> Result<Field<'src>, ParseError> {
        let position = self.peek()?.position;
        let (mut name, _) = self.parse_name()?;
        let mut alias = None;
        if matches!(self.peek()?.kind, TokenKind::Colon) {
            self.stream.consume()?;
            let (actual_name, _) = self.parse_name()?;
            alias = Some(std::mem::replace(&mut name, actual_name));
        }
        let arguments = if matches!(self.peek()?.kind, TokenKind::LParen) {
            self.parse_arguments()?
        } else {
            Vec::new()
        };
        let directives = self.parse_directives()?;
        let selection_set = if matches!(self.peek()?.kind, TokenKind::LCurly) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };
        Ok(Field {
            position,
            alias,
            name,
            arguments,
            directives,
            selection_set,
        })
    }

    /// Parses `...name`, `... on Type { ... }`, or a bare `... { ... }`
    /// inline fragment; the `...` is next in the stream.
    fn parse_fragment_selection(&mut self) -> Result<Selection<'src>, ParseError> {
        let ellipsis = self.stream.consume()?;
        let position = ellipsis.position;
        match self.peek()?.kind {
            TokenKind::On | TokenKind::At | TokenKind::LCurly => {
                let type_condition = if matches!(self.peek()?.kind, TokenKind::On) {
                    self.stream.consume()?;
                    Some(self.parse_type_name()?)
                } else {
                    None
                };
                let directives = self.parse_directives()?;
                let selection_set = self.parse_selection_set()?;
                Ok(Selection::InlineFragment(InlineFragment {
                    position,
                    type_condition,
                    directives,
                    selection_set,
                }))
            }
            _ => {
                let (name, _) = self.parse_name_without_on()?;
                let directives = self.parse_directives()?;
                Ok(Selection::FragmentSpread(FragmentSpread {
                    position,
                    name,
                    directives,
                }))
            }
        }
    }

    // ------------------------------------------------------------------
    // Arguments, directives, values

    /// Parses a usage-site argument list. Unlike argument definitions,
    /// `()` with no arguments is a syntax error here.
    fn parse_arguments(&mut self) -> Result<Vec<Argument<'src>>, ParseError> {
        self.stream.consume()?; // '(' checked by caller
        let mut arguments = Vec::new();
        loop {
            match self.peek()?.kind {
                TokenKind::RParen if !arguments.is_empty() => break,
                TokenKind::RParen => return Err(self.error_at_next(&["Name"])),
                ref kind if kind.is_name() => {
                    let position = self.peek()?.position;
                    let (name, _) = self.parse_name()?;
                    self.expect(&TokenKind::Colon)?;
                    let value = self.parse_value()?;
                    arguments.push(Argument {
                        position,
                        name,
                        value,
                    });
                }
                _ => return Err(self.error_at_next(&["Name", "`)`"])),
            }
        }
        self.stream.consume()?; // ')'
        Ok(arguments)
    }

    fn parse_directives(&mut self) -> Result<Vec<Directive<'src>>, ParseError> {
        let mut directives = Vec::new();
        while matches!(self.peek()?.kind, TokenKind::At) {
            let at_sign = self.stream.consume()?;
            let (name, _) = self.parse_name()?;
            let arguments = if matches!(self.peek()?.kind, TokenKind::LParen) {
                self.parse_arguments()?
            } else {
                Vec::new()
            };
            directives.push(Directive {
                position: at_sign.position,
                name,
                arguments,
            });
        }
        Ok(directives)
    }

    fn parse_value(&mut self) -> Result<Value<'src>, ParseError> {
        let token = self.consume()?;
        let position = token.position;
        match token.kind {
            TokenKind::Int(raw) => Ok(Value::Int(IntValue { position, raw })),
            TokenKind::Float(raw) => Ok(Value::Float(FloatValue { position, raw })),
            TokenKind::Str(value) => Ok(Value::String(StringValue { position, value })),
            TokenKind::True => Ok(Value::Boolean(BooleanValue {
                position,
                value: true,
            })),
            TokenKind::False => Ok(Value::Boolean(BooleanValue {
                position,
                value: false,
            })),
            TokenKind::Null => Ok(Value::Null(NullValue { position })),
            TokenKind::Identifier(name) => Ok(Value::Enum(EnumValue { position, name })),
            TokenKind::Dollar => {
                let (name, _) = self.parse_name()?;
                Ok(Value::Variable(VariableIdentifier { position, name }))
            }
            TokenKind::LBracket => {
                let mut values = Vec::new();
                loop {
                    if matches!(self.peek()?.kind, TokenKind::RBracket) {
                        self.stream.consume()?;
                        break;
                    }
                    values.push(self.parse_value()?);
                }
                Ok(Value::List(ListValue { position, values }))
            }
            TokenKind::LCurly => {
                let mut fields = Vec::new();
                loop {
                    match self.peek()?.kind {
                        TokenKind::RCurly => {
                            self.stream.consume()?;
                            break;
                        }
                        ref kind if kind.is_name() => {
                            let field_position = self.peek()?.position;
                            let (name, _) = self.parse_name()?;
                            self.expect(&TokenKind::Colon)?;
                            let value = self.parse_value()?;
                            fields.push(Argument {
                                position: field_position,
                                name,
                                value,
                            });
                        }
                        _ => return Err(self.error_at_next(&["Name", "`}`"])),
                    }
                }
                Ok(Value::Object(ObjectValue { position, fields }))
            }
            // Remaining keywords are contextual and read as enum values.
            ref kind if kind.keyword_str().is_some() => {
                let name = TokenText::Borrowed(
                    kind.keyword_str().expect("checked by guard"),
                );
                Ok(Value::Enum(EnumValue { position, name }))
            }
            kind => Err(syntax_error(&kind, position, VALUE_EXPECTED)),
        }
    }

    // ------------------------------------------------------------------
    // Type annotations

    fn parse_type_annotation(&mut self) -> Result<TypeAnnotation<'src>, ParseError> {
        let base = match self.peek()?.kind {
            TokenKind::LBracket => {
                let bracket = self.stream.consume()?;
                let inner = self.parse_type_annotation()?;
                self.expect(&TokenKind::RBracket)?;
                TypeAnnotation::List(ListType {
                    position: bracket.position,
                    of_type: Box::new(inner),
                })
            }
            ref kind if kind.is_name() => TypeAnnotation::Named(self.parse_type_name()?),
            _ => return Err(self.error_at_next(&["Name", "`[`"])),
        };
        if matches!(self.peek()?.kind, TokenKind::Bang) {
            self.stream.consume()?;
            // The wrapper keeps the wrapped type's start position.
            let position = base.position();
            return Ok(TypeAnnotation::NonNull(NonNullType {
                position,
                of_type: Box::new(base),
            }));
        }
        Ok(base)
    }

    fn parse_type_name(&mut self) -> Result<TypeName<'src>, ParseError> {
        let (name, position) = self.parse_name()?;
        Ok(TypeName { position, name })
    }

    // ------------------------------------------------------------------
    // Type-system definitions

    /// Parses a type-system definition with an optional leading
    /// description. The definition's position covers the description
    /// string when one is present.
    fn parse_type_system_definition(&mut self) -> Result<Definition<'src>, ParseError> {
        let position = self.peek()?.position;
        let description = self.parse_description()?;
        match self.peek()?.kind {
            TokenKind::Schema => Ok(Definition::SchemaDefinition(
                self.parse_schema_definition(position, description)?,
            )),
            TokenKind::Scalar => {
                self.stream.consume()?;
                let (name, _) = self.parse_name()?;
                let directives = self.parse_directives()?;
                Ok(Definition::TypeDefinition(TypeDefinition::Scalar(
                    ScalarTypeDefinition {
                        position,
                        description,
                        name,
                        directives,
                    },
                )))
            }
            TokenKind::Type => {
                self.stream.consume()?;
                let (name, _) = self.parse_name()?;
                let interfaces = self.parse_implements()?;
                let directives = self.parse_directives()?;
                let fields = if matches!(self.peek()?.kind, TokenKind::LCurly) {
                    self.parse_field_definitions()?
                } else {
                    Vec::new()
                };
                Ok(Definition::TypeDefinition(TypeDefinition::Object(
                    ObjectTypeDefinition {
                        position,
                        description,
                        name,
                        interfaces,
                        directives,
                        fields,
                    },
                )))
            }
            TokenKind::Interface => {
                self.stream.consume()?;
                let (name, _) = self.parse_name()?;
                let interfaces = self.parse_implements()?;
                let directives = self.parse_directives()?;
                // Interface definitions require the field block.
                let fields = self.parse_field_definitions()?;
                Ok(Definition::TypeDefinition(TypeDefinition::Interface(
                    InterfaceTypeDefinition {
                        position,
                        description,
                        name,
                        interfaces,
                        directives,
                        fields,
                    },
                )))
            }
            TokenKind::Union => {
                self.stream.consume()?;
                let (name, _) = self.parse_name()?;
                let directives = self.parse_directives()?;
                let types = self.parse_union_members()?;
                Ok(Definition::TypeDefinition(TypeDefinition::Union(
                    UnionTypeDefinition {
                        position,
                        description,
                        name,
                        directives,
                        types,
                    },
                )))
            }
            TokenKind::Enum => {
                self.stream.consume()?;
                let (name, _) = self.parse_name()?;
                let directives = self.parse_directives()?;
                let values = self.parse_enum_value_definitions()?;
                Ok(Definition::TypeDefinition(TypeDefinition::Enum(
                    EnumTypeDefinition {
                        position,
                        description,
                        name,
                        directives,
                        values,
                    },
                )))
            }
            TokenKind::Input => {
                self.stream.consume()?;
                let (name, _) = self.parse_name()?;
                let directives = self.parse_directives()?;
                let fields = self.parse_input_field_definitions()?;
                Ok(Definition::TypeDefinition(TypeDefinition::InputObject(
                    InputObjectTypeDefinition {
                        position,
                        description,
                        name,
                        directives,
                        fields,
                    },
                )))
            }
            TokenKind::Directive => Ok(Definition::DirectiveDefinition(
                self.parse_directive_definition(position, description)?,
            )),
            _ => Err(self.error_at_next(TYPE_SYSTEM_EXPECTED)),
        }
    }

    fn parse_schema_definition(
        &mut self,
        position: SourcePosition,
        description: Option<String>,
    ) -> Result<SchemaDefinition<'src>, ParseError> {
        self.stream.consume()?; // 'schema'
        let directives = self.parse_directives()?;
        self.expect(&TokenKind::LCurly)?;
        let (query, mutation, subscription) = self.parse_root_operation_types()?;
        Ok(SchemaDefinition {
            position,
            description,
            directives,
            query,
            mutation,
            subscription,
        })
    }

    /// Parses the body of a schema definition/extension after its `{`:
    /// `query: Name`, `mutation: Name`, `subscription: Name` entries in
    /// any order, later entries overriding earlier ones.
    #[allow(clippy::type_complexity)]
    fn parse_root_operation_types(
        &mut self,
    ) -> Result<
        (
            Option<TokenText<'src>>,
            Option<TokenText<'src>>,
            Option<TokenText<'src>>,
        ),
        ParseError,
    > {
        let mut query = None;
        let mut mutation = None;
        let mut subscription = None;
        loop {
            match self.peek()?.kind {
                TokenKind::RCurly => break,
                TokenKind::Query => {
                    self.stream.consume()?;
                    self.expect(&TokenKind::Colon)?;
                    query = Some(self.parse_name()?.0);
                }
                TokenKind::Mutation => {
                    self.stream.consume()?;
                    self.expect(&TokenKind::Colon)?;
                    mutation = Some(self.parse_name()?.0);
                }
                TokenKind::Subscription => {
                    self.stream.consume()?;
                    self.expect(&TokenKind::Colon)?;
                    subscription = Some(self.parse_name()?.0);
                }
                _ => {
                    return Err(self.error_at_next(&[
                        "`query`",
                        "`mutation`",
                        "`subscription`",
                        "`}`",
                    ]));
                }
            }
        }
        self.stream.consume()?; // '}'
        Ok((query, mutation, subscription))
    }

    /// Parses an `implements` clause in any of its three surface
    /// forms: `&`-joined, legacy whitespace-separated, or a single
    /// name. The list ends at the first token that is not a plain
    /// identifier (keywords end it too).
    fn parse_implements(&mut self) -> Result<Vec<TypeName<'src>>, ParseError> {
        if !matches!(self.peek()?.kind, TokenKind::Implements) {
            return Ok(Vec::new());
        }
        self.stream.consume()?;
        let mut interfaces = Vec::new();
        loop {
            if matches!(self.peek()?.kind, TokenKind::Amp) {
                self.stream.consume()?;
            }
            match self.peek()?.kind {
                TokenKind::Identifier(_) => interfaces.push(self.parse_type_name()?),
                _ => break,
            }
        }
        Ok(interfaces)
    }

    fn parse_union_members(&mut self) -> Result<Vec<TypeName<'src>>, ParseError> {
        if !matches!(self.peek()?.kind, TokenKind::Equals) {
            return Ok(Vec::new());
        }
        self.stream.consume()?;
        // Optional leading '|' before the first member.
        if matches!(self.peek()?.kind, TokenKind::Pipe) {
            self.stream.consume()?;
        }
        let mut members = vec![self.parse_type_name()?];
        while matches!(self.peek()?.kind, TokenKind::Pipe) {
            self.stream.consume()?;
            members.push(self.parse_type_name()?);
        }
        Ok(members)
    }

    fn parse_field_definitions(
        &mut self,
    ) -> Result<Vec<FieldDefinition<'src>>, ParseError> {
        self.expect(&TokenKind::LCurly)?;
        let mut fields = Vec::new();
        while !matches!(self.peek()?.kind, TokenKind::RCurly) {
            fields.push(self.parse_field_definition()?);
        }
        self.stream.consume()?; // '}'
        Ok(fields)
    }

    fn parse_field_definition(&mut self) -> Result<FieldDefinition<'src>, ParseError> {
        let position = self.peek()?.position;
        let description = self.parse_description()?;
        let (name, _) = self.parse_name()?;
        let arguments = if matches!(self.peek()?.kind, TokenKind::LParen) {
            self.parse_argument_definitions()?
        } else {
            Vec::new()
        };
        self.expect(&TokenKind::Colon)?;
        let type_annotation = self.parse_type_annotation()?;
        let directives = self.parse_directives()?;
        Ok(FieldDefinition {
            position,
            description,
            name,
            arguments,
            type_annotation,
            directives,
        })
    }

    /// Parses a parenthesized list of input value definitions. An
    /// empty `()` is tolerated here, unlike usage-site arguments.
    fn parse_argument_definitions(
        &mut self,
    ) -> Result<Vec<InputValueDefinition<'src>>, ParseError> {
        self.stream.consume()?; // '(' checked by caller
        let mut arguments = Vec::new();
        while !matches!(self.peek()?.kind, TokenKind::RParen) {
            arguments.push(self.parse_input_value_definition()?);
        }
        self.stream.consume()?; // ')'
        Ok(arguments)
    }

    fn parse_input_field_definitions(
        &mut self,
    ) -> Result<Vec<InputValueDefinition<'src>>, ParseError> {
        if !matches!(self.peek()?.kind, TokenKind::LCurly) {
            return Ok(Vec::new());
        }
        self.stream.consume()?;
        let mut fields = Vec::new();
        while !matches!(self.peek()?.kind, TokenKind::RCurly) {
            fields.push(self.parse_input_value_definition()?);
        }
        self.stream.consume()?; // '}'
        Ok(fields)
    }

    fn parse_input_value_definition(
        &mut self,
    ) -> Result<InputValueDefinition<'src>, ParseError> {
        let position = self.peek()?.position;
        let description = self.parse_description()?;
        let (name, _) = self.parse_name()?;
        self.expect(&TokenKind::Colon)?;
        let type_annotation = self.parse_type_annotation()?;
        let default_value = if matches!(self.peek()?.kind, TokenKind::Equals) {
            self.stream.consume()?;
            Some(self.parse_value()?)
        } else {
            None
        };
        let directives = self.parse_directives()?;
        Ok(InputValueDefinition {
            position,
            description,
            name,
            type_annotation,
            default_value,
            directives,
        })
    }

    fn parse_enum_value_definitions(
        &mut self,
    ) -> Result<Vec<EnumValueDefinition<'src>>, ParseError> {
        if !matches!(self.peek()?.kind, TokenKind::LCurly) {
            return Ok(Vec::new());
        }
        self.stream.consume()?;
        let mut values = Vec::new();
        while !matches!(self.peek()?.kind, TokenKind::RCurly) {
            values.push(self.parse_enum_value_definition()?);
        }
        self.stream.consume()?; // '}'
        Ok(values)
    }

    fn parse_enum_value_definition(
        &mut self,
    ) -> Result<EnumValueDefinition<'src>, ParseError> {
        let position = self.peek()?.position;
        let description = self.parse_description()?;
        // Any name except the boolean/null literals.
        if matches!(
            self.peek()?.kind,
            TokenKind::True | TokenKind::False | TokenKind::Null
        ) {
            return Err(self.error_at_next(&["Name"]));
        }
        let (name, _) = self.parse_name()?;
        let directives = self.parse_directives()?;
        Ok(EnumValueDefinition {
            position,
            description,
            name,
            directives,
        })
    }

    fn parse_directive_definition(
        &mut self,
        position: SourcePosition,
        description: Option<String>,
    ) -> Result<DirectiveDefinition<'src>, ParseError> {
        self.stream.consume()?; // 'directive'
        self.expect(&TokenKind::At)?;
        let (name, _) = self.parse_name()?;
        let arguments = if matches!(self.peek()?.kind, TokenKind::LParen) {
            self.parse_argument_definitions()?
        } else {
            Vec::new()
        };
        let repeatable = if matches!(self.peek()?.kind, TokenKind::Repeatable) {
            self.stream.consume()?;
            true
        } else {
            false
        };
        self.expect(&TokenKind::On)?;
        let mut locations = vec![self.parse_directive_location()?];
        while matches!(self.peek()?.kind, TokenKind::Pipe) {
            self.stream.consume()?;
            locations.push(self.parse_directive_location()?);
        }
        Ok(DirectiveDefinition {
            position,
            description,
            name,
            arguments,
            repeatable,
            locations,
        })
    }

    fn parse_directive_location(&mut self) -> Result<DirectiveLocation<'src>, ParseError> {
        let (name, position) = self.parse_name()?;
        Ok(DirectiveLocation { position, name })
    }

    // ------------------------------------------------------------------
    // Type-system extensions

    /// Parses any `extend ...` definition. Extensions reuse the body
    /// grammar of their definition counterparts but take no
    /// description, and every body element is optional.
    fn parse_type_system_extension(&mut self) -> Result<Definition<'src>, ParseError> {
        let keyword = self.stream.consume()?; // 'extend'
        let position = keyword.position;
        match self.peek()?.kind {
            TokenKind::Schema => {
                self.stream.consume()?;
                let directives = self.parse_directives()?;
                let (query, mutation, subscription) =
                    if matches!(self.peek()?.kind, TokenKind::LCurly) {
                        self.stream.consume()?;
                        self.parse_root_operation_types()?
                    } else {
                        (None, None, None)
                    };
                Ok(Definition::SchemaExtension(SchemaExtension {
                    position,
                    directives,
                    query,
                    mutation,
                    subscription,
                }))
            }
            TokenKind::Scalar => {
                self.stream.consume()?;
                let (name, _) = self.parse_name()?;
                let directives = self.parse_directives()?;
                Ok(Definition::TypeExtension(TypeExtension::Scalar(
                    ScalarTypeExtension {
                        position,
                        name,
                        directives,
                    },
                )))
            }
            TokenKind::Type => {
                self.stream.consume()?;
                let (name, _) = self.parse_name()?;
                let interfaces = self.parse_implements()?;
                let directives = self.parse_directives()?;
                let fields = if matches!(self.peek()?.kind, TokenKind::LCurly) {
                    self.parse_field_definitions()?
                } else {
                    Vec::new()
                };
                Ok(Definition::TypeExtension(TypeExtension::Object(
                    ObjectTypeExtension {
                        position,
                        name,
                        interfaces,
                        directives,
                        fields,
                    },
                )))
            }
            TokenKind::Interface => {
                self.stream.consume()?;
                let (name, _) = self.parse_name()?;
                let interfaces = self.parse_implements()?;
                let directives = self.parse_directives()?;
                let fields = if matches!(self.peek()?.kind, TokenKind::LCurly) {
                    self.parse_field_definitions()?
                } else {
                    Vec::new()
                };
                Ok(Definition::TypeExtension(TypeExtension::Interface(
                    InterfaceTypeExtension {
                        position,
                        name,
                        interfaces,
                        directives,
                        fields,
                    },
                )))
            }
            TokenKind::Union => {
                self.stream.consume()?;
                let (name, _) = self.parse_name()?;
                let directives = self.parse_directives()?;
                let types = self.parse_union_members()?;
                Ok(Definition::TypeExtension(TypeExtension::Union(
                    UnionTypeExtension {
                        position,
                        name,
                        directives,
                        types,
                    },
                )))
            }
            TokenKind::Enum => {
                self.stream.consume()?;
                let (name, _) = self.parse_name()?;
                let directives = self.parse_directives()?;
                let values = self.parse_enum_value_definitions()?;
                Ok(Definition::TypeExtension(TypeExtension::Enum(
                    EnumTypeExtension {
                        position,
                        name,
                        directives,
                        values,
                    },
                )))
            }
            TokenKind::Input => {
                self.stream.consume()?;
                let (name, _) = self.parse_name()?;
                let directives = self.parse_directives()?;
                let fields = self.parse_input_field_definitions()?;
                Ok(Definition::TypeExtension(TypeExtension::InputObject(
                    InputObjectTypeExtension {
                        position,
                        name,
                        directives,
                        fields,
                    },
                )))
            }
            _ => Err(self.error_at_next(EXTENSION_EXPECTED)),
        }
    }
}

/// Builds an `UnexpectedToken`/`UnexpectedEof` error for `found` with
/// the given set of acceptable token kinds.
fn syntax_error(
    found: &TokenKind<'_>,
    position: SourcePosition,
    expected: &[&str],
) -> ParseError {
    let expecting = expected.join(" or ");
    let expected_vec: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
    if matches!(found, TokenKind::Eof) {
        ParseError::new(
            format!("unexpected end of input, expecting {expecting}"),
            position,
            ParseErrorKind::UnexpectedEof {
                expected: expected_vec,
            },
        )
    } else {
        ParseError::new(
            format!("unexpected {}, expecting {expecting}", found.display()),
            position,
            ParseErrorKind::UnexpectedToken {
                expected: expected_vec,
                found: found.display(),
            },
        )
    }
}

/// Extracts a description from the comment trivia attached to the
/// first token of a definition: the longest run of own-line comments
/// on consecutive lines whose last line sits directly above the token.
/// A blank line between the run and the token breaks the attachment.
fn comment_description(token: &Token<'_>) -> Option<String> {
    let comments = &token.leading_comments;
    if comments.is_empty() {
        return None;
    }
    let mut start = comments.len();
    let mut next_line = token.position.line();
    while start > 0 {
        let line = comments[start - 1].position.line();
        if line + 1 == next_line {
            next_line = line;
            start -= 1;
        } else {
            break;
        }
    }
    if start == comments.len() {
        return None;
    }
    let text = comments[start..]
        .iter()
        .map(|comment| comment.text.strip_prefix(' ').unwrap_or(&comment.text))
        .collect::<Vec<_>>()
        .join("\n");
    Some(text)
}
