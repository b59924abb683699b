//! Recursive-descent parser.
//!
//! One method per grammar production, in the same spirit as the teacher's
//! combinator parser laying out one parser value per production — here
//! expressed imperatively because the disambiguation rules (variant-vs-union
//! lookahead, reserved-word checks, description placement) need precise
//! control over when a token is consumed and what error fires, which a
//! combinator's automatic backtracking would obscure.

use std::sync::Arc;

use iris_ast::*;
use iris_lexer::{Error, Lexer, Result, Source, TokenId, TokenKind};

use crate::options::ParseOptions;

pub struct Parser {
    lexer: Lexer,
    options: ParseOptions,
    last_token_id: TokenId,
}

impl Parser {
    pub fn new(source: Arc<Source>, options: ParseOptions) -> Result<Self> {
        let mut lexer = Lexer::new(source);
        lexer.advance()?;
        Ok(Self { lexer, options, last_token_id: TokenId::default_sof() })
    }

    fn consume(&mut self) -> Result<TokenId> {
        let consumed = self.lexer.token_id();
        self.last_token_id = consumed;
        self.lexer.advance()?;
        Ok(consumed)
    }

    fn loc(&self, start: TokenId) -> Option<Loc> {
        if self.options.no_location {
            return None;
        }
        let start_tok = self.lexer.get(start);
        let end_tok = self.lexer.get(self.last_token_id);
        Some(Loc::new(start, start_tok.start, self.last_token_id, end_tok.end, self.lexer.source().clone()))
    }

    fn err_at(&self, token: TokenId, message: impl Into<String>) -> Error {
        let tok = self.lexer.get(token);
        Error::syntax(message).with_source(self.lexer.source().clone(), tok.start)
    }

    fn err_here(&self, message: impl Into<String>) -> Error {
        self.err_at(self.lexer.token_id(), message)
    }

    fn unexpected(&self) -> Error {
        let desc = self.lexer.token().desc();
        self.err_here(format!("Unexpected {desc}."))
    }

    fn description_not_supported(&self, description: &StringValueNode) -> Error {
        let pos = description.loc.as_ref().map(|l| l.start_offset).unwrap_or(0);
        Error::syntax("Unexpected description, descriptions are supported only on type definitions.")
            .with_source(self.lexer.source().clone(), pos)
    }

    fn expect_token(&mut self, kind: TokenKind) -> Result<TokenId> {
        if self.lexer.token().kind == kind {
            self.consume()
        } else {
            let found = self.lexer.token().desc();
            Err(self.err_here(format!("Expected {}, found {found}.", kind.description())))
        }
    }

    fn expect_optional_token(&mut self, kind: TokenKind) -> Result<Option<TokenId>> {
        if self.lexer.token().kind == kind {
            Ok(Some(self.consume()?))
        } else {
            Ok(None)
        }
    }

    fn expect_keyword(&mut self, word: &str) -> Result<()> {
        if self.lexer.token().kind == TokenKind::Name && self.lexer.token().value.as_deref() == Some(word) {
            self.consume()?;
            Ok(())
        } else {
            let found = self.lexer.token().desc();
            Err(self.err_here(format!("Expected \"{word}\", found {found}.")))
        }
    }

    fn expect_optional_keyword(&mut self, word: &str) -> Result<bool> {
        if self.lexer.token().kind == TokenKind::Name && self.lexer.token().value.as_deref() == Some(word) {
            self.consume()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    // ---- Document ----

    pub fn parse_document(&mut self) -> Result<DocumentNode> {
        let start = TokenId::default_sof();
        let mut definitions = Vec::new();
        while self.lexer.token().kind != TokenKind::Eof {
            definitions.push(self.parse_definition()?);
        }
        if definitions.is_empty() {
            return Err(self.unexpected());
        }
        Ok(DocumentNode { definitions, loc: self.loc(start) })
    }

    fn parse_definition(&mut self) -> Result<Definition> {
        let start = self.lexer.token_id();
        let description = self.parse_description()?;

        if self.lexer.token().kind == TokenKind::Name {
            let keyword = self.lexer.token().value.clone().unwrap_or_default();
            return match keyword.as_str() {
                "data" => Ok(Definition::DataType(self.parse_data_type_definition(start, description)?)),
                "resolver" => Ok(Definition::ResolverType(self.parse_resolver_type_definition(start, description)?)),
                "directive" => Ok(Definition::Directive(self.parse_directive_definition(start, description)?)),
                "query" | "mutation" | "subscription" => {
                    Ok(Definition::Operation(self.parse_operation_definition(start, description)?))
                }
                "fragment" => Ok(Definition::Fragment(self.parse_fragment_definition(start, description)?)),
                _ => match description {
                    Some(d) => Err(self.description_not_supported(&d)),
                    None => Err(self.unexpected()),
                },
            };
        }

        if self.lexer.token().kind == TokenKind::BraceL {
            return match description {
                Some(d) => Err(self.description_not_supported(&d)),
                None => Ok(Definition::Operation(self.parse_shorthand_query(start)?)),
            };
        }

        match description {
            Some(d) => Err(self.description_not_supported(&d)),
            None => Err(self.unexpected()),
        }
    }

    fn parse_description(&mut self) -> Result<Option<StringValueNode>> {
        if matches!(self.lexer.token().kind, TokenKind::String | TokenKind::BlockString) {
            Ok(Some(self.parse_string_literal()?))
        } else {
            Ok(None)
        }
    }

    fn parse_string_literal(&mut self) -> Result<StringValueNode> {
        let start = self.lexer.token_id();
        let tok = self.lexer.token().clone();
        self.consume()?;
        Ok(StringValueNode { value: tok.value.unwrap_or_default(), block: tok.block, loc: self.loc(start) })
    }

    fn parse_name(&mut self) -> Result<NameNode> {
        let start = self.lexer.token_id();
        if self.lexer.token().kind != TokenKind::Name {
            let found = self.lexer.token().desc();
            return Err(self.err_here(format!("Expected Name, found {found}.")));
        }
        let value = self.lexer.token().value.clone().unwrap_or_default();
        self.consume()?;
        Ok(NameNode { value, loc: self.loc(start) })
    }

    fn parse_variant_name(&mut self) -> Result<NameNode> {
        if self.lexer.token().kind == TokenKind::Name {
            if let Some(v) = self.lexer.token().value.clone() {
                if matches!(v.as_str(), "true" | "false" | "null") {
                    return Err(self.err_here(format!("Name \"{v}\" is reserved and cannot be used for an enum value.")));
                }
            }
        }
        self.parse_name()
    }

    // ---- Type-system definitions ----

    fn parse_data_type_definition(&mut self, start: TokenId, description: Option<StringValueNode>) -> Result<DataTypeDefinitionNode> {
        self.expect_keyword("data")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let variants = self.parse_type_body(&name, TypeRole::Data)?;
        Ok(DataTypeDefinitionNode { description, name, directives, variants, loc: self.loc(start) })
    }

    fn parse_resolver_type_definition(&mut self, start: TokenId, description: Option<StringValueNode>) -> Result<ResolverTypeDefinitionNode> {
        self.expect_keyword("resolver")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let variants = self.parse_type_body(&name, TypeRole::Resolver)?;
        Ok(ResolverTypeDefinitionNode { description, name, directives, variants, loc: self.loc(start) })
    }

    /// Disambiguates `= { ... }` (single record variant), `= A | B ...`
    /// (union of variants), bare `=` (error), and no `=` at all (synthesized
    /// empty record) — spec §4.2 "Variant syntax disambiguation".
    fn parse_type_body(&mut self, type_name: &NameNode, role: TypeRole) -> Result<Vec<VariantDefinitionNode>> {
        if self.expect_optional_token(TokenKind::Equals)?.is_none() {
            return Ok(vec![VariantDefinitionNode {
                description: None,
                name: type_name.clone_shallow(),
                directives: vec![],
                fields: Some(vec![]),
                loc: None,
            }]);
        }

        if self.lexer.token().kind == TokenKind::BraceL {
            let fields = self.parse_fields_definition(role)?;
            return Ok(vec![VariantDefinitionNode {
                description: None,
                name: type_name.clone_shallow(),
                directives: vec![],
                fields: Some(fields),
                loc: None,
            }]);
        }

        if matches!(self.lexer.token().kind, TokenKind::Name | TokenKind::String | TokenKind::BlockString) {
            return self.parse_variants(role);
        }

        Err(self.err_here("Expected Variant."))
    }

    fn parse_variants(&mut self, role: TypeRole) -> Result<Vec<VariantDefinitionNode>> {
        self.expect_optional_token(TokenKind::Pipe)?;
        let mut variants = vec![self.parse_variant(role)?];
        while self.expect_optional_token(TokenKind::Pipe)?.is_some() {
            if !matches!(self.lexer.token().kind, TokenKind::Name | TokenKind::String | TokenKind::BlockString) {
                return Err(self.err_here("Expected Name after \"|\"."));
            }
            variants.push(self.parse_variant(role)?);
        }
        Ok(variants)
    }

    fn parse_variant(&mut self, role: TypeRole) -> Result<VariantDefinitionNode> {
        let start = self.lexer.token_id();
        let description = self.parse_description()?;
        let name = self.parse_variant_name()?;
        let directives = self.parse_directives(false)?;
        let fields = if self.lexer.token().kind == TokenKind::BraceL {
            Some(self.parse_fields_definition(role)?)
        } else {
            None
        };
        Ok(VariantDefinitionNode { description, name, directives, fields, loc: self.loc(start) })
    }

    fn parse_fields_definition(&mut self, role: TypeRole) -> Result<Vec<FieldDefinitionNode>> {
        self.expect_token(TokenKind::BraceL)?;
        let mut fields = Vec::new();
        while self.lexer.token().kind != TokenKind::BraceR {
            fields.push(self.parse_field_definition(role)?);
        }
        self.expect_token(TokenKind::BraceR)?;
        Ok(fields)
    }

    fn parse_field_definition(&mut self, role: TypeRole) -> Result<FieldDefinitionNode> {
        let start = self.lexer.token_id();
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        let arguments = if self.lexer.token().kind == TokenKind::ParenL {
            if role != TypeRole::Resolver {
                return Err(self.err_here("Arguments are only allowed on resolver fields."));
            }
            self.parse_argument_defs()?
        } else {
            vec![]
        };
        self.expect_token(TokenKind::Colon)?;
        let ty = self.parse_type_reference()?;
        let directives = self.parse_directives(false)?;
        Ok(FieldDefinitionNode { description, name, arguments, ty, directives, loc: self.loc(start) })
    }

    fn parse_argument_defs(&mut self) -> Result<Vec<ArgumentDefinitionNode>> {
        self.expect_token(TokenKind::ParenL)?;
        let mut args = Vec::new();
        while self.lexer.token().kind != TokenKind::ParenR {
            args.push(self.parse_argument_def()?);
        }
        if args.is_empty() {
            return Err(self.err_here("Expected at least one argument definition."));
        }
        self.expect_token(TokenKind::ParenR)?;
        Ok(args)
    }

    fn parse_argument_def(&mut self) -> Result<ArgumentDefinitionNode> {
        let start = self.lexer.token_id();
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        self.expect_token(TokenKind::Colon)?;
        let ty = self.parse_type_reference()?;
        let default_value = if self.expect_optional_token(TokenKind::Equals)?.is_some() {
            Some(self.parse_value_literal(true)?)
        } else {
            None
        };
        let directives = self.parse_directives(true)?;
        Ok(ArgumentDefinitionNode { description, name, ty, default_value, directives, loc: self.loc(start) })
    }

    fn parse_named_type(&mut self) -> Result<NamedTypeNode> {
        let start = self.lexer.token_id();
        let name = self.parse_name()?;
        Ok(NamedTypeNode { name, loc: self.loc(start) })
    }

    /// `typeRef := Name | '[' typeRef ']' | typeRef '?'`. A leading `?` or a
    /// doubled `??` is an error.
    pub(crate) fn parse_type_reference(&mut self) -> Result<TypeRef> {
        let start = self.lexer.token_id();
        if self.lexer.token().kind == TokenKind::Question {
            return Err(self.err_here("Expected type, found \"?\"."));
        }

        let base = if self.expect_optional_token(TokenKind::BracketL)?.is_some() {
            let inner = self.parse_type_reference()?;
            self.expect_token(TokenKind::BracketR)?;
            TypeRef::List(ListTypeNode { ty: Box::new(inner), loc: self.loc(start) })
        } else {
            TypeRef::Named(self.parse_named_type()?)
        };

        if self.expect_optional_token(TokenKind::Question)?.is_some() {
            if self.lexer.token().kind == TokenKind::Question {
                return Err(self.err_here("Unexpected \"??\", a type can only be marked optional once."));
            }
            return Ok(TypeRef::Maybe(MaybeTypeNode { ty: Box::new(base), loc: self.loc(start) }));
        }

        Ok(base)
    }

    // ---- Directives ----

    fn parse_directives(&mut self, is_const: bool) -> Result<Vec<DirectiveNode>> {
        let mut directives = Vec::new();
        while self.lexer.token().kind == TokenKind::At {
            directives.push(self.parse_directive(is_const)?);
        }
        Ok(directives)
    }

    fn parse_directive(&mut self, is_const: bool) -> Result<DirectiveNode> {
        let start = self.lexer.token_id();
        self.expect_token(TokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments(is_const)?;
        Ok(DirectiveNode { name, arguments, loc: self.loc(start) })
    }

    fn parse_arguments(&mut self, is_const: bool) -> Result<Vec<ArgumentNode>> {
        if self.lexer.token().kind != TokenKind::ParenL {
            return Ok(vec![]);
        }
        self.expect_token(TokenKind::ParenL)?;
        let mut args = Vec::new();
        while self.lexer.token().kind != TokenKind::ParenR {
            args.push(self.parse_argument(is_const)?);
        }
        self.expect_token(TokenKind::ParenR)?;
        Ok(args)
    }

    fn parse_argument(&mut self, is_const: bool) -> Result<ArgumentNode> {
        let start = self.lexer.token_id();
        let name = self.parse_name()?;
        self.expect_token(TokenKind::Colon)?;
        let value = self.parse_value_literal(is_const)?;
        Ok(ArgumentNode { name, value, loc: self.loc(start) })
    }

    fn parse_directive_definition(&mut self, start: TokenId, description: Option<StringValueNode>) -> Result<DirectiveDefinitionNode> {
        self.expect_keyword("directive")?;
        self.expect_token(TokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = if self.lexer.token().kind == TokenKind::ParenL {
            self.parse_argument_defs()?
        } else {
            vec![]
        };
        let repeatable = self.expect_optional_keyword("repeatable")?;
        self.expect_keyword("on")?;
        let locations = self.parse_directive_locations()?;
        Ok(DirectiveDefinitionNode { description, name, arguments, repeatable, locations, loc: self.loc(start) })
    }

    fn parse_directive_locations(&mut self) -> Result<Vec<DirectiveLocation>> {
        self.expect_optional_token(TokenKind::Pipe)?;
        let mut locations = vec![self.parse_directive_location()?];
        while self.expect_optional_token(TokenKind::Pipe)?.is_some() {
            locations.push(self.parse_directive_location()?);
        }
        Ok(locations)
    }

    fn parse_directive_location(&mut self) -> Result<DirectiveLocation> {
        let start = self.lexer.token_id();
        let name = self.parse_name()?;
        DirectiveLocation::from_name(&name.value)
            .ok_or_else(|| self.err_at(start, format!("Unknown directive location \"{}\".", name.value)))
    }

    // ---- Values ----

    pub(crate) fn parse_value_literal(&mut self, is_const: bool) -> Result<Value> {
        let start = self.lexer.token_id();
        match self.lexer.token().kind {
            TokenKind::BracketL => self.parse_list(is_const),
            TokenKind::BraceL => self.parse_object(is_const),
            TokenKind::Int => {
                let value = self.lexer.token().value.clone().unwrap_or_default();
                self.consume()?;
                Ok(Value::Int(IntValueNode { value, loc: self.loc(start) }))
            }
            TokenKind::Float => {
                let value = self.lexer.token().value.clone().unwrap_or_default();
                self.consume()?;
                Ok(Value::Float(FloatValueNode { value, loc: self.loc(start) }))
            }
            TokenKind::String | TokenKind::BlockString => Ok(Value::String(self.parse_string_literal()?)),
            TokenKind::Name => {
                let value = self.lexer.token().value.clone().unwrap_or_default();
                match value.as_str() {
                    "true" => {
                        self.consume()?;
                        Ok(Value::Boolean(BooleanValueNode { value: true, loc: self.loc(start) }))
                    }
                    "false" => {
                        self.consume()?;
                        Ok(Value::Boolean(BooleanValueNode { value: false, loc: self.loc(start) }))
                    }
                    "null" => {
                        self.consume()?;
                        Ok(Value::Null(NullValueNode { loc: self.loc(start) }))
                    }
                    _ => {
                        self.consume()?;
                        Ok(Value::Enum(EnumValueNode { value, loc: self.loc(start) }))
                    }
                }
            }
            TokenKind::Dollar => {
                let variable = self.parse_variable()?;
                if is_const {
                    return Err(self.err_at(start, format!("Unexpected variable \"${}\" in constant value.", variable.name.value)));
                }
                Ok(Value::Variable(variable))
            }
            _ => Err(self.err_here("Expected value.")),
        }
    }

    fn parse_variable(&mut self) -> Result<VariableNode> {
        let start = self.lexer.token_id();
        self.expect_token(TokenKind::Dollar)?;
        let name = self.parse_name()?;
        Ok(VariableNode { name, loc: self.loc(start) })
    }

    fn parse_list(&mut self, is_const: bool) -> Result<Value> {
        let start = self.lexer.token_id();
        self.expect_token(TokenKind::BracketL)?;
        let mut values = Vec::new();
        while self.lexer.token().kind != TokenKind::BracketR {
            values.push(self.parse_value_literal(is_const)?);
        }
        self.expect_token(TokenKind::BracketR)?;
        Ok(Value::List(ListValueNode { values, loc: self.loc(start) }))
    }

    fn parse_object(&mut self, is_const: bool) -> Result<Value> {
        let start = self.lexer.token_id();
        self.expect_token(TokenKind::BraceL)?;
        let mut fields = Vec::new();
        while self.lexer.token().kind != TokenKind::BraceR {
            fields.push(self.parse_object_field(is_const)?);
        }
        self.expect_token(TokenKind::BraceR)?;
        Ok(Value::Object(ObjectValueNode { fields, loc: self.loc(start) }))
    }

    fn parse_object_field(&mut self, is_const: bool) -> Result<ObjectFieldNode> {
        let start = self.lexer.token_id();
        let name = self.parse_name()?;
        self.expect_token(TokenKind::Colon)?;
        let value = self.parse_value_literal(is_const)?;
        Ok(ObjectFieldNode { name, value, loc: self.loc(start) })
    }

    // ---- Executable documents ----

    fn parse_operation_definition(&mut self, start: TokenId, description: Option<StringValueNode>) -> Result<OperationDefinitionNode> {
        if let Some(d) = description {
            return Err(self.description_not_supported(&d));
        }
        let operation = self.parse_operation_type()?;
        let name = if self.lexer.token().kind == TokenKind::Name {
            Some(self.parse_name()?)
        } else {
            None
        };
        let variable_definitions = self.parse_variable_definitions()?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(OperationDefinitionNode { operation, name, variable_definitions, directives, selection_set, loc: self.loc(start) })
    }

    fn parse_operation_type(&mut self) -> Result<OperationType> {
        let value = self.lexer.token().value.clone().unwrap_or_default();
        let op = match value.as_str() {
            "query" => OperationType::Query,
            "mutation" => OperationType::Mutation,
            "subscription" => OperationType::Subscription,
            _ => return Err(self.err_here("Expected operation type.")),
        };
        self.consume()?;
        Ok(op)
    }

    fn parse_shorthand_query(&mut self, start: TokenId) -> Result<OperationDefinitionNode> {
        let selection_set = self.parse_selection_set()?;
        Ok(OperationDefinitionNode {
            operation: OperationType::Query,
            name: None,
            variable_definitions: vec![],
            directives: vec![],
            selection_set,
            loc: self.loc(start),
        })
    }

    fn parse_variable_definitions(&mut self) -> Result<Vec<VariableDefinitionNode>> {
        if self.lexer.token().kind != TokenKind::ParenL {
            return Ok(vec![]);
        }
        self.expect_token(TokenKind::ParenL)?;
        let mut defs = Vec::new();
        while self.lexer.token().kind != TokenKind::ParenR {
            defs.push(self.parse_variable_definition()?);
        }
        self.expect_token(TokenKind::ParenR)?;
        Ok(defs)
    }

    fn parse_variable_definition(&mut self) -> Result<VariableDefinitionNode> {
        let start = self.lexer.token_id();
        let variable = self.parse_variable()?;
        self.expect_token(TokenKind::Colon)?;
        let ty = self.parse_type_reference()?;
        let default_value = if self.expect_optional_token(TokenKind::Equals)?.is_some() {
            Some(self.parse_value_literal(true)?)
        } else {
            None
        };
        let directives = self.parse_directives(true)?;
        Ok(VariableDefinitionNode { variable, ty, default_value, directives, loc: self.loc(start) })
    }

    fn parse_selection_set(&mut self) -> Result<SelectionSetNode> {
        let start = self.lexer.token_id();
        self.expect_token(TokenKind::BraceL)?;
        let mut selections = Vec::new();
        while self.lexer.token().kind != TokenKind::BraceR {
            selections.push(self.parse_selection()?);
        }
        self.expect_token(TokenKind::BraceR)?;
        Ok(SelectionSetNode { selections, loc: self.loc(start) })
    }

    fn parse_selection(&mut self) -> Result<Selection> {
        if self.lexer.token().kind == TokenKind::Spread {
            self.parse_fragment()
        } else {
            Ok(Selection::Field(self.parse_field()?))
        }
    }

    fn parse_field(&mut self) -> Result<FieldNode> {
        let start = self.lexer.token_id();
        let name_or_alias = self.parse_name()?;
        let (alias, name) = if self.expect_optional_token(TokenKind::Colon)?.is_some() {
            (Some(name_or_alias), self.parse_name()?)
        } else {
            (None, name_or_alias)
        };
        let arguments = self.parse_arguments(false)?;
        let directives = self.parse_directives(false)?;
        let selection_set = if self.lexer.token().kind == TokenKind::BraceL {
            Some(self.parse_selection_set()?)
        } else {
            None
        };
        Ok(FieldNode { alias, name, arguments, directives, selection_set, loc: self.loc(start) })
    }

    fn parse_fragment(&mut self) -> Result<Selection> {
        let start = self.lexer.token_id();
        self.expect_token(TokenKind::Spread)?;
        if self.lexer.token().kind == TokenKind::Name && self.lexer.token().value.as_deref() != Some("on") {
            let name = self.parse_fragment_name()?;
            let directives = self.parse_directives(false)?;
            return Ok(Selection::FragmentSpread(FragmentSpreadNode { name, directives, loc: self.loc(start) }));
        }
        let type_condition = if self.expect_optional_keyword("on")? {
            Some(self.parse_named_type()?)
        } else {
            None
        };
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(Selection::InlineFragment(InlineFragmentNode { type_condition, directives, selection_set, loc: self.loc(start) }))
    }

    fn parse_fragment_name(&mut self) -> Result<NameNode> {
        if self.lexer.token().value.as_deref() == Some("on") {
            return Err(self.err_here("Unexpected \"on\"."));
        }
        self.parse_name()
    }

    fn parse_fragment_definition(&mut self, start: TokenId, description: Option<StringValueNode>) -> Result<FragmentDefinitionNode> {
        if let Some(d) = description {
            return Err(self.description_not_supported(&d));
        }
        self.expect_keyword("fragment")?;
        let name = self.parse_fragment_name()?;
        self.expect_keyword("on")?;
        let type_condition = self.parse_named_type()?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(FragmentDefinitionNode { name, type_condition, directives, selection_set, loc: self.loc(start) })
    }

    pub(crate) fn expect_eof(&mut self) -> Result<()> {
        self.expect_token(TokenKind::Eof)?;
        Ok(())
    }

    /// Entry point for [`crate::parse_value`]/[`crate::parse_const_value`].
    pub fn parse_value_entry(&mut self, is_const: bool) -> Result<Value> {
        self.parse_value_literal(is_const)
    }

    /// Entry point for [`crate::parse_type`].
    pub fn parse_type_entry(&mut self) -> Result<TypeRef> {
        self.parse_type_reference()
    }
}
