//! Parser state - source files, declarations, parameters, binding patterns.

use dtsj_common::diagnostics::diagnostic_codes;
use dtsj_scanner::SyntaxKind;

use super::base::{NodeIndex, NodeList};
use super::node::{
    BindingElementData, BindingPatternData, FunctionData, LiteralData, ParameterData,
    SourceFileData, TypeAliasData, VariableDeclarationData, VariableStatementData,
};
use super::state::ParserState;
use super::syntax_kind_ext;

impl ParserState {
    /// Parse the whole source file into a `SOURCE_FILE` root node.
    pub fn parse_source_file(&mut self) -> NodeIndex {
        tracing::trace!(file = %self.file_name, "parse_source_file");
        let start_pos = self.token_pos();
        let mut statements = Vec::new();

        while !self.is_token(SyntaxKind::EndOfFileToken) {
            let statement = self.parse_statement();
            if statement.is_some() {
                statements.push(statement);
            }
        }

        let end_pos = self.node_end();
        let statements = self.make_node_list(statements);
        let file_name = self.file_name.clone();
        self.arena.add_source_file(
            syntax_kind_ext::SOURCE_FILE,
            start_pos,
            end_pos,
            SourceFileData {
                file_name,
                statements,
            },
        )
    }

    /// Parse one top-level declaration, or recover past an unrecognized
    /// construct and return `NONE`.
    fn parse_statement(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let modifiers = self.parse_modifiers();

        match self.token() {
            SyntaxKind::FunctionKeyword => self.parse_function_declaration(modifiers, start_pos),
            SyntaxKind::VarKeyword | SyntaxKind::LetKeyword | SyntaxKind::ConstKeyword => {
                self.parse_variable_statement(modifiers, start_pos)
            }
            SyntaxKind::TypeKeyword => self.parse_type_alias_declaration(modifiers, start_pos),
            _ => {
                self.parse_error_at_current_token(
                    "Declaration or statement expected.",
                    diagnostic_codes::DECLARATION_OR_STATEMENT_EXPECTED,
                );
                self.skip_to_next_statement();
                NodeIndex::NONE
            }
        }
    }

    /// Skip past the current malformed construct so sibling statements still
    /// parse.
    fn skip_to_next_statement(&mut self) {
        while !self.is_token(SyntaxKind::EndOfFileToken) {
            if self.parse_optional(SyntaxKind::SemicolonToken) {
                return;
            }
            self.next_token();
        }
    }

    /// Parse leading declaration modifiers as data-less token nodes.
    ///
    /// Ordering/duplication is not validated here; the converter owns the
    /// canonical (ordered, deduplicated) modifier set.
    fn parse_modifiers(&mut self) -> Option<NodeList> {
        let mut modifiers = Vec::new();
        while matches!(
            self.token(),
            SyntaxKind::DeclareKeyword
                | SyntaxKind::ExportKeyword
                | SyntaxKind::DefaultKeyword
                | SyntaxKind::AbstractKeyword
                | SyntaxKind::AsyncKeyword
                | SyntaxKind::StaticKeyword
                | SyntaxKind::ReadonlyKeyword
                | SyntaxKind::PublicKeyword
                | SyntaxKind::PrivateKeyword
                | SyntaxKind::ProtectedKeyword
        ) {
            let mod_start = self.token_pos();
            let mod_kind = self.token();
            self.next_token();
            let mod_end = self.node_end();
            modifiers.push(self.arena.add_token(mod_kind as u16, mod_start, mod_end));
        }

        if modifiers.is_empty() {
            None
        } else {
            Some(self.make_node_list(modifiers))
        }
    }

    /// Parse a function declaration (signature-only; declaration files carry
    /// no bodies).
    pub(crate) fn parse_function_declaration(
        &mut self,
        modifiers: Option<NodeList>,
        start_pos: u32,
    ) -> NodeIndex {
        tracing::trace!(pos = self.token_pos(), "parse_function_declaration");
        self.parse_expected(SyntaxKind::FunctionKeyword);

        let name = if self.is_identifier_or_keyword() {
            self.parse_identifier_name()
        } else {
            self.parse_identifier()
        };

        self.parse_expected(SyntaxKind::OpenParenToken);
        let parameters = self.parse_parameter_list();
        self.parse_expected(SyntaxKind::CloseParenToken);

        // Optional return type (may be a type predicate: param is T)
        let type_annotation = if self.parse_optional(SyntaxKind::ColonToken) {
            self.parse_return_type()
        } else {
            NodeIndex::NONE
        };

        self.parse_optional(SyntaxKind::SemicolonToken);

        let end_pos = self.node_end();
        self.arena.add_function(
            syntax_kind_ext::FUNCTION_DECLARATION,
            start_pos,
            end_pos,
            FunctionData {
                modifiers,
                name,
                parameters,
                type_annotation,
            },
        )
    }

    pub(crate) fn parse_parameter_list(&mut self) -> NodeList {
        let mut params = Vec::new();
        let mut seen_rest_parameter = false;
        let mut emitted_rest_error = false;

        while !self.is_token(SyntaxKind::CloseParenToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            // TS1014: A rest parameter must be last in a parameter list.
            // Check BEFORE parsing the next parameter (but only emit once).
            if seen_rest_parameter && !emitted_rest_error {
                self.parse_error_at_current_token(
                    "A rest parameter must be last in a parameter list.",
                    diagnostic_codes::A_REST_PARAMETER_MUST_BE_LAST_IN_A_PARAMETER_LIST,
                );
                emitted_rest_error = true;
            }

            let param = self.parse_parameter();

            let is_rest_param = self
                .arena
                .get(param)
                .and_then(|node| self.arena.get_parameter(node))
                .is_some_and(|data| data.dot_dot_dot_token);
            seen_rest_parameter = seen_rest_parameter || is_rest_param;
            params.push(param);

            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }

        self.make_node_list(params)
    }

    /// Parse a single parameter.
    pub(crate) fn parse_parameter(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();

        let dot_dot_dot_token = self.parse_optional(SyntaxKind::DotDotDotToken);

        // Name can be an identifier, keyword, or destructuring pattern
        let name = if self.is_token(SyntaxKind::OpenBraceToken) {
            self.parse_object_binding_pattern()
        } else if self.is_identifier_or_keyword() {
            self.parse_identifier_name()
        } else {
            self.parse_identifier()
        };

        let question_token = self.parse_optional(SyntaxKind::QuestionToken);

        // TS1047: rest parameters cannot also be optional
        if dot_dot_dot_token && question_token {
            self.parse_error_at(
                start_pos,
                self.node_end().saturating_sub(start_pos),
                "A rest parameter cannot be optional.",
                diagnostic_codes::A_REST_PARAMETER_CANNOT_BE_OPTIONAL,
            );
        }

        let type_annotation = if self.parse_optional(SyntaxKind::ColonToken) {
            self.parse_type()
        } else {
            NodeIndex::NONE
        };

        let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
            // TS1015: Parameter cannot have question mark and initializer
            if question_token {
                self.parse_error_at_current_token(
                    "A parameter cannot have question mark and initializer.",
                    diagnostic_codes::PARAMETER_CANNOT_HAVE_QUESTION_MARK_AND_INITIALIZER,
                );
            }
            self.parse_initializer()
        } else {
            NodeIndex::NONE
        };

        let end_pos = self.node_end();
        self.arena.add_parameter(
            syntax_kind_ext::PARAMETER,
            start_pos,
            end_pos,
            ParameterData {
                dot_dot_dot_token,
                name,
                question_token,
                type_annotation,
                initializer,
            },
        )
    }

    /// Parse a default-value initializer.
    ///
    /// Declaration files only admit constant expressions here, so the
    /// accepted grammar is literals, identifiers, and a minus-prefixed
    /// numeric literal.
    fn parse_initializer(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        match self.token() {
            SyntaxKind::StringLiteral | SyntaxKind::NumericLiteral => {
                let kind = self.token() as u16;
                let text = self.scanner.get_token_value_ref().to_string();
                self.next_token();
                self.arena
                    .add_literal(kind, start_pos, self.node_end(), LiteralData { text })
            }
            SyntaxKind::MinusToken => {
                self.next_token();
                if self.is_token(SyntaxKind::NumericLiteral) {
                    let text = format!("-{}", self.scanner.get_token_value_ref());
                    self.next_token();
                    self.arena.add_literal(
                        SyntaxKind::NumericLiteral as u16,
                        start_pos,
                        self.node_end(),
                        LiteralData { text },
                    )
                } else {
                    self.error_expression_expected();
                    NodeIndex::NONE
                }
            }
            SyntaxKind::TrueKeyword
            | SyntaxKind::FalseKeyword
            | SyntaxKind::NullKeyword
            | SyntaxKind::UndefinedKeyword => {
                let kind = self.token() as u16;
                self.next_token();
                self.arena.add_token(kind, start_pos, self.node_end())
            }
            _ if self.is_identifier_or_keyword() => self.parse_identifier_name(),
            _ => {
                self.error_expression_expected();
                NodeIndex::NONE
            }
        }
    }

    /// Parse `{ a, b, ...rest }`, including nested patterns.
    pub(crate) fn parse_object_binding_pattern(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBraceToken);

        let mut elements = Vec::new();
        let mut seen_rest_element = false;
        let mut emitted_rest_error = false;

        while !self.is_token(SyntaxKind::CloseBraceToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            // TS2462: A rest element must be last in a destructuring pattern
            if seen_rest_element && !emitted_rest_error {
                self.parse_error_at_current_token(
                    "A rest element must be last in a destructuring pattern.",
                    diagnostic_codes::A_REST_ELEMENT_MUST_BE_LAST_IN_A_DESTRUCTURING_PATTERN,
                );
                emitted_rest_error = true;
            }

            let element = self.parse_binding_element();
            let is_rest = self
                .arena
                .get(element)
                .and_then(|node| self.arena.get_binding_element(node))
                .is_some_and(|data| data.dot_dot_dot_token);
            seen_rest_element = seen_rest_element || is_rest;
            elements.push(element);

            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }

        self.parse_expected(SyntaxKind::CloseBraceToken);

        let end_pos = self.node_end();
        let elements = self.make_node_list(elements);
        self.arena.add_binding_pattern(
            syntax_kind_ext::OBJECT_BINDING_PATTERN,
            start_pos,
            end_pos,
            BindingPatternData { elements },
        )
    }

    fn parse_binding_element(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let dot_dot_dot_token = self.parse_optional(SyntaxKind::DotDotDotToken);

        let mut property_name = NodeIndex::NONE;
        let mut name = if self.is_token(SyntaxKind::OpenBraceToken) {
            self.parse_object_binding_pattern()
        } else if self.is_identifier_or_keyword() {
            self.parse_identifier_name()
        } else {
            self.parse_identifier()
        };

        // `prop: binding` renames the property or destructures it further;
        // nested patterns only occur through this form.
        if self.parse_optional(SyntaxKind::ColonToken) {
            property_name = name;
            name = if self.is_token(SyntaxKind::OpenBraceToken) {
                self.parse_object_binding_pattern()
            } else if self.is_identifier_or_keyword() {
                self.parse_identifier_name()
            } else {
                self.parse_identifier()
            };
        }

        let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
            self.parse_initializer()
        } else {
            NodeIndex::NONE
        };

        let end_pos = self.node_end();
        self.arena.add_binding_element(
            syntax_kind_ext::BINDING_ELEMENT,
            start_pos,
            end_pos,
            BindingElementData {
                dot_dot_dot_token,
                property_name,
                name,
                initializer,
            },
        )
    }

    /// Parse `var|let|const` declarations. The converter treats these as an
    /// unsupported top-level construct; they are parsed so one bad statement
    /// never derails its siblings.
    fn parse_variable_statement(
        &mut self,
        modifiers: Option<NodeList>,
        start_pos: u32,
    ) -> NodeIndex {
        self.next_token(); // consume var/let/const

        let mut declarations = Vec::new();
        loop {
            let declaration = self.parse_variable_declaration();
            declarations.push(declaration);
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.parse_optional(SyntaxKind::SemicolonToken);

        let end_pos = self.node_end();
        let declarations = self.make_node_list(declarations);
        self.arena.add_variable_statement(
            syntax_kind_ext::VARIABLE_STATEMENT,
            start_pos,
            end_pos,
            VariableStatementData {
                modifiers,
                declarations,
            },
        )
    }

    fn parse_variable_declaration(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();

        let name = if self.is_token(SyntaxKind::OpenBraceToken) {
            self.parse_object_binding_pattern()
        } else if self.is_identifier_or_keyword() {
            self.parse_identifier_name()
        } else {
            self.parse_identifier()
        };

        let type_annotation = if self.parse_optional(SyntaxKind::ColonToken) {
            self.parse_type()
        } else {
            NodeIndex::NONE
        };

        let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
            self.parse_initializer()
        } else {
            NodeIndex::NONE
        };

        let end_pos = self.node_end();
        self.arena.add_variable_declaration(
            syntax_kind_ext::VARIABLE_DECLARATION,
            start_pos,
            end_pos,
            VariableDeclarationData {
                name,
                type_annotation,
                initializer,
            },
        )
    }

    /// Parse `type Name = T;`. Unsupported by the converter, same as
    /// variable statements.
    fn parse_type_alias_declaration(
        &mut self,
        modifiers: Option<NodeList>,
        start_pos: u32,
    ) -> NodeIndex {
        self.next_token(); // consume 'type'

        let name = self.parse_identifier();
        self.parse_expected(SyntaxKind::EqualsToken);
        let type_node = self.parse_type();
        self.parse_optional(SyntaxKind::SemicolonToken);

        let end_pos = self.node_end();
        self.arena.add_type_alias(
            syntax_kind_ext::TYPE_ALIAS_DECLARATION,
            start_pos,
            end_pos,
            TypeAliasData {
                modifiers,
                name,
                type_node,
            },
        )
    }
}
