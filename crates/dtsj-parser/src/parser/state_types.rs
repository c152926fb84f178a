//! Parser state - type parsing.

use dtsj_common::diagnostics::diagnostic_codes;
use dtsj_common::limits;
use dtsj_scanner::SyntaxKind;

use super::base::{NodeIndex, NodeList};
use super::node::{
    ArrayTypeData, CompositeTypeData, FunctionTypeData, PropertySignatureData, QualifiedNameData,
    TypeLiteralData, TypePredicateData, TypeRefData,
};
use super::state::ParserState;
use super::syntax_kind_ext;

impl ParserState {
    /// Parse a type (handles keywords, type references, unions, function
    /// types, type literals, and type predicates).
    pub(crate) fn parse_type(&mut self) -> NodeIndex {
        if self.type_depth >= limits::MAX_PARSE_TYPE_DEPTH {
            self.parse_error_at_current_token(
                "Type nesting is too deep.",
                diagnostic_codes::TYPE_NESTING_TOO_DEEP,
            );
            return self.error_node();
        }
        self.type_depth += 1;
        let result = self.parse_type_inner();
        self.type_depth -= 1;
        result
    }

    /// Parse a return type, which may be a type predicate (`x is T`) or a
    /// regular type.
    pub(crate) fn parse_return_type(&mut self) -> NodeIndex {
        self.parse_type()
    }

    fn parse_type_inner(&mut self) -> NodeIndex {
        if self.is_asserts_type_predicate_start() {
            return self.parse_asserts_type_predicate();
        }

        // Type predicate look-ahead: identifier 'is' Type. Allowed in any
        // type position to avoid cascading errors on misplaced predicates.
        if self.is_identifier_or_keyword() {
            let snapshot = self.scanner.save_state();
            let current = self.current_token;
            self.next_token();
            let is_predicate = self.is_token(SyntaxKind::IsKeyword);
            self.scanner.restore_state(snapshot);
            self.current_token = current;

            if is_predicate {
                let start_pos = self.token_pos();
                let name = self.parse_identifier_name();
                self.next_token(); // consume 'is'
                let type_node = self.parse_type();

                return self.arena.add_type_predicate(
                    syntax_kind_ext::TYPE_PREDICATE,
                    start_pos,
                    self.node_end(),
                    TypePredicateData {
                        asserts_modifier: false,
                        parameter_name: name,
                        type_node,
                    },
                );
            }
        }

        self.parse_union_type()
    }

    fn is_asserts_type_predicate_start(&mut self) -> bool {
        if !self.is_token(SyntaxKind::AssertsKeyword) {
            return false;
        }

        let snapshot = self.scanner.save_state();
        let current = self.current_token;
        self.next_token();
        let is_param = self.is_identifier_or_keyword();
        self.scanner.restore_state(snapshot);
        self.current_token = current;
        is_param
    }

    /// Parse `asserts x` / `asserts x is T`.
    fn parse_asserts_type_predicate(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.next_token(); // consume 'asserts'
        let parameter_name = self.parse_identifier_name();

        let type_node = if self.parse_optional(SyntaxKind::IsKeyword) {
            self.parse_type()
        } else {
            NodeIndex::NONE
        };

        self.arena.add_type_predicate(
            syntax_kind_ext::TYPE_PREDICATE,
            start_pos,
            self.node_end(),
            TypePredicateData {
                asserts_modifier: true,
                parameter_name,
                type_node,
            },
        )
    }

    /// Parse union type: `A | B | C`.
    ///
    /// One level of explicit alternation collects into a single node;
    /// parenthesized sub-unions stay nested.
    pub(crate) fn parse_union_type(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();

        // Handle optional leading | (e.g., type T = | A | B)
        self.parse_optional(SyntaxKind::BarToken);

        let first = self.parse_postfix_type();
        if !self.is_token(SyntaxKind::BarToken) {
            return first;
        }

        let mut types = vec![first];
        while self.parse_optional(SyntaxKind::BarToken) {
            types.push(self.parse_postfix_type());
        }

        let end_pos = self.node_end();
        let types = self.make_node_list(types);
        self.arena.add_composite_type(
            syntax_kind_ext::UNION_TYPE,
            start_pos,
            end_pos,
            CompositeTypeData { types },
        )
    }

    /// Parse a primary type followed by any `[]` array suffixes.
    fn parse_postfix_type(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let mut base_type = self.parse_primary_type();

        while self.is_token(SyntaxKind::OpenBracketToken)
            && !self.scanner.has_preceding_line_break()
        {
            self.next_token();
            self.parse_expected(SyntaxKind::CloseBracketToken);
            base_type = self.arena.add_array_type(
                syntax_kind_ext::ARRAY_TYPE,
                start_pos,
                self.node_end(),
                ArrayTypeData {
                    element_type: base_type,
                },
            );
        }

        base_type
    }

    fn can_token_start_type(&self) -> bool {
        self.is_identifier_or_keyword()
            || matches!(
                self.current_token,
                SyntaxKind::OpenParenToken | SyntaxKind::OpenBraceToken
            )
    }

    /// Parse primary type (keywords, references, parenthesized, function
    /// types, type literals).
    fn parse_primary_type(&mut self) -> NodeIndex {
        if !self.can_token_start_type() {
            self.error_type_expected();
            // Synthetic identifier node so parsing can continue
            return self.error_node();
        }

        if self.is_token(SyntaxKind::OpenParenToken) {
            return self.parse_parenthesized_type_or_function_type();
        }

        if self.is_token(SyntaxKind::OpenBraceToken) {
            return self.parse_type_literal();
        }

        self.parse_type_reference()
    }

    fn parse_parenthesized_type_or_function_type(&mut self) -> NodeIndex {
        if self.look_ahead_is_function_type() {
            return self.parse_function_type();
        }

        // Parenthesized type: grouping only, no wrapper node
        self.next_token();
        let inner = self.parse_type();
        self.parse_expected(SyntaxKind::CloseParenToken);
        inner
    }

    /// Decide `(…) => T` (function type) vs. `(T)` (parenthesized type) from
    /// the tokens after the open paren.
    fn look_ahead_is_function_type(&mut self) -> bool {
        let snapshot = self.scanner.save_state();
        let current = self.current_token;

        self.next_token(); // consume (
        let is_function_type = if self.is_token(SyntaxKind::CloseParenToken) {
            // () can only start a function type
            self.next_token();
            self.is_token(SyntaxKind::EqualsGreaterThanToken)
        } else if self.is_token(SyntaxKind::DotDotDotToken)
            || self.is_token(SyntaxKind::OpenBraceToken)
        {
            true
        } else if self.is_identifier_or_keyword() {
            self.next_token();
            match self.token() {
                // (a: …, (a, …, (a?…, (a = … all introduce a parameter list
                SyntaxKind::ColonToken
                | SyntaxKind::CommaToken
                | SyntaxKind::QuestionToken
                | SyntaxKind::EqualsToken => true,
                SyntaxKind::CloseParenToken => {
                    self.next_token();
                    self.is_token(SyntaxKind::EqualsGreaterThanToken)
                }
                _ => false,
            }
        } else {
            false
        };

        self.scanner.restore_state(snapshot);
        self.current_token = current;
        is_function_type
    }

    /// Parse `(params) => T`.
    fn parse_function_type(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();

        self.parse_expected(SyntaxKind::OpenParenToken);
        let parameters = self.parse_parameter_list();
        self.parse_expected(SyntaxKind::CloseParenToken);
        self.parse_expected(SyntaxKind::EqualsGreaterThanToken);
        let type_annotation = self.parse_return_type();

        self.arena.add_function_type(
            syntax_kind_ext::FUNCTION_TYPE,
            start_pos,
            self.node_end(),
            FunctionTypeData {
                parameters,
                type_annotation,
            },
        )
    }

    /// Parse type literal (anonymous object type): `{ a: number; b?: string }`.
    fn parse_type_literal(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBraceToken);

        let mut members = Vec::new();
        while !self.is_token(SyntaxKind::CloseBraceToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            if !self.is_identifier_or_keyword() {
                self.parse_error_at_current_token(
                    "Identifier expected.",
                    diagnostic_codes::IDENTIFIER_EXPECTED,
                );
                self.next_token(); // skip the problematic token
                continue;
            }

            members.push(self.parse_property_signature());

            // Members separate with , or ; trailing separators are allowed
            if !self.parse_optional(SyntaxKind::CommaToken) {
                self.parse_optional(SyntaxKind::SemicolonToken);
            }
        }

        self.parse_expected(SyntaxKind::CloseBraceToken);

        let end_pos = self.node_end();
        let members = self.make_node_list(members);
        self.arena.add_type_literal(
            syntax_kind_ext::TYPE_LITERAL,
            start_pos,
            end_pos,
            TypeLiteralData { members },
        )
    }

    fn parse_property_signature(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();

        let name = self.parse_identifier_name();
        let question_token = self.parse_optional(SyntaxKind::QuestionToken);
        let type_annotation = if self.parse_optional(SyntaxKind::ColonToken) {
            self.parse_type()
        } else {
            NodeIndex::NONE
        };

        self.arena.add_property_signature(
            syntax_kind_ext::PROPERTY_SIGNATURE,
            start_pos,
            self.node_end(),
            PropertySignatureData {
                name,
                question_token,
                type_annotation,
            },
        )
    }

    /// Parse a (possibly qualified, possibly generic) type reference.
    ///
    /// Keyword type names (`number`, `void`, …) parse as plain identifiers
    /// here; the converter's keyword table decides keyword-type vs.
    /// reference-type.
    fn parse_type_reference(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();

        let first_name = self.parse_identifier_name();
        let type_name = self.parse_qualified_name_rest(first_name);

        // Only parse type arguments when `<` is on the same line; a line
        // break before `<` means a new construct follows.
        let type_arguments = (self.is_token(SyntaxKind::LessThanToken)
            && !self.scanner.has_preceding_line_break())
        .then(|| self.parse_type_arguments());

        self.arena.add_type_ref(
            syntax_kind_ext::TYPE_REFERENCE,
            start_pos,
            self.node_end(),
            TypeRefData {
                type_name,
                type_arguments,
            },
        )
    }

    /// Extend an identifier into a qualified name while `.` follows.
    fn parse_qualified_name_rest(&mut self, first: NodeIndex) -> NodeIndex {
        let start_pos = self.arena.get(first).map_or_else(|| self.token_pos(), |n| n.pos);
        let mut name = first;
        while self.parse_optional(SyntaxKind::DotToken) {
            let right = if self.is_identifier_or_keyword() {
                self.parse_identifier_name()
            } else {
                self.parse_identifier()
            };
            name = self.arena.add_qualified_name(
                syntax_kind_ext::QUALIFIED_NAME,
                start_pos,
                self.node_end(),
                QualifiedNameData { left: name, right },
            );
        }
        name
    }

    /// Parse type arguments: `<T, U, V>`.
    pub(crate) fn parse_type_arguments(&mut self) -> NodeList {
        self.parse_expected(SyntaxKind::LessThanToken);

        let mut args = Vec::new();

        // TS1099: Type argument list cannot be empty
        if self.is_token(SyntaxKind::GreaterThanToken) {
            self.parse_error_at_current_token(
                "Type argument list cannot be empty.",
                diagnostic_codes::TYPE_ARGUMENT_LIST_CANNOT_BE_EMPTY,
            );
        } else {
            while !self.is_token(SyntaxKind::GreaterThanToken)
                && !self.is_token(SyntaxKind::EndOfFileToken)
            {
                args.push(self.parse_type());

                if !self.parse_optional(SyntaxKind::CommaToken) {
                    break;
                }
            }
        }

        self.parse_expected(SyntaxKind::GreaterThanToken);
        self.make_node_list(args)
    }
}
