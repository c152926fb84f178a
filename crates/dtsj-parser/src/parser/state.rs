//! Parser state - token plumbing, error reporting, and shared helpers.

use dtsj_common::diagnostics::{Diagnostic, diagnostic_codes};
use dtsj_common::interner::Atom;
use dtsj_scanner::{ScannerState, SyntaxKind};

use super::base::{NodeIndex, NodeList};
use super::node::IdentifierData;
use super::node_arena::NodeArena;

pub struct ParserState {
    pub scanner: ScannerState,
    pub current_token: SyntaxKind,
    pub arena: NodeArena,
    pub file_name: String,
    pub parse_diagnostics: Vec<Diagnostic>,
    /// End offset of the most recently consumed token; node end positions
    /// come from here so trailing trivia is never included.
    pub(crate) last_token_end: u32,
    /// Guard against pathological type nesting (see `limits::MAX_PARSE_TYPE_DEPTH`).
    pub(crate) type_depth: usize,
}

impl ParserState {
    pub fn new(file_name: String, source: String) -> ParserState {
        // Rough node-count heuristic for pool pre-allocation
        let arena = NodeArena::with_capacity(source.len() / 8);
        let mut scanner = ScannerState::new(source);
        let current_token = scanner.scan();
        ParserState {
            scanner,
            current_token,
            arena,
            file_name,
            parse_diagnostics: Vec::new(),
            last_token_end: 0,
            type_depth: 0,
        }
    }

    /// Consume the parser, yielding the arena and collected diagnostics.
    pub fn into_parts(self) -> (NodeArena, Vec<Diagnostic>) {
        (self.arena, self.parse_diagnostics)
    }

    // =========================================================================
    // Token plumbing
    // =========================================================================

    pub(crate) const fn token(&self) -> SyntaxKind {
        self.current_token
    }

    pub(crate) fn is_token(&self, kind: SyntaxKind) -> bool {
        self.current_token == kind
    }

    pub(crate) fn next_token(&mut self) {
        self.last_token_end = self.scanner.token_end();
        self.current_token = self.scanner.scan();
    }

    /// Start offset of the current (unconsumed) token.
    pub(crate) fn token_pos(&self) -> u32 {
        self.scanner.token_pos()
    }

    /// End offset of the current (unconsumed) token.
    pub(crate) fn token_end(&self) -> u32 {
        self.scanner.token_end()
    }

    /// End offset of the last consumed token.
    pub(crate) fn node_end(&self) -> u32 {
        self.last_token_end
    }

    /// Consume the current token if it matches.
    pub(crate) fn parse_optional(&mut self, kind: SyntaxKind) -> bool {
        if self.is_token(kind) {
            self.next_token();
            true
        } else {
            false
        }
    }

    /// Consume the expected token or report TS1005 without consuming.
    pub(crate) fn parse_expected(&mut self, kind: SyntaxKind) -> bool {
        if self.is_token(kind) {
            self.next_token();
            return true;
        }
        let expected = token_display(kind);
        self.parse_error_at_current_token(
            &format!("'{expected}' expected."),
            diagnostic_codes::EXPECTED,
        );
        false
    }

    pub(crate) fn is_identifier_or_keyword(&self) -> bool {
        self.is_token(SyntaxKind::Identifier) || self.current_token.is_keyword()
    }

    // =========================================================================
    // Error reporting
    // =========================================================================

    pub(crate) fn parse_error_at(&mut self, start: u32, length: u32, message: &str, code: u32) {
        self.parse_diagnostics.push(Diagnostic::error(
            self.file_name.clone(),
            start,
            length,
            message,
            code,
        ));
    }

    pub(crate) fn parse_error_at_current_token(&mut self, message: &str, code: u32) {
        let start = self.token_pos();
        let length = self.token_end().saturating_sub(start);
        self.parse_error_at(start, length, message, code);
    }

    pub(crate) fn error_expression_expected(&mut self) {
        self.parse_error_at_current_token(
            "Expression expected.",
            diagnostic_codes::EXPRESSION_EXPECTED,
        );
    }

    pub(crate) fn error_type_expected(&mut self) {
        self.parse_error_at_current_token("Type expected.", diagnostic_codes::TYPE_EXPECTED);
    }

    // =========================================================================
    // Identifiers
    // =========================================================================

    /// Parse an identifier; reports TS1003 and produces a synthetic empty
    /// identifier when the current token is not one.
    pub(crate) fn parse_identifier(&mut self) -> NodeIndex {
        if self.is_token(SyntaxKind::Identifier) {
            return self.parse_identifier_name();
        }
        self.parse_error_at_current_token(
            "Identifier expected.",
            diagnostic_codes::IDENTIFIER_EXPECTED,
        );
        self.error_node()
    }

    /// Parse an identifier, admitting keywords as names (`declare var is;`).
    pub(crate) fn parse_identifier_name(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let text = match self.current_token.keyword_text() {
            Some(keyword) => keyword.to_string(),
            None => self.scanner.get_token_value_ref().to_string(),
        };
        self.next_token();
        let atom = self.arena.interner_mut().intern(&text);
        self.arena.add_identifier(
            SyntaxKind::Identifier as u16,
            start_pos,
            self.node_end(),
            IdentifierData {
                atom,
                escaped_text: text,
            },
        )
    }

    /// Synthetic identifier node for error recovery.
    pub(crate) fn error_node(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.arena.add_identifier(
            SyntaxKind::Identifier as u16,
            start_pos,
            start_pos,
            IdentifierData {
                atom: Atom::NONE,
                escaped_text: String::new(),
            },
        )
    }

    pub(crate) fn make_node_list(&mut self, nodes: Vec<NodeIndex>) -> NodeList {
        NodeList::new(nodes)
    }
}

/// Display text for expected-token diagnostics.
fn token_display(kind: SyntaxKind) -> &'static str {
    if let Some(keyword) = kind.keyword_text() {
        return keyword;
    }
    match kind {
        SyntaxKind::OpenBraceToken => "{",
        SyntaxKind::CloseBraceToken => "}",
        SyntaxKind::OpenParenToken => "(",
        SyntaxKind::CloseParenToken => ")",
        SyntaxKind::OpenBracketToken => "[",
        SyntaxKind::CloseBracketToken => "]",
        SyntaxKind::SemicolonToken => ";",
        SyntaxKind::CommaToken => ",",
        SyntaxKind::LessThanToken => "<",
        SyntaxKind::GreaterThanToken => ">",
        SyntaxKind::EqualsToken => "=",
        SyntaxKind::EqualsGreaterThanToken => "=>",
        SyntaxKind::QuestionToken => "?",
        SyntaxKind::ColonToken => ":",
        SyntaxKind::DotToken => ".",
        SyntaxKind::DotDotDotToken => "...",
        SyntaxKind::BarToken => "|",
        SyntaxKind::Identifier => "identifier",
        _ => "token",
    }
}
