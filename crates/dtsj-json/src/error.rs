//! Conversion error types.

use std::fmt;

use dtsj_common::diagnostics::{Diagnostic, diagnostic_codes};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConvertErrorKind {
    /// The source node kind has no converter. Skipped at top level unless
    /// the converter is configured to fail fast.
    UnsupportedConstruct,
    /// A shape invariant the converter assumes is violated (e.g. a
    /// non-trailing rest binding element). Always fatal for the containing
    /// statement, never coerced.
    MalformedShape,
    /// The recursion guard tripped.
    DepthExceeded,
}

impl ConvertErrorKind {
    pub const fn code(self) -> u32 {
        match self {
            ConvertErrorKind::UnsupportedConstruct => {
                diagnostic_codes::UNSUPPORTED_TOP_LEVEL_CONSTRUCT
            }
            ConvertErrorKind::MalformedShape => diagnostic_codes::MALFORMED_SYNTAX_SHAPE,
            ConvertErrorKind::DepthExceeded => diagnostic_codes::CONVERSION_DEPTH_EXCEEDED,
        }
    }
}

/// A failed conversion, tagged with the offending node kind and source
/// offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertError {
    pub kind: ConvertErrorKind,
    /// Name of the source node kind the converter was looking at.
    pub node_kind: &'static str,
    /// Byte offset of that node in the source file.
    pub pos: u32,
    pub message: String,
}

impl ConvertError {
    pub fn new(
        kind: ConvertErrorKind,
        node_kind: &'static str,
        pos: u32,
        message: impl Into<String>,
    ) -> ConvertError {
        ConvertError {
            kind,
            node_kind,
            pos,
            message: message.into(),
        }
    }

    /// Render as a diagnostic against the given file. Unsupported constructs
    /// report as warnings (they are skipped, not fatal); the other kinds are
    /// errors.
    pub fn to_diagnostic(&self, file_name: &str) -> Diagnostic {
        match self.kind {
            ConvertErrorKind::UnsupportedConstruct => {
                Diagnostic::warning(file_name, self.pos, 0, self.to_string(), self.kind.code())
            }
            _ => Diagnostic::error(file_name, self.pos, 0, self.to_string(), self.kind.code()),
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} at offset {})", self.message, self.node_kind, self.pos)
    }
}

impl std::error::Error for ConvertError {}

pub type ConvertResult<T> = Result<T, ConvertError>;
