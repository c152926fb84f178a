//! Declaration-file scanner/tokenizer for the dtsj converter.
//!
//! This crate provides the lexical analysis phase:
//! - `SyntaxKind` - Token types
//! - `ScannerState` - Tokenizer state machine

pub mod scanner;
pub mod syntax_kind;

pub use scanner::{ScannerSnapshot, ScannerState};
pub use syntax_kind::SyntaxKind;
