//! Common types and utilities for the dtsj declaration converter.
//!
//! This crate provides foundational types used across all dtsj crates:
//! - String interning (`Atom`, `Interner`)
//! - Position/line-map types for line/column source locations
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`, error codes)
//! - Centralized limits and thresholds

// String interning for identifier deduplication
pub mod interner;
pub use interner::{Atom, Interner};

// Position/LineMap types for line/column source locations
pub mod position;
pub use position::{LineMap, Position};

// Diagnostics with TypeScript-compatible error codes
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory};

// Centralized limits and thresholds
pub mod limits;
