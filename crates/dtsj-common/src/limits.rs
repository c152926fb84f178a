//! Centralized limits and thresholds.
//!
//! Shared constants for recursion depths and capacity limits used across the
//! dtsj crates. Centralizing these prevents duplicate definitions with
//! inconsistent values.

/// Maximum nesting depth the structural converter will follow.
///
/// Conversion recursion is bounded by source nesting depth (function types
/// nested in function types, binding patterns nested in binding patterns).
/// Crossing this limit aborts conversion of the containing statement with a
/// `DepthExceeded` error instead of exhausting the stack.
pub const MAX_CONVERT_DEPTH: usize = 200;

/// Maximum nesting depth for type parsing.
///
/// The parser recurses over the same structures the converter does, so it
/// carries the same class of guard. Kept above `MAX_CONVERT_DEPTH` so a tree
/// that parses is rejected by the converter's own guard, which owns the
/// user-facing error.
pub const MAX_PARSE_TYPE_DEPTH: usize = 250;

/// Pre-allocation cap for the node arena, to avoid capacity overflow on
/// pathological inputs.
pub const MAX_NODE_PREALLOC: usize = 1_000_000;
