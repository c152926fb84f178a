//! Declaration-file parser for the dtsj converter.
//!
//! Parses the declaration subset (function, variable, and type-alias
//! declarations with the full type-annotation grammar) into a thin-node
//! arena AST. The structural converter in `dtsj-json` consumes the arena
//! read-only.

pub mod parser;

pub use parser::{NodeArena, NodeIndex, NodeList, ParserState};
