//! dtsj - declaration-file to canonical JSON AST converter.
//!
//! The library surface carries the CLI plumbing used by the `dtsj` binary;
//! the conversion core lives in the `dtsj-json` crate and the front end in
//! `dtsj-scanner`/`dtsj-parser`.

pub mod cli;
pub mod tracing_config;
