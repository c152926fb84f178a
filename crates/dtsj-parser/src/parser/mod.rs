//! Parser internals: thin nodes, arena, and the recursive-descent state.

pub mod base;
pub mod node;
pub mod node_access;
pub mod node_arena;
pub mod state;
pub mod state_statements;
pub mod state_types;
pub mod syntax_kind_ext;

pub use base::{NodeIndex, NodeList};
pub use node::Node;
pub use node_arena::NodeArena;
pub use state::ParserState;
