//! Canonical JSON AST for declaration files.
//!
//! The seam between the declaration parser and any downstream consumer is a
//! small, closed, stable set of canonical node kinds with a deterministic
//! field layout:
//!
//! - [`kinds`] - the closed `ConvertedSyntaxKind` enumeration, frozen under
//!   [`SCHEMA_VERSION`]
//! - [`nodes`] - the canonical node types themselves
//! - [`converter`] - the structural converter from the parser's thin-node
//!   arena into canonical nodes
//! - [`ser`] - the deterministic serializer (stable key order, stable
//!   indentation); byte-identical output is the equality oracle
//! - [`error`] - conversion error kinds and statement-level isolation

pub mod converter;
pub mod error;
pub mod kinds;
pub mod nodes;
pub mod ser;

pub use converter::{Converter, ConverterOptions};
pub use error::{ConvertError, ConvertErrorKind, ConvertResult};
pub use kinds::{ConvertedSyntaxKind, SCHEMA_VERSION};
pub use nodes::{
    BindingElement, BindingElementName, FunctionDeclaration, FunctionType, KeywordType, Modifier,
    ObjectBindingPattern, Parameter, ParameterName, PropertyDeclaration, SourceFile, Statement,
    TypeLiteral, TypeNode, TypePredicate, TypeReference, UnionType,
};
pub use ser::pretty_stringify;
