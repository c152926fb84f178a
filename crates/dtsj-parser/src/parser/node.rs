//! Thin node records and per-kind data payloads.
//!
//! A [`Node`] is four words: kind tag, source span, and an index into the
//! typed side pool for its kind. Kinds with no payload (modifier tokens) use
//! `Node::NO_DATA`.

use dtsj_common::interner::Atom;

use super::base::{NodeIndex, NodeList};

#[derive(Copy, Clone, Debug)]
pub struct Node {
    /// Token kind (`SyntaxKind as u16`) or `syntax_kind_ext` constant.
    pub kind: u16,
    pub pos: u32,
    pub end: u32,
    /// Index into the side pool for this kind, or `NO_DATA`.
    pub data_index: u32,
}

impl Node {
    pub const NO_DATA: u32 = u32::MAX;

    pub const fn has_data(&self) -> bool {
        self.data_index != Node::NO_DATA
    }
}

#[derive(Debug, Clone)]
pub struct IdentifierData {
    pub atom: Atom,
    /// Fallback text for synthetic identifiers created during error recovery.
    pub escaped_text: String,
}

/// `left.right` in a type name. `left` is an identifier or another
/// qualified name; `right` is always an identifier.
#[derive(Debug, Clone, Copy)]
pub struct QualifiedNameData {
    pub left: NodeIndex,
    pub right: NodeIndex,
}

/// String or numeric literal token (parameter/binding initializers).
#[derive(Debug, Clone)]
pub struct LiteralData {
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct SourceFileData {
    pub file_name: String,
    pub statements: NodeList,
}

#[derive(Debug, Clone)]
pub struct FunctionData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub parameters: NodeList,
    /// Declared return type, `NONE` when unannotated.
    pub type_annotation: NodeIndex,
}

#[derive(Debug, Clone)]
pub struct VariableStatementData {
    pub modifiers: Option<NodeList>,
    pub declarations: NodeList,
}

#[derive(Debug, Clone, Copy)]
pub struct VariableDeclarationData {
    pub name: NodeIndex,
    pub type_annotation: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Debug, Clone)]
pub struct TypeAliasData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub type_node: NodeIndex,
}

#[derive(Debug, Clone, Copy)]
pub struct ParameterData {
    pub dot_dot_dot_token: bool,
    /// Identifier or object binding pattern.
    pub name: NodeIndex,
    pub question_token: bool,
    pub type_annotation: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Debug, Clone)]
pub struct BindingPatternData {
    pub elements: NodeList,
}

#[derive(Debug, Clone, Copy)]
pub struct BindingElementData {
    pub dot_dot_dot_token: bool,
    /// Source property being destructured in the `prop: binding` form;
    /// `NONE` for shorthand elements.
    pub property_name: NodeIndex,
    /// Identifier or nested binding pattern.
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Debug, Clone)]
pub struct TypeRefData {
    /// Identifier or qualified name.
    pub type_name: NodeIndex,
    /// `None` when the reference has no type-argument list.
    pub type_arguments: Option<NodeList>,
}

/// Union constituents, in source order.
#[derive(Debug, Clone)]
pub struct CompositeTypeData {
    pub types: NodeList,
}

#[derive(Debug, Clone)]
pub struct FunctionTypeData {
    pub parameters: NodeList,
    pub type_annotation: NodeIndex,
}

#[derive(Debug, Clone)]
pub struct TypeLiteralData {
    pub members: NodeList,
}

#[derive(Debug, Clone, Copy)]
pub struct PropertySignatureData {
    pub name: NodeIndex,
    pub question_token: bool,
    pub type_annotation: NodeIndex,
}

#[derive(Debug, Clone, Copy)]
pub struct TypePredicateData {
    pub asserts_modifier: bool,
    pub parameter_name: NodeIndex,
    /// Asserted type; `NONE` for a bare `asserts x`.
    pub type_node: NodeIndex,
}

#[derive(Debug, Clone, Copy)]
pub struct ArrayTypeData {
    pub element_type: NodeIndex,
}
