//! Canonical node types.
//!
//! One type per [`ConvertedSyntaxKind`](crate::kinds::ConvertedSyntaxKind).
//! Every non-root node is owned exclusively by its parent; the tree is built
//! in one pass and never mutated afterwards. Containers are ordered and the
//! order is source declaration order.
//!
//! Serialization (key order, omission of absent fields) lives in
//! [`crate::ser`]; these types carry no serde derives so the field layout of
//! the output never silently drifts with a struct edit.

use crate::kinds::ConvertedSyntaxKind;

/// Root of one converted unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Logical path of the converted unit.
    pub file_name: String,
    pub statements: Vec<Statement>,
}

/// A converted top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    FunctionDeclaration(FunctionDeclaration),
}

impl Statement {
    pub const fn kind(&self) -> ConvertedSyntaxKind {
        match self {
            Statement::FunctionDeclaration(_) => ConvertedSyntaxKind::FunctionDeclaration,
        }
    }
}

/// Canonical modifier tokens, ordered and deduplicated per declaration.
///
/// The ambient `declare` keyword is dropped during conversion; everything in
/// the output format is ambient.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Modifier {
    Export,
    Default,
    Abstract,
    Static,
    Readonly,
    Public,
    Private,
    Protected,
    Async,
}

impl Modifier {
    pub const fn as_str(self) -> &'static str {
        match self {
            Modifier::Export => "export",
            Modifier::Default => "default",
            Modifier::Abstract => "abstract",
            Modifier::Static => "static",
            Modifier::Readonly => "readonly",
            Modifier::Public => "public",
            Modifier::Private => "private",
            Modifier::Protected => "protected",
            Modifier::Async => "async",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDeclaration {
    pub modifiers: Vec<Modifier>,
    pub name: String,
    pub parameters: Vec<Parameter>,
    /// `None` means "no declared return type", distinct from an explicit
    /// `void` keyword type.
    pub return_type: Option<TypeNode>,
}

/// A simple identifier binding or a destructuring pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterName {
    Identifier(String),
    Pattern(ObjectBindingPattern),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: ParameterName,
    /// True for a `?` marker or a default-value initializer.
    /// Mutually exclusive with `rest`.
    pub optional: bool,
    /// True only for a trailing variadic parameter.
    pub rest: bool,
    pub type_annotation: Option<TypeNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectBindingPattern {
    pub elements: Vec<BindingElement>,
}

/// Identifier or nested pattern bound by a [`BindingElement`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingElementName {
    Identifier(String),
    Pattern(ObjectBindingPattern),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingElement {
    pub name: BindingElementName,
    /// At most one element per pattern, and it must be last.
    pub rest: bool,
}

/// A type expression. The set of variants is closed; the converter's type
/// dispatch matches exhaustively over source kinds and produces exactly
/// these shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeNode {
    Keyword(KeywordType),
    Reference(TypeReference),
    Union(UnionType),
    Function(Box<FunctionType>),
    Literal(TypeLiteral),
    Predicate(Box<TypePredicate>),
}

impl TypeNode {
    pub const fn kind(&self) -> ConvertedSyntaxKind {
        match self {
            TypeNode::Keyword(_) => ConvertedSyntaxKind::KeywordType,
            TypeNode::Reference(_) => ConvertedSyntaxKind::TypeReference,
            TypeNode::Union(_) => ConvertedSyntaxKind::UnionType,
            TypeNode::Function(_) => ConvertedSyntaxKind::FunctionType,
            TypeNode::Literal(_) => ConvertedSyntaxKind::TypeLiteral,
            TypeNode::Predicate(_) => ConvertedSyntaxKind::TypePredicate,
        }
    }
}

/// Leaf node for the fixed keyword-type set (`number`, `void`, …).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordType {
    pub type_name: String,
}

/// Named or generic type, including built-in parametrized types; `T[]`
/// converts to a reference to `Array` with one type argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeReference {
    /// Identifier or dotted qualified name.
    pub type_name: String,
    /// `None` when the source reference carries no type-argument list.
    pub type_arguments: Option<Vec<TypeNode>>,
}

/// Union alternatives in source order; never deduplicated or reordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionType {
    pub types: Vec<TypeNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionType {
    pub parameters: Vec<Parameter>,
    pub return_type: Option<TypeNode>,
}

/// Structural (anonymous) object type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeLiteral {
    pub members: Vec<PropertyDeclaration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDeclaration {
    pub name: String,
    pub optional: bool,
    pub type_annotation: Option<TypeNode>,
}

/// Narrowing return-type assertion on a named parameter
/// (`x is T`, `asserts x`, `asserts x is T`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypePredicate {
    pub asserts_modifier: bool,
    pub parameter_name: String,
    /// Absent for a bare `asserts x`.
    pub type_annotation: Option<TypeNode>,
}
