//! The closed canonical kind enumeration.
//!
//! This is a data contract, versioned independently of the converter so
//! downstream generators can pin an expected schema revision. Adding a new
//! source construct requires adding its kind here first; the converter never
//! emits an undeclared kind.

/// Revision of the canonical schema. Bump on any change to the kind set or
/// to a kind's field layout.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConvertedSyntaxKind {
    SourceFile,
    FunctionDeclaration,
    Parameter,
    ObjectBindingPattern,
    BindingElement,
    KeywordType,
    TypeReference,
    UnionType,
    FunctionType,
    TypeLiteral,
    PropertyDeclaration,
    TypePredicate,
}

impl ConvertedSyntaxKind {
    /// The serialized `kind` tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            ConvertedSyntaxKind::SourceFile => "SourceFile",
            ConvertedSyntaxKind::FunctionDeclaration => "FunctionDeclaration",
            ConvertedSyntaxKind::Parameter => "Parameter",
            ConvertedSyntaxKind::ObjectBindingPattern => "ObjectBindingPattern",
            ConvertedSyntaxKind::BindingElement => "BindingElement",
            ConvertedSyntaxKind::KeywordType => "KeywordType",
            ConvertedSyntaxKind::TypeReference => "TypeReference",
            ConvertedSyntaxKind::UnionType => "UnionType",
            ConvertedSyntaxKind::FunctionType => "FunctionType",
            ConvertedSyntaxKind::TypeLiteral => "TypeLiteral",
            ConvertedSyntaxKind::PropertyDeclaration => "PropertyDeclaration",
            ConvertedSyntaxKind::TypePredicate => "TypePredicate",
        }
    }
}

impl std::fmt::Display for ConvertedSyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
