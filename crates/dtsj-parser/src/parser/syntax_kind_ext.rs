//! Parsed-node kinds beyond the scanner's token range.
//!
//! The thin `Node.kind` field is a `u16` holding either a token kind
//! (`SyntaxKind as u16`) or one of these constants. All values here are above
//! `SyntaxKind::LAST_TOKEN`.

use dtsj_scanner::SyntaxKind;

pub const SOURCE_FILE: u16 = 301;
pub const FUNCTION_DECLARATION: u16 = 302;
pub const VARIABLE_STATEMENT: u16 = 303;
pub const VARIABLE_DECLARATION: u16 = 304;
pub const TYPE_ALIAS_DECLARATION: u16 = 305;
pub const PARAMETER: u16 = 306;
pub const OBJECT_BINDING_PATTERN: u16 = 307;
pub const BINDING_ELEMENT: u16 = 308;
pub const QUALIFIED_NAME: u16 = 309;
pub const TYPE_REFERENCE: u16 = 310;
pub const UNION_TYPE: u16 = 311;
pub const FUNCTION_TYPE: u16 = 312;
pub const TYPE_LITERAL: u16 = 313;
pub const PROPERTY_SIGNATURE: u16 = 314;
pub const TYPE_PREDICATE: u16 = 315;
pub const ARRAY_TYPE: u16 = 316;

/// Human-readable name for a `Node.kind` value, for diagnostics.
pub fn kind_name(kind: u16) -> &'static str {
    match kind {
        SOURCE_FILE => "SourceFile",
        FUNCTION_DECLARATION => "FunctionDeclaration",
        VARIABLE_STATEMENT => "VariableStatement",
        VARIABLE_DECLARATION => "VariableDeclaration",
        TYPE_ALIAS_DECLARATION => "TypeAliasDeclaration",
        PARAMETER => "Parameter",
        OBJECT_BINDING_PATTERN => "ObjectBindingPattern",
        BINDING_ELEMENT => "BindingElement",
        QUALIFIED_NAME => "QualifiedName",
        TYPE_REFERENCE => "TypeReference",
        UNION_TYPE => "UnionType",
        FUNCTION_TYPE => "FunctionType",
        TYPE_LITERAL => "TypeLiteral",
        PROPERTY_SIGNATURE => "PropertySignature",
        TYPE_PREDICATE => "TypePredicate",
        ARRAY_TYPE => "ArrayType",
        k if k == SyntaxKind::Identifier as u16 => "Identifier",
        k if k == SyntaxKind::StringLiteral as u16 => "StringLiteral",
        k if k == SyntaxKind::NumericLiteral as u16 => "NumericLiteral",
        _ => "Token",
    }
}
