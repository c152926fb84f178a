//! Deterministic serialization of the canonical AST.
//!
//! Keys are written in one fixed, schema-defined order (never insertion
//! order), absent optional fields are omitted entirely, and rendering goes
//! through `serde_json` pretty printing: two-space indent, `\n` separators,
//! no trailing whitespace. Two trees are equal for test purposes iff their
//! serializations are byte-identical.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::kinds::ConvertedSyntaxKind;
use crate::nodes::*;

/// Render any canonical node as its stable, human-diffable textual form.
///
/// Total over the schema; serialization of canonical nodes writes to an
/// in-memory string and cannot fail.
pub fn pretty_stringify<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).expect("canonical AST serialization is total")
}

impl Serialize for SourceFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SourceFile", 3)?;
        state.serialize_field("kind", ConvertedSyntaxKind::SourceFile.as_str())?;
        state.serialize_field("fileName", &self.file_name)?;
        state.serialize_field("statements", &self.statements)?;
        state.end()
    }
}

impl Serialize for Statement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Statement::FunctionDeclaration(function) => function.serialize(serializer),
        }
    }
}

impl Serialize for Modifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for FunctionDeclaration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 4 + usize::from(self.return_type.is_some());
        let mut state = serializer.serialize_struct("FunctionDeclaration", len)?;
        state.serialize_field("kind", ConvertedSyntaxKind::FunctionDeclaration.as_str())?;
        state.serialize_field("modifiers", &self.modifiers)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("parameters", &self.parameters)?;
        if let Some(return_type) = &self.return_type {
            state.serialize_field("type", return_type)?;
        }
        state.end()
    }
}

impl Serialize for ParameterName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParameterName::Identifier(name) => serializer.serialize_str(name),
            ParameterName::Pattern(pattern) => pattern.serialize(serializer),
        }
    }
}

impl Serialize for Parameter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 4 + usize::from(self.type_annotation.is_some());
        let mut state = serializer.serialize_struct("Parameter", len)?;
        state.serialize_field("kind", ConvertedSyntaxKind::Parameter.as_str())?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("optional", &self.optional)?;
        state.serialize_field("rest", &self.rest)?;
        if let Some(type_annotation) = &self.type_annotation {
            state.serialize_field("type", type_annotation)?;
        }
        state.end()
    }
}

impl Serialize for ObjectBindingPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ObjectBindingPattern", 2)?;
        state.serialize_field("kind", ConvertedSyntaxKind::ObjectBindingPattern.as_str())?;
        state.serialize_field("elements", &self.elements)?;
        state.end()
    }
}

impl Serialize for BindingElementName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BindingElementName::Identifier(name) => serializer.serialize_str(name),
            BindingElementName::Pattern(pattern) => pattern.serialize(serializer),
        }
    }
}

impl Serialize for BindingElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("BindingElement", 3)?;
        state.serialize_field("kind", ConvertedSyntaxKind::BindingElement.as_str())?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("rest", &self.rest)?;
        state.end()
    }
}

impl Serialize for TypeNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TypeNode::Keyword(keyword) => keyword.serialize(serializer),
            TypeNode::Reference(reference) => reference.serialize(serializer),
            TypeNode::Union(union) => union.serialize(serializer),
            TypeNode::Function(function) => function.serialize(serializer),
            TypeNode::Literal(literal) => literal.serialize(serializer),
            TypeNode::Predicate(predicate) => predicate.serialize(serializer),
        }
    }
}

impl Serialize for KeywordType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("KeywordType", 2)?;
        state.serialize_field("kind", ConvertedSyntaxKind::KeywordType.as_str())?;
        state.serialize_field("typeName", &self.type_name)?;
        state.end()
    }
}

impl Serialize for TypeReference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 2 + usize::from(self.type_arguments.is_some());
        let mut state = serializer.serialize_struct("TypeReference", len)?;
        state.serialize_field("kind", ConvertedSyntaxKind::TypeReference.as_str())?;
        state.serialize_field("typeName", &self.type_name)?;
        if let Some(type_arguments) = &self.type_arguments {
            state.serialize_field("typeArguments", type_arguments)?;
        }
        state.end()
    }
}

impl Serialize for UnionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("UnionType", 2)?;
        state.serialize_field("kind", ConvertedSyntaxKind::UnionType.as_str())?;
        state.serialize_field("types", &self.types)?;
        state.end()
    }
}

impl Serialize for FunctionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 2 + usize::from(self.return_type.is_some());
        let mut state = serializer.serialize_struct("FunctionType", len)?;
        state.serialize_field("kind", ConvertedSyntaxKind::FunctionType.as_str())?;
        state.serialize_field("parameters", &self.parameters)?;
        if let Some(return_type) = &self.return_type {
            state.serialize_field("type", return_type)?;
        }
        state.end()
    }
}

impl Serialize for TypeLiteral {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TypeLiteral", 2)?;
        state.serialize_field("kind", ConvertedSyntaxKind::TypeLiteral.as_str())?;
        state.serialize_field("members", &self.members)?;
        state.end()
    }
}

impl Serialize for PropertyDeclaration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 3 + usize::from(self.type_annotation.is_some());
        let mut state = serializer.serialize_struct("PropertyDeclaration", len)?;
        state.serialize_field("kind", ConvertedSyntaxKind::PropertyDeclaration.as_str())?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("optional", &self.optional)?;
        if let Some(type_annotation) = &self.type_annotation {
            state.serialize_field("type", type_annotation)?;
        }
        state.end()
    }
}

impl Serialize for TypePredicate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 3 + usize::from(self.type_annotation.is_some());
        let mut state = serializer.serialize_struct("TypePredicate", len)?;
        state.serialize_field("kind", ConvertedSyntaxKind::TypePredicate.as_str())?;
        state.serialize_field("assertsModifier", &self.asserts_modifier)?;
        state.serialize_field("parameterName", &self.parameter_name)?;
        if let Some(type_annotation) = &self.type_annotation {
            state.serialize_field("type", type_annotation)?;
        }
        state.end()
    }
}
