//! The structural converter.
//!
//! A recursive-descent, dispatch-by-kind transform from the parser's
//! thin-node arena into canonical nodes. One conversion function exists per
//! supported source kind; each is total over the shapes the grammar permits
//! and pure over the input tree, so identical input always yields an
//! identical canonical tree.
//!
//! Failure semantics: conversion of one top-level statement never corrupts
//! or aborts conversion of its siblings. A failed statement is dropped and
//! recorded as a diagnostic; `ConverterOptions::fail_fast` propagates the
//! first failure instead.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

use dtsj_common::diagnostics::Diagnostic;
use dtsj_common::limits;
use dtsj_parser::parser::node::Node;
use dtsj_parser::parser::syntax_kind_ext::{self, kind_name};
use dtsj_parser::{NodeArena, NodeIndex, NodeList};
use dtsj_scanner::SyntaxKind;

use crate::error::{ConvertError, ConvertErrorKind, ConvertResult};
use crate::nodes::*;

/// The fixed keyword-type name set. A type reference whose name is listed
/// here and which carries no type arguments converts to `KeywordType`;
/// everything else stays a `TypeReference`.
static KEYWORD_TYPE_NAMES: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "any",
        "unknown",
        "never",
        "void",
        "undefined",
        "null",
        "boolean",
        "number",
        "string",
        "symbol",
        "bigint",
        "object",
    ]
    .into_iter()
    .collect()
});

/// Source modifier tokens that survive conversion, with their canonical
/// form. `declare` is intentionally absent: the output format is entirely
/// ambient, so the keyword carries no information.
const MODIFIER_TOKENS: &[(SyntaxKind, Modifier)] = &[
    (SyntaxKind::ExportKeyword, Modifier::Export),
    (SyntaxKind::DefaultKeyword, Modifier::Default),
    (SyntaxKind::AbstractKeyword, Modifier::Abstract),
    (SyntaxKind::StaticKeyword, Modifier::Static),
    (SyntaxKind::ReadonlyKeyword, Modifier::Readonly),
    (SyntaxKind::PublicKeyword, Modifier::Public),
    (SyntaxKind::PrivateKeyword, Modifier::Private),
    (SyntaxKind::ProtectedKeyword, Modifier::Protected),
    (SyntaxKind::AsyncKeyword, Modifier::Async),
];

fn modifier_from_kind(kind: u16) -> Option<Modifier> {
    MODIFIER_TOKENS
        .iter()
        .find(|(token, _)| *token as u16 == kind)
        .map(|(_, modifier)| *modifier)
}

#[derive(Copy, Clone, Debug)]
pub struct ConverterOptions {
    /// Propagate the first conversion failure instead of isolating failures
    /// at statement granularity.
    pub fail_fast: bool,
    /// Recursion guard; conversion deeper than this fails with
    /// `DepthExceeded`.
    pub max_depth: usize,
}

impl Default for ConverterOptions {
    fn default() -> ConverterOptions {
        ConverterOptions {
            fail_fast: false,
            max_depth: limits::MAX_CONVERT_DEPTH,
        }
    }
}

/// Converts a parsed source file into the canonical AST.
///
/// The arena is read strictly read-only; the converter owns only its
/// options and the diagnostics it accumulates for dropped statements.
pub struct Converter<'a> {
    arena: &'a NodeArena,
    options: ConverterOptions,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Converter<'a> {
    pub fn new(arena: &'a NodeArena) -> Converter<'a> {
        Converter::with_options(arena, ConverterOptions::default())
    }

    pub fn with_options(arena: &'a NodeArena, options: ConverterOptions) -> Converter<'a> {
        Converter {
            arena,
            options,
            diagnostics: Vec::new(),
        }
    }

    /// Diagnostics for statements dropped during conversion.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Convert a parsed source-file root into a canonical `SourceFile`,
    /// one converted statement per supported top-level declaration,
    /// preserving order.
    pub fn convert_source_file(&mut self, root: NodeIndex) -> ConvertResult<SourceFile> {
        let node = self.node(root)?;
        let data = self
            .arena
            .get_source_file(node)
            .ok_or_else(|| self.malformed(node, "root node is not a source file"))?;
        tracing::trace!(
            file = %data.file_name,
            statements = data.statements.len(),
            "convert_source_file"
        );

        let mut statements = Vec::with_capacity(data.statements.len());
        for statement_index in data.statements.iter() {
            match self.convert_statement(statement_index) {
                Ok(statement) => statements.push(statement),
                Err(error) => {
                    if self.options.fail_fast {
                        return Err(error);
                    }
                    // Statement-granularity isolation: drop this statement,
                    // keep converting its siblings.
                    tracing::debug!(%error, "statement dropped");
                    self.diagnostics.push(error.to_diagnostic(&data.file_name));
                }
            }
        }

        Ok(SourceFile {
            file_name: data.file_name.clone(),
            statements,
        })
    }

    fn convert_statement(&self, index: NodeIndex) -> ConvertResult<Statement> {
        let node = self.node(index)?;
        match node.kind {
            syntax_kind_ext::FUNCTION_DECLARATION => self.convert_function_declaration(node),
            _ => Err(ConvertError::new(
                ConvertErrorKind::UnsupportedConstruct,
                kind_name(node.kind),
                node.pos,
                format!(
                    "no converter for top-level construct '{}'",
                    kind_name(node.kind)
                ),
            )),
        }
    }

    fn convert_function_declaration(&self, node: &'a Node) -> ConvertResult<Statement> {
        let data = self
            .arena
            .get_function(node)
            .ok_or_else(|| self.malformed(node, "function declaration without payload"))?;

        let name = self
            .arena
            .identifier_text(data.name)
            .ok_or_else(|| self.malformed(node, "function declaration without a name"))?
            .to_string();

        Ok(Statement::FunctionDeclaration(FunctionDeclaration {
            modifiers: self.convert_modifiers(data.modifiers.as_ref()),
            name,
            parameters: self.convert_parameter_list(&data.parameters, 1)?,
            return_type: self.convert_optional_type(data.type_annotation, 1)?,
        }))
    }

    /// Extract the ordered, deduplicated canonical modifier set. Absence of
    /// modifiers yields an empty sequence, never an absent field.
    fn convert_modifiers(&self, modifiers: Option<&NodeList>) -> Vec<Modifier> {
        let mut converted = Vec::new();
        let Some(list) = modifiers else {
            return converted;
        };
        for index in list.iter() {
            let Some(node) = self.arena.get(index) else {
                continue;
            };
            if let Some(modifier) = modifier_from_kind(node.kind) {
                if !converted.contains(&modifier) {
                    converted.push(modifier);
                }
            }
        }
        converted
    }

    /// Convert parameters by positional walk. `rest` is only legal on the
    /// trailing parameter.
    fn convert_parameter_list(
        &self,
        parameters: &NodeList,
        depth: usize,
    ) -> ConvertResult<Vec<Parameter>> {
        let last = parameters.len().saturating_sub(1);
        parameters
            .iter()
            .enumerate()
            .map(|(position, index)| self.convert_parameter(index, position == last, depth))
            .collect()
    }

    fn convert_parameter(
        &self,
        index: NodeIndex,
        is_last: bool,
        depth: usize,
    ) -> ConvertResult<Parameter> {
        let node = self.node(index)?;
        self.check_depth(depth, node)?;
        let data = self
            .arena
            .get_parameter(node)
            .ok_or_else(|| self.malformed(node, "expected a parameter node"))?;

        let rest = data.dot_dot_dot_token;
        if rest && !is_last {
            return Err(self.malformed(node, "rest parameter is not last in its parameter list"));
        }

        // Policy: a default value marks the parameter optional, the same as
        // an explicit `?`.
        let optional = data.question_token || data.initializer.is_some();
        if rest && optional {
            return Err(self.malformed(node, "rest parameter cannot be optional"));
        }

        Ok(Parameter {
            name: self.convert_parameter_name(data.name, depth)?,
            optional,
            rest,
            type_annotation: self.convert_optional_type(data.type_annotation, depth + 1)?,
        })
    }

    fn convert_parameter_name(
        &self,
        index: NodeIndex,
        depth: usize,
    ) -> ConvertResult<ParameterName> {
        let node = self.node(index)?;
        if node.kind == SyntaxKind::Identifier as u16 {
            let text = self
                .arena
                .identifier_text(index)
                .ok_or_else(|| self.malformed(node, "identifier without text"))?;
            return Ok(ParameterName::Identifier(text.to_string()));
        }
        if node.kind == syntax_kind_ext::OBJECT_BINDING_PATTERN {
            return Ok(ParameterName::Pattern(
                self.convert_binding_pattern(node, depth + 1)?,
            ));
        }
        Err(self.malformed(node, "parameter name must be an identifier or binding pattern"))
    }

    fn convert_binding_pattern(
        &self,
        node: &'a Node,
        depth: usize,
    ) -> ConvertResult<ObjectBindingPattern> {
        self.check_depth(depth, node)?;
        let data = self
            .arena
            .get_binding_pattern(node)
            .ok_or_else(|| self.malformed(node, "binding pattern without payload"))?;

        let last = data.elements.len().saturating_sub(1);
        let elements = data
            .elements
            .iter()
            .enumerate()
            .map(|(position, index)| {
                self.convert_binding_element(index, position == last, depth)
            })
            .collect::<ConvertResult<Vec<_>>>()?;

        Ok(ObjectBindingPattern { elements })
    }

    fn convert_binding_element(
        &self,
        index: NodeIndex,
        is_last: bool,
        depth: usize,
    ) -> ConvertResult<BindingElement> {
        let node = self.node(index)?;
        let data = self
            .arena
            .get_binding_element(node)
            .ok_or_else(|| self.malformed(node, "expected a binding element node"))?;

        let rest = data.dot_dot_dot_token;
        if rest && !is_last {
            return Err(self.malformed(node, "rest binding element is not last in its pattern"));
        }

        let name_node = self.node(data.name)?;
        let name = if name_node.kind == SyntaxKind::Identifier as u16 {
            let text = self
                .arena
                .identifier_text(data.name)
                .ok_or_else(|| self.malformed(name_node, "identifier without text"))?;
            BindingElementName::Identifier(text.to_string())
        } else if name_node.kind == syntax_kind_ext::OBJECT_BINDING_PATTERN {
            BindingElementName::Pattern(self.convert_binding_pattern(name_node, depth + 1)?)
        } else {
            return Err(
                self.malformed(name_node, "binding element name must be an identifier or pattern")
            );
        };

        Ok(BindingElement { name, rest })
    }

    fn convert_optional_type(
        &self,
        index: NodeIndex,
        depth: usize,
    ) -> ConvertResult<Option<TypeNode>> {
        if index.is_none() {
            return Ok(None);
        }
        self.convert_type(index, depth).map(Some)
    }

    /// Recursive type-node dispatch mirroring the grammar.
    fn convert_type(&self, index: NodeIndex, depth: usize) -> ConvertResult<TypeNode> {
        let node = self.node(index)?;
        self.check_depth(depth, node)?;

        match node.kind {
            syntax_kind_ext::TYPE_REFERENCE => self.convert_type_reference(node, depth),
            syntax_kind_ext::ARRAY_TYPE => {
                // T[] is sugar for a reference to the built-in indexable
                // sequence type with one type argument.
                let data = self
                    .arena
                    .get_array_type(node)
                    .ok_or_else(|| self.malformed(node, "array type without payload"))?;
                let element = self.convert_type(data.element_type, depth + 1)?;
                Ok(TypeNode::Reference(TypeReference {
                    type_name: "Array".to_string(),
                    type_arguments: Some(vec![element]),
                }))
            }
            syntax_kind_ext::UNION_TYPE => {
                let data = self
                    .arena
                    .get_composite_type(node)
                    .ok_or_else(|| self.malformed(node, "union type without payload"))?;
                if data.types.len() < 2 {
                    return Err(
                        self.malformed(node, "union type requires at least two constituents")
                    );
                }
                let types = data
                    .types
                    .iter()
                    .map(|constituent| self.convert_type(constituent, depth + 1))
                    .collect::<ConvertResult<Vec<_>>>()?;
                Ok(TypeNode::Union(UnionType { types }))
            }
            syntax_kind_ext::FUNCTION_TYPE => {
                let data = self
                    .arena
                    .get_function_type(node)
                    .ok_or_else(|| self.malformed(node, "function type without payload"))?;
                Ok(TypeNode::Function(Box::new(FunctionType {
                    parameters: self.convert_parameter_list(&data.parameters, depth + 1)?,
                    return_type: self.convert_optional_type(data.type_annotation, depth + 1)?,
                })))
            }
            syntax_kind_ext::TYPE_LITERAL => {
                let data = self
                    .arena
                    .get_type_literal(node)
                    .ok_or_else(|| self.malformed(node, "type literal without payload"))?;
                let members = data
                    .members
                    .iter()
                    .map(|member| self.convert_property_declaration(member, depth + 1))
                    .collect::<ConvertResult<Vec<_>>>()?;
                Ok(TypeNode::Literal(TypeLiteral { members }))
            }
            syntax_kind_ext::TYPE_PREDICATE => {
                let data = self
                    .arena
                    .get_type_predicate(node)
                    .ok_or_else(|| self.malformed(node, "type predicate without payload"))?;
                let parameter_name = self
                    .arena
                    .identifier_text(data.parameter_name)
                    .ok_or_else(|| self.malformed(node, "type predicate without parameter name"))?
                    .to_string();
                Ok(TypeNode::Predicate(Box::new(TypePredicate {
                    asserts_modifier: data.asserts_modifier,
                    parameter_name,
                    type_annotation: self.convert_optional_type(data.type_node, depth + 1)?,
                })))
            }
            // Synthetic identifiers from parser error recovery land in type
            // position; convert them through the reference path.
            kind if kind == SyntaxKind::Identifier as u16 => {
                let text = self
                    .arena
                    .identifier_text(index)
                    .ok_or_else(|| self.malformed(node, "identifier without text"))?;
                Ok(keyword_or_reference(text.to_string(), None))
            }
            _ => Err(self.malformed(
                node,
                format!("no type converter for node kind '{}'", kind_name(node.kind)),
            )),
        }
    }

    fn convert_type_reference(&self, node: &'a Node, depth: usize) -> ConvertResult<TypeNode> {
        let data = self
            .arena
            .get_type_ref(node)
            .ok_or_else(|| self.malformed(node, "type reference without payload"))?;
        let type_name = self
            .arena
            .entity_name_text(data.type_name)
            .ok_or_else(|| self.malformed(node, "type reference without a name"))?;

        let type_arguments = match &data.type_arguments {
            None => None,
            Some(list) => Some(
                list.iter()
                    .map(|argument| self.convert_type(argument, depth + 1))
                    .collect::<ConvertResult<Vec<_>>>()?,
            ),
        };

        Ok(keyword_or_reference(type_name, type_arguments))
    }

    fn convert_property_declaration(
        &self,
        index: NodeIndex,
        depth: usize,
    ) -> ConvertResult<PropertyDeclaration> {
        let node = self.node(index)?;
        let data = self
            .arena
            .get_property_signature(node)
            .ok_or_else(|| self.malformed(node, "expected a property signature node"))?;
        let name = self
            .arena
            .identifier_text(data.name)
            .ok_or_else(|| self.malformed(node, "property without a name"))?
            .to_string();

        Ok(PropertyDeclaration {
            name,
            optional: data.question_token,
            type_annotation: self.convert_optional_type(data.type_annotation, depth + 1)?,
        })
    }

    // =========================================================================
    // Plumbing
    // =========================================================================

    fn node(&self, index: NodeIndex) -> ConvertResult<&'a Node> {
        let arena = self.arena;
        arena.get(index).ok_or_else(|| {
            ConvertError::new(
                ConvertErrorKind::MalformedShape,
                "Unknown",
                0,
                "reference to a missing syntax node",
            )
        })
    }

    fn malformed(&self, node: &Node, message: impl Into<String>) -> ConvertError {
        ConvertError::new(
            ConvertErrorKind::MalformedShape,
            kind_name(node.kind),
            node.pos,
            message,
        )
    }

    fn check_depth(&self, depth: usize, node: &Node) -> ConvertResult<()> {
        if depth > self.options.max_depth {
            return Err(ConvertError::new(
                ConvertErrorKind::DepthExceeded,
                kind_name(node.kind),
                node.pos,
                format!(
                    "conversion depth {depth} exceeds the limit of {}",
                    self.options.max_depth
                ),
            ));
        }
        Ok(())
    }
}

/// Keyword-table lookup: a bare reference to a listed keyword name is a
/// `KeywordType` leaf; anything else (or any name with type arguments)
/// stays a `TypeReference`.
fn keyword_or_reference(type_name: String, type_arguments: Option<Vec<TypeNode>>) -> TypeNode {
    if type_arguments.is_none() && KEYWORD_TYPE_NAMES.contains(type_name.as_str()) {
        TypeNode::Keyword(KeywordType { type_name })
    } else {
        TypeNode::Reference(TypeReference {
            type_name,
            type_arguments,
        })
    }
}
