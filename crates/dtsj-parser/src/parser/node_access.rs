//! NodeArena access methods.
//!
//! Typed accessors pair a thin node with its side-pool payload. Each returns
//! `None` when the node is not of the expected kind, so consumers can probe
//! without panicking on malformed indices.

use dtsj_scanner::SyntaxKind;

use super::base::NodeIndex;
use super::node::*;
use super::syntax_kind_ext;

impl super::node_arena::NodeArena {
    /// Get a thin node by index.
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    #[inline]
    pub fn get_identifier(&self, node: &Node) -> Option<&IdentifierData> {
        if node.has_data() && node.kind == SyntaxKind::Identifier as u16 {
            self.identifiers.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_qualified_name(&self, node: &Node) -> Option<&QualifiedNameData> {
        if node.has_data() && node.kind == syntax_kind_ext::QUALIFIED_NAME {
            self.qualified_names.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_literal(&self, node: &Node) -> Option<&LiteralData> {
        if node.has_data()
            && (node.kind == SyntaxKind::StringLiteral as u16
                || node.kind == SyntaxKind::NumericLiteral as u16)
        {
            self.literals.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_source_file(&self, node: &Node) -> Option<&SourceFileData> {
        if node.has_data() && node.kind == syntax_kind_ext::SOURCE_FILE {
            self.source_files.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_function(&self, node: &Node) -> Option<&FunctionData> {
        if node.has_data() && node.kind == syntax_kind_ext::FUNCTION_DECLARATION {
            self.functions.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_variable_statement(&self, node: &Node) -> Option<&VariableStatementData> {
        if node.has_data() && node.kind == syntax_kind_ext::VARIABLE_STATEMENT {
            self.variable_statements.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_variable_declaration(&self, node: &Node) -> Option<&VariableDeclarationData> {
        if node.has_data() && node.kind == syntax_kind_ext::VARIABLE_DECLARATION {
            self.variable_declarations.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_type_alias(&self, node: &Node) -> Option<&TypeAliasData> {
        if node.has_data() && node.kind == syntax_kind_ext::TYPE_ALIAS_DECLARATION {
            self.type_aliases.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_parameter(&self, node: &Node) -> Option<&ParameterData> {
        if node.has_data() && node.kind == syntax_kind_ext::PARAMETER {
            self.parameters.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_binding_pattern(&self, node: &Node) -> Option<&BindingPatternData> {
        if node.has_data() && node.kind == syntax_kind_ext::OBJECT_BINDING_PATTERN {
            self.binding_patterns.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_binding_element(&self, node: &Node) -> Option<&BindingElementData> {
        if node.has_data() && node.kind == syntax_kind_ext::BINDING_ELEMENT {
            self.binding_elements.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_type_ref(&self, node: &Node) -> Option<&TypeRefData> {
        if node.has_data() && node.kind == syntax_kind_ext::TYPE_REFERENCE {
            self.type_refs.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_composite_type(&self, node: &Node) -> Option<&CompositeTypeData> {
        if node.has_data() && node.kind == syntax_kind_ext::UNION_TYPE {
            self.composite_types.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_function_type(&self, node: &Node) -> Option<&FunctionTypeData> {
        if node.has_data() && node.kind == syntax_kind_ext::FUNCTION_TYPE {
            self.function_types.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_type_literal(&self, node: &Node) -> Option<&TypeLiteralData> {
        if node.has_data() && node.kind == syntax_kind_ext::TYPE_LITERAL {
            self.type_literals.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_property_signature(&self, node: &Node) -> Option<&PropertySignatureData> {
        if node.has_data() && node.kind == syntax_kind_ext::PROPERTY_SIGNATURE {
            self.property_signatures.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_type_predicate(&self, node: &Node) -> Option<&TypePredicateData> {
        if node.has_data() && node.kind == syntax_kind_ext::TYPE_PREDICATE {
            self.type_predicates.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_array_type(&self, node: &Node) -> Option<&ArrayTypeData> {
        if node.has_data() && node.kind == syntax_kind_ext::ARRAY_TYPE {
            self.array_types.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Resolve an identifier's text using atom (fast) or escaped_text (fallback).
    #[inline]
    pub fn resolve_identifier_text<'a>(&'a self, data: &'a IdentifierData) -> &'a str {
        if !data.atom.is_none() {
            self.interner.resolve(data.atom)
        } else {
            &data.escaped_text
        }
    }

    /// Text of the identifier node at `index`, if it is one.
    pub fn identifier_text(&self, index: NodeIndex) -> Option<&str> {
        let node = self.get(index)?;
        let data = self.get_identifier(node)?;
        Some(self.resolve_identifier_text(data))
    }

    /// Flatten an identifier or qualified name to dotted text (`ns.Inner`).
    pub fn entity_name_text(&self, index: NodeIndex) -> Option<String> {
        let node = self.get(index)?;
        if let Some(data) = self.get_identifier(node) {
            return Some(self.resolve_identifier_text(data).to_string());
        }
        let qualified = self.get_qualified_name(node)?;
        let left = self.entity_name_text(qualified.left)?;
        let right = self.identifier_text(qualified.right)?;
        Some(format!("{left}.{right}"))
    }
}
