//! NodeArena creation methods (add_* methods).

use dtsj_common::interner::Interner;
use dtsj_common::limits;

use super::base::NodeIndex;
use super::node::*;

/// Arena of thin nodes plus per-kind data pools.
///
/// Children are created before their parents, so every `NodeIndex` stored in
/// a data payload refers to an earlier slot.
#[derive(Debug, Default)]
pub struct NodeArena {
    pub nodes: Vec<Node>,
    pub(super) interner: Interner,
    pub(super) identifiers: Vec<IdentifierData>,
    pub(super) qualified_names: Vec<QualifiedNameData>,
    pub(super) literals: Vec<LiteralData>,
    pub(super) source_files: Vec<SourceFileData>,
    pub(super) functions: Vec<FunctionData>,
    pub(super) variable_statements: Vec<VariableStatementData>,
    pub(super) variable_declarations: Vec<VariableDeclarationData>,
    pub(super) type_aliases: Vec<TypeAliasData>,
    pub(super) parameters: Vec<ParameterData>,
    pub(super) binding_patterns: Vec<BindingPatternData>,
    pub(super) binding_elements: Vec<BindingElementData>,
    pub(super) type_refs: Vec<TypeRefData>,
    pub(super) composite_types: Vec<CompositeTypeData>,
    pub(super) function_types: Vec<FunctionTypeData>,
    pub(super) type_literals: Vec<TypeLiteralData>,
    pub(super) property_signatures: Vec<PropertySignatureData>,
    pub(super) type_predicates: Vec<TypePredicateData>,
    pub(super) array_types: Vec<ArrayTypeData>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    /// Create an arena with pre-allocated capacity for the main pools.
    pub fn with_capacity(capacity: usize) -> NodeArena {
        let safe_capacity = capacity.min(limits::MAX_NODE_PREALLOC);
        let mut arena = NodeArena::default();
        arena.nodes = Vec::with_capacity(safe_capacity);
        arena.identifiers = Vec::with_capacity(safe_capacity / 4);
        arena.type_refs = Vec::with_capacity(safe_capacity / 8);
        arena.parameters = Vec::with_capacity(safe_capacity / 8);
        arena.source_files = Vec::with_capacity(1);
        arena
    }

    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    pub fn interner_mut(&mut self) -> &mut Interner {
        &mut self.interner
    }

    fn push_node(&mut self, kind: u16, pos: u32, end: u32, data_index: u32) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(Node {
            kind,
            pos,
            end,
            data_index,
        });
        index
    }

    /// Create a data-less token node (modifier keywords).
    pub fn add_token(&mut self, kind: u16, pos: u32, end: u32) -> NodeIndex {
        self.push_node(kind, pos, end, Node::NO_DATA)
    }

    pub fn add_identifier(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: IdentifierData,
    ) -> NodeIndex {
        let data_index = self.identifiers.len() as u32;
        self.identifiers.push(data);
        self.push_node(kind, pos, end, data_index)
    }

    pub fn add_qualified_name(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: QualifiedNameData,
    ) -> NodeIndex {
        let data_index = self.qualified_names.len() as u32;
        self.qualified_names.push(data);
        self.push_node(kind, pos, end, data_index)
    }

    pub fn add_literal(&mut self, kind: u16, pos: u32, end: u32, data: LiteralData) -> NodeIndex {
        let data_index = self.literals.len() as u32;
        self.literals.push(data);
        self.push_node(kind, pos, end, data_index)
    }

    pub fn add_source_file(&mut self, kind: u16, pos: u32, end: u32, data: SourceFileData) -> NodeIndex {
        let data_index = self.source_files.len() as u32;
        self.source_files.push(data);
        self.push_node(kind, pos, end, data_index)
    }

    pub fn add_function(&mut self, kind: u16, pos: u32, end: u32, data: FunctionData) -> NodeIndex {
        let data_index = self.functions.len() as u32;
        self.functions.push(data);
        self.push_node(kind, pos, end, data_index)
    }

    pub fn add_variable_statement(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: VariableStatementData,
    ) -> NodeIndex {
        let data_index = self.variable_statements.len() as u32;
        self.variable_statements.push(data);
        self.push_node(kind, pos, end, data_index)
    }

    pub fn add_variable_declaration(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: VariableDeclarationData,
    ) -> NodeIndex {
        let data_index = self.variable_declarations.len() as u32;
        self.variable_declarations.push(data);
        self.push_node(kind, pos, end, data_index)
    }

    pub fn add_type_alias(&mut self, kind: u16, pos: u32, end: u32, data: TypeAliasData) -> NodeIndex {
        let data_index = self.type_aliases.len() as u32;
        self.type_aliases.push(data);
        self.push_node(kind, pos, end, data_index)
    }

    pub fn add_parameter(&mut self, kind: u16, pos: u32, end: u32, data: ParameterData) -> NodeIndex {
        let data_index = self.parameters.len() as u32;
        self.parameters.push(data);
        self.push_node(kind, pos, end, data_index)
    }

    pub fn add_binding_pattern(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: BindingPatternData,
    ) -> NodeIndex {
        let data_index = self.binding_patterns.len() as u32;
        self.binding_patterns.push(data);
        self.push_node(kind, pos, end, data_index)
    }

    pub fn add_binding_element(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: BindingElementData,
    ) -> NodeIndex {
        let data_index = self.binding_elements.len() as u32;
        self.binding_elements.push(data);
        self.push_node(kind, pos, end, data_index)
    }

    pub fn add_type_ref(&mut self, kind: u16, pos: u32, end: u32, data: TypeRefData) -> NodeIndex {
        let data_index = self.type_refs.len() as u32;
        self.type_refs.push(data);
        self.push_node(kind, pos, end, data_index)
    }

    pub fn add_composite_type(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: CompositeTypeData,
    ) -> NodeIndex {
        let data_index = self.composite_types.len() as u32;
        self.composite_types.push(data);
        self.push_node(kind, pos, end, data_index)
    }

    pub fn add_function_type(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: FunctionTypeData,
    ) -> NodeIndex {
        let data_index = self.function_types.len() as u32;
        self.function_types.push(data);
        self.push_node(kind, pos, end, data_index)
    }

    pub fn add_type_literal(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: TypeLiteralData,
    ) -> NodeIndex {
        let data_index = self.type_literals.len() as u32;
        self.type_literals.push(data);
        self.push_node(kind, pos, end, data_index)
    }

    pub fn add_property_signature(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: PropertySignatureData,
    ) -> NodeIndex {
        let data_index = self.property_signatures.len() as u32;
        self.property_signatures.push(data);
        self.push_node(kind, pos, end, data_index)
    }

    pub fn add_type_predicate(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: TypePredicateData,
    ) -> NodeIndex {
        let data_index = self.type_predicates.len() as u32;
        self.type_predicates.push(data);
        self.push_node(kind, pos, end, data_index)
    }

    pub fn add_array_type(&mut self, kind: u16, pos: u32, end: u32, data: ArrayTypeData) -> NodeIndex {
        let data_index = self.array_types.len() as u32;
        self.array_types.push(data);
        self.push_node(kind, pos, end, data_index)
    }
}
