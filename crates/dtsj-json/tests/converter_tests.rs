//! Converter behavior tests: determinism, statement isolation, invariant
//! enforcement, and the recursion guard.

use dtsj_common::diagnostics::{DiagnosticCategory, diagnostic_codes};
use dtsj_json::{
    ConvertErrorKind, Converter, ConverterOptions, ParameterName, Statement, pretty_stringify,
};
use dtsj_parser::parser::node::{
    BindingElementData, BindingPatternData, FunctionData, IdentifierData, ParameterData,
    SourceFileData,
};
use dtsj_parser::parser::syntax_kind_ext;
use dtsj_parser::{NodeArena, NodeIndex, NodeList, ParserState};
use dtsj_scanner::SyntaxKind;

fn parse(source: &str) -> (ParserState, NodeIndex) {
    let mut parser = ParserState::new("demo/some/main.ts".to_string(), source.to_string());
    let root = parser.parse_source_file();
    (parser, root)
}

fn add_identifier(arena: &mut NodeArena, text: &str) -> NodeIndex {
    let atom = arena.interner_mut().intern(text);
    arena.add_identifier(
        SyntaxKind::Identifier as u16,
        0,
        0,
        IdentifierData {
            atom,
            escaped_text: text.to_string(),
        },
    )
}

#[test]
fn conversion_is_deterministic() {
    let source = "export declare function f(a: number, {b, c}: {b: string, c?: boolean}): x is ns.Thing<string[]>;";
    let (parser, root) = parse(source);

    let first = {
        let mut converter = Converter::new(&parser.arena);
        pretty_stringify(&converter.convert_source_file(root).unwrap())
    };
    let second = {
        let mut converter = Converter::new(&parser.arena);
        pretty_stringify(&converter.convert_source_file(root).unwrap())
    };
    assert_eq!(first, second);
}

#[test]
fn statement_order_is_preserved() {
    let (parser, root) = parse(
        "declare function first(): void;\n\
         declare function second(): void;\n\
         declare function third(): void;",
    );
    let mut converter = Converter::new(&parser.arena);
    let file = converter.convert_source_file(root).unwrap();

    let names: Vec<_> = file
        .statements
        .iter()
        .map(|statement| match statement {
            Statement::FunctionDeclaration(function) => function.name.clone(),
        })
        .collect();
    assert_eq!(names, ["first", "second", "third"]);
}

#[test]
fn unsupported_statements_are_skipped_not_fatal() {
    let (parser, root) = parse(
        "declare var count: number;\n\
         declare function ok(): void;\n\
         declare type Alias = string;",
    );
    assert!(parser.parse_diagnostics.is_empty());

    let mut converter = Converter::new(&parser.arena);
    let file = converter.convert_source_file(root).unwrap();

    assert_eq!(file.statements.len(), 1);
    let Statement::FunctionDeclaration(function) = &file.statements[0];
    assert_eq!(function.name, "ok");

    let skipped: Vec<_> = converter
        .diagnostics()
        .iter()
        .filter(|d| d.code == diagnostic_codes::UNSUPPORTED_TOP_LEVEL_CONSTRUCT)
        .collect();
    assert_eq!(skipped.len(), 2);
    assert!(
        skipped
            .iter()
            .all(|d| d.category == DiagnosticCategory::Warning)
    );
}

#[test]
fn fail_fast_propagates_unsupported_constructs() {
    let (parser, root) = parse("declare var count: number;");
    let mut converter = Converter::with_options(
        &parser.arena,
        ConverterOptions {
            fail_fast: true,
            ..ConverterOptions::default()
        },
    );
    let error = converter.convert_source_file(root).unwrap_err();
    assert_eq!(error.kind, ConvertErrorKind::UnsupportedConstruct);
    assert_eq!(error.node_kind, "VariableStatement");
}

#[test]
fn non_trailing_rest_binding_element_drops_only_its_statement() {
    let mut arena = NodeArena::new();

    // Hand-built malformed shape: {...r, b} with the rest element first
    let rest_name = add_identifier(&mut arena, "r");
    let rest_element = arena.add_binding_element(
        syntax_kind_ext::BINDING_ELEMENT,
        0,
        0,
        BindingElementData {
            dot_dot_dot_token: true,
            property_name: NodeIndex::NONE,
            name: rest_name,
            initializer: NodeIndex::NONE,
        },
    );
    let plain_name = add_identifier(&mut arena, "b");
    let plain_element = arena.add_binding_element(
        syntax_kind_ext::BINDING_ELEMENT,
        0,
        0,
        BindingElementData {
            dot_dot_dot_token: false,
            property_name: NodeIndex::NONE,
            name: plain_name,
            initializer: NodeIndex::NONE,
        },
    );
    let pattern = arena.add_binding_pattern(
        syntax_kind_ext::OBJECT_BINDING_PATTERN,
        0,
        0,
        BindingPatternData {
            elements: NodeList::new(vec![rest_element, plain_element]),
        },
    );
    let parameter = arena.add_parameter(
        syntax_kind_ext::PARAMETER,
        0,
        0,
        ParameterData {
            dot_dot_dot_token: false,
            name: pattern,
            question_token: false,
            type_annotation: NodeIndex::NONE,
            initializer: NodeIndex::NONE,
        },
    );
    let bad_name = add_identifier(&mut arena, "bad");
    let bad_function = arena.add_function(
        syntax_kind_ext::FUNCTION_DECLARATION,
        0,
        0,
        FunctionData {
            modifiers: None,
            name: bad_name,
            parameters: NodeList::new(vec![parameter]),
            type_annotation: NodeIndex::NONE,
        },
    );

    let ok_name = add_identifier(&mut arena, "ok");
    let ok_function = arena.add_function(
        syntax_kind_ext::FUNCTION_DECLARATION,
        0,
        0,
        FunctionData {
            modifiers: None,
            name: ok_name,
            parameters: NodeList::default(),
            type_annotation: NodeIndex::NONE,
        },
    );

    let root = arena.add_source_file(
        syntax_kind_ext::SOURCE_FILE,
        0,
        0,
        SourceFileData {
            file_name: "demo/some/main.ts".to_string(),
            statements: NodeList::new(vec![bad_function, ok_function]),
        },
    );

    let mut converter = Converter::new(&arena);
    let file = converter.convert_source_file(root).unwrap();

    // The malformed statement is dropped, never coerced; its sibling survives.
    assert_eq!(file.statements.len(), 1);
    let Statement::FunctionDeclaration(function) = &file.statements[0];
    assert_eq!(function.name, "ok");
    assert!(
        converter
            .diagnostics()
            .iter()
            .any(|d| d.code == diagnostic_codes::MALFORMED_SYNTAX_SHAPE)
    );
}

#[test]
fn rest_and_optional_are_mutually_exclusive() {
    let mut arena = NodeArena::new();

    let name = add_identifier(&mut arena, "a");
    let parameter = arena.add_parameter(
        syntax_kind_ext::PARAMETER,
        0,
        0,
        ParameterData {
            dot_dot_dot_token: true,
            name,
            question_token: true,
            type_annotation: NodeIndex::NONE,
            initializer: NodeIndex::NONE,
        },
    );
    let function_name = add_identifier(&mut arena, "f");
    let function = arena.add_function(
        syntax_kind_ext::FUNCTION_DECLARATION,
        0,
        0,
        FunctionData {
            modifiers: None,
            name: function_name,
            parameters: NodeList::new(vec![parameter]),
            type_annotation: NodeIndex::NONE,
        },
    );
    let root = arena.add_source_file(
        syntax_kind_ext::SOURCE_FILE,
        0,
        0,
        SourceFileData {
            file_name: "demo/some/main.ts".to_string(),
            statements: NodeList::new(vec![function]),
        },
    );

    let mut converter = Converter::with_options(
        &arena,
        ConverterOptions {
            fail_fast: true,
            ..ConverterOptions::default()
        },
    );
    let error = converter.convert_source_file(root).unwrap_err();
    assert_eq!(error.kind, ConvertErrorKind::MalformedShape);
}

#[test]
fn valid_rest_parameter_is_never_optional() {
    let (parser, root) = parse("declare function f(a: number, ...rest: string[]): void;");
    let mut converter = Converter::new(&parser.arena);
    let file = converter.convert_source_file(root).unwrap();

    let Statement::FunctionDeclaration(function) = &file.statements[0];
    let rest_parameter = &function.parameters[1];
    assert!(rest_parameter.rest);
    assert!(!rest_parameter.optional);
    assert!(matches!(&rest_parameter.name, ParameterName::Identifier(name) if name == "rest"));
}

#[test]
fn depth_guard_trips_on_pathological_nesting() {
    let mut nested = String::from("A");
    for _ in 0..12 {
        nested = format!("(x: {nested}) => B");
    }
    let (parser, root) = parse(&format!("declare function f(p: {nested}): void;"));
    assert!(parser.parse_diagnostics.is_empty());

    let options = ConverterOptions {
        fail_fast: true,
        max_depth: 8,
    };
    let mut converter = Converter::with_options(&parser.arena, options);
    let error = converter.convert_source_file(root).unwrap_err();
    assert_eq!(error.kind, ConvertErrorKind::DepthExceeded);

    // Without fail-fast the statement is isolated and reported.
    let mut converter = Converter::with_options(
        &parser.arena,
        ConverterOptions {
            fail_fast: false,
            max_depth: 8,
        },
    );
    let file = converter.convert_source_file(root).unwrap();
    assert!(file.statements.is_empty());
    assert!(
        converter
            .diagnostics()
            .iter()
            .any(|d| d.code == diagnostic_codes::CONVERSION_DEPTH_EXCEEDED)
    );
}

#[test]
fn deep_nesting_within_the_limit_converts() {
    let mut nested = String::from("A");
    for _ in 0..40 {
        nested = format!("(x: {nested}) => B");
    }
    let (parser, root) = parse(&format!("declare function f(p: {nested}): void;"));
    let mut converter = Converter::new(&parser.arena);
    let file = converter.convert_source_file(root).unwrap();
    assert!(converter.diagnostics().is_empty());
    assert_eq!(file.statements.len(), 1);
}

#[test]
fn modifiers_are_ordered_and_deduplicated() {
    let (parser, root) = parse("export export declare function f(): void;");
    let mut converter = Converter::new(&parser.arena);
    let file = converter.convert_source_file(root).unwrap();

    let Statement::FunctionDeclaration(function) = &file.statements[0];
    let rendered: Vec<_> = function
        .modifiers
        .iter()
        .map(|modifier| modifier.as_str())
        .collect();
    assert_eq!(rendered, ["export"]);
}

#[test]
fn union_alternatives_keep_duplicates_and_order() {
    let (parser, root) = parse("declare function f(x: string | number | string): void;");
    let mut converter = Converter::new(&parser.arena);
    let file = converter.convert_source_file(root).unwrap();
    let rendered = pretty_stringify(&file);

    let first = rendered.find("\"typeName\": \"string\"").unwrap();
    let second = rendered.rfind("\"typeName\": \"string\"").unwrap();
    assert_ne!(first, second, "duplicate union alternatives must survive");
    let number = rendered.find("\"typeName\": \"number\"").unwrap();
    assert!(first < number && number < second);
}
