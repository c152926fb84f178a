#![recursion_limit = "256"]
//! End-to-end conversion tests for function declarations.
//!
//! Each test feeds literal declaration source through parse → convert →
//! serialize and byte-compares the result against the expected canonical
//! JSON. `serde_json` is built with `preserve_order`, so the expected
//! `json!` literals render with their written key order.

use dtsj_json::{Converter, pretty_stringify};
use dtsj_parser::ParserState;
use serde_json::json;

fn expect_translate_json(source: &str) -> String {
    let mut parser = ParserState::new("demo/some/main.ts".to_string(), source.to_string());
    let root = parser.parse_source_file();
    assert!(
        parser.parse_diagnostics.is_empty(),
        "parse diagnostics: {:?}",
        parser.parse_diagnostics
    );

    let mut converter = Converter::new(&parser.arena);
    let file = converter
        .convert_source_file(root)
        .expect("conversion succeeds");
    assert!(
        converter.diagnostics().is_empty(),
        "conversion diagnostics: {:?}",
        converter.diagnostics()
    );
    pretty_stringify(&file)
}

fn pretty_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).expect("fixture value renders")
}

#[test]
fn supports_function_declarations() {
    assert_eq!(
        expect_translate_json("declare function f(): boolean;"),
        pretty_json(&json!({
            "kind": "SourceFile",
            "fileName": "demo/some/main.ts",
            "statements": [{
                "kind": "FunctionDeclaration",
                "modifiers": [],
                "name": "f",
                "parameters": [],
                "type": {"kind": "KeywordType", "typeName": "boolean"}
            }]
        }))
    );
}

#[test]
fn supports_parameters() {
    assert_eq!(
        expect_translate_json("declare function f(a: number, b: string): void;"),
        pretty_json(&json!({
            "kind": "SourceFile",
            "fileName": "demo/some/main.ts",
            "statements": [{
                "kind": "FunctionDeclaration",
                "modifiers": [],
                "name": "f",
                "parameters": [
                    {
                        "kind": "Parameter",
                        "name": "a",
                        "optional": false,
                        "rest": false,
                        "type": {"kind": "KeywordType", "typeName": "number"}
                    },
                    {
                        "kind": "Parameter",
                        "name": "b",
                        "optional": false,
                        "rest": false,
                        "type": {"kind": "KeywordType", "typeName": "string"}
                    }
                ],
                "type": {"kind": "KeywordType", "typeName": "void"}
            }]
        }))
    );
}

#[test]
fn supports_optional_parameters() {
    assert_eq!(
        expect_translate_json("declare function f(a: number, b?: string): void;"),
        pretty_json(&json!({
            "kind": "SourceFile",
            "fileName": "demo/some/main.ts",
            "statements": [{
                "kind": "FunctionDeclaration",
                "modifiers": [],
                "name": "f",
                "parameters": [
                    {
                        "kind": "Parameter",
                        "name": "a",
                        "optional": false,
                        "rest": false,
                        "type": {"kind": "KeywordType", "typeName": "number"}
                    },
                    {
                        "kind": "Parameter",
                        "name": "b",
                        "optional": true,
                        "rest": false,
                        "type": {"kind": "KeywordType", "typeName": "string"}
                    }
                ],
                "type": {"kind": "KeywordType", "typeName": "void"}
            }]
        }))
    );
}

#[test]
fn default_values_mark_parameters_optional() {
    assert_eq!(
        expect_translate_json("declare function f(a: number = 3): void;"),
        pretty_json(&json!({
            "kind": "SourceFile",
            "fileName": "demo/some/main.ts",
            "statements": [{
                "kind": "FunctionDeclaration",
                "modifiers": [],
                "name": "f",
                "parameters": [{
                    "kind": "Parameter",
                    "name": "a",
                    "optional": true,
                    "rest": false,
                    "type": {"kind": "KeywordType", "typeName": "number"}
                }],
                "type": {"kind": "KeywordType", "typeName": "void"}
            }]
        }))
    );
}

#[test]
fn supports_rest_parameters() {
    assert_eq!(
        expect_translate_json("declare function f(...a: number[]): void;"),
        pretty_json(&json!({
            "kind": "SourceFile",
            "fileName": "demo/some/main.ts",
            "statements": [{
                "kind": "FunctionDeclaration",
                "modifiers": [],
                "name": "f",
                "parameters": [{
                    "kind": "Parameter",
                    "name": "a",
                    "optional": false,
                    "rest": true,
                    "type": {
                        "kind": "TypeReference",
                        "typeName": "Array",
                        "typeArguments": [{"kind": "KeywordType", "typeName": "number"}]
                    }
                }],
                "type": {"kind": "KeywordType", "typeName": "void"}
            }]
        }))
    );
}

#[test]
fn supports_destructured_object_parameters() {
    assert_eq!(
        expect_translate_json("declare function f({a, b}: {a:number, b: string}): void;"),
        pretty_json(&json!({
            "kind": "SourceFile",
            "fileName": "demo/some/main.ts",
            "statements": [{
                "kind": "FunctionDeclaration",
                "modifiers": [],
                "name": "f",
                "parameters": [{
                    "kind": "Parameter",
                    "name": {
                        "kind": "ObjectBindingPattern",
                        "elements": [
                            {"kind": "BindingElement", "name": "a", "rest": false},
                            {"kind": "BindingElement", "name": "b", "rest": false}
                        ]
                    },
                    "optional": false,
                    "rest": false,
                    "type": {
                        "kind": "TypeLiteral",
                        "members": [
                            {
                                "kind": "PropertyDeclaration",
                                "name": "a",
                                "optional": false,
                                "type": {"kind": "KeywordType", "typeName": "number"}
                            },
                            {
                                "kind": "PropertyDeclaration",
                                "name": "b",
                                "optional": false,
                                "type": {"kind": "KeywordType", "typeName": "string"}
                            }
                        ]
                    }
                }],
                "type": {"kind": "KeywordType", "typeName": "void"}
            }]
        }))
    );
}

#[test]
fn supports_rest_binding_elements() {
    assert_eq!(
        expect_translate_json("declare function f({a, ...rest}): void;"),
        pretty_json(&json!({
            "kind": "SourceFile",
            "fileName": "demo/some/main.ts",
            "statements": [{
                "kind": "FunctionDeclaration",
                "modifiers": [],
                "name": "f",
                "parameters": [{
                    "kind": "Parameter",
                    "name": {
                        "kind": "ObjectBindingPattern",
                        "elements": [
                            {"kind": "BindingElement", "name": "a", "rest": false},
                            {"kind": "BindingElement", "name": "rest", "rest": true}
                        ]
                    },
                    "optional": false,
                    "rest": false
                }],
                "type": {"kind": "KeywordType", "typeName": "void"}
            }]
        }))
    );
}

#[test]
fn supports_type_predicate_return_types() {
    assert_eq!(
        expect_translate_json("declare function f(x: number|string): x is number;"),
        pretty_json(&json!({
            "kind": "SourceFile",
            "fileName": "demo/some/main.ts",
            "statements": [{
                "kind": "FunctionDeclaration",
                "modifiers": [],
                "name": "f",
                "parameters": [{
                    "kind": "Parameter",
                    "name": "x",
                    "optional": false,
                    "rest": false,
                    "type": {
                        "kind": "UnionType",
                        "types": [
                            {"kind": "KeywordType", "typeName": "number"},
                            {"kind": "KeywordType", "typeName": "string"}
                        ]
                    }
                }],
                "type": {
                    "kind": "TypePredicate",
                    "assertsModifier": false,
                    "parameterName": "x",
                    "type": {"kind": "KeywordType", "typeName": "number"}
                }
            }]
        }))
    );
}

#[test]
fn supports_asserts_type_predicates() {
    assert_eq!(
        expect_translate_json("declare function check(x: unknown): asserts x is string;"),
        pretty_json(&json!({
            "kind": "SourceFile",
            "fileName": "demo/some/main.ts",
            "statements": [{
                "kind": "FunctionDeclaration",
                "modifiers": [],
                "name": "check",
                "parameters": [{
                    "kind": "Parameter",
                    "name": "x",
                    "optional": false,
                    "rest": false,
                    "type": {"kind": "KeywordType", "typeName": "unknown"}
                }],
                "type": {
                    "kind": "TypePredicate",
                    "assertsModifier": true,
                    "parameterName": "x",
                    "type": {"kind": "KeywordType", "typeName": "string"}
                }
            }]
        }))
    );
}

#[test]
fn supports_recursive_function_parameters() {
    assert_eq!(
        expect_translate_json("declare function f(fn: (a: (b: B) => C) => D);"),
        pretty_json(&json!({
            "kind": "SourceFile",
            "fileName": "demo/some/main.ts",
            "statements": [{
                "kind": "FunctionDeclaration",
                "modifiers": [],
                "name": "f",
                "parameters": [{
                    "kind": "Parameter",
                    "name": "fn",
                    "optional": false,
                    "rest": false,
                    "type": {
                        "kind": "FunctionType",
                        "parameters": [{
                            "kind": "Parameter",
                            "name": "a",
                            "optional": false,
                            "rest": false,
                            "type": {
                                "kind": "FunctionType",
                                "parameters": [{
                                    "kind": "Parameter",
                                    "name": "b",
                                    "optional": false,
                                    "rest": false,
                                    "type": {"kind": "TypeReference", "typeName": "B"}
                                }],
                                "type": {"kind": "TypeReference", "typeName": "C"}
                            }
                        }],
                        "type": {"kind": "TypeReference", "typeName": "D"}
                    }
                }]
            }]
        }))
    );
}

#[test]
fn supports_triple_nested_function_types() {
    assert_eq!(
        expect_translate_json("declare function f(fn: (a: (b: (c: C) => D) => E) => F): void;"),
        pretty_json(&json!({
            "kind": "SourceFile",
            "fileName": "demo/some/main.ts",
            "statements": [{
                "kind": "FunctionDeclaration",
                "modifiers": [],
                "name": "f",
                "parameters": [{
                    "kind": "Parameter",
                    "name": "fn",
                    "optional": false,
                    "rest": false,
                    "type": {
                        "kind": "FunctionType",
                        "parameters": [{
                            "kind": "Parameter",
                            "name": "a",
                            "optional": false,
                            "rest": false,
                            "type": {
                                "kind": "FunctionType",
                                "parameters": [{
                                    "kind": "Parameter",
                                    "name": "b",
                                    "optional": false,
                                    "rest": false,
                                    "type": {
                                        "kind": "FunctionType",
                                        "parameters": [{
                                            "kind": "Parameter",
                                            "name": "c",
                                            "optional": false,
                                            "rest": false,
                                            "type": {"kind": "TypeReference", "typeName": "C"}
                                        }],
                                        "type": {"kind": "TypeReference", "typeName": "D"}
                                    }
                                }],
                                "type": {"kind": "TypeReference", "typeName": "E"}
                            }
                        }],
                        "type": {"kind": "TypeReference", "typeName": "F"}
                    }
                }],
                "type": {"kind": "KeywordType", "typeName": "void"}
            }]
        }))
    );
}

#[test]
fn supports_export_modifiers() {
    assert_eq!(
        expect_translate_json("export declare function f(): void;"),
        pretty_json(&json!({
            "kind": "SourceFile",
            "fileName": "demo/some/main.ts",
            "statements": [{
                "kind": "FunctionDeclaration",
                "modifiers": ["export"],
                "name": "f",
                "parameters": [],
                "type": {"kind": "KeywordType", "typeName": "void"}
            }]
        }))
    );
}

#[test]
fn supports_qualified_and_generic_type_references() {
    assert_eq!(
        expect_translate_json("declare function f(): ns.Wrapper<string, number[]>;"),
        pretty_json(&json!({
            "kind": "SourceFile",
            "fileName": "demo/some/main.ts",
            "statements": [{
                "kind": "FunctionDeclaration",
                "modifiers": [],
                "name": "f",
                "parameters": [],
                "type": {
                    "kind": "TypeReference",
                    "typeName": "ns.Wrapper",
                    "typeArguments": [
                        {"kind": "KeywordType", "typeName": "string"},
                        {
                            "kind": "TypeReference",
                            "typeName": "Array",
                            "typeArguments": [{"kind": "KeywordType", "typeName": "number"}]
                        }
                    ]
                }
            }]
        }))
    );
}

#[test]
fn supports_nested_binding_patterns() {
    assert_eq!(
        expect_translate_json("declare function f({a, b: {c}}): void;"),
        pretty_json(&json!({
            "kind": "SourceFile",
            "fileName": "demo/some/main.ts",
            "statements": [{
                "kind": "FunctionDeclaration",
                "modifiers": [],
                "name": "f",
                "parameters": [{
                    "kind": "Parameter",
                    "name": {
                        "kind": "ObjectBindingPattern",
                        "elements": [
                            {"kind": "BindingElement", "name": "a", "rest": false},
                            {
                                "kind": "BindingElement",
                                "name": {
                                    "kind": "ObjectBindingPattern",
                                    "elements": [
                                        {"kind": "BindingElement", "name": "c", "rest": false}
                                    ]
                                },
                                "rest": false
                            }
                        ]
                    },
                    "optional": false,
                    "rest": false
                }],
                "type": {"kind": "KeywordType", "typeName": "void"}
            }]
        }))
    );
}

#[test]
fn distinguishes_absent_type_from_explicit_void() {
    let absent = expect_translate_json("declare function f();");
    let explicit = expect_translate_json("declare function f(): void;");
    assert!(!absent.contains("\"type\""));
    assert!(explicit.contains("\"typeName\": \"void\""));
    assert_ne!(absent, explicit);
}
