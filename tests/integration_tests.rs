//! Integration tests for end-to-end parsing.
//!
//! These tests run whole programs through the public entry point and check
//! the resulting tree, the way a code generator consumes it, and the
//! diagnostics produced for broken input.

use kaleidoscope::{
    ast::{
        ast::{Expr, Stmt},
        declarations::{FunctionDecl, PrototypeDecl, TranslationUnit},
        expressions::{BinaryExpr, CallExpr, NumberExpr, VariableExpr},
        statements::{AssignStmt, CompoundStmt, ForStmt, IfStmt, ReturnStmt},
        visitor::Visitor,
    },
    display_error,
    errors::{diagnostics::render, errors::ErrorKind},
    lexer::{lexer::tokenize, tokens::TokenKind},
    parse_translation_unit, ParseOptions,
};

const SAMPLE: &str = include_str!("../demos/sample.k");

const SAMPLE_DUMP: &[&str] = &[
    "TranslationUnit: 'main'",
    "  - PrototypeDecl: sub(a, b)",
    "  - FunctionDecl:",
    "    - PrototypeDecl: sum(a, b)",
    "    - CompoundStmt:",
    "      - BinaryExpr: op = '+'",
    "        - VariableExpr: 'a'",
    "        - VariableExpr: 'b'",
    "  - FunctionDecl:",
    "    - PrototypeDecl: max(a, b)",
    "    - CompoundStmt:",
    "      - IfStmt:",
    "        - BinaryExpr: op = '>'",
    "          - VariableExpr: 'a'",
    "          - VariableExpr: 'b'",
    "        - CompoundStmt:",
    "          - ReturnStmt:",
    "            - VariableExpr: 'a'",
    "      - ReturnStmt:",
    "        - VariableExpr: 'b'",
    "  - FunctionDecl:",
    "    - PrototypeDecl: min(a, b)",
    "    - CompoundStmt:",
    "      - IfStmt:",
    "        - BinaryExpr: op = '<'",
    "          - VariableExpr: 'a'",
    "          - VariableExpr: 'b'",
    "        - CompoundStmt:",
    "          - ReturnStmt:",
    "            - VariableExpr: 'a'",
    "      - ReturnStmt:",
    "        - VariableExpr: 'b'",
    "  - FunctionDecl:",
    "    - PrototypeDecl: clamp(value, min, max)",
    "    - CompoundStmt:",
    "      - IfStmt: has_else",
    "        - BinaryExpr: op = '<'",
    "          - VariableExpr: 'value'",
    "          - VariableExpr: 'min'",
    "        - CompoundStmt:",
    "          - ReturnStmt:",
    "            - VariableExpr: 'min'",
    "        - IfStmt:",
    "          - BinaryExpr: op = '>'",
    "            - VariableExpr: 'value'",
    "            - VariableExpr: 'max'",
    "          - CompoundStmt:",
    "            - ReturnStmt:",
    "              - VariableExpr: 'max'",
    "      - ReturnStmt:",
    "        - VariableExpr: 'value'",
    "  - FunctionDecl:",
    "    - PrototypeDecl: testfor(a, b)",
    "    - CompoundStmt:",
    "      - ForStmt: i",
    "        - NumberExpr: 1",
    "        - BinaryExpr: op = '<'",
    "          - VariableExpr: 'i'",
    "          - VariableExpr: 'a'",
    "        - NumberExpr: 1",
    "        - CompoundStmt:",
    "          - IfStmt:",
    "            - BinaryExpr: op = '>'",
    "              - VariableExpr: 'i'",
    "              - VariableExpr: 'b'",
    "            - CompoundStmt:",
    "              - ReturnStmt:",
    "                - VariableExpr: 'i'",
    "      - ReturnStmt:",
    "        - VariableExpr: 'b'",
    "  - FunctionDecl:",
    "    - PrototypeDecl: __anon_expr()",
    "    - CompoundStmt:",
    "      - CallExpr: sum",
    "        - NumberExpr: 2",
    "        - NumberExpr: 3",
    "      - CallExpr: max",
    "        - BinaryExpr: op = '+'",
    "          - NumberExpr: 2",
    "          - BinaryExpr: op = '*'",
    "            - NumberExpr: 5",
    "            - NumberExpr: 3",
    "        - NumberExpr: 7",
    "      - CallExpr: clamp",
    "        - NumberExpr: 20",
    "        - NumberExpr: 50",
    "        - NumberExpr: 100",
    "      - CallExpr: testfor",
    "        - NumberExpr: 1000",
    "        - NumberExpr: 10",
];

fn parse_sample() -> TranslationUnit {
    parse_translation_unit(SAMPLE, &ParseOptions::default().with_file_name("sample.k")).unwrap()
}

#[test]
fn test_sample_program_dump() {
    let unit = parse_sample();
    let lines: Vec<String> = unit.dump().collect();

    assert_eq!(lines, SAMPLE_DUMP);
}

#[test]
fn test_sample_program_shape() {
    let unit = parse_sample();

    assert_eq!(unit.get_name(), "main");
    assert_eq!(unit.get_prototypes().len(), 1);

    let names: Vec<&str> = unit.get_functions().iter().map(|function| function.get_name()).collect();
    assert_eq!(names, vec!["sum", "max", "min", "clamp", "testfor", "__anon_expr"]);

    let clamp = unit.get_function("clamp").unwrap();
    assert_eq!(clamp.get_prototype().get_parameters(), &["value", "min", "max"]);
}

#[test]
fn test_sample_program_tokenizes() {
    let tokens = tokenize(SAMPLE, Some(String::from("sample.k"))).unwrap();

    assert_eq!(tokens.first().map(|token| token.kind), Some(TokenKind::Extern));
    assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::EOF));
    assert!(tokens.iter().all(|token| token.kind != TokenKind::MalformedNumber));
}

/// Collects what a code generator needs to know before emitting anything:
/// every function called and which bodies end without an explicit return.
#[derive(Default)]
struct Survey {
    callees: Vec<String>,
    implicit_returns: Vec<String>,
}

impl Visitor for Survey {
    type Output = ();

    fn visit_number(&mut self, _expr: &NumberExpr) {}

    fn visit_variable(&mut self, _expr: &VariableExpr) {}

    fn visit_binary(&mut self, expr: &BinaryExpr) {
        expr.get_left().accept(self);
        expr.get_right().accept(self);
    }

    fn visit_call(&mut self, expr: &CallExpr) {
        self.callees.push(expr.get_callee().to_string());
        for arg in expr.get_args() {
            arg.accept(self);
        }
    }

    fn visit_compound(&mut self, stmt: &CompoundStmt) {
        for stmt in stmt {
            stmt.accept(self);
        }
    }

    fn visit_assign(&mut self, stmt: &AssignStmt) {
        stmt.get_value().accept(self);
    }

    fn visit_return(&mut self, stmt: &ReturnStmt) {
        stmt.get_value().accept(self);
    }

    fn visit_if(&mut self, stmt: &IfStmt) {
        stmt.get_condition().accept(self);
        stmt.get_body().accept(self);
        stmt.get_else().accept(self);
    }

    fn visit_for(&mut self, stmt: &ForStmt) {
        stmt.get_initial().accept(self);
        stmt.get_condition().accept(self);
        stmt.get_step().accept(self);
        stmt.get_body().accept(self);
    }

    fn visit_prototype(&mut self, _decl: &PrototypeDecl) {}

    fn visit_function(&mut self, decl: &FunctionDecl) {
        if !matches!(decl.get_body().last(), Some(Stmt::Return(_))) {
            self.implicit_returns.push(decl.get_name().to_string());
        }
        decl.get_body().accept(self);
    }

    fn visit_translation_unit(&mut self, unit: &TranslationUnit) {
        for prototype in unit.get_prototypes() {
            prototype.accept(self);
        }
        for function in unit.get_functions() {
            function.accept(self);
        }
    }
}

#[test]
fn test_visitor_walks_sample_program() {
    let unit = parse_sample();
    let mut survey = Survey::default();
    unit.accept(&mut survey);

    assert_eq!(survey.callees, vec!["sum", "max", "clamp", "testfor"]);
    assert_eq!(survey.implicit_returns, vec!["sum", "__anon_expr"]);
}

#[test]
fn test_last_expression_is_available_to_consumers() {
    let unit = parse_sample();
    let sum = unit.get_function("sum").unwrap();

    let last = sum.get_body().last().and_then(Stmt::as_expr);
    assert!(matches!(last, Some(Expr::Binary(_))));
}

#[test]
fn test_error_fails_whole_unit() {
    let source = "extern sub(a, b);\n\nfn clamp(value, {\n\treturn value;\n}\n";
    let options = ParseOptions::default().with_file_name("clamp.k");

    let error = parse_translation_unit(source, &options).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(render(&error, source), "clamp.k:3:17: expected identifier, found '{'");

    let rendered = display_error(&error, source);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "Error: UnexpectedToken (Expected identifier, found '{')");
    assert_eq!(lines[1], "-> clamp.k");
    assert_eq!(lines[3], "3 | fn clamp(value, {");
    assert_eq!(lines[4], "  | ----------------^");
}

#[test]
fn test_malformed_number_in_sample_context() {
    let source = SAMPLE.replace("1000.0", "1000.0.0");
    let error = parse_translation_unit(&source, &ParseOptions::default()).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Lexical);
    assert_eq!(error.to_string(), "malformed number: \"1000.0.0\"");
}

#[test]
fn test_units_are_independent() {
    let first = parse_translation_unit("fn a() { return 1; }", &ParseOptions::default()).unwrap();
    let second = parse_translation_unit("fn b() { return 2; }", &ParseOptions::default()).unwrap();

    assert!(first.get_function("a").is_some());
    assert!(first.get_function("b").is_none());
    assert!(second.get_function("b").is_some());
}
