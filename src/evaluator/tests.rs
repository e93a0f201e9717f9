use pretty_assertions::assert_eq;

use super::{environment::Environment, evaluator::eval_program, value::Value};
use crate::{errors::errors::Error, lexer::lexer::tokenize, parser::parser::parse};

fn eval_source(source: &str) -> Result<Value, Error> {
    let (parser, program) = parse(tokenize(source, None));
    assert!(parser.errors().is_empty(), "parser errors: {:?}", parser.errors());

    eval_program(&program, &Environment::new())
}

fn assert_value(source: &str, expected: Value) {
    match eval_source(source) {
        Ok(value) => assert_eq!(value, expected, "source: {:?}", source),
        Err(error) => panic!("{:?} failed: {}", source, error),
    }
}

fn assert_error(source: &str, expected: &str) {
    match eval_source(source) {
        Ok(value) => panic!("{:?} evaluated to {} instead of failing", source, value),
        Err(error) => assert_eq!(error.to_string(), expected, "source: {:?}", source),
    }
}

#[test]
fn test_integer_literals() {
    assert_value("5", Value::Integer(5));
    assert_value("10", Value::Integer(10));
    assert_value("-5", Value::Integer(-5));
    assert_value("--10", Value::Integer(10));
}

#[test]
fn test_integer_arithmetic() {
    let cases = [
        ("5 + 5 + 5 + 5 - 10", 10),
        ("2 * 2 * 2 * 2 * 2", 32),
        ("-50 + 100 + -50", 0),
        ("5 * 2 + 10", 20),
        ("5 + 2 * 10", 25),
        ("50 / 2 * 2 + 10", 60),
        ("2 * (5 + 10)", 30),
        ("3 * (3 * 3) + 10", 37),
        ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50),
        ("7 / 2", 3),
    ];

    for (source, expected) in cases {
        assert_value(source, Value::Integer(expected));
    }
}

#[test]
fn test_boolean_expressions() {
    let cases = [
        ("true", true),
        ("false", false),
        ("1 < 2", true),
        ("1 > 2", false),
        ("1 == 1", true),
        ("1 != 1", false),
        ("true == true", true),
        ("true != false", true),
        ("(1 < 2) == true", true),
        ("(1 > 2) == true", false),
        ("\"a\" == \"a\"", true),
        ("\"a\" != \"b\"", true),
        ("1 == true", false),
        ("1 != true", true),
    ];

    for (source, expected) in cases {
        assert_value(source, Value::Boolean(expected));
    }
}

#[test]
fn test_bang_operator() {
    assert_value("!true", Value::Boolean(false));
    assert_value("!false", Value::Boolean(true));
    assert_value("!5", Value::Boolean(false));
    assert_value("!!true", Value::Boolean(true));
    assert_value("!!5", Value::Boolean(true));
}

#[test]
fn test_if_else_expressions() {
    assert_value("if (true) { 10 }", Value::Integer(10));
    assert_value("if (false) { 10 }", Value::Null);
    assert_value("if (1) { 10 }", Value::Integer(10));
    assert_value("if (1 < 2) { 10 } else { 20 }", Value::Integer(10));
    assert_value("if (1 > 2) { 10 } else { 20 }", Value::Integer(20));
}

#[test]
fn test_return_statements() {
    assert_value("return 10;", Value::Integer(10));
    assert_value("return 10; 9;", Value::Integer(10));
    assert_value("9; return 2 * 5; 9;", Value::Integer(10));
    assert_value(
        "if (10 > 1) { if (10 > 1) { return 10; } return 1; }",
        Value::Integer(10),
    );
}

#[test]
fn test_return_inside_operands_stops_evaluation() {
    let cases = [
        ("let x = if (true) { return 5; }; 99", 5),
        ("let x = if (true) { return 5; }; x + 1", 5),
        ("let f = fn() { let y = if (true) { return 1; }; 2 }; f()", 1),
        ("fn() { 1 + if (true) { return 2; } }()", 2),
        ("fn() { if (true) { return 2; } + 1 }()", 2),
        ("fn() { -if (true) { return 3; } }()", 3),
        ("fn() { if (if (true) { return 4; }) { 10 } else { 20 } }()", 4),
        ("let id = fn(x) { x }; fn() { id(if (true) { return 6; }); 0 }()", 6),
        ("fn() { return if (true) { return 7; }; }()", 7),
    ];

    for (source, expected) in cases {
        assert_value(source, Value::Integer(expected));
    }
}

#[test]
fn test_let_statements() {
    assert_value("let a = 5; a;", Value::Integer(5));
    assert_value("let a = 5 * 5; a;", Value::Integer(25));
    assert_value("let a = 5; let b = a; b;", Value::Integer(5));
    assert_value("let a = 5; let b = a; let c = a + b + 5; c;", Value::Integer(15));
    assert_value("let a = 1;", Value::Null);
}

#[test]
fn test_string_concatenation() {
    assert_value(
        "\"Hello\" + \" \" + \"World!\"",
        Value::String(String::from("Hello World!")),
    );
}

#[test]
fn test_function_calls() {
    assert_value("let identity = fn(x) { x; }; identity(5);", Value::Integer(5));
    assert_value("let identity = fn(x) { return x; }; identity(5);", Value::Integer(5));
    assert_value("let double = fn(x) { x * 2; }; double(5);", Value::Integer(10));
    assert_value("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", Value::Integer(20));
    assert_value("fn(x) { x; }(5)", Value::Integer(5));
    assert_value("fn() { }()", Value::Null);
}

#[test]
fn test_closures() {
    let source = "
        let newAdder = fn(x) {
            fn(y) { x + y };
        };
        let addTwo = newAdder(2);
        addTwo(3);
    ";

    assert_value(source, Value::Integer(5));
}

#[test]
fn test_recursive_function() {
    let source = "
        let fact = fn(n) { if (n < 2) { 1 } else { n * fact(n - 1) } };
        fact(5);
    ";

    assert_value(source, Value::Integer(120));
}

#[test]
fn test_function_scope_does_not_leak() {
    assert_error("let f = fn(x) { let y = x; y }; f(1); y", "identifier not found: y");
}

#[test]
fn test_function_value_display() {
    let value = eval_source("fn(a, b) { a + b }").unwrap();

    assert_eq!(value.type_name(), "FUNCTION");
    assert_eq!(value.to_string(), "fn(a, b) { (a + b) }");
}

#[test]
fn test_empty_program_is_null() {
    assert_value("", Value::Null);
}

#[test]
fn test_runtime_errors() {
    let cases = [
        ("5 + true;", "type mismatch: INTEGER + BOOLEAN"),
        ("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN"),
        ("-true", "unknown operator: -BOOLEAN"),
        ("true + false;", "unknown operator: BOOLEAN + BOOLEAN"),
        ("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN"),
        ("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN"),
        ("\"a\" - \"b\"", "unknown operator: STRING - STRING"),
        ("foobar", "identifier not found: foobar"),
        ("1 / 0", "division by zero"),
        ("5(1)", "not a function: INTEGER"),
        ("fn(x) { x }()", "wrong number of arguments: expected 1, received 0"),
    ];

    for (source, expected) in cases {
        assert_error(source, expected);
    }
}

#[test]
fn test_runtime_error_position() {
    let error = eval_source("let a = 1;\nmissing").unwrap_err();

    assert_eq!(error.get_error_name(), "UnknownIdentifier");
    assert_eq!(error.get_position().0, 11);
}

#[test]
fn test_environment_lookup_falls_back_to_outer() {
    let global = Environment::new();
    global.borrow_mut().set("x", Value::Integer(1));

    let inner = Environment::enclosed(&global);
    inner.borrow_mut().set("y", Value::Integer(2));

    assert_eq!(inner.borrow().get("x"), Some(Value::Integer(1)));
    assert_eq!(inner.borrow().get("y"), Some(Value::Integer(2)));
    assert_eq!(global.borrow().get("y"), None);

    inner.borrow_mut().set("x", Value::Integer(3));
    assert_eq!(inner.borrow().get("x"), Some(Value::Integer(3)));
    assert_eq!(global.borrow().get("x"), Some(Value::Integer(1)));
}

#[test]
fn test_truthiness() {
    assert!(Value::Integer(0).is_truthy());
    assert!(Value::String(String::new()).is_truthy());
    assert!(!Value::Boolean(false).is_truthy());
    assert!(!Value::Null.is_truthy());
}
