//! Statement and expression evaluation.
//!
//! Every function returns `Result<Value, Error>`. A `return` travels up as
//! `Value::Return` until the enclosing function call or the program
//! unwraps it.

use std::{cell::RefCell, rc::Rc};

use log::trace;

use crate::{
    ast::{
        ast::{Expr, Program, Stmt},
        statements::BlockStmt,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::Token,
};

use super::{
    environment::Environment,
    value::{FunctionValue, Value},
};

type Env = Rc<RefCell<Environment>>;

/// Evaluates an operand, handing a `return` raised inside it straight back
/// to the caller instead of using it as a value.
macro_rules! eval_operand {
    ($expr:expr, $env:expr) => {
        match eval_expr($expr, $env)? {
            value @ Value::Return(_) => return Ok(value),
            value => value,
        }
    };
}

fn error_at(error_impl: ErrorImpl, token: &Token) -> Error {
    Error::new(error_impl, token.span.start.clone())
}

/// Evaluates a program in `env`.
///
/// # Returns
///
/// The value of the last statement evaluated, `Null` for an empty
/// program, or the value of the first top-level `return`.
pub fn eval_program(program: &Program, env: &Env) -> Result<Value, Error> {
    let mut result = Value::Null;

    for stmt in &program.statements {
        result = eval_stmt(stmt, env)?;

        if let Value::Return(value) = result {
            return Ok(*value);
        }
    }

    Ok(result)
}

fn eval_block(block: &BlockStmt, env: &Env) -> Result<Value, Error> {
    let mut result = Value::Null;

    for stmt in block.iter() {
        result = eval_stmt(stmt, env)?;

        if let Value::Return(_) = result {
            return Ok(result);
        }
    }

    Ok(result)
}

pub fn eval_stmt(stmt: &Stmt, env: &Env) -> Result<Value, Error> {
    match stmt {
        Stmt::Let(stmt) => {
            let value = eval_operand!(&stmt.value, env);
            env.borrow_mut().set(stmt.name.value.clone(), value);
            Ok(Value::Null)
        }
        Stmt::Return(stmt) => {
            let value = eval_operand!(&stmt.value, env);
            Ok(Value::Return(Box::new(value)))
        }
        Stmt::Expression(stmt) => eval_expr(&stmt.expression, env),
        Stmt::Block(block) => eval_block(block, env),
    }
}

pub fn eval_expr(expr: &Expr, env: &Env) -> Result<Value, Error> {
    match expr {
        Expr::Integer(expr) => Ok(Value::Integer(expr.value)),
        Expr::String(expr) => Ok(Value::String(expr.value.clone())),
        Expr::Boolean(expr) => Ok(Value::Boolean(expr.value)),
        Expr::Identifier(expr) => env.borrow().get(&expr.value).ok_or_else(|| {
            error_at(
                ErrorImpl::UnknownIdentifier {
                    name: expr.value.clone(),
                },
                &expr.token,
            )
        }),
        Expr::Prefix(expr) => {
            let right = eval_operand!(&expr.right, env);
            eval_prefix(&expr.operator, right, &expr.token)
        }
        Expr::Infix(expr) => {
            let left = eval_operand!(&expr.left, env);
            let right = eval_operand!(&expr.right, env);
            eval_infix(&expr.operator, left, right, &expr.token)
        }
        Expr::If(expr) => {
            let condition = eval_operand!(&expr.condition, env);

            if condition.is_truthy() {
                eval_block(&expr.consequence, env)
            } else if let Some(alternative) = &expr.alternative {
                eval_block(alternative, env)
            } else {
                Ok(Value::Null)
            }
        }
        Expr::Function(expr) => Ok(Value::Function(FunctionValue {
            parameters: expr.parameters.clone(),
            body: expr.body.clone(),
            env: Rc::clone(env),
        })),
        Expr::Call(expr) => {
            let callee = eval_operand!(&expr.callee, env);

            let mut arguments = Vec::with_capacity(expr.arguments.len());
            for argument in &expr.arguments {
                arguments.push(eval_operand!(argument, env));
            }

            apply_function(callee, arguments, &expr.token)
        }
    }
}

fn eval_prefix(operator: &str, right: Value, token: &Token) -> Result<Value, Error> {
    match (operator, right) {
        ("!", right) => Ok(Value::Boolean(!right.is_truthy())),
        ("-", Value::Integer(value)) => Ok(Value::Integer(value.wrapping_neg())),
        (operator, right) => Err(error_at(
            ErrorImpl::UnknownOperator {
                operator: format!("{}{}", operator, right.type_name()),
            },
            token,
        )),
    }
}

fn eval_infix(operator: &str, left: Value, right: Value, token: &Token) -> Result<Value, Error> {
    match (left, right) {
        (Value::Integer(left), Value::Integer(right)) => {
            eval_integer_infix(operator, left, right, token)
        }
        (Value::String(left), Value::String(right)) => match operator {
            "+" => Ok(Value::String(left + &right)),
            "==" => Ok(Value::Boolean(left == right)),
            "!=" => Ok(Value::Boolean(left != right)),
            _ => Err(unknown_infix(operator, "STRING", "STRING", token)),
        },
        (Value::Boolean(left), Value::Boolean(right)) => match operator {
            "==" => Ok(Value::Boolean(left == right)),
            "!=" => Ok(Value::Boolean(left != right)),
            _ => Err(unknown_infix(operator, "BOOLEAN", "BOOLEAN", token)),
        },
        (left, right) => match operator {
            "==" => Ok(Value::Boolean(left == right)),
            "!=" => Ok(Value::Boolean(left != right)),
            _ if left.type_name() != right.type_name() => Err(error_at(
                ErrorImpl::TypeMismatch {
                    left: left.type_name().to_string(),
                    operator: operator.to_string(),
                    right: right.type_name().to_string(),
                },
                token,
            )),
            _ => Err(unknown_infix(operator, left.type_name(), right.type_name(), token)),
        },
    }
}

fn eval_integer_infix(operator: &str, left: i64, right: i64, token: &Token) -> Result<Value, Error> {
    match operator {
        "+" => Ok(Value::Integer(left.wrapping_add(right))),
        "-" => Ok(Value::Integer(left.wrapping_sub(right))),
        "*" => Ok(Value::Integer(left.wrapping_mul(right))),
        "/" => {
            if right == 0 {
                return Err(error_at(ErrorImpl::DivisionByZero, token));
            }
            Ok(Value::Integer(left.wrapping_div(right)))
        }
        "<" => Ok(Value::Boolean(left < right)),
        ">" => Ok(Value::Boolean(left > right)),
        "==" => Ok(Value::Boolean(left == right)),
        "!=" => Ok(Value::Boolean(left != right)),
        _ => Err(unknown_infix(operator, "INTEGER", "INTEGER", token)),
    }
}

fn unknown_infix(operator: &str, left: &str, right: &str, token: &Token) -> Error {
    error_at(
        ErrorImpl::UnknownOperator {
            operator: format!("{} {} {}", left, operator, right),
        },
        token,
    )
}

fn apply_function(callee: Value, arguments: Vec<Value>, token: &Token) -> Result<Value, Error> {
    let function = match callee {
        Value::Function(function) => function,
        other => {
            return Err(error_at(
                ErrorImpl::NotAFunction {
                    value: other.type_name().to_string(),
                },
                token,
            ))
        }
    };

    if function.parameters.len() != arguments.len() {
        return Err(error_at(
            ErrorImpl::ArgumentCount {
                expected: function.parameters.len(),
                received: arguments.len(),
            },
            token,
        ));
    }

    trace!("calling {} with {} arguments", function, arguments.len());

    let scope = Environment::enclosed(&function.env);
    for (parameter, argument) in function.parameters.iter().zip(arguments) {
        scope.borrow_mut().set(parameter.value.clone(), argument);
    }

    match eval_block(&function.body, &scope)? {
        Value::Return(value) => Ok(*value),
        value => Ok(value),
    }
}
