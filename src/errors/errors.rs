use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::NoPrefixParseFn { .. } => "NoPrefixParseFn",
            ErrorImpl::IntegerParseError { .. } => "IntegerParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::UnknownIdentifier { .. } => "UnknownIdentifier",
            ErrorImpl::TypeMismatch { .. } => "TypeMismatch",
            ErrorImpl::UnknownOperator { .. } => "UnknownOperator",
            ErrorImpl::DivisionByZero => "DivisionByZero",
            ErrorImpl::NotAFunction { .. } => "NotAFunction",
            ErrorImpl::ArgumentCount { .. } => "ArgumentCount",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::ExpectedToken { expected, found } => match (expected, found) {
                (TokenKind::CloseCurly, TokenKind::EOF) => {
                    ErrorTip::Suggestion(String::from("Block is missing its closing `}`"))
                }
                (TokenKind::CloseParen, _) => {
                    ErrorTip::Suggestion(String::from("Is a `)` missing?"))
                }
                (TokenKind::Assignment, _) => ErrorTip::Suggestion(String::from(
                    "A let binding needs `=` between the name and the value",
                )),
                _ => ErrorTip::None,
            },
            ErrorImpl::NoPrefixParseFn { kind } => ErrorTip::Suggestion(format!(
                "A `{}` token cannot start an expression",
                kind
            )),
            ErrorImpl::IntegerParseError { literal } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                literal
            )),
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "Break the expression up with let bindings",
            )),
            ErrorImpl::UnknownIdentifier { name } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", name))
            }
            ErrorImpl::ArgumentCount { expected, received } => ErrorTip::Suggestion(format!(
                "Expected {} arguments, received {}",
                expected, received
            )),
            ErrorImpl::TypeMismatch { .. }
            | ErrorImpl::UnknownOperator { .. }
            | ErrorImpl::DivisionByZero
            | ErrorImpl::NotAFunction { .. } => ErrorTip::None,
        }
    }
}

// The message is the diagnostic text, position is reported separately
impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected next token to be {expected}; got {found} instead")]
    ExpectedToken { expected: TokenKind, found: TokenKind },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn { kind: TokenKind },
    #[error("could not parse {literal:?} as integer")]
    IntegerParseError { literal: String },
    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
    #[error("identifier not found: {name}")]
    UnknownIdentifier { name: String },
    #[error("type mismatch: {left} {operator} {right}")]
    TypeMismatch {
        left: String,
        operator: String,
        right: String,
    },
    #[error("unknown operator: {operator}")]
    UnknownOperator { operator: String },
    #[error("division by zero")]
    DivisionByZero,
    #[error("not a function: {value}")]
    NotAFunction { value: String },
    #[error("wrong number of arguments: expected {expected}, received {received}")]
    ArgumentCount { expected: usize, received: usize },
}
