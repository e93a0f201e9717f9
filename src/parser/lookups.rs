//! Fixed dispatch tables for the parser.
//!
//! Every table is an exhaustive `match` over `TokenKind`, so adding a token
//! kind forces a decision about how each table treats it.

use crate::{
    ast::ast::{Expr, Stmt},
    lexer::{source::TokenSource, tokens::TokenKind},
};

use super::{expr::*, parser::Parser, stmt::*};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Equals,
    Relational,
    Additive,
    Multiplicative,
    Unary,
    Call,
}

pub type StmtHandler<S> = fn(&mut Parser<S>) -> Option<Stmt>;
pub type NUDHandler<S> = fn(&mut Parser<S>) -> Option<Expr>;
pub type LEDHandler<S> = fn(&mut Parser<S>, Expr, BindingPower) -> Option<Expr>;

/// Binding power of a token in infix position.
pub fn binding_power(kind: TokenKind) -> BindingPower {
    match kind {
        TokenKind::Equals | TokenKind::NotEquals => BindingPower::Equals,
        TokenKind::Less | TokenKind::Greater => BindingPower::Relational,
        TokenKind::Plus | TokenKind::Dash => BindingPower::Additive,
        TokenKind::Star | TokenKind::Slash => BindingPower::Multiplicative,
        TokenKind::OpenParen => BindingPower::Call,

        TokenKind::EOF
        | TokenKind::Illegal
        | TokenKind::Number
        | TokenKind::String
        | TokenKind::Identifier
        | TokenKind::OpenCurly
        | TokenKind::CloseCurly
        | TokenKind::CloseParen
        | TokenKind::Assignment
        | TokenKind::Not
        | TokenKind::Semicolon
        | TokenKind::Comma
        | TokenKind::Let
        | TokenKind::Fn
        | TokenKind::Return
        | TokenKind::If
        | TokenKind::Else
        | TokenKind::True
        | TokenKind::False => BindingPower::Default,
    }
}

/// Handler for a token that starts an expression.
pub fn nud_handler<S: TokenSource>(kind: TokenKind) -> Option<NUDHandler<S>> {
    match kind {
        // Literals and symbols
        TokenKind::Identifier => Some(parse_identifier),
        TokenKind::Number => Some(parse_integer_expr),
        TokenKind::String => Some(parse_string_expr),
        TokenKind::True | TokenKind::False => Some(parse_boolean_expr),

        TokenKind::Not | TokenKind::Dash => Some(parse_prefix_expr),
        TokenKind::OpenParen => Some(parse_grouping_expr),
        TokenKind::If => Some(parse_if_expr),
        TokenKind::Fn => Some(parse_function_expr),

        TokenKind::EOF
        | TokenKind::Illegal
        | TokenKind::OpenCurly
        | TokenKind::CloseCurly
        | TokenKind::CloseParen
        | TokenKind::Assignment
        | TokenKind::Equals
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::Greater
        | TokenKind::Semicolon
        | TokenKind::Comma
        | TokenKind::Plus
        | TokenKind::Slash
        | TokenKind::Star
        | TokenKind::Let
        | TokenKind::Return
        | TokenKind::Else => None,
    }
}

/// Handler for a token that continues an expression.
pub fn led_handler<S: TokenSource>(kind: TokenKind) -> Option<LEDHandler<S>> {
    match kind {
        // Relational
        TokenKind::Equals | TokenKind::NotEquals | TokenKind::Less | TokenKind::Greater => {
            Some(parse_infix_expr)
        }

        // Additive and multiplicative
        TokenKind::Plus | TokenKind::Dash | TokenKind::Star | TokenKind::Slash => {
            Some(parse_infix_expr)
        }

        TokenKind::OpenParen => Some(parse_call_expr),

        TokenKind::EOF
        | TokenKind::Illegal
        | TokenKind::Number
        | TokenKind::String
        | TokenKind::Identifier
        | TokenKind::OpenCurly
        | TokenKind::CloseCurly
        | TokenKind::CloseParen
        | TokenKind::Assignment
        | TokenKind::Not
        | TokenKind::Semicolon
        | TokenKind::Comma
        | TokenKind::Let
        | TokenKind::Fn
        | TokenKind::Return
        | TokenKind::If
        | TokenKind::Else
        | TokenKind::True
        | TokenKind::False => None,
    }
}

/// Handler for a token that starts a dedicated statement form. Anything
/// else is parsed as an expression statement.
pub fn stmt_handler<S: TokenSource>(kind: TokenKind) -> Option<StmtHandler<S>> {
    match kind {
        TokenKind::Let => Some(parse_let_stmt),
        TokenKind::Return => Some(parse_return_stmt),

        TokenKind::EOF
        | TokenKind::Illegal
        | TokenKind::Number
        | TokenKind::String
        | TokenKind::Identifier
        | TokenKind::OpenCurly
        | TokenKind::CloseCurly
        | TokenKind::OpenParen
        | TokenKind::CloseParen
        | TokenKind::Assignment
        | TokenKind::Equals
        | TokenKind::Not
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::Greater
        | TokenKind::Semicolon
        | TokenKind::Comma
        | TokenKind::Plus
        | TokenKind::Dash
        | TokenKind::Slash
        | TokenKind::Star
        | TokenKind::Fn
        | TokenKind::If
        | TokenKind::Else
        | TokenKind::True
        | TokenKind::False => None,
    }
}
