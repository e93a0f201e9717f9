use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BooleanExpr, CallExpr, FunctionExpr, Identifier, IfExpr, InfixExpr, IntegerExpr,
            PrefixExpr, StringExpr,
        },
    },
    errors::errors::ErrorImpl,
    lexer::{source::TokenSource, tokens::TokenKind},
};

use super::{
    lookups::{led_handler, nud_handler, BindingPower},
    parser::Parser,
    stmt::parse_block_stmt,
};

/// Parses an expression whose operators bind tighter than `bp`.
///
/// Starts on the first token of the expression and stops on its last.
pub fn parse_expr<S: TokenSource>(parser: &mut Parser<S>, bp: BindingPower) -> Option<Expr> {
    parser.nested(|parser| parse_operators(parser, bp))
}

// Every operand and every operator applied to `left` is one level of nesting
fn parse_operators<S: TokenSource>(parser: &mut Parser<S>, bp: BindingPower) -> Option<Expr> {
    parser.descend()?;

    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = nud_handler::<S>(token_kind) else {
        let position = parser.current_token().span.start.clone();
        parser.record(ErrorImpl::NoPrefixParseFn { kind: token_kind }, position);
        return None;
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than the current BP, it takes `left` as its lhs
    while parser.peek_token_kind() != TokenKind::Semicolon && parser.peek_binding_power() > bp {
        let Some(led) = led_handler::<S>(parser.peek_token_kind()) else {
            return Some(left);
        };
        let operator_bp = parser.peek_binding_power();

        parser.descend()?;
        parser.advance();
        left = led(parser, left, operator_bp)?;
    }

    Some(left)
}

pub fn parse_identifier<S: TokenSource>(parser: &mut Parser<S>) -> Option<Expr> {
    let token = parser.current_token().clone();

    Some(Expr::Identifier(Identifier {
        value: token.value.clone(),
        token,
    }))
}

pub fn parse_integer_expr<S: TokenSource>(parser: &mut Parser<S>) -> Option<Expr> {
    let token = parser.current_token().clone();

    match token.value.parse::<i64>() {
        Ok(value) => Some(Expr::Integer(IntegerExpr { token, value })),
        Err(_) => {
            parser.record(
                ErrorImpl::IntegerParseError {
                    literal: token.value.clone(),
                },
                token.span.start.clone(),
            );
            None
        }
    }
}

pub fn parse_string_expr<S: TokenSource>(parser: &mut Parser<S>) -> Option<Expr> {
    let token = parser.current_token().clone();

    Some(Expr::String(StringExpr {
        value: token.value.clone(),
        token,
    }))
}

pub fn parse_boolean_expr<S: TokenSource>(parser: &mut Parser<S>) -> Option<Expr> {
    let token = parser.current_token().clone();

    Some(Expr::Boolean(BooleanExpr {
        value: token.kind == TokenKind::True,
        token,
    }))
}

pub fn parse_prefix_expr<S: TokenSource>(parser: &mut Parser<S>) -> Option<Expr> {
    let operator_token = parser.advance();
    let rhs = parse_expr(parser, BindingPower::Unary)?;

    Some(Expr::Prefix(PrefixExpr {
        operator: operator_token.value.clone(),
        token: operator_token,
        right: Box::new(rhs),
    }))
}

pub fn parse_infix_expr<S: TokenSource>(
    parser: &mut Parser<S>,
    left: Expr,
    bp: BindingPower,
) -> Option<Expr> {
    let operator_token = parser.advance();

    // Same BP on the right keeps equal-precedence chains left-leaning
    let right = parse_expr(parser, bp)?;

    Some(Expr::Infix(InfixExpr {
        operator: operator_token.value.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr<S: TokenSource>(parser: &mut Parser<S>) -> Option<Expr> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Some(expr)
}

pub fn parse_if_expr<S: TokenSource>(parser: &mut Parser<S>) -> Option<Expr> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.peek_token_kind() == TokenKind::Else {
        parser.advance();
        parser.expect_peek(TokenKind::OpenCurly)?;
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Some(Expr::If(IfExpr {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

pub fn parse_function_expr<S: TokenSource>(parser: &mut Parser<S>) -> Option<Expr> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    let parameters = parse_parameters(parser)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block_stmt(parser)?;

    Some(Expr::Function(FunctionExpr {
        token,
        parameters,
        body,
    }))
}

// Starts on `(`, stops on `)`
fn parse_parameters<S: TokenSource>(parser: &mut Parser<S>) -> Option<Vec<Identifier>> {
    let mut parameters = vec![];

    if parser.peek_token_kind() == TokenKind::CloseParen {
        parser.advance();
        return Some(parameters);
    }

    let token = parser.expect_peek(TokenKind::Identifier)?;
    parameters.push(Identifier {
        value: token.value.clone(),
        token,
    });

    while parser.peek_token_kind() == TokenKind::Comma {
        parser.advance();
        let token = parser.expect_peek(TokenKind::Identifier)?;
        parameters.push(Identifier {
            value: token.value.clone(),
            token,
        });
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Some(parameters)
}

pub fn parse_call_expr<S: TokenSource>(
    parser: &mut Parser<S>,
    left: Expr,
    _bp: BindingPower,
) -> Option<Expr> {
    let token = parser.current_token().clone();
    let arguments = parse_call_arguments(parser)?;

    Some(Expr::Call(CallExpr {
        token,
        callee: Box::new(left),
        arguments,
    }))
}

// Starts on `(`, stops on `)`
fn parse_call_arguments<S: TokenSource>(parser: &mut Parser<S>) -> Option<Vec<Expr>> {
    let mut args = vec![];

    if parser.peek_token_kind() == TokenKind::CloseParen {
        parser.advance();
        return Some(args);
    }

    parser.advance();
    args.push(parse_expr(parser, BindingPower::Default)?);

    while parser.peek_token_kind() == TokenKind::Comma {
        parser.advance();
        parser.advance();
        args.push(parse_expr(parser, BindingPower::Default)?);
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Some(args)
}
