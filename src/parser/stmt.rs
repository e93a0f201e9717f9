use log::trace;

use crate::{
    ast::{
        ast::Stmt,
        expressions::Identifier,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::ErrorImpl,
    lexer::{source::TokenSource, tokens::TokenKind},
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{lookups::stmt_handler, parser::Parser};

/// Parses one statement starting at the current token.
///
/// Stops on the statement's last token (its `;` when present).
pub fn parse_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Option<Stmt> {
    let kind = parser.current_token_kind();

    if let Some(handler) = stmt_handler::<S>(kind) {
        trace!("dispatching {} statement", kind);
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_let_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Option<Stmt> {
    let token = parser.current_token().clone();

    let name_token = parser.expect_peek(TokenKind::Identifier)?;
    let name = Identifier {
        value: name_token.value.clone(),
        token: name_token,
    };

    parser.expect_peek(TokenKind::Assignment)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Default)?;

    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Some(Stmt::Let(LetStmt { token, name, value }))
}

pub fn parse_return_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Option<Stmt> {
    let token = parser.advance();

    let value = parse_expr(parser, BindingPower::Default)?;

    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Some(Stmt::Return(ReturnStmt { token, value }))
}

/// The trailing `;` is optional so a bare expression parses on its own.
pub fn parse_expression_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Option<Stmt> {
    let token = parser.current_token().clone();

    let expression = parse_expr(parser, BindingPower::Default)?;

    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Some(Stmt::Expression(ExpressionStmt { token, expression }))
}

/// Parses `{ ... }` starting on the `{` and stopping on the `}`.
///
/// Reaching end of input before `}` ends the block silently, unless the
/// parser is configured with `strict_blocks`.
pub fn parse_block_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Option<BlockStmt> {
    parser.nested(parse_block_body)
}

fn parse_block_body<S: TokenSource>(parser: &mut Parser<S>) -> Option<BlockStmt> {
    parser.descend()?;
    let token = parser.advance();

    let mut statements = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly
        && parser.current_token_kind() != TokenKind::EOF
    {
        if let Some(stmt) = parse_stmt(parser) {
            statements.push(stmt);
        }
        parser.advance();
    }

    if parser.current_token_kind() == TokenKind::EOF && parser.config().strict_blocks {
        let position = parser.current_token().span.start.clone();
        parser.record(
            ErrorImpl::ExpectedToken {
                expected: TokenKind::CloseCurly,
                found: TokenKind::EOF,
            },
            position,
        );
        return None;
    }

    Some(BlockStmt { token, statements })
}
