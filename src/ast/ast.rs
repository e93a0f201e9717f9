use std::fmt::{self, Display};

use crate::lexer::tokens::Token;

use super::{
    expressions::{
        BooleanExpr, CallExpr, FunctionExpr, Identifier, IfExpr, InfixExpr, IntegerExpr,
        PrefixExpr, StringExpr,
    },
    statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
};

/// Node Trait
///
/// Capabilities shared by every AST node.
pub trait Node: Display {
    /// The literal text of the token that introduced the node.
    fn origin_text(&self) -> &str;
    /// Fully parenthesized reconstruction of the node, reflecting how
    /// precedence was actually resolved. Re-parsing it yields the same tree.
    fn canonical_form(&self) -> String {
        self.to_string()
    }
}

/// Root of a parsed source text: its statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Node for Program {
    fn origin_text(&self) -> &str {
        self.statements
            .first()
            .map(|stmt| stmt.origin_text())
            .unwrap_or("")
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_statements(f, &self.statements)
    }
}

/// Statement Types
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
    Block(BlockStmt),
}

impl Stmt {
    pub fn token(&self) -> &Token {
        match self {
            Stmt::Let(stmt) => &stmt.token,
            Stmt::Return(stmt) => &stmt.token,
            Stmt::Expression(stmt) => &stmt.token,
            Stmt::Block(stmt) => &stmt.token,
        }
    }
}

impl Node for Stmt {
    fn origin_text(&self) -> &str {
        &self.token().value
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Let(stmt) => stmt.fmt(f),
            Stmt::Return(stmt) => stmt.fmt(f),
            Stmt::Expression(stmt) => stmt.fmt(f),
            Stmt::Block(stmt) => stmt.fmt(f),
        }
    }
}

/// Expression Types
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(Identifier),
    Integer(IntegerExpr),
    String(StringExpr),
    Boolean(BooleanExpr),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    If(IfExpr),
    Function(FunctionExpr),
    Call(CallExpr),
}

impl Expr {
    pub fn token(&self) -> &Token {
        match self {
            Expr::Identifier(expr) => &expr.token,
            Expr::Integer(expr) => &expr.token,
            Expr::String(expr) => &expr.token,
            Expr::Boolean(expr) => &expr.token,
            Expr::Prefix(expr) => &expr.token,
            Expr::Infix(expr) => &expr.token,
            Expr::If(expr) => &expr.token,
            Expr::Function(expr) => &expr.token,
            Expr::Call(expr) => &expr.token,
        }
    }
}

impl Node for Expr {
    fn origin_text(&self) -> &str {
        &self.token().value
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Identifier(expr) => expr.fmt(f),
            Expr::Integer(expr) => expr.fmt(f),
            Expr::String(expr) => expr.fmt(f),
            Expr::Boolean(expr) => expr.fmt(f),
            Expr::Prefix(expr) => expr.fmt(f),
            Expr::Infix(expr) => expr.fmt(f),
            Expr::If(expr) => expr.fmt(f),
            Expr::Function(expr) => expr.fmt(f),
            Expr::Call(expr) => expr.fmt(f),
        }
    }
}

/// Writes a statement list separated by spaces.
///
/// An expression statement followed by another statement is terminated with
/// `;`, otherwise `a (b)` would re-parse as a call.
pub(crate) fn fmt_statements(f: &mut fmt::Formatter<'_>, statements: &[Stmt]) -> fmt::Result {
    for (i, stmt) in statements.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", stmt)?;

        if matches!(stmt, Stmt::Expression(_)) && i + 1 < statements.len() {
            write!(f, ";")?;
        }
    }

    Ok(())
}
