use std::{
    fmt::{self, Display},
    slice::Iter,
};

use crate::lexer::tokens::Token;

use super::{
    ast::{fmt_statements, Expr, Node, Stmt},
    expressions::Identifier,
};

/// `let <name> = <value>;`
#[derive(Debug, Clone)]
pub struct LetStmt {
    pub token: Token,
    pub name: Identifier,
    pub value: Expr,
}

impl Display for LetStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = {};", self.token.value, self.name, self.value)
    }
}

impl Node for LetStmt {
    fn origin_text(&self) -> &str {
        &self.token.value
    }
}

/// `return <value>;`
#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub token: Token,
    pub value: Expr,
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {};", self.token.value, self.value)
    }
}

impl Node for ReturnStmt {
    fn origin_text(&self) -> &str {
        &self.token.value
    }
}

/// A bare expression used as a statement. The token is the first token of
/// the expression.
#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    pub token: Token,
    pub expression: Expr,
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

impl Node for ExpressionStmt {
    fn origin_text(&self) -> &str {
        &self.token.value
    }
}

#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub token: Token,
    pub statements: Vec<Stmt>,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            return write!(f, "{{ }}");
        }

        write!(f, "{{ ")?;
        fmt_statements(f, &self.statements)?;
        write!(f, " }}")
    }
}

impl Node for BlockStmt {
    fn origin_text(&self) -> &str {
        &self.token.value
    }
}

shape_eq! {
    LetStmt => name, value;
    ReturnStmt => value;
    ExpressionStmt => expression;
    BlockStmt => statements;
}
