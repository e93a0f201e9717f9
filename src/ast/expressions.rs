use std::fmt::{self, Display};

use crate::lexer::tokens::Token;

use super::{
    ast::{Expr, Node},
    statements::BlockStmt,
};

// LITERALS

/// Identifier
/// A name, used as an expression, as a let target and as a parameter.
#[derive(Debug, Clone)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Integer Expression
#[derive(Debug, Clone)]
pub struct IntegerExpr {
    pub token: Token,
    pub value: i64,
}

impl Display for IntegerExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// String Expression
/// The value excludes the surrounding quotes.
#[derive(Debug, Clone)]
pub struct StringExpr {
    pub token: Token,
    pub value: String,
}

impl Display for StringExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.value)
    }
}

/// Boolean Expression
#[derive(Debug, Clone)]
pub struct BooleanExpr {
    pub token: Token,
    pub value: bool,
}

impl Display for BooleanExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

// COMPLEX

/// Prefix Expression
/// A unary operator (`-` or `!`) applied to the expression on its right.
#[derive(Debug, Clone)]
pub struct PrefixExpr {
    pub token: Token,
    pub operator: String,
    pub right: Box<Expr>,
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

/// Infix Expression
/// A binary operation. The token is the operator.
#[derive(Debug, Clone)]
pub struct InfixExpr {
    pub token: Token,
    pub left: Box<Expr>,
    pub operator: String,
    pub right: Box<Expr>,
}

impl Display for InfixExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

#[derive(Debug, Clone)]
pub struct IfExpr {
    pub token: Token,
    pub condition: Box<Expr>,
    pub consequence: BlockStmt,
    pub alternative: Option<BlockStmt>,
}

impl Display for IfExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) {}", self.token.value, self.condition, self.consequence)?;

        if let Some(alternative) = &self.alternative {
            write!(f, " else {}", alternative)?;
        }

        Ok(())
    }
}

/// Function Expression
/// An anonymous function literal, `fn(<parameters>) { <body> }`.
#[derive(Debug, Clone)]
pub struct FunctionExpr {
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: BlockStmt,
}

impl Display for FunctionExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parameters = self
            .parameters
            .iter()
            .map(|parameter| parameter.value.as_str())
            .collect::<Vec<&str>>();

        write!(f, "{}({}) {}", self.token.value, parameters.join(", "), self.body)
    }
}

/// Call Expression
/// The token is the opening `(` of the argument list.
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub token: Token,
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arguments = self
            .arguments
            .iter()
            .map(|argument| argument.to_string())
            .collect::<Vec<String>>();

        write!(f, "{}({})", self.callee, arguments.join(", "))
    }
}

impl Node for Identifier {
    fn origin_text(&self) -> &str {
        &self.token.value
    }
}

impl Node for IntegerExpr {
    fn origin_text(&self) -> &str {
        &self.token.value
    }
}

impl Node for StringExpr {
    fn origin_text(&self) -> &str {
        &self.token.value
    }
}

impl Node for BooleanExpr {
    fn origin_text(&self) -> &str {
        &self.token.value
    }
}

impl Node for PrefixExpr {
    fn origin_text(&self) -> &str {
        &self.token.value
    }
}

impl Node for InfixExpr {
    fn origin_text(&self) -> &str {
        &self.token.value
    }
}

impl Node for IfExpr {
    fn origin_text(&self) -> &str {
        &self.token.value
    }
}

impl Node for FunctionExpr {
    fn origin_text(&self) -> &str {
        &self.token.value
    }
}

impl Node for CallExpr {
    fn origin_text(&self) -> &str {
        &self.token.value
    }
}

shape_eq! {
    Identifier => value;
    IntegerExpr => value;
    StringExpr => value;
    BooleanExpr => value;
    PrefixExpr => operator, right;
    InfixExpr => left, operator, right;
    IfExpr => condition, consequence, alternative;
    FunctionExpr => parameters, body;
    CallExpr => callee, arguments;
}
