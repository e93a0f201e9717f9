use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("return", TokenKind::Return);
        map.insert("fn", TokenKind::Fn);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Illegal,
    Number,
    String,
    Identifier,

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    Greater,

    Semicolon,
    Comma,

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    Let,
    Fn,
    Return,
    If,
    Else,
    True,
    False,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

// Spans are location metadata, two tokens are the same token if they read the same
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    pub fn debug(&self) -> String {
        if self.is_one_of_many(&[
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::Number,
            TokenKind::Illegal,
        ]) {
            format!("{} ({})", self.kind, self.value)
        } else {
            format!("{} ()", self.kind)
        }
    }
}
