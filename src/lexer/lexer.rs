use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Builds a token from the matched text, or `None` for skipped input.
pub type RegexHandler = fn(&Lexer, &str) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Anchored, tried in order. Longer operators come before their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^\\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^\"[^\"]*\"").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new("^//[^\\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
        RegexPattern { regex: Regex::new("^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not, "!") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
    ];
}

/// Pull-based scanner over a single source text.
///
/// Each call to [`Lexer::next_token`] scans exactly one token. Once the
/// input is exhausted every further call yields an `EOF` token.
#[derive(Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: impl Into<String>, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source: source.into(),
            pos: 0,
            file: file_name,
        }
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            if self.at_eof() {
                return MK_TOKEN!(TokenKind::EOF, String::from("EOF"), self.span_of(0));
            }

            let remainder = &self.source[self.pos..];
            let scanned = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(remainder)
                    .map(|found| ((pattern.handler)(self, found.as_str()), found.len()))
            });

            match scanned {
                Some((token, len)) => {
                    self.advance_n(len);
                    if let Some(token) = token {
                        return token;
                    }
                }
                None => {
                    let Some(ch) = remainder.chars().next() else {
                        continue;
                    };
                    let token = MK_TOKEN!(TokenKind::Illegal, ch.to_string(), self.span_of(ch.len_utf8()));
                    self.advance_n(ch.len_utf8());
                    return token;
                }
            }
        }
    }

    /// Span of `len` bytes starting at the current position.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: Position(self.pos as u32, Rc::clone(&self.file)),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn number_handler(lexer: &Lexer, matched: &str) -> Option<Token> {
    Some(MK_TOKEN!(TokenKind::Number, matched.to_string(), lexer.span_of(matched.len())))
}

fn skip_handler(_lexer: &Lexer, _matched: &str) -> Option<Token> {
    None
}

fn string_handler(lexer: &Lexer, matched: &str) -> Option<Token> {
    let string_literal = &matched[1..matched.len() - 1];

    Some(MK_TOKEN!(TokenKind::String, string_literal.to_string(), lexer.span_of(matched.len())))
}

fn symbol_handler(lexer: &Lexer, matched: &str) -> Option<Token> {
    let kind = RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    Some(MK_TOKEN!(kind, matched.to_string(), lexer.span_of(matched.len())))
}

/// Scans the whole source eagerly, up to and including the first `EOF`.
pub fn tokenize(source: impl Into<String>, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
