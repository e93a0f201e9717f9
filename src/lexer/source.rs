//! The pull interface the parser reads tokens through.

use crate::{Position, Span, MK_TOKEN};

use super::{
    lexer::Lexer,
    tokens::{Token, TokenKind},
};

/// Supplies one token per call.
///
/// Implementations must eventually yield an `EOF` token and keep yielding it
/// on every later call.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

impl TokenSource for Lexer {
    fn next_token(&mut self) -> Token {
        Lexer::next_token(self)
    }
}

impl<S: TokenSource + ?Sized> TokenSource for &mut S {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}

impl<S: TokenSource + ?Sized> TokenSource for Box<S> {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}

/// Replays a pre-scanned token list.
///
/// After the list runs out (or after its first `EOF`) the stream yields
/// `EOF` forever. A list without an `EOF` gets one with a null position.
pub struct TokenStream {
    tokens: std::vec::IntoIter<Token>,
    eof: Option<Token>,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenStream {
            tokens: tokens.into_iter(),
            eof: None,
        }
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Token {
        if let Some(eof) = &self.eof {
            return eof.clone();
        }

        let token = self.tokens.next().unwrap_or_else(|| {
            MK_TOKEN!(
                TokenKind::EOF,
                String::from("EOF"),
                Span {
                    start: Position::null(),
                    end: Position::null()
                }
            )
        });

        if token.kind == TokenKind::EOF {
            self.eof = Some(token.clone());
        }

        token
    }
}
