//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program loop.
//! The parser reads from a [`TokenSource`] with one token of lookahead:
//! `current` is the token being parsed and `peek` the one after it.
//!
//! Parse routines return `Option`. `None` means the failure has already
//! been recorded as a diagnostic; the enclosing statement is dropped and
//! parsing carries on with the next one.

use log::{debug, trace};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        source::{TokenSource, TokenStream},
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{lookups::binding_power, lookups::BindingPower, stmt::parse_stmt};

/// Deepest expression or block nesting the parser accepts.
///
/// Everything that walks the tree recurses once per level, so the limit keeps
/// parsing, rendering and evaluation within the native stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parser behavior switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserConfig {
    /// Report a block that reaches end of input before its closing `}`.
    /// When unset such a block ends silently at end of input.
    pub strict_blocks: bool,
}

/// The main parser structure that maintains parsing state.
///
/// One instance parses one token stream; it is not meant to be shared.
pub struct Parser<S> {
    /// Where tokens are pulled from
    source: S,
    /// The token being parsed
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Diagnostics in the order they were recorded
    errors: Vec<Error>,
    /// Nesting levels entered by the expression being parsed
    depth: usize,
    config: ParserConfig,
}

impl<S: TokenSource> Parser<S> {
    /// Creates a parser with the default configuration.
    pub fn new(source: S) -> Self {
        Parser::with_config(source, ParserConfig::default())
    }

    /// Creates a parser, priming `current` and `peek` from the source.
    ///
    /// # Arguments
    ///
    /// * `source` - The token source to read from
    /// * `config` - Parser behavior switches
    pub fn with_config(mut source: S, config: ParserConfig) -> Self {
        let current = source.next_token();
        let peek = source.next_token();

        Parser {
            source,
            current,
            peek,
            errors: vec![],
            depth: 0,
            config,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Binding power of the lookahead token in infix position.
    pub fn peek_binding_power(&self) -> BindingPower {
        binding_power(self.peek.kind)
    }

    /// Advances to the next token and returns the previous current token.
    pub fn advance(&mut self) -> Token {
        let next = self.source.next_token();
        let peek = std::mem::replace(&mut self.peek, next);
        std::mem::replace(&mut self.current, peek)
    }

    /// Advances if the lookahead token has the expected kind.
    ///
    /// # Returns
    ///
    /// The new current token, or `None` after recording an
    /// `ExpectedToken` diagnostic. The cursor does not move on failure.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Option<Token> {
        if self.peek.kind == expected_kind {
            self.advance();
            Some(self.current.clone())
        } else {
            self.peek_error(expected_kind);
            None
        }
    }

    fn peek_error(&mut self, expected_kind: TokenKind) {
        let position = self.peek.span.start.clone();
        self.record(
            ErrorImpl::ExpectedToken {
                expected: expected_kind,
                found: self.peek.kind,
            },
            position,
        );
    }

    /// Runs `parse` and then restores the nesting depth it started at,
    /// whether or not it succeeded.
    pub fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let depth = self.depth;
        let parsed = parse(self);
        self.depth = depth;

        parsed
    }

    /// Enters one more nesting level.
    ///
    /// Past [`MAX_NESTING_DEPTH`] this records `NestingTooDeep` at the
    /// current token and returns `None`.
    pub fn descend(&mut self) -> Option<()> {
        self.depth += 1;

        if self.depth > MAX_NESTING_DEPTH {
            let position = self.current.span.start.clone();
            self.record(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                position,
            );
            return None;
        }

        Some(())
    }

    /// Appends a diagnostic.
    pub fn record(&mut self, error_impl: ErrorImpl, position: Position) {
        let error = Error::new(error_impl, position);
        debug!("parse error at {}: {}", error.get_position().0, error);
        self.errors.push(error);
    }

    /// The diagnostic messages recorded so far, in order.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// The recorded diagnostics with their positions.
    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }

    pub fn config(&self) -> ParserConfig {
        self.config
    }

    /// Parses statements until end of input.
    ///
    /// Statements that fail to parse are dropped. The cursor moves at least
    /// one token per iteration, so the loop always reaches `EOF`.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while self.current.kind != TokenKind::EOF {
            trace!("statement starting at {}", self.current.debug());
            self.depth = 0;

            if let Some(stmt) = parse_stmt(self) {
                program.statements.push(stmt);
            }
            self.advance();
        }

        debug!(
            "parsed {} statements with {} errors",
            program.statements.len(),
            self.errors.len()
        );

        program
    }
}

/// Parses a pre-scanned token list into a program.
///
/// This is the main entry point when tokens are already available. It
/// creates a parser over the tokens and parses until `EOF`.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (holding the diagnostics)
/// - The parsed Program, which is partial when diagnostics were recorded
pub fn parse(tokens: Vec<Token>) -> (Parser<TokenStream>, Program) {
    parse_with_config(tokens, ParserConfig::default())
}

pub fn parse_with_config(
    tokens: Vec<Token>,
    config: ParserConfig,
) -> (Parser<TokenStream>, Program) {
    let mut parser = Parser::with_config(TokenStream::new(tokens), config);
    let program = parser.parse_program();

    (parser, program)
}
