//! Lexical analysis module.
//!
//! This module contains the lexer (token source) that converts source text
//! into tokens for the parser. It handles:
//!
//! - Pull-based scanning of one token at a time using regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token position tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod source;
pub mod tokens;

#[cfg(test)]
mod tests;
