//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into a `Program`. It uses a Pratt parser for expressions with proper
//! operator precedence and handles:
//!
//! - Statement parsing (`let`, `return`, expression statements, blocks)
//! - Expression parsing (prefix and infix operators, grouping, calls,
//!   `if` expressions and function literals)
//! - Diagnostics: failures are recorded and parsing continues with the
//!   next statement
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
