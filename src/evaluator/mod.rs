//! Tree-walking evaluator.
//!
//! Runs a parsed `Program` directly over its AST:
//!
//! - `value`: runtime values
//! - `environment`: nested name bindings shared with closures
//! - `evaluator`: statement and expression evaluation

pub mod environment;
pub mod evaluator;
pub mod value;

#[cfg(test)]
mod tests;
