//! Error types and error handling for the front end.
//!
//! This module defines the errors produced while parsing and evaluating.
//! It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for parsing and evaluation
//! - Error names and suggestions for display

pub mod errors;
