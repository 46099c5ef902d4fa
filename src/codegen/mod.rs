//! Code generation module for the compiler.
//!
//! This module lowers a semantically validated AST into C source text.
//! It handles:
//!
//! - The fixed include preamble and type mapping to C
//! - Emission of every statement and expression construct
//! - Indentation tracking and string escaping
//!
//! Generation has no error channel: it is a trusted post-validation
//! transform, and a malformed tree degrades to omitted output rather
//! than a failure.

pub mod expr;
pub mod generator;
pub mod stmt;
