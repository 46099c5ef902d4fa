//! Error types and error handling for the compiler.
//!
//! This module defines the diagnostic type accumulated during semantic
//! analysis. It includes:
//!
//! - A diagnostic structure with optional source line information
//! - Specific variants for each class of semantic violation
//! - Human-readable message formatting

pub mod errors;

#[cfg(test)]
mod tests;
