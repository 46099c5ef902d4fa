//! Semantic analysis module.
//!
//! This module validates a parsed AST before code generation. It
//! performs one depth-first walk of the tree while:
//!
//! - Managing the stack of lexical scopes and the flat function table
//! - Registering declarations and rejecting same-scope redeclarations
//! - Inferring the type of every expression (numeric widening included)
//! - Checking types wherever one is contractually expected
//! - Accumulating diagnostics without ever aborting the walk
//!
//! Analysis succeeds iff the diagnostics list ends up empty.

pub mod analyzer;
pub mod symbol_table;
