#![allow(clippy::module_inception)]

use crate::errors::errors::Diagnostic;
use crate::semantic::analyzer::Analyzer;

pub mod ast;
pub mod codegen;
pub mod errors;
pub mod project;
pub mod semantic;

/// Validates a program and, if it is clean, lowers it to C source text.
///
/// On failure the full ordered diagnostics list is returned; code is
/// only ever generated for a tree that analyzed without errors.
pub fn compile_to_c(program: &ast::ast::Program) -> Result<String, Vec<Diagnostic>> {
    let mut analyzer = Analyzer::new();
    if analyzer.analyze(program) {
        Ok(codegen::generator::generate(program))
    } else {
        Err(analyzer.into_diagnostics())
    }
}
