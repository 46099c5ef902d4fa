use std::fmt::Display;

use thiserror::Error;

use crate::ast::types::Type;

/// A recorded, non-fatal semantic violation.
///
/// Diagnostics are accumulated by the analyzer and never thrown, so one
/// analysis pass can surface many independent errors. The line number is
/// present only for the violations whose originating node carries one.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    kind: DiagnosticKind,
    line: Option<u32>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind) -> Self {
        Diagnostic { kind, line: None }
    }

    pub fn at_line(kind: DiagnosticKind, line: u32) -> Self {
        Diagnostic {
            kind,
            line: Some(line),
        }
    }

    pub fn kind(&self) -> &DiagnosticKind {
        &self.kind
    }

    pub fn line(&self) -> Option<u32> {
        self.line
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "Line {}: {}", line, self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// The violations the analyzer can record, one variant per entry in the
/// error taxonomy: redeclaration, undefined reference, arity mismatch,
/// type mismatch, operator misuse.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiagnosticKind {
    #[error("Variable '{name}' already declared in this scope")]
    AlreadyDeclared { name: String },
    #[error("Function '{name}' already declared")]
    FunctionAlreadyDeclared { name: String },
    #[error("Undefined variable '{name}'")]
    UndefinedVariable { name: String },
    #[error("Undefined array '{name}'")]
    UndefinedArray { name: String },
    #[error("Undefined function '{name}'")]
    UndefinedFunction { name: String },
    #[error("Function '{name}' expects {expected} arguments but got {received}")]
    ArgumentCountMismatch {
        name: String,
        expected: usize,
        received: usize,
    },
    #[error("{context}: type mismatch, expected {expected} but got {actual}")]
    TypeMismatch {
        context: String,
        expected: Type,
        actual: Type,
    },
    #[error("String type only supports addition operator")]
    StringOperator,
    #[error("Increment/decrement only works on numeric types")]
    NonNumericIncDec,
    #[error("Ternary condition must be boolean or numeric")]
    TernaryCondition,
    #[error("Ternary operator branches must have compatible types")]
    TernaryBranchMismatch,
}
