//! Unit tests for diagnostic formatting.

use crate::ast::types::Type;
use crate::errors::errors::{Diagnostic, DiagnosticKind};

#[test]
fn test_diagnostic_without_line() {
    let diagnostic = Diagnostic::new(DiagnosticKind::UndefinedFunction {
        name: "foo".to_string(),
    });

    assert_eq!(diagnostic.line(), None);
    assert_eq!(diagnostic.to_string(), "Undefined function 'foo'");
}

#[test]
fn test_diagnostic_with_line_prefix() {
    let diagnostic = Diagnostic::at_line(
        DiagnosticKind::UndefinedVariable {
            name: "x".to_string(),
        },
        12,
    );

    assert_eq!(diagnostic.line(), Some(12));
    assert_eq!(diagnostic.to_string(), "Line 12: Undefined variable 'x'");
}

#[test]
fn test_type_mismatch_message() {
    let diagnostic = Diagnostic::new(DiagnosticKind::TypeMismatch {
        context: "If condition".to_string(),
        expected: Type::Bool,
        actual: Type::Int,
    });

    assert_eq!(
        diagnostic.to_string(),
        "If condition: type mismatch, expected bool but got int"
    );
}

#[test]
fn test_argument_count_message() {
    let diagnostic = Diagnostic::new(DiagnosticKind::ArgumentCountMismatch {
        name: "add".to_string(),
        expected: 2,
        received: 3,
    });

    assert_eq!(
        diagnostic.to_string(),
        "Function 'add' expects 2 arguments but got 3"
    );
}
