use super::statements::{Stmt, VarDecl};
use super::types::Type;

/// Root of the tree: everything below is owned exclusively, no sharing,
/// no cycles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub directives: Vec<Directive>,
    pub functions: Vec<Function>,
    pub globals: Vec<VarDecl>,
    pub templates: Vec<Template>,
    pub classes: Vec<Class>,
}

/// Preprocessor-style directive (`#include`-like). Validated but not
/// lowered.
#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    pub directive: String,
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub return_type: Type,
    /// Ordered (name, type) pairs; parameter names form the function's
    /// outermost scope.
    pub parameters: Vec<(String, Type)>,
    pub body: Block,
    pub line: u32,
}

/// A block introduces a fresh lexical scope when the analyzer enters it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

/// A generic template wrapping one function to be instantiated per call
/// site. Only the body is validated; instantiation is an open extension
/// point.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub function: Function,
}

/// A class: optional constructor plus methods, sharing one scope.
///
/// No per-instance field scoping is modeled; the analyzer validates the
/// member bodies and the generator emits nothing for classes.
#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    pub name: String,
    pub constructor: Option<Constructor>,
    pub methods: Vec<Method>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    pub name: String,
    pub return_type: Type,
    pub parameters: Vec<(String, Type)>,
    pub body: Block,
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Constructor {
    pub parameters: Vec<(String, Type)>,
    pub body: Block,
    pub line: u32,
}
