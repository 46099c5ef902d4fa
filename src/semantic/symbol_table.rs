use std::collections::HashMap;

use crate::ast::types::Type;

/// A named, typed binding visible within a scope.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub ty: Type,
    pub is_function: bool,
    /// Populated only for function symbols.
    pub param_types: Vec<Type>,
    pub return_type: Type,
}

impl Symbol {
    pub fn variable(name: &str, ty: Type) -> Self {
        Symbol {
            name: name.to_string(),
            ty,
            is_function: false,
            param_types: vec![],
            return_type: Type::Void,
        }
    }

    pub fn function(name: &str, return_type: Type, param_types: Vec<Type>) -> Self {
        Symbol {
            name: name.to_string(),
            ty: return_type,
            is_function: true,
            param_types,
            return_type,
        }
    }
}

/// The scope stack: an ordered stack of name-to-symbol frames, innermost
/// last. Shadowing across frames is allowed; redeclaration within one
/// frame is refused.
#[derive(Debug, Default)]
pub struct SymbolTable {
    scopes: Vec<HashMap<String, Symbol>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable { scopes: vec![] }
    }

    /// Pushes a fresh empty frame.
    pub fn enter_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Pops the innermost frame. A no-op on an empty stack, guarding
    /// against malformed nesting.
    pub fn exit_scope(&mut self) {
        if !self.scopes.is_empty() {
            self.scopes.pop();
        }
    }

    /// Inserts into the innermost frame. Returns `false` without
    /// overwriting if the name already exists there; the caller records
    /// the diagnostic.
    pub fn declare(&mut self, symbol: Symbol) -> bool {
        match self.scopes.last_mut() {
            Some(scope) => {
                if scope.contains_key(&symbol.name) {
                    false
                } else {
                    scope.insert(symbol.name.clone(), symbol);
                    true
                }
            }
            None => true,
        }
    }

    /// Innermost-to-outermost scan, stopping at the first match.
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }
}
