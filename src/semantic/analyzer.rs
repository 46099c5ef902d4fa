use std::collections::HashMap;

use crate::ast::ast::{Block, Class, Constructor, Function, Method, Program, Template};
use crate::ast::expressions::Expr;
use crate::ast::statements::{Case, IfStmt, Stmt, VarDecl};
use crate::ast::types::{BinaryOp, Type, UnaryOp};
use crate::errors::errors::{Diagnostic, DiagnosticKind};

use super::symbol_table::{Symbol, SymbolTable};

/// Single-pass semantic validator.
///
/// Walks the tree once, depth first, building and tearing down lexical
/// scopes as it goes and appending a diagnostic for every violation. It
/// never aborts the walk, so one `analyze` call surfaces as many
/// independent errors as the program contains.
///
/// One analyzer validates one program; nothing persists across calls.
#[derive(Debug, Default)]
pub struct Analyzer {
    scopes: SymbolTable,
    /// Functions are not nested and are visible program-wide, so they
    /// live in a flat table separate from the scope stack.
    functions: HashMap<String, Symbol>,
    diagnostics: Vec<Diagnostic>,
}

impl Analyzer {
    pub fn new() -> Self {
        Analyzer {
            scopes: SymbolTable::new(),
            functions: HashMap::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Runs the full walk. Returns `true` iff no diagnostics were
    /// recorded.
    pub fn analyze(&mut self, program: &Program) -> bool {
        self.visit_program(program);
        self.diagnostics.is_empty()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    fn report(&mut self, kind: DiagnosticKind) {
        self.diagnostics.push(Diagnostic::new(kind));
    }

    fn report_at(&mut self, kind: DiagnosticKind, line: u32) {
        self.diagnostics.push(Diagnostic::at_line(kind, line));
    }

    fn declare_symbol(&mut self, name: &str, ty: Type, line: u32) {
        if !self.scopes.declare(Symbol::variable(name, ty)) {
            self.report_at(
                DiagnosticKind::AlreadyDeclared {
                    name: name.to_string(),
                },
                line,
            );
        }
    }

    fn lookup_function(&self, name: &str) -> Option<&Symbol> {
        self.functions.get(name)
    }

    /// Infers the type of an expression. Total: kinds with no inference
    /// rule come out as `Void`.
    pub fn infer_type(&self, expr: &Expr) -> Type {
        match expr {
            Expr::Literal(literal) => literal.ty(),
            Expr::Variable { name, .. } => match self.scopes.lookup(name) {
                Some(symbol) => symbol.ty,
                None => Type::Void,
            },
            Expr::Call { name, .. } => match self.lookup_function(name) {
                Some(symbol) => symbol.return_type,
                None => Type::Void,
            },
            Expr::Binary { op, left, right } => {
                let left = self.infer_type(left);
                let right = self.infer_type(right);

                if op.is_relational() || op.is_logical() {
                    return Type::Bool;
                }

                if left == right {
                    return left;
                }
                if left.is_numeric() && right.is_numeric() {
                    if left == Type::Double || right == Type::Double {
                        return Type::Double;
                    }
                    if left == Type::Float || right == Type::Float {
                        return Type::Float;
                    }
                    return Type::Int;
                }

                Type::Void
            }
            Expr::Unary { op, operand } => match op {
                UnaryOp::Not => Type::Bool,
                UnaryOp::Neg => self.infer_type(operand),
            },
            _ => Type::Void,
        }
    }

    /// Checks `actual` against `expected`. Exact matches and
    /// numeric-to-numeric pairings pass; a `Void` on either side fails
    /// silently (the cause was already diagnosed where the `Void` arose);
    /// anything else records a type-mismatch diagnostic naming `context`.
    fn check_type(&mut self, expected: Type, actual: Type, context: &str) -> bool {
        if expected == actual {
            return true;
        }
        if expected == Type::Void || actual == Type::Void {
            return false;
        }

        if expected.is_numeric() && actual.is_numeric() {
            return true;
        }

        self.report(DiagnosticKind::TypeMismatch {
            context: context.to_string(),
            expected,
            actual,
        });
        false
    }

    fn visit_program(&mut self, program: &Program) {
        // Register every signature before any body is walked, so calls
        // may refer forward to functions declared later in the program.
        for function in &program.functions {
            let param_types = function.parameters.iter().map(|p| p.1).collect();
            let symbol = Symbol::function(&function.name, function.return_type, param_types);
            if self.functions.contains_key(&function.name) {
                self.report(DiagnosticKind::FunctionAlreadyDeclared {
                    name: function.name.clone(),
                });
            } else {
                self.functions.insert(function.name.clone(), symbol);
            }
        }

        for template in &program.templates {
            self.visit_template(template);
        }

        for class in &program.classes {
            self.visit_class(class);
        }

        for global in &program.globals {
            self.visit_var_decl(global);
        }

        for function in &program.functions {
            self.visit_function(function);
        }
    }

    fn visit_function(&mut self, function: &Function) {
        self.scopes.enter_scope();

        for (name, ty) in &function.parameters {
            self.declare_symbol(name, *ty, function.line);
        }

        self.visit_block(&function.body);

        self.scopes.exit_scope();
    }

    fn visit_template(&mut self, template: &Template) {
        self.visit_function(&template.function);
    }

    fn visit_class(&mut self, class: &Class) {
        // The constructor and all methods share one class scope.
        self.scopes.enter_scope();

        if let Some(constructor) = &class.constructor {
            self.visit_constructor(constructor);
        }

        for method in &class.methods {
            self.visit_method(method);
        }

        self.scopes.exit_scope();
    }

    fn visit_method(&mut self, method: &Method) {
        self.scopes.enter_scope();

        for (name, ty) in &method.parameters {
            self.declare_symbol(name, *ty, method.line);
        }

        self.visit_block(&method.body);

        self.scopes.exit_scope();
    }

    fn visit_constructor(&mut self, constructor: &Constructor) {
        self.scopes.enter_scope();

        for (name, ty) in &constructor.parameters {
            self.declare_symbol(name, *ty, constructor.line);
        }

        self.visit_block(&constructor.body);

        self.scopes.exit_scope();
    }

    fn visit_block(&mut self, block: &Block) {
        self.scopes.enter_scope();
        for stmt in &block.statements {
            self.visit_stmt(stmt);
        }
        self.scopes.exit_scope();
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::VarDecl(decl) => self.visit_var_decl(decl),
            Stmt::VarAssign { name, value, .. } => {
                let symbol_type = match self.scopes.lookup(name) {
                    Some(symbol) => symbol.ty,
                    None => {
                        self.report(DiagnosticKind::UndefinedVariable { name: name.clone() });
                        return;
                    }
                };

                self.visit_expr(value);
                let value_type = self.infer_type(value);
                self.check_type(symbol_type, value_type, "Variable assignment");
            }
            Stmt::IncDec { name, line, .. } => self.check_inc_dec_target(name, *line),
            Stmt::Return { value } => {
                if let Some(value) = value {
                    self.visit_expr(value);
                }
            }
            Stmt::If(if_stmt) => self.visit_if(if_stmt),
            Stmt::While { condition, body } => {
                self.visit_expr(condition);
                let cond_type = self.infer_type(condition);
                self.check_type(Type::Bool, cond_type, "While condition");
                self.visit_block(body);
            }
            Stmt::DoWhile { body, condition } => {
                self.visit_block(body);
                self.visit_expr(condition);
                let cond_type = self.infer_type(condition);
                self.check_type(Type::Bool, cond_type, "Do-while condition");
            }
            Stmt::For {
                init,
                condition,
                increment,
                body,
            } => {
                // The for scope spans init, condition, increment and body.
                self.scopes.enter_scope();

                if let Some(init) = init {
                    self.visit_var_decl(init);
                }

                if let Some(condition) = condition {
                    self.visit_expr(condition);
                    let cond_type = self.infer_type(condition);
                    self.check_type(Type::Bool, cond_type, "For condition");
                }

                if let Some(increment) = increment {
                    self.visit_expr(increment);
                }

                self.visit_block(body);

                self.scopes.exit_scope();
            }
            Stmt::Break | Stmt::Continue => {}
            Stmt::Switch {
                expression,
                cases,
                default_case,
            } => {
                self.visit_expr(expression);
                for case in cases {
                    self.visit_case(case);
                }
                if let Some(default_case) = default_case {
                    self.visit_block(default_case);
                }
            }
        }
    }

    fn visit_var_decl(&mut self, decl: &VarDecl) {
        // Declared before the initializer is validated, so an initializer
        // may legally reference the variable's own name.
        self.declare_symbol(&decl.name, decl.ty, decl.line);

        if let Some(initializer) = &decl.initializer {
            self.visit_expr(initializer);
            let init_type = self.infer_type(initializer);
            self.check_type(decl.ty, init_type, "Variable initialization");
        }
    }

    fn visit_if(&mut self, if_stmt: &IfStmt) {
        self.visit_expr(&if_stmt.condition);
        let cond_type = self.infer_type(&if_stmt.condition);
        self.check_type(Type::Bool, cond_type, "If condition");

        self.visit_block(&if_stmt.then_block);

        if let Some(else_if) = &if_stmt.else_if {
            self.visit_if(else_if);
        }

        if let Some(else_block) = &if_stmt.else_block {
            self.visit_block(else_block);
        }
    }

    fn visit_case(&mut self, case: &Case) {
        self.visit_expr(&case.value);
        self.visit_block(&case.block);
    }

    fn check_inc_dec_target(&mut self, name: &str, line: u32) {
        match self.scopes.lookup(name) {
            None => {
                self.report_at(
                    DiagnosticKind::UndefinedVariable {
                        name: name.to_string(),
                    },
                    line,
                );
            }
            Some(symbol) => {
                if !symbol.ty.is_numeric() {
                    self.report_at(DiagnosticKind::NonNumericIncDec, line);
                }
            }
        }
    }

    fn visit_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Binary { op, left, right } => {
                self.visit_expr(left);
                self.visit_expr(right);

                let left_type = self.infer_type(left);
                let right_type = self.infer_type(right);

                if op.is_relational() {
                    // Relational operands are deliberately unchecked.
                } else if op.is_logical() {
                    self.check_type(Type::Bool, left_type, "Left operand of logical operator");
                    self.check_type(Type::Bool, right_type, "Right operand of logical operator");
                } else if (left_type == Type::String || right_type == Type::String)
                    && *op != BinaryOp::Add
                {
                    self.report(DiagnosticKind::StringOperator);
                }
            }
            Expr::Unary { op, operand } => {
                self.visit_expr(operand);

                if *op == UnaryOp::Not {
                    let operand_type = self.infer_type(operand);
                    self.check_type(Type::Bool, operand_type, "Not operator");
                }
            }
            Expr::Call { name, arguments } => {
                let param_types = match self.lookup_function(name) {
                    Some(symbol) => symbol.param_types.clone(),
                    None => {
                        self.report(DiagnosticKind::UndefinedFunction { name: name.clone() });
                        return;
                    }
                };

                if param_types.len() != arguments.len() {
                    self.report(DiagnosticKind::ArgumentCountMismatch {
                        name: name.clone(),
                        expected: param_types.len(),
                        received: arguments.len(),
                    });
                } else {
                    for (argument, param_type) in arguments.iter().zip(param_types) {
                        self.visit_expr(argument);
                        let arg_type = self.infer_type(argument);
                        self.check_type(param_type, arg_type, "Function argument");
                    }
                }
            }
            Expr::Literal(_) => {}
            Expr::Variable { name, line } => {
                if self.scopes.lookup(name).is_none() {
                    self.report_at(
                        DiagnosticKind::UndefinedVariable { name: name.clone() },
                        *line,
                    );
                }
            }
            Expr::ArrayAccess { name, index, line } => {
                if self.scopes.lookup(name).is_none() {
                    self.report_at(DiagnosticKind::UndefinedArray { name: name.clone() }, *line);
                }
                self.visit_expr(index);
                let index_type = self.infer_type(index);
                self.check_type(Type::Int, index_type, "Array index");
            }
            Expr::IncDec { name, line, .. } => self.check_inc_dec_target(name, *line),
            Expr::Ternary {
                condition,
                true_expr,
                false_expr,
                line,
            } => {
                self.visit_expr(condition);
                let cond_type = self.infer_type(condition);
                if cond_type != Type::Bool && cond_type != Type::Int {
                    self.report_at(DiagnosticKind::TernaryCondition, *line);
                }

                self.visit_expr(true_expr);
                self.visit_expr(false_expr);

                // Strict equality here, not the widening rule used for
                // assignments and arguments.
                let true_type = self.infer_type(true_expr);
                let false_type = self.infer_type(false_expr);
                if true_type != false_type {
                    self.report_at(DiagnosticKind::TernaryBranchMismatch, *line);
                }
            }
        }
    }
}
