use crate::ast::ast::{Function, Program};
use crate::ast::types::Type;

use super::stmt::{gen_block, gen_var_decl};

/// Lowers a validated AST to C source text.
///
/// Generation never fails: the tree is trusted to have passed semantic
/// analysis, and the only state is the output buffer, the indent depth
/// and the return type of the function being emitted. One generator
/// performs one pass; output is byte-stable for the same tree.
#[derive(Debug)]
pub struct CodeGenerator {
    pub out: String,
    pub indent_level: usize,
    pub current_function_return_type: Type,
}

impl Default for CodeGenerator {
    fn default() -> Self {
        CodeGenerator::new()
    }
}

impl CodeGenerator {
    pub fn new() -> Self {
        CodeGenerator {
            out: String::new(),
            indent_level: 0,
            current_function_return_type: Type::Void,
        }
    }

    pub(crate) fn indent(&mut self) {
        for _ in 0..self.indent_level {
            self.out.push_str("    ");
        }
    }

    pub(crate) fn print(&mut self, text: &str) {
        self.out.push_str(text);
    }

    pub(crate) fn print_line(&mut self, text: &str) {
        self.indent();
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// Emits the fixed header preamble, then walks the tree.
    pub fn generate(&mut self, program: &Program) {
        self.print_line("#include <stdio.h>");
        self.print_line("#include <stdlib.h>");
        self.print_line("#include <string.h>");

        self.gen_program(program);
    }

    /// Consumes the generator and returns the emitted source.
    pub fn finish(self) -> String {
        self.out
    }

    fn gen_program(&mut self, program: &Program) {
        // Directives, classes and templates are walked past without
        // emitting anything: accepted surface syntax with no lowering.
        for global in &program.globals {
            gen_var_decl(self, global);
        }

        for function in &program.functions {
            self.gen_function(function);
        }
    }

    fn gen_function(&mut self, function: &Function) {
        let mut signature = String::new();
        signature.push_str(type_to_c(function.return_type));
        signature.push(' ');
        signature.push_str(&function.name);
        signature.push('(');

        for (i, (name, ty)) in function.parameters.iter().enumerate() {
            if i > 0 {
                signature.push_str(", ");
            }
            signature.push_str(type_to_c(*ty));
            signature.push(' ');
            signature.push_str(name);
        }

        signature.push_str(") {");
        self.print_line(&signature);

        self.current_function_return_type = function.return_type;
        self.indent_level += 1;

        gen_block(self, &function.body);

        self.indent_level -= 1;
        self.print_line("}");
    }
}

/// One-shot convenience over [`CodeGenerator`].
pub fn generate(program: &Program) -> String {
    let mut generator = CodeGenerator::new();
    generator.generate(program);
    generator.finish()
}

/// Maps an SL type to its C rendering. Booleans are represented as 0/1
/// integers in the target.
pub fn type_to_c(ty: Type) -> &'static str {
    match ty {
        Type::Int => "int",
        Type::Double => "double",
        Type::Float => "float",
        Type::String => "char*",
        Type::Bool => "int",
        Type::Void => "void",
    }
}

/// Escapes a string for embedding in a double-quoted C literal.
pub fn escape_string(text: &str) -> String {
    let mut escaped = String::new();
    for c in text.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}
