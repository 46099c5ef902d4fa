use crate::ast::ast::Block;
use crate::ast::statements::{Case, IfStmt, Stmt, VarDecl};
use crate::ast::types::BinaryOp;

use super::expr::gen_expression;
use super::generator::{type_to_c, CodeGenerator};

pub fn gen_block(gen: &mut CodeGenerator, block: &Block) {
    for stmt in &block.statements {
        gen_statement(gen, stmt);
    }
}

pub fn gen_statement(gen: &mut CodeGenerator, stmt: &Stmt) {
    match stmt {
        Stmt::VarDecl(decl) => gen_var_decl(gen, decl),
        Stmt::VarAssign { name, op, value } => {
            gen.indent();
            let target = match op {
                Some(BinaryOp::PlusAssign) => format!("{} += ", name),
                Some(BinaryOp::MinusAssign) => format!("{} -= ", name),
                Some(BinaryOp::StarAssign) => format!("{} *= ", name),
                Some(BinaryOp::SlashAssign) => format!("{} /= ", name),
                _ => format!("{} = ", name),
            };
            gen.print(&target);

            gen_expression(gen, value);
            gen.print(";\n");
        }
        Stmt::IncDec {
            name,
            increment,
            prefix,
            ..
        } => {
            let op = if *increment { "++" } else { "--" };
            let text = if *prefix {
                format!("{}{};", op, name)
            } else {
                format!("{}{};", name, op)
            };
            gen.print_line(&text);
        }
        Stmt::Return { value } => match value {
            Some(value) => {
                gen.indent();
                gen.print("return ");
                gen_expression(gen, value);
                gen.print(";\n");
            }
            None => {
                gen.print_line("return;\n");
            }
        },
        Stmt::If(if_stmt) => gen_if(gen, if_stmt),
        Stmt::While { condition, body } => {
            gen.indent();
            gen.print("while (");
            gen_expression(gen, condition);
            gen.print(") {\n");

            gen.indent_level += 1;
            gen_block(gen, body);
            gen.indent_level -= 1;

            gen.indent();
            gen.print("}\n");
        }
        Stmt::DoWhile { body, condition } => {
            gen.indent();
            gen.print("do {\n");

            gen.indent_level += 1;
            gen_block(gen, body);
            gen.indent_level -= 1;

            gen.indent();
            gen.print("} while (");
            gen_expression(gen, condition);
            gen.print(");\n");
        }
        Stmt::For {
            init,
            condition,
            increment,
            body,
        } => {
            gen.indent();
            gen.print("for (");

            if let Some(init) = init {
                // The loop variable is re-declared inline in C's native
                // for syntax.
                let mut clause = format!("{} {}", type_to_c(init.ty), init.name);
                if let Some(initializer) = &init.initializer {
                    clause.push_str(" = ");
                    gen.print(&clause);
                    gen_expression(gen, initializer);
                } else {
                    gen.print(&clause);
                }
            }
            gen.print("; ");

            if let Some(condition) = condition {
                gen_expression(gen, condition);
            }
            gen.print("; ");

            if let Some(increment) = increment {
                gen_expression(gen, increment);
            }

            gen.print(") {\n");

            gen.indent_level += 1;
            gen_block(gen, body);
            gen.indent_level -= 1;

            gen.indent();
            gen.print("}\n");
        }
        Stmt::Break => {
            gen.indent();
            gen.print("break;\n");
        }
        Stmt::Continue => {
            gen.indent();
            gen.print("continue;\n");
        }
        Stmt::Switch {
            expression,
            cases,
            default_case,
        } => {
            gen.indent();
            gen.print("switch (");
            gen_expression(gen, expression);
            gen.print(") {\n");

            gen.indent_level += 1;
            for case in cases {
                gen_case(gen, case);
            }
            if let Some(default_case) = default_case {
                gen.indent();
                gen.print("default:\n");
                gen.indent_level += 1;
                gen_block(gen, default_case);
                gen.indent_level -= 1;
            }
            gen.indent_level -= 1;

            gen.indent();
            gen.print("}\n");
        }
    }
}

pub fn gen_var_decl(gen: &mut CodeGenerator, decl: &VarDecl) {
    gen.indent();

    let mut text = String::new();
    if decl.is_const {
        text.push_str("const ");
    }
    text.push_str(type_to_c(decl.ty));
    text.push(' ');
    text.push_str(&decl.name);

    if decl.is_array {
        text.push('[');
        gen.print(&text);
        if let Some(size) = &decl.array_size {
            gen_expression(gen, size);
        }
        gen.print("]");
    } else {
        gen.print(&text);
    }

    if let Some(initializer) = &decl.initializer {
        gen.print(" = ");
        gen_expression(gen, initializer);
    }
    gen.print(";\n");
}

fn gen_if(gen: &mut CodeGenerator, if_stmt: &IfStmt) {
    gen.indent();
    gen.print("if (");
    gen_expression(gen, &if_stmt.condition);
    gen.print(") {\n");

    gen.indent_level += 1;
    gen_block(gen, &if_stmt.then_block);
    gen.indent_level -= 1;

    gen.indent();
    gen.print("}");

    if let Some(else_if) = &if_stmt.else_if {
        // The chained if is rendered inline after `else `, not wrapped
        // in another brace pair.
        gen.print(" else ");
        gen_if(gen, else_if);
    } else if let Some(else_block) = &if_stmt.else_block {
        gen.print(" else {\n");
        gen.indent_level += 1;
        gen_block(gen, else_block);
        gen.indent_level -= 1;
        gen.indent();
        gen.print("}");
    }
    gen.print("\n");
}

fn gen_case(gen: &mut CodeGenerator, case: &Case) {
    gen.indent();
    gen.print("case ");
    gen_expression(gen, &case.value);
    gen.print(":\n");

    gen.indent_level += 1;
    gen_block(gen, &case.block);
    gen.indent_level -= 1;
}
