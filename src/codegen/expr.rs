use crate::ast::expressions::{Expr, Literal};

use super::generator::{escape_string, CodeGenerator};

pub fn gen_expression(gen: &mut CodeGenerator, expr: &Expr) {
    match expr {
        Expr::Binary { op, left, right } => {
            gen_expression(gen, left);
            gen.print(&format!(" {} ", op.symbol()));
            gen_expression(gen, right);
        }
        Expr::Unary { op, operand } => {
            // Always parenthesized to avoid precedence ambiguity in the
            // emitted text.
            gen.print(op.symbol());
            gen.print("(");
            gen_expression(gen, operand);
            gen.print(")");
        }
        Expr::Call { name, arguments } => {
            gen.print(name);
            gen.print("(");
            for (i, argument) in arguments.iter().enumerate() {
                if i > 0 {
                    gen.print(", ");
                }
                gen_expression(gen, argument);
            }
            gen.print(")");
        }
        Expr::Literal(literal) => gen_literal(gen, literal),
        Expr::Variable { name, .. } => {
            gen.print(name);
        }
        Expr::ArrayAccess { name, index, .. } => {
            gen.print(name);
            gen.print("[");
            gen_expression(gen, index);
            gen.print("]");
        }
        Expr::IncDec {
            name,
            increment,
            prefix,
            ..
        } => {
            let op = if *increment { "++" } else { "--" };
            if *prefix {
                gen.print(op);
                gen.print(name);
            } else {
                gen.print(name);
                gen.print(op);
            }
        }
        Expr::Ternary {
            condition,
            true_expr,
            false_expr,
            ..
        } => {
            gen.print("(");
            gen_expression(gen, condition);
            gen.print(" ? ");
            gen_expression(gen, true_expr);
            gen.print(" : ");
            gen_expression(gen, false_expr);
            gen.print(")");
        }
    }
}

fn gen_literal(gen: &mut CodeGenerator, literal: &Literal) {
    match literal {
        Literal::Int(value) => gen.print(&value.to_string()),
        // {:?} keeps the decimal point on round values so the emitted C
        // literal stays a double/float.
        Literal::Double(value) => gen.print(&format!("{:?}", value)),
        Literal::Float(value) => gen.print(&format!("{:?}f", value)),
        Literal::Bool(value) => gen.print(if *value { "1" } else { "0" }),
        Literal::Str(value) => {
            gen.print(&format!("\"{}\"", escape_string(value)));
        }
    }
}
