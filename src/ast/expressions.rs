use super::types::{BinaryOp, Type, UnaryOp};

/// Literal values, tagged by kind.
///
/// Exactly one payload is live per literal; the kind doubles as the
/// literal's inferred type.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i32),
    Double(f64),
    Float(f32),
    Bool(bool),
    Str(String),
}

impl Literal {
    pub fn ty(&self) -> Type {
        match self {
            Literal::Int(_) => Type::Int,
            Literal::Double(_) => Type::Double,
            Literal::Float(_) => Type::Float,
            Literal::Bool(_) => Type::Bool,
            Literal::Str(_) => Type::String,
        }
    }
}

/// Expression nodes.
///
/// Each node owns its children exclusively; nodes that can originate a
/// line-prefixed diagnostic carry the source line they came from.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Call {
        name: String,
        arguments: Vec<Expr>,
    },
    Literal(Literal),
    Variable {
        name: String,
        line: u32,
    },
    ArrayAccess {
        name: String,
        index: Box<Expr>,
        line: u32,
    },
    /// `++x` / `x--` used in expression position.
    IncDec {
        name: String,
        increment: bool,
        prefix: bool,
        line: u32,
    },
    Ternary {
        condition: Box<Expr>,
        true_expr: Box<Expr>,
        false_expr: Box<Expr>,
        line: u32,
    },
}
