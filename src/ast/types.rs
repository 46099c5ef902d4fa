use std::fmt::Display;

/// The closed set of SL types.
///
/// Compared by equality everywhere; the numeric subset (`Int`, `Float`,
/// `Double`) is mutually coercible under the widening rule implemented
/// by the semantic analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Int,
    Double,
    Float,
    String,
    Bool,
    Void,
}

impl Type {
    /// Maps a type name token to a `Type`.
    ///
    /// Unrecognised names fall back to `Void`; no diagnostic is raised
    /// at this layer.
    pub fn from_name(name: &str) -> Type {
        match name {
            "int" => Type::Int,
            "double" => Type::Double,
            "float" => Type::Float,
            "string" => Type::String,
            "bool" => Type::Bool,
            "void" => Type::Void,
            _ => Type::Void,
        }
    }

    /// Whether the type participates in numeric widening.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::Int | Type::Float | Type::Double)
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Type::Int => "int",
            Type::Double => "double",
            Type::Float => "float",
            Type::String => "string",
            Type::Bool => "bool",
            Type::Void => "void",
        };
        write!(f, "{}", name)
    }
}

/// Binary operators, including the compound-assignment forms carried by
/// assignment statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    And,
    Or,
    PlusAssign,
    MinusAssign,
    StarAssign,
    SlashAssign,
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Le => "<=",
            BinaryOp::Ge => ">=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
            BinaryOp::PlusAssign => "+=",
            BinaryOp::MinusAssign => "-=",
            BinaryOp::StarAssign => "*=",
            BinaryOp::SlashAssign => "/=",
        }
    }

    pub fn is_relational(&self) -> bool {
        matches!(
            self,
            BinaryOp::Eq | BinaryOp::Ne | BinaryOp::Lt | BinaryOp::Gt | BinaryOp::Le | BinaryOp::Ge
        )
    }

    pub fn is_logical(&self) -> bool {
        matches!(self, BinaryOp::And | BinaryOp::Or)
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Neg,
}

impl UnaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::Neg => "-",
        }
    }
}
