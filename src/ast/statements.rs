use super::ast::Block;
use super::expressions::Expr;
use super::types::{BinaryOp, Type};

/// Variable declaration.
///
/// Also used as the init clause of a C-style `for`, which is why it is a
/// named struct rather than an inline `Stmt` variant.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub ty: Type,
    pub name: String,
    pub is_array: bool,
    pub is_const: bool,
    pub array_size: Option<Expr>,
    pub initializer: Option<Expr>,
    pub line: u32,
}

/// An `if` with its else-if chain.
///
/// `else if` is represented by nesting another `IfStmt`, never by a
/// block containing a lone `if`; the code generator relies on this to
/// render chains inline.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_block: Block,
    pub else_if: Option<Box<IfStmt>>,
    pub else_block: Option<Block>,
}

/// One `case` arm of a switch.
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    pub value: Expr,
    pub block: Block,
}

/// Statement nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    VarDecl(VarDecl),
    /// Plain (`=`) or compound (`+=` etc.) assignment; `op` is `None`
    /// for plain assignment.
    VarAssign {
        name: String,
        op: Option<BinaryOp>,
        value: Expr,
    },
    IncDec {
        name: String,
        increment: bool,
        prefix: bool,
        line: u32,
    },
    Return {
        value: Option<Expr>,
    },
    If(IfStmt),
    While {
        condition: Expr,
        body: Block,
    },
    DoWhile {
        body: Block,
        condition: Expr,
    },
    For {
        init: Option<VarDecl>,
        condition: Option<Expr>,
        increment: Option<Expr>,
        body: Block,
    },
    Break,
    Continue,
    Switch {
        expression: Expr,
        cases: Vec<Case>,
        default_case: Option<Block>,
    },
}
