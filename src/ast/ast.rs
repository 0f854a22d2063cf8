use super::{
    dump::{Dump, DumpNode},
    expressions::{BinaryExpr, CallExpr, NumberExpr, VariableExpr},
    statements::{AssignStmt, CompoundStmt, ForStmt, IfStmt, ReturnStmt},
};

/// Statement kinds.
///
/// The set is closed: consumers match on it exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// An expression evaluated for its value or side effects
    Expression(Expr),
    Compound(CompoundStmt),
    Assign(AssignStmt),
    Return(ReturnStmt),
    If(IfStmt),
    For(ForStmt),
}

impl Stmt {
    /// Lazily renders the statement and its descendants, one line per node.
    pub fn dump(&self) -> Dump<'_> {
        Dump::new(DumpNode::Stmt(self))
    }

    pub fn as_expr(&self) -> Option<&Expr> {
        match self {
            Stmt::Expression(expr) => Some(expr),
            _ => None,
        }
    }
}

impl From<Expr> for Stmt {
    fn from(expr: Expr) -> Self {
        Stmt::Expression(expr)
    }
}

/// Expression kinds: the statements that also produce a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberExpr),
    Variable(VariableExpr),
    Binary(BinaryExpr),
    Call(CallExpr),
}

impl Expr {
    pub fn dump(&self) -> Dump<'_> {
        Dump::new(DumpNode::Expr(self))
    }
}

impl From<NumberExpr> for Expr {
    fn from(expr: NumberExpr) -> Self {
        Expr::Number(expr)
    }
}

impl From<VariableExpr> for Expr {
    fn from(expr: VariableExpr) -> Self {
        Expr::Variable(expr)
    }
}

impl From<BinaryExpr> for Expr {
    fn from(expr: BinaryExpr) -> Self {
        Expr::Binary(expr)
    }
}

impl From<CallExpr> for Expr {
    fn from(expr: CallExpr) -> Self {
        Expr::Call(expr)
    }
}

/// What follows an `if` body.
///
/// `else if` is stored as a nested `IfStmt`, a terminal `else` as its block.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ElseBranch {
    #[default]
    None,
    ElseIf(Box<IfStmt>),
    Else(CompoundStmt),
}

impl ElseBranch {
    pub fn is_none(&self) -> bool {
        matches!(self, ElseBranch::None)
    }
}
