//! The contract through which a code generator consumes the tree.
//!
//! There is one method per node kind. Implementations decide how far to
//! recurse: `visit_binary` typically calls `accept` on both operands.

use super::{
    ast::{ElseBranch, Expr, Stmt},
    declarations::{FunctionDecl, PrototypeDecl, TranslationUnit},
    expressions::{BinaryExpr, CallExpr, NumberExpr, VariableExpr},
    statements::{AssignStmt, CompoundStmt, ForStmt, IfStmt, ReturnStmt},
};

pub trait Visitor {
    type Output;

    fn visit_number(&mut self, expr: &NumberExpr) -> Self::Output;
    fn visit_variable(&mut self, expr: &VariableExpr) -> Self::Output;
    fn visit_binary(&mut self, expr: &BinaryExpr) -> Self::Output;
    fn visit_call(&mut self, expr: &CallExpr) -> Self::Output;

    fn visit_compound(&mut self, stmt: &CompoundStmt) -> Self::Output;
    fn visit_assign(&mut self, stmt: &AssignStmt) -> Self::Output;
    fn visit_return(&mut self, stmt: &ReturnStmt) -> Self::Output;
    fn visit_if(&mut self, stmt: &IfStmt) -> Self::Output;
    fn visit_for(&mut self, stmt: &ForStmt) -> Self::Output;

    fn visit_prototype(&mut self, decl: &PrototypeDecl) -> Self::Output;
    fn visit_function(&mut self, decl: &FunctionDecl) -> Self::Output;
    fn visit_translation_unit(&mut self, unit: &TranslationUnit) -> Self::Output;
}

impl Expr {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::Number(expr) => visitor.visit_number(expr),
            Expr::Variable(expr) => visitor.visit_variable(expr),
            Expr::Binary(expr) => visitor.visit_binary(expr),
            Expr::Call(expr) => visitor.visit_call(expr),
        }
    }
}

impl Stmt {
    /// Expression statements dispatch to the expression's own method.
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Stmt::Expression(expr) => expr.accept(visitor),
            Stmt::Compound(stmt) => visitor.visit_compound(stmt),
            Stmt::Assign(stmt) => visitor.visit_assign(stmt),
            Stmt::Return(stmt) => visitor.visit_return(stmt),
            Stmt::If(stmt) => visitor.visit_if(stmt),
            Stmt::For(stmt) => visitor.visit_for(stmt),
        }
    }
}

impl ElseBranch {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> Option<V::Output> {
        match self {
            ElseBranch::None => None,
            ElseBranch::ElseIf(next) => Some(visitor.visit_if(next)),
            ElseBranch::Else(body) => Some(visitor.visit_compound(body)),
        }
    }
}

impl CompoundStmt {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_compound(self)
    }
}

impl PrototypeDecl {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_prototype(self)
    }
}

impl FunctionDecl {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_function(self)
    }
}

impl TranslationUnit {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_translation_unit(self)
    }
}
