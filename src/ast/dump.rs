//! Structural dump of the syntax tree.
//!
//! A depth-first walk that yields one indented line per node. It is a
//! diagnostic and golden-output aid, not a printer back to source.

use super::{
    ast::{ElseBranch, Expr, Stmt},
    declarations::{FunctionDecl, PrototypeDecl, TranslationUnit},
    expressions::VariableExpr,
    statements::{CompoundStmt, IfStmt},
};

const INDENT: &str = "  ";

#[derive(Debug, Clone, Copy)]
pub(crate) enum DumpNode<'a> {
    Unit(&'a TranslationUnit),
    Prototype(&'a PrototypeDecl),
    Function(&'a FunctionDecl),
    Compound(&'a CompoundStmt),
    If(&'a IfStmt),
    Stmt(&'a Stmt),
    Expr(&'a Expr),
    Variable(&'a VariableExpr),
}

/// Lazy line iterator returned by the `dump` methods on tree nodes.
#[derive(Debug, Clone)]
pub struct Dump<'a> {
    stack: Vec<(DumpNode<'a>, usize)>,
}

impl<'a> Dump<'a> {
    pub(crate) fn new(root: DumpNode<'a>) -> Self {
        Dump { stack: vec![(root, 0)] }
    }

    /// Pushes children so that the first child is popped first.
    fn push_children(&mut self, children: Vec<DumpNode<'a>>, depth: usize) {
        self.stack.extend(children.into_iter().rev().map(|child| (child, depth)));
    }
}

impl<'a> Iterator for Dump<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let (node, depth) = self.stack.pop()?;

        let (label, children) = describe(node);
        self.push_children(children, depth + 1);

        let line = match node {
            DumpNode::Unit(_) => label,
            _ => format!("{}- {}", INDENT.repeat(depth), label),
        };

        Some(line)
    }
}

fn describe(node: DumpNode<'_>) -> (String, Vec<DumpNode<'_>>) {
    match node {
        DumpNode::Unit(unit) => (
            format!("TranslationUnit: '{}'", unit.get_name()),
            unit.get_prototypes()
                .iter()
                .map(DumpNode::Prototype)
                .chain(unit.get_functions().iter().map(DumpNode::Function))
                .collect(),
        ),
        DumpNode::Prototype(prototype) => (
            format!("PrototypeDecl: {}({})", prototype.get_name(), prototype.get_parameters().join(", ")),
            vec![],
        ),
        DumpNode::Function(function) => (
            String::from("FunctionDecl:"),
            vec![
                DumpNode::Prototype(function.get_prototype()),
                DumpNode::Compound(function.get_body()),
            ],
        ),
        DumpNode::Compound(compound) => (
            String::from("CompoundStmt:"),
            compound.iter().map(DumpNode::Stmt).collect(),
        ),
        DumpNode::If(if_stmt) => {
            let label = if if_stmt.has_else() {
                String::from("IfStmt: has_else")
            } else {
                String::from("IfStmt:")
            };

            let mut children = vec![DumpNode::Expr(if_stmt.get_condition()), DumpNode::Compound(if_stmt.get_body())];
            match if_stmt.get_else() {
                ElseBranch::ElseIf(next) => children.push(DumpNode::If(&**next)),
                ElseBranch::Else(body) => children.push(DumpNode::Compound(body)),
                ElseBranch::None => (),
            }

            (label, children)
        }
        DumpNode::Stmt(stmt) => match stmt {
            Stmt::Assign(assign) => (
                String::from("AssignStmt:"),
                assign
                    .get_targets()
                    .iter()
                    .map(DumpNode::Variable)
                    .chain(std::iter::once(DumpNode::Expr(assign.get_value())))
                    .collect(),
            ),
            Stmt::Return(ret) => (String::from("ReturnStmt:"), vec![DumpNode::Expr(ret.get_value())]),
            Stmt::For(for_stmt) => (
                format!("ForStmt: {}", for_stmt.get_variable()),
                vec![
                    DumpNode::Expr(for_stmt.get_initial()),
                    DumpNode::Expr(for_stmt.get_condition()),
                    DumpNode::Expr(for_stmt.get_step()),
                    DumpNode::Compound(for_stmt.get_body()),
                ],
            ),
            // expression statements render as the expression itself
            Stmt::Expression(expr) => describe(DumpNode::Expr(expr)),
            Stmt::Compound(compound) => describe(DumpNode::Compound(compound)),
            Stmt::If(if_stmt) => describe(DumpNode::If(if_stmt)),
        },
        DumpNode::Expr(expr) => match expr {
            Expr::Number(number) => (format!("NumberExpr: {}", number.get_value()), vec![]),
            Expr::Variable(variable) => describe(DumpNode::Variable(variable)),
            Expr::Binary(binary) => (
                format!("BinaryExpr: op = '{}'", binary.get_operator()),
                vec![DumpNode::Expr(binary.get_left()), DumpNode::Expr(binary.get_right())],
            ),
            Expr::Call(call) => (
                format!("CallExpr: {}", call.get_callee()),
                call.get_args().iter().map(DumpNode::Expr).collect(),
            ),
        },
        DumpNode::Variable(variable) => (format!("VariableExpr: '{}'", variable.get_name()), vec![]),
    }
}
