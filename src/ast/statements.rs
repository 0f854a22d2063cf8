use std::{fmt, mem, slice::Iter};

use crate::{errors::errors::{Error, ErrorImpl}, Position};

use super::{
    ast::{ElseBranch, Expr, Stmt},
    dump::{Dump, DumpNode},
    expressions::VariableExpr,
};

/// A `{ ... }` statement list.
///
/// The parser may produce an empty one; consumers that need a statement call
/// [`CompoundStmt::ensure_non_empty`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundStmt {
    statements: Vec<Stmt>,
}

impl CompoundStmt {
    pub fn new(statements: Vec<Stmt>) -> Self {
        CompoundStmt { statements }
    }

    pub fn get_statements(&self) -> &[Stmt] {
        &self.statements
    }

    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Statements are scanned in source order, so the last one here is the
    /// last one written.
    pub fn last(&self) -> Option<&Stmt> {
        self.statements.last()
    }

    /// Structural check for consumers that require at least one statement.
    ///
    /// `context` names the owner in the message, e.g. "function `max`".
    pub fn ensure_non_empty(&self, context: &str) -> Result<(), Error> {
        if self.statements.is_empty() {
            return Err(Error::new(
                ErrorImpl::EmptyCompoundStatement { context: String::from(context) },
                Position::null(),
            ));
        }

        Ok(())
    }

    pub fn dump(&self) -> Dump<'_> {
        Dump::new(DumpNode::Compound(self))
    }
}

impl<'a> IntoIterator for &'a CompoundStmt {
    type Item = &'a Stmt;
    type IntoIter = Iter<'a, Stmt>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

/// `a = b = c = value;` — every target receives the same value.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    targets: Vec<VariableExpr>,
    value: Expr,
}

impl AssignStmt {
    /// # Panics
    ///
    /// Panics if `targets` is empty.
    pub fn new(targets: Vec<VariableExpr>, value: Expr) -> Self {
        assert!(!targets.is_empty(), "assignment needs at least one target");

        AssignStmt { targets, value }
    }

    pub fn get_targets(&self) -> &[VariableExpr] {
        &self.targets
    }

    pub fn get_value(&self) -> &Expr {
        &self.value
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    value: Expr,
}

impl ReturnStmt {
    pub fn new(value: Expr) -> Self {
        ReturnStmt { value }
    }

    pub fn get_value(&self) -> &Expr {
        &self.value
    }
}

/// One link of an `if` / `else if` / `else` chain.
///
/// Chains can be arbitrarily long, so `Clone`, `PartialEq`, `Debug` and `Drop`
/// walk the `else if` links in a loop instead of recursing through them.
pub struct IfStmt {
    condition: Expr,
    body: CompoundStmt,
    else_branch: ElseBranch,
}

impl IfStmt {
    pub fn new(condition: Expr, body: CompoundStmt) -> Self {
        IfStmt {
            condition,
            body,
            else_branch: ElseBranch::None,
        }
    }

    pub fn with_else(mut self, else_branch: ElseBranch) -> Self {
        self.else_branch = else_branch;
        self
    }

    pub fn get_condition(&self) -> &Expr {
        &self.condition
    }

    pub fn get_body(&self) -> &CompoundStmt {
        &self.body
    }

    pub fn get_else(&self) -> &ElseBranch {
        &self.else_branch
    }

    pub fn has_else(&self) -> bool {
        !self.else_branch.is_none()
    }

    /// Links `next` as this node's `else if` and returns it, so a chain can be
    /// extended one link at a time.
    pub(crate) fn attach_else_if(&mut self, next: IfStmt) -> &mut IfStmt {
        self.else_branch = ElseBranch::ElseIf(Box::new(next));

        match &mut self.else_branch {
            ElseBranch::ElseIf(next) => &mut **next,
            ElseBranch::Else(_) | ElseBranch::None => unreachable!("else-if branch was just attached"),
        }
    }

    pub(crate) fn attach_else(&mut self, body: CompoundStmt) {
        self.else_branch = ElseBranch::Else(body);
    }
}

impl Drop for IfStmt {
    fn drop(&mut self) {
        let mut next = mem::take(&mut self.else_branch);

        // each unlinked node drops with an empty branch
        while let ElseBranch::ElseIf(mut link) = mem::take(&mut next) {
            next = mem::take(&mut link.else_branch);
        }
    }
}

impl Clone for IfStmt {
    fn clone(&self) -> Self {
        let mut links = vec![];
        let mut branch = &self.else_branch;

        while let ElseBranch::ElseIf(next) = branch {
            links.push((next.condition.clone(), next.body.clone()));
            branch = &next.else_branch;
        }

        let mut else_branch = branch.clone();
        for (condition, body) in links.into_iter().rev() {
            else_branch = ElseBranch::ElseIf(Box::new(IfStmt {
                condition,
                body,
                else_branch,
            }));
        }

        IfStmt {
            condition: self.condition.clone(),
            body: self.body.clone(),
            else_branch,
        }
    }
}

impl PartialEq for IfStmt {
    fn eq(&self, other: &Self) -> bool {
        let (mut left, mut right) = (self, other);

        loop {
            if left.condition != right.condition || left.body != right.body {
                return false;
            }

            match (&left.else_branch, &right.else_branch) {
                (ElseBranch::ElseIf(l), ElseBranch::ElseIf(r)) => {
                    left = &**l;
                    right = &**r;
                }
                (l, r) => return l == r,
            }
        }
    }
}

/// Condition and body of a single link, for `Debug`.
struct Link<'a>(&'a IfStmt);

impl fmt::Debug for Link<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Link")
            .field("condition", &self.0.condition)
            .field("body", &self.0.body)
            .finish()
    }
}

impl fmt::Debug for IfStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut links = vec![Link(self)];
        let mut branch = &self.else_branch;

        while let ElseBranch::ElseIf(next) = branch {
            links.push(Link(&**next));
            branch = &next.else_branch;
        }

        f.debug_struct("IfStmt").field("links", &links).field("else", branch).finish()
    }
}

/// `for (variable = initial; condition; step) { body }`
///
/// `variable` is scoped to `body` by the code generator, not by the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    variable: String,
    initial: Expr,
    condition: Expr,
    step: Expr,
    body: CompoundStmt,
}

impl ForStmt {
    pub fn new(variable: impl Into<String>, initial: Expr, condition: Expr, step: Expr, body: CompoundStmt) -> Self {
        let variable = variable.into();
        debug_assert!(!variable.is_empty());

        ForStmt {
            variable,
            initial,
            condition,
            step,
            body,
        }
    }

    pub fn get_variable(&self) -> &str {
        &self.variable
    }

    pub fn get_initial(&self) -> &Expr {
        &self.initial
    }

    pub fn get_condition(&self) -> &Expr {
        &self.condition
    }

    pub fn get_step(&self) -> &Expr {
        &self.step
    }

    pub fn get_body(&self) -> &CompoundStmt {
        &self.body
    }
}
