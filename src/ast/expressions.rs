use std::fmt::Display;

use super::ast::Expr;

// LITERALS

/// Number Expression
/// Represents a numeric literal in the AST. All numbers are `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    value: f64,
}

impl NumberExpr {
    pub fn new(value: f64) -> Self {
        NumberExpr { value }
    }

    pub fn get_value(&self) -> f64 {
        self.value
    }
}

/// Variable Expression
/// A reference to a parameter, a loop variable or an assigned name.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    name: String,
}

impl VariableExpr {
    pub fn new(name: impl Into<String>) -> Self {
        VariableExpr { name: name.into() }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }
}

// COMPLEX

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Less,
    Greater,
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(BinaryOperator::Less),
            '>' => Some(BinaryOperator::Greater),
            '+' => Some(BinaryOperator::Add),
            '-' => Some(BinaryOperator::Subtract),
            '*' => Some(BinaryOperator::Multiply),
            '/' => Some(BinaryOperator::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Less => '<',
            BinaryOperator::Greater => '>',
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Binary Expression
/// Both operands are always present; the parser fails rather than build a partial node.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    operator: BinaryOperator,
    left: Box<Expr>,
    right: Box<Expr>,
}

impl BinaryExpr {
    pub fn new(operator: BinaryOperator, left: Expr, right: Expr) -> Self {
        BinaryExpr {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn get_operator(&self) -> BinaryOperator {
        self.operator
    }

    pub fn get_left(&self) -> &Expr {
        &self.left
    }

    pub fn get_right(&self) -> &Expr {
        &self.right
    }
}

/// Call Expression
/// Calls are by name only; arity is checked by the code generator.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    callee: String,
    args: Vec<Expr>,
}

impl CallExpr {
    pub fn new(callee: impl Into<String>, args: Vec<Expr>) -> Self {
        CallExpr {
            callee: callee.into(),
            args,
        }
    }

    pub fn get_callee(&self) -> &str {
        &self.callee
    }

    pub fn get_args(&self) -> &[Expr] {
        &self.args
    }
}
