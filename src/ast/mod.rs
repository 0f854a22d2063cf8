/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the syntax tree
///
/// Submodules:
/// - ast: The closed `Stmt` / `Expr` / `ElseBranch` sums
/// - expressions: Literal, variable, binary and call expressions
/// - statements: Compound, assignment, return, if and for statements
/// - declarations: Prototypes, functions and the translation unit
/// - dump: Lazy structural dump used for diagnostics and golden tests
/// - visitor: The code generator's double-dispatch contract
pub mod ast;
pub mod declarations;
pub mod dump;
pub mod expressions;
pub mod statements;
pub mod visitor;
