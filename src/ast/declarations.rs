use super::{
    dump::{Dump, DumpNode},
    statements::CompoundStmt,
};

/// A function signature: name and parameter names, no body.
#[derive(Debug, Clone, PartialEq)]
pub struct PrototypeDecl {
    name: String,
    parameters: Vec<String>,
}

impl PrototypeDecl {
    pub fn new(name: impl Into<String>, parameters: Vec<String>) -> Self {
        PrototypeDecl {
            name: name.into(),
            parameters,
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_parameters(&self) -> &[String] {
        &self.parameters
    }

    pub fn dump(&self) -> Dump<'_> {
        Dump::new(DumpNode::Prototype(self))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    prototype: PrototypeDecl,
    body: CompoundStmt,
}

impl FunctionDecl {
    pub fn new(prototype: PrototypeDecl, body: CompoundStmt) -> Self {
        FunctionDecl { prototype, body }
    }

    pub fn get_prototype(&self) -> &PrototypeDecl {
        &self.prototype
    }

    pub fn get_name(&self) -> &str {
        self.prototype.get_name()
    }

    pub fn get_body(&self) -> &CompoundStmt {
        &self.body
    }

    pub fn dump(&self) -> Dump<'_> {
        Dump::new(DumpNode::Function(self))
    }
}

/// Everything parsed from one source text.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationUnit {
    name: String,
    prototypes: Vec<PrototypeDecl>,
    functions: Vec<FunctionDecl>,
}

impl TranslationUnit {
    pub fn new(name: impl Into<String>, prototypes: Vec<PrototypeDecl>, functions: Vec<FunctionDecl>) -> Self {
        TranslationUnit {
            name: name.into(),
            prototypes,
            functions,
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_prototypes(&self) -> &[PrototypeDecl] {
        &self.prototypes
    }

    pub fn get_functions(&self) -> &[FunctionDecl] {
        &self.functions
    }

    pub fn get_function(&self, name: &str) -> Option<&FunctionDecl> {
        self.functions.iter().find(|function| function.get_name() == name)
    }

    /// Lazily renders the whole tree, one indented line per node.
    ///
    /// Every call starts a fresh walk.
    pub fn dump(&self) -> Dump<'_> {
        Dump::new(DumpNode::Unit(self))
    }
}
