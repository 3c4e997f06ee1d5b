use crate::ast::{Block, Ident, Number};

/// [ "const" ident "=" number { "," ident "=" number } ";" ]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConstDecl {
    pub consts: Vec<(Ident, Number)>,
}

impl ConstDecl {
    pub fn new(consts: Vec<(Ident, Number)>) -> Self {
        Self { consts }
    }

    pub fn is_empty(&self) -> bool {
        self.consts.is_empty()
    }
}

/// [ "var" ident { "," ident } ";" ]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VarDecl {
    pub idents: Vec<Ident>,
}

impl VarDecl {
    pub fn new(idents: Vec<Ident>) -> Self {
        Self { idents }
    }

    pub fn is_empty(&self) -> bool {
        self.idents.is_empty()
    }
}

/// One nested procedure: "procedure" ident ";" block ";" .
#[derive(Debug, Clone, PartialEq)]
pub struct Procedure {
    pub name: Ident,
    pub block: Block,
}

impl Procedure {
    pub fn new(name: Ident, block: Block) -> Self {
        Self { name, block }
    }
}

/// { "procedure" ident ";" block ";" }
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProcDecl {
    pub procedures: Vec<Procedure>,
}

impl ProcDecl {
    pub fn new(procedures: Vec<Procedure>) -> Self {
        Self { procedures }
    }

    pub fn is_empty(&self) -> bool {
        self.procedures.is_empty()
    }
}
