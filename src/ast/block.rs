use crate::ast::{ConstDecl, ProcDecl, Statement, VarDecl};

/// block = [ "const" ident "=" number { "," ident "=" number } ";" ]
///         [ "var" ident { "," ident } ";" ]
///         { "procedure" ident ";" block ";" } statement .
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub const_decl: ConstDecl,
    pub var_decl: VarDecl,
    pub proc_decl: ProcDecl,
    pub statement: Statement,
}

impl Block {
    pub fn new(
        const_decl: ConstDecl,
        var_decl: VarDecl,
        proc_decl: ProcDecl,
        statement: Statement,
    ) -> Self {
        Self {
            const_decl,
            var_decl,
            proc_decl,
            statement,
        }
    }
}
