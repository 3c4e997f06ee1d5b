use crate::ast::Block;

/// program = block "." .
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub block: Block,
}

impl Program {
    pub fn new(block: Block) -> Self {
        Self { block }
    }
}
