// Parse tree definitions for the PL/0 frontend.
//
// A closed set of tagged node variants mirroring the grammar derivation;
// nodes own their children exclusively and are never mutated after the
// parser builds them. `print` holds the S-expression dump.

mod block;
mod declarations;
mod expressions;
mod print;
mod program;
mod statements;

pub use block::Block;
pub use declarations::{ConstDecl, ProcDecl, Procedure, VarDecl};
pub use expressions::{AddOp, Condition, Expression, Factor, Ident, MulOp, Number, RelOp, Term};
pub use program::Program;
pub use statements::Statement;
