use crate::ast::{Condition, Expression, Ident};

/// statement = ident ":=" expression
///           | "call" ident
///           | "begin" statement { ";" statement } "end"
///           | "if" condition "then" statement
///           | "while" condition "do" statement
///           | (* empty *) .
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Assign {
        name: Ident,
        expr: Expression,
    },
    Call {
        name: Ident,
    },
    Begin {
        statements: Vec<Statement>,
    },
    If {
        condition: Condition,
        body: Box<Statement>,
    },
    While {
        condition: Condition,
        body: Box<Statement>,
    },
    /// The empty alternative: chosen whenever the current token cannot
    /// start a statement, consuming nothing.
    Empty,
}
