//! Textual tree dump.
//!
//! Every node renders as a parenthesized S-expression: the rule name
//! followed by the children in derivation order, terminals as their
//! literal text. `Display` pattern-matches the closed node set, so the
//! dump format is auditable next to the grammar it mirrors.

use crate::ast::{
    AddOp, Block, Condition, ConstDecl, Expression, Factor, Ident, MulOp, Number, ProcDecl,
    Procedure, Program, RelOp, Statement, Term, VarDecl,
};
use std::fmt;

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(program {} .)", self.block)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(block")?;
        if !self.const_decl.is_empty() {
            write!(f, " {}", self.const_decl)?;
        }
        if !self.var_decl.is_empty() {
            write!(f, " {}", self.var_decl)?;
        }
        if !self.proc_decl.is_empty() {
            write!(f, " {}", self.proc_decl)?;
        }
        write!(f, " {})", self.statement)
    }
}

impl fmt::Display for ConstDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(const")?;
        for (ident, number) in &self.consts {
            write!(f, " ({} {})", ident, number)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for VarDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(var")?;
        for ident in &self.idents {
            write!(f, " {}", ident)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for ProcDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for procedure in &self.procedures {
            if first {
                first = false;
            } else {
                write!(f, " ")?;
            }
            write!(f, "{}", procedure)?;
        }
        Ok(())
    }
}

impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(procedure {} {})", self.name, self.block)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Assign { name, expr } => write!(f, "(assign {} {})", name, expr),
            Statement::Call { name } => write!(f, "(call {})", name),
            Statement::Begin { statements } => {
                write!(f, "(begin")?;
                for statement in statements {
                    write!(f, " {}", statement)?;
                }
                write!(f, ")")
            }
            Statement::If { condition, body } => write!(f, "(if {} {})", condition, body),
            Statement::While { condition, body } => write!(f, "(while {} {})", condition, body),
            Statement::Empty => write!(f, "(empty)"),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Odd(expr) => write!(f, "(odd {})", expr),
            Condition::Compare { op, lhs, rhs } => write!(f, "({} {} {})", op, lhs, rhs),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Term { sign: None, term } => write!(f, "{}", term),
            Expression::Term { sign: Some(sign), term } => write!(f, "({} {})", sign, term),
            Expression::Binary { op, lhs, rhs } => write!(f, "({} {} {})", op, lhs, rhs),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Factor(factor) => write!(f, "{}", factor),
            Term::Binary { op, lhs, rhs } => write!(f, "({} {} {})", op, lhs, rhs),
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Factor::Ident(ident) => write!(f, "{}", ident),
            Factor::Number(number) => write!(f, "{}", number),
            Factor::Paren(expr) => write!(f, "(paren {})", expr),
        }
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl fmt::Display for AddOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddOp::Plus => write!(f, "+"),
            AddOp::Minus => write!(f, "-"),
        }
    }
}

impl fmt::Display for MulOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MulOp::Times => write!(f, "*"),
            MulOp::Divide => write!(f, "/"),
        }
    }
}

impl fmt::Display for RelOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelOp::Equal => write!(f, "="),
            RelOp::NotEqual => write!(f, "#"),
            RelOp::Less => write!(f, "<"),
            RelOp::LessEqual => write!(f, "<="),
            RelOp::Greater => write!(f, ">"),
            RelOp::GreaterEqual => write!(f, ">="),
        }
    }
}
