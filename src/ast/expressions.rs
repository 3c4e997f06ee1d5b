/// An identifier terminal, with the position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub name: String,
    pub line: usize,
    pub column: usize,
}

impl Ident {
    pub fn new(name: impl Into<String>, line: usize, column: usize) -> Self {
        Self { name: name.into(), line, column }
    }
}

/// An unsigned number terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct Number {
    pub value: i64,
    pub line: usize,
    pub column: usize,
}

impl Number {
    pub fn new(value: i64, line: usize, column: usize) -> Self {
        Self { value, line, column }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AddOp {
    Plus,
    Minus,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MulOp {
    Times,
    Divide,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RelOp {
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

/// condition = "odd" expression
///           | expression ( "=" | "#" | "<" | "<=" | ">" | ">=" ) expression .
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Odd(Expression),
    Compare {
        op: RelOp,
        lhs: Expression,
        rhs: Expression,
    },
}

/// expression = [ "+" | "-" ] term { ( "+" | "-" ) term } .
///
/// A `Binary` chain leans left: `lhs` holds the tree built so far, `rhs`
/// the most recently parsed term. The optional sign lives only on the
/// leftmost `Term` leaf, so it binds the first term and nothing else.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Term {
        sign: Option<AddOp>,
        term: Term,
    },
    Binary {
        op: AddOp,
        lhs: Box<Expression>,
        rhs: Term,
    },
}

/// term = factor { ( "*" | "/" ) factor } .
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Factor(Factor),
    Binary {
        op: MulOp,
        lhs: Box<Term>,
        rhs: Factor,
    },
}

/// factor = ident | number | "(" expression ")" .
#[derive(Debug, Clone, PartialEq)]
pub enum Factor {
    Ident(Ident),
    Number(Number),
    Paren(Box<Expression>),
}
