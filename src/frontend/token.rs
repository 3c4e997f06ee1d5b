use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Ident(String),
    Number(i64),
    Const,
    Var,
    Procedure,
    Call,
    Begin,
    End,
    If,
    Then,
    While,
    Do,
    Odd,
    Dot,
    Equal,
    Comma,
    Semicolon,
    Assign,
    Hash,
    LessThan,
    GreaterThan,
    LessThanEqual,
    GreaterThanEqual,
    Plus,
    Minus,
    Multiply,
    Divide,
    LParen,
    RParen,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(id) => write!(f, "identifier '{}'", id),
            TokenKind::Number(n) => write!(f, "number {}", n),
            TokenKind::Const => write!(f, "'const'"),
            TokenKind::Var => write!(f, "'var'"),
            TokenKind::Procedure => write!(f, "'procedure'"),
            TokenKind::Call => write!(f, "'call'"),
            TokenKind::Begin => write!(f, "'begin'"),
            TokenKind::End => write!(f, "'end'"),
            TokenKind::If => write!(f, "'if'"),
            TokenKind::Then => write!(f, "'then'"),
            TokenKind::While => write!(f, "'while'"),
            TokenKind::Do => write!(f, "'do'"),
            TokenKind::Odd => write!(f, "'odd'"),
            TokenKind::Dot => write!(f, "'.'"),
            TokenKind::Equal => write!(f, "'='"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Semicolon => write!(f, "';'"),
            TokenKind::Assign => write!(f, "':='"),
            TokenKind::Hash => write!(f, "'#'"),
            TokenKind::LessThan => write!(f, "'<'"),
            TokenKind::GreaterThan => write!(f, "'>'"),
            TokenKind::LessThanEqual => write!(f, "'<='"),
            TokenKind::GreaterThanEqual => write!(f, "'>='"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Multiply => write!(f, "'*'"),
            TokenKind::Divide => write!(f, "'/'"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

/// One lexical unit with the 1-based position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize, column: usize) -> Self {
        Self { kind, line, column }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}
