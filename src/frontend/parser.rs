use crate::ast::{
    AddOp, Block, Condition, ConstDecl, Expression, Factor, Ident, MulOp, Number, ProcDecl,
    Procedure, Program, RelOp, Statement, Term, VarDecl,
};
use crate::errors::{Pl0Error, Pl0Result};
use crate::frontend::lexer::Lexer;
use crate::frontend::token::{Token, TokenKind};

/// Upper bound on grammar nesting (nested procedures, statements and
/// parenthesized expressions combined). Recursion depth is proportional
/// to source nesting, so the parser enforces this limit explicitly
/// instead of risking native stack exhaustion on adversarial input.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Recursive-descent parser with one-token lookahead.
///
/// One method per grammar rule; each either builds a node or fails with
/// the first error encountered. The parser pulls tokens from the lexer on
/// demand and is consumed by [`Parser::parse`] — each parse is a pure
/// single pass over one source string.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Prime the one-token lookahead. Fails if the source does not even
    /// lex to a first token.
    pub fn new(mut lexer: Lexer<'a>) -> Pl0Result<Self> {
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            depth: 0,
        })
    }

    /// program = block "." .
    ///
    /// The trailing '.' must be followed by end of input; trailing
    /// garbage is a syntax error.
    pub fn parse(mut self) -> Pl0Result<Program> {
        let block = self.block()?;
        self.expect(TokenKind::Dot)?;
        if self.current.kind != TokenKind::Eof {
            return Err(self.syntax_error("end of input"));
        }
        Ok(Program::new(block))
    }

    fn next(&mut self) -> Pl0Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn syntax_error(&self, expected: impl Into<String>) -> Pl0Error {
        Pl0Error::syntax_error(
            expected,
            self.current.kind.to_string(),
            self.current.line,
            self.current.column,
        )
    }

    // Consume the current token if it matches, fail otherwise.
    fn expect(&mut self, expected: TokenKind) -> Pl0Result<()> {
        if expected != self.current.kind {
            return Err(self.syntax_error(expected.to_string()));
        }
        self.next()
    }

    fn expect_ident(&mut self) -> Pl0Result<Ident> {
        if let TokenKind::Ident(name) = &self.current.kind {
            let ident = Ident::new(name.clone(), self.current.line, self.current.column);
            self.next()?;
            Ok(ident)
        } else {
            Err(self.syntax_error("identifier"))
        }
    }

    fn expect_number(&mut self) -> Pl0Result<Number> {
        if let TokenKind::Number(value) = self.current.kind {
            let number = Number::new(value, self.current.line, self.current.column);
            self.next()?;
            Ok(number)
        } else {
            Err(self.syntax_error("number"))
        }
    }

    fn enter(&mut self) -> Pl0Result<()> {
        if self.depth == MAX_NESTING_DEPTH {
            return Err(Pl0Error::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
                line: self.current.line,
                column: self.current.column,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// block = [ "const" ident "=" number { "," ident "=" number } ";" ]
    ///         [ "var" ident { "," ident } ";" ]
    ///         { "procedure" ident ";" block ";" } statement .
    fn block(&mut self) -> Pl0Result<Block> {
        self.enter()?;
        let const_decl = if self.current.kind == TokenKind::Const {
            self.const_declaration()?
        } else {
            ConstDecl::default()
        };
        let var_decl = if self.current.kind == TokenKind::Var {
            self.var_declaration()?
        } else {
            VarDecl::default()
        };
        let proc_decl = self.procedure_declarations()?;
        let statement = self.statement()?;
        self.leave();
        Ok(Block::new(const_decl, var_decl, proc_decl, statement))
    }

    fn const_declaration(&mut self) -> Pl0Result<ConstDecl> {
        let mut consts = Vec::new();
        self.expect(TokenKind::Const)?;
        loop {
            let ident = self.expect_ident()?;
            self.expect(TokenKind::Equal)?;
            let number = self.expect_number()?;
            consts.push((ident, number));
            match self.current.kind {
                TokenKind::Comma => self.next()?,
                TokenKind::Semicolon => break,
                _ => return Err(self.syntax_error("',' or ';'")),
            }
        }
        self.expect(TokenKind::Semicolon)?;
        Ok(ConstDecl::new(consts))
    }

    fn var_declaration(&mut self) -> Pl0Result<VarDecl> {
        let mut idents = Vec::new();
        self.expect(TokenKind::Var)?;
        loop {
            idents.push(self.expect_ident()?);
            match self.current.kind {
                TokenKind::Comma => self.next()?,
                TokenKind::Semicolon => break,
                _ => return Err(self.syntax_error("',' or ';'")),
            }
        }
        self.expect(TokenKind::Semicolon)?;
        Ok(VarDecl::new(idents))
    }

    fn procedure_declarations(&mut self) -> Pl0Result<ProcDecl> {
        let mut procedures = Vec::new();
        while self.current.kind == TokenKind::Procedure {
            self.expect(TokenKind::Procedure)?;
            let name = self.expect_ident()?;
            self.expect(TokenKind::Semicolon)?;
            let block = self.block()?;
            self.expect(TokenKind::Semicolon)?;
            procedures.push(Procedure::new(name, block));
        }
        Ok(ProcDecl::new(procedures))
    }

    /// statement = ident ":=" expression
    ///           | "call" ident
    ///           | "begin" statement { ";" statement } "end"
    ///           | "if" condition "then" statement
    ///           | "while" condition "do" statement
    ///           | (* empty *) .
    ///
    /// A token that cannot start a statement selects the empty
    /// alternative without being consumed; the caller's follow set
    /// ('end', ';', '.') deals with it.
    fn statement(&mut self) -> Pl0Result<Statement> {
        self.enter()?;
        let statement = match &self.current.kind {
            TokenKind::Ident(_) => {
                let name = self.expect_ident()?;
                self.expect(TokenKind::Assign)?;
                let expr = self.expression()?;
                Statement::Assign { name, expr }
            }
            TokenKind::Call => {
                self.expect(TokenKind::Call)?;
                let name = self.expect_ident()?;
                Statement::Call { name }
            }
            TokenKind::Begin => {
                self.expect(TokenKind::Begin)?;
                let mut statements = vec![self.statement()?];
                while self.current.kind == TokenKind::Semicolon {
                    self.expect(TokenKind::Semicolon)?;
                    statements.push(self.statement()?);
                }
                self.expect(TokenKind::End)?;
                Statement::Begin { statements }
            }
            TokenKind::If => {
                self.expect(TokenKind::If)?;
                let condition = self.condition()?;
                self.expect(TokenKind::Then)?;
                let body = Box::new(self.statement()?);
                Statement::If { condition, body }
            }
            TokenKind::While => {
                self.expect(TokenKind::While)?;
                let condition = self.condition()?;
                self.expect(TokenKind::Do)?;
                let body = Box::new(self.statement()?);
                Statement::While { condition, body }
            }
            _ => Statement::Empty,
        };
        self.leave();
        Ok(statement)
    }

    /// condition = "odd" expression
    ///           | expression ( "=" | "#" | "<" | "<=" | ">" | ">=" ) expression .
    fn condition(&mut self) -> Pl0Result<Condition> {
        if self.current.kind == TokenKind::Odd {
            self.expect(TokenKind::Odd)?;
            let expr = self.expression()?;
            return Ok(Condition::Odd(expr));
        }
        let lhs = self.expression()?;
        let op = match self.current.kind {
            TokenKind::Equal => RelOp::Equal,
            TokenKind::Hash => RelOp::NotEqual,
            TokenKind::LessThan => RelOp::Less,
            TokenKind::LessThanEqual => RelOp::LessEqual,
            TokenKind::GreaterThan => RelOp::Greater,
            TokenKind::GreaterThanEqual => RelOp::GreaterEqual,
            _ => return Err(self.syntax_error("'=', '#', '<', '<=', '>' or '>='")),
        };
        self.next()?;
        let rhs = self.expression()?;
        Ok(Condition::Compare { op, lhs, rhs })
    }

    /// expression = [ "+" | "-" ] term { ( "+" | "-" ) term } .
    ///
    /// The leading sign binds to the first term only; the following
    /// operators are binary and left-associative.
    fn expression(&mut self) -> Pl0Result<Expression> {
        self.enter()?;
        let sign = match self.current.kind {
            TokenKind::Plus => {
                self.next()?;
                Some(AddOp::Plus)
            }
            TokenKind::Minus => {
                self.next()?;
                Some(AddOp::Minus)
            }
            _ => None,
        };
        let term = self.term()?;
        let mut expr = Expression::Term { sign, term };
        loop {
            let op = match self.current.kind {
                TokenKind::Plus => AddOp::Plus,
                TokenKind::Minus => AddOp::Minus,
                _ => break,
            };
            self.next()?;
            let rhs = self.term()?;
            expr = Expression::Binary {
                op,
                lhs: Box::new(expr),
                rhs,
            };
        }
        self.leave();
        Ok(expr)
    }

    /// term = factor { ( "*" | "/" ) factor } .
    fn term(&mut self) -> Pl0Result<Term> {
        let mut term = Term::Factor(self.factor()?);
        loop {
            let op = match self.current.kind {
                TokenKind::Multiply => MulOp::Times,
                TokenKind::Divide => MulOp::Divide,
                _ => break,
            };
            self.next()?;
            let rhs = self.factor()?;
            term = Term::Binary {
                op,
                lhs: Box::new(term),
                rhs,
            };
        }
        Ok(term)
    }

    /// factor = ident | number | "(" expression ")" .
    fn factor(&mut self) -> Pl0Result<Factor> {
        match &self.current.kind {
            TokenKind::Ident(_) => Ok(Factor::Ident(self.expect_ident()?)),
            TokenKind::Number(_) => Ok(Factor::Number(self.expect_number()?)),
            TokenKind::LParen => {
                self.expect(TokenKind::LParen)?;
                let expr = self.expression()?;
                self.expect(TokenKind::RParen)?;
                Ok(Factor::Paren(Box::new(expr)))
            }
            _ => Err(self.syntax_error("identifier, number or '('")),
        }
    }
}
