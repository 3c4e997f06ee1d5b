use crate::errors::{Pl0Error, Pl0Result};
use crate::frontend::token::{Token, TokenKind};
use std::{iter::Peekable, str::Chars};

/// Pull-based scanner over PL/0 source text.
///
/// One forward cursor, no backtracking: each call to [`Lexer::next_token`]
/// produces the next token on demand. Once the input is exhausted the
/// lexer keeps returning `Eof` tokens.
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    /// Scan and return the next token, or a lexical error.
    pub fn next_token(&mut self) -> Pl0Result<Token> {
        self.skip_whitespace_and_comments()?;
        let line = self.line;
        let column = self.column;
        let kind = match self.chars.peek() {
            None => TokenKind::Eof,
            Some(&ch) if ch.is_ascii_alphabetic() => self.scan_identifier(),
            Some(&ch) if ch.is_ascii_digit() => self.scan_number(line, column)?,
            Some(&':') => self.scan_assignment(line, column)?,
            Some(&'<') => self.scan_less_than(),
            Some(&'>') => self.scan_greater_than(),
            Some(&ch) => self.scan_single_char_token(ch, line, column)?,
        };
        Ok(Token::new(kind, line, column))
    }

    // Consume one character, keeping the line/column cursor in step.
    fn bump(&mut self) -> Option<char> {
        let ch = self.chars.next();
        match ch {
            Some('\n') => {
                self.line += 1;
                self.column = 1;
            }
            Some(_) => self.column += 1,
            None => {}
        }
        ch
    }

    fn skip_whitespace_and_comments(&mut self) -> Pl0Result<()> {
        loop {
            match self.chars.peek() {
                Some(&'{') => self.scan_comment()?,
                Some(&ch) if ch.is_whitespace() => {
                    self.bump();
                }
                _ => break,
            }
        }
        Ok(())
    }

    fn scan_comment(&mut self) -> Pl0Result<()> {
        let line = self.line;
        let column = self.column;
        self.bump(); // Consume '{'
        while let Some(ch) = self.bump() {
            if ch == '}' {
                return Ok(());
            }
        }
        Err(Pl0Error::UnterminatedComment { line, column })
    }

    fn scan_identifier(&mut self) -> TokenKind {
        let mut identifier = String::new();
        while let Some(&ch) = self.chars.peek() {
            if ch.is_ascii_alphanumeric() {
                identifier.push(ch);
                self.bump();
            } else {
                break;
            }
        }
        keyword_or_identifier(identifier)
    }

    fn scan_number(&mut self, line: usize, column: usize) -> Pl0Result<TokenKind> {
        let mut number_str = String::new();
        while let Some(&ch) = self.chars.peek() {
            if ch.is_ascii_digit() {
                number_str.push(ch);
                self.bump();
            } else {
                break;
            }
        }
        number_str
            .parse::<i64>()
            .map(TokenKind::Number)
            .map_err(|_| Pl0Error::InvalidNumber { number: number_str, line, column })
    }

    fn scan_assignment(&mut self, line: usize, column: usize) -> Pl0Result<TokenKind> {
        self.bump(); // Consume ':'
        match self.chars.peek() {
            Some(&'=') => {
                self.bump(); // Consume '='
                Ok(TokenKind::Assign)
            }
            // A lone ':' is not a PL/0 token.
            _ => Err(Pl0Error::UnknownCharacter { character: ':', line, column }),
        }
    }

    fn scan_less_than(&mut self) -> TokenKind {
        self.bump(); // Consume '<'
        if self.chars.peek() == Some(&'=') {
            self.bump(); // Consume '='
            TokenKind::LessThanEqual
        } else {
            TokenKind::LessThan
        }
    }

    fn scan_greater_than(&mut self) -> TokenKind {
        self.bump(); // Consume '>'
        if self.chars.peek() == Some(&'=') {
            self.bump(); // Consume '='
            TokenKind::GreaterThanEqual
        } else {
            TokenKind::GreaterThan
        }
    }

    fn scan_single_char_token(
        &mut self,
        ch: char,
        line: usize,
        column: usize,
    ) -> Pl0Result<TokenKind> {
        self.bump(); // Consume the character
        let kind = match ch {
            '.' => TokenKind::Dot,
            '=' => TokenKind::Equal,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '#' => TokenKind::Hash,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Multiply,
            '/' => TokenKind::Divide,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            _ => return Err(Pl0Error::UnknownCharacter { character: ch, line, column }),
        };
        Ok(kind)
    }
}

fn keyword_or_identifier(identifier: String) -> TokenKind {
    // Reserved words are fixed and case-sensitive.
    match identifier.as_str() {
        "const" => TokenKind::Const,
        "var" => TokenKind::Var,
        "procedure" => TokenKind::Procedure,
        "call" => TokenKind::Call,
        "begin" => TokenKind::Begin,
        "end" => TokenKind::End,
        "if" => TokenKind::If,
        "then" => TokenKind::Then,
        "while" => TokenKind::While,
        "do" => TokenKind::Do,
        "odd" => TokenKind::Odd,
        _ => TokenKind::Ident(identifier),
    }
}

/// Scan the whole source into a token vector, final `Eof` token included.
pub fn scan(source: &str) -> Pl0Result<Vec<Token>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
