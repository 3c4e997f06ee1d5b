use std::fmt;
use std::io;

#[derive(Debug)]
pub enum Pl0Error {
    // File and I/O errors
    FileReadError(String),
    IoError(io::Error),

    // Lexical analysis errors
    UnknownCharacter {
        character: char,
        line: usize,
        column: usize,
    },
    UnterminatedComment {
        line: usize,
        column: usize,
    },
    InvalidNumber {
        number: String,
        line: usize,
        column: usize,
    },

    // Parsing errors
    SyntaxError {
        expected: String,
        found: String,
        line: usize,
        column: usize,
    },
    NestingTooDeep {
        limit: usize,
        line: usize,
        column: usize,
    },
}

impl Pl0Error {
    /// Create a syntax error from an expected-token description and the
    /// token actually found.
    pub fn syntax_error(
        expected: impl Into<String>,
        found: impl Into<String>,
        line: usize,
        column: usize,
    ) -> Self {
        Pl0Error::SyntaxError {
            expected: expected.into(),
            found: found.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for Pl0Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pl0Error::FileReadError(msg) => write!(f, "File read error: {}", msg),
            Pl0Error::IoError(err) => write!(f, "I/O error: {}", err),

            Pl0Error::UnknownCharacter { character, line, column } => {
                write!(f, "Unknown character '{}' at line {} column {}", character, line, column)
            }
            Pl0Error::UnterminatedComment { line, column } => {
                write!(f, "Unterminated comment starting at line {} column {}", line, column)
            }
            Pl0Error::InvalidNumber { number, line, column } => {
                write!(f, "Invalid number '{}' at line {} column {}", number, line, column)
            }

            Pl0Error::SyntaxError { expected, found, line, column } => {
                write!(
                    f,
                    "Syntax error at line {} column {}: expected {}, found {}",
                    line, column, expected, found
                )
            }
            Pl0Error::NestingTooDeep { limit, line, column } => {
                write!(
                    f,
                    "Nesting deeper than {} levels at line {} column {}",
                    limit, line, column
                )
            }
        }
    }
}

impl std::error::Error for Pl0Error {}

impl From<io::Error> for Pl0Error {
    fn from(err: io::Error) -> Self {
        Pl0Error::IoError(err)
    }
}

// Type alias for Result with Pl0Error
pub type Pl0Result<T> = Result<T, Pl0Error>;
