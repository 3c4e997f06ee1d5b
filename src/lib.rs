//! PL/0 frontend: lexer, recursive-descent parser and parse tree.
//!
//! [`parse`] is the whole pipeline — a pure function from source text to
//! a [`Program`] tree or the first error encountered. The tree renders as
//! a parenthesized S-expression via `Display`.
//!
//! ```
//! let tree = pl0_parse::parse("const x = 1; var y; y := x + 1 .").unwrap();
//! assert_eq!(
//!     tree.to_string(),
//!     "(program (block (const (x 1)) (var y) (assign y (+ x 1))) .)"
//! );
//! ```

use std::{fs::File, io::Read, path::Path};

pub mod ast;
pub mod errors;
pub mod frontend;

pub use frontend::{Lexer, Parser};

pub const VERSION: &str = "0.1.0";

use crate::ast::Program;
use crate::errors::{Pl0Error, Pl0Result};

/// Parse one PL/0 program. Lexing and parsing run as a single pull-based
/// pass; no state is shared across calls, so parsing many sources
/// concurrently needs no synchronization.
pub fn parse(source: &str) -> Pl0Result<Program> {
    Parser::new(Lexer::new(source))?.parse()
}

/// Load PL/0 source from a `.pl0` file.
pub fn read(filename: &Path) -> Pl0Result<String> {
    let path = Path::new(filename);

    match path.extension() {
        Some(ext) if ext.eq("pl0") => {}
        _ => {
            return Err(Pl0Error::FileReadError(
                "File must have a .pl0 extension".to_string(),
            ));
        }
    }
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}
