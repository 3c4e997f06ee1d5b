use clap::Parser;
use pl0_parse::errors::Pl0Result;
use pl0_parse::frontend::lexer::scan;
use std::{path::PathBuf, process::exit};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "PL/0 parser that prints the parse tree as an S-expression",
    long_about = "PL/0 parser that prints the parse tree as an S-expression.\n\
                 Source text is taken from the command line (all arguments are\n\
                 joined with spaces) or from a .pl0 file.\n\
                 \n\
                 Example usage:\n\
                 pl0-parse 'var x; x := 1 .'          # Parse and print the tree\n\
                 pl0-parse --file program.pl0          # Parse a source file\n\
                 pl0-parse --tokens 'x := 1 .'         # Also dump the token stream"
)]
struct Cli {
    // PL/0 source text; multiple arguments are joined with spaces
    source: Vec<String>,

    // Read the source from a .pl0 file instead
    #[arg(short, long)]
    file: Option<PathBuf>,

    // Print the token stream before parsing
    #[arg(short, long)]
    tokens: bool,
}

fn run(cli: &Cli) -> Pl0Result<()> {
    let source = match &cli.file {
        Some(path) => pl0_parse::read(path)?,
        None => cli.source.join(" "),
    };

    if cli.tokens {
        for token in scan(&source)? {
            println!("{}:{}: {:?}", token.line, token.column, token.kind);
        }
    }

    let tree = pl0_parse::parse(&source)?;
    println!("{}", tree);
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{}", e);
        exit(1);
    }
}
