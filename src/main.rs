use std::{fs, io};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{debug, error};

mod commandline;
mod lexer;
mod repl;

use commandline::{Operation, Options};

fn main() -> Result<()> {
    let options = Options::parse();

    stderrlog::new().verbosity(options.verbose).init()?;

    match options.operation {
        Operation::Scan { file } => scan(&file),
        Operation::Repl => {
            repl::start(io::stdin().lock(), io::stdout())?;
            Ok(())
        }
    }
}

/// Tokenises a source file and prints one token per line. Unrecognised
/// characters fail the whole scan; the REPL, by contrast, just prints
/// them.
fn scan(file: &str) -> Result<()> {
    let content = fs::read_to_string(file).with_context(|| format!("Failed to read {file}"))?;

    match lexer::lex(&content) {
        Ok(tokens) => {
            debug!("{} produced {} tokens", file, tokens.len());
            for token in &tokens {
                println!("{token}");
            }
            Ok(())
        }
        Err(errors) => {
            for err in &errors {
                error!("{err}");
            }
            bail!("{} contains {} unrecognised character(s)", file, errors.len());
        }
    }
}
