use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[clap(about = "A lexer for the Quill scripting language")]
pub struct Options {
    #[clap(subcommand)]
    pub operation: Operation,
    #[clap(short, long, default_value_t = 1)]
    pub verbose: usize,
}

#[derive(Debug, Subcommand)]
pub enum Operation {
    /// Tokenise a source file and print its tokens
    Scan { file: String },
    /// Tokenise standard input one line at a time
    Repl,
}
