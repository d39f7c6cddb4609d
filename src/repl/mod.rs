//! Interactive read loop that prints the tokens of each input line.
use std::io::{self, BufRead, Write};

use crate::lexer::{tokens::TokenKind, Lexer};

const PROMPT: &str = ">> ";

/// Reads `input` one line at a time, lexes each line with a fresh
/// scanner, and writes every token to `output` on its own line until
/// the line is exhausted. Returns once the input stream ends.
///
/// Illegal tokens are printed like any other; deciding what to do about
/// them is left to whoever reads the output.
pub fn start(mut input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    let mut line = String::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let mut lexer = Lexer::new(&line);
        loop {
            let token = lexer.next_token();
            if token.kind == TokenKind::Eof {
                break;
            }
            writeln!(output, "{token}")?;
        }
    }
}
