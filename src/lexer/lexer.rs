//! The scanner: a forward-only cursor over source text that yields one
//! token per call.
use super::{byte_ext::ByteExt, error::LexError, tokens::*};

/// End-of-input sentinel. Never a valid source byte.
const EOF_BYTE: u8 = 0;

/// Hand-written scanner over a borrowed source buffer.
///
/// `position` points at the byte that produced `ch` and `read_position`
/// at the next unread byte, so `read_position == position + 1` between
/// calls. The cursor only ever moves forward; no token is pushed back.
pub struct Lexer<'s> {
    input: &'s str,
    position: usize,
    read_position: usize,
    ch: u8,
}

impl<'s> Lexer<'s> {
    pub fn new(input: &'s str) -> Self {
        let mut lexer = Self {
            input,
            position: 0,
            read_position: 0,
            ch: EOF_BYTE,
        };
        lexer.read_char();
        lexer
    }

    /// Produces the next token and advances the cursor past it.
    ///
    /// Unrecognised bytes come back as illegal tokens rather than
    /// stopping the scan. Once the input is exhausted, every further
    /// call returns the end-of-file token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            b'=' if self.peek_char() == b'=' => self.two_byte_symbol(Symbol::Eq),
            b'=' => Token::symbol(Symbol::Assign),
            b'!' if self.peek_char() == b'=' => self.two_byte_symbol(Symbol::Neq),
            b'!' => Token::symbol(Symbol::Not),
            b'+' => Token::symbol(Symbol::Plus),
            b'-' => Token::symbol(Symbol::Minus),
            b'*' => Token::symbol(Symbol::Asterisk),
            b'/' => Token::symbol(Symbol::Slash),
            b'<' => Token::symbol(Symbol::Lt),
            b'>' => Token::symbol(Symbol::Gt),
            b',' => Token::symbol(Symbol::Comma),
            b';' => Token::symbol(Symbol::Semicolon),
            b'(' => Token::symbol(Symbol::OpenParen),
            b')' => Token::symbol(Symbol::CloseParen),
            b'{' => Token::symbol(Symbol::OpenBrace),
            b'}' => Token::symbol(Symbol::CloseBrace),
            // Must be checked before the letter and digit arms, since
            // the sentinel satisfies neither predicate.
            EOF_BYTE => Token::eof(),
            ch if ch.is_identifier_byte() => return self.read_identifier(),
            ch if ch.is_ascii_digit() => return self.read_number(),
            ch => Token::illegal(ch),
        };

        self.read_char();
        token
    }

    /// Consuming advance: loads the next byte into `ch`, or the sentinel
    /// once the input is exhausted. `position` is clamped to the buffer
    /// length, so end-of-input reads leave the cursor where it is.
    fn read_char(&mut self) {
        self.ch = self.byte_at(self.read_position);
        self.position = self.read_position.min(self.input.len());
        self.read_position = self.position + 1;
    }

    /// One byte of lookahead. Never moves the cursor; two-character
    /// operator disambiguation relies on that.
    fn peek_char(&self) -> u8 {
        self.byte_at(self.read_position)
    }

    fn byte_at(&self, index: usize) -> u8 {
        self.input.as_bytes().get(index).copied().unwrap_or(EOF_BYTE)
    }

    /// Consumes the second byte of a two-byte operator; the shared
    /// trailing advance in `next_token` consumes the first.
    fn two_byte_symbol(&mut self, symbol: Symbol) -> Token {
        self.read_char();
        Token::symbol(symbol)
    }

    fn skip_whitespace(&mut self) {
        while self.ch.is_lexical_whitespace() {
            self.read_char();
        }
    }

    /// Consumes a maximal run of identifier bytes and classifies it
    /// against the keyword table. The run loop leaves the cursor on the
    /// byte after the identifier, so there is no trailing advance here.
    fn read_identifier(&mut self) -> Token {
        let start = self.position;
        while self.ch.is_identifier_byte() {
            self.read_char();
        }

        let literal = &self.input[start..self.position];
        Token::new(classify(literal), literal)
    }

    /// Consumes a maximal run of ASCII digits. No sign, decimal point,
    /// or exponent handling; a leading `-` lexes as the minus symbol.
    fn read_number(&mut self) -> Token {
        let start = self.position;
        while self.ch.is_ascii_digit() {
            self.read_char();
        }

        Token::new(TokenKind::Integer, &self.input[start..self.position])
    }
}

/// Tokenises `source` in one pass, separating unrecognised characters
/// out into errors. On success the returned stream ends with the
/// end-of-file token.
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<LexError>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];
    let mut errors = vec![];

    loop {
        let token = lexer.next_token();
        match token.kind {
            TokenKind::Illegal => errors.push(LexError {
                literal: token.literal,
            }),
            TokenKind::Eof => {
                tokens.push(token);
                break;
            }
            _ => tokens.push(token),
        }
    }

    if errors.is_empty() {
        Ok(tokens)
    } else {
        Err(errors)
    }
}
