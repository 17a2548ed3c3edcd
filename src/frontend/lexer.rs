use crate::diag;
use crate::frontend::error::LexError;
use crate::frontend::token::{self, Token, TokenKind};
use crate::utils;

pub struct Lexer<'a> {
    input: &'a str,
    position: usize, // byte index of the next unread byte
    ch: u8,          // last byte read, 0 before the first read and once input is exhausted
    filename: &'a str,
    line: usize,
    column: usize, // 0 until the first byte of the line is read
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str, filename: &'a str) -> Self {
        Lexer {
            input,
            position: 0,
            ch: 0,
            filename,
            line: 1,
            column: 0,
        }
    }

    pub fn filename(&self) -> &str {
        self.filename
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.eat_whitespace();
        self.read_char();

        if let Some(kind) = TokenKind::from_byte(self.ch) {
            // double tokens win over their first byte
            if let Some(pair) = TokenKind::from_pair(self.ch, self.peek_current()) {
                let mut literal = String::from(self.ch as char);
                self.read_char();
                literal.push(self.ch as char);
                return Ok(Token::new(pair, literal));
            }
            return Ok(Token::new(kind, (self.ch as char).to_string()));
        }
        if self.ch == 0 {
            return Ok(Token::new(TokenKind::EOF, String::new()));
        }

        // keywords, identifiers and integers all start here
        if utils::is_digit(self.ch) || utils::is_alpha_or_underscore(self.ch) {
            let literal = self.read_ident_literal()?;
            return Ok(Token::new(token::classify(literal), literal.to_string()));
        }

        Ok(Token::new(TokenKind::Illegal, (self.ch as char).to_string()))
    }

    /// One-token lookahead. Successive peeks return the same token, and the
    /// next `next_token` call returns it again.
    pub fn peek_token(&mut self) -> Result<Token, LexError> {
        let (position, ch, line, column) = (self.position, self.ch, self.line, self.column);
        let token = self.next_token();
        self.position = position;
        self.ch = ch;
        self.line = line;
        self.column = column;
        token
    }

    fn peek_current(&self) -> u8 {
        self.input.as_bytes().get(self.position).copied().unwrap_or(0)
    }

    fn read_char(&mut self) {
        if self.position == self.input.len() {
            self.ch = 0;
            return;
        }
        if self.ch == b'\n' {
            self.line += 1;
            self.column = 0;
        }
        self.ch = self.input.as_bytes()[self.position];
        self.position += 1;
        self.column += 1;
    }

    fn eat_whitespace(&mut self) {
        while utils::is_whitespace(self.peek_current()) {
            self.read_char();
        }
    }

    // Consumes the rest of an identifier or integer literal. `self.ch` holds
    // its first byte, which decides between the two scans.
    fn read_ident_literal(&mut self) -> Result<&'a str, LexError> {
        let start = self.position - 1;
        if utils::is_digit(self.ch) {
            while utils::is_digit(self.peek_current()) {
                self.read_char();
            }
            if utils::is_alpha_or_underscore(self.peek_current()) {
                let err = LexError::BadVariableName;
                diag::print_err(self.filename, self.line, self.column, &err);
                return Err(err);
            }
        } else {
            while utils::is_alpha_or_underscore(self.peek_current())
                || utils::is_digit(self.peek_current())
            {
                self.read_char();
            }
        }

        // The scanned range is all ASCII, so the slice sits on char boundaries.
        Ok(&self.input[start..self.position])
    }
}
