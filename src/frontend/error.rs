use std::fmt::{self, Display, Formatter};

use thiserror::Error;

use super::token::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("a variable name cannot start with a digit")]
    BadVariableName,
}

/// Where a token came from, as tracked by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub filename: String,
    pub line: usize,
    pub column: usize,
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} line: {} col: {}", self.filename, self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("{loc} expected token: {expected}, got {got}")]
    ExpectedToken {
        expected: TokenKind,
        got: TokenKind,
        loc: Location,
    },
    #[error("{loc} no prefix parse function for `{literal}`")]
    NoPrefixParseFn { literal: String, loc: Location },
    #[error("{loc} no infix parse function for `{literal}`")]
    NoInfixParseFn { literal: String, loc: Location },
    #[error("{loc} could not parse `{literal}` as a 64-bit integer")]
    IntegerOverflow { literal: String, loc: Location },
    #[error(transparent)]
    Lex(#[from] LexError),
}
