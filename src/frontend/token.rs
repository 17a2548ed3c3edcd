use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: String) -> Self {
        Self { kind, literal }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Illegal,
    EOF,
    Ident,
    Int,
    Assign,
    Plus,
    Minus,
    Bang,
    Asterisk,
    Slash,
    LT,
    GT,
    EQ,
    NotEQ,
    GTE,
    LTE,
    PlusPlus,
    MinusMinus,
    Comma,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl TokenKind {
    pub fn from_byte(byte: u8) -> Option<Self> {
        let kind = match byte {
            b'=' => Self::Assign,
            b';' => Self::Semicolon,
            b'(' => Self::LParen,
            b')' => Self::RParen,
            b',' => Self::Comma,
            b'+' => Self::Plus,
            b'-' => Self::Minus,
            b'{' => Self::LBrace,
            b'}' => Self::RBrace,
            b'!' => Self::Bang,
            b'*' => Self::Asterisk,
            b'/' => Self::Slash,
            b'<' => Self::LT,
            b'>' => Self::GT,
            _ => return None,
        };
        Some(kind)
    }

    pub fn from_pair(first: u8, second: u8) -> Option<Self> {
        let kind = match (first, second) {
            (b'=', b'=') => Self::EQ,
            (b'!', b'=') => Self::NotEQ,
            (b'>', b'=') => Self::GTE,
            (b'<', b'=') => Self::LTE,
            (b'+', b'+') => Self::PlusPlus,
            (b'-', b'-') => Self::MinusMinus,
            _ => return None,
        };
        Some(kind)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Illegal => "ILLEGAL",
            Self::EOF => "EOF",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::LT => "<",
            Self::GT => ">",
            Self::EQ => "==",
            Self::NotEQ => "!=",
            Self::GTE => ">=",
            Self::LTE => "<=",
            Self::PlusPlus => "++",
            Self::MinusMinus => "--",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Digit-led literals were already vetted by the lexer, so a leading digit
// here can only be an integer.
pub fn classify(literal: &str) -> TokenKind {
    if literal.is_empty() {
        return TokenKind::EOF;
    }
    if let Some(keyword) = lookup_keyword(literal) {
        return keyword;
    }
    if crate::utils::is_digit(literal.as_bytes()[0]) {
        return TokenKind::Int;
    }
    TokenKind::Ident
}

fn lookup_keyword(literal: &str) -> Option<TokenKind> {
    let kind = match literal {
        "fn" => TokenKind::Function,
        "let" => TokenKind::Let,
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "return" => TokenKind::Return,
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        _ => return None,
    };
    Some(kind)
}
