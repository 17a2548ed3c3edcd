pub mod cli;
pub mod diag;
mod frontend;
mod utils;

pub use frontend::ast::{Block, Expr, Identifier, Program, Stmt};
pub use frontend::error::{LexError, Location, ParseError};
pub use frontend::lexer::Lexer;
pub use frontend::parser::Parser;
pub use frontend::token::{Token, TokenKind};
