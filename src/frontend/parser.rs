use super::{
    ast::{Block, Expr, Identifier, Program, Stmt},
    error::{Location, ParseError},
    lexer::Lexer,
    token::{Token, TokenKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Lowest,
    Equals,      // ==
    LessGreater, // > or <
    Sum,         // +
    Product,     // *
    Prefix,      // -x or !x
    Call,        // my_function(x)
}

impl Precedence {
    // Everything without an operator role sits at Lowest, which is what
    // stops sub-expression parsing at `)`, `,`, `}`, `>=`, `<=` and friends.
    fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::EQ | TokenKind::NotEQ => Self::Equals,
            TokenKind::LT | TokenKind::GT => Self::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Slash | TokenKind::Asterisk => Self::Product,
            TokenKind::LParen => Self::Call,
            _ => Self::Lowest,
        }
    }
}

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        Parser {
            lexer,
            errors: Vec::new(),
        }
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Parses until EOF. A failed statement is recorded and parsing resumes
    /// with the next token; only a lexer error in the top-level advance stops
    /// the loop early.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program {
            statements: Vec::new(),
        };

        loop {
            let token = match self.lexer.next_token() {
                Ok(token) => token,
                Err(err) => {
                    self.errors.push(err.into());
                    break;
                }
            };
            if token.kind == TokenKind::EOF {
                break;
            }
            match self.parse_statement(token) {
                Ok(stmt) => program.statements.push(stmt),
                Err(err) => self.errors.push(err),
            }
        }

        program
    }

    fn parse_statement(&mut self, token: Token) -> Result<Stmt, ParseError> {
        match token.kind {
            TokenKind::Let => self.parse_let_statement(token),
            TokenKind::Return => self.parse_return_statement(token),
            _ => self.parse_expression_statement(token),
        }
    }

    fn parse_let_statement(&mut self, token: Token) -> Result<Stmt, ParseError> {
        let name = Identifier::from_token(self.expect_peek(TokenKind::Ident)?);
        self.expect_peek(TokenKind::Assign)?;

        let value_token = self.lexer.next_token()?;
        let value = self.parse_expression(value_token, Precedence::Lowest)?;
        self.expect_peek(TokenKind::Semicolon)?;

        Ok(Stmt::Let { token, name, value })
    }

    fn parse_return_statement(&mut self, token: Token) -> Result<Stmt, ParseError> {
        let value_token = self.lexer.next_token()?;
        let value = self.parse_expression(value_token, Precedence::Lowest)?;
        self.expect_peek(TokenKind::Semicolon)?;

        Ok(Stmt::Return { token, value })
    }

    fn parse_expression_statement(&mut self, token: Token) -> Result<Stmt, ParseError> {
        let expression = self.parse_expression(token.clone(), Precedence::Lowest)?;

        // trailing semicolon is optional for expression statements
        if self.lexer.peek_token()?.kind == TokenKind::Semicolon {
            self.lexer.next_token()?;
        }

        Ok(Stmt::Expr { token, expression })
    }

    fn parse_expression(
        &mut self,
        token: Token,
        precedence: Precedence,
    ) -> Result<Expr, ParseError> {
        let mut left = self.parse_prefix(token)?;

        // The strict `<` hands equal-precedence operators back to the outer
        // frame, which is what makes them left-associative.
        loop {
            let peek = self.lexer.peek_token()?;
            if peek.kind == TokenKind::Semicolon
                || peek.kind == TokenKind::EOF
                || precedence >= Precedence::of(peek.kind)
            {
                break;
            }
            let op = self.lexer.next_token()?;
            left = self.parse_infix(left, op)?;
        }

        Ok(left)
    }

    fn parse_prefix(&mut self, token: Token) -> Result<Expr, ParseError> {
        match token.kind {
            TokenKind::Ident => Ok(Expr::Ident(Identifier::from_token(token))),
            TokenKind::Int => self.parse_integer_literal(token),
            TokenKind::True | TokenKind::False => {
                let value = token.kind == TokenKind::True;
                Ok(Expr::Boolean { token, value })
            }
            TokenKind::Bang
            | TokenKind::Minus
            | TokenKind::PlusPlus
            | TokenKind::MinusMinus => self.parse_prefix_expression(token),
            TokenKind::LParen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(token),
            TokenKind::Function => self.parse_function_literal(token),
            _ => Err(ParseError::NoPrefixParseFn {
                literal: token.literal,
                loc: self.location(),
            }),
        }
    }

    // `>=` and `<=` are lexed but have no infix role, so they land in the
    // fallback arm like any other non-operator.
    fn parse_infix(&mut self, left: Expr, op: Token) -> Result<Expr, ParseError> {
        match op.kind {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Asterisk
            | TokenKind::Slash
            | TokenKind::EQ
            | TokenKind::NotEQ
            | TokenKind::LT
            | TokenKind::GT => self.parse_infix_expression(left, op),
            TokenKind::LParen => self.parse_call_expression(left, op),
            _ => Err(ParseError::NoInfixParseFn {
                literal: op.literal,
                loc: self.location(),
            }),
        }
    }

    fn parse_integer_literal(&self, token: Token) -> Result<Expr, ParseError> {
        match token.literal.parse::<i64>() {
            Ok(value) => Ok(Expr::Int { token, value }),
            Err(_) => Err(ParseError::IntegerOverflow {
                literal: token.literal,
                loc: self.location(),
            }),
        }
    }

    fn parse_prefix_expression(&mut self, token: Token) -> Result<Expr, ParseError> {
        let operator = token.literal.clone();
        let right_token = self.lexer.next_token()?;
        let right = Box::new(self.parse_expression(right_token, Precedence::Prefix)?);

        Ok(Expr::Prefix {
            token,
            operator,
            right,
        })
    }

    fn parse_infix_expression(&mut self, left: Expr, op: Token) -> Result<Expr, ParseError> {
        let precedence = Precedence::of(op.kind);
        let operator = op.literal.clone();
        let right_token = self.lexer.next_token()?;
        let right = Box::new(self.parse_expression(right_token, precedence)?);

        Ok(Expr::Infix {
            token: op,
            left: Box::new(left),
            operator,
            right,
        })
    }

    // The parenthesized expression stands on its own, no wrapper node.
    fn parse_grouped_expression(&mut self) -> Result<Expr, ParseError> {
        let token = self.lexer.next_token()?;
        let expr = self.parse_expression(token, Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        Ok(expr)
    }

    fn parse_if_expression(&mut self, token: Token) -> Result<Expr, ParseError> {
        self.expect_peek(TokenKind::LParen)?;
        let condition_token = self.lexer.next_token()?;
        let condition = Box::new(self.parse_expression(condition_token, Precedence::Lowest)?);
        self.expect_peek(TokenKind::RParen)?;

        let lbrace = self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block_statement(lbrace)?;

        let alternative = if self.lexer.peek_token()?.kind == TokenKind::Else {
            self.lexer.next_token()?;
            let lbrace = self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block_statement(lbrace)?)
        } else {
            None
        };

        Ok(Expr::If {
            token,
            condition,
            consequence,
            alternative,
        })
    }

    fn parse_function_literal(&mut self, token: Token) -> Result<Expr, ParseError> {
        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_function_parameters()?;
        let lbrace = self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement(lbrace)?;

        Ok(Expr::Function {
            token,
            parameters,
            body,
        })
    }

    fn parse_function_parameters(&mut self) -> Result<Vec<Identifier>, ParseError> {
        let mut parameters = Vec::new();

        while self.lexer.peek_token()?.kind != TokenKind::RParen {
            let token = self.expect_peek(TokenKind::Ident)?;
            parameters.push(Identifier::from_token(token));
            if self.lexer.peek_token()?.kind == TokenKind::Comma {
                self.lexer.next_token()?;
            } else {
                break;
            }
        }
        self.expect_peek(TokenKind::RParen)?;

        Ok(parameters)
    }

    fn parse_call_expression(&mut self, function: Expr, token: Token) -> Result<Expr, ParseError> {
        let arguments = self.parse_call_arguments()?;

        Ok(Expr::Call {
            token,
            function: Box::new(function),
            arguments,
        })
    }

    fn parse_call_arguments(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut arguments = Vec::new();

        while self.lexer.peek_token()?.kind != TokenKind::RParen {
            let token = self.lexer.next_token()?;
            arguments.push(self.parse_expression(token, Precedence::Lowest)?);
            if self.lexer.peek_token()?.kind == TokenKind::Comma {
                self.lexer.next_token()?;
            } else {
                break;
            }
        }
        self.expect_peek(TokenKind::RParen)?;

        Ok(arguments)
    }

    // EOF ends the loop too, so an unbalanced `{` reports a missing `}`
    // instead of spinning forever.
    fn parse_block_statement(&mut self, token: Token) -> Result<Block, ParseError> {
        let mut statements = Vec::new();

        loop {
            let peek = self.lexer.peek_token()?;
            if peek.kind == TokenKind::RBrace || peek.kind == TokenKind::EOF {
                break;
            }
            let stmt_token = self.lexer.next_token()?;
            statements.push(self.parse_statement(stmt_token)?);
        }
        self.expect_peek(TokenKind::RBrace)?;

        Ok(Block { token, statements })
    }

    /// Checks the peeked kind without consuming anything, so a failed
    /// expectation leaves the lexer where it was.
    fn assert_peek(&mut self, expected: TokenKind) -> Result<(), ParseError> {
        let peek = self.lexer.peek_token()?;
        if peek.kind == expected {
            Ok(())
        } else {
            Err(ParseError::ExpectedToken {
                expected,
                got: peek.kind,
                loc: self.location(),
            })
        }
    }

    fn expect_peek(&mut self, expected: TokenKind) -> Result<Token, ParseError> {
        self.assert_peek(expected)?;
        Ok(self.lexer.next_token()?)
    }

    fn location(&self) -> Location {
        Location {
            filename: self.lexer.filename().to_string(),
            line: self.lexer.line(),
            column: self.lexer.column(),
        }
    }
}
