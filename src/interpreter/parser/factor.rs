use crate::{
    ast::Expr,
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a factor: a number literal or a parenthesized expression.
    ///
    /// The rule is: `factor := NUMBER | "(" expression ")"`
    ///
    /// # Errors
    /// - `SyntaxError::ExpectedFactor` if the lookahead is neither a number
    ///   nor `(`. This includes the end of input, as in `1 +`.
    /// - `SyntaxError::UnexpectedToken` if a `)` is missing.
    /// - Any lexical error raised while fetching tokens.
    pub fn factor(&mut self) -> ParseResult<Expr> {
        let position = self.position();
        match self.current() {
            Token::Number(value) => {
                self.eat(TokenKind::Number)?;
                Ok(Expr::Literal { value, position })
            },
            Token::LParen => {
                self.eat(TokenKind::LParen)?;
                let inner = self.expression()?;
                self.eat(TokenKind::RParen)?;
                Ok(inner)
            },
            other => Err(SyntaxError::ExpectedFactor { found: other.kind(),
                                                       position }.into()),
        }
    }
}
