use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`.
    ///
    /// The rule is: `expression := term (("+" | "-") term)*`
    ///
    /// # Returns
    /// An `Expr::BinaryOp` tree, nested to the left.
    ///
    /// # Errors
    /// Returns the first lexical or syntax error from the operands.
    pub fn expression(&mut self) -> ParseResult<Expr> {
        let mut left = self.term()?;
        while let Some(op) = token_to_binary_operator(self.current())
              && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let position = self.position();
            self.eat(self.current().kind())?;
            let right = self.term()?;
            left = Expr::BinaryOp { op,
                                    left: Box::new(left),
                                    right: Box::new(right),
                                    position };
        }
        Ok(left)
    }

    /// Parses multiplication and division expressions.
    ///
    /// Handles left-associative binary operators: `*` and `/`.
    ///
    /// The rule is: `term := factor (("*" | "/") factor)*`
    ///
    /// # Returns
    /// A binary expression tree combining factor-level nodes.
    ///
    /// # Errors
    /// Returns the first lexical or syntax error from the operands.
    pub fn term(&mut self) -> ParseResult<Expr> {
        let mut left = self.factor()?;
        while let Some(op) = token_to_binary_operator(self.current())
              && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let position = self.position();
            self.eat(self.current().kind())?;
            let right = self.factor()?;
            left = Expr::BinaryOp { op,
                                    left: Box::new(left),
                                    right: Box::new(right),
                                    position };
        }
        Ok(left)
    }
}

/// Maps a token to its corresponding binary operator.
///
/// # Returns
/// `Some(BinaryOperator)` for `+`, `-`, `*` and `/`, otherwise `None`.
///
/// # Example
/// ```
/// use reckon::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(Token::Star), Some(BinaryOperator::Mul));
/// assert_eq!(token_to_binary_operator(Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
