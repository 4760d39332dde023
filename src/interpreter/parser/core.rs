use tracing::{debug, trace, warn};

use crate::{
    ast::Expr,
    error::{Error, SyntaxError},
    interpreter::{
        evaluator::core::evaluate,
        lexer::{Lexer, Token, TokenKind},
        value::Number,
    },
};

pub type ParseResult<T> = Result<T, Error>;

/// A recursive-descent parser over a lazily tokenized source.
///
/// The parser holds exactly one lookahead token and pulls the next one from
/// its [`Lexer`] only when the current one is eaten. It never looks further
/// ahead than that.
///
/// Recursion depth follows parenthesis depth, so pathologically deep nesting
/// can exhaust the call stack.
pub struct Parser<'source> {
    lexer:    Lexer<'source>,
    current:  Token,
    position: usize,
}

impl<'source> Parser<'source> {
    /// Creates a parser for `source` and primes its lookahead.
    ///
    /// # Errors
    /// Returns a lexical error if the first significant character is invalid.
    pub fn new(source: &'source str) -> ParseResult<Self> {
        Self::from_lexer(Lexer::new(source))
    }

    /// Creates a parser reading from an existing lexer and primes its
    /// lookahead.
    ///
    /// # Errors
    /// Returns a lexical error if the lexer fails on its first token.
    pub fn from_lexer(mut lexer: Lexer<'source>) -> ParseResult<Self> {
        let current = lexer.next_token()?;
        let position = lexer.position();
        Ok(Self { lexer,
                  current,
                  position })
    }

    /// The current lookahead token.
    #[must_use]
    pub const fn current(&self) -> Token {
        self.current
    }

    /// Byte offset of the current lookahead token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Consumes the lookahead if it has the `expected` kind and fetches the
    /// next token.
    ///
    /// This is the only place where an expected kind is checked against the
    /// actual one.
    ///
    /// # Returns
    /// The consumed token.
    ///
    /// # Errors
    /// - `SyntaxError::UnexpectedToken` if the kinds differ.
    /// - Any lexical error raised while fetching the next token.
    pub fn eat(&mut self, expected: TokenKind) -> ParseResult<Token> {
        let found = self.current.kind();
        if found != expected {
            return Err(SyntaxError::UnexpectedToken { expected,
                                                      found,
                                                      position: self.position }.into());
        }

        trace!(token = ?self.current, position = self.position, "eat");
        let next = self.lexer.next_token()?;
        self.position = self.lexer.position();
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Parses one top-level expression.
    ///
    /// Tokens left after a complete expression are not consumed and not
    /// rejected: `2 + 2 )` parses as `2 + 2`. Use [`Parser::parse_complete`]
    /// to reject them.
    ///
    /// # Errors
    /// Returns the first lexical or syntax error encountered.
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        let expr = self.expression()?;
        if self.current != Token::End {
            warn!(token = ?self.current, position = self.position, "ignoring trailing input");
        }
        debug!(%expr, "parsed expression");
        Ok(expr)
    }

    /// Parses one top-level expression and requires the input to end there.
    ///
    /// # Errors
    /// Returns `SyntaxError::TrailingInput` if any token follows the
    /// expression, or the first lexical or syntax error encountered before
    /// that.
    pub fn parse_complete(&mut self) -> ParseResult<Expr> {
        let expr = self.expression()?;
        if self.current != Token::End {
            return Err(SyntaxError::TrailingInput { found:    self.current.kind(),
                                                    position: self.position, }.into());
        }
        debug!(%expr, "parsed complete expression");
        Ok(expr)
    }

    /// Parses one top-level expression and evaluates it.
    ///
    /// Trailing input is handled as in [`Parser::parse_expression`].
    ///
    /// # Errors
    /// Returns any lexical, syntax or runtime error.
    pub fn parse_and_evaluate(&mut self) -> ParseResult<Number> {
        let expr = self.parse_expression()?;
        Ok(evaluate(&expr)?)
    }
}
