use tracing::debug;

use crate::{
    error::Error,
    interpreter::{evaluator::core::evaluate, parser::core::Parser, value::Number},
};

/// The evaluator module folds expression trees into numbers.
///
/// # Responsibilities
/// - Evaluates AST nodes left operand first.
/// - Reports runtime errors such as division by zero or integer overflow.
pub mod evaluator;
/// The lexer module tokenizes source text for the parser.
///
/// The lexer reads the raw source text and produces tokens on demand: number
/// literals, the four operators and parentheses. Whitespace is skipped.
///
/// # Responsibilities
/// - Converts the input characters into tokens, one call at a time.
/// - Keeps returning an end-of-input token once the source is exhausted.
/// - Reports lexical errors for characters outside the language.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens one at a time and applies a three-level
/// recursive-descent grammar (expression, term, factor).
///
/// # Responsibilities
/// - Converts tokens into `Expr` nodes with correct precedence and
///   left-associativity.
/// - Validates the grammar, reporting syntax errors with offsets.
pub mod parser;
/// The value module defines the numeric result type.
pub mod value;

/// Drives a [`Parser`] to a final number.
///
/// # Example
/// ```
/// use reckon::{
///     Number,
///     interpreter::{Interpreter, parser::core::Parser},
/// };
///
/// let parser = Parser::new("(2 + 3) * 4").unwrap();
/// let mut interpreter = Interpreter::new(parser);
/// assert_eq!(interpreter.interpret().unwrap(), Number::Integer(20));
/// ```
pub struct Interpreter<'source> {
    parser: Parser<'source>,
    strict: bool,
}

impl<'source> Interpreter<'source> {
    /// Creates an interpreter that ignores trailing input.
    #[must_use]
    pub fn new(parser: Parser<'source>) -> Self {
        Self { parser,
               strict: false }
    }

    /// Selects whether tokens after a complete expression are rejected.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Parses and evaluates the expression.
    ///
    /// # Errors
    /// Returns the first lexical, syntax or runtime error encountered.
    pub fn interpret(&mut self) -> Result<Number, Error> {
        let expr = if self.strict {
            self.parser.parse_complete()?
        } else {
            self.parser.parse_expression()?
        };
        let value = evaluate(&expr)?;
        debug!(%value, "evaluated expression");
        Ok(value)
    }
}
