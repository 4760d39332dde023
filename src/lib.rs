//! # reckon
//!
//! reckon evaluates single-line integer arithmetic expressions built from
//! `+`, `-`, `*`, `/` and parentheses. `*` and `/` bind tighter than `+` and
//! `-`, all four are left-associative, and `/` is always true division.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{Interpreter, parser::core::Parser};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and `BinaryOperator`, which represent
/// an expression as a tree. The tree is built by the parser and folded by the
/// evaluator.
pub mod ast;
/// Provides error types for lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Defines one error enum per stage, each carrying the source offset.
/// - Wraps them in a single `Error` so they propagate through `?`.
pub mod error;
/// Orchestrates tokenizing, parsing and evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator and value types.
/// - Provides the `Interpreter` driver.
pub mod interpreter;

pub use error::Error;
pub use interpreter::value::Number;

/// Parses and evaluates an expression.
///
/// With `strict` unset, tokens after a complete expression are ignored, so
/// `2 + 2 )` evaluates to `4`. With `strict` set they are a syntax error.
///
/// # Errors
/// Returns an error if tokenizing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use reckon::{Number, evaluate};
///
/// assert_eq!(evaluate("2 + 3 * 4", false).unwrap(), Number::Integer(14));
/// assert_eq!(evaluate("7 / 2", false).unwrap(), Number::Real(3.5));
///
/// assert!(evaluate("3 + a", false).is_err());
/// assert!(evaluate("2 + 2 )", true).is_err());
/// ```
pub fn evaluate(source: &str, strict: bool) -> Result<Number, Error> {
    let parser = Parser::new(source)?;
    Interpreter::new(parser).strict(strict).interpret()
}

/// Parses an expression into a tree without evaluating it.
///
/// `strict` has the same meaning as in [`evaluate`].
///
/// # Errors
/// Returns a lexical or syntax error.
///
/// # Examples
/// ```
/// use reckon::parse;
///
/// let expr = parse("1 + 2 * 3", false).unwrap();
/// assert_eq!(expr.to_string(), "(1 + (2 * 3))");
/// ```
pub fn parse(source: &str, strict: bool) -> Result<ast::Expr, Error> {
    let mut parser = Parser::new(source)?;
    if strict {
        parser.parse_complete()
    } else {
        parser.parse_expression()
    }
}
