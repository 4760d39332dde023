use tracing::trace;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{evaluator::scalar::eval_scalar_op, value::Number},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression and returns the resulting number.
///
/// Operators are applied in textual order: for every `BinaryOp` the left
/// operand is evaluated first, then the right one, then the operator.
///
/// # Errors
/// Returns `RuntimeError::DivisionByZero` or `RuntimeError::Overflow` from the
/// first operation that fails.
///
/// # Example
/// ```
/// use reckon::{Number, interpreter::evaluator::core::evaluate, parse};
///
/// let expr = parse("8 - 3 - 2", false).unwrap();
/// assert_eq!(evaluate(&expr).unwrap(), Number::Integer(3));
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<Number> {
    match expr {
        Expr::Literal { value, .. } => Ok(Number::Integer(*value)),
        Expr::BinaryOp { op,
                         left,
                         right,
                         position, } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            let result = eval_scalar_op(*op, left, right, *position)?;
            trace!(%left, %op, %right, %result, "applied operator");
            Ok(result)
        },
    }
}
