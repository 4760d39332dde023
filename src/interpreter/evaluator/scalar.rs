use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Number},
};

/// Evaluates a scalar arithmetic operation.
///
/// Two integers stay integers under `+`, `-` and `*`; a real operand promotes
/// the other one. Division always promotes both operands and yields a real,
/// so `7 / 2` is `3.5` and `6 / 2` is `3.0`. Promotion never fails; integers
/// beyond `2^53` are rounded.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Byte offset of the operator, for error reporting.
///
/// # Errors
/// - `RuntimeError::DivisionByZero` for a zero divisor.
/// - `RuntimeError::Overflow` if integer arithmetic overflows.
///
/// # Example
/// ```
/// use reckon::{
///     Number, ast::BinaryOperator, interpreter::evaluator::scalar::eval_scalar_op,
/// };
///
/// let x = Number::Integer(7);
/// let y = Number::Integer(2);
///
/// assert_eq!(eval_scalar_op(BinaryOperator::Div, x, y, 1).unwrap(), Number::Real(3.5));
/// assert_eq!(eval_scalar_op(BinaryOperator::Mul, x, y, 1).unwrap(), Number::Integer(14));
/// ```
pub fn eval_scalar_op(op: BinaryOperator,
                      left: Number,
                      right: Number,
                      position: usize)
                      -> EvalResult<Number> {
    match op {
        BinaryOperator::Add => integer_or_real(left, right, position, i64::checked_add, |a, b| a + b),
        BinaryOperator::Sub => integer_or_real(left, right, position, i64::checked_sub, |a, b| a - b),
        BinaryOperator::Mul => integer_or_real(left, right, position, i64::checked_mul, |a, b| a * b),
        BinaryOperator::Div => {
            let left = left.as_f64();
            let right = right.as_f64();
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero { position });
            }
            Ok(Number::Real(left / right))
        },
    }
}

fn integer_or_real(left: Number,
                   right: Number,
                   position: usize,
                   integer_op: fn(i64, i64) -> Option<i64>,
                   real_op: fn(f64, f64) -> f64)
                   -> EvalResult<Number> {
    match (left, right) {
        (Number::Integer(a), Number::Integer(b)) => {
            integer_op(a, b).map(Number::Integer)
                            .ok_or(RuntimeError::Overflow { position })
        },
        _ => Ok(Number::Real(real_op(left.as_f64(), right.as_f64()))),
    }
}
