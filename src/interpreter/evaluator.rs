/// Core evaluation logic.
///
/// Walks an expression tree, left operand first, and folds it into a number.
pub mod core;

/// Scalar arithmetic.
///
/// Applies one binary operator to two numbers, with integer overflow and
/// division by zero checks.
pub mod scalar;
