#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// Byte offset of the `/` operator.
        position: usize,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// Byte offset of the operator.
        position: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position } => {
                write!(f, "Division by zero at offset {position}.")
            },
            Self::Overflow { position } => write!(f,
                                                  "Integer overflow at offset {position} while trying to compute result."),
        }
    }
}

impl std::error::Error for RuntimeError {}
