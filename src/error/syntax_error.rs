use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing the token stream.
pub enum SyntaxError {
    /// The lookahead token was not the one the grammar required.
    UnexpectedToken {
        /// The kind the parser tried to eat.
        expected: TokenKind,
        /// The kind actually found.
        found:    TokenKind,
        /// Byte offset of the found token.
        position: usize,
    },
    /// No factor (a number or a parenthesized expression) can start with the
    /// lookahead token.
    ExpectedFactor {
        /// The kind actually found.
        found:    TokenKind,
        /// Byte offset of the found token.
        position: usize,
    },
    /// Tokens remain after a complete expression. Only raised in strict mode.
    TrailingInput {
        /// The first unconsumed token.
        found:    TokenKind,
        /// Byte offset of the unconsumed token.
        position: usize,
    },
}

impl SyntaxError {
    /// Byte offset in the source of the token that caused the error.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::ExpectedFactor { position, .. }
            | Self::TrailingInput { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    position, } => {
                write!(f, "Expected {expected} but found {found} at offset {position}.")
            },
            Self::ExpectedFactor { found, position } => write!(f,
                                                               "Expected a number or '(' but found {found} at offset {position}."),
            Self::TrailingInput { found, position } => write!(f,
                                                              "Extra tokens after expression, starting with {found} at offset {position}."),
        }
    }
}

impl std::error::Error for SyntaxError {}
