#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenization.
pub enum LexError {
    /// Found a character that cannot start any token.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source.
        position:  usize,
    },
    /// A run of digits is too large to be stored in an `i64`.
    IntegerTooLarge {
        /// The digits as written in the source.
        literal:  String,
        /// Byte offset of the first digit in the source.
        position: usize,
    },
}

impl LexError {
    /// Byte offset in the source at which the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidCharacter { position, .. } | Self::IntegerTooLarge { position, .. } => {
                *position
            },
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, position } => {
                write!(f, "Invalid character '{character}' at offset {position}.")
            },
            Self::IntegerTooLarge { literal, position } => write!(f,
                                                                  "Integer literal {literal} at offset {position} is too large."),
        }
    }
}

impl std::error::Error for LexError {}
