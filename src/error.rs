/// Lexical errors.
///
/// Raised by the tokenizer when it reaches a character that cannot start any
/// token, or a number literal that does not fit in an `i64`.
pub mod lex_error;
/// Runtime errors.
///
/// Raised while folding an expression tree into a number: division by zero
/// and integer overflow.
pub mod runtime_error;
/// Syntax errors.
///
/// Raised by the parser when the lookahead token does not fit the grammar.
pub mod syntax_error;

pub use lex_error::LexError;
pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

/// Any error produced while turning source text into a number.
///
/// Each stage has its own error type; this enum lets them travel through `?`
/// up to the caller without being recovered along the way.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The tokenizer rejected the input.
    Lex(LexError),
    /// The parser rejected the token stream.
    Syntax(SyntaxError),
    /// The expression was well formed but could not be evaluated.
    Runtime(RuntimeError),
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<SyntaxError> for Error {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
