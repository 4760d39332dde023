use logos::Logos;
use tracing::trace;

use crate::error::LexError;

/// Result type used by the tokenizer.
pub type LexResult<T> = Result<T, LexError>;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Whitespace is skipped and never produces a token.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(error = LexFault)]
#[logos(skip r"\s+")]
pub enum Token {
    /// Integer literal tokens, such as `42`. No sign, decimal point or
    /// exponent is part of a literal.
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// End of input. Never matched by the generated lexer; [`Lexer`] produces
    /// it once the source is exhausted.
    End,
}

/// The kind of a [`Token`], without its payload.
///
/// Used wherever a token has to be named rather than carried, most notably in
/// syntax errors.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// An integer literal.
    Number,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End of input.
    End,
}

impl Token {
    /// Returns the payload-free kind of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Number(_) => TokenKind::Number,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Star,
            Self::Slash => TokenKind::Slash,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::End => TokenKind::End,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number => write!(f, "a number"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::End => write!(f, "end of input"),
        }
    }
}

/// Failure reported by the generated lexer before a source position is
/// attached to it. [`Lexer`] turns it into a [`LexError`].
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub enum LexFault {
    /// No token starts with the current character.
    #[default]
    Unrecognized,
    /// A digit run that does not fit in an `i64`.
    IntegerTooLarge,
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Ok(i64)`: The parsed value.
/// - `Err(LexFault::IntegerTooLarge)`: The digits overflow an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexFault> {
    lex.slice().parse().map_err(|_| LexFault::IntegerTooLarge)
}

/// Produces tokens from a source string one at a time, on demand.
///
/// The cursor only ever moves forward. Once the input is exhausted every
/// further call to [`Lexer::next_token`] returns [`Token::End`].
pub struct Lexer<'source> {
    inner:     logos::Lexer<'source, Token>,
    position:  usize,
    exhausted: bool,
}

impl<'source> Lexer<'source> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { inner:     Token::lexer(source),
               position:  0,
               exhausted: false, }
    }

    /// Returns the next token.
    ///
    /// # Errors
    /// Returns a [`LexError`] when the next significant character cannot start
    /// a token, or when a number literal does not fit in an `i64`. Nothing
    /// past the offending character is inspected.
    pub fn next_token(&mut self) -> LexResult<Token> {
        if self.exhausted {
            return Ok(Token::End);
        }

        match self.inner.next() {
            Some(Ok(token)) => {
                self.position = self.inner.span().start;
                trace!(?token, position = self.position, "lexed token");
                Ok(token)
            },
            Some(Err(fault)) => {
                let start = self.inner.span().start;
                self.position = start;
                Err(match fault {
                    LexFault::Unrecognized => {
                        let character = self.inner.source()[start..].chars()
                                                                     .next()
                                                                     .unwrap_or(char::REPLACEMENT_CHARACTER);
                        LexError::InvalidCharacter { character,
                                                     position: start }
                    },
                    LexFault::IntegerTooLarge => {
                        LexError::IntegerTooLarge { literal:  self.inner.slice().to_string(),
                                                    position: start, }
                    },
                })
            },
            None => {
                self.exhausted = true;
                self.position = self.inner.source().len();
                trace!(position = self.position, "reached end of input");
                Ok(Token::End)
            },
        }
    }

    /// Byte offset at which the most recently returned token starts.
    ///
    /// For [`Token::End`] this is the length of the source.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }
}

/// Tokenizes a whole source string.
///
/// The returned tokens stop before [`Token::End`].
///
/// # Errors
/// Returns the first [`LexError`] encountered.
///
/// # Example
/// ```
/// use reckon::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("(12 + 3)").unwrap();
/// assert_eq!(tokens,
///            vec![Token::LParen, Token::Number(12), Token::Plus, Token::Number(3), Token::RParen]);
///
/// assert!(tokenize("1 ? 2").is_err());
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        match lexer.next_token()? {
            Token::End => break,
            token => tokens.push(token),
        }
    }

    Ok(tokens)
}
