use std::ops::Range;

use logos::Logos;

use crate::error::LexicalError;

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexicalError>;

/// The kind of a lexical token, with its payload where it has one.
///
/// Every variant except [`TokenKind::Eof`] is recognized by the generated
/// `logos` lexer. `Eof` is never matched against the input; the [`Lexer`]
/// wrapper produces it once the input is exhausted.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"\s+")]
pub enum TokenKind {
    /// Integer literal tokens, such as `42` or `007`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
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
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Returns `true` if both kinds are the same variant, ignoring any
    /// payload.
    ///
    /// # Example
    /// ```
    /// use arithmo::interpreter::lexer::TokenKind;
    ///
    /// assert!(TokenKind::Integer(1).same_kind(&TokenKind::Integer(2)));
    /// assert!(!TokenKind::Plus.same_kind(&TokenKind::Minus));
    /// ```
    #[must_use]
    pub fn same_kind(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

/// A token together with the byte range it was read from.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    /// What was recognized.
    pub kind: TokenKind,
    /// Byte range of the token in the source. Empty for `Eof`.
    pub span: Range<usize>,
}

impl Token {
    /// Byte offset where the token starts.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.span.start
    }
}

/// Pull-based lexer over a borrowed source string.
///
/// Each call to [`Lexer::next_token`] classifies exactly one token. Once the
/// input is exhausted every further call returns `Eof` again. The cursor never
/// moves backwards.
///
/// # Example
/// ```
/// use arithmo::interpreter::lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("12 + 3");
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Integer(12));
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Plus);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Integer(3));
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
/// ```
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: TokenKind::lexer(source) }
    }

    /// Byte offset of the cursor: the end of the last token read, or `0`
    /// before the first pull.
    #[must_use]
    pub fn position(&self) -> usize {
        self.inner.span().end
    }

    /// Reads the next token.
    ///
    /// # Errors
    /// - `LexicalError::UnexpectedCharacter` if the input at the cursor does
    ///   not start any token.
    /// - `LexicalError::LiteralTooLarge` if a digit run does not fit in an
    ///   `i64`.
    ///
    /// The lexer must not be used again after an error.
    pub fn next_token(&mut self) -> LexResult<Token> {
        match self.inner.next() {
            Some(Ok(kind)) => Ok(Token { kind,
                                         span: self.inner.span() }),
            Some(Err(())) => Err(self.error_at_cursor()),
            None => {
                let end = self.inner.source().len();
                Ok(Token { kind: TokenKind::Eof,
                           span: end..end })
            },
        }
    }

    /// Builds the error for the slice `logos` just rejected.
    ///
    /// A rejected digit run can only mean the integer callback refused it.
    fn error_at_cursor(&self) -> LexicalError {
        let slice = self.inner.slice();
        let position = self.inner.span().start;

        match slice.chars().next() {
            Some(c) if c.is_ascii_digit() => {
                LexicalError::LiteralTooLarge { literal: slice.to_string(),
                                                position }
            },
            Some(character) => LexicalError::UnexpectedCharacter { character, position },
            None => LexicalError::UnexpectedCharacter { character: char::REPLACEMENT_CHARACTER,
                                                        position },
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed value.
/// - `None`: If the digit run does not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<TokenKind>) -> Option<i64> {
    lex.slice().parse().ok()
}
