use crate::{error::LexicalError, interpreter::lexer::TokenKind};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// The lexer failed while the parser was pulling the next token.
    Lexical(LexicalError),
    /// Found a token that the grammar does not allow at this position.
    UnexpectedToken {
        /// Description of what the grammar required.
        expected: String,
        /// The token encountered.
        found:    TokenKind,
        /// Byte offset of the token in the source.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    TrailingTokens {
        /// The first extra token.
        found:    TokenKind,
        /// Byte offset of the token in the source.
        position: usize,
    },
}

impl From<LexicalError> for ParseError {
    fn from(e: LexicalError) -> Self {
        Self::Lexical(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexical(e) => write!(f, "{e}"),

            Self::UnexpectedToken { expected,
                                    found: TokenKind::Eof,
                                    position, } => write!(f,
                                                          "Error at position {position}: Syntax error: expected {expected}, but the input ended."),

            Self::UnexpectedToken { expected,
                                    found,
                                    position, } => write!(f,
                                                          "Error at position {position}: Syntax error: expected {expected}, found '{found}'."),

            Self::TrailingTokens { found, position } => write!(f,
                                                               "Error at position {position}: Syntax error: extra tokens after expression, starting at '{found}'."),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lexical(e) => Some(e),
            _ => None,
        }
    }
}
