#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing source text.
pub enum LexicalError {
    /// Found a character that does not start any token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source.
        position:  usize,
    },
    /// An integer literal does not fit in a signed 64-bit integer.
    LiteralTooLarge {
        /// The literal as written in the source.
        literal:  String,
        /// Byte offset where the literal starts.
        position: usize,
    },
}

impl LexicalError {
    /// Byte offset in the source where the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. } | Self::LiteralTooLarge { position, .. } => {
                *position
            },
        }
    }
}

impl std::fmt::Display for LexicalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, position } => {
                write!(f, "Error at position {position}: Unknown character '{character}'.")
            },
            Self::LiteralTooLarge { literal, position } => {
                write!(f, "Error at position {position}: Literal {literal} is too large.")
            },
        }
    }
}

impl std::error::Error for LexicalError {}
