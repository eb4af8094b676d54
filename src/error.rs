/// Lexical errors.
///
/// Raised by the lexer when the source text contains a character that cannot
/// start any token, or an integer literal that does not fit the integer type.
pub mod lexical_error;
/// Parsing errors.
///
/// Defines the errors raised while the parser checks the token stream against
/// the grammar: a token of the wrong kind at some position, or tokens left
/// over after a complete expression.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// division by zero or integer overflow.
pub mod runtime_error;

pub use lexical_error::LexicalError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any error produced while evaluating one expression.
///
/// Each variant wraps the error of the layer that detected the problem.
/// Lexical errors that surface through the parser are reported as
/// [`Error::Lexical`], not as parse errors.
pub enum Error {
    /// The source text could not be tokenized.
    Lexical(LexicalError),
    /// The token stream does not match the grammar.
    Parse(ParseError),
    /// The expression is well formed but could not be evaluated.
    Runtime(RuntimeError),
}

impl From<LexicalError> for Error {
    fn from(e: LexicalError) -> Self {
        Self::Lexical(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        match e {
            ParseError::Lexical(e) => Self::Lexical(e),
            e => Self::Parse(e),
        }
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
            Self::Lexical(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lexical(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
