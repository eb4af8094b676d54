use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::lexer::{Lexer, Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser with one token of lookahead.
///
/// The parser owns its lexer and pulls tokens from it lazily, one per
/// [`Parser::eat`]. The buffered `current` token is always the next token not
/// yet consumed.
///
/// Grammar, from lowest to highest precedence:
/// ```text
/// expression     := additive
/// additive       := multiplicative (("+" | "-") multiplicative)*
/// multiplicative := primary (("*" | "/") primary)*
/// primary        := INTEGER | "(" expression ")"
/// ```
pub struct Parser<'src> {
    lexer:   Lexer<'src>,
    current: Token,
}

impl<'src> Parser<'src> {
    /// Creates a parser and reads the first token.
    ///
    /// # Errors
    /// Returns `ParseError::Lexical` if the first token cannot be read.
    pub fn new(mut lexer: Lexer<'src>) -> ParseResult<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parses a complete expression and returns the root of its tree.
    ///
    /// The whole input must be consumed: anything left after a complete
    /// expression is an error.
    ///
    /// # Errors
    /// - `ParseError::UnexpectedToken` if the tokens do not match the grammar.
    /// - `ParseError::TrailingTokens` if input remains after the expression.
    /// - `ParseError::Lexical` if the lexer fails.
    ///
    /// # Example
    /// ```
    /// use arithmo::{
    ///     error::ParseError,
    ///     interpreter::{lexer::Lexer, parser::core::Parser},
    /// };
    ///
    /// let tree = Parser::new(Lexer::new("10 - 2 - 3")).unwrap().parse().unwrap();
    /// assert_eq!(tree.to_string(), "((10 - 2) - 3)");
    ///
    /// let err = Parser::new(Lexer::new("2 + 2)")).unwrap().parse().unwrap_err();
    /// assert!(matches!(err, ParseError::TrailingTokens { position: 5, .. }));
    /// ```
    pub fn parse(mut self) -> ParseResult<Expr> {
        let expr = self.parse_expression()?;

        if self.current.kind != TokenKind::Eof {
            return Err(ParseError::TrailingTokens { found:    self.current.kind,
                                                    position: self.current.position(), });
        }

        Ok(expr)
    }

    /// Parses an expression starting at the current token.
    ///
    /// Entry point of the precedence hierarchy; also used for the inside of
    /// parentheses.
    pub(in crate::interpreter::parser) fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_additive()
    }

    /// The token that will be consumed next.
    pub(in crate::interpreter::parser) const fn current(&self) -> &Token {
        &self.current
    }

    /// Consumes the current token if it is of the `expected` kind and pulls
    /// the next one from the lexer.
    ///
    /// Only the variant is compared; the payload of `expected` is ignored.
    /// Returns the consumed token.
    ///
    /// # Errors
    /// - `ParseError::UnexpectedToken` if the current token is of another
    ///   kind.
    /// - `ParseError::Lexical` if the next token cannot be read.
    pub(in crate::interpreter::parser) fn eat(&mut self, expected: &TokenKind) -> ParseResult<Token> {
        if !self.current.kind.same_kind(expected) {
            let expected = match expected {
                TokenKind::Integer(_) => "an integer".to_string(),
                other => format!("'{other}'"),
            };
            return Err(ParseError::UnexpectedToken { expected,
                                                     found: self.current.kind,
                                                     position: self.current.position() });
        }

        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }
}
