use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a primary expression: an integer literal or a parenthesized
    /// expression.
    ///
    /// Parentheses only group; the returned tree is the inner expression
    /// itself, with no node for the parentheses.
    ///
    /// Grammar: `primary := INTEGER | "(" expression ")"`
    ///
    /// # Errors
    /// - `ParseError::UnexpectedToken` if the current token starts neither
    ///   form, or if the closing `)` is missing.
    pub(in crate::interpreter::parser) fn parse_primary(&mut self) -> ParseResult<Expr> {
        let current = self.current().kind;
        match current {
            TokenKind::Integer(value) => {
                let position = self.eat(&TokenKind::Integer(value))?.position();
                Ok(Expr::Number { value, position })
            },
            TokenKind::LParen => {
                self.eat(&TokenKind::LParen)?;
                let expr = self.parse_expression()?;
                self.eat(&TokenKind::RParen)?;
                Ok(expr)
            },
            found => {
                Err(ParseError::UnexpectedToken { expected: "an integer or '('".to_string(),
                                                  found,
                                                  position: self.current().position() })
            },
        }
    }
}
