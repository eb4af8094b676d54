use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::parser::core::{ParseResult, Parser},
};

impl Parser<'_> {
    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`, so `10 - 2 - 3`
    /// is parsed as `(10 - 2) - 3`.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    ///
    /// # Returns
    /// An `Expr::BinaryOp` tree representing the parsed expression.
    pub(in crate::interpreter::parser) fn parse_additive(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_multiplicative()?;
        while let Some(op) = self.peek_operator(&[BinaryOperator::Add, BinaryOperator::Sub]) {
            let position = self.eat(&op.token())?.position();
            let right = self.parse_multiplicative()?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
        }
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative operators `*` and `/`. Binding tighter than
    /// the additive level is what makes `2 + 3 * 4` evaluate to `14`.
    ///
    /// The rule is: `multiplicative := primary (("*" | "/") primary)*`
    ///
    /// # Returns
    /// A binary expression tree combining primary nodes.
    pub(in crate::interpreter::parser) fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_primary()?;
        while let Some(op) = self.peek_operator(&[BinaryOperator::Mul, BinaryOperator::Div]) {
            let position = self.eat(&op.token())?.position();
            let right = self.parse_primary()?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
        }
        Ok(left)
    }

    /// Returns the operator of the current token if it is one of `allowed`.
    fn peek_operator(&self, allowed: &[BinaryOperator]) -> Option<BinaryOperator> {
        BinaryOperator::from_token(&self.current().kind).filter(|op| allowed.contains(op))
    }
}
