use crate::{
    ast::Expr,
    error::{Error, RuntimeError},
    interpreter::{parser::core::Parser, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Tree-walking interpreter.
///
/// Owns the parser for one source string. It keeps no state of its own, so
/// evaluating the same text with a fresh interpreter always gives the same
/// result.
///
/// # Example
/// ```
/// use arithmo::interpreter::{
///     evaluator::core::Interpreter, lexer::Lexer, parser::core::Parser, value::Value,
/// };
///
/// let parser = Parser::new(Lexer::new("(2 + 3) * 4")).unwrap();
/// let value = Interpreter::new(parser).interpret().unwrap();
/// assert_eq!(value, Value::Integer(20));
/// ```
pub struct Interpreter<'src> {
    parser: Parser<'src>,
}

impl<'src> Interpreter<'src> {
    /// Creates an interpreter for the expression `parser` will read.
    #[must_use]
    pub const fn new(parser: Parser<'src>) -> Self {
        Self { parser }
    }

    /// Parses the expression and evaluates it.
    ///
    /// # Errors
    /// Returns the first lexical, parse or runtime error encountered. No
    /// partial result is produced.
    pub fn interpret(self) -> Result<Value, Error> {
        let tree = self.parser.parse()?;
        Ok(Self::eval(&tree)?)
    }

    /// Evaluates an expression tree and returns the resulting value.
    ///
    /// Numbers evaluate to themselves. Binary operations evaluate the left
    /// operand, then the right one, then combine them with
    /// [`Interpreter::eval_binary`].
    ///
    /// Chains like `1 + 2 + 3` grow along the left edge of the tree, so that
    /// edge is walked with a loop; only right operands recurse, and their
    /// depth is bounded by parenthesis nesting.
    ///
    /// # Errors
    /// Propagates any `RuntimeError` raised by a binary operation.
    ///
    /// # Example
    /// ```
    /// use arithmo::{
    ///     ast::{BinaryOperator, Expr},
    ///     error::RuntimeError,
    ///     interpreter::evaluator::core::Interpreter,
    /// };
    ///
    /// let tree = Expr::BinaryOp { left:     Box::new(Expr::Number { value: 5, position: 0 }),
    ///                             op:       BinaryOperator::Div,
    ///                             right:    Box::new(Expr::Number { value: 0, position: 2 }),
    ///                             position: 1, };
    ///
    /// let err = Interpreter::eval(&tree).unwrap_err();
    /// assert_eq!(err, RuntimeError::DivisionByZero { position: 1 });
    /// ```
    pub fn eval(expr: &Expr) -> EvalResult<Value> {
        let mut pending = Vec::new();
        let mut node = expr;

        let mut value = loop {
            match node {
                Expr::Number { value, .. } => break Value::Integer(*value),
                Expr::BinaryOp { left,
                                 op,
                                 right,
                                 position, } => {
                    pending.push((*op, right, *position));
                    node = left;
                },
            }
        };

        while let Some((op, right, position)) = pending.pop() {
            let right = Self::eval(right)?;
            value = Self::eval_binary(op, value, right, position)?;
        }

        Ok(value)
    }
}
