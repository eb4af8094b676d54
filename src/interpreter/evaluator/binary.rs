use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// Two integers stay integers for `+`, `-` and `*`, with overflow
    /// reported instead of wrapped. If either side is real, both are
    /// converted to real first, rounding integers beyond `2^53`. Division
    /// checks the right operand for zero before dividing and always produces
    /// a real.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Source position of the operator, for error reporting.
    ///
    /// # Errors
    /// - `RuntimeError::DivisionByZero` if `op` is `/` and `right` is zero.
    /// - `RuntimeError::Overflow` if integer arithmetic overflows.
    ///
    /// # Example
    /// ```
    /// use arithmo::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let sum = Interpreter::eval_binary(BinaryOperator::Add, Value::Integer(3), Value::Integer(4), 0);
    /// assert_eq!(sum.unwrap(), Value::Integer(7));
    ///
    /// let quotient = Interpreter::eval_binary(BinaryOperator::Div, Value::Integer(7), Value::Integer(2), 0);
    /// assert_eq!(quotient.unwrap(), Value::Real(3.5));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: Value,
                       right: Value,
                       position: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Value::{Integer, Real};

        match (op, left, right) {
            (Div, _, right) if right.is_zero() => Err(RuntimeError::DivisionByZero { position }),
            (Div, left, right) => Ok(Real(left.to_f64() / right.to_f64())),

            (_, Integer(a), Integer(b)) => {
                let result = match op {
                    Add => a.checked_add(b),
                    Sub => a.checked_sub(b),
                    Mul => a.checked_mul(b),
                    Div => unreachable!(),
                };
                result.map(Integer).ok_or(RuntimeError::Overflow { position })
            },

            (_, left, right) => {
                let left = left.to_f64();
                let right = right.to_f64();

                Ok(Real(match op {
                            Add => left + right,
                            Sub => left - right,
                            Mul => left * right,
                            Div => unreachable!(),
                        }))
            },
        }
    }
}
