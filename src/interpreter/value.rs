/// Represents the result of evaluating an expression.
///
/// Literals and `+`, `-`, `*` on integers stay integers. Division is true
/// division and always yields a real, and any operation with a real operand
/// yields a real.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Real(f64),
    /// A integer value (64 bit integer).
    Integer(i64),
}

impl Value {
    /// Converts the value to an `f64`.
    ///
    /// Integers beyond `2^53` are rounded to the nearest representable real,
    /// as true division of large integers requires.
    ///
    /// # Example
    /// ```
    /// use arithmo::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(10).to_f64(), 10.0);
    /// assert_eq!(Value::Integer(9_007_199_254_740_993).to_f64(), 9_007_199_254_740_992.0);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(self) -> f64 {
        match self {
            Self::Real(r) => r,
            Self::Integer(n) => n as f64,
        }
    }

    /// Returns `true` for integer zero and for real zero of either sign.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Real(r) => *r == 0.0,
            Self::Integer(n) => *n == 0,
        }
    }
}

/// Reals always print with a fractional part, so `6 / 3` shows as `2.0`
/// while `3 * 2` shows as `6`.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{r:?}"),
            Self::Integer(n) => write!(f, "{n}"),
        }
    }
}
