use crate::interpreter::lexer::TokenKind;

/// An abstract syntax tree (AST) node representing an expression.
///
/// The tree is built bottom-up by the parser and is never mutated afterwards.
/// Parentheses do not appear in it; they only decide how the tree is shaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Number {
        /// The literal value.
        value:    i64,
        /// Byte offset of the literal in the source.
        position: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator in the source.
        position: usize,
    },
}

impl Expr {
    /// Byte offset associated with this node: the literal for numbers, the
    /// operator for binary operations.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Number { position, .. } | Self::BinaryOp { position, .. } => *position,
        }
    }
}

/// Tears the tree down with an explicit stack so a long operator chain does
/// not recurse once per node.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        detach_children(self, &mut stack);

        while let Some(mut node) = stack.pop() {
            detach_children(&mut node, &mut stack);
        }
    }
}

/// Moves the children of a binary node onto `stack`, leaving leaf
/// placeholders behind.
fn detach_children(expr: &mut Expr, stack: &mut Vec<Box<Expr>>) {
    if let Expr::BinaryOp { left, right, .. } = expr {
        for child in [left, right] {
            if matches!(**child, Expr::BinaryOp { .. }) {
                stack.push(std::mem::replace(child,
                                             Box::new(Expr::Number { value:    0,
                                                                     position: 0, })));
            }
        }
    }
}

/// Renders the tree fully parenthesized, which makes the grouping chosen by
/// the parser visible.
///
/// # Example
/// ```
/// use arithmo::interpreter::{lexer::Lexer, parser::core::Parser};
///
/// let tree = Parser::new(Lexer::new("1 + 2 * 3")).unwrap().parse().unwrap();
/// assert_eq!(tree.to_string(), "(1 + (2 * 3))");
/// ```
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
        }
    }
}

/// The four arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Maps a token to its corresponding binary operator, or `None` if the
    /// token is not an operator.
    ///
    /// # Example
    /// ```
    /// use arithmo::{ast::BinaryOperator, interpreter::lexer::TokenKind};
    ///
    /// assert_eq!(BinaryOperator::from_token(&TokenKind::Star), Some(BinaryOperator::Mul));
    /// assert_eq!(BinaryOperator::from_token(&TokenKind::LParen), None);
    /// ```
    #[must_use]
    pub const fn from_token(token: &TokenKind) -> Option<Self> {
        match token {
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Sub),
            TokenKind::Star => Some(Self::Mul),
            TokenKind::Slash => Some(Self::Div),
            _ => None,
        }
    }

    /// The token this operator is written as.
    #[must_use]
    pub const fn token(self) -> TokenKind {
        match self {
            Self::Add => TokenKind::Plus,
            Self::Sub => TokenKind::Minus,
            Self::Mul => TokenKind::Star,
            Self::Div => TokenKind::Slash,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}
