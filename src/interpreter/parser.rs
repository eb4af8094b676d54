/// Parser state and the entry point.
///
/// Holds the `Parser` type with its owned lexer and single-token lookahead,
/// the `eat` step, and the top-level `parse` operation.
pub mod core;

/// Binary operator parsing.
///
/// Implements the left-associative precedence levels: additive (`+`, `-`) and
/// multiplicative (`*`, `/`).
pub mod binary;

/// Primary expression parsing.
///
/// Parses the operands of the binary levels: integer literals and
/// parenthesized expressions.
pub mod primary;
