/// Core evaluation logic.
///
/// Contains the `Interpreter` type, the `interpret` entry point and the
/// recursive walk over the syntax tree.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the four arithmetic operators, integer/real promotion,
/// checked integer arithmetic and the division-by-zero check.
pub mod binary;
