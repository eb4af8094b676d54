/// The evaluator module walks the AST and computes results.
///
/// The evaluator receives the tree produced by the parser, evaluates it
/// recursively and produces a single value. It is the last stage of the
/// pipeline.
///
/// # Responsibilities
/// - Evaluates numbers and binary operations.
/// - Promotes integers to reals where an operation needs it.
/// - Reports runtime errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces tokens on demand, one per
/// call: integer literals, the four operators and parentheses, followed by an
/// end-of-input marker. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their source span.
/// - Skips whitespace.
/// - Reports lexical errors for unknown characters and oversized literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer with one token of lookahead and
/// constructs a tree that encodes operator precedence and left
/// associativity.
///
/// # Responsibilities
/// - Converts tokens into AST nodes.
/// - Validates the grammar, reporting errors with their position.
/// - Rejects input left over after a complete expression.
pub mod parser;
/// The value module defines the runtime numeric type.
///
/// Declares `Value`, which is either an integer or a real, together with the
/// checked conversion from integer to real used when the two meet.
pub mod value;
