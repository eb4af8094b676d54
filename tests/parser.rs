use arithmo::{
    ast::{BinaryOperator, Expr},
    error::{LexicalError, ParseError},
    interpreter::{
        lexer::{Lexer, TokenKind},
        parser::core::Parser,
    },
};

fn parse(src: &str) -> Result<Expr, ParseError> {
    Parser::new(Lexer::new(src))?.parse()
}

fn shape(src: &str) -> String {
    match parse(src) {
        Ok(tree) => tree.to_string(),
        Err(e) => panic!("Expression {src:?} failed to parse: {e}"),
    }
}

#[test]
fn number_node() {
    assert_eq!(parse("42").unwrap(),
               Expr::Number { value:    42,
                              position: 0, });
}

#[test]
fn binary_node_records_operator_position() {
    assert_eq!(parse("1 - 2").unwrap(),
               Expr::BinaryOp { left:     Box::new(Expr::Number { value:    1,
                                                                  position: 0, }),
                                op:       BinaryOperator::Sub,
                                right:    Box::new(Expr::Number { value:    2,
                                                                  position: 4, }),
                                position: 2, });
}

#[test]
fn multiplication_binds_tighter() {
    assert_eq!(shape("2+3*4"), "(2 + (3 * 4))");
    assert_eq!(shape("2*3+4"), "((2 * 3) + 4)");
    assert_eq!(shape("1-6/3"), "(1 - (6 / 3))");
}

#[test]
fn same_level_operators_fold_left() {
    assert_eq!(shape("10-2-3"), "((10 - 2) - 3)");
    assert_eq!(shape("1+2-3+4"), "(((1 + 2) - 3) + 4)");
    assert_eq!(shape("8/4*2/1"), "(((8 / 4) * 2) / 1)");
}

#[test]
fn parentheses_leave_no_node() {
    assert_eq!(parse("(((5)))").unwrap(),
               Expr::Number { value:    5,
                              position: 3, });
    assert_eq!(shape("(2+3)*4"), "((2 + 3) * 4)");
    assert_eq!(shape("2-(3-4)"), "(2 - (3 - 4))");
}

#[test]
fn positions_point_into_the_source() {
    let tree = parse("(1 + 2) * 3").unwrap();
    assert_eq!(tree.position(), 8);
    let Expr::BinaryOp { left, right, .. } = &tree else {
        panic!("Expected a binary operation");
    };
    assert_eq!(left.position(), 3);
    assert_eq!(right.position(), 10);
}

#[test]
fn unbalanced_parentheses() {
    assert_eq!(parse("(2+3"),
               Err(ParseError::UnexpectedToken { expected: "')'".to_string(),
                                                 found:    TokenKind::Eof,
                                                 position: 4, }));
    assert_eq!(parse("((1)"),
               Err(ParseError::UnexpectedToken { expected: "')'".to_string(),
                                                 found:    TokenKind::Eof,
                                                 position: 4, }));
    assert_eq!(parse("1)"),
               Err(ParseError::TrailingTokens { found:    TokenKind::RParen,
                                                position: 1, }));
}

#[test]
fn trailing_tokens() {
    assert_eq!(parse("2 3"),
               Err(ParseError::TrailingTokens { found:    TokenKind::Integer(3),
                                                position: 2, }));
    assert_eq!(parse("(1)(2)"),
               Err(ParseError::TrailingTokens { found:    TokenKind::LParen,
                                                position: 3, }));
}

#[test]
fn missing_operand() {
    assert_eq!(parse("1 * + 2"),
               Err(ParseError::UnexpectedToken { expected: "an integer or '('".to_string(),
                                                 found:    TokenKind::Plus,
                                                 position: 4, }));
    assert_eq!(parse("(2 3)"),
               Err(ParseError::UnexpectedToken { expected: "')'".to_string(),
                                                 found:    TokenKind::Integer(3),
                                                 position: 3, }));
}

#[test]
fn lexical_errors_pass_through() {
    assert_eq!(parse("1 + #"),
               Err(ParseError::Lexical(LexicalError::UnexpectedCharacter { character: '#',
                                                                           position:  4, })));
    assert!(matches!(Parser::new(Lexer::new("&")),
                     Err(ParseError::Lexical(LexicalError::UnexpectedCharacter { character: '&',
                                                                                 .. }))));
}

#[test]
fn lexing_stops_at_the_first_syntax_error() {
    // The unknown character after the error is never reached.
    assert!(matches!(parse("1 2 @"), Err(ParseError::TrailingTokens { .. })));
}

#[test]
fn deep_nesting() {
    let depth = 200;
    let src = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(parse(&src).unwrap(),
               Expr::Number { value:    1,
                              position: depth, });
}
