use arithmo::{
    error::LexicalError,
    interpreter::lexer::{Lexer, Token, TokenKind},
};

fn kinds(src: &str) -> Result<Vec<TokenKind>, LexicalError> {
    let mut lexer = Lexer::new(src);
    let mut kinds = Vec::new();
    loop {
        let token = lexer.next_token()?;
        if token.kind == TokenKind::Eof {
            return Ok(kinds);
        }
        kinds.push(token.kind);
    }
}

#[test]
fn lex_all_token_kinds() {
    assert_eq!(kinds("12+3-4*5/(6)").unwrap(),
               vec![TokenKind::Integer(12),
                    TokenKind::Plus,
                    TokenKind::Integer(3),
                    TokenKind::Minus,
                    TokenKind::Integer(4),
                    TokenKind::Star,
                    TokenKind::Integer(5),
                    TokenKind::Slash,
                    TokenKind::LParen,
                    TokenKind::Integer(6),
                    TokenKind::RParen]);
}

#[test]
fn digit_runs_are_maximal() {
    assert_eq!(kinds("1234567").unwrap(), vec![TokenKind::Integer(1_234_567)]);
    assert_eq!(kinds("1 2").unwrap(), vec![TokenKind::Integer(1), TokenKind::Integer(2)]);
    assert_eq!(kinds("000").unwrap(), vec![TokenKind::Integer(0)]);
}

#[test]
fn whitespace_is_skipped() {
    assert_eq!(kinds(" \t 1 \n+\r\n 2 ").unwrap(),
               vec![TokenKind::Integer(1), TokenKind::Plus, TokenKind::Integer(2)]);
    assert!(kinds("").unwrap().is_empty());
    assert!(kinds("   ").unwrap().is_empty());
}

#[test]
fn tokens_record_their_span() {
    let mut lexer = Lexer::new(" 42 *(");
    assert_eq!(lexer.next_token().unwrap(),
               Token { kind: TokenKind::Integer(42),
                       span: 1..3 });
    assert_eq!(lexer.position(), 3);
    assert_eq!(lexer.next_token().unwrap(),
               Token { kind: TokenKind::Star,
                       span: 4..5 });
    assert_eq!(lexer.next_token().unwrap(),
               Token { kind: TokenKind::LParen,
                       span: 5..6 });
    assert_eq!(lexer.next_token().unwrap(),
               Token { kind: TokenKind::Eof,
                       span: 6..6 });
}

#[test]
fn eof_is_idempotent() {
    let mut lexer = Lexer::new("7");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Integer(7));

    for _ in 0..10 {
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::Eof);
        assert_eq!(token.span, 1..1);
    }
}

#[test]
fn unknown_character_is_reported() {
    assert_eq!(kinds("2+@"),
               Err(LexicalError::UnexpectedCharacter { character: '@',
                                                       position:  2, }));
    assert_eq!(kinds("abc"),
               Err(LexicalError::UnexpectedCharacter { character: 'a',
                                                       position:  0, }));
    assert!(matches!(kinds("1 % 2"),
                     Err(LexicalError::UnexpectedCharacter { character: '%', .. })));
}

#[test]
fn non_ascii_character_is_reported_whole() {
    assert_eq!(kinds("1 € 2"),
               Err(LexicalError::UnexpectedCharacter { character: '€',
                                                       position:  2, }));
}

#[test]
fn oversized_literal_is_reported() {
    let err = kinds("9223372036854775808").unwrap_err();
    assert_eq!(err,
               LexicalError::LiteralTooLarge { literal:  "9223372036854775808".to_string(),
                                               position: 0, });
    assert_eq!(err.position(), 0);

    assert_eq!(kinds("9223372036854775807").unwrap(),
               vec![TokenKind::Integer(i64::MAX)]);
}

#[test]
fn tokens_display_as_their_symbol() {
    let rendered: Vec<String> = kinds("1+2-3*4/(5)").unwrap()
                                                    .iter()
                                                    .map(ToString::to_string)
                                                    .collect();
    assert_eq!(rendered.concat(), "1+2-3*4/(5)");
    assert_eq!(TokenKind::Eof.to_string(), "end of input");
}
