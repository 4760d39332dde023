use reckon::{
    error::LexError,
    interpreter::lexer::{Lexer, Token, TokenKind, tokenize},
};

#[test]
fn lex_all_token_kinds() {
    let tokens = tokenize("12 + 3 - 4 * 5 / (6)").unwrap();
    assert_eq!(tokens,
               vec![Token::Number(12),
                    Token::Plus,
                    Token::Number(3),
                    Token::Minus,
                    Token::Number(4),
                    Token::Star,
                    Token::Number(5),
                    Token::Slash,
                    Token::LParen,
                    Token::Number(6),
                    Token::RParen]);
}

#[test]
fn numbers_are_maximal_digit_runs() {
    assert_eq!(tokenize("007 123456").unwrap(),
               vec![Token::Number(7), Token::Number(123_456)]);
    assert_eq!(tokenize("1 2").unwrap(), vec![Token::Number(1), Token::Number(2)]);
}

#[test]
fn end_of_input_is_idempotent() {
    let mut lexer = Lexer::new("1");
    assert_eq!(lexer.next_token(), Ok(Token::Number(1)));
    for _ in 0..5 {
        assert_eq!(lexer.next_token(), Ok(Token::End));
        assert_eq!(lexer.position(), 1);
    }
}

#[test]
fn empty_and_blank_input_is_end() {
    assert_eq!(Lexer::new("").next_token(), Ok(Token::End));

    let mut lexer = Lexer::new(" \t \n");
    assert_eq!(lexer.next_token(), Ok(Token::End));
    assert_eq!(lexer.next_token(), Ok(Token::End));
}

#[test]
fn positions_are_byte_offsets_of_token_starts() {
    let mut lexer = Lexer::new("  10 *  2");
    assert_eq!(lexer.next_token(), Ok(Token::Number(10)));
    assert_eq!(lexer.position(), 2);
    assert_eq!(lexer.next_token(), Ok(Token::Star));
    assert_eq!(lexer.position(), 5);
    assert_eq!(lexer.next_token(), Ok(Token::Number(2)));
    assert_eq!(lexer.position(), 8);
}

#[test]
fn invalid_character_stops_the_lexer() {
    let mut lexer = Lexer::new("1 + a");
    assert_eq!(lexer.next_token(), Ok(Token::Number(1)));
    assert_eq!(lexer.next_token(), Ok(Token::Plus));
    assert_eq!(lexer.next_token(),
               Err(LexError::InvalidCharacter { character: 'a',
                                                position:  4, }));
}

#[test]
fn invalid_character_reports_whole_unicode_scalar() {
    assert_eq!(tokenize("2 × 3"),
               Err(LexError::InvalidCharacter { character: '×',
                                                position:  2, }));
}

#[test]
fn first_error_wins() {
    assert_eq!(tokenize("1 $ #"),
               Err(LexError::InvalidCharacter { character: '$',
                                                position:  2, }));
}

#[test]
fn oversized_literal_is_rejected() {
    assert_eq!(tokenize("1 + 92233720368547758070"),
               Err(LexError::IntegerTooLarge { literal:  "92233720368547758070".to_string(),
                                               position: 4, }));
    assert_eq!(tokenize("9223372036854775807").unwrap(),
               vec![Token::Number(i64::MAX)]);
}

#[test]
fn token_kinds_and_names() {
    assert_eq!(Token::Number(3).kind(), TokenKind::Number);
    assert_eq!(Token::End.kind(), TokenKind::End);
    assert_eq!(TokenKind::RParen.to_string(), "')'");
    assert_eq!(TokenKind::End.to_string(), "end of input");
}

#[test]
fn every_token_kind_has_a_name() {
    let names: Vec<String> = [TokenKind::Number,
                              TokenKind::Plus,
                              TokenKind::Minus,
                              TokenKind::Star,
                              TokenKind::Slash,
                              TokenKind::LParen,
                              TokenKind::RParen,
                              TokenKind::End].iter()
                                             .map(ToString::to_string)
                                             .collect();
    assert_eq!(names,
               ["a number", "'+'", "'-'", "'*'", "'/'", "'('", "')'", "end of input"]);
}
