use reckon::{
    Error, Number,
    error::{LexError, RuntimeError, SyntaxError},
    evaluate,
    interpreter::lexer::TokenKind,
};

fn assert_value(src: &str, expected: Number) {
    match evaluate(src, false) {
        Ok(value) => assert_eq!(value, expected, "unexpected result for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match evaluate(src, false) {
        Ok(value) => panic!("Expression {src:?} succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", Number::Integer(3));
    assert_value("7 * 9", Number::Integer(63));
    assert_value("8 - 5", Number::Integer(3));
    assert_value("5 - 8", Number::Integer(-3));
    assert_value("42", Number::Integer(42));
}

#[test]
fn precedence() {
    assert_value("2+3*4", Number::Integer(14));
    assert_value("(2+3)*4", Number::Integer(20));
    assert_value("2*3+4*5", Number::Integer(26));
    assert_value("((((7))))", Number::Integer(7));
}

#[test]
fn left_associativity() {
    assert_value("8-3-2", Number::Integer(3));
    assert_value("8-(3-2)", Number::Integer(7));
    assert_value("64/4/2", Number::Real(8.0));
    assert_value("1-2+3", Number::Integer(2));
}

#[test]
fn division_is_true_division() {
    assert_value("7/2", Number::Real(3.5));
    assert_value("6/2", Number::Real(3.0));
    assert_value("7/2*2", Number::Real(7.0));
    assert_value("1/4+1", Number::Real(1.25));
}

#[test]
fn whitespace_is_insignificant() {
    assert_value("1+2*3", Number::Integer(7));
    assert_value("1 + 2 * 3", Number::Integer(7));
    assert_value("  1\t+ 2 *\n3  ", Number::Integer(7));
    assert_value("( 1 + 2 ) * 3\n", Number::Integer(9));
}

#[test]
fn result_display() {
    assert_eq!(evaluate("7/2", false).unwrap().to_string(), "3.5");
    assert_eq!(evaluate("6/2", false).unwrap().to_string(), "3.0");
    assert_eq!(evaluate("2+3*4", false).unwrap().to_string(), "14");
    assert_eq!(evaluate("1-10", false).unwrap().to_string(), "-9");
}

#[test]
fn invalid_character_is_lex_error() {
    let err = assert_failure("3+a");
    assert_eq!(err,
               Error::Lex(LexError::InvalidCharacter { character: 'a',
                                                       position:  2, }));
    assert!(err.to_string().contains("'a'"));
}

#[test]
fn invalid_first_character_fails_immediately() {
    assert!(matches!(assert_failure("x"),
                     Error::Lex(LexError::InvalidCharacter { character: 'x', .. })));
    assert!(matches!(assert_failure("1.5"),
                     Error::Lex(LexError::InvalidCharacter { character: '.', .. })));
}

#[test]
fn missing_close_paren_is_syntax_error() {
    let err = assert_failure("(1+2");
    assert_eq!(err,
               Error::Syntax(SyntaxError::UnexpectedToken { expected: TokenKind::RParen,
                                                            found:    TokenKind::End,
                                                            position: 4, }));
    assert!(err.to_string().contains("')'"));
}

#[test]
fn missing_operand_is_syntax_error() {
    assert_eq!(assert_failure("1+"),
               Error::Syntax(SyntaxError::ExpectedFactor { found:    TokenKind::End,
                                                           position: 2, }));
    assert!(matches!(assert_failure(""),
                     Error::Syntax(SyntaxError::ExpectedFactor { found: TokenKind::End, .. })));
    assert!(matches!(assert_failure("()"),
                     Error::Syntax(SyntaxError::ExpectedFactor { found: TokenKind::RParen, .. })));
    assert!(matches!(assert_failure("2**3"),
                     Error::Syntax(SyntaxError::ExpectedFactor { found: TokenKind::Star, .. })));
}

#[test]
fn unary_minus_is_not_supported() {
    assert!(matches!(assert_failure("-1"),
                     Error::Syntax(SyntaxError::ExpectedFactor { found: TokenKind::Minus, .. })));
}

#[test]
fn trailing_input_is_ignored_by_default() {
    assert_value("2+2)", Number::Integer(4));
    assert_value("2+2 3", Number::Integer(4));
    assert_value("2+2 3 a", Number::Integer(4));
}

#[test]
fn trailing_input_is_rejected_in_strict_mode() {
    assert!(matches!(evaluate("2+2)", true),
                     Err(Error::Syntax(SyntaxError::TrailingInput { found:    TokenKind::RParen,
                                                                    position: 3, }))));
    assert!(matches!(evaluate("2+2 3", true),
                     Err(Error::Syntax(SyntaxError::TrailingInput { found: TokenKind::Number, .. }))));
    assert_eq!(evaluate("2+2", true), Ok(Number::Integer(4)));
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(assert_failure("1/0"),
               Error::Runtime(RuntimeError::DivisionByZero { position: 1 }));
    assert!(matches!(assert_failure("1/(2-2)"),
                     Error::Runtime(RuntimeError::DivisionByZero { .. })));
    assert!(matches!(assert_failure("1/(1/2-1/2)"),
                     Error::Runtime(RuntimeError::DivisionByZero { .. })));
}

#[test]
fn integer_overflow_is_error() {
    assert!(matches!(assert_failure("9223372036854775807 + 1"),
                     Error::Runtime(RuntimeError::Overflow { .. })));
    assert!(matches!(assert_failure("99999999999999999999"),
                     Error::Lex(LexError::IntegerTooLarge { .. })));
}

#[test]
fn only_division_produces_reals() {
    assert!(evaluate("2 * (3 + 4) - 1", false).unwrap().is_integer());
    assert!(!evaluate("4 / 2", false).unwrap().is_integer());
    assert!(!evaluate("4 / 2 + 1", false).unwrap().is_integer());
}

#[test]
fn large_integers_are_rounded_when_promoted() {
    assert_value("9007199254740993/1", Number::Real(9_007_199_254_740_992.0));
    assert_value("10000000000000000*(1/2)", Number::Real(5_000_000_000_000_000.0));
    #[allow(clippy::cast_precision_loss)]
    let sum = 0.5 + 9_007_199_254_740_993_i64 as f64;
    assert_value("1/2 + 9007199254740993", Number::Real(sum));
    assert_eq!(evaluate("9007199254740993/1", false).unwrap().to_string(),
               "9007199254740992.0");
}

#[test]
fn extreme_reals_print_in_exponent_form() {
    assert_eq!(Number::Real(1.6e19).to_string(), "1.6e+19");
    assert_eq!(Number::Real(-2.5e-7).to_string(), "-2.5e-07");
    assert_eq!(evaluate("8000000000000000000/1*2", false).unwrap().to_string(),
               "1.6e+19");
    assert_eq!(evaluate("10000000000000000/1", false).unwrap().to_string(), "1e+16");
    assert_eq!(evaluate("1/100000", false).unwrap().to_string(), "1e-05");
    assert_eq!(evaluate("1/10000", false).unwrap().to_string(), "0.0001");
    assert_eq!(evaluate("1000000000000000/1", false).unwrap().to_string(),
               "1000000000000000.0");
}
