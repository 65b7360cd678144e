use crate::util::{BinaryOperator, Location};

use super::*;

/// Scan text and assume success, returning tokens in unwrapped form.
/// Panic on error.
fn scan_optimistic(text: &str) -> Vec<TokenWithLocation> {
    match scan_text(text) {
        Ok(tokens) => tokens,
        Err(err) => panic!("Scan failed unexpectedly: {:?}", err),
    }
}

fn scan_err(text: &str) -> ScanErr {
    match scan_text(text) {
        Ok(tokens) => panic!("Scan succeeded unexpectedly: {:?}", tokens),
        Err(err) => err,
    }
}

fn check_token(
    actual: Option<&TokenWithLocation>,
    expected: Token,
    start_col: usize,
    end_col: usize,
) {
    let expected = TokenWithLocation::new(
        expected,
        Location::new(start_col),
        Location::new(end_col),
    );
    assert_eq!(actual, Some(&expected));
}

#[test]
fn scan_empty() {
    let tokens = scan_optimistic("");
    assert_eq!(tokens.len(), 0);
}

#[test]
fn scan_only_spaces() {
    let tokens = scan_optimistic("    ");
    assert_eq!(tokens.len(), 0);
}

#[test]
fn scan_int() {
    let tokens = scan_optimistic("123");
    assert_eq!(tokens.len(), 1);
    check_token(tokens.get(0), Token::Int(123), 1, 3);
}

#[test]
fn scan_int_with_leading_zeros() {
    let tokens = scan_optimistic("007");
    assert_eq!(tokens.len(), 1);
    check_token(tokens.get(0), Token::Int(7), 1, 3);
}

#[test]
fn scan_max_int() {
    let tokens = scan_optimistic("9223372036854775807");
    check_token(tokens.get(0), Token::Int(i64::MAX), 1, 19);
}

#[test]
fn scan_int_out_of_range() {
    let err = scan_err("1 + 9223372036854775808");
    assert_eq!(
        err.kind,
        ScanErrKind::IntLiteralOutOfRange("9223372036854775808".to_owned())
    );
    assert_eq!(err.location, Location::new(5));
}

#[test]
fn scan_add() {
    let tokens = scan_optimistic("1 + 2");
    assert_eq!(tokens.len(), 3);
    check_token(tokens.get(0), Token::Int(1), 1, 1);
    check_token(tokens.get(1), Token::Op(BinaryOperator::Add), 3, 3);
    check_token(tokens.get(2), Token::Int(2), 5, 5);
}

#[test]
fn scan_without_spaces() {
    let tokens = scan_optimistic("100-100");
    assert_eq!(tokens.len(), 3);
    check_token(tokens.get(0), Token::Int(100), 1, 3);
    check_token(tokens.get(1), Token::Op(BinaryOperator::Sub), 4, 4);
    check_token(tokens.get(2), Token::Int(100), 5, 7);
}

#[test]
fn scan_parens() {
    let tokens = scan_optimistic("((55 - 53)   /(33/3 ))");
    let tokens: Vec<Token> = tokens.into_iter().map(|t| t.token).collect();
    assert_eq!(
        tokens,
        vec![
            Token::LParen,
            Token::LParen,
            Token::Int(55),
            Token::Op(BinaryOperator::Sub),
            Token::Int(53),
            Token::RParen,
            Token::Op(BinaryOperator::Div),
            Token::LParen,
            Token::Int(33),
            Token::Op(BinaryOperator::Div),
            Token::Int(3),
            Token::RParen,
            Token::RParen,
        ]
    );
}

#[test]
fn scan_unbalanced_parens() {
    // Bracket matching is the parser's job.
    let tokens = scan_optimistic(")(");
    check_token(tokens.get(0), Token::RParen, 1, 1);
    check_token(tokens.get(1), Token::LParen, 2, 2);
}

#[test]
fn scan_leading_minus_is_an_operator() {
    let tokens = scan_optimistic("-1");
    check_token(tokens.get(0), Token::Op(BinaryOperator::Sub), 1, 1);
    check_token(tokens.get(1), Token::Int(1), 2, 2);
}

#[test]
fn scan_operator_run() {
    let err = scan_err("1 ++ 1");
    assert_eq!(err.kind, ScanErrKind::UnknownOperator("++".to_owned()));
    assert_eq!(err.location, Location::new(3));
}

#[test]
fn scan_mixed_operator_run() {
    let err = scan_err("2*-3");
    assert_eq!(err.kind, ScanErrKind::UnknownOperator("*-".to_owned()));
    assert_eq!(err.location, Location::new(2));
}

#[test]
fn scan_unexpected_character() {
    let err = scan_err("1 & 2");
    assert_eq!(err.kind, ScanErrKind::UnexpectedCharacter('&'));
    assert_eq!(err.location, Location::new(3));
}

#[test]
fn scan_tab_is_unexpected() {
    let err = scan_err("1\t+ 2");
    assert_eq!(err.kind, ScanErrKind::UnexpectedCharacter('\t'));
    assert_eq!(err.location, Location::new(2));
}

#[test]
fn scan_is_lazy() {
    // Tokens before the bad char are produced before the error.
    let mut scanner = Scanner::new("1 + x");
    assert_eq!(scanner.next().map(|r| r.map(|t| t.token)), Some(Ok(Token::Int(1))));
    assert_eq!(
        scanner.next().map(|r| r.map(|t| t.token)),
        Some(Ok(Token::Op(BinaryOperator::Add)))
    );
    assert!(matches!(scanner.next(), Some(Err(_))));
}

#[test]
fn scan_end_of_input_repeats() {
    let mut scanner = Scanner::new("7 ");
    assert!(matches!(scanner.next(), Some(Ok(_))));
    assert!(scanner.next().is_none());
    assert!(scanner.next().is_none());
}

#[test]
fn display_tokens() {
    let tokens = scan_optimistic("(12 * 3)");
    let displayed: Vec<String> = tokens.iter().map(|t| t.token.to_string()).collect();
    assert_eq!(displayed, vec!["(", "12", "*", "3", ")"]);
    assert_eq!(tokens[1].to_string(), "12 @ 2 -> 3");
}
