use tally::{
    error::SyntaxError,
    evaluate, evaluate_file,
    interpreter::{
        evaluator::Evaluator,
        lexer::{Lexer, tokenize},
        token::{Tag, Token, TokenBuffer, TokenKind, TokenSource},
    },
};

fn eval_values(src: &str) -> Vec<f64> {
    evaluate(src, false).unwrap_or_else(|e| panic!("Program failed: {e}"))
}

fn assert_failure(src: &str) {
    if evaluate(src, false).is_ok() {
        panic!("Program succeeded but was expected to fail")
    }
}

fn run_with(source: impl TokenSource) -> Result<Vec<f64>, SyntaxError> {
    let mut evaluator = Evaluator::new(source)?;
    let mut values = Vec::new();
    evaluator.run(|value| values.push(value))?;
    Ok(values)
}

fn run_text(src: &str) -> Result<Vec<f64>, SyntaxError> {
    run_with(Lexer::new(src))
}

#[test]
fn single_binary_operations() {
    assert_eq!(eval_values("8 + 3;"), vec![11.0]);
    assert_eq!(eval_values("8 - 3;"), vec![5.0]);
    assert_eq!(eval_values("8 * 3;"), vec![24.0]);
    assert_eq!(eval_values("8 / 2;"), vec![4.0]);
}

#[test]
fn addition_and_subtraction_are_left_associative() {
    assert_eq!(eval_values("8 - 3 - 2;"), vec![3.0]);
    assert_eq!(eval_values("1 - 2 + 3;"), vec![2.0]);
    assert_eq!(eval_values("16 / 4 / 2;"), vec![2.0]);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(eval_values("2 + 3 * 4;"), vec![14.0]);
    assert_eq!(eval_values("2 * 3 + 4;"), vec![10.0]);
    assert_eq!(eval_values("10 - 8 / 4;"), vec![8.0]);
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(eval_values("(2 + 3) * 4;"), vec![20.0]);
    assert_eq!(eval_values("2 * (3 + 4);"), vec![14.0]);
    assert_eq!(eval_values("((1 + 2));"), vec![3.0]);
}

#[test]
fn unary_negation_composes() {
    assert_eq!(eval_values("- (3 + 4);"), vec![-7.0]);
    assert_eq!(eval_values("- - 5;"), vec![5.0]);
    assert_eq!(eval_values("2 - -3;"), vec![5.0]);
    assert_eq!(eval_values("-3 * 4;"), vec![-12.0]);
}

#[test]
fn statements_evaluate_independently_and_in_order() {
    assert_eq!(eval_values("1 + 1; 2 * 2;"), vec![2.0, 4.0]);
    assert_eq!(eval_values("1; 2; 3;"), vec![1.0, 2.0, 3.0]);
}

#[test]
fn decimal_and_exponent_literals() {
    assert_eq!(eval_values("3.5 + .5;"), vec![4.0]);
    assert_eq!(eval_values("2e3;"), vec![2000.0]);
    assert_eq!(eval_values("1.5e-1 * 10;"), vec![1.5]);
}

#[test]
fn division_by_zero_follows_ieee_semantics() {
    let values = eval_values("1 / 0;");
    assert!(values[0].is_infinite() && values[0].is_sign_positive());

    let values = eval_values("-1 / 0;");
    assert!(values[0].is_infinite() && values[0].is_sign_negative());

    let values = eval_values("0 / 0;");
    assert!(values[0].is_nan());
}

#[test]
fn comments_and_newlines_are_skipped() {
    assert_eq!(eval_values("1 + 2; // the first statement\n3 * 4;"),
               vec![3.0, 12.0]);
}

#[test]
fn malformed_factor_reports_the_failing_position() {
    let error = run_text("2 + ;").unwrap_err();
    assert!(matches!(error,
                     SyntaxError::ExpectedOneOf { found: Tag::Semicolon,
                                                  line: 1,
                                                  column: 5,
                                                  .. }));
}

#[test]
fn unterminated_parenthesis_fails_expecting_the_closer() {
    let error = run_text("(1 + 2;").unwrap_err();
    assert!(matches!(error,
                     SyntaxError::UnexpectedToken { expected: Tag::RParen,
                                                    found: Tag::Semicolon,
                                                    .. }));
}

#[test]
fn completed_expressions_are_reported_before_a_missing_terminator_fails() {
    let mut evaluator = Evaluator::new(Lexer::new("1 + 1")).unwrap();
    let mut values = Vec::new();
    let error = evaluator.run(|value| values.push(value)).unwrap_err();

    assert_eq!(values, vec![2.0]);
    assert!(matches!(error,
                     SyntaxError::UnexpectedToken { expected: Tag::Semicolon,
                                                    found: Tag::Eof,
                                                    .. }));
}

#[test]
fn empty_input_is_rejected() {
    assert_failure("");
    assert_failure("   \n  ");
}

#[test]
fn tokens_after_a_completed_statement_must_begin_a_new_one() {
    assert_failure("1; )");
    assert_failure("1 + 1; ;");
}

#[test]
fn unrecognized_characters_are_rejected() {
    let error = run_text("1 $ 2;").unwrap_err();
    assert!(matches!(error,
                     SyntaxError::UnrecognizedCharacter { line: 1, column: 3, .. }));

    // Even the very first token can be the offender.
    assert!(Evaluator::new(Lexer::new("$")).is_err());
}

#[test]
fn error_messages_name_the_expectation_and_position() {
    let error = run_text("(1 + 2;").unwrap_err();
    assert_eq!(error.to_string(),
               "Error on line 1, column 7: expected ')' but found ';'.");

    let error = run_text("2 + ;").unwrap_err();
    assert_eq!(error.to_string(),
               "Error on line 1, column 5: expected one of '(', '-', a number but found ';'.");
}

#[test]
fn positions_track_lines_and_columns() {
    let mut evaluator = Evaluator::new(Lexer::new("1 + 2;\n3 * ;")).unwrap();
    let mut values = Vec::new();
    let error = evaluator.run(|value| values.push(value)).unwrap_err();

    assert_eq!(values, vec![3.0]);
    assert!(matches!(error,
                     SyntaxError::ExpectedOneOf { found: Tag::Semicolon,
                                                  line: 2,
                                                  column: 5,
                                                  .. }));
}

#[test]
fn tokenize_produces_tagged_positioned_tokens() {
    let tokens = tokenize("1 + 2;").unwrap();
    let tags: Vec<Tag> = tokens.iter().map(|t| t.kind.tag()).collect();
    assert_eq!(tags,
               vec![Tag::Number, Tag::Plus, Tag::Number, Tag::Semicolon]);
    assert_eq!((tokens[1].line, tokens[1].column), (1, 3));
}

#[test]
fn pre_tokenized_input_is_accepted() {
    let tokens = vec![Token::new(TokenKind::Number(6.0), 1, 1),
                      Token::new(TokenKind::Slash, 1, 3),
                      Token::new(TokenKind::Number(2.0), 1, 5),
                      Token::new(TokenKind::Semicolon, 1, 6)];
    assert_eq!(run_with(TokenBuffer::new(tokens)).unwrap(), vec![3.0]);
}

#[test]
fn replaying_the_same_token_sequence_is_deterministic() {
    let tokens = tokenize("(2 + 3) * 4; 1 / 3;").unwrap();

    let first = run_with(TokenBuffer::new(tokens.clone())).unwrap();
    let second = run_with(TokenBuffer::new(tokens)).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, vec![20.0, 1.0 / 3.0]);
}

#[test]
fn example_script_evaluates() {
    let values = evaluate_file("tests/example.tally", false).unwrap();
    assert_eq!(values, vec![7.0, 1.5, -4.0, f64::INFINITY, 30.0]);
}

#[test]
fn missing_input_file_is_a_configuration_error() {
    let error = evaluate_file("does-not-exist.tally", false).unwrap_err();
    assert!(error.to_string().contains("does-not-exist.tally"));
}
