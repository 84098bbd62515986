use lox_front::{
    Ast, BinaryOperator, Expr, ParseError, StreamConfig, UnaryOperator, parse, parse_concurrent,
};
use pretty_assertions::assert_eq;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn render(source: &str) -> String {
    init_tracing();
    parse(source).expect("source should parse").to_string()
}

#[test]
fn factor_chain_groups_to_the_left() {
    assert_eq!(render("61 * 98 / 80"), "(/ (* 61.0 98.0) 80.0)");
    assert_eq!(render("8 / 4 / 2 * 3"), "(* (/ (/ 8.0 4.0) 2.0) 3.0)");
}

#[test]
fn mixed_precedence() {
    assert_eq!(render("1 - 2 * 3 - 4"), "(- (- 1.0 (* 2.0 3.0)) 4.0)");
    assert_eq!(render("1 * 2 + 3 * 4"), "(+ (* 1.0 2.0) (* 3.0 4.0))");
    assert_eq!(
        render("(1 + 2) * 3 / (4 - 5)"),
        "(/ (* (group (+ 1.0 2.0)) 3.0) (group (- 4.0 5.0)))"
    );
}

#[test]
fn unary_applies_to_the_nearest_operand() {
    assert_eq!(render("-1 * 2"), "(* (- 1.0) 2.0)");
    assert_eq!(render("!!true"), "(! (! true))");
    assert_eq!(render("-(1 * 2)"), "(- (group (* 1.0 2.0)))");
    assert_eq!(render("3 * -4 * 5"), "(* (* 3.0 (- 4.0)) 5.0)");
}

#[test]
fn comparison_and_equality_bind_loosest() {
    assert_eq!(
        render("1 + 2 < 4 == 5 >= 6 * 7"),
        "(== (< (+ 1.0 2.0) 4.0) (>= 5.0 (* 6.0 7.0)))"
    );
    assert_eq!(render("!a != b"), "(!= (! a) b)");
}

#[test]
fn strings_and_keywords_are_leaves() {
    assert_eq!(render("\"hello world\""), "hello world");
    assert_eq!(render("(\"a\" + nil)"), "(group (+ a nil))");
    assert_eq!(render("foo"), "foo");
}

#[test]
fn builds_the_expected_tree() {
    let ast = parse("-x + 2").unwrap();
    let expected = Ast::new(vec![Expr::Binary {
        left: Box::new(Expr::Unary {
            op: UnaryOperator::Negate,
            operand: Box::new(Expr::keyword("x")),
        }),
        op: BinaryOperator::Add,
        right: Box::new(Expr::number("2.0")),
    }]);
    assert_eq!(ast, expected);
}

#[test]
fn empty_group_is_an_error_at_the_closing_paren() {
    assert_eq!(parse("()"), Err(ParseError::EmptyGroup { line: 1 }));
    assert_eq!(parse("1 + (\n)"), Err(ParseError::EmptyGroup { line: 2 }));
    assert_eq!(
        parse("()").unwrap_err().to_string(),
        "[line 1] Error: empty group"
    );
}

#[test]
fn unmatched_open_paren() {
    let error = parse("(1 + 2").unwrap_err();
    assert_eq!(error, ParseError::UnmatchedParen { line: 1 });
    assert_eq!(error.to_string(), "[line 1] Error: unmatched '('");
    assert_eq!(parse("((1)\n"), Err(ParseError::UnmatchedParen { line: 2 }));
}

#[test]
fn unexpected_tokens_report_their_line() {
    assert_eq!(
        parse("1 +\n)"),
        Err(ParseError::UnexpectedToken {
            line: 2,
            lexeme: ")".to_string()
        })
    );
    assert_eq!(
        parse("+ 1").unwrap_err().to_string(),
        "[line 1] Error: unexpected +"
    );
    assert_eq!(parse("1 *\n\n"), Err(ParseError::UnexpectedEof { line: 3 }));
}

#[test]
fn lexical_errors_stop_the_parse() {
    let error = parse("1 + @").unwrap_err();
    assert_eq!(error.line(), 1);
    assert_eq!(error.to_string(), "[line 1] Error: Unexpected character: @");

    let error = parse("\"open").unwrap_err();
    assert_eq!(error.to_string(), "[line 1] Error: Unterminated string.");
}

#[test]
fn concurrent_lexer_gives_the_same_results() {
    init_tracing();
    let sources = [
        "61 * 98 / 80",
        "-(1 + 2) * \"s\" >= nil",
        "1 - 2 - 3 - 4 - 5 - 6 - 7 - 8 - 9 - 10 - 11 - 12",
        "()",
        "(1 + 2",
        "1 2",
        "",
    ];
    for source in sources {
        for capacity in [1, 3, 10] {
            let threaded = parse_concurrent(source, StreamConfig::with_capacity(capacity))
                .map_err(|e| e.to_string());
            let pulled = parse(source).map_err(|e| e.to_string());
            assert_eq!(threaded, pulled, "source {source:?}, capacity {capacity}");
        }
    }
}
