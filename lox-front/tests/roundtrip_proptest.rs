//! Property tests over randomly generated, well-formed expressions.

use lox_front::{BinaryOperator, Expr, Literal, Token, TokenKind, UnaryOperator, parse, tokenize};
use proptest::prelude::*;

fn leaf() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..1000).prop_map(|n| n.to_string()),
        (0u32..100, 0u32..1000).prop_map(|(whole, fraction)| format!("{whole}.{fraction:03}")),
        "[a-z_][a-z0-9_]{0,5}",
        "[a-z ]{0,6}".prop_map(|s| format!("\"{s}\"")),
        Just("true".to_string()),
        Just("nil".to_string()),
    ]
}

fn operator() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["+", "-", "*", "/", "<", "<=", ">", ">=", "==", "!="])
}

fn expression() -> impl Strategy<Value = String> {
    leaf().prop_recursive(5, 48, 2, |inner| {
        prop_oneof![
            (inner.clone(), operator(), inner.clone())
                .prop_map(|(left, op, right)| format!("{left} {op} {right}")),
            inner.clone().prop_map(|e| format!("({e})")),
            (prop::sample::select(vec!["-", "!"]), inner).prop_map(|(op, e)| format!("{op}{e}")),
        ]
    })
}

/// Precedence-climbing parser used as an independent reference.
struct Reference {
    tokens: Vec<Token>,
    position: usize,
}

impl Reference {
    fn parse(source: &str) -> Expr {
        let mut reference = Reference {
            tokens: tokenize(source),
            position: 0,
        };
        let expr = reference.expression(0);
        assert_eq!(reference.tokens[reference.position].kind, TokenKind::Eof);
        expr
    }

    fn next(&mut self) -> Token {
        let token = self.tokens[self.position].clone();
        self.position += 1;
        token
    }

    fn expression(&mut self, min_precedence: u8) -> Expr {
        let mut left = self.prefix();
        while let Some(op) = BinaryOperator::from_kind(self.tokens[self.position].kind) {
            if op.precedence() < min_precedence {
                break;
            }
            self.position += 1;
            let right = self.expression(op.precedence() + 1);
            left = Expr::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }
        left
    }

    fn prefix(&mut self) -> Expr {
        let token = self.next();
        if let Some(op) = UnaryOperator::from_kind(token.kind) {
            return Expr::Unary {
                op,
                operand: Box::new(self.prefix()),
            };
        }
        if token.kind == TokenKind::LeftParen {
            let inner = self.expression(0);
            assert_eq!(self.next().kind, TokenKind::RightParen);
            return Expr::Group(vec![inner]);
        }
        Expr::Literal(Literal::from_token(&token).expect("leaf token"))
    }
}

proptest! {
    #[test]
    fn source_rendering_parses_back_to_the_same_tree(source in expression()) {
        let ast = parse(&source).expect("generated source parses");
        prop_assert_eq!(ast.nodes.len(), 1);

        let rendered = ast.nodes[0].to_source();
        let reparsed = parse(&rendered).expect("rendered source parses");
        prop_assert_eq!(&reparsed, &ast, "rendered as {}", rendered);
    }

    #[test]
    fn rotations_agree_with_precedence_climbing(source in expression()) {
        let ast = parse(&source).expect("generated source parses");
        let expected = Reference::parse(&source);
        prop_assert_eq!(ast.nodes[0].to_string(), expected.to_string());
    }

    #[test]
    fn lexer_always_ends_with_one_eof(source in "\\PC{0,40}") {
        let tokens = tokenize(&source);
        let eofs = tokens.iter().filter(|t| t.is_eof()).count();
        prop_assert_eq!(eofs, 1);
        prop_assert!(tokens.last().is_some_and(Token::is_eof));
    }
}
