#![allow(clippy::float_cmp)]

use std::f64::consts::PI;

use super::*;

fn eval(src: &str, t: f64) -> f64 {
    Expr::parse(src).unwrap().eval(t)
}

// =============================================================
// Evaluation
// =============================================================

#[test]
fn constant_and_parameter() {
    assert_eq!(eval("42", 0.0), 42.0);
    assert_eq!(eval("t", 7.5), 7.5);
}

#[test]
fn precedence_mul_before_add() {
    assert_eq!(eval("1 + 2 * 3", 0.0), 7.0);
    assert_eq!(eval("(1 + 2) * 3", 0.0), 9.0);
    assert_eq!(eval("10 - 4 - 3", 0.0), 3.0);
    assert_eq!(eval("24 / 4 / 2", 0.0), 3.0);
}

#[test]
fn power_is_right_associative_and_binds_tighter_than_negation() {
    assert_eq!(eval("2^3^2", 0.0), 512.0);
    assert_eq!(eval("-2^2", 0.0), -4.0);
    assert_eq!(eval("2**-1", 0.0), 0.5);
}

#[test]
fn functions_and_constants() {
    assert!((eval("sin(pi/2)", 0.0) - 1.0).abs() < 1e-12);
    assert!((eval("cos(t)", PI) + 1.0).abs() < 1e-12);
    assert_eq!(eval("sqrt(16) + abs(-2)", 0.0), 6.0);
    assert!((eval("log(e)", 0.0) - 1.0).abs() < 1e-12);
    assert_eq!(eval("floor(2.7) + ceil(2.2)", 0.0), 5.0);
}

#[test]
fn javascript_style_source_is_accepted() {
    let x = eval("200+100*Math.sin(t);", 0.0);
    assert_eq!(x, 200.0);
    let y = eval("150+100*Math.cos(t);", 0.0);
    assert_eq!(y, 250.0);
    assert!((eval("Math.PI", 0.0) - PI).abs() < 1e-12);
}

#[test]
fn domain_errors_evaluate_to_nan() {
    assert!(eval("sqrt(t)", -1.0).is_nan());
}

#[test]
fn source_is_preserved() {
    let e = Expr::parse("  t * 2 ").unwrap();
    assert_eq!(e.source(), "  t * 2 ");
    assert_eq!(e.to_string(), "  t * 2 ");
}

// =============================================================
// Errors
// =============================================================

#[test]
fn unknown_identifier() {
    assert_eq!(Expr::parse("x + 1"), Err(ExprError::UnknownIdentifier("x".into())));
}

#[test]
fn unknown_function() {
    assert_eq!(Expr::parse("foo(t)"), Err(ExprError::UnknownFunction("foo".into())));
}

#[test]
fn unexpected_character() {
    assert_eq!(Expr::parse("t $ 2"), Err(ExprError::UnexpectedChar { ch: '$', pos: 2 }));
}

#[test]
fn unbalanced_parens() {
    assert_eq!(Expr::parse("(t + 1"), Err(ExprError::UnexpectedEnd));
    assert_eq!(Expr::parse("t + 1)"), Err(ExprError::TrailingInput(5)));
}

#[test]
fn empty_input() {
    assert_eq!(Expr::parse(""), Err(ExprError::UnexpectedEnd));
    assert_eq!(Expr::parse("   ;"), Err(ExprError::UnexpectedToken(3)));
}

#[test]
fn malformed_number() {
    assert_eq!(Expr::parse("1.2.3"), Err(ExprError::InvalidNumber("1.2.3".into())));
}

#[test]
fn nesting_past_the_limit_is_rejected() {
    let deep = "(".repeat(200_000) + "t" + &")".repeat(200_000);
    assert_eq!(Expr::parse(&deep), Err(ExprError::TooLong(deep.len())));

    let nested = |n: usize| "(".repeat(n) + "t" + &")".repeat(n);
    assert_eq!(Expr::parse(&nested(MAX_EXPR_DEPTH)), Err(ExprError::TooDeep(MAX_EXPR_DEPTH)));
    assert_eq!(Expr::parse(&nested(MAX_EXPR_DEPTH - 1)).unwrap().eval(3.0), 3.0);
}

#[test]
fn sign_and_power_runs_count_toward_depth() {
    let signs = "-".repeat(MAX_EXPR_DEPTH) + "t";
    assert_eq!(Expr::parse(&signs), Err(ExprError::TooDeep(MAX_EXPR_DEPTH)));
    let powers = vec!["1"; MAX_EXPR_DEPTH + 1].join("^");
    assert_eq!(Expr::parse(&powers), Err(ExprError::TooDeep(MAX_EXPR_DEPTH)));
}

#[test]
fn longest_flat_chain_parses_and_evaluates() {
    let chain = vec!["1"; MAX_EXPR_LEN / 2].join("+");
    assert!(chain.len() <= MAX_EXPR_LEN);
    assert_eq!(eval(&chain, 0.0), (MAX_EXPR_LEN / 2) as f64);
    let too_long = chain + "+1+1";
    assert!(matches!(Expr::parse(&too_long), Err(ExprError::TooLong(_))));
}

// =============================================================
// Serde
// =============================================================

#[test]
fn serializes_as_source_string() {
    let e = Expr::parse("t*t").unwrap();
    assert_eq!(serde_json::to_string(&e).unwrap(), "\"t*t\"");
    let back: Expr = serde_json::from_str("\"t+1\"").unwrap();
    assert_eq!(back.eval(1.0), 2.0);
    assert!(serde_json::from_str::<Expr>("\"t+\"").is_err());
}
