//! Pattern Rendering Tests
//!
//! Tests for the pattern expression subsystem:
//! - Every operator renders its STIX token
//! - Boolean composition preserves order and parenthesizes nesting
//! - Object paths quote non-identifier components
//! - String literals escape quotes and backslashes

use stixgen::pattern::{
    BooleanExpression, BooleanOp, Comparison, ComparisonOp, ConstantValue, ObjectPath,
    ObservationExpression, PatternError, PatternExpression,
};

fn path(object_type: &str, components: &[&str]) -> ObjectPath {
    ObjectPath::new(
        object_type,
        components.iter().map(|c| (*c).to_string()).collect(),
    )
}

// =============================================================================
// Comparison Rendering Tests
// =============================================================================

/// Each operator renders its pattern token between path and constant.
#[test]
fn test_operator_rendering() {
    let cases = [
        (ComparisonOp::Eq, "network-traffic:dst_port = '443'"),
        (ComparisonOp::Neq, "network-traffic:dst_port != '443'"),
        (ComparisonOp::Gt, "network-traffic:dst_port > '443'"),
        (ComparisonOp::Lt, "network-traffic:dst_port < '443'"),
        (ComparisonOp::Gte, "network-traffic:dst_port >= '443'"),
        (ComparisonOp::Lte, "network-traffic:dst_port <= '443'"),
        (ComparisonOp::In, "network-traffic:dst_port IN '443'"),
        (ComparisonOp::Like, "network-traffic:dst_port LIKE '443'"),
        (ComparisonOp::Matches, "network-traffic:dst_port MATCHES '443'"),
    ];

    for (op, expected) in cases {
        let comparison = Comparison::new(
            path("network-traffic", &["dst_port"]),
            op,
            ConstantValue::string("443"),
        );
        assert_eq!(comparison.to_string(), expected);
    }
}

/// Negation places NOT before the operator token.
#[test]
fn test_negated_rendering() {
    let comparison = Comparison::eq(
        path("url", &["value"]),
        ConstantValue::string("http://x"),
    )
    .negate();
    assert_eq!(comparison.to_string(), "url:value NOT = 'http://x'");
}

/// Integer and boolean constants render bare.
#[test]
fn test_typed_constants() {
    let comparison = Comparison::new(
        path("network-traffic", &["dst_port"]),
        ComparisonOp::Eq,
        ConstantValue::Integer(443),
    );
    assert_eq!(comparison.to_string(), "network-traffic:dst_port = 443");

    let comparison = Comparison::new(
        path("email-message", &["is_multipart"]),
        ComparisonOp::Eq,
        ConstantValue::Boolean(false),
    );
    assert_eq!(
        comparison.to_string(),
        "email-message:is_multipart = false"
    );
}

// =============================================================================
// Object Path Tests
// =============================================================================

/// Plain identifier components render bare, others quoted.
#[test]
fn test_path_component_quoting() {
    assert_eq!(
        path("file", &["hashes", "MD5"]).to_string(),
        "file:hashes.MD5"
    );
    assert_eq!(
        path("file", &["hashes", "SHA-256"]).to_string(),
        "file:hashes.'SHA-256'"
    );
}

// =============================================================================
// Boolean Composition Tests
// =============================================================================

/// Operands render in construction order around the connective.
#[test]
fn test_or_order_preserved() {
    let expression = BooleanExpression::or(vec![
        Comparison::eq(path("url", &["value"]), ConstantValue::string("b")).into(),
        Comparison::eq(path("url", &["value"]), ConstantValue::string("a")).into(),
    ])
    .unwrap();
    assert_eq!(
        expression.to_string(),
        "url:value = 'b' OR url:value = 'a'"
    );
    assert_eq!(expression.op(), BooleanOp::Or);
    assert_eq!(expression.operands().len(), 2);
}

/// Nested boolean operands carry parentheses; comparisons do not.
#[test]
fn test_nested_parentheses() {
    let inner = BooleanExpression::and(vec![
        Comparison::eq(path("domain-name", &["value"]), ConstantValue::string("a.com")).into(),
        Comparison::eq(path("domain-name", &["value"]), ConstantValue::string("b.com")).into(),
    ])
    .unwrap();
    let outer = BooleanExpression::or(vec![
        inner.into(),
        Comparison::eq(path("url", &["value"]), ConstantValue::string("http://x")).into(),
    ])
    .unwrap();

    assert_eq!(
        outer.to_string(),
        "(domain-name:value = 'a.com' AND domain-name:value = 'b.com') OR url:value = 'http://x'"
    );
}

/// Composition with fewer than two operands is rejected at construction.
#[test]
fn test_too_few_operands() {
    assert_eq!(
        BooleanExpression::or(Vec::new()).unwrap_err(),
        PatternError::TooFewOperands(0)
    );
    let single: Vec<PatternExpression> = vec![Comparison::eq(
        path("url", &["value"]),
        ConstantValue::string("x"),
    )
    .into()];
    assert_eq!(
        BooleanExpression::and(single).unwrap_err(),
        PatternError::TooFewOperands(1)
    );
}

// =============================================================================
// Observation Expression Tests
// =============================================================================

/// Observation expressions bracket whatever they wrap.
#[test]
fn test_observation_brackets() {
    let comparison = Comparison::eq(
        path("ipv4-addr", &["value"]),
        ConstantValue::string("8.8.8.8"),
    );
    assert_eq!(
        ObservationExpression::new(comparison.clone()).to_string(),
        "[ipv4-addr:value = '8.8.8.8']"
    );

    let composed = BooleanExpression::or(vec![
        comparison.into(),
        Comparison::eq(path("url", &["value"]), ConstantValue::string("http://x")).into(),
    ])
    .unwrap();
    assert_eq!(
        ObservationExpression::new(composed).to_string(),
        "[ipv4-addr:value = '8.8.8.8' OR url:value = 'http://x']"
    );
}

/// Escaped literals stay inside one set of quotes.
#[test]
fn test_escaped_literal_in_observation() {
    let comparison = Comparison::eq(
        path("process", &["command_line"]),
        ConstantValue::string(r"cmd /c 'echo \hi'"),
    );
    assert_eq!(
        ObservationExpression::new(comparison).to_string(),
        r"[process:command_line = 'cmd /c \'echo \\hi\'']"
    );
}
