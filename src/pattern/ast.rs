//! Pattern expression structures per the STIX 2.1 patterning grammar
//!
//! Defines the expression tree rendered into pattern text: typed constants,
//! comparison expressions, boolean composition, and observation expressions.

use std::fmt;

use super::errors::{PatternError, PatternResult};
use super::path::ObjectPath;

/// Escape special characters for STIX string literals
///
/// Only backslash and single quote carry meaning inside a literal.
pub(crate) fn escape_string_literal(output: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '\\' => output.push_str("\\\\"),
            '\'' => output.push_str("\\'"),
            c => output.push(c),
        }
    }
}

/// A constant on the right-hand side of a comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstantValue {
    /// String literal, rendered single-quoted and escaped
    String(String),
    /// Integer literal, rendered bare
    Integer(i64),
    /// Boolean literal, rendered bare
    Boolean(bool),
}

impl ConstantValue {
    /// Create a string constant
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => {
                let mut escaped = String::with_capacity(s.len());
                escape_string_literal(&mut escaped, s);
                write!(f, "'{}'", escaped)
            }
            Self::Integer(i) => write!(f, "{}", i),
            Self::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// Comparison operator types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    /// Equality: path = value
    Eq,
    /// Inequality: path != value
    Neq,
    /// Greater than: path > value
    Gt,
    /// Less than: path < value
    Lt,
    /// Greater than or equal: path >= value
    Gte,
    /// Less than or equal: path <= value
    Lte,
    /// Set membership: path IN value
    In,
    /// SQL-style wildcard match: path LIKE value
    Like,
    /// Regular expression match: path MATCHES value
    Matches,
}

impl ComparisonOp {
    /// Returns the operator token used in rendered patterns
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Neq => "!=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Gte => ">=",
            Self::Lte => "<=",
            Self::In => "IN",
            Self::Like => "LIKE",
            Self::Matches => "MATCHES",
        }
    }
}

/// A single comparison expression (path + operator + constant)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    /// Left-hand object path
    pub path: ObjectPath,
    /// Comparison operator
    pub op: ComparisonOp,
    /// Right-hand constant
    pub value: ConstantValue,
    /// Whether the comparison is negated (`NOT` before the operator)
    pub negated: bool,
}

impl Comparison {
    /// Create a comparison with an explicit operator
    pub fn new(path: ObjectPath, op: ComparisonOp, value: ConstantValue) -> Self {
        Self {
            path,
            op,
            value,
            negated: false,
        }
    }

    /// Create an equality comparison
    pub fn eq(path: ObjectPath, value: ConstantValue) -> Self {
        Self::new(path, ComparisonOp::Eq, value)
    }

    /// Create an inequality comparison
    pub fn neq(path: ObjectPath, value: ConstantValue) -> Self {
        Self::new(path, ComparisonOp::Neq, value)
    }

    /// Create a LIKE comparison
    pub fn like(path: ObjectPath, value: ConstantValue) -> Self {
        Self::new(path, ComparisonOp::Like, value)
    }

    /// Create a MATCHES comparison
    pub fn matches(path: ObjectPath, value: ConstantValue) -> Self {
        Self::new(path, ComparisonOp::Matches, value)
    }

    /// Negate the comparison
    pub fn negate(mut self) -> Self {
        self.negated = true;
        self
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "{} NOT {} {}", self.path, self.op.as_str(), self.value)
        } else {
            write!(f, "{} {} {}", self.path, self.op.as_str(), self.value)
        }
    }
}

/// Boolean connective types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    And,
    Or,
}

impl BooleanOp {
    /// Returns the connective token used in rendered patterns
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

/// The payload of an observation expression: a single comparison or a
/// boolean composition of further expressions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternExpression {
    /// A lone comparison
    Comparison(Comparison),
    /// A boolean composition
    Boolean(BooleanExpression),
}

impl From<Comparison> for PatternExpression {
    fn from(comparison: Comparison) -> Self {
        Self::Comparison(comparison)
    }
}

impl From<BooleanExpression> for PatternExpression {
    fn from(expression: BooleanExpression) -> Self {
        Self::Boolean(expression)
    }
}

impl fmt::Display for PatternExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comparison(c) => write!(f, "{}", c),
            Self::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// Two or more expressions joined by a single boolean connective
///
/// Nested boolean operands render parenthesized so precedence survives the
/// round trip into text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanExpression {
    op: BooleanOp,
    operands: Vec<PatternExpression>,
}

impl BooleanExpression {
    /// Create a boolean expression
    ///
    /// # Errors
    ///
    /// Returns `PatternError::TooFewOperands` for fewer than two operands;
    /// a one-operand composition has no connective to render.
    pub fn new(op: BooleanOp, operands: Vec<PatternExpression>) -> PatternResult<Self> {
        if operands.len() < 2 {
            return Err(PatternError::TooFewOperands(operands.len()));
        }
        Ok(Self { op, operands })
    }

    /// Create an OR composition
    pub fn or(operands: Vec<PatternExpression>) -> PatternResult<Self> {
        Self::new(BooleanOp::Or, operands)
    }

    /// Create an AND composition
    pub fn and(operands: Vec<PatternExpression>) -> PatternResult<Self> {
        Self::new(BooleanOp::And, operands)
    }

    /// The connective joining the operands
    pub fn op(&self) -> BooleanOp {
        self.op
    }

    /// The joined operands, in rendering order
    pub fn operands(&self) -> &[PatternExpression] {
        &self.operands
    }
}

impl fmt::Display for BooleanExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, operand) in self.operands.iter().enumerate() {
            if i > 0 {
                write!(f, " {} ", self.op.as_str())?;
            }
            match operand {
                PatternExpression::Boolean(inner) => write!(f, "({})", inner)?,
                PatternExpression::Comparison(c) => write!(f, "{}", c)?,
            }
        }
        Ok(())
    }
}

/// Top-level observation expression, rendered in square brackets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservationExpression {
    expression: PatternExpression,
}

impl ObservationExpression {
    /// Wrap an expression in an observation
    pub fn new(expression: impl Into<PatternExpression>) -> Self {
        Self {
            expression: expression.into(),
        }
    }

    /// The wrapped expression
    pub fn expression(&self) -> &PatternExpression {
        &self.expression
    }
}

impl fmt::Display for ObservationExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.expression)
    }
}
