//! STIX pattern expression subsystem
//!
//! Builds and renders pattern expressions per the STIX 2.1 patterning
//! grammar: object paths, comparison expressions, boolean composition, and
//! observation-expression bracketing.
//!
//! # Design Principles
//!
//! - Deterministic: same expression tree, same rendered text
//! - Immutable: nodes are built once and rendered, never mutated
//! - Explicit: compositions that cannot render validly are rejected at
//!   construction time

mod ast;
mod errors;
mod path;

pub use ast::{
    BooleanExpression, BooleanOp, Comparison, ComparisonOp, ConstantValue, ObservationExpression,
    PatternExpression,
};
pub use errors::{PatternError, PatternResult};
pub use path::ObjectPath;
