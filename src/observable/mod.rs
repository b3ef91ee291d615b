//! Observable conversion subsystem
//!
//! Maps observable (type, value) pairs onto STIX pattern expressions:
//! a fixed type-to-field-path table, composite splitting on the `__`
//! delimiter, and optional value-syntax validation.

mod convert;
mod errors;
mod mapping;
mod syntax;

pub use convert::{
    create_pattern, generate_comparison, split_composite, PatternOutcome, CHECK_TOKEN,
    COMPOSITE_DELIMITER,
};
pub use errors::{ObservableError, ObservableResult};
pub use mapping::{field_path, is_supported, object_type};
pub use syntax::SyntaxChecker;
