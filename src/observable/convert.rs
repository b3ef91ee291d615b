//! Observable-to-pattern conversion
//!
//! Turns a (type, value) observable pair into a STIX pattern string:
//! table lookup, composite splitting on the `__` delimiter, OR composition
//! when several parts survive, and observation-expression wrapping.

use crate::pattern::{
    BooleanExpression, BooleanOp, Comparison, ConstantValue, ObjectPath, ObservationExpression,
    PatternExpression,
};

use super::errors::{ObservableError, ObservableResult};
use super::mapping;

/// Delimiter joining composite type/value segments
pub const COMPOSITE_DELIMITER: &str = "__";

/// Observable type reserved as a liveness probe
pub const CHECK_TOKEN: &str = "check";

/// Outcome of a pattern conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternOutcome {
    /// A pattern was built
    Pattern(String),
    /// Liveness probe, no generation performed
    Check,
    /// Observable type (or every composite part) absent from the table
    Unknown,
}

/// Build the equality comparison identifying one observable, or `None`
/// when the type is not in the mapping table
pub fn generate_comparison(observable_type: &str, observable_value: &str) -> Option<Comparison> {
    let field_path = mapping::field_path(observable_type)?;
    let components = field_path.iter().map(|c| (*c).to_string()).collect();
    let path = ObjectPath::new(mapping::object_type(observable_type), components);
    Some(Comparison::eq(path, ConstantValue::string(observable_value)))
}

/// Convert an observable (type, value) pair into a pattern outcome
///
/// Composite inputs (types joined by `__`) are split and paired
/// positionally; unknown parts drop out. Mismatched segment counts are a
/// structured error, not a fault.
///
/// # Errors
///
/// Returns `ObservableError::MismatchedComposite` when the type and value
/// arguments split into different segment counts.
pub fn create_pattern(
    observable_type: &str,
    observable_value: &str,
) -> ObservableResult<PatternOutcome> {
    if observable_type == CHECK_TOKEN {
        return Ok(PatternOutcome::Check);
    }

    let comparisons = if observable_type.contains(COMPOSITE_DELIMITER) {
        let pairs = split_composite(observable_type, observable_value)?;
        pairs
            .into_iter()
            .filter_map(|(part_type, part_value)| generate_comparison(part_type, part_value))
            .collect()
    } else {
        generate_comparison(observable_type, observable_value)
            .into_iter()
            .collect::<Vec<_>>()
    };

    build_outcome(comparisons)
}

/// Split composite type/value arguments into positional pairs
///
/// # Errors
///
/// Returns `ObservableError::MismatchedComposite` when the two arguments
/// split into different segment counts.
pub fn split_composite<'a>(
    observable_type: &'a str,
    observable_value: &'a str,
) -> ObservableResult<Vec<(&'a str, &'a str)>> {
    let types: Vec<&str> = observable_type.split(COMPOSITE_DELIMITER).collect();
    let values: Vec<&str> = observable_value.split(COMPOSITE_DELIMITER).collect();

    if types.len() != values.len() {
        return Err(ObservableError::MismatchedComposite {
            types: types.len(),
            values: values.len(),
        });
    }

    Ok(types.into_iter().zip(values).collect())
}

/// Wrap surviving comparisons in an observation expression
///
/// One part wraps directly; two or more join with OR first. No parts at
/// all means the observable type is unknown.
fn build_outcome(mut comparisons: Vec<Comparison>) -> ObservableResult<PatternOutcome> {
    let expression = match comparisons.len() {
        0 => return Ok(PatternOutcome::Unknown),
        1 => match comparisons.pop() {
            Some(comparison) => PatternExpression::Comparison(comparison),
            None => return Ok(PatternOutcome::Unknown),
        },
        _ => {
            let operands = comparisons
                .into_iter()
                .map(PatternExpression::Comparison)
                .collect();
            PatternExpression::Boolean(BooleanExpression::new(BooleanOp::Or, operands)?)
        }
    };

    Ok(PatternOutcome::Pattern(
        ObservationExpression::new(expression).to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_token_short_circuits() {
        let outcome = create_pattern("check", "anything").unwrap();
        assert_eq!(outcome, PatternOutcome::Check);
    }

    #[test]
    fn test_simple_observable() {
        let outcome = create_pattern("IPv4-Addr", "8.8.8.8").unwrap();
        assert_eq!(
            outcome,
            PatternOutcome::Pattern("[ipv4-addr:value = '8.8.8.8']".to_string())
        );
    }

    #[test]
    fn test_hash_sub_field_observable() {
        let outcome = create_pattern("File_md5", "deadbeef").unwrap();
        assert_eq!(
            outcome,
            PatternOutcome::Pattern("[file:hashes.MD5 = 'deadbeef']".to_string())
        );
    }

    #[test]
    fn test_unknown_type() {
        let outcome = create_pattern("Not-A-Type", "x").unwrap();
        assert_eq!(outcome, PatternOutcome::Unknown);
    }

    #[test]
    fn test_composite_or_composition() {
        let outcome = create_pattern("IPv4-Addr__Url", "8.8.8.8__http://x").unwrap();
        assert_eq!(
            outcome,
            PatternOutcome::Pattern(
                "[ipv4-addr:value = '8.8.8.8' OR url:value = 'http://x']".to_string()
            )
        );
    }

    #[test]
    fn test_composite_drops_unknown_parts() {
        // One unknown part leaves a single comparison, no OR wrapper
        let outcome = create_pattern("IPv4-Addr__Not-A-Type", "8.8.8.8__x").unwrap();
        assert_eq!(
            outcome,
            PatternOutcome::Pattern("[ipv4-addr:value = '8.8.8.8']".to_string())
        );
    }

    #[test]
    fn test_composite_all_parts_unknown() {
        let outcome = create_pattern("Not-A-Type__Also-Not", "x__y").unwrap();
        assert_eq!(outcome, PatternOutcome::Unknown);
    }

    #[test]
    fn test_composite_mismatched_segments() {
        let err = create_pattern("IPv4-Addr__Url", "8.8.8.8").unwrap_err();
        assert_eq!(
            err,
            ObservableError::MismatchedComposite {
                types: 2,
                values: 1
            }
        );
    }

    #[test]
    fn test_value_with_delimiter_in_simple_type() {
        // The delimiter only matters in the type argument
        let outcome = create_pattern("Mutex", "a__b").unwrap();
        assert_eq!(
            outcome,
            PatternOutcome::Pattern("[mutex:name = 'a__b']".to_string())
        );
    }

    #[test]
    fn test_value_with_quote_escaped() {
        let outcome = create_pattern("Process", "powershell -c 'x'").unwrap();
        assert_eq!(
            outcome,
            PatternOutcome::Pattern(
                r"[process:command_line = 'powershell -c \'x\'']".to_string()
            )
        );
    }

    #[test]
    fn test_generate_comparison_unknown_type() {
        assert!(generate_comparison("Nope", "x").is_none());
    }
}
