//! Object path references per the STIX 2.1 patterning grammar
//!
//! An object path names an observable object type and the property chain a
//! comparison applies to, e.g. `file:hashes.'SHA-1'` or `ipv4-addr:value`.

use std::fmt;

use super::ast::escape_string_literal;

/// Reference to an object type and a property path within it
///
/// Components are ordered outermost first. The path must carry at least one
/// component; callers build paths from curated tables that guarantee this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectPath {
    object_type: String,
    components: Vec<String>,
}

impl ObjectPath {
    /// Create an object path from an object type and property components
    pub fn new(object_type: impl Into<String>, components: Vec<String>) -> Self {
        Self {
            object_type: object_type.into(),
            components,
        }
    }

    /// The object type segment (lowercase in rendered patterns)
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    /// Property components, outermost first
    pub fn components(&self) -> &[String] {
        &self.components
    }
}

/// A component renders unquoted only when it is a plain identifier:
/// no leading digit, every character alphanumeric or underscore.
fn is_plain_component(component: &str) -> bool {
    let mut chars = component.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl fmt::Display for ObjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.object_type)?;

        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            if is_plain_component(component) {
                f.write_str(component)?;
            } else {
                let mut escaped = String::with_capacity(component.len());
                escape_string_literal(&mut escaped, component);
                write!(f, "'{}'", escaped)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_component_path() {
        let path = ObjectPath::new("ipv4-addr", vec!["value".to_string()]);
        assert_eq!(path.to_string(), "ipv4-addr:value");
    }

    #[test]
    fn test_nested_plain_components() {
        let path = ObjectPath::new(
            "file",
            vec!["hashes".to_string(), "MD5".to_string()],
        );
        assert_eq!(path.to_string(), "file:hashes.MD5");
    }

    #[test]
    fn test_hyphenated_component_quoted() {
        // "SHA-1" is not a plain identifier and must render quoted
        let path = ObjectPath::new(
            "file",
            vec!["hashes".to_string(), "SHA-1".to_string()],
        );
        assert_eq!(path.to_string(), "file:hashes.'SHA-1'");
    }

    #[test]
    fn test_leading_digit_component_quoted() {
        let path = ObjectPath::new("x", vec!["0field".to_string()]);
        assert_eq!(path.to_string(), "x:'0field'");
    }

    #[test]
    fn test_accessors() {
        let path = ObjectPath::new("url", vec!["value".to_string()]);
        assert_eq!(path.object_type(), "url");
        assert_eq!(path.components(), &["value".to_string()]);
    }
}
