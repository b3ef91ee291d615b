//! Observable value syntax validation
//!
//! Optional pre-generation checks on observable values. Only types with a
//! well-defined textual form are checked; everything else passes. The
//! conversion itself never requires validation; callers opt in.

use std::net::{Ipv4Addr, Ipv6Addr};

use regex::Regex;

use super::convert::{split_composite, CHECK_TOKEN, COMPOSITE_DELIMITER};
use super::errors::{ObservableError, ObservableResult};

/// Validates observable values against their type's textual form
///
/// Compiles every expression once at construction; checks are
/// deterministic and read-only.
pub struct SyntaxChecker {
    mac_addr: Regex,
    md5: Regex,
    sha1: Regex,
    sha256: Regex,
    sha512: Regex,
    as_number: Regex,
    domain_name: Regex,
    hostname: Regex,
    email_addr: Regex,
}

impl SyntaxChecker {
    /// Create a checker with all validators compiled
    ///
    /// # Errors
    ///
    /// Returns `ObservableError::Validator` if an expression fails to
    /// compile.
    pub fn new() -> ObservableResult<Self> {
        Ok(Self {
            mac_addr: compile(r"^([0-9A-Fa-f]{2}[:-]){5}([0-9A-Fa-f]{2})$")?,
            md5: compile(r"^[a-fA-F0-9]{32}$")?,
            sha1: compile(r"^[a-fA-F0-9]{40}$")?,
            sha256: compile(r"^[a-fA-F0-9]{64}$")?,
            sha512: compile(r"^[a-fA-F0-9]{128}$")?,
            as_number: compile(r"^\d{0,10}$")?,
            domain_name: compile(
                r"^(([a-zA-Z0-9]|[a-zA-Z0-9][a-zA-Z0-9-]*[a-zA-Z0-9])\.)*([A-Za-z0-9]|[A-Za-z0-9][A-Za-z0-9-]*[A-Za-z0-9])$",
            )?,
            hostname: compile(
                r"^(([a-zA-Z0-9]|[a-zA-Z0-9][a-zA-Z0-9_-]*[a-zA-Z0-9])\.)*([A-Za-z0-9]|[A-Za-z0-9][A-Za-z0-9_-]*[A-Za-z0-9])$",
            )?,
            email_addr: compile(
                r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
            )?,
        })
    }

    /// Check an observable argument pair, composite-aware
    ///
    /// The `check` probe token always passes. Composite arguments are
    /// split the same way conversion splits them, so a mismatched segment
    /// count surfaces here first.
    ///
    /// # Errors
    ///
    /// Returns `ObservableError::MismatchedComposite` on uneven composite
    /// segments and `ObservableError::InvalidSyntax` on a failed check.
    pub fn check_observable(
        &self,
        observable_type: &str,
        observable_value: &str,
    ) -> ObservableResult<()> {
        if observable_type == CHECK_TOKEN {
            return Ok(());
        }

        if observable_type.contains(COMPOSITE_DELIMITER) {
            for (part_type, part_value) in split_composite(observable_type, observable_value)? {
                self.check_value(part_type, part_value)?;
            }
            return Ok(());
        }

        self.check_value(observable_type, observable_value)
    }

    /// Check a single (type, value) pair
    fn check_value(&self, observable_type: &str, value: &str) -> ObservableResult<()> {
        let ok = match observable_type {
            "IPv4-Addr" => is_ipv4(value),
            "IPv6-Addr" => is_ipv6(value),
            "Mac-Addr" => self.mac_addr.is_match(value),
            "File_md5" => self.md5.is_match(value),
            "File_sha1" => self.sha1.is_match(value),
            "File_sha256" => self.sha256.is_match(value),
            "File_sha512" => self.sha512.is_match(value),
            "Autonomous-System" => self.as_number.is_match(value),
            "Domain-Name" => self.domain_name.is_match(value),
            "Hostname" => self.hostname.is_match(value),
            "Email-Addr" => self.email_addr.is_match(value),
            _ => true,
        };

        if ok {
            Ok(())
        } else {
            Err(ObservableError::invalid_syntax(
                observable_type,
                describe_expected(observable_type),
            ))
        }
    }
}

fn compile(expression: &str) -> ObservableResult<Regex> {
    Regex::new(expression).map_err(|e| ObservableError::Validator(e.to_string()))
}

/// Human-readable expectation for a failed check
fn describe_expected(observable_type: &str) -> &'static str {
    match observable_type {
        "IPv4-Addr" => "expected an IPv4 address with optional /0-32 prefix",
        "IPv6-Addr" => "expected an IPv6 address with optional /0-128 prefix",
        "Mac-Addr" => "expected six colon- or dash-separated hex octets",
        "File_md5" => "expected 32 hex characters",
        "File_sha1" => "expected 40 hex characters",
        "File_sha256" => "expected 64 hex characters",
        "File_sha512" => "expected 128 hex characters",
        "Autonomous-System" => "expected a number of at most 10 digits",
        "Domain-Name" => "expected a valid domain name",
        "Hostname" => "expected a valid hostname",
        "Email-Addr" => "expected a valid email address",
        _ => "unexpected value form",
    }
}

/// IPv4 address, optionally with a /0-32 CIDR prefix
fn is_ipv4(value: &str) -> bool {
    let (addr, prefix) = split_cidr(value);
    if !prefix_in_range(prefix, 32) {
        return false;
    }
    addr.parse::<Ipv4Addr>().is_ok()
}

/// IPv6 address, optionally with a /0-128 CIDR prefix
fn is_ipv6(value: &str) -> bool {
    let (addr, prefix) = split_cidr(value);
    if !prefix_in_range(prefix, 128) {
        return false;
    }
    addr.parse::<Ipv6Addr>().is_ok()
}

fn split_cidr(value: &str) -> (&str, Option<&str>) {
    match value.split_once('/') {
        Some((addr, prefix)) => (addr, Some(prefix)),
        None => (value, None),
    }
}

fn prefix_in_range(prefix: Option<&str>, max: u8) -> bool {
    match prefix {
        None => true,
        Some(p) => p.parse::<u8>().map(|n| n <= max).unwrap_or(false),
    }
}
