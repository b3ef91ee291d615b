//! stixgen - convert observables into STIX pattern expressions
//!
//! A single-shot conversion: a (type, value) observable pair goes in, a
//! `{status, data}` JSON result with a STIX 2.1 pattern string comes out.

pub mod cli;
pub mod observable;
pub mod observability;
pub mod pattern;
