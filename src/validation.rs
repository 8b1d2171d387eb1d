use regex::Regex;

use crate::record_id::DELIMITER;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("record name is empty")]
    EmptyName,
    #[error("record name '{0}' contains the identifier delimiter ':::'")]
    NameContainsDelimiter(String),
    #[error("record name '{0}' contains whitespace")]
    NameContainsWhitespace(String),
    #[error("zone name is empty")]
    EmptyZone,
    #[error("record type '{0}' is not an upper-case type token (e.g. A, AAAA, TYPE65534)")]
    InvalidType(String),
}

lazy_static::lazy_static! {
    /// Upper-case mnemonics and the generic TYPEnnn form
    static ref RRTYPE_RE: Regex = Regex::new(r"^[A-Z][A-Z0-9]*$").unwrap();
}

pub fn validate_record_name(name: &str) -> Result<(), ValidationError> {
    if name.trim_end_matches('.').is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if name.contains(DELIMITER) {
        return Err(ValidationError::NameContainsDelimiter(name.to_string()));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(ValidationError::NameContainsWhitespace(name.to_string()));
    }
    Ok(())
}

pub fn validate_record_type(rrtype: &str) -> Result<(), ValidationError> {
    if !RRTYPE_RE.is_match(rrtype) {
        return Err(ValidationError::InvalidType(rrtype.to_string()));
    }
    Ok(())
}

pub fn validate_zone_name(zone: &str) -> Result<(), ValidationError> {
    if zone.trim_end_matches('.').is_empty() {
        return Err(ValidationError::EmptyZone);
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod validation_tests;
