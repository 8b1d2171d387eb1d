//! Stable external identifier for a record set.
//!
//! The identifier is `<name>:::<type>` with an optional `:::true` suffix when the
//! record set shadows its addresses with PTR records. `:::` never occurs in a DNS
//! name or a type mnemonic, so splitting on it is unambiguous.

use crate::error::{ReconcileError, Result};

pub const DELIMITER: &str = ":::";

const PTR_TRUE: &str = "true";
const PTR_FALSE: &str = "false";

/// Decoded form of an external identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordId {
    pub name: String,
    pub rrtype: String,
    pub ptr_shadow: bool,
}

impl RecordId {
    pub fn new(name: impl Into<String>, rrtype: impl Into<String>, ptr_shadow: bool) -> Self {
        Self {
            name: name.into(),
            rrtype: rrtype.into(),
            ptr_shadow,
        }
    }

    pub fn encode(&self) -> String {
        encode(&self.name, &self.rrtype, self.ptr_shadow)
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encode())
    }
}

pub fn encode(name: &str, rrtype: &str, ptr_shadow: bool) -> String {
    if ptr_shadow {
        format!("{name}{DELIMITER}{rrtype}{DELIMITER}{PTR_TRUE}")
    } else {
        format!("{name}{DELIMITER}{rrtype}")
    }
}

/// Split an identifier back into its parts.
///
/// A third segment must be exactly `true` or `false`; anything else is rejected
/// rather than defaulted.
pub fn decode(id: &str) -> Result<RecordId> {
    let parts: Vec<&str> = id.split(DELIMITER).collect();

    let ptr_shadow = match parts.as_slice() {
        [_, _] => false,
        [_, _, flag] => match *flag {
            PTR_TRUE => true,
            PTR_FALSE => false,
            other => {
                return Err(ReconcileError::InvalidPtrFlag {
                    id: id.to_string(),
                    flag: other.to_string(),
                });
            }
        },
        _ => {
            return Err(ReconcileError::MalformedIdentifier {
                id: id.to_string(),
                segments: parts.len(),
            });
        }
    };

    Ok(RecordId::new(parts[0], parts[1], ptr_shadow))
}

#[cfg(test)]
#[path = "record_id_tests.rs"]
mod record_id_tests;
