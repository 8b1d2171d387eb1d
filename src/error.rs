// src/error.rs
use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("malformed record identifier '{id}': expected 2 or 3 segments, found {segments}")]
    MalformedIdentifier { id: String, segments: usize },

    #[error("invalid PTR flag '{flag}' in record identifier '{id}'")]
    InvalidPtrFlag { id: String, flag: String },

    #[error("invalid IPv4 address '{address}'")]
    InvalidAddress { address: String },

    #[error("invalid record set: {0}")]
    InvalidRecordSet(#[from] ValidationError),

    #[error("failed to {operation} record set {name} {rrtype} in zone {zone}: {source}")]
    RemoteWriteFailed {
        operation: &'static str,
        zone: String,
        name: String,
        rrtype: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to {operation} record set {name} {rrtype} in zone {zone}: {source}")]
    RemoteReadFailed {
        operation: &'static str,
        zone: String,
        name: String,
        rrtype: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("record '{id}' does not exist in zone {zone}")]
    RecordNotFound { id: String, zone: String },

    #[error("couldn't fetch record '{id}' from zone {zone}: {source}")]
    RecordFetchFailed {
        id: String,
        zone: String,
        #[source]
        source: anyhow::Error,
    },
}

impl ReconcileError {
    pub fn remote_write(
        operation: &'static str,
        zone: &str,
        name: &str,
        rrtype: &str,
        source: anyhow::Error,
    ) -> Self {
        ReconcileError::RemoteWriteFailed {
            operation,
            zone: zone.to_string(),
            name: name.to_string(),
            rrtype: rrtype.to_string(),
            source,
        }
    }

    pub fn remote_read(
        operation: &'static str,
        zone: &str,
        name: &str,
        rrtype: &str,
        source: anyhow::Error,
    ) -> Self {
        ReconcileError::RemoteReadFailed {
            operation,
            zone: zone.to_string(),
            name: name.to_string(),
            rrtype: rrtype.to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReconcileError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
