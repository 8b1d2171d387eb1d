//! Capability interface of the DNS management backend.
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::record_set::RecordSet;

/// One content value of a record set as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    #[serde(rename = "type")]
    pub rrtype: String,
    pub ttl: u32,
    pub content: String,
}

/// Backend holding the authoritative record sets.
///
/// Implementations must treat deleting an absent record set as success.
#[async_trait]
pub trait Directory: Send + Sync {
    /// All records of `(name, rrtype)` in `zone`; empty when the set is absent.
    async fn list_records(&self, zone: &str, name: &str, rrtype: &str)
    -> anyhow::Result<Vec<Record>>;

    /// Atomically replace the full content set of `rrset`.
    async fn replace_record_set(&self, rrset: &RecordSet) -> anyhow::Result<()>;

    async fn delete_record_set(&self, zone: &str, name: &str, rrtype: &str) -> anyhow::Result<()>;

    async fn exists(&self, zone: &str, name: &str, rrtype: &str) -> anyhow::Result<bool> {
        Ok(!self.list_records(zone, name, rrtype).await?.is_empty())
    }
}
