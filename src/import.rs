//! Rebuilding record set state from nothing but an external identifier.
use tracing::{debug, info};

use crate::error::{ReconcileError, Result};
use crate::reconciler::{RecordSetReconciler, collect_record_set};
use crate::record_id;
use crate::record_set::RecordSet;
use crate::validation::ValidationError;

/// Zone of a record name: everything after the first label, without the root dot.
///
/// Only right when the record sits one label below the zone apex;
/// `a.b.example.com.` yields `b.example.com` even if the zone is `example.com`.
/// Identifiers already in circulation depend on this, so it stays.
pub fn zone_from_name(name: &str) -> Option<String> {
    let (_, rest) = name.split_once('.')?;
    let zone = rest.trim_end_matches('.');
    if zone.is_empty() {
        return None;
    }
    Some(zone.to_string())
}

impl RecordSetReconciler {
    /// Resolve an identifier such as `redis.sysa.xyz.:::A:::true` into the full
    /// record set currently stored by the directory.
    pub async fn import(&self, id: &str) -> Result<RecordSet> {
        let decoded = record_id::decode(id)?;
        let zone = zone_from_name(&decoded.name)
            .ok_or(ReconcileError::InvalidRecordSet(ValidationError::EmptyZone))?;

        debug!(zone = %zone, id = %id, "Importing record set");
        let records = self
            .directory
            .list_records(&zone, &decoded.name, &decoded.rrtype)
            .await
            .map_err(|source| ReconcileError::RecordFetchFailed {
                id: id.to_string(),
                zone: zone.clone(),
                source,
            })?;

        let rrset = collect_record_set(&zone, decoded, records).ok_or_else(|| {
            ReconcileError::RecordNotFound {
                id: id.to_string(),
                zone: zone.clone(),
            }
        })?;

        info!(zone = %zone, id = %id, records = rrset.contents.len(), "Imported record set");
        Ok(rrset)
    }
}

#[cfg(test)]
#[path = "import_tests.rs"]
mod import_tests;
