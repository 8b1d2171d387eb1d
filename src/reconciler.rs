//! Create/read/delete reconciliation of forward record sets.
//!
//! The reconciler keeps no state between calls; everything it needs comes from
//! the [`RecordSet`] or identifier it is handed and from the [`Directory`].
//! Deleting a record set with `ptr_shadow` also removes the PTR record of every
//! IPv4 content value, probing the /24, /16 and /8 reverse zones in that order
//! and stopping at the first one that holds it.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::directory::{Directory, Record};
use crate::error::{ReconcileError, Result};
use crate::record_id::{self, RecordId};
use crate::record_set::RecordSet;
use crate::reverse::ReverseZones;

pub const PTR_TYPE: &str = "PTR";

#[derive(Clone)]
pub struct RecordSetReconciler {
    pub(crate) directory: Arc<dyn Directory>,
}

impl RecordSetReconciler {
    pub fn new(directory: Arc<dyn Directory>) -> Self {
        Self { directory }
    }

    /// Push `desired` to the directory and return its identifier together with
    /// the state the directory actually stored.
    ///
    /// An empty content set means the record set should not exist, so it is
    /// deleted instead of written.
    pub async fn create(&self, desired: &RecordSet) -> Result<(String, RecordSet)> {
        desired.validate()?;

        if desired.contents.is_empty() {
            debug!(
                zone = %desired.zone,
                name = %desired.name,
                rrtype = %desired.rrtype,
                "Deleting empty record set"
            );
            self.directory
                .delete_record_set(&desired.zone, &desired.name, &desired.rrtype)
                .await
                .map_err(|e| {
                    ReconcileError::remote_write(
                        "delete",
                        &desired.zone,
                        &desired.name,
                        &desired.rrtype,
                        e,
                    )
                })?;
        } else {
            debug!(
                zone = %desired.zone,
                name = %desired.name,
                rrtype = %desired.rrtype,
                records = desired.contents.len(),
                ptr_shadow = desired.ptr_shadow,
                "Creating record set"
            );
            self.directory
                .replace_record_set(desired)
                .await
                .map_err(|e| {
                    ReconcileError::remote_write(
                        "replace",
                        &desired.zone,
                        &desired.name,
                        &desired.rrtype,
                        e,
                    )
                })?;
        }

        let id = desired.external_id();
        info!(zone = %desired.zone, id = %id, "Reconciled record set");

        let state = match self.read(&desired.zone, &id).await? {
            Some(state) => state,
            None => RecordSet {
                contents: BTreeSet::new(),
                ..desired.clone()
            },
        };

        Ok((id, state))
    }

    /// Fetch the current state of the record set behind `id`.
    ///
    /// `Ok(None)` means the record set is gone.
    pub async fn read(&self, zone: &str, id: &str) -> Result<Option<RecordSet>> {
        let id = record_id::decode(id)?;

        debug!(zone = %zone, id = %id, "Reading record set");
        let records = self
            .directory
            .list_records(zone, &id.name, &id.rrtype)
            .await
            .map_err(|e| ReconcileError::remote_read("read", zone, &id.name, &id.rrtype, e))?;

        Ok(collect_record_set(zone, id, records))
    }

    /// Delete `rrset`, then its shadow PTR records when `ptr_shadow` is set.
    ///
    /// PTR cleanup only runs once the forward record set is gone.
    pub async fn delete(&self, rrset: &RecordSet) -> Result<()> {
        info!(zone = %rrset.zone, id = %rrset.id(), "Deleting record set");
        self.directory
            .delete_record_set(&rrset.zone, &rrset.name, &rrset.rrtype)
            .await
            .map_err(|e| {
                ReconcileError::remote_write("delete", &rrset.zone, &rrset.name, &rrset.rrtype, e)
            })?;

        if !rrset.ptr_shadow {
            return Ok(());
        }

        for content in &rrset.contents {
            let reverse = match ReverseZones::for_address(content) {
                Ok(reverse) => reverse,
                Err(_) => {
                    warn!(
                        name = %rrset.name,
                        content = %content,
                        "Skipping PTR cleanup for non-IPv4 content"
                    );
                    continue;
                }
            };
            self.delete_ptr(&reverse).await?;
        }

        Ok(())
    }

    /// Remove the PTR record from the first candidate zone that has it.
    ///
    /// Returns the zone it was deleted from, or `None` if no candidate held it.
    pub async fn delete_ptr(&self, reverse: &ReverseZones) -> Result<Option<String>> {
        for zone in &reverse.candidates {
            let found = self
                .directory
                .exists(zone, &reverse.ptr_name, PTR_TYPE)
                .await
                .map_err(|e| {
                    ReconcileError::remote_read("check", zone, &reverse.ptr_name, PTR_TYPE, e)
                })?;

            if found {
                info!(zone = %zone, name = %reverse.ptr_name, "Deleting PTR record");
                self.directory
                    .delete_record_set(zone, &reverse.ptr_name, PTR_TYPE)
                    .await
                    .map_err(|e| {
                        ReconcileError::remote_write("delete", zone, &reverse.ptr_name, PTR_TYPE, e)
                    })?;
                return Ok(Some(zone.clone()));
            }
        }

        debug!(name = %reverse.ptr_name, "No PTR record in any candidate zone");
        Ok(None)
    }

    pub async fn exists(&self, zone: &str, name: &str, rrtype: &str) -> Result<bool> {
        info!(zone = %zone, name = %name, rrtype = %rrtype, "Checking existence of record set");
        self.directory
            .exists(zone, name, rrtype)
            .await
            .map_err(|e| ReconcileError::remote_read("check", zone, name, rrtype, e))
    }
}

/// Fold directory rows into a record set; `None` when there are none.
///
/// The TTL of the first row wins if the backend reports several.
pub(crate) fn collect_record_set(
    zone: &str,
    id: RecordId,
    records: Vec<Record>,
) -> Option<RecordSet> {
    let ttl = records.first()?.ttl;

    Some(RecordSet {
        zone: zone.to_string(),
        name: id.name,
        rrtype: id.rrtype,
        ttl,
        contents: records.into_iter().map(|r| r.content).collect(),
        ptr_shadow: id.ptr_shadow,
    })
}

#[cfg(test)]
#[path = "reconciler_tests.rs"]
mod reconciler_tests;
