//! Reconcile declared DNS record sets against a PowerDNS server.
//!
//! [`reconciler::RecordSetReconciler`] drives create/read/delete/import through
//! any [`directory::Directory`]; [`powerdns::client::PowerDnsClient`] is the
//! HTTP implementation.

pub mod config;
pub mod directory;
pub mod error;
pub mod import;
pub mod powerdns;
pub mod reconciler;
pub mod record_id;
pub mod record_set;
pub mod reverse;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;

pub use directory::{Directory, Record};
pub use error::{ReconcileError, Result};
pub use reconciler::RecordSetReconciler;
pub use record_set::RecordSet;
