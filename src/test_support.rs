//! In-memory [`Directory`] that records every call it receives.
use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::directory::{Directory, Record};
use crate::record_set::RecordSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List(String, String, String),
    Replace(String, String, String),
    Delete(String, String, String),
    Exists(String, String, String),
}

type Key = (String, String, String);

#[derive(Default)]
pub struct MemoryDirectory {
    pub sets: Mutex<BTreeMap<Key, (u32, Vec<String>)>>,
    pub calls: Mutex<Vec<Call>>,
    pub fail_list: bool,
    pub fail_replace: bool,
    pub fail_delete: bool,
    pub fail_exists: bool,
}

fn key(zone: &str, name: &str, rrtype: &str) -> Key {
    (zone.to_string(), name.to_string(), rrtype.to_string())
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, zone: &str, name: &str, rrtype: &str, ttl: u32, contents: &[&str]) {
        self.sets.lock().unwrap().insert(
            key(zone, name, rrtype),
            (ttl, contents.iter().map(|c| c.to_string()).collect()),
        );
    }

    pub fn contains(&self, zone: &str, name: &str, rrtype: &str) -> bool {
        self.sets
            .lock()
            .unwrap()
            .contains_key(&key(zone, name, rrtype))
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn deletes(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Delete(..)))
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Directory for MemoryDirectory {
    async fn list_records(
        &self,
        zone: &str,
        name: &str,
        rrtype: &str,
    ) -> anyhow::Result<Vec<Record>> {
        self.record(Call::List(zone.into(), name.into(), rrtype.into()));
        if self.fail_list {
            anyhow::bail!("list failed");
        }
        let sets = self.sets.lock().unwrap();
        Ok(sets
            .get(&key(zone, name, rrtype))
            .map(|(ttl, contents)| {
                contents
                    .iter()
                    .map(|content| Record {
                        name: name.to_string(),
                        rrtype: rrtype.to_string(),
                        ttl: *ttl,
                        content: content.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn replace_record_set(&self, rrset: &RecordSet) -> anyhow::Result<()> {
        self.record(Call::Replace(
            rrset.zone.clone(),
            rrset.name.clone(),
            rrset.rrtype.clone(),
        ));
        if self.fail_replace {
            anyhow::bail!("replace failed");
        }
        self.sets.lock().unwrap().insert(
            key(&rrset.zone, &rrset.name, &rrset.rrtype),
            (rrset.ttl, rrset.contents.iter().cloned().collect()),
        );
        Ok(())
    }

    async fn delete_record_set(&self, zone: &str, name: &str, rrtype: &str) -> anyhow::Result<()> {
        self.record(Call::Delete(zone.into(), name.into(), rrtype.into()));
        if self.fail_delete {
            anyhow::bail!("delete failed");
        }
        self.sets.lock().unwrap().remove(&key(zone, name, rrtype));
        Ok(())
    }

    async fn exists(&self, zone: &str, name: &str, rrtype: &str) -> anyhow::Result<bool> {
        self.record(Call::Exists(zone.into(), name.into(), rrtype.into()));
        if self.fail_exists {
            anyhow::bail!("exists failed");
        }
        Ok(self.contains(zone, name, rrtype))
    }
}
