//! Typed desired/observed state of one record set.
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::record_id::{self, RecordId};
use crate::validation::{
    ValidationError, validate_record_name, validate_record_type, validate_zone_name,
};

/// A named, typed group of content values sharing one TTL.
///
/// Identity is `(name, rrtype)`; zone, ttl and contents are state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSet {
    pub zone: String,
    pub name: String,
    #[serde(rename = "type")]
    pub rrtype: String,
    pub ttl: u32,
    #[serde(default)]
    pub contents: BTreeSet<String>,
    /// Delete the PTR record of every IPv4 content value along with this set.
    #[serde(default)]
    pub ptr_shadow: bool,
}

impl RecordSet {
    pub fn new(
        zone: impl Into<String>,
        name: impl Into<String>,
        rrtype: impl Into<String>,
        ttl: u32,
    ) -> Self {
        Self {
            zone: zone.into(),
            name: name.into(),
            rrtype: rrtype.into(),
            ttl,
            contents: BTreeSet::new(),
            ptr_shadow: false,
        }
    }

    pub fn with_contents<I, S>(mut self, contents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.contents = contents.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_ptr_shadow(mut self, ptr_shadow: bool) -> Self {
        self.ptr_shadow = ptr_shadow;
        self
    }

    pub fn id(&self) -> RecordId {
        RecordId::new(&self.name, &self.rrtype, self.ptr_shadow)
    }

    pub fn external_id(&self) -> String {
        record_id::encode(&self.name, &self.rrtype, self.ptr_shadow)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_zone_name(&self.zone)?;
        validate_record_name(&self.name)?;
        validate_record_type(&self.rrtype)?;
        Ok(())
    }
}
