use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct PdnsZone {
    pub id: String,   // "/api/.../zones/example.com."
    pub name: String, // "example.com."
    #[serde(default)]
    pub kind: Option<String>, // "Native", etc.
    #[serde(default)]
    pub rrsets: Vec<PdnsRrset>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PdnsRrset {
    pub name: String, // "www.example.com."
    #[serde(rename = "type")]
    pub rrtype: String, // "A", "PTR", ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>, // absent on DELETE
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changetype: Option<String>, // "REPLACE" / "DELETE" when patching
    #[serde(default)]
    pub records: Vec<PdnsRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PdnsRecord {
    pub content: String, // "192.0.2.1" or "ns1.example.net."
    #[serde(default)]
    pub disabled: bool,
    // Ask the server to create the matching PTR record.
    #[serde(rename = "set-ptr", default, skip_serializing_if = "std::ops::Not::not")]
    pub set_ptr: bool,
}

#[derive(Debug, Serialize)]
pub struct PdnsPatch<'a> {
    pub rrsets: &'a [PdnsRrset],
}

#[derive(Debug, Deserialize)]
pub struct PdnsError {
    pub error: String,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
