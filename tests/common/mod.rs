// Common test utilities for integration tests
#![allow(dead_code)]

use pdns_recordset::powerdns::client::PowerDnsClient;
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "secret";

/// Client pointed at the mock server's `/api/v1` prefix
pub fn client_for(server: &MockServer) -> PowerDnsClient {
    PowerDnsClient::new(format!("{}/api/v1", server.uri()), API_KEY, "localhost")
}

pub fn zone_path(zone: &str) -> String {
    format!("/api/v1/servers/localhost/zones/{zone}")
}

/// Zone JSON holding one rrset per `(name, type, ttl, contents)`
pub fn zone_json(zone: &str, rrsets: &[(&str, &str, u32, &[&str])]) -> Value {
    let rrsets: Vec<Value> = rrsets
        .iter()
        .map(|(name, rrtype, ttl, contents)| {
            json!({
                "name": name,
                "type": rrtype,
                "ttl": ttl,
                "records": contents
                    .iter()
                    .map(|c| json!({ "content": c, "disabled": false }))
                    .collect::<Vec<_>>(),
                "comments": [],
            })
        })
        .collect();

    json!({
        "id": format!("{zone}."),
        "name": format!("{zone}."),
        "kind": "Native",
        "rrsets": rrsets,
    })
}

/// Serve `body` for GET on `zone`, expecting exactly `times` requests
pub async fn mount_zone(server: &MockServer, zone: &str, body: Value, times: u64) {
    Mock::given(method("GET"))
        .and(path(zone_path(zone)))
        .and(header("X-API-Key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(times)
        .mount(server)
        .await;
}

/// Answer GET on `zone` the way PowerDNS does for an unknown zone
pub async fn mount_missing_zone(server: &MockServer, zone: &str, times: u64) {
    Mock::given(method("GET"))
        .and(path(zone_path(zone)))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({ "error": "Could not find domain" })),
        )
        .expect(times)
        .mount(server)
        .await;
}
