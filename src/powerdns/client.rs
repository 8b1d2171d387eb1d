use crate::config::ClientConfig;
use crate::directory::{Directory, Record};
use crate::powerdns::types::*;
use crate::record_set::RecordSet;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, info};

#[derive(Clone)]
pub struct PowerDnsClient {
    http: Client,
    base_url: String, // e.g. "http://127.0.0.1:8081/api/v1"
    api_key: String,
    server_id: String, // usually "localhost"
}

impl PowerDnsClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        server_id: impl Into<String>,
    ) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            server_id: server_id.into(),
        }
    }

    /// Build a client for `config`, probing whether the server exposes the
    /// versioned `/api/v1` prefix.
    pub async fn connect(config: &ClientConfig) -> anyhow::Result<Self> {
        let server_url = config.server_url()?;
        let probe = Self::new(
            format!("{server_url}/api/v1"),
            &config.api_key,
            &config.server_id,
        );

        let res = probe
            .auth_header(probe.http.get(format!("{}/servers", probe.base_url)))
            .send()
            .await?;
        if res.status().is_success() {
            info!(url = %probe.base_url, "Using PowerDNS API v1");
            return Ok(probe);
        }

        info!(
            url = %server_url,
            status = %res.status(),
            "PowerDNS API v1 not available, using unversioned API"
        );
        Ok(Self::new(server_url, &config.api_key, &config.server_id))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn auth_header(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("X-API-Key", &self.api_key)
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/servers/{}/{}",
            self.base_url,
            self.server_id,
            path.trim_start_matches('/')
        )
    }

    /// Fetch a zone with its rrsets; `None` when the server doesn't know it.
    pub async fn get_zone(&self, name: &str) -> anyhow::Result<Option<PdnsZone>> {
        let url = self.url(&format!("zones/{}", name));
        debug!(url = %url, "GET zone");
        let res = self.auth_header(self.http.get(url)).send().await?;
        match res.status() {
            StatusCode::NOT_FOUND => Ok(None),
            StatusCode::UNPROCESSABLE_ENTITY => {
                // PowerDNS reports an unknown zone as 422 "Could not find domain ..."
                let status = res.status();
                let message = res
                    .json::<PdnsError>()
                    .await
                    .map(|body| body.error)
                    .unwrap_or_default();
                if is_unknown_zone(&message) {
                    return Ok(None);
                }
                Err(anyhow::anyhow!("PowerDNS get_zone failed with {status}: {message}"))
            }
            status if status.is_success() => Ok(Some(res.json::<PdnsZone>().await?)),
            _ => Err(api_error("get_zone", res).await),
        }
    }

    pub async fn patch_rrsets(&self, zone_name: &str, rrsets: &[PdnsRrset]) -> anyhow::Result<()> {
        let url = self.url(&format!("zones/{}", zone_name));
        debug!(url = %url, rrsets = rrsets.len(), "PATCH zone");
        let body = PdnsPatch { rrsets };
        let res = self
            .auth_header(self.http.patch(url))
            .json(&body)
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(api_error("patch_rrsets", res).await);
        }
        Ok(())
    }
}

const UNKNOWN_ZONE_MESSAGE: &str = "Could not find domain";

fn is_unknown_zone(message: &str) -> bool {
    message.starts_with(UNKNOWN_ZONE_MESSAGE)
}

async fn api_error(operation: &str, res: Response) -> anyhow::Error {
    let status = res.status();
    match res.json::<PdnsError>().await {
        Ok(body) => {
            anyhow::anyhow!("PowerDNS {operation} failed with {status}: {}", body.error)
        }
        Err(_) => anyhow::anyhow!("PowerDNS {operation} failed with {status}"),
    }
}

#[async_trait]
impl Directory for PowerDnsClient {
    async fn list_records(
        &self,
        zone: &str,
        name: &str,
        rrtype: &str,
    ) -> anyhow::Result<Vec<Record>> {
        let Some(zone) = self.get_zone(zone).await? else {
            return Ok(Vec::new());
        };

        let records = zone
            .rrsets
            .into_iter()
            .filter(|rr| rr.name == name && rr.rrtype == rrtype)
            .flat_map(|rr| {
                let PdnsRrset {
                    name,
                    rrtype,
                    ttl,
                    records,
                    ..
                } = rr;
                let ttl = ttl.unwrap_or_default();
                records.into_iter().map(move |rec| Record {
                    name: name.clone(),
                    rrtype: rrtype.clone(),
                    ttl,
                    content: rec.content,
                })
            })
            .collect();

        Ok(records)
    }

    async fn replace_record_set(&self, rrset: &RecordSet) -> anyhow::Result<()> {
        let patch = PdnsRrset {
            name: rrset.name.clone(),
            rrtype: rrset.rrtype.clone(),
            ttl: Some(rrset.ttl),
            changetype: Some("REPLACE".into()),
            records: rrset
                .contents
                .iter()
                .map(|content| PdnsRecord {
                    content: content.clone(),
                    disabled: false,
                    set_ptr: rrset.ptr_shadow,
                })
                .collect(),
        };
        self.patch_rrsets(&rrset.zone, &[patch]).await
    }

    async fn delete_record_set(&self, zone: &str, name: &str, rrtype: &str) -> anyhow::Result<()> {
        let patch = PdnsRrset {
            name: name.to_string(),
            rrtype: rrtype.to_string(),
            ttl: None,
            changetype: Some("DELETE".into()),
            records: Vec::new(),
        };
        self.patch_rrsets(zone, &[patch]).await
    }
}
