use anyhow::bail;

pub const DEFAULT_SERVER_ID: &str = "localhost";

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub server_url: String, // "http://127.0.0.1:8081" or "pdns.example.net:8081"
    pub api_key: String,
    pub server_id: String,
}

impl ClientConfig {
    pub fn new(server_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            api_key: api_key.into(),
            server_id: DEFAULT_SERVER_ID.to_string(),
        }
    }

    /// Server URL with a scheme and without a trailing slash.
    pub fn server_url(&self) -> anyhow::Result<String> {
        let trimmed = self.server_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            bail!("PowerDNS server URL cannot be empty");
        }

        let with_scheme = if trimmed.contains("://") {
            trimmed.to_string()
        } else {
            format!("http://{trimmed}")
        };

        let url = reqwest::Url::parse(&with_scheme)?;
        if url.host_str().is_none() {
            bail!("PowerDNS server URL '{}' has no host", self.server_url);
        }
        Ok(with_scheme)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
