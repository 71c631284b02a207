use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;

use super::protocol::normalize_base_path;
use super::types::PeerClient;

/// HTTP client for one remote peer.
///
/// Issues `GET <peer><base_path><group>/<key>` and returns the raw body.
/// The underlying `reqwest::Client` is shared across all peer clients of a
/// pool, so connections are pooled per origin.
pub struct HttpPeerClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpPeerClient {
    pub fn new(peer: &str, base_path: &str, http: reqwest::Client) -> Self {
        Self {
            base_url: format!("{}{}", peer.trim_end_matches('/'), normalize_base_path(base_path)),
            http,
        }
    }
}

#[async_trait]
impl PeerClient for HttpPeerClient {
    async fn fetch(&self, group: &str, key: &str) -> Result<Bytes> {
        let url = format!(
            "{}{}/{}",
            self.base_url,
            urlencoding::encode(group),
            urlencoding::encode(key)
        );

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("peer returned {status} for {url}");
        }

        Ok(response.bytes().await?)
    }
}
