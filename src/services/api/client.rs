//! HTTP client for the console admin API.
//!
//! All requests run on the background executor via `smol::unblock` around
//! the blocking HTTP client.

use anyhow::{anyhow, Context, Result};
use base64::Engine as _;
use url::Url;

use super::types::{ApiError, Bucket, BucketList, MakeBucketRequest};

/// Client for a single console endpoint.
///
/// Cheap to clone; each request borrows nothing from the client, so clones
/// can be moved freely into spawned tasks.
#[derive(Debug, Clone)]
pub struct ConsoleClient {
    base_url: Url,
    access_key: String,
    secret_key: Option<String>,
}

impl ConsoleClient {
    /// Create a client for the given endpoint.
    pub fn new(endpoint: &str, access_key: String, secret_key: Option<String>) -> Result<Self> {
        let base_url = Url::parse(endpoint)
            .with_context(|| format!("invalid endpoint URL: {}", endpoint))?;
        if base_url.scheme() != "http" && base_url.scheme() != "https" {
            return Err(anyhow!("endpoint must be an http(s) URL: {}", endpoint));
        }
        Ok(Self {
            base_url,
            access_key,
            secret_key,
        })
    }

    /// The endpoint this client talks to.
    pub fn endpoint(&self) -> &str {
        self.base_url.as_str()
    }

    fn auth_header(&self) -> String {
        let credentials = format!(
            "{}:{}",
            self.access_key,
            self.secret_key.as_deref().unwrap_or_default()
        );
        format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode(credentials)
        )
    }

    fn api_url(&self, path: &str, query: &[(&str, String)]) -> Result<Url> {
        let mut url = self
            .base_url
            .join(path)
            .with_context(|| format!("invalid API path: {}", path))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    fn list_buckets_url(&self, offset: usize, limit: usize) -> Result<Url> {
        self.api_url(
            "/api/v1/buckets",
            &[
                ("offset", offset.to_string()),
                ("limit", limit.to_string()),
            ],
        )
    }

    async fn get(&self, url: Url) -> Result<String> {
        let auth = self.auth_header();
        smol::unblock(move || {
            let response = smolhttp::Client::new(url.as_str())
                .map_err(|e| anyhow!("failed to create HTTP client: {}", e))?
                .get()
                .headers(vec![("Authorization".to_string(), auth)])
                .send()
                .map_err(|e| anyhow!("request failed: {}", e))?;
            Ok::<String, anyhow::Error>(response.text())
        })
        .await
    }

    async fn post(&self, url: Url, body: Vec<u8>) -> Result<String> {
        let auth = self.auth_header();
        smol::unblock(move || {
            let response = smolhttp::Client::new(url.as_str())
                .map_err(|e| anyhow!("failed to create HTTP client: {}", e))?
                .post()
                .headers(vec![
                    ("Authorization".to_string(), auth),
                    ("Content-Type".to_string(), "application/json".to_string()),
                ])
                .body(body)
                .send()
                .map_err(|e| anyhow!("request failed: {}", e))?;
            Ok::<String, anyhow::Error>(response.text())
        })
        .await
    }

    async fn delete(&self, url: Url) -> Result<String> {
        let auth = self.auth_header();
        smol::unblock(move || {
            let response = smolhttp::Client::new(url.as_str())
                .map_err(|e| anyhow!("failed to create HTTP client: {}", e))?
                .delete()
                .headers(vec![("Authorization".to_string(), auth)])
                .send()
                .map_err(|e| anyhow!("request failed: {}", e))?;
            Ok::<String, anyhow::Error>(response.text())
        })
        .await
    }

    /// Fetch one page of buckets.
    pub async fn list_buckets(&self, offset: usize, limit: usize) -> Result<Vec<Bucket>> {
        let url = self.list_buckets_url(offset, limit)?;
        let body = self.get(url).await?;
        match serde_json::from_str::<BucketList>(&body) {
            Ok(list) => Ok(list.into_buckets()),
            Err(_) => Err(Self::error_from_body(&body)),
        }
    }

    /// Create a bucket.
    pub async fn create_bucket(&self, name: &str) -> Result<()> {
        let url = self.api_url("/api/v1/buckets", &[])?;
        let request = MakeBucketRequest {
            name: name.to_string(),
        };
        let body = self.post(url, serde_json::to_vec(&request)?).await?;
        // Success is an empty body; some servers echo the created bucket.
        if body.trim().is_empty() {
            return Ok(());
        }
        if let Ok(err) = serde_json::from_str::<ApiError>(&body) {
            return Err(anyhow!("{}", err));
        }
        Ok(())
    }

    /// Fetch a single bucket's document.
    pub async fn bucket_info(&self, name: &str) -> Result<Bucket> {
        let url = self.api_url(&format!("/api/v1/buckets/{}", name), &[])?;
        let body = self.get(url).await?;
        match serde_json::from_str::<Bucket>(&body) {
            Ok(bucket) => Ok(bucket),
            Err(_) => Err(Self::error_from_body(&body)),
        }
    }

    /// Delete a bucket.
    pub async fn delete_bucket(&self, name: &str) -> Result<()> {
        let url = self.api_url(&format!("/api/v1/buckets/{}", name), &[])?;
        let body = self.delete(url).await?;
        if body.trim().is_empty() {
            return Ok(());
        }
        if let Ok(err) = serde_json::from_str::<ApiError>(&body) {
            return Err(anyhow!("{}", err));
        }
        Ok(())
    }

    /// Validate endpoint and credentials with a minimal listing call.
    pub async fn validate(&self) -> Result<()> {
        self.list_buckets(0, 1).await.map(|_| ())
    }

    fn error_from_body(body: &str) -> anyhow::Error {
        match serde_json::from_str::<ApiError>(body) {
            Ok(err) => anyhow!("{}", err),
            Err(_) => {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    anyhow!("empty response from server")
                } else {
                    anyhow!("unexpected response: {}", truncate(trimmed, 200))
                }
            }
        }
    }
}

fn truncate(s: &str, max_len: usize) -> &str {
    match s.char_indices().nth(max_len) {
        Some((ix, _)) => &s[..ix],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ConsoleClient {
        ConsoleClient::new("http://localhost:9090", "admin".to_string(), None).unwrap()
    }

    #[test]
    fn test_rejects_non_http_endpoint() {
        assert!(ConsoleClient::new("ftp://host", "k".to_string(), None).is_err());
        assert!(ConsoleClient::new("not a url", "k".to_string(), None).is_err());
    }

    #[test]
    fn test_list_buckets_url_carries_offset_and_limit() {
        let url = client().list_buckets_url(20, 10).unwrap();
        assert_eq!(url.path(), "/api/v1/buckets");
        let query: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert!(query.contains(&("offset".to_string(), "20".to_string())));
        assert!(query.contains(&("limit".to_string(), "10".to_string())));
    }

    #[test]
    fn test_bucket_url_includes_name() {
        let url = client().api_url("/api/v1/buckets/logs", &[]).unwrap();
        assert_eq!(url.path(), "/api/v1/buckets/logs");
    }

    #[test]
    fn test_error_from_body_prefers_api_error() {
        let err = ConsoleClient::error_from_body(r#"{"message": "bucket exists"}"#);
        assert_eq!(err.to_string(), "bucket exists");

        let raw = ConsoleClient::error_from_body("502 bad gateway");
        assert!(raw.to_string().contains("502 bad gateway"));
    }
}
