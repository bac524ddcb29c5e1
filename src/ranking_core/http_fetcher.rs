//! HTTP fetch backend - GETs per-resource endpoints from a REST API

use super::fetcher_backend::{FetchError, ResourceFetcher};
use super::models::Resource;
use async_trait::async_trait;
use std::time::Duration;

pub struct HttpFetcher {
    base_url: String,
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(base_url: String) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| FetchError::Http(e.to_string()))?;

        Ok(Self { base_url, client })
    }

    fn resource_url(&self, resource: Resource) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            resource.as_str()
        )
    }
}

#[async_trait]
impl ResourceFetcher for HttpFetcher {
    async fn fetch_bytes(&self, resource: Resource) -> Result<Vec<u8>, FetchError> {
        let url = self.resource_url(resource);
        log::debug!("🌐 Fetching {} from {}", resource.as_str(), url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Http(format!("request to {} failed: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(FetchError::Http(format!(
                "{} returned HTTP {}",
                url,
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Http(format!("reading body from {} failed: {}", url, e)))?;

        Ok(bytes.to_vec())
    }

    fn backend_type(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_url_joins_base_and_name() {
        let fetcher = HttpFetcher::new("https://jsonplaceholder.typicode.com".to_string()).unwrap();
        assert_eq!(
            fetcher.resource_url(Resource::Comments),
            "https://jsonplaceholder.typicode.com/comments"
        );
    }

    #[test]
    fn test_resource_url_tolerates_trailing_slash() {
        let fetcher = HttpFetcher::new("http://localhost:3000/".to_string()).unwrap();
        assert_eq!(
            fetcher.resource_url(Resource::Users),
            "http://localhost:3000/users"
        );
    }
}
