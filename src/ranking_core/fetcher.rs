//! Unified fetcher interface for named resources
//!
//! Routes fetches to either the file or HTTP backend based on configuration.

use super::fetcher_backend::{FetchError, ResourceFetcher};
use super::file_fetcher::FileFetcher;
use super::http_fetcher::HttpFetcher;
use super::models::Resource;
use crate::config::BackendType;
use async_trait::async_trait;
use std::path::PathBuf;

/// Unified fetcher that routes to either the file or HTTP backend
pub enum Fetcher {
    File(FileFetcher),
    Http(HttpFetcher),
}

impl Fetcher {
    /// Create a new fetcher based on backend type
    pub fn new(
        backend: BackendType,
        data_dir: PathBuf,
        base_url: String,
    ) -> Result<Self, FetchError> {
        match backend {
            BackendType::File => Ok(Fetcher::File(FileFetcher::new(data_dir))),
            BackendType::Http => Ok(Fetcher::Http(HttpFetcher::new(base_url)?)),
        }
    }
}

#[async_trait]
impl ResourceFetcher for Fetcher {
    async fn fetch_bytes(&self, resource: Resource) -> Result<Vec<u8>, FetchError> {
        match self {
            Fetcher::File(f) => f.fetch_bytes(resource).await,
            Fetcher::Http(f) => f.fetch_bytes(resource).await,
        }
    }

    fn backend_type(&self) -> &'static str {
        match self {
            Fetcher::File(_) => "file",
            Fetcher::Http(_) => "http",
        }
    }
}
