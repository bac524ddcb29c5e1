//! Filesystem fetch backend - reads per-resource JSON files from a data directory

use super::fetcher_backend::{FetchError, ResourceFetcher};
use super::models::Resource;
use async_trait::async_trait;
use std::path::PathBuf;

pub struct FileFetcher {
    data_dir: PathBuf,
}

impl FileFetcher {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    fn resource_path(&self, resource: Resource) -> PathBuf {
        self.data_dir.join(format!("{}.json", resource.as_str()))
    }
}

#[async_trait]
impl ResourceFetcher for FileFetcher {
    async fn fetch_bytes(&self, resource: Resource) -> Result<Vec<u8>, FetchError> {
        let path = self.resource_path(resource);
        log::debug!("📖 Reading {} from {}", resource.as_str(), path.display());

        let bytes = tokio::fs::read(&path).await?;
        Ok(bytes)
    }

    fn backend_type(&self) -> &'static str {
        "file"
    }
}
