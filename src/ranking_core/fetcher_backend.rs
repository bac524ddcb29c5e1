//! Fetch backend trait for named resources
//!
//! Defines the interface for obtaining the raw bytes backing each dataset
//! from different backends.

use super::models::Resource;
use async_trait::async_trait;

#[derive(Debug)]
pub enum FetchError {
    Io(std::io::Error),
    Http(String),
}

impl From<std::io::Error> for FetchError {
    fn from(err: std::io::Error) -> Self {
        FetchError::Io(err)
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Io(e) => write!(f, "IO error: {}", e),
            FetchError::Http(e) => write!(f, "HTTP error: {}", e),
        }
    }
}

impl std::error::Error for FetchError {}

/// Backend trait for fetching raw resource bytes
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    /// Fetch the complete byte content of a named resource
    async fn fetch_bytes(&self, resource: Resource) -> Result<Vec<u8>, FetchError>;

    /// Get backend type for logging
    fn backend_type(&self) -> &'static str;
}
