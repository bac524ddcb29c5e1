//! Dataset loading - fetches raw resource bytes and deserializes typed records

use super::fetcher_backend::{FetchError, ResourceFetcher};
use super::models::{Comment, Post, Resource, User};
use serde::de::DeserializeOwned;

#[derive(Debug)]
pub enum LoadError {
    /// The resource's backing bytes could not be obtained
    ResourceUnavailable {
        resource: Resource,
        source: FetchError,
    },
    /// The resource's bytes do not conform to the record schema
    MalformedData {
        resource: Resource,
        source: serde_json::Error,
    },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::ResourceUnavailable { resource, source } => {
                write!(f, "resource '{}' unavailable: {}", resource.as_str(), source)
            }
            LoadError::MalformedData { resource, source } => {
                write!(f, "resource '{}' malformed: {}", resource.as_str(), source)
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// The three loaded datasets, handed off complete and immutable
#[derive(Debug)]
pub struct Datasets {
    pub users: Vec<User>,
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
}

pub struct DatasetLoader<F: ResourceFetcher> {
    fetcher: F,
}

impl<F: ResourceFetcher> DatasetLoader<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Fetch one resource and deserialize it, preserving source record order
    pub async fn load<T: DeserializeOwned>(&self, resource: Resource) -> Result<Vec<T>, LoadError> {
        let bytes = self
            .fetcher
            .fetch_bytes(resource)
            .await
            .map_err(|source| LoadError::ResourceUnavailable { resource, source })?;

        serde_json::from_slice(&bytes)
            .map_err(|source| LoadError::MalformedData { resource, source })
    }

    /// Load all three datasets concurrently; any failure aborts the run
    pub async fn load_all(&self) -> Result<Datasets, LoadError> {
        let (users, posts, comments) = tokio::try_join!(
            self.load::<User>(Resource::Users),
            self.load::<Post>(Resource::Posts),
            self.load::<Comment>(Resource::Comments),
        )?;

        log::info!(
            "📦 Loaded {} users, {} posts, {} comments",
            users.len(),
            posts.len(),
            comments.len()
        );

        Ok(Datasets {
            users,
            posts,
            comments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;

    /// In-memory fetcher backed by canned payloads
    struct StaticFetcher {
        payloads: HashMap<&'static str, &'static str>,
    }

    impl StaticFetcher {
        fn new(payloads: &[(&'static str, &'static str)]) -> Self {
            Self {
                payloads: payloads.iter().copied().collect(),
            }
        }
    }

    #[async_trait]
    impl ResourceFetcher for StaticFetcher {
        async fn fetch_bytes(&self, resource: Resource) -> Result<Vec<u8>, FetchError> {
            self.payloads
                .get(resource.as_str())
                .map(|body| body.as_bytes().to_vec())
                .ok_or_else(|| {
                    FetchError::Io(std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        resource.as_str(),
                    ))
                })
        }

        fn backend_type(&self) -> &'static str {
            "static"
        }
    }

    #[tokio::test]
    async fn test_load_preserves_source_order() {
        let fetcher = StaticFetcher::new(&[(
            "users",
            r#"[{"id":3,"name":"Carol"},{"id":1,"name":"Alice"},{"id":2,"name":"Bob"}]"#,
        )]);
        let loader = DatasetLoader::new(fetcher);

        let users: Vec<User> = loader.load(Resource::Users).await.unwrap();
        let ids: Vec<u64> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[tokio::test]
    async fn test_missing_resource_is_unavailable() {
        let fetcher = StaticFetcher::new(&[("users", "[]"), ("posts", "[]")]);
        let loader = DatasetLoader::new(fetcher);

        let err = loader.load_all().await.unwrap_err();
        match err {
            LoadError::ResourceUnavailable { resource, .. } => {
                assert_eq!(resource, Resource::Comments);
            }
            other => panic!("expected ResourceUnavailable, got {}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_syntax_is_malformed() {
        let fetcher = StaticFetcher::new(&[("posts", r#"[{"id":1,"userId":"#)]);
        let loader = DatasetLoader::new(fetcher);

        let err = loader.load::<Post>(Resource::Posts).await.unwrap_err();
        match err {
            LoadError::MalformedData { resource, .. } => {
                assert_eq!(resource, Resource::Posts);
            }
            other => panic!("expected MalformedData, got {}", other),
        }
    }

    #[tokio::test]
    async fn test_wrong_field_type_is_malformed() {
        let fetcher = StaticFetcher::new(&[("comments", r#"[{"id":1,"postId":"ten"}]"#)]);
        let loader = DatasetLoader::new(fetcher);

        let err = loader.load::<Comment>(Resource::Comments).await.unwrap_err();
        assert!(matches!(err, LoadError::MalformedData { .. }));
    }

    #[tokio::test]
    async fn test_load_all_success() {
        let fetcher = StaticFetcher::new(&[
            ("users", r#"[{"id":1,"name":"Alice"}]"#),
            ("posts", r#"[{"id":10,"userId":1}]"#),
            ("comments", r#"[{"id":100,"postId":10}]"#),
        ]);
        let loader = DatasetLoader::new(fetcher);

        let datasets = loader.load_all().await.unwrap();
        assert_eq!(datasets.users.len(), 1);
        assert_eq!(datasets.posts.len(), 1);
        assert_eq!(datasets.comments.len(), 1);
    }
}
