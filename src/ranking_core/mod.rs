//! Ranking Core - Blogger Engagement Pipeline
//!
//! This module provides the pipeline that ranks bloggers by their average
//! number of comments per authored post.
//!
//! # Architecture
//!
//! ```text
//! Resource (users/posts/comments) → Fetcher (file or HTTP backend)
//!     ↓
//! DatasetLoader (raw bytes → Vec<User> / Vec<Post> / Vec<Comment>)
//!     ↓
//! EngagementAggregator (comments → posts → per-user totals)
//!     ↓
//! EngagementScorer (total_comments / total_posts, zero-post users skipped)
//!     ↓
//! Leaderboard (top-3 cascade insertion)
//!     ↓
//! reporter (one stdout line per rank slot)
//! ```

pub mod aggregator;
pub mod fetcher;
pub mod fetcher_backend;
pub mod file_fetcher;
pub mod http_fetcher;
pub mod leaderboard;
pub mod loader;
pub mod models;
pub mod reporter;
pub mod scorer;

pub use aggregator::{EngagementAggregator, UserEngagement};
pub use fetcher::Fetcher;
pub use fetcher_backend::{FetchError, ResourceFetcher};
pub use file_fetcher::FileFetcher;
pub use http_fetcher::HttpFetcher;
pub use leaderboard::{Leaderboard, RankSlot, TOP_N};
pub use loader::{DatasetLoader, Datasets, LoadError};
pub use models::{Comment, Post, Resource, User};
pub use scorer::{EngagementScorer, ScoredUser};
