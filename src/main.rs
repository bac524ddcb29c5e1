//! Blogger Engagement Ranking
//!
//! Loads the users, posts, and comments datasets, computes each blogger's
//! average number of comments per authored post, and prints the top 3 in
//! descending order of that score.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release -- --backend file
//! ```
//!
//! ## Environment Variables
//!
//! - BLOGRANK_DATA_DIR - Directory holding users.json/posts.json/comments.json (default: data)
//! - BLOGRANK_API_URL - Base URL for the HTTP backend (default: https://jsonplaceholder.typicode.com)
//! - RUST_LOG - Logging level (optional, default: info)


pub mod config;
pub mod ranking_core;

use {
    config::Config,
    ranking_core::{
        reporter, DatasetLoader, EngagementAggregator, EngagementScorer, Fetcher, Leaderboard,
        ResourceFetcher,
    },
};

#[tokio::main]
pub async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    dotenv::dotenv().ok();

    let config = Config::from_env()?;

    log::info!("🚀 Starting blogger engagement ranking");
    log::info!("   Data dir: {}", config.data_dir.display());
    log::info!("   API base URL: {}", config.api_base_url);

    let fetcher = Fetcher::new(
        config.backend,
        config.data_dir.clone(),
        config.api_base_url.clone(),
    )?;
    log::info!("📊 Backend: {}", fetcher.backend_type());

    let loader = DatasetLoader::new(fetcher);
    let datasets = loader.load_all().await.map_err(|e| {
        log::error!("Failed to load datasets: {}", e);
        e
    })?;

    let aggregator = EngagementAggregator::new();
    let aggregates = aggregator.aggregate(&datasets.posts, &datasets.comments);

    let scorer = EngagementScorer::new();
    let scored = scorer.score_users(&datasets.users, &aggregates);
    log::info!("✅ Scored {} qualifying users", scored.len());

    let mut leaderboard = Leaderboard::new();
    leaderboard.record_all(scored);

    for (rank, slot) in leaderboard.slots().iter().enumerate() {
        if let Some(ref user) = slot.user {
            log::info!(
                "🏆 #{}: {} ({}) at {}",
                rank + 1,
                user.name,
                user.id,
                slot.score
            );
        }
    }

    reporter::print_report(&leaderboard)?;

    Ok(())
}
