//! Engagement scoring - average comments per authored post

use super::aggregator::UserEngagement;
use super::models::User;
use std::collections::HashMap;

/// A user paired with their computed engagement score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredUser {
    pub user: User,
    pub score: f64,
}

pub struct EngagementScorer;

impl EngagementScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score each user as total comments divided by total posts
    ///
    /// Users with no aggregate entry or zero authored posts contribute no
    /// ScoredUser and cannot enter the ranking. Emission order follows the
    /// user list; exact score ties resolve downstream by that order.
    pub fn score_users(
        &self,
        users: &[User],
        aggregates: &HashMap<u64, UserEngagement>,
    ) -> Vec<ScoredUser> {
        let mut scored = Vec::new();

        for user in users {
            let engagement = aggregates.get(&user.id).copied().unwrap_or_default();
            if engagement.total_posts == 0 {
                log::debug!("Skipping {} ({}): no authored posts", user.name, user.id);
                continue;
            }

            let score = engagement.total_comments as f64 / engagement.total_posts as f64;
            scored.push(ScoredUser {
                user: user.clone(),
                score,
            });
        }

        scored
    }
}
