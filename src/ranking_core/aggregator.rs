//! Engagement aggregation - joins comments to posts to users by foreign key

use super::models::{Comment, Post};
use std::collections::HashMap;

/// Per-user totals accumulated from the post and comment datasets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserEngagement {
    pub total_posts: u64,
    pub total_comments: u64,
}

pub struct EngagementAggregator;

impl EngagementAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Count comments per post id in a single pass
    ///
    /// Posts with no comments have no entry; a missing key means zero.
    pub fn count_comments_per_post(&self, comments: &[Comment]) -> HashMap<u64, u64> {
        let mut counts: HashMap<u64, u64> = HashMap::new();
        for comment in comments {
            *counts.entry(comment.post_id).or_insert(0) += 1;
        }
        counts
    }

    /// Accumulate per-user post and comment totals in a single pass
    ///
    /// Only ids flow through the join keys: a comment count keyed by a post
    /// id no post carries is never read, and a post whose author id matches
    /// no user accumulates an entry nothing downstream anchors.
    pub fn aggregate_users(
        &self,
        posts: &[Post],
        comment_counts: &HashMap<u64, u64>,
    ) -> HashMap<u64, UserEngagement> {
        let mut aggregates: HashMap<u64, UserEngagement> = HashMap::new();
        for post in posts {
            let entry = aggregates.entry(post.user_id).or_default();
            entry.total_posts += 1;
            entry.total_comments += comment_counts.get(&post.id).copied().unwrap_or(0);
        }
        aggregates
    }

    /// Full join: comments → posts → per-user totals
    pub fn aggregate(&self, posts: &[Post], comments: &[Comment]) -> HashMap<u64, UserEngagement> {
        let comment_counts = self.count_comments_per_post(comments);
        self.aggregate_users(posts, &comment_counts)
    }
}
