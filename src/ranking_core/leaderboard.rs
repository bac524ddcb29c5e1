//! Fixed-capacity ranked selection of the highest-scoring users

use super::models::User;
use super::scorer::ScoredUser;

/// Number of ranked slots in the final report
pub const TOP_N: usize = 3;

/// One ranked slot; an empty slot holds no user and a score of 0
#[derive(Debug, Clone, Default)]
pub struct RankSlot {
    pub user: Option<User>,
    pub score: f64,
}

/// Ranked top-N selection over a stream of scored users
///
/// Candidates insert by a strict greater-than cascade: the first slot whose
/// score the candidate exceeds takes it, lower slots shift down, and the
/// last drops off. A candidate that merely ties an occupied slot does not
/// displace it, so the earliest arrival keeps the higher rank. Empty slots
/// score 0, which also means a candidate scoring exactly 0 never places.
#[derive(Debug, Default)]
pub struct Leaderboard {
    slots: [RankSlot; TOP_N],
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer one candidate to the ranking
    pub fn record(&mut self, candidate: ScoredUser) {
        for rank in 0..TOP_N {
            if candidate.score > self.slots[rank].score {
                for lower in (rank + 1..TOP_N).rev() {
                    self.slots[lower] = self.slots[lower - 1].clone();
                }
                self.slots[rank] = RankSlot {
                    user: Some(candidate.user),
                    score: candidate.score,
                };
                return;
            }
        }
    }

    /// Consume a stream of scored users in arrival order
    pub fn record_all<I: IntoIterator<Item = ScoredUser>>(&mut self, candidates: I) {
        for candidate in candidates {
            self.record(candidate);
        }
    }

    /// The final ranking, highest score first
    pub fn slots(&self) -> &[RankSlot; TOP_N] {
        &self.slots
    }
}
