use crate::config::{default_rank_tiers, RankTier};
use crate::error::SharedError;
use crate::models::achievement::{Achievement, ClaimStatus};
use crate::models::badge::Badge;
use crate::models::leaderboard::LeaderboardEntry;
use crate::models::stats::AchievementStats;
use crate::models::user::CurrentUser;
use chrono::Utc;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// Result of one complete fetch, ready to replace the current state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub achievements: Vec<Achievement>,
    pub badges: Vec<Badge>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub stats: AchievementStats,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AchievementAction {
    FetchStarted { generation: u64 },
    FetchSucceeded { generation: u64, snapshot: Snapshot },
    FetchFailed { generation: u64, error: SharedError },
    /// Drops everything shown for the previous user and fences off its fetches.
    Reset { generation: u64 },
    Claim { id: String },
    ResolveClaim { id: String, accepted: bool },
}

/// Hands out fetch generations.
///
/// Every refresh takes the next number, including refreshes with nobody
/// signed in, so a response still in flight for a previous user is stale by
/// the time it lands.
#[derive(Debug, Clone, Default)]
pub struct FetchSequence {
    last: u64,
}

impl FetchSequence {
    /// Action that opens the next refresh: a fetch when someone is signed in,
    /// otherwise a reset.
    pub fn begin(&mut self, user: Option<&CurrentUser>) -> AchievementAction {
        self.last += 1;
        let generation = self.last;
        match user {
            Some(_) => AchievementAction::FetchStarted { generation },
            None => AchievementAction::Reset { generation },
        }
    }

    pub fn last(&self) -> u64 {
        self.last
    }
}

/// Everything the achievements views render from.
///
/// Fetch results are tagged with the generation of the request that produced
/// them; anything older than the newest started request is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct AchievementState {
    pub achievements: Vec<Achievement>,
    pub badges: Vec<Badge>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub stats: AchievementStats,
    pub error: Option<String>,
    pub loading: bool,
    generation: u64,
    rank_tiers: Vec<RankTier>,
}

impl Default for AchievementState {
    fn default() -> Self {
        Self::new(default_rank_tiers())
    }
}

impl AchievementState {
    pub fn new(rank_tiers: Vec<RankTier>) -> Self {
        Self {
            achievements: Vec::new(),
            badges: Vec::new(),
            leaderboard: Vec::new(),
            stats: AchievementStats::compute(&[], &[], 0, &rank_tiers),
            error: None,
            loading: false,
            generation: 0,
            rank_tiers,
        }
    }

    /// Generation of the newest fetch this state has seen start.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn is_stale(&self, generation: u64) -> bool {
        generation < self.generation
    }

    pub fn apply(&mut self, action: AchievementAction) {
        match action {
            AchievementAction::FetchStarted { generation } => {
                if self.is_stale(generation) {
                    return;
                }
                self.generation = generation;
                self.loading = true;
            }
            AchievementAction::FetchSucceeded { generation, snapshot } => {
                if self.is_stale(generation) {
                    debug!("Dropping stale fetch result (generation {})", generation);
                    return;
                }
                self.achievements = snapshot.achievements;
                self.badges = snapshot.badges;
                self.leaderboard = snapshot.leaderboard;
                self.stats = snapshot.stats;
                self.error = None;
                self.loading = false;
            }
            AchievementAction::FetchFailed { generation, error } => {
                if self.is_stale(generation) {
                    debug!("Dropping stale fetch error (generation {}): {}", generation, error);
                    return;
                }
                // Without credentials nothing was fetched, so the lists stay as they were
                if error != SharedError::MissingCredentials {
                    self.achievements.clear();
                    self.badges.clear();
                    self.leaderboard.clear();
                }
                self.error = Some(error.user_message());
                self.loading = false;
            }
            AchievementAction::Reset { generation } => {
                if self.is_stale(generation) {
                    return;
                }
                debug!("Resetting achievements state (generation {})", generation);
                let rank_tiers = std::mem::take(&mut self.rank_tiers);
                *self = Self::new(rank_tiers);
                self.generation = generation;
            }
            AchievementAction::Claim { id } => {
                self.claim_achievement(&id);
            }
            AchievementAction::ResolveClaim { id, accepted } => {
                self.resolve_claim(&id, accepted);
            }
        }
    }

    /// Optimistically unlocks a claimable achievement.
    ///
    /// Returns the achievement as it was before the claim, or `None` when no
    /// achievement with `id` is claimable. The claim stays `Pending` until
    /// [`resolve_claim`](Self::resolve_claim) is called.
    pub fn claim_achievement(&mut self, id: &str) -> Option<Achievement> {
        let Some(target) = self
            .achievements
            .iter_mut()
            .find(|a| a.id == id && a.claimable)
        else {
            debug!("Achievement {} is not claimable", id);
            return None;
        };

        let previous = target.clone();
        target.unlocked = true;
        target.claimable = false;
        target.unlocked_at = Some(Utc::now().to_rfc3339());
        target.claim_status = ClaimStatus::Pending;
        info!("Claimed achievement {} ({} points)", id, target.points);

        self.recompute_stats();
        Some(previous)
    }

    /// Settles a pending claim. A rejected claim is rolled back.
    pub fn resolve_claim(&mut self, id: &str, accepted: bool) -> bool {
        let Some(target) = self
            .achievements
            .iter_mut()
            .find(|a| a.id == id && a.claim_status == ClaimStatus::Pending)
        else {
            warn!("No pending claim for achievement {}", id);
            return false;
        };

        if accepted {
            target.claim_status = ClaimStatus::Synced;
        } else {
            target.unlocked = false;
            target.claimable = true;
            target.unlocked_at = None;
            target.claim_status = ClaimStatus::Failed;
            warn!("Claim for achievement {} was rejected, rolled back", id);
        }

        self.recompute_stats();
        true
    }

    /// Achievements awaiting server confirmation
    pub fn pending_claims(&self) -> impl Iterator<Item = &Achievement> {
        self.achievements
            .iter()
            .filter(|a| a.claim_status == ClaimStatus::Pending)
    }

    fn recompute_stats(&mut self) {
        self.stats = AchievementStats::compute(
            &self.achievements,
            &self.badges,
            self.stats.current_streak,
            &self.rank_tiers,
        );
    }
}
