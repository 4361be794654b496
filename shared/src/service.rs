//! Fetch orchestration for the achievements views.
//!
//! Four independent sources are queried concurrently. Achievements, badges
//! and game stats degrade to neutral values when their call fails; the
//! leaderboard does too, except that a 401 from it aborts the whole fetch.

use crate::config::AchievementsConfig;
use crate::dto::achievement::{
    normalize_achievements, normalize_badges, normalize_leaderboard, normalize_streak,
};
use crate::error::{ApiError, Result, SharedError};
use crate::models::achievement::Achievement;
use crate::models::stats::AchievementStats;
use crate::models::user::CurrentUser;
use crate::query::{filter_and_sort, AchievementQuery};
use crate::state::{AchievementAction, AchievementState, FetchSequence, Snapshot};
use async_trait::async_trait;
use log::{debug, info, warn};
use serde_json::Value;

/// Data-access calls used by the achievements views.
///
/// Payloads are returned undecoded so shape handling stays in one place.
#[async_trait(?Send)]
pub trait AchievementApi {
    async fn list_achievements(&self) -> std::result::Result<Value, ApiError>;
    async fn list_badges(&self) -> std::result::Result<Value, ApiError>;
    async fn leaderboard(&self, category: &str) -> std::result::Result<Value, ApiError>;
    async fn game_stats(&self) -> std::result::Result<Option<Value>, ApiError>;
}

/// Where the bearer token lives.
pub trait CredentialStore {
    /// First non-empty token across the known storage locations
    fn token(&self) -> Option<String>;
    /// Removes the token from every storage location
    fn clear(&self);
}

fn or_fallback<T>(result: std::result::Result<T, ApiError>, what: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Failed to fetch {}, using fallback: {}", what, e);
            None
        }
    }
}

/// Builds a snapshot from the raw payloads of one fetch.
pub fn build_snapshot(
    achievements: Option<Value>,
    badges: Option<Value>,
    leaderboard: Option<Value>,
    game_stats: Option<Value>,
    user: Option<&CurrentUser>,
    config: &AchievementsConfig,
) -> Snapshot {
    let achievements = normalize_achievements(achievements);
    let badges = normalize_badges(badges);
    let leaderboard = normalize_leaderboard(leaderboard, user, config);
    let streak = normalize_streak(game_stats);
    let stats = AchievementStats::compute(&achievements, &badges, streak, &config.rank_tiers);

    Snapshot {
        achievements,
        badges,
        leaderboard,
        stats,
    }
}

/// Runs one fetch: credential check, four concurrent calls, normalization.
pub async fn load_snapshot<A, C>(
    api: &A,
    credentials: &C,
    user: &CurrentUser,
    config: &AchievementsConfig,
) -> Result<Snapshot>
where
    A: AchievementApi + ?Sized,
    C: CredentialStore + ?Sized,
{
    if credentials
        .token()
        .filter(|token| !token.trim().is_empty())
        .is_none()
    {
        warn!("No auth token found, clearing stored credentials");
        credentials.clear();
        return Err(SharedError::MissingCredentials);
    }

    debug!("Fetching achievements data for user {}", user.id);
    let (achievements, badges, leaderboard, game_stats) = futures::join!(
        api.list_achievements(),
        api.list_badges(),
        api.leaderboard(&config.leaderboard_category),
        api.game_stats(),
    );

    let leaderboard = match leaderboard {
        Ok(value) => Some(value),
        Err(e) if e.is_unauthorized() => {
            warn!("Leaderboard rejected credentials: {}", e);
            return Err(e.into());
        }
        Err(e) => {
            warn!("Failed to fetch leaderboard, using fallback: {}", e);
            None
        }
    };
    let achievements = or_fallback(achievements, "achievements");
    let badges = or_fallback(badges, "badges");
    let game_stats = or_fallback(game_stats, "game stats").flatten();

    let snapshot = build_snapshot(
        achievements,
        badges,
        leaderboard,
        game_stats,
        Some(user),
        config,
    );
    info!(
        "Loaded {} achievements, {} badges, {} leaderboard entries",
        snapshot.achievements.len(),
        snapshot.badges.len(),
        snapshot.leaderboard.len()
    );
    Ok(snapshot)
}

/// Owns the collaborators and the state for callers outside the UI layer.
pub struct AchievementService<A, C> {
    api: A,
    credentials: C,
    config: AchievementsConfig,
    state: AchievementState,
    sequence: FetchSequence,
}

impl<A: AchievementApi, C: CredentialStore> AchievementService<A, C> {
    pub fn new(api: A, credentials: C, config: AchievementsConfig) -> Self {
        let state = AchievementState::new(config.rank_tiers.clone());
        Self {
            api,
            credentials,
            config,
            state,
            sequence: FetchSequence::default(),
        }
    }

    pub fn state(&self) -> &AchievementState {
        &self.state
    }

    /// Fetches everything and replaces the current state.
    pub async fn fetch(&mut self, user: &CurrentUser) -> Result<()> {
        let started = self.sequence.begin(Some(user));
        let generation = self.sequence.last();
        self.state.apply(started);

        match load_snapshot(&self.api, &self.credentials, user, &self.config).await {
            Ok(snapshot) => {
                self.state
                    .apply(AchievementAction::FetchSucceeded { generation, snapshot });
                Ok(())
            }
            Err(error) => {
                self.state.apply(AchievementAction::FetchFailed {
                    generation,
                    error: error.clone(),
                });
                Err(error)
            }
        }
    }

    /// Clears everything loaded for the previous user.
    pub fn sign_out(&mut self) {
        let reset = self.sequence.begin(None);
        self.state.apply(reset);
    }

    pub fn claim_achievement(&mut self, id: &str) -> Option<Achievement> {
        self.state.claim_achievement(id)
    }

    pub fn resolve_claim(&mut self, id: &str, accepted: bool) -> bool {
        self.state.resolve_claim(id, accepted)
    }

    pub fn filter_and_sort_achievements(&self, query: &AchievementQuery) -> Vec<Achievement> {
        filter_and_sort(&self.state.achievements, query)
    }

    /// Server-driven unlock detection is not available yet; always empty.
    pub fn check_achievements(&self) -> Vec<Achievement> {
        Vec::new()
    }
}
