pub mod models {
    pub mod achievement;
    pub mod badge;
    pub mod leaderboard;
    pub mod stats;
    pub mod user;
}

pub mod dto {
    pub mod achievement;
}

pub mod config;
pub mod error;
pub mod query;
pub mod service;
pub mod state;

// Re-export commonly used items
pub use config::{AchievementsConfig, RankTier, TokenKeys};
pub use error::{ApiError, Result, SharedError};
pub use query::{filter_and_sort, AchievementQuery, SortBy};
pub use service::{load_snapshot, AchievementApi, AchievementService, CredentialStore};
pub use state::{AchievementAction, AchievementState, FetchSequence, Snapshot};

// Re-export models
pub use models::{
    achievement::{Achievement, AchievementRarity, ClaimStatus, Reward},
    badge::{Badge, BadgeRarity},
    leaderboard::{LeaderboardEntry, Trend},
    stats::AchievementStats,
    user::CurrentUser,
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_snapshot_from_raw_payloads() {
        let user = CurrentUser::new("u1", "Sam", "Rivera");
        let snapshot = service::build_snapshot(
            Some(json!([{ "id": "a", "title": "Starter", "points": 50,
                          "userProgress": { "unlockedAt": "2024-01-01T00:00:00Z" } }])),
            Some(json!([{ "id": "b", "earned": true }])),
            Some(json!([{ "id": "p", "name": "Sam Rivera", "points": 50 }])),
            Some(json!({ "streak": 1 })),
            Some(&user),
            &AchievementsConfig::default(),
        );

        assert_eq!(snapshot.achievements[0].title, "Starter");
        assert_eq!(snapshot.badges.len(), 1);
        assert_eq!(snapshot.leaderboard[0].name, "You");
        assert_eq!(snapshot.stats.total_xp, 50);
        assert_eq!(snapshot.stats.rank, "Beginner");
        assert_eq!(snapshot.stats.current_streak, 1);
    }

    #[test]
    fn test_state_serializable_view_models() {
        let badge = Badge {
            id: "b".to_string(),
            name: "Mentor".to_string(),
            description: String::new(),
            icon: "star".to_string(),
            category: "general".to_string(),
            rarity: BadgeRarity::Uncommon,
            earned: false,
            earned_at: None,
            color: Some("#ffaa00".to_string()),
            requirements: vec!["Help five colleagues".to_string()],
        };
        let value = serde_json::to_value(&badge).expect("serialize");
        assert_eq!(value["rarity"], "uncommon");
    }
}
