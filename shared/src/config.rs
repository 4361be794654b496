use serde::{Deserialize, Serialize};

/// A rank tier: players with at least `min_xp` experience carry `label`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankTier {
    pub min_xp: u32,
    pub label: String,
}

impl RankTier {
    fn new(min_xp: u32, label: &str) -> Self {
        Self {
            min_xp,
            label: label.to_string(),
        }
    }
}

/// Storage keys searched (in order) for a bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenKeys {
    /// Primary key in local storage
    pub primary: String,
    /// Legacy key in local storage
    pub legacy: String,
    /// Key in session storage
    pub session: String,
}

impl Default for TokenKeys {
    fn default() -> Self {
        Self {
            primary: "token".to_string(),
            legacy: "authToken".to_string(),
            session: "token".to_string(),
        }
    }
}

/// Endpoints and constants used by the achievements data layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementsConfig {
    pub achievements_path: String,
    pub badges_path: String,
    pub leaderboard_path: String,
    pub game_stats_path: String,
    /// Category the leaderboard is scoped to
    pub leaderboard_category: String,
    pub default_avatar: String,
    /// Points per leaderboard level
    pub points_per_level: u32,
    pub token_keys: TokenKeys,
    /// Ascending by `min_xp`; the first tier must start at 0.
    pub rank_tiers: Vec<RankTier>,
}

impl Default for AchievementsConfig {
    fn default() -> Self {
        Self {
            achievements_path: "/api/achievements".to_string(),
            badges_path: "/user/badges".to_string(),
            leaderboard_path: "/api/leaderboard".to_string(),
            game_stats_path: "/api/game-stats".to_string(),
            leaderboard_category: "achievements".to_string(),
            default_avatar: "/images/default-avatar.png".to_string(),
            points_per_level: 500,
            token_keys: TokenKeys::default(),
            rank_tiers: default_rank_tiers(),
        }
    }
}

pub fn default_rank_tiers() -> Vec<RankTier> {
    vec![
        RankTier::new(0, "Beginner"),
        RankTier::new(500, "Bronze Explorer"),
        RankTier::new(1000, "Silver Expert"),
        RankTier::new(2000, "Gold Master"),
    ]
}

impl AchievementsConfig {
    /// Leaderboard URL path including the category query
    pub fn leaderboard_query(&self, category: &str) -> String {
        format!("{}?category={}", self.leaderboard_path, category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_rank_tiers_are_ascending_from_zero() {
        let tiers = default_rank_tiers();
        assert_eq!(tiers[0].min_xp, 0);
        assert!(tiers.windows(2).all(|w| w[0].min_xp < w[1].min_xp));
        let thresholds: Vec<u32> = tiers.iter().skip(1).map(|t| t.min_xp).collect();
        assert_eq!(thresholds, vec![500, 1000, 2000]);
    }

    #[test]
    fn leaderboard_query_appends_category() {
        let config = AchievementsConfig::default();
        assert_eq!(
            config.leaderboard_query("achievements"),
            "/api/leaderboard?category=achievements"
        );
    }
}
