use serde::{Deserialize, Serialize};

/// Movement since the previous leaderboard snapshot.
///
/// Only `Same` is produced today; real trend data is not served yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Same,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: String,
    /// 1-based
    pub rank: u32,
    pub name: String,
    pub avatar: String,
    pub points: u32,
    pub achievements_unlocked: u32,
    pub level: u32,
    pub trend: Trend,
    pub is_current_user: bool,
}

/// `points / points_per_level + 1`
pub fn level_for_points(points: u32, points_per_level: u32) -> u32 {
    points / points_per_level.max(1) + 1
}
