//! Raw payloads returned by the achievements API and their normalization
//! into view models.
//!
//! The API is loose about shapes: ids may be numbers, counters may arrive as
//! strings, and the badge listing is either a bare list or wrapped in an
//! object. Everything here tolerates that and falls back to neutral values;
//! single records that cannot be decoded are skipped and logged.

use crate::config::AchievementsConfig;
use crate::models::achievement::{Achievement, AchievementRarity, ClaimStatus, Reward};
use crate::models::badge::{Badge, BadgeRarity};
use crate::models::leaderboard::{level_for_points, LeaderboardEntry, Trend};
use crate::models::user::CurrentUser;
use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

fn count_or(value: Option<f64>, default: u32) -> u32 {
    match value {
        Some(v) if v.is_finite() => v.max(0.0).min(u32::MAX as f64) as u32,
        _ => default,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

// Timestamps only need to be present; whitespace still counts as set
fn present(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Per-user progress nested in an achievement record
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgressRecord {
    #[serde(default, deserialize_with = "lenient_number")]
    pub progress: Option<f64>,
    #[serde(default, alias = "max_progress", deserialize_with = "lenient_number")]
    pub max_progress: Option<f64>,
    #[serde(default)]
    pub claimable: Option<bool>,
    #[serde(default, alias = "unlocked_at")]
    pub unlocked_at: Option<String>,
}

/// Unlock criteria nested in an achievement record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CriteriaRecord {
    #[serde(default, deserialize_with = "lenient_number")]
    pub target: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub count: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RewardRecord {
    #[serde(default, rename = "type", alias = "kind")]
    pub kind: Option<String>,
    #[serde(default)]
    pub value: Option<Value>,
}

impl From<RewardRecord> for Reward {
    fn from(record: RewardRecord) -> Self {
        let value = match record.value {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s,
            Some(other) => other.to_string(),
        };
        Self {
            kind: record.kind.unwrap_or_default(),
            value,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementRecord {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "long_description")]
    pub long_description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub points: Option<f64>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default, alias = "user_progress")]
    pub user_progress: Option<UserProgressRecord>,
    #[serde(default)]
    pub criteria: Option<CriteriaRecord>,
    #[serde(default)]
    pub requirements: Option<Vec<String>>,
    #[serde(default)]
    pub rewards: Option<Vec<RewardRecord>>,
    #[serde(default, alias = "unlock_percentage", deserialize_with = "lenient_number")]
    pub unlock_percentage: Option<f64>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl From<AchievementRecord> for Achievement {
    fn from(record: AchievementRecord) -> Self {
        let progress = record.user_progress.unwrap_or_default();
        let criteria = record.criteria.unwrap_or_default();
        let max_progress = progress
            .max_progress
            .or(criteria.target)
            .or(criteria.count);
        let unlocked_at = present(progress.unlocked_at);

        Self {
            id: record.id,
            title: non_empty(record.title)
                .or(record.name)
                .unwrap_or_default(),
            description: record.description.unwrap_or_default(),
            long_description: non_empty(record.long_description),
            icon: record.icon.unwrap_or_default(),
            category: non_empty(record.category).unwrap_or_else(|| "general".to_string()),
            points: count_or(record.points, 0),
            rarity: AchievementRarity::from_label(record.rarity.as_deref()),
            progress: count_or(progress.progress, 0),
            max_progress: count_or(max_progress, 1).max(1),
            unlocked: unlocked_at.is_some(),
            unlocked_at,
            claimable: progress.claimable.unwrap_or(false),
            requirements: record.requirements.unwrap_or_default(),
            rewards: record
                .rewards
                .unwrap_or_default()
                .into_iter()
                .map(Reward::from)
                .collect(),
            unlock_percentage: record.unlock_percentage,
            hint: non_empty(record.hint),
            claim_status: ClaimStatus::Synced,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeRecord {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub earned: Option<bool>,
    #[serde(default, alias = "earned_at")]
    pub earned_at: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub requirements: Option<Vec<String>>,
}

impl From<BadgeRecord> for Badge {
    fn from(record: BadgeRecord) -> Self {
        let earned_at = present(record.earned_at);
        Self {
            id: record.id,
            name: record.name.unwrap_or_default(),
            description: record.description.unwrap_or_default(),
            icon: record.icon.unwrap_or_default(),
            category: non_empty(record.category).unwrap_or_else(|| "general".to_string()),
            rarity: BadgeRarity::from_label(record.rarity.as_deref()),
            earned: record.earned.unwrap_or(false) || earned_at.is_some(),
            earned_at,
            color: non_empty(record.color),
            requirements: record.requirements.unwrap_or_default(),
        }
    }
}

/// The two shapes the badge listing is served in.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BadgesPayload {
    List(Vec<Value>),
    Wrapped { badges: Vec<Value> },
}

impl BadgesPayload {
    pub fn into_items(self) -> Vec<Value> {
        match self {
            Self::List(items) => items,
            Self::Wrapped { badges } => badges,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRecord {
    #[serde(default, alias = "userId", deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rank: Option<f64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub points: Option<f64>,
    #[serde(
        default,
        alias = "achievements_unlocked",
        alias = "achievements",
        deserialize_with = "lenient_number"
    )]
    pub achievements_unlocked: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameStatsRecord {
    #[serde(default, deserialize_with = "lenient_number")]
    pub streak: Option<f64>,
}

/// Decodes every element of a JSON array, skipping the ones that fail.
fn decode_items<T: DeserializeOwned>(items: Vec<Value>, what: &str) -> Vec<T> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<T>(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping malformed {} record at index {}: {}", what, index, e);
                None
            }
        })
        .collect()
}

fn array_items(payload: Option<Value>, what: &str) -> Vec<Value> {
    match payload {
        Some(Value::Array(items)) => items,
        None | Some(Value::Null) => Vec::new(),
        Some(other) => {
            warn!("Unexpected {} payload shape: {}", what, other);
            Vec::new()
        }
    }
}

pub fn normalize_achievements(payload: Option<Value>) -> Vec<Achievement> {
    decode_items::<AchievementRecord>(array_items(payload, "achievement"), "achievement")
        .into_iter()
        .map(Achievement::from)
        .collect()
}

/// Accepts `[...]` or `{ "badges": [...] }`; anything else is an empty list.
pub fn normalize_badges(payload: Option<Value>) -> Vec<Badge> {
    let items = match payload {
        None | Some(Value::Null) => Vec::new(),
        Some(value) => match serde_json::from_value::<BadgesPayload>(value) {
            Ok(payload) => payload.into_items(),
            Err(_) => {
                warn!("Unexpected badges payload shape, treating as empty");
                Vec::new()
            }
        },
    };

    decode_items::<BadgeRecord>(items, "badge")
        .into_iter()
        .map(Badge::from)
        .collect()
}

pub fn normalize_leaderboard(
    payload: Option<Value>,
    user: Option<&CurrentUser>,
    config: &AchievementsConfig,
) -> Vec<LeaderboardEntry> {
    let full_name = user.map(CurrentUser::full_name);

    decode_items::<LeaderboardRecord>(array_items(payload, "leaderboard"), "leaderboard")
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let name = record.name.unwrap_or_default();
            let is_current_user = full_name.as_deref() == Some(name.as_str());
            let points = count_or(record.points, 0);
            let rank = match record.rank {
                Some(rank) if rank >= 1.0 => count_or(Some(rank), 0),
                _ => index as u32 + 1,
            };

            LeaderboardEntry {
                id: record.id,
                rank,
                name: if is_current_user { "You".to_string() } else { name },
                avatar: non_empty(record.avatar).unwrap_or_else(|| config.default_avatar.clone()),
                points,
                achievements_unlocked: count_or(record.achievements_unlocked, 0),
                level: level_for_points(points, config.points_per_level),
                trend: Trend::Same,
                is_current_user,
            }
        })
        .collect()
}

/// Current streak from the game-stats payload, 0 when unavailable.
pub fn normalize_streak(payload: Option<Value>) -> u32 {
    payload
        .and_then(|value| serde_json::from_value::<GameStatsRecord>(value).ok())
        .map(|stats| count_or(stats.streak, 0))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use serde_json::json;
    use test_log::test;

    #[test]
    fn title_prefers_title_over_name() {
        let achievements = normalize_achievements(Some(json!([
            { "id": "a1", "title": "First Steps", "name": "first_steps" },
            { "id": "a2", "name": "Explorer" },
        ])));
        assert_eq!(achievements[0].title, "First Steps");
        assert_eq!(achievements[1].title, "Explorer");
    }

    #[test]
    fn progress_comes_from_nested_structures() {
        let achievements = normalize_achievements(Some(json!([{
            "id": 7,
            "title": "Quiz Master",
            "points": 150,
            "rarity": "epic",
            "userProgress": { "progress": 3, "claimable": true },
            "criteria": { "target": 5 },
            "rewards": [{ "type": "xp", "value": 150 }, { "type": "title", "value": "Sage" }],
        }])));
        let a = &achievements[0];
        assert_eq!(a.id, "7");
        assert_eq!(a.progress, 3);
        assert_eq!(a.max_progress, 5);
        assert!(a.claimable);
        assert!(!a.unlocked);
        assert_eq!(a.rarity, AchievementRarity::Epic);
        assert_eq!(a.category, "general");
        assert_eq!(
            a.rewards,
            vec![
                Reward { kind: "xp".to_string(), value: "150".to_string() },
                Reward { kind: "title".to_string(), value: "Sage".to_string() },
            ]
        );
    }

    #[test]
    fn missing_progress_uses_safe_defaults() {
        let achievements = normalize_achievements(Some(json!([{ "id": "a", "criteria": { "target": 0 } }])));
        assert_eq!(achievements[0].progress, 0);
        assert_eq!(achievements[0].max_progress, 1);

        let achievements = normalize_achievements(Some(json!([{
            "id": "b",
            "userProgress": { "progress": -4, "maxProgress": -2 }
        }])));
        assert_eq!(achievements[0].progress, 0);
        assert_eq!(achievements[0].max_progress, 1);
    }

    #[test]
    fn unlocked_follows_unlock_timestamp() {
        let achievements = normalize_achievements(Some(json!([
            { "id": "a", "userProgress": { "unlockedAt": "2024-05-01T12:00:00Z" } },
            { "id": "b", "userProgress": { "unlockedAt": "" } },
            { "id": "c", "userProgress": { "unlockedAt": null } },
            { "id": "d" },
        ])));
        let unlocked: Vec<bool> = achievements.iter().map(|a| a.unlocked).collect();
        assert_eq!(unlocked, vec![true, false, false, false]);
        assert_eq!(achievements[1].unlocked_at, None);
    }

    #[test]
    fn whitespace_timestamps_still_count_as_set() {
        let achievements = normalize_achievements(Some(json!([
            { "id": "a", "userProgress": { "unlockedAt": " " } },
        ])));
        assert!(achievements[0].unlocked);
        assert_eq!(achievements[0].unlocked_at.as_deref(), Some(" "));

        let badges = normalize_badges(Some(json!([{ "id": "b", "earnedAt": " " }])));
        assert!(badges[0].earned);
    }

    #[test]
    fn malformed_records_are_skipped() {
        let achievements = normalize_achievements(Some(json!([
            { "id": "ok" },
            { "id": "bad", "requirements": "not a list" },
        ])));
        assert_eq!(achievements.len(), 1);
        assert_eq!(achievements[0].id, "ok");
    }

    #[test]
    fn non_array_achievement_payload_is_empty() {
        assert!(normalize_achievements(Some(json!({ "items": [] }))).is_empty());
        assert!(normalize_achievements(None).is_empty());
    }

    #[test]
    fn wrapped_badges_payload_normalizes() {
        let badges = normalize_badges(Some(json!({
            "badges": [{ "id": "b1", "name": "Starter", "earned": true }]
        })));
        assert_eq!(badges.len(), 1);
        assert!(badges[0].earned);
        assert_eq!(badges[0].category, "general");
    }

    #[test]
    fn badge_earned_from_timestamp() {
        let badges = normalize_badges(Some(json!([
            { "id": "b1", "earnedAt": "2024-01-01T00:00:00Z", "rarity": "uncommon" },
            { "id": "b2", "earned": false },
        ])));
        assert!(badges[0].earned);
        assert_eq!(badges[0].rarity, BadgeRarity::Uncommon);
        assert!(!badges[1].earned);
    }

    #[test]
    fn unexpected_badge_shapes_are_empty() {
        assert!(normalize_badges(Some(json!([]))).is_empty());
        assert!(normalize_badges(Some(Value::Null)).is_empty());
        assert!(normalize_badges(None).is_empty());
        assert!(normalize_badges(Some(json!({ "items": [1, 2] }))).is_empty());
        assert!(normalize_badges(Some(json!("badges"))).is_empty());
    }

    #[test]
    fn leaderboard_marks_current_user() {
        let user = CurrentUser::new("u1", "Ada", "Lovelace");
        let config = AchievementsConfig::default();
        let entries = normalize_leaderboard(
            Some(json!([
                { "id": "p1", "rank": 1, "name": "Grace Hopper", "points": 2400, "avatar": "/g.png" },
                { "id": "p2", "name": "Ada Lovelace", "points": 600, "achievementsUnlocked": 9 },
            ])),
            Some(&user),
            &config,
        );

        assert_eq!(entries[0].name, "Grace Hopper");
        assert!(!entries[0].is_current_user);
        assert_eq!(entries[0].level, 5);

        assert_eq!(entries[1].name, "You");
        assert!(entries[1].is_current_user);
        assert_eq!(entries[1].rank, 2);
        assert_eq!(entries[1].avatar, "/images/default-avatar.png");
        assert_eq!(entries[1].achievements_unlocked, 9);
        assert_eq!(entries[1].level, 2);
        assert_eq!(entries[1].trend, Trend::Same);
    }

    #[test]
    fn streak_defaults_to_zero() {
        assert_eq!(normalize_streak(Some(json!({ "streak": 6 }))), 6);
        assert_eq!(normalize_streak(Some(json!({ "wins": 3 }))), 0);
        assert_eq!(normalize_streak(None), 0);
    }

    proptest! {
        #[test]
        fn normalized_counters_respect_invariants(
            progress in proptest::option::of(-1000i64..1000),
            max_progress in proptest::option::of(-1000i64..1000),
            unlocked_at in proptest::option::of("[a-z0-9:-]{0,12}"),
        ) {
            let record = json!({
                "id": "p",
                "userProgress": {
                    "progress": progress,
                    "maxProgress": max_progress,
                    "unlockedAt": unlocked_at.clone(),
                }
            });
            let achievements = normalize_achievements(Some(Value::Array(vec![record])));
            prop_assert_eq!(achievements.len(), 1);
            let a = &achievements[0];
            prop_assert!(a.max_progress >= 1);
            let expected_unlocked = unlocked_at.map(|s| !s.trim().is_empty()).unwrap_or(false);
            prop_assert_eq!(a.unlocked, expected_unlocked);
            if a.progress <= a.max_progress {
                prop_assert!(a.completion_percent() <= 100);
            }
        }
    }
}
