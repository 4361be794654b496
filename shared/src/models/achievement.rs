use serde::{Deserialize, Serialize};

/// Rarity tier of an achievement, used for styling and "rarity" ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementRarity {
    #[default]
    Common,
    Rare,
    Epic,
    Legendary,
}

impl AchievementRarity {
    /// Parses a source label. Unknown or missing labels become `Common`.
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(|l| l.trim().to_lowercase()).as_deref() {
            Some("rare") => Self::Rare,
            Some("epic") => Self::Epic,
            Some("legendary") => Self::Legendary,
            _ => Self::Common,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
        }
    }

    /// Weight used when sorting by rarity (higher sorts first).
    pub fn sort_rank(&self) -> u8 {
        match self {
            Self::Legendary => 4,
            Self::Epic => 3,
            Self::Rare => 2,
            Self::Common => 1,
        }
    }
}

impl std::fmt::Display for AchievementRarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reconciliation state of a locally claimed achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    /// Matches what the server reported.
    #[default]
    Synced,
    /// Claimed locally, waiting for server confirmation.
    Pending,
    /// The server rejected the claim; local state was rolled back.
    Failed,
}

/// A reward granted on unlock, e.g. `{ kind: "xp", value: "50" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reward {
    pub kind: String,
    pub value: String,
}

/// UI-ready achievement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub icon: String,
    pub category: String,
    pub points: u32,
    pub rarity: AchievementRarity,
    pub progress: u32,
    /// Always at least 1.
    pub max_progress: u32,
    pub unlocked: bool,
    /// Raw unlock timestamp as reported by the server (RFC 3339 when well formed).
    pub unlocked_at: Option<String>,
    pub claimable: bool,
    pub requirements: Vec<String>,
    pub rewards: Vec<Reward>,
    /// Share of players that unlocked this achievement, in percent.
    pub unlock_percentage: Option<f64>,
    pub hint: Option<String>,
    #[serde(default)]
    pub claim_status: ClaimStatus,
}

impl Achievement {
    /// `round(progress / max_progress * 100)`, clamped to `0..=100`.
    pub fn completion_percent(&self) -> u32 {
        let ratio = self.progress_ratio() * 100.0;
        ratio.round().clamp(0.0, 100.0) as u32
    }

    /// Unclamped `progress / max_progress`.
    pub fn progress_ratio(&self) -> f64 {
        self.progress as f64 / self.max_progress.max(1) as f64
    }

    /// Parsed unlock time, `None` when missing or malformed.
    pub fn unlocked_at_parsed(&self) -> Option<chrono::DateTime<chrono::FixedOffset>> {
        self.unlocked_at
            .as_deref()
            .and_then(|ts| chrono::DateTime::parse_from_rfc3339(ts).ok())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn achievement(id: &str) -> Achievement {
        Achievement {
            id: id.to_string(),
            title: format!("Achievement {}", id),
            description: String::new(),
            long_description: None,
            icon: "trophy".to_string(),
            category: "general".to_string(),
            points: 0,
            rarity: AchievementRarity::Common,
            progress: 0,
            max_progress: 1,
            unlocked: false,
            unlocked_at: None,
            claimable: false,
            requirements: vec![],
            rewards: vec![],
            unlock_percentage: None,
            hint: None,
            claim_status: ClaimStatus::Synced,
        }
    }
}
