use serde::{Deserialize, Serialize};

/// Badge rarity; a superset of the achievement tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeRarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl BadgeRarity {
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(|l| l.trim().to_lowercase()).as_deref() {
            Some("uncommon") => Self::Uncommon,
            Some("rare") => Self::Rare,
            Some("epic") => Self::Epic,
            Some("legendary") => Self::Legendary,
            _ => Self::Common,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Uncommon => "uncommon",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
        }
    }
}

impl std::fmt::Display for BadgeRarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub category: String,
    pub rarity: BadgeRarity,
    pub earned: bool,
    pub earned_at: Option<String>,
    /// CSS color used by the badge frame
    pub color: Option<String>,
    pub requirements: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn badge_rarity_accepts_uncommon() {
        assert_eq!(BadgeRarity::from_label(Some("Uncommon")), BadgeRarity::Uncommon);
        assert_eq!(BadgeRarity::from_label(Some("???")), BadgeRarity::Common);
        assert_eq!(BadgeRarity::Legendary.to_string(), "legendary");
    }
}
