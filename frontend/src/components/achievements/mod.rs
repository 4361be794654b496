pub mod achievement_card;
pub mod achievement_grid;
pub mod badge_grid;
pub mod leaderboard_table;
pub mod stats_summary;
pub mod tabs;

use shared::{AchievementRarity, BadgeRarity, Trend};

pub fn achievement_rarity_classes(rarity: AchievementRarity) -> &'static str {
    match rarity {
        AchievementRarity::Common => "border-gray-200 bg-gray-50",
        AchievementRarity::Rare => "border-blue-300 bg-blue-50",
        AchievementRarity::Epic => "border-purple-300 bg-purple-50",
        AchievementRarity::Legendary => "border-yellow-400 bg-yellow-50",
    }
}

pub fn badge_rarity_classes(rarity: BadgeRarity) -> &'static str {
    match rarity {
        BadgeRarity::Common => "ring-gray-300",
        BadgeRarity::Uncommon => "ring-green-400",
        BadgeRarity::Rare => "ring-blue-400",
        BadgeRarity::Epic => "ring-purple-500",
        BadgeRarity::Legendary => "ring-yellow-400",
    }
}

pub fn trend_icon(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "▲",
        Trend::Down => "▼",
        Trend::Same => "–",
    }
}

/// Formats an RFC 3339 timestamp as e.g. "Mar 5, 2024", or returns the raw
/// text when it does not parse.
pub fn format_date(timestamp: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_rfc3339_dates() {
        assert_eq!(format_date("2024-03-05T10:00:00Z"), "Mar 5, 2024");
        assert_eq!(format_date("last week"), "last week");
    }

    #[test]
    fn every_rarity_has_styling() {
        for rarity in [
            AchievementRarity::Common,
            AchievementRarity::Rare,
            AchievementRarity::Epic,
            AchievementRarity::Legendary,
        ] {
            assert!(!achievement_rarity_classes(rarity).is_empty());
        }
        assert_eq!(badge_rarity_classes(BadgeRarity::Uncommon), "ring-green-400");
        assert_eq!(trend_icon(Trend::Same), "–");
    }
}
