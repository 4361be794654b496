use crate::config::{default_rank_tiers, RankTier};
use crate::models::achievement::Achievement;
use crate::models::badge::Badge;
use serde::{Deserialize, Serialize};

/// Aggregate numbers derived from the current achievements and badges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementStats {
    /// Sum of points over unlocked achievements
    pub total_xp: u32,
    pub unlocked_count: u32,
    pub total_count: u32,
    /// Rounded percentage, 0 when there are no achievements
    pub completion_rate: u32,
    pub current_streak: u32,
    pub rank: String,
    pub next_rank_xp: u32,
    pub xp_to_next_rank: u32,
    pub earned_badges: u32,
    pub total_badges: u32,
    pub badge_completion_rate: u32,
}

impl Default for AchievementStats {
    fn default() -> Self {
        Self::compute(&[], &[], 0, &default_rank_tiers())
    }
}

/// Position of a player within the rank tiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankProgress {
    pub label: String,
    /// Threshold of the next tier; the top threshold once it is reached.
    pub next_rank_xp: u32,
    pub xp_to_next_rank: u32,
}

/// Resolves a rank from `tiers`, which must be ascending by `min_xp`.
pub fn rank_for_xp(total_xp: u32, tiers: &[RankTier]) -> RankProgress {
    let label = tiers
        .iter()
        .rev()
        .find(|tier| tier.min_xp <= total_xp)
        .or_else(|| tiers.first())
        .map(|tier| tier.label.clone())
        .unwrap_or_else(|| "Beginner".to_string());

    let next_rank_xp = tiers
        .iter()
        .find(|tier| tier.min_xp > total_xp)
        .or_else(|| tiers.last())
        .map(|tier| tier.min_xp)
        .unwrap_or(0);

    RankProgress {
        label,
        next_rank_xp,
        xp_to_next_rank: next_rank_xp.saturating_sub(total_xp),
    }
}

fn rounded_percent(part: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0).round() as u32
}

impl AchievementStats {
    pub fn compute(
        achievements: &[Achievement],
        badges: &[Badge],
        current_streak: u32,
        tiers: &[RankTier],
    ) -> Self {
        let unlocked: Vec<&Achievement> = achievements.iter().filter(|a| a.unlocked).collect();
        let total_xp = unlocked
            .iter()
            .fold(0u32, |acc, a| acc.saturating_add(a.points));
        let unlocked_count = unlocked.len() as u32;
        let total_count = achievements.len() as u32;
        let earned_badges = badges.iter().filter(|b| b.earned).count() as u32;
        let total_badges = badges.len() as u32;
        let rank = rank_for_xp(total_xp, tiers);

        Self {
            total_xp,
            unlocked_count,
            total_count,
            completion_rate: rounded_percent(unlocked_count, total_count),
            current_streak,
            rank: rank.label,
            next_rank_xp: rank.next_rank_xp,
            xp_to_next_rank: rank.xp_to_next_rank,
            earned_badges,
            total_badges,
            badge_completion_rate: rounded_percent(earned_badges, total_badges),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::achievement::fixtures::achievement;
    use crate::models::badge::BadgeRarity;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    fn badge(id: &str, earned: bool) -> Badge {
        Badge {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            icon: String::new(),
            category: "general".to_string(),
            rarity: BadgeRarity::Common,
            earned,
            earned_at: None,
            color: None,
            requirements: vec![],
        }
    }

    #[rstest]
    #[case(0, "Beginner", 500, 500)]
    #[case(499, "Beginner", 500, 1)]
    #[case(500, "Bronze Explorer", 1000, 500)]
    #[case(999, "Bronze Explorer", 1000, 1)]
    #[case(1000, "Silver Expert", 2000, 1000)]
    #[case(1999, "Silver Expert", 2000, 1)]
    #[case(2000, "Gold Master", 2000, 0)]
    #[case(5000, "Gold Master", 2000, 0)]
    fn rank_tiers_follow_thresholds(
        #[case] xp: u32,
        #[case] label: &str,
        #[case] next: u32,
        #[case] to_next: u32,
    ) {
        let rank = rank_for_xp(xp, &default_rank_tiers());
        assert_eq!(rank.label, label);
        assert_eq!(rank.next_rank_xp, next);
        assert_eq!(rank.xp_to_next_rank, to_next);
    }

    #[test]
    fn computes_totals_from_unlocked_achievements_only() {
        let mut a = achievement("a");
        a.points = 300;
        a.unlocked = true;
        let mut b = achievement("b");
        b.points = 250;
        b.unlocked = true;
        let mut c = achievement("c");
        c.points = 1000;

        let stats = AchievementStats::compute(
            &[a, b, c],
            &[badge("x", true), badge("y", false), badge("z", false)],
            4,
            &default_rank_tiers(),
        );

        assert_eq!(stats.total_xp, 550);
        assert_eq!(stats.unlocked_count, 2);
        assert_eq!(stats.total_count, 3);
        assert_eq!(stats.completion_rate, 67);
        assert_eq!(stats.current_streak, 4);
        assert_eq!(stats.rank, "Bronze Explorer");
        assert_eq!(stats.xp_to_next_rank, 450);
        assert_eq!(stats.earned_badges, 1);
        assert_eq!(stats.total_badges, 3);
        assert_eq!(stats.badge_completion_rate, 33);
    }

    #[test]
    fn empty_inputs_give_zero_rates() {
        let stats = AchievementStats::default();
        assert_eq!(stats.completion_rate, 0);
        assert_eq!(stats.badge_completion_rate, 0);
        assert_eq!(stats.rank, "Beginner");
        assert_eq!(stats.next_rank_xp, 500);
    }

    proptest! {
        #[test]
        fn total_xp_and_rate_match_definition(
            items in proptest::collection::vec((0u32..1000, any::<bool>()), 0..40)
        ) {
            let achievements: Vec<Achievement> = items
                .iter()
                .enumerate()
                .map(|(i, (points, unlocked))| {
                    let mut a = achievement(&i.to_string());
                    a.points = *points;
                    a.unlocked = *unlocked;
                    a
                })
                .collect();

            let stats = AchievementStats::compute(&achievements, &[], 0, &default_rank_tiers());
            let expected_xp: u32 = items.iter().filter(|(_, u)| *u).map(|(p, _)| *p).sum();
            let unlocked = items.iter().filter(|(_, u)| *u).count() as f64;

            prop_assert_eq!(stats.total_xp, expected_xp);
            if items.is_empty() {
                prop_assert_eq!(stats.completion_rate, 0);
            } else {
                let expected_rate = (unlocked / items.len() as f64 * 100.0).round() as u32;
                prop_assert_eq!(stats.completion_rate, expected_rate);
            }
            prop_assert!(stats.completion_rate <= 100);
        }
    }
}
