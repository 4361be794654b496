use crate::models::achievement::Achievement;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Ordering applied by [`filter_and_sort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Unlocked first, most recently unlocked at the top
    #[default]
    Recent,
    Points,
    Progress,
    Rarity,
    /// Keep the source order
    Unchanged,
}

impl FromStr for SortBy {
    type Err = std::convert::Infallible;

    /// Unknown values map to `Unchanged` instead of failing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "recent" => Self::Recent,
            "points" => Self::Points,
            "progress" => Self::Progress,
            "rarity" => Self::Rarity,
            _ => Self::Unchanged,
        })
    }
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::Points => "points",
            Self::Progress => "progress",
            Self::Rarity => "rarity",
            Self::Unchanged => "unchanged",
        }
    }
}

/// Filter and sort options; `"all"` disables the category or rarity filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementQuery {
    pub search_term: String,
    pub category: String,
    pub rarity: String,
    pub sort_by: SortBy,
    pub unlocked_only: bool,
}

impl Default for AchievementQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: "all".to_string(),
            rarity: "all".to_string(),
            sort_by: SortBy::Recent,
            unlocked_only: false,
        }
    }
}

impl AchievementQuery {
    pub fn new(
        search_term: &str,
        category: &str,
        rarity: &str,
        sort_by: &str,
        unlocked_only: bool,
    ) -> Self {
        Self {
            search_term: search_term.to_string(),
            category: category.to_string(),
            rarity: rarity.to_string(),
            sort_by: sort_by.parse().unwrap_or_default(),
            unlocked_only,
        }
    }

    pub fn matches(&self, achievement: &Achievement) -> bool {
        let category_ok = self.category == "all" || self.category == achievement.category;
        let rarity_ok = self.rarity == "all" || self.rarity == achievement.rarity.as_str();
        let term = self.search_term.to_lowercase();
        let search_ok = term.is_empty()
            || achievement.title.to_lowercase().contains(&term)
            || achievement.description.to_lowercase().contains(&term);
        let unlocked_ok = !self.unlocked_only || achievement.unlocked;

        category_ok && rarity_ok && search_ok && unlocked_ok
    }
}

fn compare_recent(a: &Achievement, b: &Achievement) -> Ordering {
    match (a.unlocked, b.unlocked) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => {
            // `None` (missing or malformed) orders before any real timestamp
            b.unlocked_at_parsed().cmp(&a.unlocked_at_parsed())
        }
        (false, false) => Ordering::Equal,
    }
}

/// Returns the achievements matching `query`, ordered by `query.sort_by`.
///
/// Pure: the input slice is left untouched and sorting is stable.
pub fn filter_and_sort(achievements: &[Achievement], query: &AchievementQuery) -> Vec<Achievement> {
    let mut filtered: Vec<Achievement> = achievements
        .iter()
        .filter(|a| query.matches(a))
        .cloned()
        .collect();

    match query.sort_by {
        SortBy::Recent => filtered.sort_by(compare_recent),
        SortBy::Points => filtered.sort_by(|a, b| b.points.cmp(&a.points)),
        SortBy::Progress => filtered.sort_by(|a, b| {
            b.progress_ratio()
                .partial_cmp(&a.progress_ratio())
                .unwrap_or(Ordering::Equal)
        }),
        SortBy::Rarity => filtered.sort_by(|a, b| b.rarity.sort_rank().cmp(&a.rarity.sort_rank())),
        SortBy::Unchanged => {}
    }

    filtered
}
