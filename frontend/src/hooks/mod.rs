pub mod use_achievement_data;

pub use use_achievement_data::{use_achievement_data, AchievementData};
