use shared::AchievementsConfig;

pub struct Config;

impl Config {
    pub fn api_base_url() -> String {
        // Trunk proxies /api/ in development and nginx does in production, so
        // relative URLs work unless a build pins an absolute origin.
        option_env!("API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_default()
    }

    pub fn achievements() -> AchievementsConfig {
        AchievementsConfig::default()
    }
}
