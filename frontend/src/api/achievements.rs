use crate::api::api_url;
use crate::api::utils::authenticated_get;
use crate::storage::BrowserCredentialStore;
use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use serde_json::Value;
use shared::{AchievementApi, AchievementsConfig, ApiError, CredentialStore};

#[derive(Deserialize)]
struct ErrorResponse {
    #[serde(alias = "message")]
    error: String,
}

/// Achievements endpoints over HTTP
#[derive(Clone)]
pub struct HttpAchievementApi {
    config: AchievementsConfig,
    credentials: BrowserCredentialStore,
}

impl HttpAchievementApi {
    pub fn new(config: AchievementsConfig, credentials: BrowserCredentialStore) -> Self {
        Self {
            config,
            credentials,
        }
    }

    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        debug!("GET {}", path);
        let token = self.credentials.token();
        let response = authenticated_get(&api_url(path), token.as_deref())
            .send()
            .await
            .map_err(|e| ApiError::network(format!("Failed to send request to {}: {}", path, e)))?;

        if !response.ok() {
            let status = response.status();
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|e| e.error)
                .unwrap_or_else(|_| format!("HTTP {}", status));
            return Err(ApiError::new(Some(status), message));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::new(Some(response.status()), format!("Invalid response from {}: {}", path, e)))
    }
}

#[async_trait(?Send)]
impl AchievementApi for HttpAchievementApi {
    async fn list_achievements(&self) -> Result<Value, ApiError> {
        self.get_json(&self.config.achievements_path).await
    }

    async fn list_badges(&self) -> Result<Value, ApiError> {
        self.get_json(&self.config.badges_path).await
    }

    async fn leaderboard(&self, category: &str) -> Result<Value, ApiError> {
        self.get_json(&self.config.leaderboard_query(category)).await
    }

    async fn game_stats(&self) -> Result<Option<Value>, ApiError> {
        let value = self.get_json(&self.config.game_stats_path).await?;
        Ok(match value {
            Value::Null => None,
            other => Some(other),
        })
    }
}
