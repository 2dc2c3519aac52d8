use async_trait::async_trait;
use thiserror::Error;

use crate::config::ApiSettings;

use super::model::{User, UserDraft};

/// One uniform error for every remote failure: the controller does not
/// distinguish 4xx from 5xx, only the message text differs downstream.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server rejected the request with status {status}")]
    Status { status: u16 },
}

/// The remote user collection: GET (list), POST (create), PUT `/{id}`
/// (replace), DELETE `/{id}`, all JSON.
#[async_trait]
pub trait UserDirectoryApi: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, ApiError>;
    async fn create(&self, draft: &UserDraft) -> Result<User, ApiError>;
    async fn update(&self, id: i64, draft: &UserDraft) -> Result<User, ApiError>;
    async fn delete(&self, id: i64) -> Result<(), ApiError>;
}

/// `reqwest`-backed implementation against the configured base URL.
pub struct RestDirectoryApi {
    http: reqwest::Client,
    base_url: String,
}

impl RestDirectoryApi {
    pub fn new(settings: &ApiSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn entity_url(&self, id: i64) -> String {
        format!("{}/{id}", self.base_url)
    }

    fn ensure_success(response: &reqwest::Response) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status {
                status: status.as_u16(),
            })
        }
    }
}

#[async_trait]
impl UserDirectoryApi for RestDirectoryApi {
    async fn list(&self) -> Result<Vec<User>, ApiError> {
        let response = self.http.get(self.base_url.as_str()).send().await?;
        Self::ensure_success(&response)?;
        Ok(response.json().await?)
    }

    async fn create(&self, draft: &UserDraft) -> Result<User, ApiError> {
        let response = self
            .http
            .post(self.base_url.as_str())
            .json(draft)
            .send()
            .await?;
        Self::ensure_success(&response)?;
        Ok(response.json().await?)
    }

    async fn update(&self, id: i64, draft: &UserDraft) -> Result<User, ApiError> {
        let response = self.http.put(self.entity_url(id)).json(draft).send().await?;
        Self::ensure_success(&response)?;
        Ok(response.json().await?)
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let response = self.http.delete(self.entity_url(id)).send().await?;
        Self::ensure_success(&response)?;
        Ok(())
    }
}
