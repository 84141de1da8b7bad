//! HTTP client for the admin user-management endpoints.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use std::time::Duration;

use super::{normalize, BackendError, UserDirectory, UserUpdate};
use crate::config::ApiConfig;
use crate::entities::{AdminUser, RecordId};

/// Longest error body excerpt carried into an error message
const MAX_ERROR_BODY: usize = 200;

/// `UserDirectory` backed by the CRM REST API.
pub struct HttpUserDirectory {
    client: Client,
    base_url: String,
    token: String,
}

impl HttpUserDirectory {
    /// Create a client for `base_url` authenticating with a bearer `token`.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>, timeout: Duration) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    pub fn from_config(config: &ApiConfig, token: impl Into<String>) -> Result<Self, BackendError> {
        Self::new(
            config.base_url.clone(),
            token,
            Duration::from_secs(config.timeout_seconds),
        )
    }

    pub fn list_url(&self) -> String {
        format!("{}/AdminUsers/list/", self.base_url)
    }

    pub fn update_url(&self, id: &RecordId) -> String {
        format!("{}/AdminUsers/update/{}/", self.base_url, id)
    }

    pub fn delete_url(&self, id: &RecordId) -> String {
        format!("{}/AdminUsers/delete/{}/", self.base_url, id)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, BackendError> {
        let response = request
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(status_error(status, &body))
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn list_users(&self) -> Result<Vec<AdminUser>, BackendError> {
        let url = self.list_url();
        log::debug!("GET {}", url);

        let response = self.send(self.client.get(&url)).await?;
        let body = response.text().await.map_err(network_error)?;
        let users = normalize::normalize_users_body(&body);

        log::info!("Fetched {} users from API", users.len());
        Ok(users)
    }

    async fn update_user(&self, id: &RecordId, update: &UserUpdate) -> Result<(), BackendError> {
        let url = self.update_url(id);
        log::debug!("PUT {}", url);

        self.send(self.client.put(&url).json(update)).await?;
        Ok(())
    }

    async fn delete_user(&self, id: &RecordId) -> Result<(), BackendError> {
        let url = self.delete_url(id);
        log::debug!("DELETE {}", url);

        self.send(self.client.delete(&url)).await?;
        Ok(())
    }
}

fn network_error(err: reqwest::Error) -> BackendError {
    if err.is_timeout() {
        BackendError::Network(format!("request timed out: {}", err))
    } else {
        BackendError::Network(err.to_string())
    }
}

fn status_error(status: StatusCode, body: &str) -> BackendError {
    let trimmed = body.trim();
    let detail = if trimmed.is_empty() {
        format!("HTTP {}", status)
    } else {
        let excerpt: String = trimmed.chars().take(MAX_ERROR_BODY).collect();
        format!("HTTP {}: {}", status, excerpt)
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => BackendError::Auth(detail),
        StatusCode::NOT_FOUND => BackendError::NotFound(detail),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => BackendError::InvalidData(detail),
        _ => BackendError::Other(detail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let directory =
            HttpUserDirectory::new("https://crm.example.com/api/", "token", Duration::from_secs(5)).unwrap();
        assert_eq!(directory.list_url(), "https://crm.example.com/api/AdminUsers/list/");
        assert_eq!(
            directory.update_url(&RecordId::Number(12)),
            "https://crm.example.com/api/AdminUsers/update/12/"
        );
        assert_eq!(
            directory.delete_url(&RecordId::from("u-7")),
            "https://crm.example.com/api/AdminUsers/delete/u-7/"
        );
    }

    #[test]
    fn test_status_error_mapping() {
        assert!(matches!(status_error(StatusCode::UNAUTHORIZED, ""), BackendError::Auth(_)));
        assert!(matches!(status_error(StatusCode::NOT_FOUND, "gone"), BackendError::NotFound(_)));
        assert!(matches!(
            status_error(StatusCode::INTERNAL_SERVER_ERROR, "boom"),
            BackendError::Other(msg) if msg == "HTTP 500 Internal Server Error: boom"
        ));
    }
}
