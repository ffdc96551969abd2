use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use shared::{domain::UserRecord, error::FetchError, protocol::decode_user_list};
use tracing::{debug, info};
use url::Url;

pub mod config;
pub mod controller;
pub mod render;

pub use config::{ClientSettings, SettingsOverrides};
pub use controller::{Completion, LoadState, LoadTicket, UserListController};
pub use render::{render, RenderView, StatusView, UserCard};

pub const DEFAULT_USERS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Anything that can produce the current user list.
#[async_trait]
pub trait UserSource: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, FetchError>;
}

/// HTTP client for the user directory endpoint.
#[derive(Clone)]
pub struct UserDirectoryClient {
    http: Client,
    endpoint: Url,
}

impl UserDirectoryClient {
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        let http = Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self::with_http_client(http, settings.endpoint.clone()))
    }

    pub fn with_http_client(http: Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl UserSource for UserDirectoryClient {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, FetchError> {
        debug!(endpoint = %self.endpoint, "users: GET");
        let response = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(classify_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(classify_reqwest_error)?;
        let users = decode_user_list(&body)?;
        info!(count = users.len(), "users: fetched");
        Ok(users)
    }
}

fn classify_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_decode() {
        FetchError::parse(err.to_string())
    } else if err.is_timeout() {
        FetchError::transport(format!("request timed out: {err}"))
    } else {
        FetchError::transport(err.to_string())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
