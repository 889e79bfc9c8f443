//! Minimal Discord REST client for the three destinations the bot touches.
//!
//! Bot-token auth against the v10 HTTP API. Only two endpoints are needed:
//! create-message (announcement and history channels) and modify-channel
//! (renaming the status voice channel).

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::error::SinkError;
use crate::publish::payload::Embed;

const DEFAULT_BASE_URL: &str = "https://discord.com/api/v10";

#[derive(Serialize)]
struct CreateMessage<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<&'a str>,
    embeds: [&'a Embed; 1],
}

#[derive(Serialize)]
struct ModifyChannel<'a> {
    name: &'a str,
}

/// Discord HTTP API client.
pub struct DiscordApi {
    client: Client,
    token: SecretString,
    base_url: String,
}

impl DiscordApi {
    pub fn new(token: SecretString) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different API root (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn api_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn auth_header(&self) -> String {
        format!("Bot {}", self.token.expose_secret())
    }

    /// Post a message (optional content plus one embed) to a channel.
    ///
    /// `destination` is the logical name carried into errors
    /// ("announcement", "history", "status").
    pub async fn create_message(
        &self,
        destination: &str,
        channel_id: &str,
        content: Option<&str>,
        embed: &Embed,
    ) -> Result<(), SinkError> {
        let url = self.api_url(&format!("channels/{channel_id}/messages"));
        let body = CreateMessage {
            content,
            embeds: [embed],
        };

        tracing::debug!(destination, channel_id, "posting message");
        let response = self
            .client
            .post(&url)
            .header("Authorization", self.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|e| SinkError::Transport {
                destination: destination.to_string(),
                reason: e.to_string(),
            })?;

        Self::check_status(destination, response).await
    }

    /// Rename a channel (the ambient status indicator).
    pub async fn rename_channel(
        &self,
        destination: &str,
        channel_id: &str,
        name: &str,
    ) -> Result<(), SinkError> {
        let url = self.api_url(&format!("channels/{channel_id}"));

        tracing::debug!(destination, channel_id, name, "renaming channel");
        let response = self
            .client
            .patch(&url)
            .header("Authorization", self.auth_header())
            .json(&ModifyChannel { name })
            .send()
            .await
            .map_err(|e| SinkError::Transport {
                destination: destination.to_string(),
                reason: e.to_string(),
            })?;

        Self::check_status(destination, response).await
    }

    async fn check_status(destination: &str, response: reqwest::Response) -> Result<(), SinkError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        // An unknown channel means the configured destination does not
        // resolve, which callers treat as a degraded skip.
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(SinkError::Unavailable {
                destination: destination.to_string(),
            });
        }
        Err(SinkError::Api {
            destination: destination.to_string(),
            status: status.as_u16(),
            body,
        })
    }
}
