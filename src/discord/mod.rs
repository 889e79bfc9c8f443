//! Discord-backed implementation of the publish sink.

pub mod api;

use async_trait::async_trait;

use crate::config::DiscordChannels;
use crate::error::SinkError;
use crate::publish::payload::{AnnouncementPayload, HistoryPayload};
use crate::publish::sink::PublishSink;

pub use api::DiscordApi;

/// Routes the three publish destinations onto Discord channels.
pub struct DiscordSink {
    api: DiscordApi,
    channels: DiscordChannels,
}

impl DiscordSink {
    pub fn new(api: DiscordApi, channels: DiscordChannels) -> Self {
        Self { api, channels }
    }
}

#[async_trait]
impl PublishSink for DiscordSink {
    async fn send_announcement(&self, payload: &AnnouncementPayload) -> Result<(), SinkError> {
        self.api
            .create_message(
                "announcement",
                &self.channels.announcement,
                Some(&payload.content),
                &payload.embed,
            )
            .await
    }

    async fn send_history(&self, payload: &HistoryPayload) -> Result<(), SinkError> {
        self.api
            .create_message("history", &self.channels.history, None, &payload.embed)
            .await
    }

    async fn set_status_label(&self, label: &str) -> Result<(), SinkError> {
        self.api
            .rename_channel("status", &self.channels.status, label)
            .await
    }
}
