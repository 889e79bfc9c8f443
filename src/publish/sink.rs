//! Destination trait for published payloads.

use async_trait::async_trait;

use crate::error::SinkError;
use crate::publish::payload::{AnnouncementPayload, HistoryPayload};

/// The three external destinations a publish touches.
///
/// Implementations own the platform transport. Every method is fallible and
/// every failure is recoverable from the caller's perspective: the lifecycle
/// controller decides per-transition whether a failure aborts (daily
/// announcement), degrades (history, status), or is merely logged.
#[async_trait]
pub trait PublishSink: Send + Sync {
    /// Send to the broadly visible announcement channel.
    async fn send_announcement(&self, payload: &AnnouncementPayload) -> Result<(), SinkError>;

    /// Mirror a short entry into the history channel.
    async fn send_history(&self, payload: &HistoryPayload) -> Result<(), SinkError>;

    /// Update the persistent ambient status label.
    async fn set_status_label(&self, label: &str) -> Result<(), SinkError>;
}
