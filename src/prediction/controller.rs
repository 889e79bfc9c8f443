//! The prediction lifecycle state machine.
//!
//! Two states, Empty and Armed, held as `Option<PredictionRecord>` behind a
//! single async mutex together with the counters. Every mutating operation
//! holds the lock for its whole duration, side effects included, so no two
//! mutations interleave and the status indicator always ends up showing the
//! last-finalized transition. Publish keeps the lock across the announcement
//! send: the reset only happens once the announcement is out, and a failed
//! send leaves the record armed for retry.

use std::sync::Arc;

use chrono::Utc;

use crate::error::{PredictionError, PublishError};
use crate::prediction::classify::{classify, Classification};
use crate::prediction::record::{PredictionRecord, Snapshot};
use crate::prediction::stats::PredictionStats;
use crate::publish::sink::PublishSink;
use crate::publish::{
    compose_announcement, compose_history_entry, compose_status_label, compose_update_notice,
};

/// What a successful publish did.
#[derive(Debug, Clone)]
pub struct PublishReport {
    /// The record that was announced (the state has since reset to Empty).
    pub record: PredictionRecord,
    pub classification: Classification,
    /// False when the history mirror failed; the announcement is still
    /// authoritative and the state still reset.
    pub history_logged: bool,
}

struct Inner {
    record: Option<PredictionRecord>,
    stats: PredictionStats,
}

/// Serialized owner of the prediction record and counters.
pub struct PredictionController {
    inner: tokio::sync::Mutex<Inner>,
    sink: Arc<dyn PublishSink>,
    /// Human phrase for the next scheduled publish, shown in replies and the
    /// announcement footer (e.g. "12 PM Central Time").
    footer_label: String,
}

impl PredictionController {
    pub fn new(sink: Arc<dyn PublishSink>, footer_label: impl Into<String>) -> Self {
        Self {
            inner: tokio::sync::Mutex::new(Inner {
                record: None,
                stats: PredictionStats::default(),
            }),
            sink,
            footer_label: footer_label.into(),
        }
    }

    /// The configured next-publish phrase.
    pub fn footer_label(&self) -> &str {
        &self.footer_label
    }

    /// Arm a new prediction, overwriting any existing one.
    ///
    /// Counts toward `total_predictions` and refreshes the status indicator.
    /// Range validation is the command boundary's job; any values that reach
    /// here are stored as given.
    pub async fn set(&self, item_position: u32, cost: u64) -> Snapshot {
        let mut inner = self.inner.lock().await;
        let record = PredictionRecord::new(item_position, cost);
        let classification = record.classification();
        inner.record = Some(record.clone());
        inner.stats.record_set();

        tracing::info!(
            item_position,
            cost,
            tier = ?classification.tier,
            "prediction set"
        );
        self.refresh_status(Some(&classification)).await;
        drop(inner);

        Snapshot::Armed {
            record,
            classification,
        }
    }

    /// Revise the cost of the armed prediction.
    ///
    /// Position and original cost are untouched. Emits a revision notice to
    /// the announcement channel (best-effort) and refreshes the status
    /// indicator.
    pub async fn update_cost(&self, new_cost: u64) -> Result<Snapshot, PredictionError> {
        let mut inner = self.inner.lock().await;
        let record = inner.record.as_mut().ok_or(PredictionError::NotSet)?;
        record.revise_cost(new_cost);
        let record = record.clone();

        let classification = record.classification();
        tracing::info!(
            new_cost,
            original_cost = record.original_cost,
            tier = ?classification.tier,
            "prediction cost revised"
        );

        let notice = compose_update_notice(&record, &classification);
        if let Err(e) = self.sink.send_announcement(&notice).await {
            tracing::warn!(destination = e.destination(), error = %e, "update notice not delivered");
        }
        self.refresh_status(Some(&classification)).await;
        drop(inner);

        Ok(Snapshot::Armed {
            record,
            classification,
        })
    }

    /// Publish the armed prediction, then reset to Empty.
    ///
    /// Ordering contract: the announcement must be delivered first. If it
    /// fails the record is kept so the publish can be retried. Once the
    /// announcement is out, the history mirror is best-effort and the state
    /// resets unconditionally. A prediction is single-use per civil day,
    /// manual publishes included.
    pub async fn publish(&self) -> Result<PublishReport, PublishError> {
        let mut inner = self.inner.lock().await;
        let record = inner.record.clone().ok_or(PublishError::NotSet)?;
        let classification = record.classification();

        let announcement = compose_announcement(&record, &classification, &self.footer_label);
        self.sink
            .send_announcement(&announcement)
            .await
            .map_err(PublishError::Announcement)?;

        let history = compose_history_entry(&record, &classification, Utc::now());
        let history_logged = match self.sink.send_history(&history).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(destination = e.destination(), error = %e, "history entry not delivered");
                false
            }
        };

        // The announcement is out; the reset happens regardless of the
        // history outcome.
        inner.record = None;

        tracing::info!(
            item_position = record.item_position,
            cost = record.cost,
            history_logged,
            "prediction published and cleared"
        );
        self.refresh_status(None).await;
        drop(inner);

        Ok(PublishReport {
            record,
            classification,
            history_logged,
        })
    }

    /// Reset to Empty. Idempotent; returns whether anything was armed.
    pub async fn clear(&self) -> bool {
        let mut inner = self.inner.lock().await;
        let was_armed = inner.record.take().is_some();

        if was_armed {
            tracing::info!("prediction cleared");
        }
        self.refresh_status(None).await;
        drop(inner);
        was_armed
    }

    /// Current record plus classification, or the explicit empty marker.
    pub async fn check(&self) -> Snapshot {
        let inner = self.inner.lock().await;
        match &inner.record {
            Some(record) => Snapshot::Armed {
                record: record.clone(),
                classification: classify(record.cost),
            },
            None => Snapshot::Empty,
        }
    }

    /// Current counters.
    pub async fn stats(&self) -> PredictionStats {
        self.inner.lock().await.stats
    }

    /// Record a resolved outcome; returns the updated counters.
    ///
    /// Extension point for the external resolution process; no lifecycle
    /// transition calls this.
    pub async fn record_outcome(&self, success: bool, saved: u64) -> PredictionStats {
        let mut inner = self.inner.lock().await;
        inner.stats.record_outcome(success, saved);
        inner.stats
    }

    /// Push the current classification (or emptiness) to the status
    /// indicator. Failures degrade to a log line; the indicator is ambient
    /// decoration, never part of a transition's contract.
    async fn refresh_status(&self, classification: Option<&Classification>) {
        let label = compose_status_label(classification);
        if let Err(e) = self.sink.set_status_label(&label).await {
            tracing::warn!(destination = e.destination(), error = %e, "status indicator not updated");
        }
    }
}
