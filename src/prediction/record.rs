//! The active prediction record.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::prediction::classify::{classify, Classification};

/// An armed prediction.
///
/// The controller holds `Option<PredictionRecord>`: `None` is the Empty
/// state, `Some` is Armed. The record is always replaced wholesale (on set,
/// clear, and the auto-reset after publish), never partially patched, so it
/// can never be half-populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionRecord {
    /// Which sequential item acquisition contains the Super Seed (1–999).
    pub item_position: u32,
    /// Total cumulative Robux spend to reach that position (1–999,999).
    pub cost: u64,
    /// Cost at creation time; frozen so revisions stay auditable.
    pub original_cost: u64,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// Most recent mutation (creation or cost revision).
    pub last_updated_at: DateTime<Utc>,
}

impl PredictionRecord {
    /// Create a fresh record for a newly set prediction.
    pub fn new(item_position: u32, cost: u64) -> Self {
        let now = Utc::now();
        Self {
            item_position,
            cost,
            original_cost: cost,
            created_at: now,
            last_updated_at: now,
        }
    }

    /// Revise the cost in place. Position and original cost are untouched.
    pub fn revise_cost(&mut self, new_cost: u64) {
        self.cost = new_cost;
        self.last_updated_at = Utc::now();
    }

    /// Whether the cost has been revised since creation.
    pub fn is_revised(&self) -> bool {
        self.cost != self.original_cost
    }

    /// Classification of the current cost.
    pub fn classification(&self) -> Classification {
        classify(self.cost)
    }
}

/// Read-only view returned by `check`: the record plus its derived
/// classification, or an explicit empty marker.
#[derive(Debug, Clone)]
pub enum Snapshot {
    Empty,
    Armed {
        record: PredictionRecord,
        classification: Classification,
    },
}

impl Snapshot {
    /// Whether a prediction is armed.
    pub fn is_armed(&self) -> bool {
        matches!(self, Self::Armed { .. })
    }
}
