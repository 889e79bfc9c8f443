//! Prediction domain: classification, record, counters, and the lifecycle
//! state machine.

pub mod classify;
pub mod controller;
pub mod record;
pub mod stats;

pub use classify::{classify, Classification, CostTier};
pub use controller::{PredictionController, PublishReport};
pub use record::{PredictionRecord, Snapshot};
pub use stats::PredictionStats;
