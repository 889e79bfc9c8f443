//! Error types for the prediction bot.

/// Errors from the prediction lifecycle state machine.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    /// A mutating or publishing operation was attempted with no prediction armed.
    #[error("no prediction is set")]
    NotSet,
}

/// Errors from publishing the daily prediction.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// No prediction armed. The scheduled path treats this as a silent skip;
    /// the manual path surfaces it to the requester.
    #[error("no prediction is set")]
    NotSet,

    /// The announcement could not be delivered. The record is kept so the
    /// publish can be retried.
    #[error("announcement delivery failed: {0}")]
    Announcement(#[source] SinkError),
}

/// Errors from an external destination (announcement channel, history
/// channel, status indicator).
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The configured destination cannot be resolved.
    #[error("destination not available: {destination}")]
    Unavailable { destination: String },

    /// The send itself failed (network or platform transport).
    #[error("transport error sending to {destination}: {reason}")]
    Transport { destination: String, reason: String },

    /// The platform rejected the request.
    #[error("{destination} returned HTTP {status}: {body}")]
    Api {
        destination: String,
        status: u16,
        body: String,
    },
}

impl SinkError {
    /// The destination this error relates to.
    pub fn destination(&self) -> &str {
        match self {
            Self::Unavailable { destination }
            | Self::Transport { destination, .. }
            | Self::Api { destination, .. } => destination,
        }
    }
}

/// Validation errors raised at the command boundary, before any command
/// reaches the lifecycle controller.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// An integer argument is outside its declared range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: u64,
        max: u64,
        value: u64,
    },
}

/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is missing.
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    /// A variable is present but cannot be parsed.
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}
