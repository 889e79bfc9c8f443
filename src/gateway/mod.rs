//! Command gateway: the privileged admin surface.
//!
//! Parsed commands arrive over a small authenticated HTTP endpoint (the
//! platform's own command dispatch is out of scope) and resolve to private,
//! human-readable confirmations or failure reasons. Range validation lives
//! here; nothing out of range ever reaches the lifecycle controller.

pub mod handler;
pub mod server;

use serde::{Deserialize, Serialize};

use crate::error::CommandError;

pub use handler::CommandHandler;
pub use server::{CommandServer, CommandServerConfig};

/// Maximum item position a prediction can name.
pub const MAX_ITEM_POSITION: u64 = 999;
/// Maximum Robux amount accepted for costs and savings.
pub const MAX_ROBUX: u64 = 999_999;

/// A parsed admin command.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Arm today's prediction, overwriting any existing one.
    SetPrediction { item_position: u32, cost: u64 },
    /// Revise the cost of the armed prediction.
    UpdateCost { cost: u64 },
    /// Publish immediately instead of waiting for the schedule.
    PublishNow,
    /// Inspect the armed prediction.
    Check,
    /// Reset to empty.
    Clear,
    /// Show the running counters.
    Stats,
    /// Record the resolved outcome of a past prediction.
    RecordOutcome {
        success: bool,
        #[serde(default)]
        saved: u64,
    },
}

impl Command {
    /// Validate argument ranges before the command touches any state.
    pub fn validate(&self) -> Result<(), CommandError> {
        match *self {
            Self::SetPrediction {
                item_position,
                cost,
            } => {
                in_range("item_position", u64::from(item_position), 1, MAX_ITEM_POSITION)?;
                in_range("cost", cost, 1, MAX_ROBUX)
            }
            Self::UpdateCost { cost } => in_range("cost", cost, 1, MAX_ROBUX),
            Self::RecordOutcome { saved, .. } => in_range("saved", saved, 0, MAX_ROBUX),
            Self::PublishNow | Self::Check | Self::Clear | Self::Stats => Ok(()),
        }
    }
}

fn in_range(field: &'static str, value: u64, min: u64, max: u64) -> Result<(), CommandError> {
    if value < min || value > max {
        return Err(CommandError::OutOfRange {
            field,
            min,
            max,
            value,
        });
    }
    Ok(())
}

/// The private reply returned to the requester.
#[derive(Debug, Clone, Serialize)]
pub struct CommandReply {
    pub ok: bool,
    pub message: String,
}

impl CommandReply {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_bounds() {
        assert!(Command::SetPrediction {
            item_position: 1,
            cost: 1
        }
        .validate()
        .is_ok());
        assert!(Command::SetPrediction {
            item_position: 999,
            cost: 999_999
        }
        .validate()
        .is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(Command::SetPrediction {
            item_position: 1_000,
            cost: 500
        }
        .validate()
        .is_err());
        assert!(Command::SetPrediction {
            item_position: 5,
            cost: 0
        }
        .validate()
        .is_err());
        assert!(Command::UpdateCost { cost: 1_000_000 }.validate().is_err());
    }

    #[test]
    fn test_command_json_shape() {
        let cmd: Command = serde_json::from_str(
            r#"{"command": "set_prediction", "item_position": 42, "cost": 750}"#,
        )
        .unwrap();
        assert!(matches!(
            cmd,
            Command::SetPrediction {
                item_position: 42,
                cost: 750
            }
        ));

        let cmd: Command = serde_json::from_str(r#"{"command": "publish_now"}"#).unwrap();
        assert!(matches!(cmd, Command::PublishNow));

        // saved defaults to 0
        let cmd: Command =
            serde_json::from_str(r#"{"command": "record_outcome", "success": false}"#).unwrap();
        assert!(matches!(
            cmd,
            Command::RecordOutcome {
                success: false,
                saved: 0
            }
        ));
    }
}
