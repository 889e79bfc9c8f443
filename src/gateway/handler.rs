//! Command execution: maps each validated command onto the lifecycle
//! controller and renders the private reply.

use std::sync::Arc;

use crate::error::PublishError;
use crate::gateway::{Command, CommandReply};
use crate::prediction::controller::PredictionController;
use crate::prediction::record::Snapshot;
use crate::publish::group_thousands;

/// Executes admin commands against the controller.
pub struct CommandHandler {
    controller: Arc<PredictionController>,
}

impl CommandHandler {
    pub fn new(controller: Arc<PredictionController>) -> Self {
        Self { controller }
    }

    /// Run one command to completion. Never panics and never propagates an
    /// error: every outcome is a reply string.
    pub async fn handle(&self, command: Command) -> CommandReply {
        if let Err(e) = command.validate() {
            return CommandReply::failed(format!("\u{2717} {e}"));
        }

        match command {
            Command::SetPrediction {
                item_position,
                cost,
            } => self.set_prediction(item_position, cost).await,
            Command::UpdateCost { cost } => self.update_cost(cost).await,
            Command::PublishNow => self.publish_now().await,
            Command::Check => self.check().await,
            Command::Clear => self.clear().await,
            Command::Stats => self.stats().await,
            Command::RecordOutcome { success, saved } => self.record_outcome(success, saved).await,
        }
    }

    async fn set_prediction(&self, item_position: u32, cost: u64) -> CommandReply {
        let snapshot = self.controller.set(item_position, cost).await;
        let Snapshot::Armed { classification, .. } = snapshot else {
            // set() always arms.
            return CommandReply::failed("\u{2717} An error occurred while processing the command.");
        };

        CommandReply::ok(format!(
            "\u{2713} **Prediction Set Successfully**\n\n\
             \u{25B8} **Item Position:** {item_position}\n\
             \u{25B8} **Total Cost:** {} Robux\n\
             \u{25B8} **Status:** {} {}\n\
             \u{25B8} **Auto-Post:** {}",
            group_thousands(cost),
            classification.icon,
            classification.label,
            self.controller.footer_label(),
        ))
    }

    async fn update_cost(&self, cost: u64) -> CommandReply {
        match self.controller.update_cost(cost).await {
            Ok(Snapshot::Armed {
                record,
                classification,
            }) => CommandReply::ok(format!(
                "\u{2713} **Cost Updated**\n\n\
                 \u{25B8} **Item Position:** {}\n\
                 \u{25B8} **Revised Cost:** {} Robux (was {})\n\
                 \u{25B8} **Status:** {} {}",
                record.item_position,
                group_thousands(record.cost),
                group_thousands(record.original_cost),
                classification.icon,
                classification.label,
            )),
            Ok(Snapshot::Empty) | Err(_) => CommandReply::failed(
                "\u{2717} No prediction is set for today. Use `/setprediction` first.",
            ),
        }
    }

    async fn publish_now(&self) -> CommandReply {
        match self.controller.publish().await {
            Ok(report) if report.history_logged => CommandReply::ok(
                "\u{2713} Prediction sent manually to daily channel (with @everyone ping) \
                 and logged to history.",
            ),
            Ok(_) => CommandReply::ok(
                "\u{2713} Prediction sent manually to daily channel (with @everyone ping). \
                 \u{26A0} History log could not be delivered.",
            ),
            Err(PublishError::NotSet) => CommandReply::failed(
                "\u{2717} No prediction is set for today. Use `/setprediction` first.",
            ),
            Err(PublishError::Announcement(e)) => CommandReply::failed(format!(
                "\u{2717} Announcement could not be delivered ({e}). \
                 The prediction is still set; try again.",
            )),
        }
    }

    async fn check(&self) -> CommandReply {
        match self.controller.check().await {
            Snapshot::Armed {
                record,
                classification,
            } => CommandReply::ok(format!(
                "\u{25A3} **Current Prediction**\n\n\
                 \u{25B8} **Item Position:** {}\n\
                 \u{25B8} **Total Cost:** {} Robux\n\
                 \u{25B8} **Status:** {} {}\n\
                 \u{25B8} **Next Auto-Post:** {}",
                record.item_position,
                group_thousands(record.cost),
                classification.icon,
                classification.label,
                self.controller.footer_label(),
            )),
            Snapshot::Empty => {
                CommandReply::failed("\u{2717} No prediction is set for today.")
            }
        }
    }

    async fn clear(&self) -> CommandReply {
        if self.controller.clear().await {
            CommandReply::ok("\u{2713} Prediction cleared.")
        } else {
            CommandReply::ok("\u{25B8} Nothing to clear - no prediction was set.")
        }
    }

    async fn stats(&self) -> CommandReply {
        let stats = self.controller.stats().await;
        CommandReply::ok(format!(
            "\u{25A3} **Prediction Stats**\n\n\
             \u{25B8} **Total Predictions:** {}\n\
             \u{25B8} **Successful:** {}\n\
             \u{25B8} **Accuracy:** {}%\n\
             \u{25B8} **Robux Saved:** {}",
            stats.total_predictions,
            stats.successful_predictions,
            stats.accuracy_rate(),
            group_thousands(stats.total_robux_saved),
        ))
    }

    async fn record_outcome(&self, success: bool, saved: u64) -> CommandReply {
        let stats = self.controller.record_outcome(success, saved).await;
        CommandReply::ok(format!(
            "\u{2713} Outcome recorded. Accuracy is now {}% over {} predictions.",
            stats.accuracy_rate(),
            stats.total_predictions,
        ))
    }
}
