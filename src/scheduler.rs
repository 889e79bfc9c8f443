//! Daily publish trigger.
//!
//! Sleeps until the next scheduled local time, fires the controller's
//! publish, and repeats. The scheduled path never surfaces errors to a user:
//! an empty state is an expected skip, anything else is logged and the loop
//! keeps going with tomorrow's occurrence.

use std::sync::Arc;

use chrono::Utc;
use cron::Schedule;
use tokio::task::JoinHandle;

use crate::config::ScheduleConfig;
use crate::error::PublishError;
use crate::prediction::controller::PredictionController;

/// Spawn the daily publish loop as a background task.
pub fn spawn_daily_publish(
    controller: Arc<PredictionController>,
    config: ScheduleConfig,
) -> JoinHandle<()> {
    let schedule = config.daily_schedule();
    tracing::info!(
        publish_time = %config.publish_time,
        utc_offset = %config.utc_offset,
        "daily publish scheduled"
    );

    tokio::spawn(async move {
        run_loop(controller, schedule, config).await;
    })
}

async fn run_loop(
    controller: Arc<PredictionController>,
    schedule: Schedule,
    config: ScheduleConfig,
) {
    loop {
        let now = Utc::now().with_timezone(&config.utc_offset);
        let Some(next) = schedule.after(&now).next() else {
            tracing::error!("daily schedule produced no upcoming occurrence, stopping");
            return;
        };

        let wait = (next - now)
            .to_std()
            .unwrap_or(std::time::Duration::ZERO);
        tracing::debug!(next = %next, "sleeping until next publish");
        tokio::time::sleep(wait).await;

        match controller.publish().await {
            Ok(report) => {
                tracing::info!(
                    item_position = report.record.item_position,
                    cost = report.record.cost,
                    "scheduled publish delivered"
                );
            }
            // Expected whenever no prediction was set for the day.
            Err(PublishError::NotSet) => {
                tracing::info!("no prediction set, skipping scheduled publish");
            }
            Err(e) => {
                tracing::error!(error = %e, "scheduled publish failed");
            }
        }
    }
}
