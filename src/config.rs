//! Environment-driven configuration.
//!
//! Everything external is supplied via environment variables (an `.env` file
//! is honored when present). Channel IDs default to the original guild's
//! values so a fresh checkout boots against the expected layout; the bot
//! token never has a default.

use std::net::SocketAddr;

use chrono::{FixedOffset, NaiveTime};
use cron::Schedule;
use secrecy::SecretString;

use crate::error::ConfigError;

const DEFAULT_PREDICTION_CHANNEL: &str = "1386228833203781804";
const DEFAULT_HISTORY_CHANNEL: &str = "1386229029795008622";
const DEFAULT_STATUS_CHANNEL: &str = "1386504457159839765";

/// The three Discord channel destinations.
#[derive(Debug, Clone)]
pub struct DiscordChannels {
    /// Daily announcement channel.
    pub announcement: String,
    /// History mirror channel.
    pub history: String,
    /// Voice channel whose name is the ambient status indicator.
    pub status: String,
}

/// Discord credentials and destinations.
pub struct DiscordConfig {
    pub bot_token: SecretString,
    pub channels: DiscordChannels,
}

/// When the daily publish fires.
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    /// Local wall-clock publish time.
    pub publish_time: NaiveTime,
    /// Offset of the configured local time from UTC.
    pub utc_offset: FixedOffset,
    /// Human phrase for replies and the announcement footer.
    pub footer_label: String,
}

impl ScheduleConfig {
    /// Cron schedule firing once per day at the configured local time.
    pub fn daily_schedule(&self) -> Schedule {
        use chrono::Timelike;
        let expr = format!(
            "0 {} {} * * *",
            self.publish_time.minute(),
            self.publish_time.hour()
        );
        // The expression is built from an already-validated NaiveTime.
        expr.parse().expect("cron expression from validated time")
    }
}

/// Command gateway listener settings.
pub struct GatewayConfig {
    pub bind: SocketAddr,
    /// Bearer token required on every command request. Generated at startup
    /// when unset.
    pub token: Option<SecretString>,
}

/// Full bot configuration.
pub struct Config {
    pub discord: DiscordConfig,
    pub schedule: ScheduleConfig,
    pub gateway: GatewayConfig,
}

impl Config {
    /// Load from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bot_token = require("BOT_TOKEN")?;

        let channels = DiscordChannels {
            announcement: var_or("PREDICTION_CHANNEL_ID", DEFAULT_PREDICTION_CHANNEL),
            history: var_or("HISTORY_CHANNEL_ID", DEFAULT_HISTORY_CHANNEL),
            status: var_or("VOICE_STATUS_CHANNEL_ID", DEFAULT_STATUS_CHANNEL),
        };

        let publish_time = parse_time("PUBLISH_TIME", &var_or("PUBLISH_TIME", "12:00"))?;
        let utc_offset = parse_offset("PUBLISH_UTC_OFFSET", &var_or("PUBLISH_UTC_OFFSET", "-06:00"))?;
        let footer_label = var_or("PUBLISH_LABEL", "Tomorrow 12 PM CT");

        let bind = var_or("GATEWAY_BIND", "127.0.0.1:8787")
            .parse()
            .map_err(|e| ConfigError::Invalid {
                var: "GATEWAY_BIND",
                reason: format!("{e}"),
            })?;
        let token = std::env::var("GATEWAY_TOKEN").ok().map(SecretString::from);

        Ok(Self {
            discord: DiscordConfig { bot_token, channels },
            schedule: ScheduleConfig {
                publish_time,
                utc_offset,
                footer_label,
            },
            gateway: GatewayConfig { bind, token },
        })
    }
}

fn require(name: &'static str) -> Result<SecretString, ConfigError> {
    std::env::var(name)
        .map(SecretString::from)
        .map_err(|_| ConfigError::MissingVar(name))
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_time(var: &'static str, value: &str) -> Result<NaiveTime, ConfigError> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| ConfigError::Invalid {
        var,
        reason: format!("expected HH:MM, got {value:?}"),
    })
}

/// Parse a `±HH:MM` UTC offset.
fn parse_offset(var: &'static str, value: &str) -> Result<FixedOffset, ConfigError> {
    let invalid = || ConfigError::Invalid {
        var,
        reason: format!("expected ±HH:MM, got {value:?}"),
    };

    let (sign, rest) = match value.split_at_checked(1) {
        Some(("+", rest)) => (1i32, rest),
        Some(("-", rest)) => (-1i32, rest),
        _ => return Err(invalid()),
    };
    let (hours, minutes) = rest.split_once(':').ok_or_else(invalid)?;
    // Unsigned parses so a stray sign inside a component cannot sneak in.
    let hours: u32 = hours.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
    if hours > 14 || minutes > 59 {
        return Err(invalid());
    }
    let (hours, minutes) = (hours as i32, minutes as i32);

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}
