//! Daily Super Seed prediction bot.
//!
//! Administrators arm a daily prediction (item position and Robux cost),
//! revise it as conditions change, and the bot publishes it on schedule to
//! an announcement channel, mirrors it into a history channel, and keeps a
//! voice-channel name updated as an ambient status indicator.

pub mod config;
pub mod discord;
pub mod error;
pub mod gateway;
pub mod prediction;
pub mod publish;
pub mod scheduler;
