//! Publication pipeline: payload composition and the destination trait.

pub mod compose;
pub mod payload;
pub mod sink;

pub use compose::{
    compose_announcement, compose_history_entry, compose_status_label, compose_update_notice,
    group_thousands, ordinal_suffix,
};
pub use payload::{AnnouncementPayload, Embed, EmbedField, EmbedFooter, HistoryPayload};
pub use sink::PublishSink;
