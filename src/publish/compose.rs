//! Composition of announcement, history, and status-indicator content from a
//! prediction record and its classification.

use chrono::{DateTime, Utc};

use crate::prediction::classify::Classification;
use crate::prediction::record::PredictionRecord;
use crate::publish::payload::{AnnouncementPayload, Embed, EmbedField, HistoryPayload};

const INSTRUCTIONS: &str = "\u{27D0} Buy Forever Packs one by one\n\
                            \u{27D0} Count each item you receive\n\
                            \u{27D0} Stop when you reach the predicted position\n\
                            \u{27D0} Claim your Super Seed";

const PRO_TIPS: &str = "\u{25E6} Buy early in the day for cheaper pack costs\n\
                        \u{25E6} Take screenshots for proof\n\
                        \u{25E6} Share your success in the community";

/// Ordinal suffix for an item position: 1 -> "st", 2 -> "nd", 3 -> "rd",
/// 11/12/13 -> "th", and so on.
pub fn ordinal_suffix(n: u32) -> &'static str {
    let j = n % 10;
    let k = n % 100;
    if j == 1 && k != 11 {
        "st"
    } else if j == 2 && k != 12 {
        "nd"
    } else if j == 3 && k != 13 {
        "rd"
    } else {
        "th"
    }
}

/// Format a Robux amount with thousands separators ("6000" -> "6,000").
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// The full daily announcement: broad ping prefix plus the rich embed.
///
/// `footer_label` is the human phrase for the next scheduled publish
/// (e.g. "Tomorrow 12 PM CT").
pub fn compose_announcement(
    record: &PredictionRecord,
    classification: &Classification,
    footer_label: &str,
) -> AnnouncementPayload {
    let position = record.item_position;
    let embed = Embed::new("\u{25C8} Daily Super Seed Prediction", classification.color)
        .with_description("**Today's exact position and cost prediction**")
        .with_field(EmbedField::inline(
            "\u{25B8} Item Position",
            format!(
                "**{position}**\nThe Super Seed will be the **{position}{}** item you receive",
                ordinal_suffix(position)
            ),
        ))
        .with_field(EmbedField::inline(
            "\u{25B8} Total Cost",
            format!(
                "**{} Robux**\nTotal cost to reach this position",
                group_thousands(record.cost)
            ),
        ))
        .with_field(EmbedField::inline(
            "\u{25B8} Cost Status",
            format!("{} {}", classification.icon, classification.label),
        ))
        .with_field(EmbedField::block("\u{25B8} Instructions", INSTRUCTIONS))
        .with_field(EmbedField::block("\u{25B8} Pro Tips", PRO_TIPS))
        .with_footer(format!(
            "VIP Exclusive \u{2022} 99% Accuracy \u{2022} Next update: {footer_label}"
        ))
        .with_timestamp(Utc::now());

    AnnouncementPayload {
        content: format!(
            "@everyone {} **NEW PREDICTION AVAILABLE**",
            classification.icon
        ),
        embed,
    }
}

/// The notice sent when an armed prediction's cost is revised. Distinct from
/// the daily announcement: no broad ping, shows the revision against the
/// original cost.
pub fn compose_update_notice(
    record: &PredictionRecord,
    classification: &Classification,
) -> AnnouncementPayload {
    let embed = Embed::new("\u{25B8} Prediction Cost Updated", classification.color)
        .with_field(EmbedField::inline(
            "\u{25B8} Item Position",
            format!("**{}**", record.item_position),
        ))
        .with_field(EmbedField::inline(
            "\u{25B8} Revised Cost",
            format!(
                "**{} Robux** (was {})",
                group_thousands(record.cost),
                group_thousands(record.original_cost)
            ),
        ))
        .with_field(EmbedField::inline(
            "\u{25B8} Cost Status",
            format!("{} {}", classification.icon, classification.label),
        ))
        .with_timestamp(Utc::now());

    AnnouncementPayload {
        content: format!("{} **PREDICTION UPDATED**", classification.icon),
        embed,
    }
}

/// The one-line history entry mirrored per successful publish.
pub fn compose_history_entry(
    record: &PredictionRecord,
    classification: &Classification,
    published_at: DateTime<Utc>,
) -> HistoryPayload {
    let embed = Embed::new(
        format!("\u{25B8} {}", published_at.format("%B %-d, %Y")),
        classification.color,
    )
    .with_description(format!(
        "**Position {}** \u{2022} **{} Robux** {}",
        record.item_position,
        group_thousands(record.cost),
        classification.icon
    ))
    .with_timestamp(published_at);

    HistoryPayload { embed }
}

/// The ambient status-indicator label (a persistent channel name).
pub fn compose_status_label(classification: Option<&Classification>) -> String {
    match classification {
        Some(c) => format!("Today's Prediction: {} {}", c.icon, c.label),
        None => "Today's Prediction: \u{26AB} No prediction set".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::prediction::classify::classify;

    #[test]
    fn test_ordinal_suffix_grid() {
        let cases = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (101, "st"),
            (111, "th"),
        ];
        for (n, expected) in cases {
            assert_eq!(ordinal_suffix(n), expected, "n = {n}");
        }
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(1), "1");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(6_000), "6,000");
        assert_eq!(group_thousands(999_999), "999,999");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_announcement_contents() {
        let record = PredictionRecord::new(42, 750);
        let classification = classify(record.cost);
        let payload = compose_announcement(&record, &classification, "Tomorrow 12 PM CT");

        assert_eq!(
            payload.content,
            "@everyone 🟢 **NEW PREDICTION AVAILABLE**"
        );
        assert_eq!(payload.embed.color, 0x00FF44);
        assert_eq!(payload.embed.fields.len(), 5);

        let position = &payload.embed.fields[0];
        assert!(position.value.contains("**42nd**"));
        let cost = &payload.embed.fields[1];
        assert!(cost.value.contains("**750 Robux**"));
        let status = &payload.embed.fields[2];
        assert_eq!(status.value, "🟢 CLOSE - Low cost prediction");

        let footer = payload.embed.footer.as_ref().unwrap();
        assert!(footer.text.ends_with("Next update: Tomorrow 12 PM CT"));
    }

    #[test]
    fn test_update_notice_shows_revision() {
        let mut record = PredictionRecord::new(10, 6_000);
        record.revise_cost(4_500);
        let classification = classify(record.cost);
        let payload = compose_update_notice(&record, &classification);

        assert_eq!(payload.content, "🟡 **PREDICTION UPDATED**");
        let revised = &payload.embed.fields[1];
        assert_eq!(revised.value, "**4,500 Robux** (was 6,000)");
    }

    #[test]
    fn test_history_entry() {
        let record = PredictionRecord::new(7, 12_500);
        let classification = classify(record.cost);
        let published_at = "2026-08-27T18:00:00Z".parse().unwrap();
        let payload = compose_history_entry(&record, &classification, published_at);

        assert_eq!(payload.embed.title, "▸ August 27, 2026");
        assert_eq!(
            payload.embed.description.as_deref(),
            Some("**Position 7** • **12,500 Robux** 🔴")
        );
        assert_eq!(payload.embed.color, 0xFF4444);
    }

    #[test]
    fn test_status_label() {
        assert_eq!(
            compose_status_label(None),
            "Today's Prediction: ⚫ No prediction set"
        );
        let classification = classify(800);
        assert_eq!(
            compose_status_label(Some(&classification)),
            "Today's Prediction: 🟢 CLOSE - Low cost prediction"
        );
    }
}
