//! Cost classification for predictions.
//!
//! Single source of truth for the three cost tiers. Every surface that shows
//! a cost status (command replies, the daily announcement, the history
//! channel, the status indicator) goes through [`classify`] rather than
//! re-deriving thresholds.

use serde::Serialize;

/// How far from the player's budget today's prediction sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CostTier {
    /// Cost up to 1,000 Robux.
    Near,
    /// Cost above 1,000 up to 5,000 Robux.
    Moderate,
    /// Cost above 5,000 Robux.
    Far,
}

/// Display classification derived from a prediction's cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub tier: CostTier,
    /// Embed color used across announcement, history, and update notices.
    pub color: u32,
    /// Colored-circle icon shown next to the status label.
    pub icon: &'static str,
    /// Human status label.
    pub label: &'static str,
}

const NEAR: Classification = Classification {
    tier: CostTier::Near,
    color: 0x00FF44,
    icon: "\u{1F7E2}",
    label: "CLOSE - Low cost prediction",
};

const MODERATE: Classification = Classification {
    tier: CostTier::Moderate,
    color: 0xFFED00,
    icon: "\u{1F7E1}",
    label: "MODERATE - Medium cost prediction",
};

const FAR: Classification = Classification {
    tier: CostTier::Far,
    color: 0xFF4444,
    icon: "\u{1F534}",
    label: "FAR - High cost prediction",
};

/// Classify a Robux cost into its display tier.
///
/// Pure and total for any cost the command boundary lets through
/// (`cost >= 1`). Boundaries: 1,000 is still Near, 5,000 is still Moderate.
pub fn classify(cost: u64) -> Classification {
    if cost <= 1_000 {
        NEAR
    } else if cost <= 5_000 {
        MODERATE
    } else {
        FAR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_near_tier() {
        assert_eq!(classify(1).tier, CostTier::Near);
        assert_eq!(classify(750).tier, CostTier::Near);
        assert_eq!(classify(1_000).tier, CostTier::Near);
    }

    #[test]
    fn test_moderate_tier() {
        assert_eq!(classify(1_001).tier, CostTier::Moderate);
        assert_eq!(classify(3_000).tier, CostTier::Moderate);
        assert_eq!(classify(5_000).tier, CostTier::Moderate);
    }

    #[test]
    fn test_far_tier() {
        assert_eq!(classify(5_001).tier, CostTier::Far);
        assert_eq!(classify(999_999).tier, CostTier::Far);
    }

    #[test]
    fn test_display_constants() {
        let near = classify(500);
        assert_eq!(near.color, 0x00FF44);
        assert_eq!(near.icon, "🟢");

        let moderate = classify(2_500);
        assert_eq!(moderate.color, 0xFFED00);
        assert_eq!(moderate.icon, "🟡");

        let far = classify(10_000);
        assert_eq!(far.color, 0xFF4444);
        assert_eq!(far.icon, "🔴");
        assert_eq!(far.label, "FAR - High cost prediction");
    }
}
