//! Running counters for issued and resolved predictions.

use serde::Serialize;

/// Process-wide prediction counters.
///
/// `total_predictions` counts set operations, not updates. The success and
/// savings accumulators only move through [`PredictionStats::record_outcome`],
/// which is driven by an external (currently manual) resolution process; no
/// lifecycle transition guesses at outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PredictionStats {
    pub total_predictions: u64,
    pub successful_predictions: u64,
    pub total_robux_saved: u64,
}

impl PredictionStats {
    /// Count a newly set prediction.
    pub fn record_set(&mut self) {
        self.total_predictions += 1;
    }

    /// Record the resolved outcome of a past prediction.
    pub fn record_outcome(&mut self, success: bool, saved: u64) {
        if success {
            self.successful_predictions += 1;
            self.total_robux_saved += saved;
        }
    }

    /// Rounded success percentage, 0 when nothing has been issued yet.
    pub fn accuracy_rate(&self) -> u64 {
        if self.total_predictions == 0 {
            return 0;
        }
        (self.successful_predictions * 100 + self.total_predictions / 2) / self.total_predictions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_zero_when_empty() {
        assert_eq!(PredictionStats::default().accuracy_rate(), 0);
    }

    #[test]
    fn test_record_set_counts_once_per_set() {
        let mut stats = PredictionStats::default();
        stats.record_set();
        stats.record_set();
        assert_eq!(stats.total_predictions, 2);
    }

    #[test]
    fn test_record_outcome_accumulates_savings() {
        let mut stats = PredictionStats::default();
        stats.record_set();
        stats.record_set();
        stats.record_set();
        stats.record_outcome(true, 1_200);
        stats.record_outcome(false, 0);
        stats.record_outcome(true, 300);

        assert_eq!(stats.successful_predictions, 2);
        assert_eq!(stats.total_robux_saved, 1_500);
        // 2 of 3, rounded
        assert_eq!(stats.accuracy_rate(), 67);
    }

    #[test]
    fn test_failure_does_not_move_savings() {
        let mut stats = PredictionStats::default();
        stats.record_set();
        stats.record_outcome(false, 9_999);
        assert_eq!(stats.successful_predictions, 0);
        assert_eq!(stats.total_robux_saved, 0);
    }
}
