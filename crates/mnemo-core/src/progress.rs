//! Per-item accuracy tallies and weak-spot ranking.
//!
//! A tally per stat key (`digit:<d>` for stage 1, `number:<nn>` for
//! stage 2). The weak-spots view is a plain threshold-and-sort over
//! recorded accuracy, not a spaced-repetition scheduler.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Attempt/correct counters for one practiced item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Tally {
    /// Total graded answers.
    pub attempts: u32,
    /// Answers graded correct.
    pub correct: u32,
}

impl Tally {
    /// Record one graded answer.
    pub fn record(&mut self, correct: bool) {
        self.attempts += 1;
        if correct {
            self.correct += 1;
        }
    }

    /// Fraction of attempts graded correct; 0.0 when nothing was attempted.
    pub fn accuracy(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            f64::from(self.correct) / f64::from(self.attempts)
        }
    }
}

/// All recorded tallies, keyed by stat key.
///
/// `BTreeMap` keeps serialization and tie-breaking deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Progress {
    tallies: BTreeMap<String, Tally>,
}

impl Progress {
    /// Record one graded answer under a stat key.
    pub fn record(&mut self, key: &str, correct: bool) {
        self.tallies.entry(key.to_string()).or_default().record(correct);
    }

    /// The tally for a key, if anything was recorded.
    pub fn get(&self, key: &str) -> Option<&Tally> {
        self.tallies.get(key)
    }

    /// All tallies in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Tally)> {
        self.tallies.iter().map(|(k, t)| (k.as_str(), t))
    }

    /// Whether anything has been recorded.
    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }

    /// Practiced items with accuracy strictly below `threshold`, sorted
    /// ascending by accuracy (ties stay in key order).
    pub fn weak_spots(&self, threshold: f64) -> Vec<(&str, &Tally)> {
        let mut spots: Vec<(&str, &Tally)> = self
            .iter()
            .filter(|(_, t)| t.attempts > 0 && t.accuracy() < threshold)
            .collect();
        spots.sort_by(|a, b| {
            a.1.accuracy()
                .partial_cmp(&b.1.accuracy())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        spots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_records_and_scores() {
        let mut tally = Tally::default();
        assert_eq!(tally.accuracy(), 0.0);
        tally.record(true);
        tally.record(false);
        tally.record(true);
        assert_eq!(tally.attempts, 3);
        assert_eq!(tally.correct, 2);
        assert!((tally.accuracy() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn weak_spots_sorted_ascending() {
        let mut progress = Progress::default();
        for _ in 0..4 {
            progress.record("digit:1", true);
        }
        progress.record("digit:2", false);
        progress.record("digit:3", true);
        progress.record("digit:3", false);

        let spots = progress.weak_spots(0.75);
        let keys: Vec<&str> = spots.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["digit:2", "digit:3"]);
    }

    #[test]
    fn threshold_is_strict() {
        let mut progress = Progress::default();
        progress.record("digit:5", true);
        progress.record("digit:5", false);
        // accuracy exactly 0.5 is not below 0.5
        assert!(progress.weak_spots(0.5).is_empty());
        assert_eq!(progress.weak_spots(0.51).len(), 1);
    }

    #[test]
    fn ties_stay_in_key_order() {
        let mut progress = Progress::default();
        progress.record("number:30", false);
        progress.record("number:07", false);
        let keys: Vec<&str> = progress.weak_spots(1.0).iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["number:07", "number:30"]);
    }

    #[test]
    fn round_trips_through_json() {
        let mut progress = Progress::default();
        progress.record("digit:9", true);
        let json = serde_json::to_string(&progress).unwrap();
        let back: Progress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, progress);
        // Transparent serialization: a plain key-to-tally object.
        assert!(json.starts_with("{\"digit:9\""));
    }
}
