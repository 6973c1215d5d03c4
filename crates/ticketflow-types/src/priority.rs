use serde::{Deserialize, Serialize};
use std::fmt;

/// Score below which a ticket is treated as urgent
pub const HIGH_PRIORITY_THRESHOLD: f64 = -0.3;

/// Score at or above which a ticket is treated as low urgency
pub const LOW_PRIORITY_THRESHOLD: f64 = 0.3;

/// Ticket priority, derived once from the description's sentiment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Map a sentiment score in [-1, 1] to a priority.
    ///
    /// Negative text means an unhappy customer, so it gets looked at first.
    pub fn from_sentiment_score(score: f64) -> Self {
        if score < HIGH_PRIORITY_THRESHOLD {
            Priority::High
        } else if score < LOW_PRIORITY_THRESHOLD {
            Priority::Medium
        } else {
            Priority::Low
        }
    }

    /// Queue position: high tickets sort first
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_score_is_high() {
        assert_eq!(Priority::from_sentiment_score(-0.9), Priority::High);
        assert_eq!(Priority::from_sentiment_score(-0.31), Priority::High);
    }

    #[test]
    fn test_neutral_band_is_medium() {
        assert_eq!(Priority::from_sentiment_score(0.0), Priority::Medium);
        assert_eq!(Priority::from_sentiment_score(0.29), Priority::Medium);
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(Priority::from_sentiment_score(-0.3), Priority::Medium);
        assert_eq!(Priority::from_sentiment_score(0.3), Priority::Low);
    }

    #[test]
    fn test_positive_score_is_low() {
        assert_eq!(Priority::from_sentiment_score(0.8), Priority::Low);
        assert_eq!(Priority::from_sentiment_score(1.0), Priority::Low);
    }

    #[test]
    fn test_rank_order() {
        assert!(Priority::High.rank() < Priority::Medium.rank());
        assert!(Priority::Medium.rank() < Priority::Low.rank());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Priority::High).unwrap();
        assert_eq!(json, "\"high\"");

        let parsed: Priority = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, Priority::Medium);
    }
}
