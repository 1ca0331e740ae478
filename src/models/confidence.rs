//! Confidence in a scanned card.

use serde::{Deserialize, Serialize};

/// How much of a card the scanner managed to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Attributes, name and positions all present
    High,
    /// Attributes present, identity incomplete
    #[default]
    Medium,
    /// No usable attributes
    Low,
}

impl Confidence {
    /// Grade a scan from what it extracted.
    pub fn from_scan(attribute_count: usize, has_name: bool, has_positions: bool) -> Self {
        if attribute_count == 0 {
            Confidence::Low
        } else if has_name && has_positions {
            Confidence::High
        } else {
            Confidence::Medium
        }
    }

    /// Returns true if the scan should be checked by hand before use.
    pub fn needs_review(&self) -> bool {
        matches!(self, Confidence::Low)
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::High => write!(f, "high"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::Low => write!(f, "low"),
        }
    }
}
