//! Urgency levels

use serde::{Deserialize, Serialize};

/// Ordinal urgency level produced by the triage model
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TriageLevel {
    /// Routine care
    Low,
    /// Should be seen promptly
    Moderate,
    /// Immediate attention required
    Critical,
}

impl TriageLevel {
    /// Map a model class index to a level.
    pub fn from_class(class: usize) -> Option<TriageLevel> {
        match class {
            0 => Some(TriageLevel::Low),
            1 => Some(TriageLevel::Moderate),
            2 => Some(TriageLevel::Critical),
            _ => None,
        }
    }

    /// Wire code for the level (0/1/2).
    pub fn code(&self) -> i64 {
        match self {
            TriageLevel::Low => 0,
            TriageLevel::Moderate => 1,
            TriageLevel::Critical => 2,
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TriageLevel::Low => "low",
            TriageLevel::Moderate => "moderate",
            TriageLevel::Critical => "critical",
        }
    }

    /// Get recommended action
    pub fn recommended_action(&self) -> &'static str {
        match self {
            TriageLevel::Low => "Routine consultation, no immediate intervention required",
            TriageLevel::Moderate => "Medical review within the hour, monitor vitals",
            TriageLevel::Critical => "Immediate emergency care",
        }
    }
}
