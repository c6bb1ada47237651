use serde::{Deserialize, Serialize};

/// The qualitative direction of a series, judged from its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Increasing,
    Decreasing,
    Flat,
}

impl Direction {
    /// Returns a lowercase label suitable for report text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Increasing => "increasing",
            Direction::Decreasing => "decreasing",
            Direction::Flat => "flat",
        }
    }
}

/// How the period-over-period growth rate itself is changing between two
/// adjacent growth measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthShift {
    Accelerating,
    Decelerating,
    Steady,
}

impl GrowthShift {
    /// Returns a lowercase label suitable for report text.
    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthShift::Accelerating => "accelerating",
            GrowthShift::Decelerating => "decelerating",
            GrowthShift::Steady => "steady",
        }
    }
}
