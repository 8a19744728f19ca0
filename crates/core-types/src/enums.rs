use serde::{Deserialize, Serialize};
use std::fmt;

/// A quality band a computed ratio falls into.
///
/// Variants are declared worst-first so that the derived `Ord` ranks
/// `Excellent` highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Poor,
    Acceptable,
    Good,
    Excellent,
}

impl Band {
    pub fn as_str(&self) -> &'static str {
        match self {
            Band::Poor => "poor",
            Band::Acceptable => "acceptable",
            Band::Good => "good",
            Band::Excellent => "excellent",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How urgently the company needs to raise, judged from its runway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunwayStatus {
    Profitable,
    Healthy,
    Warning,
    Critical,
}

impl RunwayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunwayStatus::Profitable => "profitable",
            RunwayStatus::Healthy => "healthy",
            RunwayStatus::Warning => "warning",
            RunwayStatus::Critical => "critical",
        }
    }
}

impl fmt::Display for RunwayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
