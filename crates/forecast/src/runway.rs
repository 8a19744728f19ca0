use core_types::{Runway, RunwayStatus};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Runway below this many months is critical.
pub const CRITICAL_RUNWAY_MONTHS: Decimal = dec!(3);
/// Runway below this many months is a warning.
pub const WARNING_RUNWAY_MONTHS: Decimal = dec!(6);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunwayStatusReport {
    pub status: RunwayStatus,
    pub message: String,
}

/// Grades a runway and attaches the fundraising advice that goes with it.
pub fn runway_status(runway: &Runway) -> RunwayStatusReport {
    let (status, message) = match runway.months() {
        None => (RunwayStatus::Profitable, "Profitable - no fundraising needed"),
        Some(m) if m < CRITICAL_RUNWAY_MONTHS => (RunwayStatus::Critical, "CRITICAL: Start fundraising IMMEDIATELY"),
        Some(m) if m < WARNING_RUNWAY_MONTHS => (RunwayStatus::Warning, "WARNING: Start fundraising NOW"),
        Some(_) => (RunwayStatus::Healthy, "Healthy runway"),
    };
    RunwayStatusReport { status, message: message.to_string() }
}
