use crate::classify::Classification;
use core_types::Band;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The inputs to a unit-economics health check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthInputs {
    /// Average revenue per user per month.
    pub arpu: Decimal,
    /// Gross margin as a fraction in (0, 1].
    pub gross_margin: Decimal,
    /// Monthly churn as a fraction, e.g. 0.04 for 4%.
    pub monthly_churn: Decimal,
    /// Sales & marketing spend over the acquisition period.
    pub sales_marketing_spend: Decimal,
    pub new_customers: u64,
}

/// The raw numbers behind a health check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetrics {
    pub ltv: Decimal,
    pub cac: Decimal,
    pub ltv_cac_ratio: Decimal,
    pub payback_months: Decimal,
    pub arpu: Decimal,
    pub gross_margin: Decimal,
    pub monthly_churn_pct: Decimal,
}

/// Verdicts on the metrics in a [`HealthReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub ltv_cac: Classification,
    pub payback: Classification,
    pub overall: Band,
}

/// The output of [`crate::HealthEngine::check`]: every metric plus the bands
/// they were graded into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub metrics: HealthMetrics,
    pub status: HealthStatus,
}
