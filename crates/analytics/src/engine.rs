use crate::classify::{classify_ltv_cac, classify_payback};
use crate::error::AnalyticsError;
use crate::metrics::{acquisition_cost, lifetime_value, ltv_cac_ratio, payback_period, product};
use crate::report::{HealthInputs, HealthMetrics, HealthReport, HealthStatus};
use core_types::Band;
use rust_decimal_macros::dec;

/// A stateless calculator that runs the full unit-economics health check.
#[derive(Debug, Default)]
pub struct HealthEngine {}

impl HealthEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes LTV, CAC, LTV/CAC and payback, then grades them.
    ///
    /// # Arguments
    ///
    /// * `inputs` - ARPU, margin, churn and the acquisition spend/customer counts.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `HealthReport`, or the first validation
    /// error raised by any metric.
    pub fn check(&self, inputs: &HealthInputs) -> Result<HealthReport, AnalyticsError> {
        let ltv = lifetime_value(inputs.arpu, inputs.gross_margin, inputs.monthly_churn)?;
        let cac = acquisition_cost(inputs.sales_marketing_spend, inputs.new_customers)?;
        let ratio = ltv_cac_ratio(ltv, cac)?;
        let payback = payback_period(cac, inputs.arpu, inputs.gross_margin)?;
        let monthly_churn_pct = product("monthly_churn_pct", inputs.monthly_churn, dec!(100))?;

        let ltv_cac = classify_ltv_cac(ratio);
        let payback_status = classify_payback(payback);
        let overall = overall_band(ltv_cac.band, payback_status.band);

        tracing::debug!(%ltv, %cac, %ratio, %payback, %overall, "Health check complete");

        Ok(HealthReport {
            metrics: HealthMetrics {
                ltv,
                cac,
                ltv_cac_ratio: ratio,
                payback_months: payback,
                arpu: inputs.arpu,
                gross_margin: inputs.gross_margin,
                monthly_churn_pct,
            },
            status: HealthStatus {
                ltv_cac,
                payback: payback_status,
                overall,
            },
        })
    }
}

/// Excellent needs an excellent LTV/CAC and a payback that is not poor; any
/// poor grade makes the whole check poor.
fn overall_band(ltv_cac: Band, payback: Band) -> Band {
    if ltv_cac == Band::Excellent && payback >= Band::Acceptable {
        Band::Excellent
    } else if ltv_cac == Band::Poor || payback == Band::Poor {
        Band::Poor
    } else {
        Band::Acceptable
    }
}
