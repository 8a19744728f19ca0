use crate::error::ConfigError;
use core_types::MonthlyAmount;
use rust_decimal::Decimal;
use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub forecast: ForecastSettings,
    /// Optional; only the `retail` command needs it.
    #[serde(default)]
    pub retail: Option<RetailSettings>,
}

/// Contains parameters for the cash-flow scenario comparison.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastSettings {
    /// Cash in the bank at the start of month 1.
    pub starting_cash: Decimal,
    /// The projection horizon in months.
    pub months: usize,
    pub scenarios: Vec<ScenarioParams>,
}

/// One named scenario. `revenue` and `expenses` are either a single monthly
/// figure or one figure per month of the horizon.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioParams {
    pub name: String,
    pub revenue: MonthlyAmount,
    pub expenses: MonthlyAmount,
}

/// Cost structure of a single retail product.
#[derive(Debug, Clone, Deserialize)]
pub struct RetailSettings {
    pub price: Decimal,
    pub unit_cost: Decimal,
    /// Shipping plus packaging per order.
    #[serde(default)]
    pub fulfilment_cost: Decimal,
    /// 0.029 corresponds to a 2.9% acquiring fee.
    #[serde(default)]
    pub payment_fee_rate: Decimal,
    #[serde(default)]
    pub tax_rate: Decimal,
    pub cac: Decimal,
    #[serde(default = "one")]
    pub purchases_per_customer: Decimal,
    #[serde(default)]
    pub fixed_costs_monthly: Decimal,
    /// Extra prices to evaluate the same cost structure at.
    #[serde(default)]
    pub price_points: Vec<Decimal>,
}

fn one() -> Decimal {
    Decimal::ONE
}

impl Config {
    /// Checks the invariants that deserialization alone cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let forecast = &self.forecast;
        if forecast.months == 0 {
            return Err(ConfigError::ValidationError(
                "forecast.months must be at least 1".to_string(),
            ));
        }
        if forecast.scenarios.is_empty() {
            return Err(ConfigError::ValidationError(
                "at least one [[forecast.scenarios]] entry is required".to_string(),
            ));
        }
        if let Some(position) = forecast.scenarios.iter().position(|s| s.name.trim().is_empty()) {
            return Err(ConfigError::ValidationError(format!(
                "forecast.scenarios[{}] has an empty name",
                position
            )));
        }
        Ok(())
    }
}
