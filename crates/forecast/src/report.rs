use crate::error::ForecastError;
use crate::scenario::ScenarioSummary;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The scenario comparison as written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub generated_at: DateTime<Utc>,
    pub starting_cash: Decimal,
    pub months: usize,
    pub scenarios: Vec<ScenarioSummary>,
}

impl ScenarioReport {
    pub fn new(starting_cash: Decimal, months: usize, scenarios: Vec<ScenarioSummary>) -> Self {
        Self {
            generated_at: Utc::now(),
            starting_cash,
            months,
            scenarios,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, ForecastError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{Scenario, compare_scenarios};
    use rust_decimal_macros::dec;

    #[test]
    fn report_json_lists_every_scenario() {
        let scenarios = [
            Scenario::new("Status Quo", dec!(40000), dec!(70000)),
            Scenario::new("Growth", dec!(60000), dec!(100000)),
        ];
        let summaries = compare_scenarios(&scenarios, dec!(800000), 12).unwrap();
        let report = ScenarioReport::new(dec!(800000), 12, summaries);

        let json: serde_json::Value = serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();
        assert_eq!(json["months"], 12);
        assert_eq!(json["scenarios"].as_array().unwrap().len(), 2);
        assert_eq!(json["scenarios"][1]["scenario"], "Growth");
        assert_eq!(json["scenarios"][1]["ending_cash"], "320000");

        let back: ScenarioReport = serde_json::from_value(json).unwrap();
        assert_eq!(back, report);
    }
}
