use crate::cashflow::project_cashflow;
use crate::error::ForecastError;
use crate::runway::{RunwayStatusReport, runway_status};
use analytics::metrics::runway_months;
use core_types::{MonthlyAmount, Runway};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A named revenue/expense plan to project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub revenue: MonthlyAmount,
    pub expenses: MonthlyAmount,
}

impl Scenario {
    pub fn new(name: impl Into<String>, revenue: impl Into<MonthlyAmount>, expenses: impl Into<MonthlyAmount>) -> Self {
        Self {
            name: name.into(),
            revenue: revenue.into(),
            expenses: expenses.into(),
        }
    }
}

/// The outcome of projecting one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub scenario: String,
    pub ending_cash: Decimal,
    /// Sum of monthly net flows; negative while burning.
    pub total_burn: Decimal,
    pub min_cumulative_cash: Decimal,
    /// Runway left after the horizon at the final month's burn.
    pub runway: Runway,
    pub status: RunwayStatusReport,
}

/// Projects every scenario from the same starting cash and horizon.
///
/// Summaries come back in input order, one per scenario. Scenario names must
/// be unique.
pub fn compare_scenarios(
    scenarios: &[Scenario],
    starting_cash: Decimal,
    months: usize,
) -> Result<Vec<ScenarioSummary>, ForecastError> {
    let mut seen = HashSet::new();
    if let Some(dup) = scenarios.iter().find(|s| !seen.insert(s.name.as_str())) {
        return Err(ForecastError::DuplicateScenario(dup.name.clone()));
    }

    scenarios
        .iter()
        .map(|scenario| summarize(scenario, starting_cash, months))
        .collect()
}

fn summarize(scenario: &Scenario, starting_cash: Decimal, months: usize) -> Result<ScenarioSummary, ForecastError> {
    let projection = project_cashflow(starting_cash, &scenario.revenue, &scenario.expenses, months)?;
    // project_cashflow rejects a zero-month horizon, so there is a last month.
    let last = projection
        .last()
        .ok_or_else(|| ForecastError::InvalidInput("empty projection".to_string()))?;

    let total_burn = projection
        .iter()
        .try_fold(Decimal::ZERO, |acc, m| acc.checked_add(m.net_cash_flow))
        .ok_or_else(|| ForecastError::InvalidInput(format!("total burn overflows for '{}'", scenario.name)))?;
    let min_cumulative_cash = projection
        .iter()
        .map(|m| m.cumulative_cash)
        .min()
        .unwrap_or(last.cumulative_cash);

    let runway = runway_months(last.cumulative_cash, -last.net_cash_flow)?;
    tracing::info!(scenario = %scenario.name, ending_cash = %last.cumulative_cash, %runway, "Scenario projected");

    Ok(ScenarioSummary {
        scenario: scenario.name.clone(),
        ending_cash: last.cumulative_cash,
        total_burn,
        min_cumulative_cash,
        status: runway_status(&runway),
        runway,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::RunwayStatus;
    use rust_decimal_macros::dec;

    fn scenarios() -> Vec<Scenario> {
        vec![
            Scenario::new("Conservative", dec!(30000), dec!(50000)),
            Scenario::new("Base", dec!(40000), dec!(55000)),
            Scenario::new("Aggressive", dec!(60000), dec!(80000)),
        ]
    }

    #[test]
    fn one_summary_per_scenario_in_order() {
        let input = scenarios();
        let summaries = compare_scenarios(&input, dec!(500000), 12).unwrap();

        assert_eq!(summaries.len(), input.len());
        let names: Vec<&str> = summaries.iter().map(|s| s.scenario.as_str()).collect();
        assert_eq!(names, ["Conservative", "Base", "Aggressive"]);
        for scenario in &input {
            assert_eq!(summaries.iter().filter(|s| s.scenario == scenario.name).count(), 1);
        }
    }

    #[test]
    fn summaries_carry_ending_cash_burn_and_runway() {
        let summaries = compare_scenarios(&scenarios(), dec!(500000), 12).unwrap();

        let conservative = &summaries[0];
        assert_eq!(conservative.ending_cash, dec!(260000));
        assert_eq!(conservative.total_burn, dec!(-240000));
        assert_eq!(conservative.min_cumulative_cash, dec!(260000));
        assert_eq!(conservative.runway, Runway::Months(dec!(13)));
        assert_eq!(conservative.status.status, RunwayStatus::Healthy);

        let base = &summaries[1];
        assert_eq!(base.ending_cash, dec!(320000));
        assert_eq!(base.total_burn, dec!(-180000));
        assert_eq!(base.runway.months().unwrap().round_dp(1), dec!(21.3));
    }

    #[test]
    fn profitable_scenario_has_unbounded_runway() {
        let input = [Scenario::new("Profitable", dec!(60000), dec!(50000))];
        let summary = &compare_scenarios(&input, dec!(100000), 6).unwrap()[0];
        assert_eq!(summary.ending_cash, dec!(160000));
        assert_eq!(summary.min_cumulative_cash, dec!(110000));
        assert_eq!(summary.runway, Runway::Profitable);
        assert_eq!(summary.status.status, RunwayStatus::Profitable);
    }

    #[test]
    fn runway_uses_final_month_of_a_series() {
        let input = [Scenario::new(
            "Ramp",
            vec![dec!(10000), dec!(20000), dec!(40000)],
            dec!(30000),
        )];
        let summary = &compare_scenarios(&input, dec!(50000), 3).unwrap()[0];
        assert_eq!(summary.ending_cash, dec!(30000));
        assert_eq!(summary.min_cumulative_cash, dec!(20000));
        assert_eq!(summary.runway, Runway::Profitable);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let input = [
            Scenario::new("Base", dec!(1), dec!(2)),
            Scenario::new("Base", dec!(3), dec!(4)),
        ];
        assert!(matches!(
            compare_scenarios(&input, dec!(100), 3),
            Err(ForecastError::DuplicateScenario(name)) if name == "Base"
        ));
    }

    #[test]
    fn overflowing_total_burn_is_an_error() {
        // Cumulative cash climbs from MIN to MAX, but the flows sum to 2 * MAX.
        let input = [Scenario::new("Windfall", vec![Decimal::MAX, Decimal::MAX], Decimal::ZERO)];
        let err = compare_scenarios(&input, Decimal::MIN, 2).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidInput(ref msg) if msg.contains("Windfall")));
    }

    #[test]
    fn empty_scenario_list_gives_empty_summary() {
        assert!(compare_scenarios(&[], dec!(100), 3).unwrap().is_empty());
    }
}
