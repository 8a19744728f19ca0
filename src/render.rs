//! Terminal and JSON presentation of computed results.

use analytics::{HealthReport, PriceFloors, RetailEconomics};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use forecast::{CashFlowMonth, ScenarioSummary};
use rust_decimal::Decimal;
use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Currency with two decimals.
pub fn money(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

/// A ratio such as LTV/CAC, with an `x` suffix.
pub fn times(value: Decimal) -> String {
    format!("{:.2}x", value.round_dp(2))
}

pub fn pct(value: Decimal) -> String {
    format!("{:.1}%", value.round_dp(1))
}

fn or_dash(value: Option<Decimal>, fmt: fn(Decimal) -> String) -> String {
    value.map(fmt).unwrap_or_else(|| "-".to_string())
}

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.to_vec());
    table
}

fn right(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

pub fn health_table(report: &HealthReport) -> Table {
    let m = &report.metrics;
    let s = &report.status;
    let mut table = new_table(&["Metric", "Value", "Status"]);
    table.add_row(vec![Cell::new("LTV"), right(money(m.ltv)), Cell::new("")]);
    table.add_row(vec![Cell::new("CAC"), right(money(m.cac)), Cell::new("")]);
    table.add_row(vec![
        Cell::new("LTV/CAC"),
        right(times(m.ltv_cac_ratio)),
        Cell::new(&s.ltv_cac.message),
    ]);
    table.add_row(vec![
        Cell::new("Payback (months)"),
        right(format!("{:.1}", m.payback_months.round_dp(1))),
        Cell::new(&s.payback.message),
    ]);
    table.add_row(vec![Cell::new("Monthly churn"), right(pct(m.monthly_churn_pct)), Cell::new("")]);
    table.add_row(vec![
        Cell::new("Overall"),
        Cell::new(""),
        Cell::new(s.overall.as_str().to_uppercase()),
    ]);
    table
}

pub fn cashflow_table(projection: &[CashFlowMonth]) -> Table {
    let mut table = new_table(&["Month", "Revenue", "Expenses", "Net Cash Flow", "Cumulative Cash"]);
    for row in projection {
        table.add_row(vec![
            right(row.month.to_string()),
            right(money(row.revenue)),
            right(money(row.expenses)),
            right(money(row.net_cash_flow)),
            right(money(row.cumulative_cash)),
        ]);
    }
    table
}

pub fn scenario_table(summaries: &[ScenarioSummary]) -> Table {
    let mut table = new_table(&["Scenario", "Ending Cash", "Total Burn", "Lowest Cash", "Runway", "Status"]);
    for summary in summaries {
        table.add_row(vec![
            Cell::new(&summary.scenario),
            right(money(summary.ending_cash)),
            right(money(summary.total_burn)),
            right(money(summary.min_cumulative_cash)),
            right(summary.runway.to_string()),
            Cell::new(&summary.status.message),
        ]);
    }
    table
}

pub fn retail_table(econ: &RetailEconomics, floors: &PriceFloors) -> Table {
    let mut table = new_table(&["Per order", "Value"]);
    let rows = [
        ("Price", money(econ.price)),
        ("Gross profit", money(econ.gross_profit)),
        ("Gross margin", pct(econ.gross_margin_pct)),
        ("Variable costs", money(econ.variable_costs)),
        ("Contribution (before CAC)", money(econ.contribution)),
        ("Contribution margin", pct(econ.contribution_margin_pct)),
        ("Contribution (after CAC)", money(econ.contribution_after_cac)),
        ("LTV", money(econ.ltv)),
        ("LTV/CAC", format!("{} {}", times(econ.ltv_cac.value), econ.ltv_cac.band)),
        ("Payback (orders)", or_dash(econ.payback_orders, |d| format!("{:.1}", d.round_dp(1)))),
        ("Break-even units / month", or_dash(econ.breakeven_units, |d| format!("{:.1}", d.round_dp(1)))),
        ("Price floor (no CAC)", money(floors.without_cac)),
        ("Price floor (with CAC)", money(floors.with_cac)),
        ("Price for LTV/CAC = 3", money(floors.healthy_ltv_cac)),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), right(value)]);
    }
    table
}

pub fn sweep_table(sweep: &[RetailEconomics]) -> Table {
    let mut table = new_table(&["Price", "GM %", "Contribution", "After CAC", "LTV", "LTV/CAC"]);
    for econ in sweep {
        table.add_row(vec![
            right(money(econ.price)),
            right(pct(econ.gross_margin_pct)),
            right(money(econ.contribution)),
            right(money(econ.contribution_after_cac)),
            right(money(econ.ltv)),
            right(times(econ.ltv_cac.value)),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use forecast::{Scenario, compare_scenarios};
    use rust_decimal_macros::dec;

    #[test]
    fn number_formats() {
        assert_eq!(money(dec!(260000)), "260000.00");
        assert_eq!(money(dec!(6.666666)), "6.67");
        assert_eq!(times(dec!(3.75)), "3.75x");
        assert_eq!(pct(dec!(4)), "4.0%");
        assert_eq!(or_dash(None, money), "-");
    }

    #[test]
    fn scenario_table_lists_each_scenario() {
        let scenarios = [
            Scenario::new("Conservative", dec!(30000), dec!(50000)),
            Scenario::new("Profitable", dec!(60000), dec!(50000)),
        ];
        let summaries = compare_scenarios(&scenarios, dec!(500000), 12).unwrap();
        let rendered = scenario_table(&summaries).to_string();
        assert!(rendered.contains("Conservative"));
        assert!(rendered.contains("13.0 months"));
        assert!(rendered.contains("profitable"));
    }
}
