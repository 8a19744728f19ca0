//! # Cash-Flow Forecasting
//!
//! Month-by-month cash projections and side-by-side scenario comparison.
//!
//! This is a Layer 2 logic crate: it builds on the runway metric from
//! `analytics` and the shared value types in `core-types`, and performs no I/O.
//! Serializing a [`ScenarioReport`] is left to the caller.

pub mod cashflow;
pub mod error;
pub mod report;
pub mod runway;
pub mod scenario;

pub use cashflow::{CashFlowMonth, project_cashflow};
pub use error::ForecastError;
pub use report::ScenarioReport;
pub use runway::{RunwayStatusReport, runway_status};
pub use scenario::{Scenario, ScenarioSummary, compare_scenarios};
