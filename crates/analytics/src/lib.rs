//! # Unit Economics Analytics
//!
//! Closed-form unit-economics metrics and the health check built on them.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of files,
//!   configuration or the terminal. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** Every metric is a pure function of its inputs, and
//!   the `HealthEngine` is a stateless calculator that composes them into a
//!   `HealthReport`.
//!
//! ## Public API
//!
//! - `metrics`: LTV, CAC, payback, magic number, churn, runway, LTV/CAC.
//! - `classify`: grading of ratios into `Band`s; boundaries live in `thresholds`.
//! - `HealthEngine` / `HealthReport`: the aggregated health check.
//! - `retail`: per-order economics, price floors and price sweeps.
//! - `AnalyticsError`: the specific error types that can be returned from this crate.

pub mod classify;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod report;
pub mod retail;
pub mod thresholds;

pub use classify::Classification;
pub use engine::HealthEngine;
pub use error::AnalyticsError;
pub use report::{HealthInputs, HealthMetrics, HealthReport, HealthStatus};
pub use retail::{PriceFloors, RetailEconomics, RetailInputs};
