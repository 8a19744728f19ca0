use crate::error::CoreError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Months of operation left at the current burn.
///
/// A company that is not burning cash has no finite runway; that case is a
/// variant of its own instead of an infinite float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Runway {
    Months(Decimal),
    Profitable,
}

impl Runway {
    /// The finite number of months, or `None` when profitable.
    pub fn months(&self) -> Option<Decimal> {
        match self {
            Runway::Months(m) => Some(*m),
            Runway::Profitable => None,
        }
    }
}

impl fmt::Display for Runway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Runway::Months(m) => write!(f, "{:.1} months", m.round_dp(1)),
            Runway::Profitable => f.write_str("profitable"),
        }
    }
}

/// A per-month money amount: either the same every month or an explicit
/// month-by-month sequence.
///
/// Deserializes untagged, so a config value may be written as `30000` or as
/// `[30000, 32000, 35000]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MonthlyAmount {
    Constant(Decimal),
    Series(Vec<Decimal>),
}

impl MonthlyAmount {
    /// Expands the amount into exactly `months` values.
    ///
    /// `field` names the amount in the error when a series has the wrong length.
    pub fn expand(&self, field: &str, months: usize) -> Result<Vec<Decimal>, CoreError> {
        match self {
            MonthlyAmount::Constant(value) => Ok(vec![*value; months]),
            MonthlyAmount::Series(values) if values.len() == months => Ok(values.clone()),
            MonthlyAmount::Series(values) => Err(CoreError::InvalidInput(
                field.to_string(),
                format!("expected {} monthly values, got {}", months, values.len()),
            )),
        }
    }
}

impl From<Decimal> for MonthlyAmount {
    fn from(value: Decimal) -> Self {
        MonthlyAmount::Constant(value)
    }
}

impl From<Vec<Decimal>> for MonthlyAmount {
    fn from(values: Vec<Decimal>) -> Self {
        MonthlyAmount::Series(values)
    }
}
