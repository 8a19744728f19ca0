//! Closed-form SaaS unit-economics formulas.
//!
//! Every function validates its preconditions and returns the result at full
//! `Decimal` precision. Rounding is left to the presentation layer.

use crate::error::AnalyticsError;
use core_types::Runway;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Divides, mapping a zero denominator (or overflow) to an error named after the metric.
pub(crate) fn ratio(metric: &str, numerator: Decimal, denominator: Decimal) -> Result<Decimal, AnalyticsError> {
    numerator
        .checked_div(denominator)
        .ok_or_else(|| AnalyticsError::DivisionByZero(metric.to_string()))
}

fn overflow(metric: &str) -> AnalyticsError {
    AnalyticsError::Calculation(format!("overflow while computing {}", metric))
}

pub(crate) fn product(metric: &str, a: Decimal, b: Decimal) -> Result<Decimal, AnalyticsError> {
    a.checked_mul(b).ok_or_else(|| overflow(metric))
}

pub(crate) fn sum(metric: &str, a: Decimal, b: Decimal) -> Result<Decimal, AnalyticsError> {
    a.checked_add(b).ok_or_else(|| overflow(metric))
}

pub(crate) fn difference(metric: &str, a: Decimal, b: Decimal) -> Result<Decimal, AnalyticsError> {
    a.checked_sub(b).ok_or_else(|| overflow(metric))
}

/// Lifetime value: `arpu * gross_margin / monthly_churn`.
///
/// # Errors
///
/// `InvalidInput` if `monthly_churn <= 0` (the customer never leaves, so the
/// value is unbounded) or if `gross_margin` lies outside `(0, 1]`.
pub fn lifetime_value(
    arpu: Decimal,
    gross_margin: Decimal,
    monthly_churn: Decimal,
) -> Result<Decimal, AnalyticsError> {
    if monthly_churn <= Decimal::ZERO {
        return Err(AnalyticsError::invalid(
            "monthly_churn",
            "must be > 0; use the minimum observed churn (e.g. 0.01 for 1%)",
        ));
    }
    if gross_margin <= Decimal::ZERO || gross_margin > Decimal::ONE {
        return Err(AnalyticsError::invalid("gross_margin", "must be between 0 and 1"));
    }

    let ltv = ratio("lifetime_value", product("lifetime_value", arpu, gross_margin)?, monthly_churn)?;
    tracing::debug!(%arpu, %gross_margin, %monthly_churn, %ltv, "Computed lifetime value");
    Ok(ltv)
}

/// Customer acquisition cost: sales & marketing spend per new customer.
pub fn acquisition_cost(spend: Decimal, new_customers: u64) -> Result<Decimal, AnalyticsError> {
    if new_customers == 0 {
        return Err(AnalyticsError::invalid("new_customers", "cannot calculate CAC with 0 new customers"));
    }
    ratio("acquisition_cost", spend, Decimal::from(new_customers))
}

/// Months of gross-margin contribution needed to recover the acquisition cost.
pub fn payback_period(cac: Decimal, arpu: Decimal, gross_margin: Decimal) -> Result<Decimal, AnalyticsError> {
    let monthly_contribution = product("payback_period", arpu, gross_margin)?;
    if monthly_contribution <= Decimal::ZERO {
        return Err(AnalyticsError::invalid("arpu * gross_margin", "must be > 0"));
    }
    ratio("payback_period", cac, monthly_contribution)
}

/// Sales efficiency: net new ARR over the prior quarter's S&M spend.
pub fn magic_number(net_new_arr: Decimal, prior_quarter_spend: Decimal) -> Result<Decimal, AnalyticsError> {
    if prior_quarter_spend.is_zero() {
        return Err(AnalyticsError::invalid("prior_quarter_spend", "cannot be 0"));
    }
    ratio("magic_number", net_new_arr, prior_quarter_spend)
}

/// Monthly churn as a percentage of the starting customer base.
///
/// Customers lost is `customers_start + new_customers - customers_end`. The
/// result is not clamped: a negative value means the end count exceeds what
/// the start and new counts can explain.
pub fn churn_rate(customers_start: u64, customers_end: u64, new_customers: u64) -> Result<Decimal, AnalyticsError> {
    if customers_start == 0 {
        return Err(AnalyticsError::invalid(
            "customers_start",
            "cannot calculate churn with 0 starting customers",
        ));
    }

    let lost = difference(
        "churn_rate",
        sum("churn_rate", Decimal::from(customers_start), Decimal::from(new_customers))?,
        Decimal::from(customers_end),
    )?;
    let rate = product("churn_rate", ratio("churn_rate", lost, Decimal::from(customers_start))?, dec!(100))?;
    if rate.is_sign_negative() {
        tracing::warn!(customers_start, customers_end, new_customers, "Negative churn: more customers than start + new");
    }
    Ok(rate)
}

/// Runway at the current burn. Zero or negative burn means the company is
/// profitable and has no finite runway.
pub fn runway_months(cash_balance: Decimal, monthly_burn: Decimal) -> Result<Runway, AnalyticsError> {
    if monthly_burn <= Decimal::ZERO {
        tracing::debug!(%cash_balance, %monthly_burn, "Non-positive burn; runway is unbounded");
        return Ok(Runway::Profitable);
    }
    Ok(Runway::Months(ratio("runway_months", cash_balance, monthly_burn)?))
}

/// LTV divided by CAC.
pub fn ltv_cac_ratio(ltv: Decimal, cac: Decimal) -> Result<Decimal, AnalyticsError> {
    if cac.is_zero() {
        return Err(AnalyticsError::invalid("cac", "cannot be 0"));
    }
    ratio("ltv_cac_ratio", ltv, cac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifetime_value_matches_formula_across_inputs() {
        let arpus = [dec!(1), dec!(49.99), dec!(100), dec!(150), dec!(12000)];
        let margins = [dec!(0.01), dec!(0.5), dec!(0.75), dec!(0.8), dec!(1)];
        let churns = [dec!(0.001), dec!(0.03), dec!(0.05), dec!(0.5), dec!(1)];

        for arpu in arpus {
            for margin in margins {
                for churn in churns {
                    let ltv = lifetime_value(arpu, margin, churn).unwrap();
                    assert_eq!(ltv, arpu * margin / churn, "arpu={arpu} margin={margin} churn={churn}");
                }
            }
        }
    }

    #[test]
    fn lifetime_value_known_values() {
        assert_eq!(lifetime_value(dec!(100), dec!(0.8), dec!(0.05)).unwrap(), dec!(1600));
        assert_eq!(lifetime_value(dec!(150), dec!(0.7), dec!(0.03)).unwrap(), dec!(3500));
    }

    #[test]
    fn lifetime_value_rejects_zero_or_negative_churn() {
        assert!(matches!(
            lifetime_value(dec!(100), dec!(0.8), Decimal::ZERO),
            Err(AnalyticsError::InvalidInput(field, _)) if field == "monthly_churn"
        ));
        assert!(lifetime_value(dec!(100), dec!(0.8), dec!(-0.01)).is_err());
    }

    #[test]
    fn lifetime_value_rejects_margin_outside_unit_interval() {
        assert!(lifetime_value(dec!(100), Decimal::ZERO, dec!(0.05)).is_err());
        assert!(lifetime_value(dec!(100), dec!(1.01), dec!(0.05)).is_err());
        assert!(lifetime_value(dec!(100), Decimal::ONE, dec!(0.05)).is_ok());
    }

    #[test]
    fn acquisition_cost_divides_spend() {
        assert_eq!(acquisition_cost(dec!(50000), 100).unwrap(), dec!(500));
        assert_eq!(acquisition_cost(dec!(120000), 200).unwrap(), dec!(600));
        assert!(acquisition_cost(dec!(50000), 0).is_err());
    }

    #[test]
    fn payback_period_in_months() {
        assert_eq!(payback_period(dec!(600), dec!(100), dec!(0.75)).unwrap(), dec!(8));
        assert_eq!(payback_period(dec!(1200), dec!(150), dec!(0.8)).unwrap(), dec!(10));
        assert!(payback_period(dec!(600), Decimal::ZERO, dec!(0.75)).is_err());
        assert!(payback_period(dec!(600), dec!(-10), dec!(0.75)).is_err());
    }

    #[test]
    fn magic_number_ratio() {
        assert_eq!(magic_number(dec!(150000), dec!(100000)).unwrap(), dec!(1.5));
        assert_eq!(magic_number(dec!(75000), dec!(150000)).unwrap(), dec!(0.5));
        assert!(magic_number(dec!(75000), Decimal::ZERO).is_err());
    }

    #[test]
    fn churn_rate_as_percentage() {
        assert_eq!(churn_rate(1000, 1020, 50).unwrap(), dec!(3));
        assert_eq!(churn_rate(500, 520, 40).unwrap(), dec!(4));
        assert!(churn_rate(0, 10, 10).is_err());
    }

    #[test]
    fn churn_rate_is_not_clamped() {
        assert_eq!(churn_rate(100, 120, 10).unwrap(), dec!(-10));
    }

    #[test]
    fn runway_months_or_profitable() {
        assert_eq!(runway_months(dec!(500000), dec!(50000)).unwrap(), Runway::Months(dec!(10)));
        assert_eq!(runway_months(dec!(750000), dec!(-10000)).unwrap(), Runway::Profitable);
        assert_eq!(runway_months(dec!(750000), Decimal::ZERO).unwrap(), Runway::Profitable);
    }

    #[test]
    fn ltv_cac_ratio_requires_nonzero_cac() {
        assert_eq!(ltv_cac_ratio(dec!(1600), dec!(500)).unwrap(), dec!(3.2));
        assert!(ltv_cac_ratio(dec!(1600), Decimal::ZERO).is_err());
    }
}
