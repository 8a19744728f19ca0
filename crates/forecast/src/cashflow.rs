use crate::error::ForecastError;
use core_types::MonthlyAmount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of a cash-flow projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowMonth {
    /// 1-based month index.
    pub month: usize,
    pub revenue: Decimal,
    pub expenses: Decimal,
    pub net_cash_flow: Decimal,
    pub cumulative_cash: Decimal,
}

/// Projects cash month by month.
///
/// Each month's net flow is `revenue - expenses`; cumulative cash starts at
/// `starting_cash` and accumulates the net flows.
///
/// # Errors
///
/// `InvalidInput` for a zero-month horizon, and `Core(InvalidInput)` when a
/// revenue or expense series does not have exactly `months` entries.
pub fn project_cashflow(
    starting_cash: Decimal,
    revenue: &MonthlyAmount,
    expenses: &MonthlyAmount,
    months: usize,
) -> Result<Vec<CashFlowMonth>, ForecastError> {
    if months == 0 {
        return Err(ForecastError::InvalidInput("months must be at least 1".to_string()));
    }
    let revenue = revenue.expand("monthly_revenue", months)?;
    let expenses = expenses.expand("monthly_expenses", months)?;

    let mut cumulative_cash = starting_cash;
    let mut projection = Vec::with_capacity(months);
    for (i, (revenue, expenses)) in revenue.into_iter().zip(expenses).enumerate() {
        let month = i + 1;
        let net_cash_flow = revenue
            .checked_sub(expenses)
            .ok_or_else(|| overflow("net cash flow", month))?;
        cumulative_cash = cumulative_cash
            .checked_add(net_cash_flow)
            .ok_or_else(|| overflow("cumulative cash", month))?;
        projection.push(CashFlowMonth {
            month,
            revenue,
            expenses,
            net_cash_flow,
            cumulative_cash,
        });
    }

    tracing::debug!(%starting_cash, months, ending_cash = %cumulative_cash, "Projected cash flow");
    Ok(projection)
}

fn overflow(what: &str, month: usize) -> ForecastError {
    ForecastError::InvalidInput(format!("{} overflows in month {}", what, month))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn constant_burn_depletes_linearly() {
        let projection = project_cashflow(
            dec!(500000),
            &MonthlyAmount::Constant(dec!(30000)),
            &MonthlyAmount::Constant(dec!(50000)),
            12,
        )
        .unwrap();

        assert_eq!(projection.len(), 12);
        assert_eq!(projection[0].month, 1);
        assert_eq!(projection[0].cumulative_cash, dec!(480000));
        assert_eq!(projection[2].cumulative_cash, dec!(440000));
        assert!(projection.windows(2).all(|w| w[1].cumulative_cash < w[0].cumulative_cash));
        assert!(projection.iter().all(|m| m.net_cash_flow == dec!(-20000)));

        let last = projection.last().unwrap();
        assert_eq!(last.month, 12);
        assert_eq!(last.cumulative_cash, dec!(500000) - dec!(12) * dec!(20000));
        assert_eq!(last.cumulative_cash, dec!(260000));
    }

    #[test]
    fn series_values_are_used_per_month() {
        let projection = project_cashflow(
            dec!(1000),
            &MonthlyAmount::Series(vec![dec!(100), dec!(200), dec!(300)]),
            &MonthlyAmount::Constant(dec!(150)),
            3,
        )
        .unwrap();

        let net: Vec<Decimal> = projection.iter().map(|m| m.net_cash_flow).collect();
        assert_eq!(net, vec![dec!(-50), dec!(50), dec!(150)]);
        assert_eq!(projection[2].cumulative_cash, dec!(1150));
    }

    #[test]
    fn series_length_must_match_months() {
        let err = project_cashflow(
            dec!(1000),
            &MonthlyAmount::Constant(dec!(100)),
            &MonthlyAmount::Series(vec![dec!(1); 11]),
            12,
        )
        .unwrap_err();
        assert!(matches!(err, ForecastError::Core(_)));
        assert!(err.to_string().contains("monthly_expenses"));
    }

    #[test]
    fn overflowing_cash_is_an_error() {
        let err = project_cashflow(
            Decimal::MAX,
            &MonthlyAmount::Constant(Decimal::MAX),
            &MonthlyAmount::Constant(Decimal::ZERO),
            1,
        )
        .unwrap_err();
        assert!(matches!(err, ForecastError::InvalidInput(ref msg) if msg.contains("month 1")));

        let err = project_cashflow(
            Decimal::ZERO,
            &MonthlyAmount::Constant(Decimal::MIN),
            &MonthlyAmount::Constant(Decimal::MAX),
            1,
        )
        .unwrap_err();
        assert!(err.to_string().contains("net cash flow"));
    }

    #[test]
    fn zero_month_horizon_is_rejected() {
        let amount = MonthlyAmount::Constant(dec!(1));
        assert!(matches!(
            project_cashflow(dec!(1), &amount, &amount, 0),
            Err(ForecastError::InvalidInput(_))
        ));
    }
}
