//! Per-order economics for a single-product retail store.
//!
//! Unlike the SaaS formulas, lifetime value here is contribution per order
//! times the expected number of orders per customer.

use crate::classify::{Classification, classify_ltv_cac};
use crate::error::AnalyticsError;
use crate::metrics::{difference, ltv_cac_ratio, product, ratio, sum};
use crate::thresholds::TARGET_LTV_CAC;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// The cost structure of one product at one price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetailInputs {
    pub price: Decimal,
    /// Purchase cost of one unit from the supplier.
    pub unit_cost: Decimal,
    /// Shipping, packaging and other per-order handling.
    pub fulfilment_cost: Decimal,
    /// Payment processing fee as a fraction of price.
    pub payment_fee_rate: Decimal,
    /// Turnover tax as a fraction of price.
    pub tax_rate: Decimal,
    pub cac: Decimal,
    /// Expected orders over a customer's lifetime, e.g. 1.25 for a 25% repeat rate.
    pub purchases_per_customer: Decimal,
    pub fixed_costs_monthly: Decimal,
}

impl RetailInputs {
    pub fn validate(&self) -> Result<(), AnalyticsError> {
        if self.price <= Decimal::ZERO {
            return Err(AnalyticsError::invalid("price", "must be > 0"));
        }
        if self.cac <= Decimal::ZERO {
            return Err(AnalyticsError::invalid("cac", "must be > 0"));
        }
        if self.purchases_per_customer <= Decimal::ZERO {
            return Err(AnalyticsError::invalid("purchases_per_customer", "must be > 0"));
        }
        for (field, rate) in [("payment_fee_rate", self.payment_fee_rate), ("tax_rate", self.tax_rate)] {
            if rate < Decimal::ZERO || rate >= Decimal::ONE {
                return Err(AnalyticsError::invalid(field, "must be in [0, 1)"));
            }
        }
        if self.price_rates() >= Decimal::ONE {
            return Err(AnalyticsError::invalid(
                "payment_fee_rate + tax_rate",
                "must be below 1",
            ));
        }
        Ok(())
    }

    /// Share of the price lost to fees and tax.
    fn price_rates(&self) -> Decimal {
        self.payment_fee_rate + self.tax_rate
    }

    /// Per-order costs that do not scale with price.
    fn fixed_unit_costs(&self) -> Result<Decimal, AnalyticsError> {
        sum("fixed_unit_costs", self.unit_cost, self.fulfilment_cost)
    }
}

/// The full per-order breakdown at one price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetailEconomics {
    pub price: Decimal,
    pub gross_profit: Decimal,
    pub gross_margin_pct: Decimal,
    pub variable_costs: Decimal,
    /// Price minus every variable cost, before marketing.
    pub contribution: Decimal,
    pub contribution_margin_pct: Decimal,
    pub contribution_after_cac: Decimal,
    pub contribution_after_cac_pct: Decimal,
    pub ltv: Decimal,
    pub ltv_cac: Classification,
    /// Orders needed to earn back the CAC; `None` if each order loses money.
    pub payback_orders: Option<Decimal>,
    /// Orders per month to cover fixed costs; `None` if an order never covers its CAC.
    pub breakeven_units: Option<Decimal>,
}

/// Lowest prices that reach a given contribution per order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceFloors {
    /// Covers variable costs only.
    pub without_cac: Decimal,
    /// Also covers one CAC per order.
    pub with_cac: Decimal,
    /// Reaches the target LTV/CAC over the customer's lifetime.
    pub healthy_ltv_cac: Decimal,
}

pub fn retail_economics(inputs: &RetailInputs) -> Result<RetailEconomics, AnalyticsError> {
    inputs.validate()?;
    let price = inputs.price;
    let hundred = dec!(100);

    let gross_profit = difference("gross_profit", price, inputs.unit_cost)?;
    let variable_costs = sum(
        "variable_costs",
        inputs.fixed_unit_costs()?,
        product("variable_costs", price, inputs.price_rates())?,
    )?;
    let contribution = difference("contribution", price, variable_costs)?;
    let contribution_after_cac = difference("contribution_after_cac", contribution, inputs.cac)?;

    let ltv = product("ltv", contribution, inputs.purchases_per_customer)?;
    let ltv_cac = classify_ltv_cac(ltv_cac_ratio(ltv, inputs.cac)?);

    let payback_orders = if contribution > Decimal::ZERO {
        Some(ratio("payback_orders", inputs.cac, contribution)?)
    } else {
        tracing::warn!(%price, %contribution, "Each order loses money before marketing");
        None
    };
    let breakeven_units = if contribution_after_cac > Decimal::ZERO {
        Some(ratio("breakeven_units", inputs.fixed_costs_monthly, contribution_after_cac)?)
    } else {
        None
    };

    let percent_of_price = |metric: &str, value: Decimal| product(metric, ratio(metric, value, price)?, hundred);

    Ok(RetailEconomics {
        price,
        gross_profit,
        gross_margin_pct: percent_of_price("gross_margin_pct", gross_profit)?,
        variable_costs,
        contribution,
        contribution_margin_pct: percent_of_price("contribution_margin_pct", contribution)?,
        contribution_after_cac,
        contribution_after_cac_pct: percent_of_price("contribution_after_cac_pct", contribution_after_cac)?,
        ltv,
        ltv_cac,
        payback_orders,
        breakeven_units,
    })
}

/// Solves `price * (1 - fee - tax) - unit_cost - fulfilment = target` for
/// the three targets in [`PriceFloors`].
pub fn price_floors(inputs: &RetailInputs) -> Result<PriceFloors, AnalyticsError> {
    inputs.validate()?;
    let kept = Decimal::ONE - inputs.price_rates();
    let base = inputs.fixed_unit_costs()?;
    let healthy_contribution = ratio(
        "healthy_contribution",
        product("healthy_contribution", TARGET_LTV_CAC, inputs.cac)?,
        inputs.purchases_per_customer,
    )?;

    Ok(PriceFloors {
        without_cac: ratio("price_floor", base, kept)?,
        with_cac: ratio("price_floor", sum("price_floor", base, inputs.cac)?, kept)?,
        healthy_ltv_cac: ratio("price_floor", sum("price_floor", base, healthy_contribution)?, kept)?,
    })
}

/// Evaluates the same cost structure at each of `prices`, in order.
pub fn price_sweep(inputs: &RetailInputs, prices: &[Decimal]) -> Result<Vec<RetailEconomics>, AnalyticsError> {
    prices
        .iter()
        .map(|&price| retail_economics(&RetailInputs { price, ..inputs.clone() }))
        .collect()
}
