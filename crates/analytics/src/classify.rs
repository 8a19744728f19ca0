//! Maps computed ratios onto fixed quality bands.

use crate::thresholds::*;
use core_types::Band;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A ratio together with the band it falls into and an operator-facing message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub value: Decimal,
    pub band: Band,
    pub message: String,
}

/// Grades LTV/CAC: `>= 3` excellent, `[2, 3)` acceptable, below that poor.
pub fn classify_ltv_cac(ratio: Decimal) -> Classification {
    let shown = ratio.round_dp(1);
    let (band, message) = if ratio >= LTV_CAC_EXCELLENT {
        (Band::Excellent, format!("EXCELLENT (LTV/CAC = {:.1}x > 3x target)", shown))
    } else if ratio >= LTV_CAC_ACCEPTABLE {
        (Band::Acceptable, format!("ACCEPTABLE (LTV/CAC = {:.1}x, aim for >3x)", shown))
    } else {
        (Band::Poor, format!("CRITICAL (LTV/CAC = {:.1}x < 2x, unit economics broken)", shown))
    };
    Classification { value: ratio, band, message }
}

/// Grades CAC payback. Shorter is better: `<= 12` months excellent,
/// `<= 18` acceptable, longer poor.
pub fn classify_payback(months: Decimal) -> Classification {
    let band = if months <= PAYBACK_EXCELLENT_MONTHS {
        Band::Excellent
    } else if months <= PAYBACK_ACCEPTABLE_MONTHS {
        Band::Acceptable
    } else {
        Band::Poor
    };
    Classification {
        value: months,
        band,
        message: format!("Payback: {:.1} months (target: <12mo)", months.round_dp(1)),
    }
}

/// Grades sales efficiency.
pub fn classify_magic_number(ratio: Decimal) -> Classification {
    let (band, verdict) = if ratio > MAGIC_NUMBER_EXCELLENT {
        (Band::Excellent, "excellent sales efficiency")
    } else if ratio >= MAGIC_NUMBER_GOOD {
        (Band::Good, "good sales efficiency")
    } else if ratio >= MAGIC_NUMBER_ACCEPTABLE {
        (Band::Acceptable, "acceptable sales efficiency")
    } else {
        (Band::Poor, "poor efficiency, fix the funnel before adding spend")
    };
    Classification {
        value: ratio,
        band,
        message: format!("Magic number {:.2}: {}", ratio.round_dp(2), verdict),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn ltv_cac_band_edges() {
        assert_eq!(classify_ltv_cac(dec!(3)).band, Band::Excellent);
        assert_eq!(classify_ltv_cac(dec!(2.99)).band, Band::Acceptable);
        assert_eq!(classify_ltv_cac(dec!(2)).band, Band::Acceptable);
        assert_eq!(classify_ltv_cac(dec!(1.99)).band, Band::Poor);
    }

    #[test]
    fn ltv_cac_messages() {
        assert_eq!(classify_ltv_cac(dec!(3.2)).message, "EXCELLENT (LTV/CAC = 3.2x > 3x target)");
        assert_eq!(classify_ltv_cac(dec!(1.5)).message, "CRITICAL (LTV/CAC = 1.5x < 2x, unit economics broken)");
    }

    #[test]
    fn payback_band_edges() {
        assert_eq!(classify_payback(dec!(12)).band, Band::Excellent);
        assert_eq!(classify_payback(dec!(12.1)).band, Band::Acceptable);
        assert_eq!(classify_payback(dec!(18)).band, Band::Acceptable);
        assert_eq!(classify_payback(dec!(18.5)).band, Band::Poor);
        assert_eq!(classify_payback(dec!(8)).message, "Payback: 8.0 months (target: <12mo)");
    }

    #[test]
    fn magic_number_bands() {
        assert_eq!(classify_magic_number(dec!(1.5)).band, Band::Excellent);
        assert_eq!(classify_magic_number(dec!(1.0)).band, Band::Good);
        assert_eq!(classify_magic_number(dec!(0.75)).band, Band::Good);
        assert_eq!(classify_magic_number(dec!(0.5)).band, Band::Acceptable);
        assert_eq!(classify_magic_number(dec!(0.49)).band, Band::Poor);
    }
}
