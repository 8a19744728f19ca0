//! Fixed band boundaries for the classifiers in [`crate::classify`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// LTV/CAC at or above this is excellent.
pub const LTV_CAC_EXCELLENT: Decimal = dec!(3);
/// LTV/CAC at or above this (and below excellent) is acceptable.
pub const LTV_CAC_ACCEPTABLE: Decimal = dec!(2);

/// Payback at or under this many months is excellent.
pub const PAYBACK_EXCELLENT_MONTHS: Decimal = dec!(12);
/// Payback at or under this many months (and over excellent) is acceptable.
pub const PAYBACK_ACCEPTABLE_MONTHS: Decimal = dec!(18);

/// Magic number strictly above this is excellent.
pub const MAGIC_NUMBER_EXCELLENT: Decimal = dec!(1.0);
pub const MAGIC_NUMBER_GOOD: Decimal = dec!(0.75);
pub const MAGIC_NUMBER_ACCEPTABLE: Decimal = dec!(0.5);

/// LTV/CAC a retail profile must reach to be priced "healthy".
pub const TARGET_LTV_CAC: Decimal = dec!(3);
