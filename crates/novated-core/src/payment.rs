//! Level-payment amortization with and without a balloon residual.
//!
//! Both entry points are pure functions over `principal >= 0`,
//! `months >= 1`, `annual_rate >= 0`, `0 <= residual <= principal`.
//! Out-of-domain inputs are a caller validation concern (`compare`
//! validates before calling in).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{Money, Rate};

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Compute (1 + r)^n via iterative multiplication (avoids Decimal::powd drift).
pub(crate) fn compound(rate: Rate, n: u32) -> Decimal {
    let mut result = Decimal::ONE;
    let factor = Decimal::ONE + rate;
    for _ in 0..n {
        result *= factor;
    }
    result
}

/// Level monthly payment amortizing `principal` over `months` at the given
/// annual rate, with `residual` left owing as a lump sum at term end.
///
/// The residual is discounted back to present value at the monthly rate and
/// subtracted from the principal before applying the annuity formula, so the
/// payment stream amortizes only the portion not covered by the balloon.
pub fn payment_with_residual(
    principal: Money,
    annual_rate: Rate,
    months: u32,
    residual: Money,
) -> Money {
    if months == 0 {
        return Money::ZERO;
    }

    let monthly_rate = annual_rate / MONTHS_PER_YEAR;

    // Zero-rate: linear amortization, no discounting
    if monthly_rate.is_zero() {
        return (principal - residual) / Decimal::from(months);
    }

    let growth = compound(monthly_rate, months);
    let residual_pv = residual / growth;
    let amortized = principal - residual_pv;

    amortized * monthly_rate / (Decimal::ONE - Decimal::ONE / growth)
}

/// Level monthly payment with no residual owing at term end.
pub fn payment_no_residual(principal: Money, annual_rate: Rate, months: u32) -> Money {
    payment_with_residual(principal, annual_rate, months, Money::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_zero_rate_is_linear() {
        assert_eq!(payment_no_residual(dec!(48000), dec!(0), 48), dec!(1000));
        assert_eq!(
            payment_with_residual(dec!(48000), dec!(0), 48, dec!(24000)),
            dec!(500)
        );
    }

    #[test]
    fn test_zero_residual_degenerates() {
        let with = payment_with_residual(dec!(58500), dec!(0.085), 48, dec!(0));
        let without = payment_no_residual(dec!(58500), dec!(0.085), 48);
        assert_eq!(with, without);
    }

    #[test]
    fn test_reference_payment() {
        // 58500 at 8.5% over 48 months with 24375 balloon => ~1013.78
        let pmt = payment_with_residual(dec!(58500), dec!(0.085), 48, dec!(24375));
        assert!(
            (pmt - dec!(1013.78)).abs() < dec!(0.01),
            "Expected ~1013.78, got {}",
            pmt
        );
    }

    #[test]
    fn test_no_residual_reference_payment() {
        // 65000 at 8.5% over 48 months => ~1602.14
        let pmt = payment_no_residual(dec!(65000), dec!(0.085), 48);
        assert!(
            (pmt - dec!(1602.14)).abs() < dec!(0.01),
            "Expected ~1602.14, got {}",
            pmt
        );
    }

    #[test]
    fn test_higher_residual_lowers_payment() {
        let low = payment_with_residual(dec!(58500), dec!(0.085), 48, dec!(10000));
        let high = payment_with_residual(dec!(58500), dec!(0.085), 48, dec!(30000));
        assert!(high < low);
    }

    #[test]
    fn test_zero_principal_zero_payment() {
        assert_eq!(payment_no_residual(dec!(0), dec!(0.085), 48), dec!(0));
    }

    #[test]
    fn test_zero_months_guard() {
        assert_eq!(payment_no_residual(dec!(1000), dec!(0.05), 0), dec!(0));
        assert_eq!(payment_no_residual(dec!(1000), dec!(0), 0), dec!(0));
    }

    #[test]
    fn test_compound_growth() {
        // (1.01)^12 ~ 1.126825
        let g = compound(dec!(0.01), 12);
        assert!((g - dec!(1.126825)).abs() < dec!(0.000001), "got {}", g);
    }
}
