//! Fixed policy lookup tables: ATO-style minimum residuals by lease term and
//! resident marginal tax brackets (annual income, no levies).

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::types::{Money, Rate};

/// Default GST rate applied to the financed vehicle price.
pub const GST_RATE: Rate = dec!(0.10);

/// Minimum residual fraction of price by lease term in whole years.
const MINIMUM_RESIDUALS: [(u32, Decimal); 5] = [
    (1, dec!(0.65)),
    (2, dec!(0.5625)),
    (3, dec!(0.4688)),
    (4, dec!(0.375)),
    (5, dec!(0.2813)),
];

/// Fallback residual for terms outside the 1-5 year table.
const RESIDUAL_FALLBACK: Rate = dec!(0.375);

/// Marginal bracket ceilings and rates. Income at or below a ceiling takes
/// that bracket's rate.
const TAX_BRACKETS: [(Decimal, Rate); 4] = [
    (dec!(18200), dec!(0.00)),
    (dec!(45000), dec!(0.16)),
    (dec!(135000), dec!(0.30)),
    (dec!(190000), dec!(0.37)),
];

/// Top marginal rate for income above the last bracket ceiling.
const TOP_TAX_RATE: Rate = dec!(0.45);

/// Minimum residual fraction for a lease term, rounded to whole years.
pub fn minimum_residual_rate(term_years: Decimal) -> Rate {
    let rounded = term_years.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    for (years, rate) in MINIMUM_RESIDUALS {
        if rounded == Decimal::from(years) {
            return rate;
        }
    }
    RESIDUAL_FALLBACK
}

/// Marginal tax rate for an annual income.
pub fn marginal_tax_rate(annual_income: Money) -> Rate {
    for (ceiling, rate) in TAX_BRACKETS {
        if annual_income <= ceiling {
            return rate;
        }
    }
    TOP_TAX_RATE
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_residual_table_exact_values() {
        assert_eq!(minimum_residual_rate(dec!(1)), dec!(0.65));
        assert_eq!(minimum_residual_rate(dec!(2)), dec!(0.5625));
        assert_eq!(minimum_residual_rate(dec!(3)), dec!(0.4688));
        assert_eq!(minimum_residual_rate(dec!(4)), dec!(0.375));
        assert_eq!(minimum_residual_rate(dec!(5)), dec!(0.2813));
    }

    #[test]
    fn test_residual_fallback_outside_table() {
        assert_eq!(minimum_residual_rate(dec!(0)), dec!(0.375));
        assert_eq!(minimum_residual_rate(dec!(6)), dec!(0.375));
        assert_eq!(minimum_residual_rate(dec!(10)), dec!(0.375));
    }

    #[test]
    fn test_residual_rounds_fractional_terms() {
        // 2.4 rounds to 2 years
        assert_eq!(minimum_residual_rate(dec!(2.4)), dec!(0.5625));
        // 4.6 rounds to 5 years
        assert_eq!(minimum_residual_rate(dec!(4.6)), dec!(0.2813));
    }

    #[test]
    fn test_tax_bracket_boundaries_take_lower_bracket() {
        assert_eq!(marginal_tax_rate(dec!(18200)), dec!(0.00));
        assert_eq!(marginal_tax_rate(dec!(18201)), dec!(0.16));
        assert_eq!(marginal_tax_rate(dec!(45000)), dec!(0.16));
        assert_eq!(marginal_tax_rate(dec!(45001)), dec!(0.30));
        assert_eq!(marginal_tax_rate(dec!(135000)), dec!(0.30));
        assert_eq!(marginal_tax_rate(dec!(190000)), dec!(0.37));
        assert_eq!(marginal_tax_rate(dec!(190001)), dec!(0.45));
    }

    #[test]
    fn test_tax_bracket_step_values() {
        assert_eq!(marginal_tax_rate(dec!(0)), dec!(0.00));
        assert_eq!(marginal_tax_rate(dec!(85000)), dec!(0.30));
        assert_eq!(marginal_tax_rate(dec!(150000)), dec!(0.37));
        assert_eq!(marginal_tax_rate(dec!(500000)), dec!(0.45));
    }
}
