//! Ordinary amortizing loan projection (full price financed, no residual).
//!
//! With a compounding opportunity cost, the projection credits the
//! investment return the buyer keeps earning by not tying up cash in the
//! vehicle, mirroring the outright scenario's forgone interest.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::compare::ComparisonInput;
use crate::payment::payment_no_residual;
use crate::scenarios::outright::forgone_interest;
use crate::types::{Money, OpportunityCostPolicy, ScenarioKind, ScenarioProjection};

use std::collections::BTreeMap;

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Project the cost of financing the full price via a standard loan.
pub fn project_loan(input: &ComparisonInput, loan_months: u32) -> ScenarioProjection {
    let loan_payment = payment_no_residual(input.vehicle_price, input.loan_rate, loan_months);
    let running_monthly = input.running_costs_annual / MONTHS_PER_YEAR;

    let monthly = loan_payment + running_monthly;
    let mut total = monthly * Decimal::from(loan_months);

    let mut details: BTreeMap<String, Money> = BTreeMap::new();
    details.insert("loan_payment".into(), loan_payment);
    details.insert("running_cost_monthly".into(), running_monthly);

    if let OpportunityCostPolicy::Compounding(savings_rate) = input.opportunity_cost {
        let loan_years = Decimal::from(loan_months) / MONTHS_PER_YEAR;
        let earned = forgone_interest(input.vehicle_price, savings_rate, loan_years);
        total -= earned;
        details.insert("interest_earned".into(), earned);
    }

    ScenarioProjection {
        scenario: ScenarioKind::Loan,
        monthly,
        total,
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LoanTermPolicy, ResidualPolicy, TaxPolicy};
    use rust_decimal_macros::dec;

    fn loan_input(opportunity_cost: OpportunityCostPolicy) -> ComparisonInput {
        ComparisonInput {
            vehicle_price: dec!(65000),
            lease_term_years: dec!(4),
            lease_rate: dec!(0.085),
            loan_rate: dec!(0.085),
            running_costs_annual: dec!(5500),
            provider_fees_annual: dec!(400),
            gst_rate: dec!(0.1),
            residual: ResidualPolicy::Explicit(dec!(0.375)),
            tax: TaxPolicy::Explicit(dec!(0.37)),
            opportunity_cost,
            loan_term: LoanTermPolicy::MatchLease,
        }
    }

    #[test]
    fn test_reference_loan() {
        let input = loan_input(OpportunityCostPolicy::None);
        let result = project_loan(&input, 48);

        // 65000 at 8.5% over 48 months => ~1602.14, plus 458.33 running
        assert!(
            (result.details["loan_payment"] - dec!(1602.14)).abs() < dec!(0.01),
            "Expected loan payment ~1602.14, got {}",
            result.details["loan_payment"]
        );
        assert!(
            (result.monthly - dec!(2060.47)).abs() < dec!(0.01),
            "Expected monthly ~2060.47, got {}",
            result.monthly
        );
        assert!(
            (result.total - dec!(98902.71)).abs() < dec!(0.01),
            "Expected total ~98902.71, got {}",
            result.total
        );
    }

    #[test]
    fn test_interest_earned_reduces_total() {
        let base = project_loan(&loan_input(OpportunityCostPolicy::None), 48);
        let offset = project_loan(
            &loan_input(OpportunityCostPolicy::Compounding(dec!(0.04))),
            48,
        );

        let earned = offset.details["interest_earned"];
        assert!(
            (earned - dec!(11040.81)).abs() < dec!(0.01),
            "Expected interest earned ~11040.81, got {}",
            earned
        );
        assert!(
            (offset.total - (base.total - earned)).abs() < dec!(0.000001),
            "Total should drop by the interest earned"
        );
        // Monthly obligation is unchanged by the offset
        assert_eq!(offset.monthly, base.monthly);
    }

    #[test]
    fn test_zero_rate_loan_is_linear() {
        let mut input = loan_input(OpportunityCostPolicy::None);
        input.loan_rate = dec!(0);
        input.running_costs_annual = dec!(0);
        let result = project_loan(&input, 48);

        // 65000 / 48 with no interest and no running costs
        assert!(
            (result.monthly - dec!(1354.17)).abs() < dec!(0.01),
            "got {}",
            result.monthly
        );
        assert!(
            (result.total - dec!(65000)).abs() < dec!(0.000001),
            "got {}",
            result.total
        );
    }
}
