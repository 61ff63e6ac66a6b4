//! Salary-sacrificed (novated) lease projection.
//!
//! The financed principal is the vehicle price net of the upfront GST
//! saving. The lease payment amortizes that principal down to the residual,
//! and the whole pre-tax bundle (payment + running costs + provider fees)
//! is salary-sacrificed, so the net cost is the bundle times one minus the
//! marginal rate. The residual is paid post-tax at lease end.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::compare::ComparisonInput;
use crate::payment::payment_with_residual;
use crate::types::{Money, Rate, ScenarioKind, ScenarioProjection};

use std::collections::BTreeMap;

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Project the net-of-tax monthly and total cost of a novated lease.
pub fn project_lease(
    input: &ComparisonInput,
    months: u32,
    residual_rate: Rate,
    tax_rate: Rate,
) -> ScenarioProjection {
    let residual = input.vehicle_price * residual_rate;
    let gst_saving = input.vehicle_price * input.gst_rate;
    let financed = input.vehicle_price - gst_saving;

    let lease_payment = payment_with_residual(financed, input.lease_rate, months, residual);
    let running_monthly = input.running_costs_annual / MONTHS_PER_YEAR;
    let fees_monthly = input.provider_fees_annual / MONTHS_PER_YEAR;

    let pre_tax_monthly = lease_payment + running_monthly + fees_monthly;
    let net_monthly = pre_tax_monthly * (Decimal::ONE - tax_rate);

    // Residual is a post-tax lump sum, never tax-adjusted
    let total = net_monthly * Decimal::from(months) + residual;

    let mut details: BTreeMap<String, Money> = BTreeMap::new();
    details.insert("lease_payment".into(), lease_payment);
    details.insert("running_cost_monthly".into(), running_monthly);
    details.insert("provider_fees_monthly".into(), fees_monthly);
    details.insert("residual_value".into(), residual);
    details.insert("gst_saving".into(), gst_saving);
    details.insert("residual_rate".into(), residual_rate);
    details.insert("tax_rate".into(), tax_rate);

    ScenarioProjection {
        scenario: ScenarioKind::Lease,
        monthly: net_monthly,
        total,
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LoanTermPolicy, OpportunityCostPolicy, ResidualPolicy, TaxPolicy};
    use rust_decimal_macros::dec;

    fn reference_input() -> ComparisonInput {
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
            opportunity_cost: OpportunityCostPolicy::None,
            loan_term: LoanTermPolicy::MatchLease,
        }
    }

    #[test]
    fn test_reference_lease_chain() {
        let input = reference_input();
        let result = project_lease(&input, 48, dec!(0.375), dec!(0.37));

        assert_eq!(result.details["residual_value"], dec!(24375.000));
        assert_eq!(result.details["gst_saving"], dec!(6500.0));
        assert!(
            (result.details["lease_payment"] - dec!(1013.78)).abs() < dec!(0.01),
            "Expected lease payment ~1013.78, got {}",
            result.details["lease_payment"]
        );
        assert!(
            (result.monthly - dec!(948.43)).abs() < dec!(0.01),
            "Expected net monthly ~948.43, got {}",
            result.monthly
        );
        assert!(
            (result.total - dec!(69899.70)).abs() < dec!(0.01),
            "Expected total ~69899.70, got {}",
            result.total
        );
    }

    #[test]
    fn test_zero_costs_zero_tax_reduces_to_raw_payment() {
        let mut input = reference_input();
        input.running_costs_annual = dec!(0);
        input.provider_fees_annual = dec!(0);
        let result = project_lease(&input, 48, dec!(0.375), dec!(0));

        assert_eq!(result.monthly, result.details["lease_payment"]);
    }

    #[test]
    fn test_higher_tax_rate_lowers_net_cost() {
        let input = reference_input();
        let low = project_lease(&input, 48, dec!(0.375), dec!(0.16));
        let high = project_lease(&input, 48, dec!(0.375), dec!(0.45));
        assert!(high.monthly < low.monthly);
        assert!(high.total < low.total);
    }

    #[test]
    fn test_running_costs_are_monthly_shares() {
        let input = reference_input();
        let result = project_lease(&input, 48, dec!(0.375), dec!(0.37));
        assert!(
            (result.details["running_cost_monthly"] - dec!(458.33)).abs() < dec!(0.01)
        );
        assert!(
            (result.details["provider_fees_monthly"] - dec!(33.33)).abs() < dec!(0.01)
        );
    }
}
