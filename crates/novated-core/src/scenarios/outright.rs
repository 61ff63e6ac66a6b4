//! Outright cash purchase projection.
//!
//! The monthly figure is the total spread over the comparison horizon for
//! display, not a real monthly obligation. With a compounding opportunity
//! cost, the projection charges the investment return the purchase price
//! would have earned had it stayed invested.

use rust_decimal::{Decimal, MathematicalOps};

use crate::compare::ComparisonInput;
use crate::types::{Money, OpportunityCostPolicy, ScenarioKind, ScenarioProjection};

use std::collections::BTreeMap;

/// Project the cost of paying the full price upfront in cash.
pub fn project_outright(input: &ComparisonInput, months: u32) -> ScenarioProjection {
    let running_total = input.running_costs_annual * input.lease_term_years;
    let mut total = input.vehicle_price + running_total;

    let mut details: BTreeMap<String, Money> = BTreeMap::new();
    details.insert("running_cost_total".into(), running_total);

    if let OpportunityCostPolicy::Compounding(savings_rate) = input.opportunity_cost {
        let forgone = forgone_interest(input.vehicle_price, savings_rate, input.lease_term_years);
        total += forgone;
        details.insert("forgone_interest".into(), forgone);
    }

    let monthly = total / Decimal::from(months);

    ScenarioProjection {
        scenario: ScenarioKind::Outright,
        monthly,
        total,
        details,
    }
}

/// Compound investment return `amount` would earn over `years` at the given
/// annual rate: `amount * ((1 + rate)^years - 1)`. Fractional years use powd.
pub(crate) fn forgone_interest(amount: Money, annual_rate: Decimal, years: Decimal) -> Money {
    let growth = (Decimal::ONE + annual_rate).powd(years);
    amount * (growth - Decimal::ONE)
}
