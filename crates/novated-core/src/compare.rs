//! Cost Projection Engine entry point.
//!
//! Assembles a validated input record into three independent scenario
//! projections (lease, outright, loan) normalized to the same shape so
//! callers can rank them by total cost. Every call recomputes from scratch;
//! there is no cached or shared state between calls.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::NovatedError;
use crate::scenarios::{lease, loan, outright};
use crate::tables;
use crate::types::{
    with_metadata, ComputationOutput, LoanTermPolicy, Money, OpportunityCostPolicy, Rate,
    ResidualPolicy, ScenarioKind, ScenarioProjection, TaxPolicy,
};
use crate::NovatedResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// Full input record for a three-way cost comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonInput {
    /// Vehicle drive-away price
    pub vehicle_price: Money,
    /// Lease / comparison term in years (typically 1-5)
    pub lease_term_years: Decimal,
    /// Annual lease interest rate as a decimal (0.085 = 8.5%)
    pub lease_rate: Rate,
    /// Annual loan interest rate as a decimal
    pub loan_rate: Rate,
    /// Fuel, insurance, registration, servicing per year
    pub running_costs_annual: Money,
    /// Lease provider administration fees per year
    pub provider_fees_annual: Money,
    /// GST rate recovered upfront on the financed price
    #[serde(default = "default_gst_rate")]
    pub gst_rate: Rate,
    /// Residual percentage source
    pub residual: ResidualPolicy,
    /// Marginal tax rate source
    pub tax: TaxPolicy,
    /// Opportunity-cost modelling for outright and loan scenarios
    #[serde(default = "default_opportunity_cost")]
    pub opportunity_cost: OpportunityCostPolicy,
    /// Loan amortization horizon
    #[serde(default = "default_loan_term")]
    pub loan_term: LoanTermPolicy,
}

fn default_gst_rate() -> Rate {
    tables::GST_RATE
}

fn default_opportunity_cost() -> OpportunityCostPolicy {
    OpportunityCostPolicy::None
}

fn default_loan_term() -> LoanTermPolicy {
    LoanTermPolicy::MatchLease
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// The three normalized projections plus the cheapest option by total cost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonOutput {
    pub lease: ScenarioProjection,
    pub outright: ScenarioProjection,
    pub loan: ScenarioProjection,
    pub best_option: ScenarioKind,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Run the three scenario calculations and rank them by total cost.
pub fn project_costs(
    input: &ComparisonInput,
) -> NovatedResult<ComputationOutput<ComparisonOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    let months = term_months(input.lease_term_years);
    let loan_months = match input.loan_term {
        LoanTermPolicy::MatchLease => months,
        LoanTermPolicy::Independent(years) => term_months(years),
    };

    if loan_months != months {
        warnings.push(format!(
            "Loan term ({loan_months} months) differs from lease term ({months} months); \
             totals span different horizons and are not directly comparable"
        ));
    }

    let residual_rate = match input.residual {
        ResidualPolicy::Explicit(rate) => rate,
        ResidualPolicy::DerivedFromTerm => tables::minimum_residual_rate(input.lease_term_years),
    };
    let tax_rate = match input.tax {
        TaxPolicy::Explicit(rate) => rate,
        TaxPolicy::DerivedFromIncome(income) => tables::marginal_tax_rate(income),
    };

    let lease = lease::project_lease(input, months, residual_rate, tax_rate);
    let outright = outright::project_outright(input, months);
    let loan = loan::project_loan(input, loan_months);

    let best_option = best_option(&[&lease, &outright, &loan]);

    let output = ComparisonOutput {
        lease,
        outright,
        loan,
        best_option,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Novated lease vs. outright vs. loan, closed-form amortization over a common horizon",
        input,
        warnings,
        elapsed,
        output,
    ))
}

/// Pick the projection with the minimum total. Strict less-than keeps the
/// first-encountered scenario on ties.
///
/// Panics if `projections` is empty.
pub fn best_option(projections: &[&ScenarioProjection]) -> ScenarioKind {
    let mut best = projections[0];
    for p in &projections[1..] {
        if p.total < best.total {
            best = p;
        }
    }
    best.scenario
}

/// Whole months in a (possibly fractional) year count.
pub(crate) fn term_months(years: Decimal) -> u32 {
    (years * MONTHS_PER_YEAR)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_input(input: &ComparisonInput) -> NovatedResult<()> {
    if input.vehicle_price < Decimal::ZERO {
        return Err(NovatedError::InvalidInput {
            field: "vehicle_price".into(),
            reason: "Vehicle price must be non-negative".into(),
        });
    }
    if term_months(input.lease_term_years) == 0 {
        return Err(NovatedError::InvalidInput {
            field: "lease_term_years".into(),
            reason: "Lease term must cover at least one month".into(),
        });
    }
    if input.lease_rate < Decimal::ZERO {
        return Err(NovatedError::InvalidInput {
            field: "lease_rate".into(),
            reason: "Lease rate must be non-negative".into(),
        });
    }
    if input.loan_rate < Decimal::ZERO {
        return Err(NovatedError::InvalidInput {
            field: "loan_rate".into(),
            reason: "Loan rate must be non-negative".into(),
        });
    }
    if input.running_costs_annual < Decimal::ZERO {
        return Err(NovatedError::InvalidInput {
            field: "running_costs_annual".into(),
            reason: "Running costs must be non-negative".into(),
        });
    }
    if input.provider_fees_annual < Decimal::ZERO {
        return Err(NovatedError::InvalidInput {
            field: "provider_fees_annual".into(),
            reason: "Provider fees must be non-negative".into(),
        });
    }
    if input.gst_rate < Decimal::ZERO || input.gst_rate >= Decimal::ONE {
        return Err(NovatedError::InvalidInput {
            field: "gst_rate".into(),
            reason: "GST rate must be in [0, 1)".into(),
        });
    }
    if let ResidualPolicy::Explicit(rate) = input.residual {
        if rate < Decimal::ZERO || rate > Decimal::ONE {
            return Err(NovatedError::InvalidInput {
                field: "residual".into(),
                reason: "Explicit residual rate must be in [0, 1]".into(),
            });
        }
    }
    match input.tax {
        TaxPolicy::Explicit(rate) => {
            if rate < Decimal::ZERO || rate >= Decimal::ONE {
                return Err(NovatedError::InvalidInput {
                    field: "tax".into(),
                    reason: "Explicit marginal tax rate must be in [0, 1)".into(),
                });
            }
        }
        TaxPolicy::DerivedFromIncome(income) => {
            if income < Decimal::ZERO {
                return Err(NovatedError::InvalidInput {
                    field: "tax".into(),
                    reason: "Annual income must be non-negative".into(),
                });
            }
        }
    }
    if let OpportunityCostPolicy::Compounding(rate) = input.opportunity_cost {
        if rate < Decimal::ZERO {
            return Err(NovatedError::InvalidInput {
                field: "opportunity_cost".into(),
                reason: "Savings rate must be non-negative".into(),
            });
        }
    }
    if let LoanTermPolicy::Independent(years) = input.loan_term {
        if term_months(years) == 0 {
            return Err(NovatedError::InvalidInput {
                field: "loan_term".into(),
                reason: "Loan term must cover at least one month".into(),
            });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
