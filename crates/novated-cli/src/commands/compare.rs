use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use novated_core::compare::{self, ComparisonInput};
use novated_core::types::{LoanTermPolicy, OpportunityCostPolicy, ResidualPolicy, TaxPolicy};

use crate::input;

/// Arguments shared by the compare and single-scenario commands
#[derive(Args)]
pub struct CompareArgs {
    /// Vehicle drive-away price
    #[arg(long)]
    pub price: Option<Decimal>,

    /// Lease / comparison term in years
    #[arg(long)]
    pub term_years: Option<Decimal>,

    /// Annual lease interest rate (e.g. 0.085 for 8.5%)
    #[arg(long)]
    pub lease_rate: Option<Decimal>,

    /// Annual loan interest rate (defaults to the lease rate)
    #[arg(long)]
    pub loan_rate: Option<Decimal>,

    /// Running costs per year (fuel, insurance, rego, servicing)
    #[arg(long)]
    pub running_costs: Option<Decimal>,

    /// Lease provider fees per year
    #[arg(long, default_value = "0")]
    pub provider_fees: Decimal,

    /// GST rate recovered upfront on the financed price
    #[arg(long)]
    pub gst_rate: Option<Decimal>,

    /// Explicit residual as a fraction of price (omit to derive from term)
    #[arg(long)]
    pub residual_rate: Option<Decimal>,

    /// Explicit marginal tax rate (e.g. 0.37)
    #[arg(long)]
    pub tax_rate: Option<Decimal>,

    /// Annual income for deriving the marginal tax rate
    #[arg(long)]
    pub income: Option<Decimal>,

    /// Annual savings rate for opportunity-cost modelling (omit to disable)
    #[arg(long)]
    pub savings_rate: Option<Decimal>,

    /// Independent loan term in years (omit to match the lease term)
    #[arg(long)]
    pub loan_term_years: Option<Decimal>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Resolve the comparison input from --input, piped stdin, or flags.
fn build_input(args: &CompareArgs) -> Result<ComparisonInput, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::file::read_json(path);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }

    let lease_rate = args
        .lease_rate
        .ok_or("--lease-rate is required (or provide --input)")?;

    let tax = match (args.tax_rate, args.income) {
        (Some(rate), _) => TaxPolicy::Explicit(rate),
        (None, Some(income)) => TaxPolicy::DerivedFromIncome(income),
        (None, None) => return Err("--tax-rate or --income is required (or provide --input)".into()),
    };

    Ok(ComparisonInput {
        vehicle_price: args.price.ok_or("--price is required (or provide --input)")?,
        lease_term_years: args
            .term_years
            .ok_or("--term-years is required (or provide --input)")?,
        lease_rate,
        loan_rate: args.loan_rate.unwrap_or(lease_rate),
        running_costs_annual: args
            .running_costs
            .ok_or("--running-costs is required (or provide --input)")?,
        provider_fees_annual: args.provider_fees,
        gst_rate: args.gst_rate.unwrap_or(novated_core::tables::GST_RATE),
        residual: match args.residual_rate {
            Some(rate) => ResidualPolicy::Explicit(rate),
            None => ResidualPolicy::DerivedFromTerm,
        },
        tax,
        opportunity_cost: match args.savings_rate {
            Some(rate) => OpportunityCostPolicy::Compounding(rate),
            None => OpportunityCostPolicy::None,
        },
        loan_term: match args.loan_term_years {
            Some(years) => LoanTermPolicy::Independent(years),
            None => LoanTermPolicy::MatchLease,
        },
    })
}

pub fn run_compare(args: CompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let comparison_input = build_input(&args)?;
    let result = compare::project_costs(&comparison_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_lease(args: CompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let comparison_input = build_input(&args)?;
    let result = compare::project_costs(&comparison_input)?;
    Ok(serde_json::to_value(result.result.lease)?)
}

pub fn run_outright(args: CompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let comparison_input = build_input(&args)?;
    let result = compare::project_costs(&comparison_input)?;
    Ok(serde_json::to_value(result.result.outright)?)
}

pub fn run_loan(args: CompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let comparison_input = build_input(&args)?;
    let result = compare::project_costs(&comparison_input)?;
    Ok(serde_json::to_value(result.result.loan)?)
}
