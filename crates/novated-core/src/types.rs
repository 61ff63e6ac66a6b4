use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.085 = 8.5%). Never as percentages.
pub type Rate = Decimal;

/// The three acquisition scenarios being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    Lease,
    Outright,
    Loan,
}

impl ScenarioKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioKind::Lease => "lease",
            ScenarioKind::Outright => "outright",
            ScenarioKind::Loan => "loan",
        }
    }
}

/// Normalized cost projection for a single scenario.
///
/// `monthly` is the steady-state recurring cost over the comparison horizon;
/// `total` is the all-in cost over the full term including any lump sum due
/// at the end. `details` carries the intermediate figures for a breakdown
/// display, keyed deterministically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioProjection {
    pub scenario: ScenarioKind,
    pub monthly: Money,
    pub total: Money,
    pub details: BTreeMap<String, Money>,
}

/// How the lease residual percentage is obtained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ResidualPolicy {
    /// Residual as an explicit fraction of the vehicle price (0.375 = 37.5%).
    Explicit(Rate),
    /// Looked up from the minimum-residual table by rounded lease term.
    DerivedFromTerm,
}

/// How the marginal tax rate is obtained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TaxPolicy {
    /// Explicit marginal rate as a decimal (0.37 = 37%).
    Explicit(Rate),
    /// Derived from annual income via the bracket table.
    DerivedFromIncome(Money),
}

/// Opportunity-cost modelling for capital tied up (outright) or retained (loan).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OpportunityCostPolicy {
    /// No opportunity-cost adjustment.
    None,
    /// Compound growth at the given annual savings rate.
    Compounding(Rate),
}

/// How the loan amortization horizon is chosen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LoanTermPolicy {
    /// Loan term forced equal to the lease term.
    MatchLease,
    /// Independent loan term in years.
    Independent(Decimal),
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
