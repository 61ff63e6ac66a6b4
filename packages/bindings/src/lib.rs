use napi::Result as NapiResult;
use napi_derive::napi;

use rust_decimal::Decimal;
use std::str::FromStr;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_decimal(field: &str, value: &str) -> NapiResult<Decimal> {
    Decimal::from_str(value).map_err(|e| to_napi_error(format!("{field}: {e}")))
}

// ---------------------------------------------------------------------------
// Cost projection engine
// ---------------------------------------------------------------------------

#[napi]
pub fn project_costs(input_json: String) -> NapiResult<String> {
    let input: novated_core::compare::ComparisonInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = novated_core::compare::project_costs(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Payment helpers
// ---------------------------------------------------------------------------

#[napi]
pub fn payment_with_residual(
    principal: String,
    annual_rate: String,
    months: u32,
    residual: String,
) -> NapiResult<String> {
    let principal = parse_decimal("principal", &principal)?;
    let annual_rate = parse_decimal("annual_rate", &annual_rate)?;
    let residual = parse_decimal("residual", &residual)?;
    let payment =
        novated_core::payment::payment_with_residual(principal, annual_rate, months, residual);
    Ok(payment.to_string())
}

#[napi]
pub fn payment_no_residual(
    principal: String,
    annual_rate: String,
    months: u32,
) -> NapiResult<String> {
    let principal = parse_decimal("principal", &principal)?;
    let annual_rate = parse_decimal("annual_rate", &annual_rate)?;
    let payment = novated_core::payment::payment_no_residual(principal, annual_rate, months);
    Ok(payment.to_string())
}

// ---------------------------------------------------------------------------
// Lookup tables
// ---------------------------------------------------------------------------

#[napi]
pub fn minimum_residual_rate(term_years: String) -> NapiResult<String> {
    let term_years = parse_decimal("term_years", &term_years)?;
    Ok(novated_core::tables::minimum_residual_rate(term_years).to_string())
}

#[napi]
pub fn marginal_tax_rate(annual_income: String) -> NapiResult<String> {
    let annual_income = parse_decimal("annual_income", &annual_income)?;
    Ok(novated_core::tables::marginal_tax_rate(annual_income).to_string())
}
