use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use novated_core::payment;

/// Arguments for a raw amortized payment lookup
#[derive(Args)]
pub struct PaymentArgs {
    /// Amount financed
    #[arg(long)]
    pub principal: Decimal,

    /// Annual interest rate (e.g. 0.085 for 8.5%)
    #[arg(long)]
    pub rate: Decimal,

    /// Term in months
    #[arg(long)]
    pub months: u32,

    /// Balloon residual due at term end
    #[arg(long, default_value = "0")]
    pub residual: Decimal,
}

pub fn run_payment(args: PaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    if args.months == 0 {
        return Err("--months must be at least 1".into());
    }
    if args.principal < Decimal::ZERO || args.rate < Decimal::ZERO {
        return Err("--principal and --rate must be non-negative".into());
    }
    if args.residual < Decimal::ZERO || args.residual > args.principal {
        return Err("--residual must be between 0 and the principal".into());
    }

    let monthly = payment::payment_with_residual(
        args.principal,
        args.rate,
        args.months,
        args.residual,
    );
    let total = monthly * Decimal::from(args.months) + args.residual;

    Ok(json!({
        "payment": monthly.to_string(),
        "total_paid": total.to_string(),
        "principal": args.principal.to_string(),
        "annual_rate": args.rate.to_string(),
        "months": args.months,
        "residual": args.residual.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_payment_zero_rate() {
        let args = PaymentArgs {
            principal: dec!(48000),
            rate: dec!(0),
            months: 48,
            residual: dec!(0),
        };
        let value = run_payment(args).unwrap();
        assert_eq!(value["payment"], json!("1000"));
    }

    #[test]
    fn test_payment_rejects_zero_months() {
        let args = PaymentArgs {
            principal: dec!(48000),
            rate: dec!(0.05),
            months: 0,
            residual: dec!(0),
        };
        assert!(run_payment(args).is_err());
    }

    #[test]
    fn test_payment_rejects_residual_above_principal() {
        let args = PaymentArgs {
            principal: dec!(10000),
            rate: dec!(0.05),
            months: 12,
            residual: dec!(20000),
        };
        assert!(run_payment(args).is_err());
    }
}
