//! Debt payoff simulation

use tracing::debug;

use super::types::DebtPayoff;
use crate::error::{Error, Result};

/// Month cap used when no config is supplied (50 years)
pub const DEFAULT_MAX_MONTHS: u32 = 600;

/// Amortize `debt_amount` at a fixed `monthly_payment` with interest compounded
/// monthly at `annual_interest_rate / 12`.
///
/// Stops when the balance reaches zero or after `max_months` payments. Fails
/// with [`Error::PaymentTooSmall`] when the payment does not exceed the first
/// month's interest, since the balance would never shrink.
pub fn simulate_debt_payoff(
    debt_amount: f64,
    monthly_payment: f64,
    annual_interest_rate: f64,
    max_months: u32,
) -> Result<DebtPayoff> {
    for (name, value) in [
        ("debt amount", debt_amount),
        ("monthly payment", monthly_payment),
        ("interest rate", annual_interest_rate),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(Error::InvalidInput(format!(
                "{} must be a non-negative number, got {}",
                name, value
            )));
        }
    }

    let monthly_rate = annual_interest_rate / 12.0;
    if debt_amount == 0.0 {
        return Ok(DebtPayoff {
            debt_amount,
            monthly_payment,
            annual_interest_rate,
            months_to_payoff: 0,
            years_to_payoff: 0.0,
            total_interest_paid: 0.0,
            total_amount_paid: 0.0,
            capped: false,
        });
    }

    let first_interest = debt_amount * monthly_rate;
    if monthly_payment <= first_interest {
        return Err(Error::PaymentTooSmall {
            payment: monthly_payment,
            interest: first_interest,
        });
    }

    let mut months: u32 = 0;
    let mut remaining = debt_amount;
    let mut total_interest = 0.0;

    while remaining > 0.0 && months < max_months {
        let interest_charge = remaining * monthly_rate;
        let principal_payment = (monthly_payment - interest_charge).min(remaining);

        total_interest += interest_charge;
        remaining -= principal_payment;
        months += 1;
    }

    let capped = remaining > 0.0;
    debug!(
        "Simulated payoff of {:.2}: {} months, {:.2} interest{}",
        debt_amount,
        months,
        total_interest,
        if capped { " (capped)" } else { "" }
    );

    Ok(DebtPayoff {
        debt_amount,
        monthly_payment,
        annual_interest_rate,
        months_to_payoff: months,
        years_to_payoff: f64::from(months) / 12.0,
        total_interest_paid: total_interest,
        total_amount_paid: debt_amount + total_interest,
        capped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_credit_card() {
        let payoff = simulate_debt_payoff(15000.0, 500.0, 0.18, DEFAULT_MAX_MONTHS).unwrap();
        assert_eq!(payoff.months_to_payoff, 41);
        assert!(!payoff.capped);
        assert!(payoff.total_interest_paid > 0.0);
        assert!((payoff.total_interest_paid - 5077.47).abs() < 0.01);
        assert!((payoff.years_to_payoff - 41.0 / 12.0).abs() < 1e-12);
        assert_eq!(
            payoff.total_amount_paid,
            payoff.debt_amount + payoff.total_interest_paid
        );
    }

    #[test]
    fn test_payment_too_small() {
        // First month's interest is exactly 225
        let err = simulate_debt_payoff(15000.0, 225.0, 0.18, DEFAULT_MAX_MONTHS).unwrap_err();
        assert!(matches!(err, Error::PaymentTooSmall { .. }));

        let err = simulate_debt_payoff(15000.0, 100.0, 0.18, DEFAULT_MAX_MONTHS).unwrap_err();
        assert!(err.to_string().contains("never be paid off"));
    }

    #[test]
    fn test_zero_interest() {
        let payoff = simulate_debt_payoff(1200.0, 100.0, 0.0, DEFAULT_MAX_MONTHS).unwrap();
        assert_eq!(payoff.months_to_payoff, 12);
        assert_eq!(payoff.total_interest_paid, 0.0);
        assert_eq!(payoff.total_amount_paid, 1200.0);
    }

    #[test]
    fn test_final_payment_is_partial() {
        // 1000 at 0% with 300/month: three full payments and a final 100
        let payoff = simulate_debt_payoff(1000.0, 300.0, 0.0, DEFAULT_MAX_MONTHS).unwrap();
        assert_eq!(payoff.months_to_payoff, 4);
        assert_eq!(payoff.total_amount_paid, 1000.0);
    }

    #[test]
    fn test_no_debt() {
        let payoff = simulate_debt_payoff(0.0, 50.0, 0.2, DEFAULT_MAX_MONTHS).unwrap();
        assert_eq!(payoff.months_to_payoff, 0);
        assert_eq!(payoff.total_interest_paid, 0.0);
    }

    #[test]
    fn test_no_debt_needs_no_payment() {
        let payoff = simulate_debt_payoff(0.0, 0.0, 0.18, DEFAULT_MAX_MONTHS).unwrap();
        assert_eq!(payoff.months_to_payoff, 0);
        assert_eq!(payoff.total_amount_paid, 0.0);
        assert!(!payoff.capped);
    }

    #[test]
    fn test_safety_cap() {
        // Barely above the first month's interest: takes longer than 50 years
        let payoff = simulate_debt_payoff(15000.0, 225.01, 0.18, DEFAULT_MAX_MONTHS).unwrap();
        assert_eq!(payoff.months_to_payoff, 600);
        assert!(payoff.capped);
        assert_eq!(
            payoff.total_amount_paid,
            payoff.debt_amount + payoff.total_interest_paid
        );
    }

    #[test]
    fn test_terminates_within_cap_for_valid_payments() {
        for debt in [500.0_f64, 2_500.0, 15_000.0, 80_000.0] {
            for rate in [0.0, 0.05, 0.18, 0.29] {
                let first_interest: f64 = debt * rate / 12.0;
                for factor in [1.01, 1.5, 3.0, 20.0] {
                    let payment = first_interest.max(1.0) * factor;
                    let payoff =
                        simulate_debt_payoff(debt, payment, rate, DEFAULT_MAX_MONTHS).unwrap();
                    assert!(payoff.months_to_payoff <= 600);
                    assert_eq!(
                        payoff.total_amount_paid,
                        debt + payoff.total_interest_paid
                    );
                }
            }
        }
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            simulate_debt_payoff(-1.0, 100.0, 0.1, DEFAULT_MAX_MONTHS),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            simulate_debt_payoff(1000.0, f64::NAN, 0.1, DEFAULT_MAX_MONTHS),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            simulate_debt_payoff(1000.0, 100.0, f64::INFINITY, DEFAULT_MAX_MONTHS),
            Err(Error::InvalidInput(_))
        ));
    }
}
