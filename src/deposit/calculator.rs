//! Final balance and interest earned at maturity
//!
//! Periodic payouts (monthly, quarterly, annually) are reinvested and
//! compound at the nominal rate divided by the number of periods per year.
//! Interest paid at maturity is never reinvested, so the balance grows by
//! simple interest over the whole term.

use super::{InterestPaidFrequency, TermDepositInput, TermDepositResult};
use crate::error::{DepositError, Result};
use log::debug;

/// Largest balance whose whole-unit value is exact in an `f64` (2^53)
pub const MAX_FINAL_BALANCE: f64 = 9_007_199_254_740_992.0;

/// Convert a percentage rate to a decimal fraction (1.1 -> 0.011)
pub fn rate_fraction(interest_rate: f64) -> f64 {
    interest_rate / 100.0
}

/// Round to cents
pub fn round_to_two_decimal_places(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Balance at the end of the term before rounding to whole units
pub fn final_balance_unrounded(input: &TermDepositInput) -> f64 {
    balance_after_years(input, input.investment_term)
}

/// Balance (including accrued, unpaid interest) after `years` of the term
pub(crate) fn balance_after_years(input: &TermDepositInput, years: u32) -> f64 {
    let rate = rate_fraction(input.interest_rate);

    if input.interest_paid.compounds() {
        let periods = input.interest_paid.periods_per_year();
        let periodic_rate = rate / periods as f64;
        let exponent = i32::try_from(years.saturating_mul(periods)).unwrap_or(i32::MAX);
        input.deposit_amount * (1.0 + periodic_rate).powi(exponent)
    } else {
        input.deposit_amount * (1.0 + rate * years as f64)
    }
}

/// Whether the final balance can be expressed exactly in whole units
pub fn balance_in_range(input: &TermDepositInput) -> bool {
    final_balance_unrounded(input) <= MAX_FINAL_BALANCE
}

/// Calculate final balance and total interest earned
///
/// Both figures are whole currency units. Interest is taken from the
/// rounded balance so the two always agree. Inputs must satisfy
/// `balance_in_range`; validated forms always do.
pub fn calculate(input: &TermDepositInput) -> TermDepositResult {
    let unrounded = final_balance_unrounded(input);
    let final_balance = unrounded.round() as i64;
    let total_interest_earned = (final_balance as f64 - input.deposit_amount).round() as i64;

    debug!(
        "deposit={} rate={}% term={}y paid={} -> balance={:.4} (rounded {}), interest={}",
        input.deposit_amount,
        input.interest_rate,
        input.investment_term,
        input.interest_paid,
        unrounded,
        final_balance,
        total_interest_earned,
    );

    TermDepositResult {
        final_balance,
        total_interest_earned,
    }
}

/// Calculate from loosely typed parts, parsing the frequency
///
/// Fails with `InvalidFrequency` when `interest_paid` is not one of the
/// four recognized values, and with `BalanceOutOfRange` when the final
/// balance exceeds `MAX_FINAL_BALANCE`. Nothing is calculated in either case.
pub fn calculate_from_parts(
    deposit_amount: f64,
    interest_rate: f64,
    investment_term: u32,
    interest_paid: &str,
) -> Result<TermDepositResult> {
    let interest_paid: InterestPaidFrequency = interest_paid.parse()?;
    let input =
        TermDepositInput::new(deposit_amount, interest_rate, investment_term, interest_paid);
    if !balance_in_range(&input) {
        return Err(DepositError::BalanceOutOfRange(final_balance_unrounded(&input)));
    }
    Ok(calculate(&input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deposit::InterestPaidFrequency::*;
    use approx::assert_relative_eq;

    fn input(deposit: f64, rate: f64, term: u32, paid: InterestPaidFrequency) -> TermDepositInput {
        TermDepositInput::new(deposit, rate, term, paid)
    }

    #[test]
    fn test_rate_fraction() {
        assert_relative_eq!(rate_fraction(1.1), 0.011, epsilon = 1e-15);
        assert_relative_eq!(rate_fraction(4.5), 0.045, epsilon = 1e-15);
    }

    #[test]
    fn test_round_to_two_decimal_places() {
        assert_eq!(round_to_two_decimal_places(1.641651699993), 1.64);
        assert_eq!(round_to_two_decimal_places(10333.64331), 10333.64);
    }

    #[test]
    fn test_annually_scenario() {
        let deposit = input(10_000.0, 1.1, 3, Annually);

        // 10000 * 1.011^3
        let unrounded = final_balance_unrounded(&deposit);
        assert_relative_eq!(unrounded, 10_333.643310, epsilon = 1e-4);
        assert_eq!(round_to_two_decimal_places(unrounded), 10_333.64);

        let result = calculate(&deposit);
        assert_eq!(result.final_balance, 10_334);
        assert_eq!(result.total_interest_earned, 334);
    }

    #[test]
    fn test_at_maturity_scenario() {
        // Simple interest: 10000 * (1 + 0.011 * 3)
        let result = calculate(&input(10_000.0, 1.1, 3, AtMaturity));
        assert_eq!(result.final_balance, 10_330);
        assert_eq!(result.total_interest_earned, 330);
    }

    #[test]
    fn test_periodic_compounding() {
        let monthly = final_balance_unrounded(&input(10_000.0, 1.1, 3, Monthly));
        let quarterly = final_balance_unrounded(&input(10_000.0, 1.1, 3, Quarterly));
        assert_relative_eq!(monthly, 10_335.349165, epsilon = 1e-4);
        assert_relative_eq!(quarterly, 10_335.037287, epsilon = 1e-4);

        assert_eq!(calculate(&input(10_000.0, 1.1, 3, Monthly)).final_balance, 10_335);

        let larger = calculate(&input(25_000.0, 4.5, 5, Monthly));
        assert_eq!(larger.final_balance, 31_295);
        assert_eq!(larger.total_interest_earned, 6_295);
    }

    #[test]
    fn test_one_year_annual_matches_at_maturity() {
        let cases = [(10_000.0, 1.1), (2_500.0, 3.75), (1.0, 0.01), (750_000.0, 6.2)];
        for (deposit, rate) in cases {
            let annual = calculate(&input(deposit, rate, 1, Annually));
            let maturity = calculate(&input(deposit, rate, 1, AtMaturity));
            assert_eq!(annual, maturity, "deposit={} rate={}", deposit, rate);
        }
    }

    #[test]
    fn test_balance_never_below_deposit() {
        for paid in InterestPaidFrequency::ALL {
            for term in [1, 2, 5, 10, 30] {
                for rate in [0.01, 0.5, 1.1, 5.0, 12.0] {
                    for deposit in [1.0, 100.0, 10_000.0, 1_000_000.0] {
                        let result = calculate(&input(deposit, rate, term, paid));
                        assert!(result.final_balance as f64 >= deposit);
                        assert!(result.total_interest_earned >= 0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_interest_consistent_with_balance() {
        for paid in InterestPaidFrequency::ALL {
            for term in 1..=30 {
                let deposit = 12_345.0;
                let result = calculate(&input(deposit, 2.35, term, paid));
                assert_eq!(
                    result.total_interest_earned,
                    result.final_balance - deposit as i64
                );
            }
        }
    }

    #[test]
    fn test_monotonic_in_rate_and_term() {
        for paid in InterestPaidFrequency::ALL {
            let mut previous = 0;
            for step in 1..=100 {
                let rate = step as f64 * 0.1;
                let balance = calculate(&input(50_000.0, rate, 7, paid)).final_balance;
                assert!(balance >= previous, "{} rate {}", paid, rate);
                previous = balance;
            }

            let mut previous = 0;
            for term in 1..=30 {
                let balance = calculate(&input(50_000.0, 3.3, term, paid)).final_balance;
                assert!(balance >= previous, "{} term {}", paid, term);
                previous = balance;
            }
        }
    }

    #[test]
    fn test_more_frequent_compounding_grows_faster() {
        for term in 1..=30 {
            for rate in [0.25, 1.1, 4.0, 9.9] {
                let base = input(20_000.0, rate, term, Monthly);
                let monthly = calculate(&base).final_balance;
                let quarterly = calculate(&base.with_frequency(Quarterly)).final_balance;
                let annually = calculate(&base.with_frequency(Annually)).final_balance;
                assert!(monthly >= quarterly, "term {} rate {}", term, rate);
                assert!(quarterly >= annually, "term {} rate {}", term, rate);
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let deposit = input(10_000.0, 1.1, 3, Quarterly);
        assert_eq!(calculate(&deposit), calculate(&deposit));
    }

    #[test]
    fn test_calculate_from_parts() {
        let result = calculate_from_parts(10_000.0, 1.1, 3, "annually").unwrap();
        assert_eq!(result.final_balance, 10_334);

        let result = calculate_from_parts(10_000.0, 1.1, 3, "at-maturity").unwrap();
        assert_eq!(result.final_balance, 10_330);
    }

    #[test]
    fn test_calculate_from_parts_invalid_frequency() {
        match calculate_from_parts(10_000.0, 1.1, 3, "fortnightly") {
            Err(DepositError::InvalidFrequency(value)) => assert_eq!(value, "fortnightly"),
            other => panic!("expected InvalidFrequency, got {:?}", other),
        }
    }

    #[test]
    fn test_oversized_balance_rejected() {
        // Would saturate i64 and report negative interest if calculated
        assert!(!balance_in_range(&input(1e19, 1.1, 3, Annually)));
        match calculate_from_parts(1e19, 1.1, 3, "annually") {
            Err(DepositError::BalanceOutOfRange(balance)) => assert!(balance > 1e19),
            other => panic!("expected BalanceOutOfRange, got {:?}", other),
        }

        assert!(balance_in_range(&input(1_000_000_000.0, 5.0, 30, Monthly)));
    }

    #[test]
    fn test_huge_term_does_not_overflow() {
        let unrounded = final_balance_unrounded(&input(1_000.0, 1.1, u32::MAX, Monthly));
        assert!(unrounded.is_infinite());

        let unrounded = final_balance_unrounded(&input(1_000.0, 1.1, u32::MAX, AtMaturity));
        assert!(unrounded.is_finite());

        assert!(matches!(
            calculate_from_parts(1_000.0, 1.1, u32::MAX, "quarterly"),
            Err(DepositError::BalanceOutOfRange(_))
        ));
    }
}
