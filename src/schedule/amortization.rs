use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::CalculatorConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{Result, ScheduleError};
use crate::schedule::calendar::payment_dates;
use crate::types::{FinancingParameters, Installment, InstallmentSchedule, InterestMethod};

/// fixed-payment amortization calculator
///
/// Stateless apart from its configuration; a single instance can be shared
/// freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmortizationCalculator {
    config: CalculatorConfig,
}

impl AmortizationCalculator {
    pub fn new(config: CalculatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// compute the installment schedule for the given financing terms
    pub fn calculate(&self, params: &FinancingParameters) -> Result<InstallmentSchedule> {
        let principal = params.validate(&self.config)?;
        let count = params.number_of_payments;
        let periodic_rate = params.interest_rate.monthly_rate();

        debug!(
            principal = %principal,
            annual_rate = %params.interest_rate,
            installments = count,
            first_payment = %params.first_payment_date,
            "calculating installment schedule"
        );

        let exact_payment = periodic_payment(principal, periodic_rate, count)?;
        let exact_total = if periodic_rate.is_zero() {
            principal.as_decimal()
        } else {
            exact_payment
                .checked_mul(Decimal::from(count))
                .ok_or_else(|| ScheduleError::overflow("total owed out of range"))?
        };

        let scale = self.config.output_scale(params.include_decimals);
        let regular = self.round_amount(exact_payment, scale);
        let total_owed = self.round_amount(exact_total, scale);

        let regular_sum = regular
            .checked_mul(Decimal::from(count - 1))
            .ok_or_else(|| ScheduleError::overflow("installment sum out of range"))?;
        let last = total_owed
            .checked_sub(regular_sum)
            .ok_or_else(|| ScheduleError::overflow("final installment out of range"))?;

        if !regular.is_positive() || !last.is_positive() {
            warn!(
                principal = %principal,
                installments = count,
                regular = %regular,
                last = %last,
                "balance too small to spread at this precision"
            );
            return Err(ScheduleError::invalid(
                "numberOfPayments",
                format!(
                    "financed balance {} cannot be spread over {} installments at {} decimal places",
                    principal, count, scale
                ),
            ));
        }

        let dates = payment_dates(params.first_payment_date, count)?;
        let installments: Vec<Installment> = dates
            .into_iter()
            .zip(1..=count)
            .map(|(expected_payment_date, sequence_number)| Installment {
                sequence_number,
                expected_payment_date,
                coute_amount: if sequence_number == count { last } else { regular },
            })
            .collect();

        let total_interest = total_owed - principal;

        debug!(
            regular = %regular,
            last = %last,
            total_owed = %total_owed,
            total_interest = %total_interest,
            "installment schedule calculated"
        );

        Ok(InstallmentSchedule {
            installments,
            financed_principal: principal,
            periodic_payment: regular,
            total_owed,
            total_interest,
            interest_method: InterestMethod::ReducingBalance,
        })
    }

    fn round_amount(&self, value: Decimal, scale: u32) -> Money {
        Money::from_decimal(value.round_dp_with_strategy(scale, self.config.rounding.strategy()))
    }
}

/// schedule with the default configuration
pub fn calculate_schedule(params: &FinancingParameters) -> Result<InstallmentSchedule> {
    AmortizationCalculator::default().calculate(params)
}

/// unrounded fixed payment that retires `principal` over `periods` periods
///
/// `payment = P * r * (1 + r)^n / ((1 + r)^n - 1)`, or `P / n` when `r` is zero.
pub fn periodic_payment(principal: Money, periodic_rate: Rate, periods: u32) -> Result<Decimal> {
    if periods == 0 {
        return Err(ScheduleError::invalid("numberOfPayments", "must be at least 1"));
    }

    let p = principal.as_decimal();
    let r = periodic_rate.as_decimal();

    if r.is_zero() {
        return p
            .checked_div(Decimal::from(periods))
            .ok_or_else(|| ScheduleError::overflow("payment out of range"));
    }

    let growth = compound_factor(r, periods)?;
    let denominator = growth - Decimal::ONE;
    if denominator <= Decimal::ZERO {
        return Err(ScheduleError::overflow(format!(
            "periodic rate {} too small to amortize over {} periods",
            r, periods
        )));
    }

    p.checked_mul(r)
        .and_then(|v| v.checked_mul(growth))
        .and_then(|v| v.checked_div(denominator))
        .ok_or_else(|| ScheduleError::overflow("payment out of range"))
}

/// (1 + r)^n
fn compound_factor(rate: Decimal, periods: u32) -> Result<Decimal> {
    let base = Decimal::ONE + rate;
    let mut factor = Decimal::ONE;
    for _ in 0..periods {
        factor = factor
            .checked_mul(base)
            .ok_or_else(|| ScheduleError::overflow("compound factor out of range"))?;
    }
    Ok(factor)
}
