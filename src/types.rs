use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::CalculatorConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{Result, ScheduleError};

/// interest model applied to the financed balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InterestMethod {
    /// fixed payment, interest charged on the outstanding balance each period
    #[default]
    ReducingBalance,
}

/// financing terms captured by the sale wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancingParameters {
    /// price of the sale before any upfront payment
    pub total_amount: Money,
    /// upfront payment made at signing
    pub initial_amount: Money,
    /// earlier deposit already credited against the price
    pub reservation_amount: Money,
    /// nominal annual rate
    pub interest_rate: Rate,
    pub number_of_payments: u32,
    pub first_payment_date: NaiveDate,
    /// keep minor units (cents) in installment amounts
    pub include_decimals: bool,
}

impl FinancingParameters {
    /// terms without a reservation deposit, keeping cents
    pub fn new(
        total_amount: Money,
        initial_amount: Money,
        interest_rate: Rate,
        number_of_payments: u32,
        first_payment_date: NaiveDate,
    ) -> Self {
        Self {
            total_amount,
            initial_amount,
            reservation_amount: Money::ZERO,
            interest_rate,
            number_of_payments,
            first_payment_date,
            include_decimals: true,
        }
    }

    pub fn with_reservation(mut self, reservation_amount: Money) -> Self {
        self.reservation_amount = reservation_amount;
        self
    }

    pub fn with_decimals(mut self, include_decimals: bool) -> Self {
        self.include_decimals = include_decimals;
        self
    }

    /// balance left to finance after the initial payment and reservation
    pub fn financed_principal(&self) -> Result<Money> {
        self.total_amount
            .checked_sub(self.initial_amount)
            .and_then(|rest| rest.checked_sub(self.reservation_amount))
            .ok_or_else(|| ScheduleError::overflow("financed principal out of range"))
    }

    /// check every input constraint and return the financed principal
    pub fn validate(&self, config: &CalculatorConfig) -> Result<Money> {
        if !self.total_amount.is_positive() {
            return Err(ScheduleError::invalid("totalAmount", "must be greater than zero"));
        }
        if self.initial_amount.is_negative() {
            return Err(ScheduleError::invalid("initialAmount", "must not be negative"));
        }
        if self.reservation_amount.is_negative() {
            return Err(ScheduleError::invalid("reservationAmount", "must not be negative"));
        }
        if self.interest_rate.is_negative() {
            return Err(ScheduleError::invalid("interestRate", "must not be negative"));
        }
        if self.number_of_payments == 0 {
            return Err(ScheduleError::invalid("numberOfPayments", "must be at least 1"));
        }
        if self.number_of_payments > config.max_installments {
            return Err(ScheduleError::invalid(
                "numberOfPayments",
                format!(
                    "{} exceeds the maximum of {} installments",
                    self.number_of_payments, config.max_installments
                ),
            ));
        }
        if self.initial_amount >= self.total_amount {
            return Err(ScheduleError::invalid(
                "initialAmount",
                format!(
                    "initial payment {} must be less than total amount {}",
                    self.initial_amount, self.total_amount
                ),
            ));
        }

        let principal = self.financed_principal()?;
        if !principal.is_positive() {
            return Err(ScheduleError::invalid(
                "reservationAmount",
                format!("nothing left to finance (financed principal {})", principal),
            ));
        }
        Ok(principal)
    }
}

/// one scheduled payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Installment {
    /// 1-based position in the schedule
    pub sequence_number: u32,
    pub expected_payment_date: NaiveDate,
    /// amount due, principal and interest combined
    pub coute_amount: Money,
}

/// installment schedule for a financed sale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallmentSchedule {
    pub installments: Vec<Installment>,
    pub financed_principal: Money,
    /// rounded regular installment; the last one may differ by the remainder
    pub periodic_payment: Money,
    /// sum of every installment
    pub total_owed: Money,
    pub total_interest: Money,
    pub interest_method: InterestMethod,
}

impl InstallmentSchedule {
    pub fn len(&self) -> usize {
        self.installments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.installments.is_empty()
    }

    /// installment by 1-based sequence number
    pub fn get(&self, sequence_number: u32) -> Option<&Installment> {
        let index = sequence_number.checked_sub(1)?;
        self.installments.get(index as usize)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Installment> {
        self.installments.iter()
    }

    pub fn first_payment_date(&self) -> Option<NaiveDate> {
        self.installments.first().map(|i| i.expected_payment_date)
    }

    pub fn last_payment_date(&self) -> Option<NaiveDate> {
        self.installments.last().map(|i| i.expected_payment_date)
    }

    /// sum of installment amounts as listed
    pub fn sum_of_installments(&self) -> Money {
        self.installments.iter().map(|i| i.coute_amount).sum()
    }
}

impl<'a> IntoIterator for &'a InstallmentSchedule {
    type Item = &'a Installment;
    type IntoIter = std::slice::Iter<'a, Installment>;

    fn into_iter(self) -> Self::IntoIter {
        self.installments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn params(total: i64, initial: i64) -> FinancingParameters {
        FinancingParameters::new(
            Money::from_major(total),
            Money::from_major(initial),
            Rate::from_percentage(dec!(12)),
            12,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        )
    }

    #[test]
    fn test_financed_principal() {
        let p = params(10_000, 1_000).with_reservation(Money::from_major(500));
        assert_eq!(p.validate(&CalculatorConfig::default()).unwrap(), Money::from_major(8_500));
    }

    #[test]
    fn test_initial_equal_to_total_rejected() {
        let err = params(5_000, 5_000).validate(&CalculatorConfig::default()).unwrap_err();
        assert_eq!(err.field(), Some("initialAmount"));
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_reservation_consuming_balance_rejected() {
        let p = params(5_000, 1_000).with_reservation(Money::from_major(4_000));
        let err = p.validate(&CalculatorConfig::default()).unwrap_err();
        assert_eq!(err.field(), Some("reservationAmount"));
    }

    #[test]
    fn test_parameter_bounds() {
        let config = CalculatorConfig::default();

        let mut p = params(10_000, 0);
        p.number_of_payments = 0;
        assert_eq!(p.validate(&config).unwrap_err().field(), Some("numberOfPayments"));

        p.number_of_payments = 75;
        assert_eq!(p.validate(&config).unwrap_err().field(), Some("numberOfPayments"));
        assert!(p.validate(&CalculatorConfig::extended(120)).is_ok());

        let mut p = params(10_000, 0);
        p.interest_rate = Rate::from_percentage(dec!(-1));
        assert_eq!(p.validate(&config).unwrap_err().field(), Some("interestRate"));

        let p = params(0, 0);
        assert_eq!(p.validate(&config).unwrap_err().field(), Some("totalAmount"));

        let p = params(10_000, -1);
        assert_eq!(p.validate(&config).unwrap_err().field(), Some("initialAmount"));

        let p = params(10_000, 0).with_reservation(Money::from_major(-5));
        assert_eq!(p.validate(&config).unwrap_err().field(), Some("reservationAmount"));
    }

    #[test]
    fn test_schedule_lookup_by_sequence() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let schedule = InstallmentSchedule {
            installments: vec![Installment {
                sequence_number: 1,
                expected_payment_date: date,
                coute_amount: Money::from_major(100),
            }],
            financed_principal: Money::from_major(100),
            periodic_payment: Money::from_major(100),
            total_owed: Money::from_major(100),
            total_interest: Money::ZERO,
            interest_method: InterestMethod::ReducingBalance,
        };

        assert!(schedule.get(0).is_none());
        assert_eq!(schedule.get(1).map(|i| i.coute_amount), Some(Money::from_major(100)));
        assert!(schedule.get(2).is_none());
        assert_eq!(schedule.first_payment_date(), Some(date));
        assert_eq!(schedule.last_payment_date(), Some(date));
        assert_eq!(schedule.sum_of_installments(), schedule.total_owed);
    }
}
