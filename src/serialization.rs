/// json request/response shapes used by the sale-creation workflow
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{Result, ScheduleError};
use crate::schedule::AmortizationCalculator;
use crate::types::{FinancingParameters, InstallmentSchedule};

/// calculation request as posted by the sale wizard
///
/// Amounts accept json numbers or decimal strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    pub total_amount: Decimal,
    pub initial_amount: Decimal,
    #[serde(default)]
    pub reservation_amount: Decimal,
    /// annual percentage, 12 means 12%
    pub interest_rate: Decimal,
    pub number_of_payments: i64,
    pub first_payment_date: NaiveDate,
    pub include_decimals: bool,
}

impl ScheduleRequest {
    /// convert into domain parameters
    pub fn into_parameters(self) -> Result<FinancingParameters> {
        let number_of_payments = u32::try_from(self.number_of_payments)
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| {
                ScheduleError::invalid(
                    "numberOfPayments",
                    format!("{} is not a positive installment count", self.number_of_payments),
                )
            })?;

        Ok(FinancingParameters {
            total_amount: Money::from_decimal(self.total_amount),
            initial_amount: Money::from_decimal(self.initial_amount),
            reservation_amount: Money::from_decimal(self.reservation_amount),
            interest_rate: Rate::from_percentage(self.interest_rate),
            number_of_payments,
            first_payment_date: self.first_payment_date,
            include_decimals: self.include_decimals,
        })
    }
}

/// one installment as returned to the workflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallmentView {
    pub expected_payment_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub coute_amount: Decimal,
}

/// calculation response, installments in sequence order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub installments: Vec<InstallmentView>,
}

impl ScheduleResponse {
    pub fn from_schedule(schedule: &InstallmentSchedule) -> Self {
        ScheduleResponse {
            installments: schedule
                .iter()
                .map(|installment| InstallmentView {
                    expected_payment_date: installment.expected_payment_date,
                    coute_amount: installment.coute_amount.as_decimal(),
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// parse a json request, calculate, and render the json response
pub fn calculate_from_json(calculator: &AmortizationCalculator, request: &str) -> Result<String> {
    let request: ScheduleRequest = serde_json::from_str(request)?;
    let params = request.into_parameters()?;
    let schedule = calculator.calculate(&params)?;
    ScheduleResponse::from_schedule(&schedule).to_json()
}
