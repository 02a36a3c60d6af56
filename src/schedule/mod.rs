pub mod amortization;
pub mod calendar;

pub use amortization::{calculate_schedule, periodic_payment, AmortizationCalculator};
pub use calendar::{add_months_clamped, payment_dates};
