pub mod config;
pub mod decimal;
pub mod errors;
pub mod schedule;
pub mod serialization;
pub mod types;

// re-export key types
pub use config::{CalculatorConfig, Rounding};
pub use decimal::{Money, Rate};
pub use errors::{Result, ScheduleError};
pub use schedule::{calculate_schedule, AmortizationCalculator};
pub use serialization::{calculate_from_json, InstallmentView, ScheduleRequest, ScheduleResponse};
pub use types::{FinancingParameters, Installment, InstallmentSchedule, InterestMethod};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
