use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ScheduleError};

/// installment ceiling offered by the sale wizard
pub const DEFAULT_MAX_INSTALLMENTS: u32 = 74;

/// hard upper bound for any configuration (50 years of monthly payments)
pub const ABSOLUTE_MAX_INSTALLMENTS: u32 = 600;

const MAX_MINOR_UNIT_SCALE: u32 = 8;

/// midpoint rounding applied to installment amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Rounding {
    /// commercial rounding, 0.005 -> 0.01
    #[default]
    HalfAwayFromZero,
    /// banker's rounding
    HalfEven,
}

impl Rounding {
    pub(crate) fn strategy(self) -> RoundingStrategy {
        match self {
            Rounding::HalfAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
            Rounding::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

/// calculator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// largest accepted `number_of_payments`
    pub max_installments: u32,
    /// decimal places of the currency's minor unit, used when decimals are kept
    pub minor_unit_scale: u32,
    pub rounding: Rounding,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_installments: DEFAULT_MAX_INSTALLMENTS,
            minor_unit_scale: 2,
            rounding: Rounding::HalfAwayFromZero,
        }
    }
}

impl CalculatorConfig {
    /// configuration for longer, mortgage-style plans
    pub fn extended(max_installments: u32) -> Self {
        Self {
            max_installments,
            ..Self::default()
        }
    }

    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// decimal places used for installment amounts
    pub fn output_scale(&self, include_decimals: bool) -> u32 {
        if include_decimals {
            self.minor_unit_scale
        } else {
            0
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_installments == 0 {
            return Err(ScheduleError::InvalidConfiguration {
                message: "max_installments must be at least 1".to_string(),
            });
        }
        if self.max_installments > ABSOLUTE_MAX_INSTALLMENTS {
            return Err(ScheduleError::InvalidConfiguration {
                message: format!(
                    "max_installments {} exceeds the supported maximum of {}",
                    self.max_installments, ABSOLUTE_MAX_INSTALLMENTS
                ),
            });
        }
        if self.minor_unit_scale > MAX_MINOR_UNIT_SCALE {
            return Err(ScheduleError::InvalidConfiguration {
                message: format!(
                    "minor_unit_scale {} exceeds {}",
                    self.minor_unit_scale, MAX_MINOR_UNIT_SCALE
                ),
            });
        }
        Ok(())
    }

    /// parse and validate a json configuration document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CalculatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CalculatorConfig::default();
        assert_eq!(config.max_installments, 74);
        assert_eq!(config.output_scale(true), 2);
        assert_eq!(config.output_scale(false), 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_extended_config() {
        let config = CalculatorConfig::extended(360).with_rounding(Rounding::HalfEven);
        assert_eq!(config.max_installments, 360);
        assert_eq!(config.rounding, Rounding::HalfEven);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            CalculatorConfig::extended(0).validate(),
            Err(ScheduleError::InvalidConfiguration { .. })
        ));
        assert!(CalculatorConfig::extended(601).validate().is_err());

        let config = CalculatorConfig {
            minor_unit_scale: 9,
            ..CalculatorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = CalculatorConfig::from_json(r#"{ "max_installments": 120 }"#).unwrap();
        assert_eq!(config.max_installments, 120);
        assert_eq!(config.minor_unit_scale, 2);
        assert_eq!(config.rounding, Rounding::HalfAwayFromZero);

        assert!(CalculatorConfig::from_json(r#"{ "max_installments": 0 }"#).is_err());
        assert!(matches!(
            CalculatorConfig::from_json("not json"),
            Err(ScheduleError::Serialization { .. })
        ));
    }
}
