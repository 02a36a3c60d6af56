use thiserror::Error;

/// errors surfaced by the schedule engine
///
/// Every invalid call produces exactly one of these; no partial schedule
/// is ever returned alongside an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameter {
        field: &'static str,
        reason: String,
    },

    #[error("computation overflow: {message}")]
    ComputationOverflow {
        message: String,
    },

    #[error("invalid date: {message}")]
    InvalidDate {
        message: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("serialization error: {message}")]
    Serialization {
        message: String,
    },
}

impl ScheduleError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ScheduleError::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn overflow(message: impl Into<String>) -> Self {
        ScheduleError::ComputationOverflow {
            message: message.into(),
        }
    }

    /// true for caller input problems, including inputs too extreme to compute
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            ScheduleError::InvalidParameter { .. } | ScheduleError::ComputationOverflow { .. }
        )
    }

    /// offending input field, when the error can be attributed to one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ScheduleError::InvalidParameter { field, .. } => Some(*field),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ScheduleError {
    fn from(e: serde_json::Error) -> Self {
        ScheduleError::Serialization {
            message: e.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
