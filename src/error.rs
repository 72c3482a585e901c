use crate::core::session::SessionStatus;
use thiserror::Error;

/// Main error type for the planner
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Invalid transition: cannot {action} while session is {status}")]
    InvalidTransition {
        action: &'static str,
        status: SessionStatus,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Generation interrupted: {0}")]
    Interrupted(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PlannerError>;

impl PlannerError {
    pub(crate) fn invalid_transition(action: &'static str, status: SessionStatus) -> Self {
        PlannerError::InvalidTransition { action, status }
    }

    /// Whether the boundary can ignore this error and keep the session alive.
    ///
    /// Only a rejected transition qualifies: the session is left exactly as it was.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, PlannerError::InvalidTransition { .. })
    }

    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            PlannerError::InvalidTransition { .. } => "INVALID_TRANSITION",
            PlannerError::Validation(_) => "VALIDATION_ERROR",
            PlannerError::Config(_) => "CONFIG_ERROR",
            PlannerError::Serialization(_) => "SERIALIZATION_ERROR",
            PlannerError::Interrupted(_) => "INTERRUPTED",
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
                "recoverable": self.is_recoverable()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_message() {
        let err = PlannerError::invalid_transition("resolve", SessionStatus::Idle);
        assert_eq!(
            err.to_string(),
            "Invalid transition: cannot resolve while session is idle"
        );
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_invalid_transition_error_code() {
        let err = PlannerError::invalid_transition("submit", SessionStatus::Generating);
        assert_eq!(
            err.to_string(),
            "Invalid transition: cannot submit while session is generating"
        );
        assert_eq!(err.error_code(), "INVALID_TRANSITION");
    }

    #[test]
    fn test_error_payload() {
        let err = PlannerError::Validation("days must be an integer".to_string());
        let payload = err.to_error_payload();
        assert_eq!(payload["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(payload["error"]["recoverable"], false);
        assert!(payload["error"]["message"]
            .as_str()
            .unwrap()
            .contains("days must be an integer"));
    }
}
