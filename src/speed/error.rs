//! Speed Estimation Error Types
//!
//! Both variants are local precondition violations. They are surfaced to the
//! caller as-is: a rejected sample never reaches the smoother, so the filter
//! history stays exactly as it was before the call.

use thiserror::Error;

/// Result type for speed estimation operations
pub type Result<T> = std::result::Result<T, SpeedError>;

/// Speed estimation error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpeedError {
    /// Configuration rejected at `init` (or by the magnitude function)
    #[error("Invalid speed configuration: {0}")]
    InvalidConfiguration(String),

    /// Sample rejected at `calculate_speed`
    #[error("Invalid input sample: delta=({dx}, {dy}), dt={dt}")]
    InvalidSample {
        /// Horizontal delta of the rejected sample
        dx: f64,
        /// Vertical delta of the rejected sample
        dy: f64,
        /// Elapsed time of the rejected sample
        dt: f64,
    },
}

impl SpeedError {
    /// Check whether this error came from configuration validation
    pub fn is_configuration(&self) -> bool {
        matches!(self, SpeedError::InvalidConfiguration(_))
    }

    /// Check whether this error came from a rejected sample
    pub fn is_sample(&self) -> bool {
        matches!(self, SpeedError::InvalidSample { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let error = SpeedError::InvalidConfiguration("lp_norm".to_string());
        assert!(error.is_configuration());
        assert!(!error.is_sample());

        let error = SpeedError::InvalidSample {
            dx: 1.0,
            dy: 2.0,
            dt: 0.0,
        };
        assert!(error.is_sample());
        assert!(!error.is_configuration());
    }

    #[test]
    fn test_error_display() {
        let error = SpeedError::InvalidSample {
            dx: 1.0,
            dy: -2.0,
            dt: 0.0,
        };
        assert_eq!(
            error.to_string(),
            "Invalid input sample: delta=(1, -2), dt=0"
        );

        let error = SpeedError::InvalidConfiguration("lp_norm must be positive".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid speed configuration: lp_norm must be positive"
        );
    }
}
