//! Smoother selection and dispatch
//!
//! The two smoother variants form a closed set chosen once when the
//! calculator is configured. [`Smoother`] holds the selected variant and
//! forwards every sample to it through [`Smoother::smooth`].

use serde::{Deserialize, Serialize};

use super::error::{Result, SpeedError};
use super::linear::LinearExponentialSmoother;
use super::simple::SimpleExponentialSmoother;

/// Smoother variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SmootherKind {
    /// Dual-window exponential lowpass
    #[default]
    Simple,

    /// Dual-window lowpass with damped trend extrapolation
    Linear,
}

impl SmootherKind {
    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::Simple => "Exponential lowpass (window/cutoff minimum)",
            Self::Linear => "Trend-aware exponential lowpass (damped Holt)",
        }
    }

    /// Select the variant for a `use_linear` flag
    pub fn from_use_linear(use_linear: bool) -> Self {
        if use_linear {
            Self::Linear
        } else {
            Self::Simple
        }
    }
}

impl std::fmt::Display for SmootherKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Simple => write!(f, "Simple"),
            Self::Linear => write!(f, "Linear"),
        }
    }
}

impl std::str::FromStr for SmootherKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "linear" => Ok(Self::Linear),
            _ => Err(format!("Unknown smoother kind: {}", s)),
        }
    }
}

/// Copy of a smoother's accumulators, for diagnostics and graphing
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SmootherSnapshot {
    /// Variant that produced this snapshot
    pub kind: SmootherKind,
    /// Slow (window) track total
    pub window_total: f64,
    /// Fast (cutoff) track total
    pub cutoff_total: f64,
    /// Window track trend, linear variant only
    pub window_trend_total: Option<f64>,
    /// Cutoff track trend, linear variant only
    pub cutoff_trend_total: Option<f64>,
}

impl SmootherSnapshot {
    /// Check that every accumulator holds a finite value
    pub fn is_finite(&self) -> bool {
        self.window_total.is_finite()
            && self.cutoff_total.is_finite()
            && self.window_trend_total.map_or(true, f64::is_finite)
            && self.cutoff_trend_total.map_or(true, f64::is_finite)
    }
}

/// Configured smoother, owned by a single speed calculator
#[derive(Debug, Clone)]
pub enum Smoother {
    /// Simple exponential smoother
    Simple(SimpleExponentialSmoother),
    /// Linear (trend-aware) exponential smoother
    Linear(LinearExponentialSmoother),
}

impl Smoother {
    /// Build a fresh smoother of the given kind
    pub fn new(kind: SmootherKind, halflife: f64) -> Result<Self> {
        Ok(match kind {
            SmootherKind::Simple => Self::Simple(SimpleExponentialSmoother::new(halflife)?),
            SmootherKind::Linear => Self::Linear(LinearExponentialSmoother::new(halflife)?),
        })
    }

    /// Feed one magnitude sample covering `time_delta`, returning the filtered value
    pub fn smooth(&mut self, speed: f64, time_delta: f64) -> f64 {
        match self {
            Self::Simple(smoother) => smoother.smooth(speed, time_delta),
            Self::Linear(smoother) => smoother.smooth(speed, time_delta),
        }
    }

    /// Variant of this smoother
    pub fn kind(&self) -> SmootherKind {
        match self {
            Self::Simple(_) => SmootherKind::Simple,
            Self::Linear(_) => SmootherKind::Linear,
        }
    }

    /// Current accumulator values
    pub fn snapshot(&self) -> SmootherSnapshot {
        match self {
            Self::Simple(smoother) => smoother.snapshot(),
            Self::Linear(smoother) => smoother.snapshot(),
        }
    }
}

/// Check that a halflife yields a coefficient strictly inside (0, 1)
pub(crate) fn validate_halflife(name: &str, halflife: f64) -> Result<()> {
    if !halflife.is_finite() || halflife <= 0.0 {
        return Err(SpeedError::InvalidConfiguration(format!(
            "{} must be a positive finite number, got {}",
            name, halflife
        )));
    }

    let coefficient = halflife_coefficient(halflife);
    if coefficient <= 0.0 || coefficient >= 1.0 {
        return Err(SpeedError::InvalidConfiguration(format!(
            "{} of {} gives a degenerate filter coefficient ({})",
            name, halflife, coefficient
        )));
    }
    Ok(())
}

/// Per-unit-time retention factor for a halflife: `0.5^(1/halflife)`
pub(crate) fn halflife_coefficient(halflife: f64) -> f64 {
    0.5f64.powf(halflife.recip())
}

/// Faster companion coefficient: `1 - sqrt(1 - coefficient)`
pub(crate) fn cutoff_coefficient(coefficient: f64) -> f64 {
    1.0 - (1.0 - coefficient).sqrt()
}

/// Blend weight of a new sample after `time_delta`: `1 - coefficient^time_delta`
#[inline]
pub(crate) fn time_adjusted(coefficient: f64, time_delta: f64) -> f64 {
    1.0 - coefficient.powf(time_delta)
}
