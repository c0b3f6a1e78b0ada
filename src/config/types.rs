//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::speed::{SmootherKind, DEFAULT_LP_NORM};

/// Speed calculator configuration
///
/// Bound once by [`SpeedCalculator::init`](crate::speed::SpeedCalculator::init)
/// and never changed afterwards; re-binding rebuilds the smoother.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedCalculatorConfig {
    /// Exponent of the delta magnitude (2 = Euclidean, `inf` = max axis)
    #[serde(default = "default_lp_norm")]
    pub lp_norm: f64,

    /// Apply smoothing to the speed estimate
    #[serde(default)]
    pub should_smooth: bool,

    /// Smoothing halflife, in the same time units as the caller's `dt`
    #[serde(default = "default_smooth_halflife")]
    pub smooth_halflife: f64,

    /// Use the trend-aware smoother instead of the simple one
    #[serde(default)]
    pub use_linear: bool,
}

fn default_lp_norm() -> f64 {
    DEFAULT_LP_NORM
}
fn default_smooth_halflife() -> f64 {
    50.0
}

impl Default for SpeedCalculatorConfig {
    fn default() -> Self {
        Self {
            lp_norm: default_lp_norm(),
            should_smooth: false,
            smooth_halflife: default_smooth_halflife(),
            use_linear: false,
        }
    }
}

impl SpeedCalculatorConfig {
    /// Smoothing configuration with the given halflife and variant
    pub fn smoothed(smooth_halflife: f64, use_linear: bool) -> Self {
        Self {
            should_smooth: true,
            smooth_halflife,
            use_linear,
            ..Self::default()
        }
    }

    /// Smoother variant selected by `use_linear`
    pub fn smoother_kind(&self) -> SmootherKind {
        SmootherKind::from_use_linear(self.use_linear)
    }
}
