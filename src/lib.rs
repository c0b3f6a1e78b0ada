//! # lamco-pointer-speed
//!
//! Pointer velocity estimation for acceleration curves.
//!
//! Consumes one raw pointer sample at a time (`dx`, `dy` and the time
//! elapsed since the previous sample) and produces a scalar speed. The
//! speed can optionally be smoothed with a time-variant exponential filter
//! that stays stable under irregular poll rates.
//!
//! # Architecture
//!
//! ```text
//! lamco-pointer-speed
//!   ├─> config  (TOML-loadable SpeedCalculatorConfig)
//!   └─> speed   (SpeedCalculator → lp_magnitude → Smoother)
//! ```
//!
//! # Data Flow
//!
//! **Input Path:** Device deltas → SpeedCalculator → speed → acceleration curve
//!
//! Reading devices and applying the acceleration curve are left to the
//! caller.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Configuration loading and validation
pub mod config;

/// Speed estimation and smoothing
///
/// This module provides the per-sample speed pipeline:
///
/// - **Magnitude**: Lp-norm of the delta vector (Euclidean by default)
/// - **Simple smoother**: window/cutoff exponential lowpass pair
/// - **Linear smoother**: the same pair with damped trend extrapolation
/// - **SpeedCalculator**: binds a configuration and drives the above
pub mod speed;

pub use config::{Config, SpeedCalculatorConfig};
pub use speed::{SpeedCalculator, SpeedError};
