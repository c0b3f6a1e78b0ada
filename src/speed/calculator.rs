//! Speed calculator
//!
//! Per-sample entry point: turns a raw `(dx, dy, dt)` sample into a speed,
//! optionally smoothed.
//!
//! ```text
//! (dx, dy, dt)
//!   └─> lp_magnitude(dx, dy, lp_norm)
//!       ├─> smoothing off: magnitude / dt
//!       └─> smoothing on:  Smoother::smooth(magnitude, dt)
//! ```
//!
//! The smoother receives the magnitude itself, not `magnitude / dt`. Its
//! time-adjusted coefficients already account for the elapsed time.

use tracing::{debug, trace, warn};

use super::error::{Result, SpeedError};
use super::magnitude::lp_magnitude;
use super::smoother::{validate_halflife, Smoother, SmootherKind, SmootherSnapshot};
use crate::config::SpeedCalculatorConfig;

/// Pointer speed estimator for one input stream
///
/// Samples must be fed in temporal order. Independent streams need
/// independent calculators; nothing is shared between instances.
#[derive(Debug, Clone)]
pub struct SpeedCalculator {
    /// Bound configuration
    config: SpeedCalculatorConfig,

    /// Present only while smoothing is enabled
    smoother: Option<Smoother>,

    /// Samples accepted since the last `init`
    samples_processed: u64,
}

impl SpeedCalculator {
    /// Create a calculator that returns the unsmoothed Euclidean speed
    pub fn new() -> Self {
        Self {
            config: SpeedCalculatorConfig::default(),
            smoother: None,
            samples_processed: 0,
        }
    }

    /// Create a calculator bound to `config`
    pub fn with_config(config: SpeedCalculatorConfig) -> Result<Self> {
        let mut calculator = Self::new();
        calculator.init(config)?;
        Ok(calculator)
    }

    /// Check a configuration without binding it
    pub fn validate_config(config: &SpeedCalculatorConfig) -> Result<()> {
        if config.lp_norm.is_nan() || config.lp_norm <= 0.0 {
            return Err(SpeedError::InvalidConfiguration(format!(
                "lp_norm must be positive, got {}",
                config.lp_norm
            )));
        }

        if config.should_smooth {
            validate_halflife("smooth_halflife", config.smooth_halflife)?;
        }

        Ok(())
    }

    /// Bind a configuration and rebuild the smoother from scratch
    ///
    /// Any previous filter history is discarded. If the configuration is
    /// rejected, the calculator keeps its previous configuration and state.
    pub fn init(&mut self, config: SpeedCalculatorConfig) -> Result<()> {
        Self::validate_config(&config)?;

        let smoother = if config.should_smooth {
            Some(Smoother::new(config.smoother_kind(), config.smooth_halflife)?)
        } else {
            None
        };

        debug!(
            "Speed calculator configured: lp_norm={}, smoothing={}, halflife={}, kind={}",
            config.lp_norm,
            config.should_smooth,
            config.smooth_halflife,
            config.smoother_kind()
        );

        self.config = config;
        self.smoother = smoother;
        self.samples_processed = 0;

        Ok(())
    }

    /// Compute the speed for one sample
    ///
    /// `dt` is the time elapsed since the previous sample and must be
    /// positive. A sample whose magnitude or speed is not representable as
    /// a finite `f64` is rejected too. A rejected sample leaves the
    /// smoother untouched.
    pub fn calculate_speed(&mut self, dx: f64, dy: f64, dt: f64) -> Result<f64> {
        if !dt.is_finite() || dt <= 0.0 || !dx.is_finite() || !dy.is_finite() {
            return Err(rejected_sample(dx, dy, dt, "non-finite or non-positive input"));
        }

        let magnitude = lp_magnitude(dx, dy, self.config.lp_norm)?;
        if !magnitude.is_finite() {
            return Err(rejected_sample(dx, dy, dt, "magnitude overflow"));
        }

        // The update is staged so an overflow cannot reach the live accumulators
        let (speed, staged) = match self.smoother.as_ref() {
            Some(smoother) => {
                let mut staged = smoother.clone();
                (staged.smooth(magnitude, dt), Some(staged))
            }
            None => (magnitude / dt, None),
        };

        let state_finite = staged
            .as_ref()
            .map_or(true, |smoother| smoother.snapshot().is_finite());
        if !speed.is_finite() || !state_finite {
            return Err(rejected_sample(dx, dy, dt, "speed overflow"));
        }

        if staged.is_some() {
            self.smoother = staged;
        }
        self.samples_processed += 1;

        trace!(
            "Pointer speed: delta=({:.2}, {:.2}), dt={:.4}, magnitude={:.4}, speed={:.4}",
            dx,
            dy,
            dt,
            magnitude,
            speed
        );

        Ok(speed)
    }

    /// Bound configuration
    pub fn config(&self) -> &SpeedCalculatorConfig {
        &self.config
    }

    /// Check if smoothing is applied
    pub fn is_smoothing(&self) -> bool {
        self.smoother.is_some()
    }

    /// Active smoother variant, if smoothing is enabled
    pub fn smoother_kind(&self) -> Option<SmootherKind> {
        self.smoother.as_ref().map(Smoother::kind)
    }

    /// Smoother accumulators, if smoothing is enabled
    pub fn snapshot(&self) -> Option<SmootherSnapshot> {
        self.smoother.as_ref().map(Smoother::snapshot)
    }

    /// Number of samples accepted since the last `init`
    pub fn samples_processed(&self) -> u64 {
        self.samples_processed
    }
}

fn rejected_sample(dx: f64, dy: f64, dt: f64, reason: &str) -> SpeedError {
    warn!("Rejected pointer sample ({}): delta=({}, {}), dt={}", reason, dx, dy, dt);
    SpeedError::InvalidSample { dx, dy, dt }
}

impl Default for SpeedCalculator {
    fn default() -> Self {
        Self::new()
    }
}
