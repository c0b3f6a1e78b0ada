//! Pointer Speed Estimation
//!
//! Estimates pointer speed from raw `(dx, dy)` deltas sampled at irregular
//! intervals, with optional time-variant exponential smoothing before the
//! value reaches an acceleration curve.
//!
//! # Architecture
//!
//! ```text
//! (dx, dy, dt)
//!       ↓
//! ┌─────────────────────────┐
//! │  SpeedCalculator        │ ← per-sample entry point
//! └─────────────────────────┘
//!       ↓                ↓
//! ┌──────────────┐ ┌──────────────────────────────┐
//! │ lp_magnitude │ │ Smoother                     │
//! └──────────────┘ │  ├─ SimpleExponentialSmoother │
//!                  │  └─ LinearExponentialSmoother │
//!                  └──────────────────────────────┘
//! ```
//!
//! # Smoothers
//!
//! Both variants run a slow *window* track and a fast *cutoff* track and
//! return the smaller of the two. Coefficients derive from a halflife and
//! are raised to the elapsed time, so irregular poll intervals do not
//! change the effective smoothing.
//!
//! | Variant | State | Behaviour |
//! |---------|-------|-----------|
//! | Simple | 2 totals | Lowpass, fast to follow decelerations |
//! | Linear | 2 totals + 2 trends | Lowpass plus damped trend extrapolation |
//!
//! # Usage Example
//!
//! ```rust
//! use lamco_pointer_speed::config::SpeedCalculatorConfig;
//! use lamco_pointer_speed::speed::SpeedCalculator;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut calculator = SpeedCalculator::new();
//! calculator.init(SpeedCalculatorConfig::smoothed(50.0, true))?;
//!
//! for (dx, dy) in [(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)] {
//!     let speed = calculator.calculate_speed(dx, dy, 1.0)?;
//!     assert!(speed >= 0.0);
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Error Handling
//!
//! Precondition violations surface as [`SpeedError`] and never touch the
//! filter state:
//!
//! ```rust
//! use lamco_pointer_speed::speed::{SpeedCalculator, SpeedError};
//!
//! let mut calculator = SpeedCalculator::new();
//! match calculator.calculate_speed(1.0, 1.0, 0.0) {
//!     Err(SpeedError::InvalidSample { dt, .. }) => assert_eq!(dt, 0.0),
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```

pub mod calculator;
pub mod error;
pub mod linear;
pub mod magnitude;
pub mod simple;
pub mod smoother;

pub use calculator::SpeedCalculator;
pub use error::{Result, SpeedError};
pub use linear::{LinearExponentialSmoother, TREND_DAMPING, TREND_HALFLIFE};
pub use magnitude::lp_magnitude;
pub use simple::SimpleExponentialSmoother;
pub use smoother::{Smoother, SmootherKind, SmootherSnapshot};

/// Default magnitude exponent (Euclidean)
pub const DEFAULT_LP_NORM: f64 = 2.0;
