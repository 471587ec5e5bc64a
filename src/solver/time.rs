//! Time-loop contracts
//!
//! The outer time loop is owned by the surrounding application. The boundary
//! kernel only needs to know *which* step is current and *how long* it is:
//!
//! - `TimeControl`: total time and number of steps of a run (validated)
//! - `TimeState`: current time index, time value and step size
//!
//! # Example
//!
//! ```rust
//! use wall_adsorb::solver::TimeControl;
//!
//! let control = TimeControl::new(100.0, 100);
//! control.validate().unwrap();
//!
//! let mut time = control.start();
//! assert_eq!(time.index(), 0);
//! assert!(!time.has_advanced());
//!
//! time.advance();
//! assert_eq!(time.index(), 1);
//! assert_eq!(time.delta_t(), 1.0);
//! ```

use crate::error::{AdsorptionError, Result};

// =================================================================================================
// Time Control
// =================================================================================================

/// Fixed-step time control of a run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeControl {
    /// Total simulated time \[s\]
    pub total_time: f64,

    /// Number of time steps
    pub time_steps: usize,
}

impl TimeControl {
    /// Create a time control (not validated)
    pub fn new(total_time: f64, time_steps: usize) -> Self {
        Self {
            total_time,
            time_steps,
        }
    }

    /// Validate that parameters are physically meaningful
    pub fn validate(&self) -> Result<()> {
        if !self.total_time.is_finite() || self.total_time <= 0.0 {
            return Err(AdsorptionError::InvalidTimeControl(
                "Total time must be positive".to_string(),
            ));
        }
        if self.time_steps == 0 {
            return Err(AdsorptionError::InvalidTimeControl(
                "Time steps must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Step size dt = T / N
    pub fn delta_t(&self) -> f64 {
        self.total_time / self.time_steps as f64
    }

    /// Time state before the first step
    pub fn start(&self) -> TimeState {
        TimeState::new(0.0, self.delta_t())
    }
}

// =================================================================================================
// Time State
// =================================================================================================

/// Current position of the outer time loop
///
/// `index` counts advanced steps: 0 means no step has been taken yet, so no
/// elapsed interval is available to integrate over.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeState {
    index: u64,
    start: f64,
    value: f64,
    delta_t: f64,
}

impl TimeState {
    /// Time state at `start` with step size `delta_t`
    pub fn new(start: f64, delta_t: f64) -> Self {
        Self {
            index: 0,
            start,
            value: start,
            delta_t,
        }
    }

    /// Advance by one step of the current size
    pub fn advance(&mut self) {
        self.index += 1;
        // From the index, not accumulated
        self.value = self.start + self.index as f64 * self.delta_t;
    }

    /// Change the step size for the following steps
    pub fn set_delta_t(&mut self, delta_t: f64) {
        self.start = self.value - self.index as f64 * delta_t;
        self.delta_t = delta_t;
    }

    /// Number of steps taken so far
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Current time value \[s\]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Size of the step that led to the current time \[s\]
    pub fn delta_t(&self) -> f64 {
        self.delta_t
    }

    /// Whether at least one step has been taken
    pub fn has_advanced(&self) -> bool {
        self.index > 0
    }
}

// =================================================================================================
// Tests
// =================================================================================================
