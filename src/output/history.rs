//! Time history of a patch's surface state

use crate::boundary::SurfaceStateStore;
use crate::mesh::Patch;

/// Patch-integrated surface quantities, one row per recorded step
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SurfaceHistory {
    /// Time values \[s\]
    pub time_points: Vec<f64>,

    /// Area-weighted mean adsorbed concentration
    pub mean_surface: Vec<f64>,

    /// Total adsorbed amount, Σ Y·|Sf|
    pub adsorbed_amount: Vec<f64>,
}

impl SurfaceHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the state of `surface` on `patch` at `time`
    pub fn record(&mut self, time: f64, surface: &SurfaceStateStore, patch: &Patch) {
        let amount = surface.adsorbed_amount(patch);
        let area = patch.total_area();
        let mean = if area > 0.0 { amount / area } else { 0.0 };

        self.time_points.push(time);
        self.mean_surface.push(mean);
        self.adsorbed_amount.push(amount);
    }

    /// Number of recorded steps
    pub fn len(&self) -> usize {
        self.time_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_points.is_empty()
    }

    /// Most recent `(time, mean, amount)` row
    pub fn last(&self) -> Option<(f64, f64, f64)> {
        let i = self.len().checked_sub(1)?;
        Some((self.time_points[i], self.mean_surface[i], self.adsorbed_amount[i]))
    }
}
