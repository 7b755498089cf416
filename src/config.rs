//! Settings that control how the optimizer searches.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Starting geometry in millimetres.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InitialGuess {
    /// Inner diameter in millimetres.
    pub inner_diameter: f64,
    /// Outer diameter in millimetres.
    pub outer_diameter: f64,
}

impl Default for InitialGuess {
    fn default() -> Self {
        Self {
            inner_diameter: 60.0,
            outer_diameter: 100.0,
        }
    }
}

/// Configuration for the geometry optimizer.
///
/// None of these settings change the problem being solved, only how quickly
/// and how precisely the optimum is located.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Relative width of the final outer-diameter bracket, also used for the
    /// thickness bisection.
    pub tolerance: f64,
    /// Maximum number of golden section refinements.
    pub max_iterations: usize,
    /// Number of evenly spaced outer diameters evaluated before refining.
    pub scan_points: usize,
    /// Geometry evaluated first and reported when nothing else fits.
    pub initial_guess: InitialGuess,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            tolerance: 1.0e-10,
            max_iterations: 100,
            scan_points: 64,
            initial_guess: InitialGuess::default(),
        }
    }
}

impl OptimizerConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the relative convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum number of refinement iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the number of scanned outer diameters.
    #[must_use]
    pub fn with_scan_points(mut self, scan_points: usize) -> Self {
        self.scan_points = scan_points;
        self
    }

    /// Sets the starting geometry in millimetres.
    #[must_use]
    pub fn with_initial_guess(mut self, inner_diameter: f64, outer_diameter: f64) -> Self {
        self.initial_guess = InitialGuess {
            inner_diameter,
            outer_diameter,
        };
        self
    }

    /// Check the settings.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first invalid setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ConfigError::NonPositiveTolerance(self.tolerance));
        }
        if self.scan_points < 3 {
            return Err(ConfigError::TooFewScanPoints(self.scan_points));
        }
        let InitialGuess {
            inner_diameter: inner,
            outer_diameter: outer,
        } = self.initial_guess;
        if !(inner.is_finite() && outer.is_finite() && 0.0 < inner && inner < outer) {
            return Err(ConfigError::InvalidInitialGuess { inner, outer });
        }
        Ok(())
    }
}
