//! Material properties used to compute safety margins.

use serde::{Deserialize, Serialize};
use uom::si::f64::Pressure;
use uom::si::pressure::pascal;

use crate::errors::ConfigError;

/// Tube material described by its tensile yield strength.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Yield strength in pascals.
    pub yield_strength: f64,
}

impl Default for Material {
    /// Structural steel with a 350 MPa yield strength.
    fn default() -> Self {
        Self {
            yield_strength: 350.0e6,
        }
    }
}

impl Material {
    /// Create a [`Material`] with a yield strength in pascals.
    #[must_use]
    pub const fn new(yield_strength: f64) -> Self {
        Self { yield_strength }
    }

    /// Create a [`Material`] from a dimensioned yield strength.
    ///
    /// # Examples
    /// ```
    /// use tubeopt::Material;
    /// use uom::si::f64::Pressure;
    /// use uom::si::pressure::megapascal;
    ///
    /// let aluminium = Material::from_yield_strength(Pressure::new::<megapascal>(276.0));
    /// assert!((aluminium.yield_strength - 276.0e6).abs() < 1.0e-3);
    /// ```
    #[must_use]
    pub fn from_yield_strength(yield_strength: Pressure) -> Self {
        Self::new(yield_strength.get::<pascal>())
    }

    /// Check that the yield strength is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositiveYieldStrength`] when the strength is
    /// zero, negative or not finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.yield_strength.is_finite() || self.yield_strength <= 0.0 {
            return Err(ConfigError::NonPositiveYieldStrength(self.yield_strength));
        }
        Ok(())
    }
}
