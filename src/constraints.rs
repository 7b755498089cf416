//! Lower bounds the sized tube has to respect.

use serde::{Deserialize, Serialize};
use uom::si::f64::{Length, Ratio};
use uom::si::length::millimeter;
use uom::si::ratio::ratio;

use crate::errors::InputError;

/// Minimum wall thickness and minimum safety margin for one sizing run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConstraintSpecification {
    /// Smallest allowed wall thickness in millimetres.
    pub minimum_thickness: f64,
    /// Smallest allowed safety margin, `yield / stress - 1`.
    pub minimum_safety_margin: f64,
}

impl Default for ConstraintSpecification {
    fn default() -> Self {
        Self {
            minimum_thickness: 1.0,
            minimum_safety_margin: 0.0,
        }
    }
}

impl ConstraintSpecification {
    /// Create a [`ConstraintSpecification`] from a thickness in millimetres and a
    /// unitless margin.
    #[must_use]
    pub const fn new(minimum_thickness: f64, minimum_safety_margin: f64) -> Self {
        Self {
            minimum_thickness,
            minimum_safety_margin,
        }
    }

    /// Create a [`ConstraintSpecification`] from dimensioned quantities.
    #[must_use]
    pub fn from_quantities(minimum_thickness: Length, minimum_safety_margin: Ratio) -> Self {
        Self::new(
            minimum_thickness.get::<millimeter>(),
            minimum_safety_margin.get::<ratio>(),
        )
    }

    /// Minimum thickness as a dimensioned quantity.
    #[must_use]
    pub fn minimum_thickness_quantity(&self) -> Length {
        Length::new::<millimeter>(self.minimum_thickness)
    }

    /// Check that the thickness is positive and the margin finite.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NonPositiveMinimumThickness`] when the thickness is
    /// zero, negative or not finite, and [`InputError::NonFiniteSafetyMargin`]
    /// when the margin is NaN or infinite.
    pub fn validate(&self) -> Result<(), InputError> {
        if !self.minimum_thickness.is_finite() || self.minimum_thickness <= 0.0 {
            return Err(InputError::NonPositiveMinimumThickness(
                self.minimum_thickness,
            ));
        }
        if !self.minimum_safety_margin.is_finite() {
            return Err(InputError::NonFiniteSafetyMargin(
                self.minimum_safety_margin,
            ));
        }
        Ok(())
    }
}
