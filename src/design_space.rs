//! Bounds on the tube geometry explored by the optimizer.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::material::Material;

/// Closed interval `[lower, upper]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Smallest allowed value.
    pub lower: f64,
    /// Largest allowed value.
    pub upper: f64,
}

impl Bounds {
    /// Create a [`Bounds`] interval.
    #[must_use]
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Returns `true` when `value` lies inside the interval.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        let valid = self.lower.is_finite()
            && self.upper.is_finite()
            && self.lower > 0.0
            && self.lower <= self.upper;
        if valid {
            Ok(())
        } else {
            Err(ConfigError::InvalidBounds {
                name,
                lower: self.lower,
                upper: self.upper,
            })
        }
    }
}

/// Geometric limits and material of the tube family being sized.
///
/// Diameters are in millimetres. The slenderness window bounds the
/// outer-diameter-to-thickness ratio and keeps thin walls away from local
/// buckling.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSpace {
    /// Allowed inner diameters in millimetres.
    pub inner_diameter: Bounds,
    /// Allowed outer diameters in millimetres.
    pub outer_diameter: Bounds,
    /// Allowed outer diameter to thickness ratios.
    pub slenderness: Bounds,
    /// Tube material.
    pub material: Material,
}

impl Default for DesignSpace {
    fn default() -> Self {
        Self {
            inner_diameter: Bounds::new(5.0, 500.0),
            outer_diameter: Bounds::new(10.0, 600.0),
            slenderness: Bounds::new(2.0, 25.0),
            material: Material::default(),
        }
    }
}

impl DesignSpace {
    /// Creates a design space with default bounds and steel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inner diameter bounds in millimetres.
    #[must_use]
    pub fn with_inner_diameter(mut self, lower: f64, upper: f64) -> Self {
        self.inner_diameter = Bounds::new(lower, upper);
        self
    }

    /// Sets the outer diameter bounds in millimetres.
    #[must_use]
    pub fn with_outer_diameter(mut self, lower: f64, upper: f64) -> Self {
        self.outer_diameter = Bounds::new(lower, upper);
        self
    }

    /// Sets the slenderness window.
    #[must_use]
    pub fn with_slenderness(mut self, lower: f64, upper: f64) -> Self {
        self.slenderness = Bounds::new(lower, upper);
        self
    }

    /// Sets the material.
    #[must_use]
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Check every bound and the material.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBounds`] for an empty or non-positive
    /// interval and [`ConfigError::NonPositiveYieldStrength`] for an invalid
    /// material.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.inner_diameter.validate("inner diameter")?;
        self.outer_diameter.validate("outer diameter")?;
        self.slenderness.validate("slenderness")?;
        self.material.validate()
    }

    /// Admissible wall thicknesses in millimetres for an outer diameter.
    ///
    /// Combines the minimum thickness with the slenderness window and the
    /// inner diameter bounds. Returns `None` when no thickness fits.
    #[must_use]
    pub fn thickness_window(
        &self,
        outer_diameter: f64,
        minimum_thickness: f64,
    ) -> Option<(f64, f64)> {
        let lower = minimum_thickness
            .max(outer_diameter / self.slenderness.upper)
            .max(0.5 * (outer_diameter - self.inner_diameter.upper));
        let upper = (outer_diameter / self.slenderness.lower)
            .min(0.5 * (outer_diameter - self.inner_diameter.lower));
        (lower > 0.0 && lower <= upper).then_some((lower, upper))
    }
}
