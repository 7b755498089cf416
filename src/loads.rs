//! External loads carried by the tube.

use serde::{Deserialize, Serialize};
use uom::si::f64::{Force, Torque};
use uom::si::force::newton;
use uom::si::torque::newton_meter;

use crate::errors::InputError;

/// Axial force and bending moment acting on the tube cross-section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadSpecification {
    /// Axial force in newtons. Positive values put the tube in tension.
    pub axial_force: f64,
    /// Bending moment in newton-metres. Only the magnitude is used.
    pub bending_moment: f64,
}

impl LoadSpecification {
    /// Create a [`LoadSpecification`] from raw SI values.
    #[must_use]
    pub const fn new(axial_force: f64, bending_moment: f64) -> Self {
        Self {
            axial_force,
            bending_moment,
        }
    }

    /// Create a [`LoadSpecification`] from dimensioned quantities.
    ///
    /// # Examples
    /// ```
    /// use tubeopt::LoadSpecification;
    /// use uom::si::f64::{Force, Torque};
    /// use uom::si::force::kilonewton;
    /// use uom::si::torque::newton_meter;
    ///
    /// let loads = LoadSpecification::from_quantities(
    ///     Force::new::<kilonewton>(10.0),
    ///     Torque::new::<newton_meter>(5_000.0),
    /// );
    /// assert_eq!(loads.axial_force, 10_000.0);
    /// ```
    #[must_use]
    pub fn from_quantities(axial_force: Force, bending_moment: Torque) -> Self {
        Self::new(
            axial_force.get::<newton>(),
            bending_moment.get::<newton_meter>(),
        )
    }

    /// Axial force as a dimensioned quantity.
    #[must_use]
    pub fn axial_force_quantity(&self) -> Force {
        Force::new::<newton>(self.axial_force)
    }

    /// Bending moment as a dimensioned quantity.
    #[must_use]
    pub fn bending_moment_quantity(&self) -> Torque {
        Torque::new::<newton_meter>(self.bending_moment)
    }

    /// Returns `true` when the axial force compresses the tube.
    #[must_use]
    pub fn is_compressive(&self) -> bool {
        self.axial_force < 0.0
    }

    /// Check that both loads are finite.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NonFiniteAxialForce`] or
    /// [`InputError::NonFiniteBendingMoment`] for NaN or infinite values.
    pub fn validate(&self) -> Result<(), InputError> {
        if !self.axial_force.is_finite() {
            return Err(InputError::NonFiniteAxialForce(self.axial_force));
        }
        if !self.bending_moment.is_finite() {
            return Err(InputError::NonFiniteBendingMoment(self.bending_moment));
        }
        Ok(())
    }
}

/// Convenience helper for creating [`LoadSpecification`] instances.
///
/// # Examples
/// ```
/// use tubeopt::loads;
///
/// let case = loads(10.0e3, 5.0e3);
/// assert_eq!(case.bending_moment, 5_000.0);
/// ```
#[must_use]
pub const fn loads(axial_force: f64, bending_moment: f64) -> LoadSpecification {
    LoadSpecification::new(axial_force, bending_moment)
}
