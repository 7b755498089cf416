//! Section properties, stresses and safety margins for hollow circular tubes.
//!
//! Dimensions are kept in millimetres, which is how tubes are specified and
//! reported. Stresses are evaluated in SI units.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use uom::si::area::square_millimeter;
use uom::si::f64::{Area, Length};
use uom::si::length::{meter, millimeter};

use crate::loads::LoadSpecification;
use crate::material::Material;

/// Added to the squared fibre stress (Pa²) so margins stay finite on an unloaded section.
const STRESS_REGULARIZATION: f64 = 1.0e-3;

/// Convert millimetres to metres.
fn to_meters(millimeters: f64) -> f64 {
    Length::new::<millimeter>(millimeters).get::<meter>()
}

/// Extreme fibre of the bent section at which a margin is evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarginLocation {
    /// Fibre where bending adds tension to the axial stress.
    TensionFibre,
    /// Fibre where bending adds compression to the axial stress.
    CompressionFibre,
}

impl MarginLocation {
    /// Short human readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TensionFibre => "tension fibre",
            Self::CompressionFibre => "compression fibre",
        }
    }
}

/// Safety margin against first yield at one fibre.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SafetyMargin {
    /// Fibre the margin was computed for.
    pub location: MarginLocation,
    /// Margin `yield / |stress| - 1`, unitless.
    pub value: f64,
}

/// Combined normal stress at one extreme fibre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FibreStress {
    /// Fibre the stress acts at.
    pub location: MarginLocation,
    /// Signed normal stress in pascals, positive in tension.
    pub stress: f64,
}

/// Hollow circular cross-section measured in millimetres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TubeSection {
    /// Outside diameter.
    outer_diameter: f64,
    /// Wall thickness.
    thickness: f64,
}

impl TubeSection {
    /// Create a [`TubeSection`] from its outer diameter and wall thickness.
    #[must_use]
    pub const fn new(outer_diameter: f64, thickness: f64) -> Self {
        Self {
            outer_diameter,
            thickness,
        }
    }

    /// Create a [`TubeSection`] from inner and outer diameters.
    #[must_use]
    pub fn from_diameters(inner_diameter: f64, outer_diameter: f64) -> Self {
        Self::new(outer_diameter, 0.5 * (outer_diameter - inner_diameter))
    }

    /// Outside diameter in millimetres.
    #[must_use]
    pub const fn outer_diameter(&self) -> f64 {
        self.outer_diameter
    }

    /// Wall thickness in millimetres.
    #[must_use]
    pub const fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Inside diameter in millimetres.
    #[must_use]
    pub fn inner_diameter(&self) -> f64 {
        self.outer_diameter - 2.0 * self.thickness
    }

    /// Cross-sectional area in square millimetres.
    ///
    /// # Examples
    /// ```
    /// use tubeopt::TubeSection;
    ///
    /// let section = TubeSection::from_diameters(60.0, 100.0);
    /// let expected = 0.25 * std::f64::consts::PI * (100.0_f64.powi(2) - 60.0_f64.powi(2));
    /// assert!((section.area() - expected).abs() < 1.0e-9);
    /// ```
    #[must_use]
    pub fn area(&self) -> f64 {
        area(self.outer_diameter, self.thickness)
    }

    /// Area as a dimensioned quantity.
    #[must_use]
    pub fn area_quantity(&self) -> Area {
        Area::new::<square_millimeter>(self.area())
    }

    /// Second moment of area about a diameter in mm⁴.
    #[must_use]
    pub fn second_moment_of_area(&self) -> f64 {
        second_moment_of_area(self.outer_diameter, self.thickness)
    }

    /// Ratio of outer diameter to wall thickness.
    #[must_use]
    pub fn slenderness(&self) -> f64 {
        self.outer_diameter / self.thickness
    }

    /// Normal stresses at the two extreme fibres, tension fibre first.
    ///
    /// The axial stress is uniform, the bending stress peaks at the outer
    /// radius with opposite signs on each side.
    #[must_use]
    pub fn fibre_stresses(&self, loads: &LoadSpecification) -> [FibreStress; 2] {
        let outer_diameter = to_meters(self.outer_diameter);
        let thickness = to_meters(self.thickness);
        let axial = loads.axial_force / area(outer_diameter, thickness);
        let bending = loads.bending_moment.abs() * 0.5 * outer_diameter
            / second_moment_of_area(outer_diameter, thickness);
        [
            FibreStress {
                location: MarginLocation::TensionFibre,
                stress: axial + bending,
            },
            FibreStress {
                location: MarginLocation::CompressionFibre,
                stress: axial - bending,
            },
        ]
    }

    /// Safety margins against yield at both extreme fibres, tension fibre first.
    #[must_use]
    pub fn safety_margins(
        &self,
        loads: &LoadSpecification,
        material: &Material,
    ) -> Vec<SafetyMargin> {
        self.fibre_stresses(loads)
            .iter()
            .map(|fibre| SafetyMargin {
                location: fibre.location,
                value: margin(fibre.stress, material),
            })
            .collect()
    }

    /// Smallest safety margin over both fibres.
    ///
    /// For a fixed outer diameter this grows monotonically with thickness.
    #[must_use]
    pub fn worst_safety_margin(&self, loads: &LoadSpecification, material: &Material) -> f64 {
        self.fibre_stresses(loads)
            .iter()
            .map(|fibre| margin(fibre.stress, material))
            .fold(f64::INFINITY, f64::min)
    }
}

/// Annulus area `π t (D - t)`.
fn area(outer_diameter: f64, thickness: f64) -> f64 {
    PI * thickness * (outer_diameter - thickness)
}

/// Second moment of area `π/64 (D⁴ - d⁴)`.
fn second_moment_of_area(outer_diameter: f64, thickness: f64) -> f64 {
    let inner_diameter = outer_diameter - 2.0 * thickness;
    PI / 64.0 * (outer_diameter.powi(4) - inner_diameter.powi(4))
}

/// Margin against yield for a single normal stress.
fn margin(stress: f64, material: &Material) -> f64 {
    material.yield_strength / (stress * stress + STRESS_REGULARIZATION).sqrt() - 1.0
}

/// Convenience helper for creating [`TubeSection`] instances.
///
/// # Examples
/// ```
/// use tubeopt::tube;
///
/// let section = tube(100.0, 4.0);
/// assert_eq!(section.inner_diameter(), 92.0);
/// ```
#[must_use]
pub const fn tube(outer_diameter: f64, thickness: f64) -> TubeSection {
    TubeSection::new(outer_diameter, thickness)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::area::square_meter;

    use super::*;
    use crate::loads::loads;

    #[test]
    fn area_matches_difference_of_circles() {
        let section = tube(88.0, 3.5);
        let expected = 0.25 * PI * (88.0_f64.powi(2) - 81.0_f64.powi(2));
        assert_relative_eq!(section.area(), expected, max_relative = 1.0e-12);
        assert_relative_eq!(
            section.area_quantity().get::<square_meter>(),
            expected * 1.0e-6,
            max_relative = 1.0e-12
        );
        assert_relative_eq!(section.slenderness(), 88.0 / 3.5, max_relative = 1.0e-12);
    }

    #[test]
    fn pure_bending_loads_both_fibres_equally() {
        let section = tube(100.0, 4.0);
        let margins = section.safety_margins(&loads(0.0, 5_000.0), &Material::default());
        assert_eq!(margins.len(), 2);
        assert_eq!(margins[0].location, MarginLocation::TensionFibre);
        assert_eq!(margins[1].location, MarginLocation::CompressionFibre);
        assert_relative_eq!(margins[0].value, margins[1].value, max_relative = 1.0e-12);

        // sigma = M c / I with I converted from mm^4 to m^4
        let stress = 5_000.0 * 0.05 / (section.second_moment_of_area() * 1.0e-12);
        assert_relative_eq!(margins[0].value, 350.0e6 / stress - 1.0, max_relative = 1.0e-9);
    }

    #[test]
    fn compression_governs_the_compression_fibre() {
        let section = tube(100.0, 4.0);
        let material = Material::default();
        let case = loads(-50_000.0, 5_000.0);
        let margins = section.safety_margins(&case, &material);
        assert!(margins[1].value < margins[0].value);
        assert_relative_eq!(
            section.worst_safety_margin(&case, &material),
            margins[1].value
        );
    }

    #[test]
    fn unloaded_section_has_finite_margin() {
        let margin = tube(50.0, 2.0).worst_safety_margin(&loads(0.0, 0.0), &Material::default());
        assert!(margin.is_finite());
        assert!(margin > 1.0e9);
    }

    #[test]
    fn thicker_walls_raise_the_worst_margin() {
        let material = Material::default();
        let case = loads(10_000.0, 5_000.0);
        let mut previous = f64::NEG_INFINITY;
        for thickness in [1.0, 2.0, 4.0, 8.0, 16.0] {
            let margin = tube(90.0, thickness).worst_safety_margin(&case, &material);
            assert!(margin > previous);
            previous = margin;
        }
    }
}
