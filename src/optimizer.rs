//! Minimum-area sizing of a hollow tube under combined axial force and bending.

use std::cell::Cell;

use serde::{Deserialize, Serialize};
use uom::si::area::square_millimeter;
use uom::si::f64::{Area, Length};
use uom::si::length::millimeter;

use crate::config::OptimizerConfig;
use crate::constraints::ConstraintSpecification;
use crate::design_space::DesignSpace;
use crate::errors::InputError;
use crate::loads::LoadSpecification;
use crate::search::{bisect, golden_section};
use crate::section::{SafetyMargin, TubeSection};

/// Indicates how the search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// A feasible design was found and refined to the configured tolerance.
    Converged,
    /// A feasible design was found but refinement hit the iteration limit.
    IterationLimit,
    /// No outer diameter in the design space admits a feasible thickness.
    Infeasible,
}

/// Geometry and margins of a sized tube, in millimetres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TubeDesign {
    /// Inside diameter in millimetres.
    pub inner_diameter: f64,
    /// Outside diameter in millimetres.
    pub outer_diameter: f64,
    /// Wall thickness in millimetres.
    pub thickness: f64,
    /// Cross-sectional area in square millimetres.
    pub area: f64,
    /// Safety margins, tension fibre first.
    pub safety_margins: Vec<SafetyMargin>,
}

impl TubeDesign {
    /// Describe `section` under `loads` using the material of `design_space`.
    #[must_use]
    pub fn from_section(
        section: &TubeSection,
        loads: &LoadSpecification,
        design_space: &DesignSpace,
    ) -> Self {
        Self {
            inner_diameter: section.inner_diameter(),
            outer_diameter: section.outer_diameter(),
            thickness: section.thickness(),
            area: section.area(),
            safety_margins: section.safety_margins(loads, &design_space.material),
        }
    }

    /// The section described by this design.
    #[must_use]
    pub fn section(&self) -> TubeSection {
        TubeSection::new(self.outer_diameter, self.thickness)
    }

    /// Smallest reported safety margin.
    #[must_use]
    pub fn minimum_safety_margin(&self) -> f64 {
        self.safety_margins
            .iter()
            .map(|margin| margin.value)
            .fold(f64::INFINITY, f64::min)
    }

    /// Outer diameter as a dimensioned quantity.
    #[must_use]
    pub fn outer_diameter_quantity(&self) -> Length {
        Length::new::<millimeter>(self.outer_diameter)
    }

    /// Thickness as a dimensioned quantity.
    #[must_use]
    pub fn thickness_quantity(&self) -> Length {
        Length::new::<millimeter>(self.thickness)
    }

    /// Area as a dimensioned quantity.
    #[must_use]
    pub fn area_quantity(&self) -> Area {
        Area::new::<square_millimeter>(self.area)
    }
}

/// Result of a sizing run.
///
/// Only trust [`Optimization::design`] as a valid tube when
/// [`Optimization::converged`] returns `true`; otherwise it holds the best or
/// last iterate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Optimization {
    /// How the search ended.
    pub status: Status,
    /// Best design found.
    pub design: TubeDesign,
    /// Golden section refinements performed.
    pub iterations: usize,
    /// Section margin evaluations performed.
    pub evaluations: usize,
}

impl Optimization {
    /// Returns `true` when the design is feasible and locally optimal.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }
}

/// Sizes tubes for a fixed design space and solver configuration.
///
/// The optimizer holds no load or constraint state; every call to
/// [`GeometryOptimizer::optimize`] is independent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryOptimizer {
    /// Solver settings.
    config: OptimizerConfig,
    /// Geometric bounds and material.
    design_space: DesignSpace,
}

impl GeometryOptimizer {
    /// Create an optimizer with explicit settings.
    #[must_use]
    pub fn new(config: OptimizerConfig, design_space: DesignSpace) -> Self {
        Self {
            config,
            design_space,
        }
    }

    /// Create an optimizer with custom settings and the default design space.
    #[must_use]
    pub fn with_config(config: OptimizerConfig) -> Self {
        Self::new(config, DesignSpace::default())
    }

    /// Solver settings.
    #[must_use]
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Geometric bounds and material.
    #[must_use]
    pub fn design_space(&self) -> &DesignSpace {
        &self.design_space
    }

    /// Find the minimum-area tube carrying `loads` within `constraints`.
    ///
    /// A diameter scan locates the best feasible region, then golden section
    /// search refines the outer diameter. For each outer diameter the thinnest
    /// wall meeting the margin is found by bisection, since area and margin
    /// both grow with thickness.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] when the loads, constraints or settings are
    /// invalid. Infeasible or unconverged searches are not errors; they are
    /// reported through [`Optimization::status`].
    ///
    /// # Examples
    /// ```
    /// use tubeopt::{ConstraintSpecification, GeometryOptimizer, LoadSpecification};
    ///
    /// let optimizer = GeometryOptimizer::default();
    /// let loads = LoadSpecification::new(10.0e3, 5.0e3);
    /// let result = optimizer
    ///     .optimize(&loads, &ConstraintSpecification::new(3.0, 0.05))
    ///     .expect("inputs are valid");
    /// assert!(result.converged());
    /// assert!(result.design.thickness >= 3.0);
    /// ```
    pub fn optimize(
        &self,
        loads: &LoadSpecification,
        constraints: &ConstraintSpecification,
    ) -> Result<Optimization, InputError> {
        loads.validate()?;
        constraints.validate()?;
        self.config.validate()?;
        self.design_space.validate()?;

        let problem = Problem {
            loads,
            design_space: &self.design_space,
            minimum_thickness: constraints.minimum_thickness,
            minimum_safety_margin: constraints.minimum_safety_margin,
            tolerance: self.config.tolerance,
            evaluations: Cell::new(0),
        };
        Ok(self.search(&problem))
    }

    /// Outer diameters evaluated before refinement, sorted and deduplicated.
    fn scan_diameters(&self) -> Vec<f64> {
        let bounds = self.design_space.outer_diameter;
        let count = self.config.scan_points;
        let step = (bounds.upper - bounds.lower) / (count - 1) as f64;
        let mut diameters: Vec<f64> = (0..count)
            .map(|idx| (bounds.lower + step * idx as f64).min(bounds.upper))
            .collect();
        diameters.push(
            self.config
                .initial_guess
                .outer_diameter
                .clamp(bounds.lower, bounds.upper),
        );
        diameters.sort_by(f64::total_cmp);
        diameters.dedup();
        diameters
    }

    /// Scan, then refine around the lightest feasible sample.
    fn search(&self, problem: &Problem<'_>) -> Optimization {
        let diameters = self.scan_diameters();
        let sizings: Vec<Sizing> = diameters
            .iter()
            .map(|&diameter| problem.size(diameter))
            .collect();

        let best = sizings
            .iter()
            .enumerate()
            .filter_map(|(idx, sizing)| match sizing {
                Sizing::Feasible(section) => Some((idx, *section)),
                _ => None,
            })
            .min_by(|a, b| a.1.area().total_cmp(&b.1.area()));
        log::debug!(
            "scanned {} outer diameters, {} feasible",
            diameters.len(),
            sizings
                .iter()
                .filter(|sizing| matches!(sizing, Sizing::Feasible(_)))
                .count()
        );

        let Some((idx, scanned)) = best else {
            return self.infeasible(problem, &sizings);
        };

        let bracket = [
            diameters[idx.saturating_sub(1)],
            diameters[(idx + 1).min(diameters.len() - 1)],
        ];
        let minimum = golden_section(
            |diameter| problem.area(diameter),
            bracket,
            self.config.tolerance,
            self.config.max_iterations,
        );
        log::debug!(
            "refined outer diameter to {:.6} mm after {} iterations (area {:.6} mm^2)",
            minimum.x,
            minimum.iterations,
            minimum.value
        );

        let section = match problem.size(minimum.x) {
            Sizing::Feasible(refined) if refined.area() < scanned.area() => refined,
            _ => scanned,
        };
        let status = if minimum.converged {
            Status::Converged
        } else {
            log::warn!(
                "golden section search stopped after {} iterations without converging",
                minimum.iterations
            );
            Status::IterationLimit
        };

        Optimization {
            status,
            design: TubeDesign::from_section(&section, problem.loads, &self.design_space),
            iterations: minimum.iterations,
            evaluations: problem.evaluations.get(),
        }
    }

    /// Report the least-violating scanned section, or the initial guess when
    /// no scanned diameter admits any thickness.
    fn infeasible(&self, problem: &Problem<'_>, sizings: &[Sizing]) -> Optimization {
        let least_violating = sizings
            .iter()
            .filter_map(|sizing| match sizing {
                Sizing::Infeasible {
                    section,
                    worst_margin,
                } => Some((*section, *worst_margin)),
                _ => None,
            })
            .max_by(|a, b| a.1.total_cmp(&b.1));

        let section = match least_violating {
            Some((section, worst_margin)) => {
                log::warn!(
                    "no feasible tube: best margin {worst_margin:.4} is below the required {:.4}",
                    problem.minimum_safety_margin
                );
                section
            }
            None => {
                log::warn!(
                    "no tube in the design space satisfies a {:.3} mm minimum thickness",
                    problem.minimum_thickness
                );
                let guess = self.config.initial_guess;
                TubeSection::from_diameters(guess.inner_diameter, guess.outer_diameter)
            }
        };

        Optimization {
            status: Status::Infeasible,
            design: TubeDesign::from_section(&section, problem.loads, &self.design_space),
            iterations: 0,
            evaluations: problem.evaluations.get(),
        }
    }
}

/// Best thickness found for one outer diameter.
#[derive(Debug, Clone, Copy)]
enum Sizing {
    /// The thinnest admissible wall meeting the margin.
    Feasible(TubeSection),
    /// Even the thickest admissible wall misses the margin.
    Infeasible {
        /// Thickest admissible section.
        section: TubeSection,
        /// Its worst margin.
        worst_margin: f64,
    },
    /// No wall thickness fits the geometric bounds.
    Inadmissible,
}

/// One validated sizing problem.
struct Problem<'a> {
    /// Loads carried by the tube.
    loads: &'a LoadSpecification,
    /// Geometric bounds and material.
    design_space: &'a DesignSpace,
    /// Minimum wall thickness in millimetres.
    minimum_thickness: f64,
    /// Minimum safety margin.
    minimum_safety_margin: f64,
    /// Relative tolerance for the thickness bisection.
    tolerance: f64,
    /// Running count of margin evaluations.
    evaluations: Cell<usize>,
}

impl Problem<'_> {
    /// Counts the evaluation.
    fn meets_margin(&self, section: &TubeSection) -> bool {
        self.evaluations.set(self.evaluations.get() + 1);
        section.worst_safety_margin(self.loads, &self.design_space.material)
            >= self.minimum_safety_margin
    }

    /// Thinnest feasible wall for `outer_diameter` in millimetres.
    fn size(&self, outer_diameter: f64) -> Sizing {
        let Some((lower, upper)) = self
            .design_space
            .thickness_window(outer_diameter, self.minimum_thickness)
        else {
            return Sizing::Inadmissible;
        };

        let thinnest = TubeSection::new(outer_diameter, lower);
        if self.meets_margin(&thinnest) {
            return Sizing::Feasible(thinnest);
        }
        let thickest = TubeSection::new(outer_diameter, upper);
        if !self.meets_margin(&thickest) {
            return Sizing::Infeasible {
                section: thickest,
                worst_margin: thickest
                    .worst_safety_margin(self.loads, &self.design_space.material),
            };
        }

        let (thickness, _) = bisect(
            |thickness| self.meets_margin(&TubeSection::new(outer_diameter, thickness)),
            lower,
            upper,
            self.tolerance,
        );
        Sizing::Feasible(TubeSection::new(outer_diameter, thickness))
    }

    /// Area of the thinnest feasible wall, or infinity when none exists.
    fn area(&self, outer_diameter: f64) -> f64 {
        match self.size(outer_diameter) {
            Sizing::Feasible(section) => section.area(),
            Sizing::Infeasible { .. } | Sizing::Inadmissible => f64::INFINITY,
        }
    }
}

/// Size a tube with the default design space and solver settings.
///
/// # Errors
///
/// Returns [`InputError`] when the loads or constraints are invalid.
///
/// # Examples
/// ```
/// use tubeopt::{optimize, ConstraintSpecification, LoadSpecification};
///
/// let result = optimize(
///     &LoadSpecification::new(10.0e3, 5.0e3),
///     &ConstraintSpecification::new(3.0, 0.05),
/// )
/// .expect("inputs are valid");
/// let design = &result.design;
/// assert!((design.outer_diameter - design.inner_diameter - 2.0 * design.thickness).abs() < 1.0e-9);
/// ```
pub fn optimize(
    loads: &LoadSpecification,
    constraints: &ConstraintSpecification,
) -> Result<Optimization, InputError> {
    GeometryOptimizer::default().optimize(loads, constraints)
}
