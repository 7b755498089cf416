//! Error types produced while validating tube sizing inputs.

use thiserror::Error;

/// Error returned when loads or constraints cannot be used for sizing.
///
/// Validation happens before any search starts, so receiving one of these
/// variants means no optimization was attempted.
///
/// # Examples
///
/// ```
/// use tubeopt::{optimize, ConstraintSpecification, InputError, LoadSpecification};
///
/// let loads = LoadSpecification::new(f64::NAN, 5_000.0);
/// let error = optimize(&loads, &ConstraintSpecification::new(3.0, 0.05))
///     .expect_err("non-finite force is rejected");
/// assert!(matches!(error, InputError::NonFiniteAxialForce(_)));
/// ```
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum InputError {
    /// Returned when the axial force is NaN or infinite.
    #[error("axial force must be a finite number (received {0})")]
    NonFiniteAxialForce(f64),
    /// Returned when the bending moment is NaN or infinite.
    #[error("bending moment must be a finite number (received {0})")]
    NonFiniteBendingMoment(f64),
    /// Returned when the minimum thickness is zero, negative or not finite.
    #[error("minimum thickness must be a positive number of millimetres (received {0})")]
    NonPositiveMinimumThickness(f64),
    /// Returned when the minimum safety margin is NaN or infinite.
    #[error("minimum safety margin must be a finite number (received {0})")]
    NonFiniteSafetyMargin(f64),
    /// Returned when the optimizer settings are invalid.
    #[error("invalid optimizer settings: {0}")]
    Config(#[from] ConfigError),
}

/// Error returned when optimizer settings or design bounds are not usable.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Returned when the convergence tolerance is not a positive finite number.
    #[error("tolerance must be positive and finite (received {0})")]
    NonPositiveTolerance(f64),
    /// Returned when too few diameters are requested for the initial scan.
    #[error("at least 3 scan points are required (received {0})")]
    TooFewScanPoints(usize),
    /// Returned when the initial guess does not describe a hollow tube.
    #[error("initial guess must satisfy 0 < inner < outer (received inner {inner} mm, outer {outer} mm)")]
    InvalidInitialGuess {
        /// Rejected inner diameter in millimetres.
        inner: f64,
        /// Rejected outer diameter in millimetres.
        outer: f64,
    },
    /// Returned when a pair of design bounds is empty, negative or not finite.
    #[error("{name} bounds must satisfy 0 < lower <= upper (received [{lower}, {upper}])")]
    InvalidBounds {
        /// Name of the bounded quantity.
        name: &'static str,
        /// Rejected lower bound.
        lower: f64,
        /// Rejected upper bound.
        upper: f64,
    },
    /// Returned when the material yield strength is not a positive finite number.
    #[error("yield strength must be positive and finite (received {0} Pa)")]
    NonPositiveYieldStrength(f64),
}
