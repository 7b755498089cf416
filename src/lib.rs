#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

mod config;
mod constraints;
mod design_space;
mod errors;
mod loads;
mod material;
mod optimizer;
mod search;
mod section;

pub use config::{InitialGuess, OptimizerConfig};
pub use constraints::ConstraintSpecification;
pub use design_space::{Bounds, DesignSpace};
pub use errors::{ConfigError, InputError};
pub use loads::{loads, LoadSpecification};
pub use material::Material;
pub use optimizer::{optimize, GeometryOptimizer, Optimization, Status, TubeDesign};
pub use section::{tube, FibreStress, MarginLocation, SafetyMargin, TubeSection};
