use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};
use tubeopt::{
    ConstraintSpecification, DesignSpace, GeometryOptimizer, LoadSpecification, OptimizerConfig,
};

/// Command line inputs for a single sizing run.
#[derive(Debug, Parser)]
#[command(name = "tubeopt")]
#[command(about = "Size the lightest hollow tube for an axial force and bending moment")]
#[command(version)]
pub struct Cli {
    /// Axial force in newtons (negative for compression)
    #[arg(long, default_value_t = 10.0e3, allow_negative_numbers = true)]
    pub axial_force: f64,

    /// Bending moment in newton-metres
    #[arg(long, default_value_t = 5.0e3, allow_negative_numbers = true)]
    pub bending_moment: f64,

    /// Minimum wall thickness in millimetres
    #[arg(long, default_value_t = 3.0)]
    pub minimum_thickness: f64,

    /// Minimum safety margin against yield (yield / stress - 1)
    #[arg(long, default_value_t = 0.05, allow_negative_numbers = true)]
    pub minimum_safety_margin: f64,

    /// JSON file with "optimizer" and "design_space" settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the result as JSON instead of a text report
    #[arg(long)]
    pub json: bool,

    /// Append a table of every constraint and whether it is active
    #[arg(long)]
    pub list_constraints: bool,
}

/// Settings file contents. Missing sections keep their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Solver settings.
    pub optimizer: OptimizerConfig,
    /// Geometric bounds and material.
    pub design_space: DesignSpace,
}

impl Settings {
    /// Read settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)
            .map_err(|error| format!("cannot read {}: {error}", path.display()))?;
        let settings = serde_json::from_str(&text)
            .map_err(|error| format!("cannot parse {}: {error}", path.display()))?;
        Ok(settings)
    }
}

/// Everything needed for one optimizer call.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    /// Loads carried by the tube.
    pub loads: LoadSpecification,
    /// Thickness and margin bounds.
    pub constraints: ConstraintSpecification,
    /// Optimizer built from the settings file, or defaults.
    pub optimizer: GeometryOptimizer,
}

/// Translate command line inputs into loads, constraints and an optimizer.
///
/// Values are passed through untouched; validation happens in the optimizer
/// so the report can show the offending input.
pub fn build_scenario(cli: &Cli) -> Result<Scenario, Box<dyn Error>> {
    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    log::debug!("using settings {settings:?}");

    Ok(Scenario {
        loads: LoadSpecification::new(cli.axial_force, cli.bending_moment),
        constraints: ConstraintSpecification::new(
            cli.minimum_thickness,
            cli.minimum_safety_margin,
        ),
        optimizer: GeometryOptimizer::new(settings.optimizer, settings.design_space),
    })
}
