mod report;
mod scenario;

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use report::{render_constraints, render_summary};
use scenario::{build_scenario, Cli};

fn main() -> Result<ExitCode, Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    // Collect the loads, the constraints and any solver settings from the
    // command line and the optional settings file.
    let scenario = build_scenario(&cli)?;

    // Size the tube. Invalid inputs are rejected here before any search runs;
    // an infeasible or unconverged search still returns the best iterate.
    let result = match scenario
        .optimizer
        .optimize(&scenario.loads, &scenario.constraints)
    {
        Ok(result) => result,
        Err(error) => {
            eprintln!("error: {error}");
            return Ok(ExitCode::FAILURE);
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!(
            "{}",
            render_summary(&scenario.loads, &scenario.constraints, &result)
        );
        if cli.list_constraints {
            println!();
            print!(
                "{}",
                render_constraints(
                    &scenario.constraints,
                    scenario.optimizer.design_space(),
                    &result
                )
            );
        }
    }

    Ok(if result.converged() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    })
}
