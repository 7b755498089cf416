use tubeopt::{loads, optimize, ConstraintSpecification};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let loads = loads(10.0e3, 5.0e3);

    println!("{:>8}{:>12}{:>12}{:>14}", "margin", "D [mm]", "t [mm]", "A [mm^2]");
    for step in 0..=8 {
        let margin = 0.25 * f64::from(step);
        let result = optimize(&loads, &ConstraintSpecification::new(3.0, margin))?;
        if !result.converged() {
            println!("{margin:>8.2}  {:?}", result.status);
            continue;
        }
        let design = &result.design;
        println!(
            "{margin:>8.2}{:>12.3}{:>12.3}{:>14.3}",
            design.outer_diameter, design.thickness, design.area
        );
    }

    Ok(())
}
