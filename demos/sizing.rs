use tubeopt::{loads, ConstraintSpecification, GeometryOptimizer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 10 kN of tension together with a 5 kN·m bending moment
    let loads = loads(10.0e3, 5.0e3);

    // At least 3 mm of wall and a 5 % margin against yield
    let constraints = ConstraintSpecification::new(3.0, 0.05);

    // Size the tube with the default steel and design bounds
    let optimizer = GeometryOptimizer::default();
    let result = optimizer.optimize(&loads, &constraints)?;

    let design = &result.design;
    println!("Inner Diameter: {:.3} mm", design.inner_diameter);
    println!("Outer Diameter: {:.3} mm", design.outer_diameter);
    println!("Thickness: {:.3} mm", design.thickness);
    for margin in &design.safety_margins {
        println!("Safety Margin ({}): {:.4}", margin.location.label(), margin.value);
    }
    println!("Optimization Converged Successfully: {}", result.converged());

    // All done
    Ok(())
}
