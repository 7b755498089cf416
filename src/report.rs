use std::fmt::Write;

use tubeopt::{ConstraintSpecification, DesignSpace, LoadSpecification, Optimization, Status};

/// Render a textual summary of a sizing run.
///
/// Dimensions are rounded to micrometres and margins to four decimals, which
/// is finer than any tube is manufactured to.
#[must_use]
pub fn render_summary(
    loads: &LoadSpecification,
    constraints: &ConstraintSpecification,
    result: &Optimization,
) -> String {
    let mut output = String::new();
    let design = &result.design;

    writeln!(
        &mut output,
        "Tube sizing (axial force = {:.1} N, bending moment = {:.1} N·m)",
        loads.axial_force, loads.bending_moment
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Constraints: thickness >= {:.3} mm, safety margin >= {:.4}",
        constraints.minimum_thickness, constraints.minimum_safety_margin
    )
    .expect("writing to string cannot fail");

    writeln!(&mut output, "Inner Diameter: {:.3} mm", design.inner_diameter)
        .expect("writing to string cannot fail");
    writeln!(&mut output, "Outer Diameter: {:.3} mm", design.outer_diameter)
        .expect("writing to string cannot fail");
    writeln!(&mut output, "Thickness: {:.3} mm", design.thickness)
        .expect("writing to string cannot fail");
    writeln!(&mut output, "Area: {:.3} mm^2", design.area).expect("writing to string cannot fail");
    for margin in &design.safety_margins {
        writeln!(
            &mut output,
            "Safety Margin ({}): {:.4}",
            margin.location.label(),
            margin.value
        )
        .expect("writing to string cannot fail");
    }

    writeln!(
        &mut output,
        "Optimization Converged Successfully: {}",
        result.converged()
    )
    .expect("writing to string cannot fail");

    // Unconverged geometry is still shown so the user can see how far off it is.
    match result.status {
        Status::Converged => {}
        Status::IterationLimit => output.push_str(
            "Warning: iteration limit reached; the design is feasible but may not be the lightest\n",
        ),
        Status::Infeasible => output.push_str(
            "Warning: no tube in the design space meets the constraints; the design above is NOT valid\n",
        ),
    }

    output
}

/// Render every constraint with its value, bounds and whether it is active.
#[must_use]
pub fn render_constraints(
    constraints: &ConstraintSpecification,
    design_space: &DesignSpace,
    result: &Optimization,
) -> String {
    let design = &result.design;
    let section = design.section();
    let rows = [
        (
            "thickness [mm]",
            design.thickness,
            constraints.minimum_thickness,
            f64::INFINITY,
        ),
        (
            "safety margin",
            design.minimum_safety_margin(),
            constraints.minimum_safety_margin,
            f64::INFINITY,
        ),
        (
            "D/t",
            section.slenderness(),
            design_space.slenderness.lower,
            design_space.slenderness.upper,
        ),
        (
            "inner diameter [mm]",
            design.inner_diameter,
            design_space.inner_diameter.lower,
            design_space.inner_diameter.upper,
        ),
        (
            "outer diameter [mm]",
            design.outer_diameter,
            design_space.outer_diameter.lower,
            design_space.outer_diameter.upper,
        ),
    ];

    let mut output = String::new();
    writeln!(
        &mut output,
        "{:<22}{:>14}{:>14}{:>14}  status",
        "constraint", "value", "lower", "upper"
    )
    .expect("writing to string cannot fail");
    for (name, value, lower, upper) in rows {
        writeln!(
            &mut output,
            "{name:<22}{value:>14.4}{lower:>14.4}{upper:>14.4}  {}",
            activity(value, lower, upper)
        )
        .expect("writing to string cannot fail");
    }
    output
}

/// Classify a constraint value against its bounds.
fn activity(value: f64, lower: f64, upper: f64) -> &'static str {
    let scale = value.abs().max(1.0);
    if value < lower - 1.0e-9 * scale || value > upper + 1.0e-9 * scale {
        "violated"
    } else if (value - lower).abs() <= 1.0e-6 * scale || (upper - value).abs() <= 1.0e-6 * scale {
        "active"
    } else {
        "inactive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tubeopt::{MarginLocation, SafetyMargin, TubeDesign};

    fn sample_result(status: Status) -> Optimization {
        Optimization {
            status,
            design: TubeDesign {
                inner_diameter: 75.6,
                outer_diameter: 82.5,
                thickness: 3.45,
                area: 856.8,
                safety_margins: vec![
                    SafetyMargin {
                        location: MarginLocation::TensionFibre,
                        value: 0.05,
                    },
                    SafetyMargin {
                        location: MarginLocation::CompressionFibre,
                        value: 0.1234,
                    },
                ],
            },
            iterations: 40,
            evaluations: 900,
        }
    }

    #[test]
    fn formats_human_readable_report() {
        let report = render_summary(
            &LoadSpecification::new(10.0e3, 5.0e3),
            &ConstraintSpecification::new(3.0, 0.05),
            &sample_result(Status::Converged),
        );
        assert!(report.contains("axial force = 10000.0 N"));
        assert!(report.contains("Outer Diameter: 82.500 mm"));
        assert!(report.contains("Safety Margin (tension fibre): 0.0500"));
        assert!(report.contains("Optimization Converged Successfully: true"));
        assert!(!report.contains("Warning"));
    }

    #[test]
    fn warns_when_design_is_not_valid() {
        let report = render_summary(
            &LoadSpecification::new(0.0, 1.0e9),
            &ConstraintSpecification::new(3.0, 0.0),
            &sample_result(Status::Infeasible),
        );
        assert!(report.contains("Optimization Converged Successfully: false"));
        assert!(report.contains("NOT valid"));
    }

    #[test]
    fn marks_binding_constraints_active() {
        let table = render_constraints(
            &ConstraintSpecification::new(3.0, 0.05),
            &DesignSpace::default(),
            &sample_result(Status::Converged),
        );
        let margin_row = table
            .lines()
            .find(|line| line.starts_with("safety margin"))
            .expect("margin row present");
        assert!(margin_row.ends_with("  active"));
        let thickness_row = table
            .lines()
            .find(|line| line.starts_with("thickness"))
            .expect("thickness row present");
        assert!(thickness_row.ends_with("  inactive"));
    }

    #[test]
    fn classifies_violations() {
        assert_eq!(activity(2.0, 3.0, f64::INFINITY), "violated");
        assert_eq!(activity(3.0, 3.0, f64::INFINITY), "active");
        assert_eq!(activity(10.0, 2.0, 25.0), "inactive");
    }
}
