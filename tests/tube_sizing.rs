#![warn(clippy::pedantic)]

use approx::assert_relative_eq;
use tubeopt::{
    loads, optimize, ConstraintSpecification, DesignSpace, GeometryOptimizer, InputError,
    LoadSpecification, Material, Optimization, OptimizerConfig, Status,
};

/// Relative slack allowed on bounds that are hit exactly in exact arithmetic.
const SLACK: f64 = 1.0e-9;

fn assert_within(value: f64, lower: f64, upper: f64) {
    let scale = value.abs().max(1.0);
    assert!(
        value >= lower - SLACK * scale && value <= upper + SLACK * scale,
        "{value} outside [{lower}, {upper}]"
    );
}

fn assert_valid_design(
    result: &Optimization,
    constraints: &ConstraintSpecification,
    design_space: &DesignSpace,
) {
    assert!(result.converged(), "status was {:?}", result.status);
    let design = &result.design;

    assert_relative_eq!(
        design.outer_diameter,
        design.inner_diameter + 2.0 * design.thickness,
        epsilon = 1.0e-9
    );
    assert!(design.thickness >= constraints.minimum_thickness);
    assert!(design.safety_margins.len() == 2);
    for margin in &design.safety_margins {
        assert!(
            margin.value >= constraints.minimum_safety_margin,
            "{:?} below {}",
            margin,
            constraints.minimum_safety_margin
        );
    }

    let bounds = design_space;
    assert_within(
        design.inner_diameter,
        bounds.inner_diameter.lower,
        bounds.inner_diameter.upper,
    );
    assert_within(
        design.outer_diameter,
        bounds.outer_diameter.lower,
        bounds.outer_diameter.upper,
    );
    assert_within(
        design.outer_diameter / design.thickness,
        bounds.slenderness.lower,
        bounds.slenderness.upper,
    );
    assert_relative_eq!(design.area, design.section().area(), max_relative = 1.0e-12);
}

#[test]
fn reference_case_is_sized_to_the_margin() {
    let constraints = ConstraintSpecification::new(3.0, 0.05);
    let result = optimize(&loads(10.0e3, 5.0e3), &constraints).expect("valid inputs");

    assert_valid_design(&result, &constraints, &DesignSpace::default());
    assert_relative_eq!(result.design.minimum_safety_margin(), 0.05, epsilon = 1.0e-6);
}

#[test]
fn converged_designs_satisfy_every_constraint() {
    let cases = [
        (loads(10.0e3, 5.0e3), ConstraintSpecification::new(3.0, 0.05)),
        (loads(1.0e3, 10.0), ConstraintSpecification::new(1.0, 0.0)),
        (loads(250.0e3, 0.0), ConstraintSpecification::new(2.0, 0.5)),
        (loads(0.0, 20.0e3), ConstraintSpecification::new(4.0, 1.0)),
        (loads(-50.0e3, -8.0e3), ConstraintSpecification::new(1.5, 0.2)),
    ];

    for (loads, constraints) in cases {
        let result = optimize(&loads, &constraints).expect("valid inputs");
        assert_valid_design(&result, &constraints, &DesignSpace::default());
    }
}

#[test]
fn compressive_load_is_checked_at_both_fibres() {
    let loads = loads(-20.0e3, 2.0e3);
    assert!(loads.is_compressive());

    let constraints = ConstraintSpecification::new(2.0, 0.1);
    let result = optimize(&loads, &constraints).expect("valid inputs");
    assert_valid_design(&result, &constraints, &DesignSpace::default());

    // Axial compression adds to the bending compression, so that fibre governs.
    let margins = &result.design.safety_margins;
    assert!(margins[1].value < margins[0].value);
}

#[test]
fn area_grows_with_minimum_thickness() {
    let loads = loads(10.0e3, 5.0e3);
    let areas: Vec<f64> = [1.0, 3.0, 5.0, 8.0]
        .into_iter()
        .map(|thickness| {
            let result = optimize(&loads, &ConstraintSpecification::new(thickness, 0.05))
                .expect("valid inputs");
            assert!(result.converged());
            result.design.area
        })
        .collect();

    for pair in areas.windows(2) {
        assert!(pair[1] >= pair[0] * (1.0 - 1.0e-6), "{areas:?}");
    }
}

#[test]
fn area_grows_with_minimum_safety_margin() {
    let loads = loads(10.0e3, 5.0e3);
    let areas: Vec<f64> = [0.0, 0.5, 1.0, 2.0]
        .into_iter()
        .map(|margin| {
            let result = optimize(&loads, &ConstraintSpecification::new(3.0, margin))
                .expect("valid inputs");
            assert!(result.converged());
            result.design.area
        })
        .collect();

    for pair in areas.windows(2) {
        assert!(pair[1] >= pair[0] * (1.0 - 1.0e-6), "{areas:?}");
    }
    // A margin of 2 needs roughly three times the section modulus.
    assert!(areas[3] > areas[0]);
}

#[test]
fn stronger_material_gives_a_lighter_tube() {
    let loads = loads(10.0e3, 5.0e3);
    let constraints = ConstraintSpecification::new(1.0, 0.05);
    let mild = optimize(&loads, &constraints).expect("valid inputs");
    let strong = GeometryOptimizer::new(
        OptimizerConfig::default(),
        DesignSpace::new().with_material(Material::new(700.0e6)),
    )
    .optimize(&loads, &constraints)
    .expect("valid inputs");

    assert!(strong.converged());
    assert!(strong.design.area < mild.design.area);
}

#[test]
fn repeated_runs_are_identical() {
    let loads = loads(12.5e3, 3.0e3);
    let constraints = ConstraintSpecification::new(2.0, 0.25);
    let first = optimize(&loads, &constraints).expect("valid inputs");
    let second = optimize(&loads, &constraints).expect("valid inputs");
    assert_eq!(first, second);
}

#[test]
fn non_finite_loads_are_rejected() {
    let error = optimize(
        &LoadSpecification::new(f64::NAN, 5.0e3),
        &ConstraintSpecification::new(3.0, 0.05),
    )
    .expect_err("NaN force rejected");
    assert!(matches!(error, InputError::NonFiniteAxialForce(_)));

    let error = optimize(
        &LoadSpecification::new(10.0e3, f64::NEG_INFINITY),
        &ConstraintSpecification::new(3.0, 0.05),
    )
    .expect_err("infinite moment rejected");
    assert!(matches!(error, InputError::NonFiniteBendingMoment(_)));
}

#[test]
fn zero_minimum_thickness_is_rejected() {
    let error = optimize(
        &loads(10.0e3, 5.0e3),
        &ConstraintSpecification::new(0.0, 0.05),
    )
    .expect_err("zero thickness rejected");
    assert_eq!(error, InputError::NonPositiveMinimumThickness(0.0));
}

#[test]
fn impossible_margin_is_reported_not_raised() {
    let result = optimize(
        &loads(0.0, 1.0e9),
        &ConstraintSpecification::new(3.0, 0.0),
    )
    .expect("valid inputs");
    assert_eq!(result.status, Status::Infeasible);
    assert!(result.design.minimum_safety_margin() < 0.0);
}
