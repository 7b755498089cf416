//! One-dimensional search primitives used by the optimizer.
//!
//! Golden section search narrows a bracket around the minimum of a unimodal
//! function. Bisection locates the boundary of a monotone predicate.

/// The golden ratio: φ = (1 + √5) / 2
const PHI: f64 = 1.618_033_988_749_895;

/// The inverse golden ratio: 1/φ = φ - 1
const INV_PHI: f64 = PHI - 1.0;

/// Upper bound on bisection halvings; 200 halvings exhaust f64 precision.
const MAX_BISECTION_STEPS: usize = 200;

/// Golden section search bracket.
///
/// Maintains the outer interval [left, right] and two interior points
/// positioned according to the golden ratio.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GoldenBracket {
    /// Outer left bound.
    pub(crate) left: f64,
    /// Outer right bound.
    pub(crate) right: f64,
    /// Inner left point at `left + (1 - φ⁻¹) * width`.
    pub(crate) inner_left: f64,
    /// Inner right point at `left + φ⁻¹ * width`.
    pub(crate) inner_right: f64,
}

impl GoldenBracket {
    /// Creates a bracket from bounds, swapping them if reversed.
    pub(crate) fn new(bracket: [f64; 2]) -> Self {
        let [a, b] = bracket;
        let (left, right) = if a <= b { (a, b) } else { (b, a) };
        let width = right - left;
        Self {
            left,
            right,
            inner_left: left + (1.0 - INV_PHI) * width,
            inner_right: left + INV_PHI * width,
        }
    }

    pub(crate) fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Shrinks to `[left, inner_right]`; the old `inner_left` becomes `inner_right`.
    pub(crate) fn shrink_right(&mut self) {
        self.right = self.inner_right;
        self.inner_right = self.inner_left;
        self.inner_left = self.left + (1.0 - INV_PHI) * self.width();
    }

    /// Shrinks to `[inner_left, right]`; the old `inner_right` becomes `inner_left`.
    pub(crate) fn shrink_left(&mut self) {
        self.left = self.inner_left;
        self.inner_left = self.inner_right;
        self.inner_right = self.left + INV_PHI * self.width();
    }

    /// Relative width test against the bracket midpoint.
    pub(crate) fn is_converged(&self, tolerance: f64) -> bool {
        let mid = 0.5 * (self.left + self.right);
        self.width() <= tolerance * mid.abs()
    }
}

/// Outcome of a golden section search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Minimum {
    /// Best abscissa found.
    pub(crate) x: f64,
    /// Objective at `x`.
    pub(crate) value: f64,
    /// Number of bracket shrinks performed.
    pub(crate) iterations: usize,
    /// Whether the bracket reached the tolerance.
    pub(crate) converged: bool,
}

/// Minimize `objective` on `bracket` with golden section search.
///
/// Infeasible points may return `f64::INFINITY`; they are never reported as
/// the best point unless nothing finite was seen.
pub(crate) fn golden_section<F>(
    mut objective: F,
    bracket: [f64; 2],
    tolerance: f64,
    max_iterations: usize,
) -> Minimum
where
    F: FnMut(f64) -> f64,
{
    let mut bracket = GoldenBracket::new(bracket);
    let mut left = objective(bracket.inner_left);
    let mut right = objective(bracket.inner_right);
    let (mut best_x, mut best_value) = if left <= right {
        (bracket.inner_left, left)
    } else {
        (bracket.inner_right, right)
    };

    for iteration in 0..max_iterations {
        if bracket.is_converged(tolerance) {
            return Minimum {
                x: best_x,
                value: best_value,
                iterations: iteration,
                converged: true,
            };
        }

        let (x, value) = if left <= right {
            bracket.shrink_right();
            right = left;
            left = objective(bracket.inner_left);
            (bracket.inner_left, left)
        } else {
            bracket.shrink_left();
            left = right;
            right = objective(bracket.inner_right);
            (bracket.inner_right, right)
        };
        log::trace!(
            "golden section step {}: x = {x:.6e}, objective = {value:.6e}, width = {:.3e}",
            iteration + 1,
            bracket.width()
        );

        if value < best_value {
            best_x = x;
            best_value = value;
        }
    }

    Minimum {
        x: best_x,
        value: best_value,
        iterations: max_iterations,
        converged: bracket.is_converged(tolerance),
    }
}

/// Smallest value in `[lower, upper]` for which `accept` holds, to a relative
/// `tolerance`.
///
/// `accept` must be monotone: false below a threshold and true above it. The
/// caller guarantees `accept(upper)`; the returned value always satisfies
/// `accept` and the number of evaluations is returned alongside it.
pub(crate) fn bisect<F>(mut accept: F, lower: f64, upper: f64, tolerance: f64) -> (f64, usize)
where
    F: FnMut(f64) -> bool,
{
    let mut rejected = lower;
    let mut accepted = upper;
    let mut evaluations = 0;
    while accepted - rejected > tolerance * accepted.abs() && evaluations < MAX_BISECTION_STEPS {
        let mid = 0.5 * (rejected + accepted);
        evaluations += 1;
        if accept(mid) {
            accepted = mid;
        } else {
            rejected = mid;
        }
    }
    (accepted, evaluations)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn bracket_initialized_with_golden_ratio_points() {
        let bracket = GoldenBracket::new([1.0, 0.0]);

        assert_relative_eq!(bracket.left, 0.0);
        assert_relative_eq!(bracket.right, 1.0);
        assert_relative_eq!(bracket.inner_left, 1.0 - INV_PHI);
        assert_relative_eq!(bracket.inner_right, INV_PHI);
    }

    #[test]
    fn shrinking_reuses_interior_points() {
        let mut bracket = GoldenBracket::new([0.0, 1.0]);
        let old_inner_left = bracket.inner_left;
        bracket.shrink_right();
        assert_relative_eq!(bracket.right, INV_PHI);
        assert_relative_eq!(bracket.inner_right, old_inner_left);

        let old_inner_right = bracket.inner_right;
        bracket.shrink_left();
        assert_relative_eq!(bracket.inner_left, old_inner_right);
        assert_relative_eq!(
            bracket.inner_right,
            bracket.left + INV_PHI * bracket.width()
        );
    }

    #[test]
    fn golden_section_finds_parabola_minimum() {
        let minimum = golden_section(|x| (x - 2.0).powi(2) + 1.0, [0.0, 5.0], 1.0e-10, 200);

        assert!(minimum.converged);
        assert_relative_eq!(minimum.x, 2.0, epsilon = 1.0e-6);
        assert_relative_eq!(minimum.value, 1.0, epsilon = 1.0e-10);
    }

    #[test]
    fn golden_section_skips_infeasible_region() {
        let objective = |x: f64| if x < 3.0 { f64::INFINITY } else { x };
        let minimum = golden_section(objective, [1.0, 6.0], 1.0e-10, 200);

        assert!(minimum.converged);
        assert!(minimum.value.is_finite());
        assert_relative_eq!(minimum.x, 3.0, epsilon = 1.0e-6);
    }

    #[test]
    fn golden_section_reports_iteration_limit() {
        let minimum = golden_section(|x| x * x, [-1.0, 3.0], 1.0e-12, 3);

        assert!(!minimum.converged);
        assert_eq!(minimum.iterations, 3);
    }

    #[test]
    fn bisection_returns_accepted_side() {
        let (threshold, evaluations) = bisect(|x| x * x >= 2.0, 0.0, 4.0, 1.0e-12);

        assert!(threshold * threshold >= 2.0);
        assert_relative_eq!(threshold, 2.0_f64.sqrt(), max_relative = 1.0e-11);
        assert!(evaluations > 0);
    }
}
