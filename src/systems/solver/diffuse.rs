use super::boundary::{BoundaryMode, Bounds};
use super::relax::Relaxer;
use super::STEP_COEFF_LIMIT;

/// Implicit diffusion: solve `x - a * laplacian(x) = x0` with
/// `a = dt * rate * (N - 2)^2`. Stable for any `dt`; accuracy is bounded by
/// the sweep count.
#[allow(clippy::too_many_arguments)]
pub fn diffuse(
    mode: BoundaryMode,
    x: &mut [f32],
    x0: &[f32],
    rate: f32,
    dt: f32,
    iters: u32,
    bounds: &Bounds,
    relaxer: &mut Relaxer,
) {
    let n = bounds.interior();
    let a = (dt * rate * n * n).min(STEP_COEFF_LIMIT);
    relaxer.solve(mode, x, x0, a, 1.0 + 4.0 * a, iters, bounds);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RelaxationScheme;

    #[test]
    fn spreads_a_point_to_its_neighbours_and_keeps_it_peaked() {
        let n = 10;
        let obstacles = vec![0u8; n * n];
        let bounds = Bounds::new(n, n, &obstacles, false);
        let mut x0 = vec![0.0; n * n];
        let centre = 5 * n + 5;
        x0[centre] = 100.0;
        let mut x = vec![0.0; n * n];

        let mut relaxer = Relaxer::new(RelaxationScheme::GaussSeidel);
        diffuse(BoundaryMode::Scalar, &mut x, &x0, 0.01, 0.1, 20, &bounds, &mut relaxer);

        for neighbour in [centre - 1, centre + 1, centre - n, centre + n] {
            assert!(x[neighbour] > 0.0);
            assert!(x[neighbour] < x[centre]);
        }
        assert!(x[centre] < 100.0);
    }

    #[test]
    fn wall_cell_reflects_x_velocity_exactly() {
        let n = 8;
        let obstacles = vec![0u8; n * n];
        let bounds = Bounds::new(n, n, &obstacles, false);
        let mut x0 = vec![0.0; n * n];
        let inside = 4 * n + 1;
        x0[inside] = 3.0;
        let mut x = x0.clone();

        let mut relaxer = Relaxer::new(RelaxationScheme::GaussSeidel);
        diffuse(BoundaryMode::VelocityX, &mut x, &x0, 0.001, 0.1, 1, &bounds, &mut relaxer);

        assert_ne!(x[inside], 0.0);
        assert_eq!(x[4 * n], -x[inside]);
    }
}
