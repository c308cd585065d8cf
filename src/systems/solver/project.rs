//! Pressure projection (Helmholtz decomposition)
//!
//! Computes the centred divergence of the velocity field, relaxes the
//! pressure Poisson equation from a zero guess, and subtracts the pressure
//! gradient so the remaining field is (approximately) divergence-free.

use super::boundary::{set_bnd, BoundaryMode, Bounds};
use super::relax::Relaxer;

#[allow(clippy::too_many_arguments)]
pub fn project(
    vx: &mut [f32],
    vy: &mut [f32],
    pressure: &mut [f32],
    divergence: &mut [f32],
    iters: u32,
    bounds: &Bounds,
    relaxer: &mut Relaxer,
) {
    let w = bounds.width;
    let h = bounds.height;
    let spacing = 1.0 / bounds.side as f32;

    for j in 1..h - 1 {
        let row = j * w;
        for i in 1..w - 1 {
            let idx = row + i;
            let du = *fast!(vx, [idx + 1]) - *fast!(vx, [idx - 1]);
            let dv = *fast!(vy, [idx + w]) - *fast!(vy, [idx - w]);
            fast!(divergence, [idx] = -0.5 * spacing * (du + dv));
            fast!(pressure, [idx] = 0.0);
        }
    }
    set_bnd(BoundaryMode::Scalar, divergence, bounds);
    set_bnd(BoundaryMode::Scalar, pressure, bounds);

    relaxer.solve(BoundaryMode::Scalar, pressure, divergence, 1.0, 4.0, iters, bounds);

    for j in 1..h - 1 {
        let row = j * w;
        for i in 1..w - 1 {
            let idx = row + i;
            let dpx = *fast!(pressure, [idx + 1]) - *fast!(pressure, [idx - 1]);
            let dpy = *fast!(pressure, [idx + w]) - *fast!(pressure, [idx - w]);
            fast!(vx, [idx] -= 0.5 * dpx / spacing);
            fast!(vy, [idx] -= 0.5 * dpy / spacing);
        }
    }
    set_bnd(BoundaryMode::VelocityX, vx, bounds);
    set_bnd(BoundaryMode::VelocityY, vy, bounds);
}

/// Mean |du/dx + dv/dy| over interior cells, centred differences in cell
/// units. Diagnostic only; the projection itself uses the scaled form.
pub fn mean_abs_divergence(vx: &[f32], vy: &[f32], width: usize, height: usize) -> f32 {
    let mut sum = 0.0f64;
    for j in 1..height - 1 {
        let row = j * width;
        for i in 1..width - 1 {
            let idx = row + i;
            let du = vx[idx + 1] - vx[idx - 1];
            let dv = vy[idx + width] - vy[idx - width];
            sum += (0.5 * (du + dv)).abs() as f64;
        }
    }
    let cells = (width - 2) * (height - 2);
    (sum / cells as f64) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RelaxationScheme;

    /// Outward-pointing blob: a source in the middle of the grid.
    fn source_field(n: usize) -> (Vec<f32>, Vec<f32>) {
        let mut vx = vec![0.0; n * n];
        let mut vy = vec![0.0; n * n];
        let c = n as f32 / 2.0;
        for j in 1..n - 1 {
            for i in 1..n - 1 {
                let dx = i as f32 - c;
                let dy = j as f32 - c;
                let falloff = (-(dx * dx + dy * dy) / 8.0).exp();
                vx[j * n + i] = dx * falloff;
                vy[j * n + i] = dy * falloff;
            }
        }
        (vx, vy)
    }

    #[test]
    fn projection_reduces_divergence() {
        let n = 24;
        let obstacles = vec![0u8; n * n];
        let bounds = Bounds::new(n, n, &obstacles, false);
        let (mut vx, mut vy) = source_field(n);
        let mut p = vec![0.0; n * n];
        let mut div = vec![0.0; n * n];

        let before = mean_abs_divergence(&vx, &vy, n, n);
        let mut relaxer = Relaxer::new(RelaxationScheme::GaussSeidel);
        project(&mut vx, &mut vy, &mut p, &mut div, 40, &bounds, &mut relaxer);
        let after = mean_abs_divergence(&vx, &vy, n, n);

        assert!(before > 0.0);
        assert!(after < before, "divergence {} -> {}", before, after);
    }

    #[test]
    fn zero_field_stays_zero() {
        let n = 8;
        let obstacles = vec![0u8; n * n];
        let bounds = Bounds::new(n, n, &obstacles, false);
        let mut vx = vec![0.0; n * n];
        let mut vy = vec![0.0; n * n];
        let mut p = vec![1.0; n * n];
        let mut div = vec![1.0; n * n];
        let mut relaxer = Relaxer::new(RelaxationScheme::GaussSeidel);
        project(&mut vx, &mut vy, &mut p, &mut div, 10, &bounds, &mut relaxer);
        assert!(vx.iter().chain(vy.iter()).all(|&v| v == 0.0));
        assert!(p.iter().all(|&v| v == 0.0));
    }
}
