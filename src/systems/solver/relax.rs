//! Iterative solve of `c * x[i] - a * sum4(x) = x0[i]` over the interior.
//!
//! Gauss-Seidel updates in place and is the reference behaviour. Jacobi
//! reads only the previous sweep, which makes every row independent; under
//! the `parallel` feature rows run on rayon. Jacobi needs more sweeps for the
//! same residual, so switching schemes changes results, not just speed.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::RelaxationScheme;

use super::boundary::{set_bnd, BoundaryMode, Bounds};

/// Relaxation scheme plus the Jacobi double buffer, reused across steps.
#[derive(Clone, Debug, Default)]
pub struct Relaxer {
    scheme: RelaxationScheme,
    scratch: Vec<f32>,
}

impl Relaxer {
    pub fn new(scheme: RelaxationScheme) -> Self {
        Relaxer { scheme, scratch: Vec::new() }
    }

    pub fn scheme(&self) -> RelaxationScheme {
        self.scheme
    }

    pub fn set_scheme(&mut self, scheme: RelaxationScheme) {
        self.scheme = scheme;
    }

    /// `iters` sweeps, boundary conditions re-applied after each one.
    #[allow(clippy::too_many_arguments)]
    pub fn solve(
        &mut self,
        mode: BoundaryMode,
        x: &mut [f32],
        x0: &[f32],
        a: f32,
        c: f32,
        iters: u32,
        bounds: &Bounds,
    ) {
        match self.scheme {
            RelaxationScheme::GaussSeidel => lin_solve(mode, x, x0, a, c, iters, bounds),
            RelaxationScheme::Jacobi => {
                if self.scratch.len() != x.len() {
                    self.scratch.resize(x.len(), 0.0);
                }
                jacobi(mode, x, x0, a, c, iters, bounds, &mut self.scratch);
            }
        }
    }
}

/// Gauss-Seidel sweeps in place, the reference scheme.
pub fn lin_solve(
    mode: BoundaryMode,
    x: &mut [f32],
    x0: &[f32],
    a: f32,
    c: f32,
    iters: u32,
    bounds: &Bounds,
) {
    let w = bounds.width;
    let h = bounds.height;
    let c_recip = 1.0 / c;

    for _ in 0..iters {
        for j in 1..h - 1 {
            let row = j * w;
            for i in 1..w - 1 {
                let idx = row + i;
                let neighbours = *fast!(x, [idx - 1])
                    + *fast!(x, [idx + 1])
                    + *fast!(x, [idx - w])
                    + *fast!(x, [idx + w]);
                fast!(x, [idx] = (*fast!(x0, [idx]) + a * neighbours) * c_recip);
            }
        }
        set_bnd(mode, x, bounds);
    }
}

#[allow(clippy::too_many_arguments)]
fn jacobi(
    mode: BoundaryMode,
    x: &mut [f32],
    x0: &[f32],
    a: f32,
    c: f32,
    iters: u32,
    bounds: &Bounds,
    scratch: &mut [f32],
) {
    let w = bounds.width;
    let h = bounds.height;
    let c_recip = 1.0 / c;

    for _ in 0..iters {
        {
            let src: &[f32] = x;
            let relax_row = |j: usize, out: &mut [f32]| {
                if j == 0 || j == h - 1 {
                    return;
                }
                let row = j * w;
                for i in 1..w - 1 {
                    let idx = row + i;
                    let neighbours = *fast!(src, [idx - 1])
                        + *fast!(src, [idx + 1])
                        + *fast!(src, [idx - w])
                        + *fast!(src, [idx + w]);
                    fast!(out, [i] = (*fast!(x0, [idx]) + a * neighbours) * c_recip);
                }
            };

            #[cfg(feature = "parallel")]
            {
                scratch
                    .par_chunks_mut(w)
                    .enumerate()
                    .for_each(|(j, out)| relax_row(j, out));
            }
            #[cfg(not(feature = "parallel"))]
            {
                for (j, out) in scratch.chunks_mut(w).enumerate() {
                    relax_row(j, out);
                }
            }
        }

        for j in 1..h - 1 {
            let row = j * w;
            x[row + 1..row + w - 1].copy_from_slice(&scratch[row + 1..row + w - 1]);
        }
        set_bnd(mode, x, bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn max_residual(x: &[f32], x0: &[f32], a: f32, c: f32, w: usize, h: usize) -> f32 {
        let mut worst = 0.0f32;
        for j in 1..h - 1 {
            for i in 1..w - 1 {
                let idx = j * w + i;
                let lhs = c * x[idx] - a * (x[idx - 1] + x[idx + 1] + x[idx - w] + x[idx + w]);
                worst = worst.max((lhs - x0[idx]).abs());
            }
        }
        worst
    }

    #[test]
    fn zero_coupling_copies_source() {
        let (w, h) = (6, 6);
        let obstacles = vec![0u8; w * h];
        let bounds = Bounds::new(w, h, &obstacles, false);
        let x0: Vec<f32> = (0..w * h).map(|i| (i % 7) as f32).collect();
        let mut x = vec![0.0; w * h];

        Relaxer::new(RelaxationScheme::GaussSeidel)
            .solve(BoundaryMode::Scalar, &mut x, &x0, 0.0, 1.0, 3, &bounds);

        for j in 1..h - 1 {
            for i in 1..w - 1 {
                assert_eq!(x[j * w + i], x0[j * w + i]);
            }
        }
    }

    #[test]
    fn both_schemes_reduce_the_residual() {
        let (w, h) = (12, 12);
        let obstacles = vec![0u8; w * h];
        let bounds = Bounds::new(w, h, &obstacles, false);
        let mut x0 = vec![0.0; w * h];
        x0[6 * w + 6] = 10.0;
        let (a, c) = (0.5, 3.0);

        for scheme in [RelaxationScheme::GaussSeidel, RelaxationScheme::Jacobi] {
            let mut relaxer = Relaxer::new(scheme);
            let mut x = vec![0.0; w * h];
            let before = max_residual(&x, &x0, a, c, w, h);
            relaxer.solve(BoundaryMode::Scalar, &mut x, &x0, a, c, 30, &bounds);
            let after = max_residual(&x, &x0, a, c, w, h);
            assert!(after < before * 0.01, "{:?}: {} -> {}", scheme, before, after);
        }
    }

    #[test]
    fn jacobi_differs_from_gauss_seidel_after_one_sweep() {
        let (w, h) = (8, 8);
        let obstacles = vec![0u8; w * h];
        let bounds = Bounds::new(w, h, &obstacles, false);
        let mut x0 = vec![0.0; w * h];
        x0[3 * w + 3] = 1.0;

        let mut gs = vec![0.0; w * h];
        Relaxer::new(RelaxationScheme::GaussSeidel)
            .solve(BoundaryMode::Scalar, &mut gs, &x0, 1.0, 4.0, 1, &bounds);
        let mut jac = vec![0.0; w * h];
        Relaxer::new(RelaxationScheme::Jacobi)
            .solve(BoundaryMode::Scalar, &mut jac, &x0, 1.0, 4.0, 1, &bounds);

        // Gauss-Seidel already propagated into the next cell of the sweep.
        assert!(gs[3 * w + 4] > 0.0);
        assert_eq!(jac[3 * w + 4], 0.0);
        assert_eq!(jac[3 * w + 3], 0.25);
    }
}
