//! Semi-Lagrangian advection
//!
//! Each interior cell traces backward along the velocity field by
//! `dt * (N - 2)` cells and takes the bilinear sample of the previous field
//! there. Unconditionally stable; the price is numerical diffusion.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::spatial::grid::bilinear_sample;

use super::boundary::{set_bnd, BoundaryMode, Bounds};
use super::STEP_COEFF_LIMIT;

#[allow(clippy::too_many_arguments)]
pub fn advect(
    mode: BoundaryMode,
    d: &mut [f32],
    d0: &[f32],
    vx: &[f32],
    vy: &[f32],
    dt: f32,
    bounds: &Bounds,
) {
    let w = bounds.width;
    let h = bounds.height;
    let dt0 = (dt * bounds.interior()).clamp(-STEP_COEFF_LIMIT, STEP_COEFF_LIMIT);

    // Rows only read d0/vx/vy, so they are independent.
    let advect_row = |j: usize, out: &mut [f32]| {
        if j == 0 || j == h - 1 {
            return;
        }
        let row = j * w;
        for i in 1..w - 1 {
            let idx = row + i;
            let x = i as f32 - dt0 * *fast!(vx, [idx]);
            let y = j as f32 - dt0 * *fast!(vy, [idx]);
            fast!(out, [i] = bilinear_sample(d0, w, h, x, y));
        }
    };

    #[cfg(feature = "parallel")]
    {
        d.par_chunks_mut(w)
            .enumerate()
            .for_each(|(j, out)| advect_row(j, out));
    }
    #[cfg(not(feature = "parallel"))]
    {
        for (j, out) in d.chunks_mut(w).enumerate() {
            advect_row(j, out);
        }
    }

    set_bnd(mode, d, bounds);
}
