#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::boundary::Bounds;

/// Dye density stands in for heat: dense cells rise. Y grows downward, so
/// rising means subtracting from `vy`.
#[inline]
pub fn apply_buoyancy(vy: &mut [f32], density: &[f32], force: f32, dt: f32) {
    let k = force * dt;

    #[cfg(feature = "parallel")]
    {
        vy.par_iter_mut()
            .zip(density.par_iter())
            .for_each(|(v, &d)| *v -= d * k);
    }
    #[cfg(not(feature = "parallel"))]
    {
        for (v, &d) in vy.iter_mut().zip(density.iter()) {
            *v -= d * k;
        }
    }
}

/// Vorticity confinement (Fedkiw et al. 2001): push velocity along
/// `N x w`, where `N` points toward stronger curl, to put back the small
/// swirls numerical diffusion removes. `curl` is scratch space sized like
/// the fields; the projection overwrites it right after.
pub fn vorticity_confinement(
    vx: &mut [f32],
    vy: &mut [f32],
    curl: &mut [f32],
    strength: f32,
    dt: f32,
    bounds: &Bounds,
) {
    let w = bounds.width;
    let h = bounds.height;

    curl.fill(0.0);
    for j in 1..h - 1 {
        let row = j * w;
        for i in 1..w - 1 {
            let idx = row + i;
            let dvy_dx = (*fast!(vy, [idx + 1]) - *fast!(vy, [idx - 1])) * 0.5;
            let dvx_dy = (*fast!(vx, [idx + w]) - *fast!(vx, [idx - w])) * 0.5;
            fast!(curl, [idx] = dvy_dx - dvx_dy);
        }
    }

    // Needs |curl| on both sides, so stay two cells off the walls.
    for j in 2..h.saturating_sub(2) {
        let row = j * w;
        for i in 2..w.saturating_sub(2) {
            let idx = row + i;
            let eta_x = (fast!(curl, [idx + 1]).abs() - fast!(curl, [idx - 1]).abs()) * 0.5;
            let eta_y = (fast!(curl, [idx + w]).abs() - fast!(curl, [idx - w]).abs()) * 0.5;
            let len = (eta_x * eta_x + eta_y * eta_y).sqrt() + 1e-10;
            let omega = *fast!(curl, [idx]);
            fast!(vx, [idx] += dt * strength * (eta_y / len) * omega);
            fast!(vy, [idx] -= dt * strength * (eta_x / len) * omega);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buoyancy_lifts_dense_cells() {
        let mut vy = vec![0.0; 4];
        let density = vec![0.0, 10.0, 0.0, 5.0];
        apply_buoyancy(&mut vy, &density, 2.0, 0.5);
        assert_eq!(vy, vec![0.0, -10.0, 0.0, -5.0]);
    }

    #[test]
    fn confinement_leaves_irrotational_flow_alone() {
        let n = 10;
        let obstacles = vec![0u8; n * n];
        let bounds = Bounds::new(n, n, &obstacles, false);
        let mut vx = vec![1.0; n * n];
        let mut vy = vec![-0.5; n * n];
        let mut curl = vec![0.0; n * n];

        vorticity_confinement(&mut vx, &mut vy, &mut curl, 5.0, 0.1, &bounds);

        assert!(vx.iter().all(|&v| v == 1.0));
        assert!(vy.iter().all(|&v| v == -0.5));
    }

    #[test]
    fn confinement_changes_a_vortex() {
        let n = 12;
        let obstacles = vec![0u8; n * n];
        let bounds = Bounds::new(n, n, &obstacles, false);
        let mut vx = vec![0.0; n * n];
        let mut vy = vec![0.0; n * n];
        // Small clockwise swirl around (6, 6)
        for j in 4..9 {
            for i in 4..9 {
                let dx = i as f32 - 6.0;
                let dy = j as f32 - 6.0;
                vx[j * n + i] = -dy;
                vy[j * n + i] = dx;
            }
        }
        let before = (vx.clone(), vy.clone());
        let mut curl = vec![0.0; n * n];

        vorticity_confinement(&mut vx, &mut vy, &mut curl, 2.0, 0.1, &bounds);

        assert!(curl[6 * n + 6] != 0.0);
        assert!(vx != before.0 || vy != before.1);
        assert!(vx.iter().chain(vy.iter()).all(|v| v.is_finite()));
    }
}
