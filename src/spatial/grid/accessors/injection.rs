use super::super::*;

impl FluidGrid {
    // === Source injection (pointer/touch input) ===
    // Coordinates are grid-space floats mapped upstream from the screen.
    // Off-grid input is clamped onto the nearest edge cell, never rejected.

    /// Add dye at the clamped cell, capping the cell at `MAX_DENSITY`.
    #[inline]
    pub fn add_density(&mut self, x: f32, y: f32, amount: f32) {
        let idx = self.ix_f32(x, y);
        self.density[idx] = (self.density[idx] + amount).min(MAX_DENSITY);
    }

    /// Add velocity at the clamped cell. Magnitude is not limited.
    #[inline]
    pub fn add_velocity(&mut self, x: f32, y: f32, dx: f32, dy: f32) {
        let idx = self.ix_f32(x, y);
        self.vx[idx] += dx;
        self.vy[idx] += dy;
    }

    /// Brush: add dye to every cell within `radius` of (cx, cy).
    /// Brush cells that fall off the grid are skipped, so a brush dragged
    /// past the edge does not pile its whole footprint onto the edge cells.
    pub fn add_density_in_radius(&mut self, cx: i32, cy: i32, radius: i32, amount: f32) {
        self.for_each_in_radius(cx, cy, radius, |grid, idx| {
            grid.density[idx] = (grid.density[idx] + amount).min(MAX_DENSITY);
        });
    }

    /// Brush: add velocity to every cell within `radius` of (cx, cy).
    pub fn add_velocity_in_radius(&mut self, cx: i32, cy: i32, radius: i32, dx: f32, dy: f32) {
        self.for_each_in_radius(cx, cy, radius, |grid, idx| {
            grid.vx[idx] += dx;
            grid.vy[idx] += dy;
        });
    }

    pub(crate) fn for_each_in_radius<F>(&mut self, cx: i32, cy: i32, radius: i32, mut f: F)
    where
        F: FnMut(&mut FluidGrid, usize),
    {
        // Only the part of the disc on the grid is visited, so the cost is
        // bounded by the grid size whatever the radius.
        let (cx, cy) = (cx as i64, cy as i64);
        let radius = (radius as i64).max(0);
        let r2 = radius * radius;
        let x_lo = (cx - radius).max(0);
        let x_hi = (cx + radius).min(self.width() as i64 - 1);
        let y_lo = (cy - radius).max(0);
        let y_hi = (cy + radius).min(self.height() as i64 - 1);

        for y in y_lo..=y_hi {
            let dy = y - cy;
            for x in x_lo..=x_hi {
                let dx = x - cx;
                if dx * dx + dy * dy > r2 {
                    continue;
                }
                let idx = self.index(x as u32, y as u32);
                f(self, idx);
            }
        }
    }
}
