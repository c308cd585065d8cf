use super::super::*;

/// Bilinear sample of a `width x height` field at fractional cell coordinates.
///
/// `x` is clamped to `[0.5, width - 1.5]` and `y` to `[0.5, height - 1.5]`,
/// so the 2x2 footprint never leaves the array. Semi-Lagrangian advection
/// samples through this same function.
#[inline]
pub fn bilinear_sample(field: &[f32], width: usize, height: usize, x: f32, y: f32) -> f32 {
    debug_assert_eq!(field.len(), width * height);

    let x = x.clamp(0.5, width as f32 - 1.5);
    let y = y.clamp(0.5, height as f32 - 1.5);

    let i0 = x.floor() as usize;
    let i1 = i0 + 1;
    let j0 = y.floor() as usize;
    let j1 = j0 + 1;

    let s1 = x - i0 as f32;
    let s0 = 1.0 - s1;
    let t1 = y - j0 as f32;
    let t0 = 1.0 - t1;

    let row0 = j0 * width;
    let row1 = j1 * width;

    s0 * (t0 * *fast!(field, [i0 + row0]) + t1 * *fast!(field, [i0 + row1]))
        + s1 * (t0 * *fast!(field, [i1 + row0]) + t1 * *fast!(field, [i1 + row1]))
}

impl FluidGrid {
    /// Bilinear sample of one of the grid's fields at fractional coordinates.
    pub fn interpolated_value(&self, field: ScalarField, x: f32, y: f32) -> f32 {
        bilinear_sample(
            self.field(field),
            self.width as usize,
            self.height as usize,
            x,
            y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp_grid() -> FluidGrid {
        let mut grid = FluidGrid::new(8);
        for y in 0..8 {
            for x in 0..8 {
                let idx = grid.index(x, y);
                grid.density[idx] = x as f32 + 10.0 * y as f32;
            }
        }
        grid
    }

    #[test]
    fn exact_on_cell_centres() {
        let grid = ramp_grid();
        assert_eq!(grid.interpolated_value(ScalarField::Density, 3.0, 4.0), 43.0);
    }

    #[test]
    fn linear_between_cells() {
        let grid = ramp_grid();
        let v = grid.interpolated_value(ScalarField::Density, 2.5, 3.5);
        assert!((v - 37.5).abs() < 1e-5);
    }

    #[test]
    fn clamps_to_half_cell_inside_edges() {
        let grid = ramp_grid();
        let low = grid.interpolated_value(ScalarField::Density, -20.0, -20.0);
        assert!((low - grid.interpolated_value(ScalarField::Density, 0.5, 0.5)).abs() < 1e-6);
        let high = grid.interpolated_value(ScalarField::Density, 100.0, 100.0);
        // Clamped to (6.5, 6.5)
        assert!((high - 71.5).abs() < 1e-4);
    }

    #[test]
    fn works_on_velocity_fields() {
        let mut grid = FluidGrid::new(8);
        let idx = grid.index(4, 4);
        grid.vx[idx] = 2.0;
        let v = grid.interpolated_value(ScalarField::VelocityX, 3.5, 4.0);
        assert!((v - 1.0).abs() < 1e-6);
    }
}
