use std::mem;

use crate::core::EngineError;
use crate::domain::FieldKind;

use super::*;

impl FluidGrid {
    // === Ping-pong ===

    /// Exchange the current and previous buffers of a field by handle.
    /// Only the `Vec` headers move; cell data is never copied.
    pub fn swap(&mut self, field: FieldKind) {
        match field {
            FieldKind::Density => mem::swap(&mut self.density, &mut self.prev_density),
            FieldKind::Velocity => {
                mem::swap(&mut self.vx, &mut self.prev_vx);
                mem::swap(&mut self.vy, &mut self.prev_vy);
            }
            // Pressure is re-solved from zero every projection; nothing to swap.
            FieldKind::Pressure => {}
        }
    }

    // === Lifecycle ===

    /// Reallocate every field (obstacles included) at the new size, zeroed.
    /// Also used as the full stability reset.
    pub fn reset(&mut self, width: u32, height: u32) {
        *self = FluidGrid::with_dimensions(width, height);
    }

    /// Zero all fluid state, keeping the size and the obstacle layout.
    pub fn clear(&mut self) {
        self.density.fill(0.0);
        self.prev_density.fill(0.0);
        self.vx.fill(0.0);
        self.prev_vx.fill(0.0);
        self.vy.fill(0.0);
        self.prev_vy.fill(0.0);
        self.divergence.fill(0.0);
        self.pressure.fill(0.0);
        self.prev_pressure.fill(0.0);
    }

    /// Copy externally produced data (a saved frame, an image-derived dye
    /// map) into one field. On a size mismatch the load is skipped, logged,
    /// and the grid is left untouched.
    pub fn load_field(&mut self, field: ScalarField, data: &[f32]) -> Result<(), EngineError> {
        if data.len() != self.size {
            log::warn!(
                "load_field({}): got {} values for a {}x{} grid, skipping",
                field.name(),
                data.len(),
                self.width,
                self.height
            );
            return Err(EngineError::DimensionMismatch {
                field: field.name(),
                expected: self.size,
                actual: data.len(),
            });
        }
        self.field_mut(field).copy_from_slice(data);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn velocity_swap_moves_both_components_together() {
        let mut grid = FluidGrid::new(8);
        grid.vx[3] = 1.0;
        grid.vy[3] = 2.0;
        let vx_ptr = grid.vx.as_ptr();

        grid.swap(FieldKind::Velocity);

        assert_eq!(grid.prev_vx[3], 1.0);
        assert_eq!(grid.prev_vy[3], 2.0);
        assert_eq!(grid.vx[3], 0.0);
        assert_eq!(grid.vy[3], 0.0);
        // Handle swap, not a copy
        assert_eq!(grid.prev_vx.as_ptr(), vx_ptr);
    }

    #[test]
    fn density_swap_leaves_velocity_alone() {
        let mut grid = FluidGrid::new(8);
        grid.density[5] = 7.0;
        grid.vx[5] = 1.0;
        grid.swap(FieldKind::Density);
        assert_eq!(grid.prev_density[5], 7.0);
        assert_eq!(grid.density[5], 0.0);
        assert_eq!(grid.vx[5], 1.0);
    }

    #[test]
    fn pressure_swap_is_a_no_op() {
        let mut grid = FluidGrid::new(8);
        grid.pressure[2] = 4.0;
        grid.prev_pressure[2] = -4.0;
        grid.swap(FieldKind::Pressure);
        assert_eq!(grid.pressure[2], 4.0);
        assert_eq!(grid.prev_pressure[2], -4.0);
    }

    #[test]
    fn reset_resizes_and_zeroes_everything() {
        let mut grid = FluidGrid::new(8);
        grid.add_density(2.0, 2.0, 10.0);
        grid.add_velocity(2.0, 2.0, 1.0, 1.0);
        grid.set_obstacle(3, 3, true);

        grid.reset(12, 12);

        assert_eq!(grid.size(), 144);
        assert_eq!(grid.density.len(), 144);
        assert_eq!(grid.prev_vy.len(), 144);
        assert_eq!(grid.obstacles().len(), 144);
        assert_eq!(grid.total_density(), 0.0);
        assert_eq!(grid.obstacle_count(), 0);
        assert!(grid.vx.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn clear_keeps_obstacles() {
        let mut grid = FluidGrid::new(8);
        grid.add_density(2.0, 2.0, 10.0);
        grid.set_obstacle(3, 3, true);
        grid.clear();
        assert_eq!(grid.total_density(), 0.0);
        assert!(grid.is_obstacle(3, 3));
    }

    #[test]
    fn load_field_with_wrong_length_is_skipped() {
        let mut grid = FluidGrid::new(4);
        grid.density[0] = 1.0;

        let err = grid.load_field(ScalarField::Density, &[9.0; 10]).unwrap_err();

        assert_eq!(
            err,
            EngineError::DimensionMismatch { field: "density", expected: 16, actual: 10 }
        );
        assert_eq!(grid.density[0], 1.0);
        assert_eq!(grid.total_density(), 1.0);
    }

    #[test]
    fn load_field_copies_matching_data() {
        let mut grid = FluidGrid::new(4);
        let data: Vec<f32> = (0..16).map(|i| i as f32).collect();
        grid.load_field(ScalarField::VelocityY, &data).unwrap();
        assert_eq!(grid.vy, data);
    }
}
