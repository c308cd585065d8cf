use super::super::*;

impl FluidGrid {
    // === Solid geometry ===
    // The solver forces every field to 0 on solid cells during each boundary
    // pass; there is no obstacle-aware discretisation beyond that.

    #[inline]
    pub fn is_obstacle(&self, x: i32, y: i32) -> bool {
        self.obstacles[self.ix(x, y)] == 1
    }

    #[inline]
    pub fn obstacle_count(&self) -> usize {
        self.obstacle_count
    }

    /// Mark (or unmark) the clamped cell as solid.
    pub fn set_obstacle(&mut self, x: i32, y: i32, solid: bool) {
        let idx = self.ix(x, y);
        self.set_obstacle_idx(idx, solid);
    }

    /// Mark every on-grid cell within `radius` of (cx, cy).
    pub fn set_obstacle_circle(&mut self, cx: i32, cy: i32, radius: i32, solid: bool) {
        self.for_each_in_radius(cx, cy, radius, |grid, idx| grid.set_obstacle_idx(idx, solid));
    }

    pub fn clear_obstacles(&mut self) {
        self.obstacles.fill(0);
        self.obstacle_count = 0;
    }

    fn set_obstacle_idx(&mut self, idx: usize, solid: bool) {
        let was_solid = self.obstacles[idx] == 1;
        match (was_solid, solid) {
            (false, true) => {
                self.obstacles[idx] = 1;
                self.obstacle_count += 1;
                // Solids read 0 immediately, not only after the next step.
                self.density[idx] = 0.0;
                self.vx[idx] = 0.0;
                self.vy[idx] = 0.0;
            }
            (true, false) => {
                self.obstacles[idx] = 0;
                self.obstacle_count -= 1;
            }
            _ => {}
        }
    }
}
