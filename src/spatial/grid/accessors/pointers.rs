use super::super::*;

impl FluidGrid {
    // === Raw pointers for zero-copy reads from JS ===
    // Valid until the next `reset` (which reallocates) or `swap` (which
    // exchanges buffers); re-read them after every step.

    pub fn density_ptr(&self) -> *const f32 {
        self.density.as_ptr()
    }

    pub fn vx_ptr(&self) -> *const f32 {
        self.vx.as_ptr()
    }

    pub fn vy_ptr(&self) -> *const f32 {
        self.vy.as_ptr()
    }

    pub fn pressure_ptr(&self) -> *const f32 {
        self.pressure.as_ptr()
    }

    pub fn obstacles_ptr(&self) -> *const u8 {
        self.obstacles.as_ptr()
    }

    pub fn field_ptr(&self, field: ScalarField) -> *const f32 {
        self.field(field).as_ptr()
    }
}
