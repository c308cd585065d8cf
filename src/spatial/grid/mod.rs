//! FluidGrid - Structure of Arrays (SoA) storage for every fluid field
//!
//! Each quantity lives in its own flat row-major array (`i + j * width`),
//! paired with a "previous" buffer where the solver needs one. The grid owns
//! all field storage; the solver only borrows it for the duration of a step.
//!
//! Instead of: Vec<Cell { density, vx, vy, .. }>
//! We have:    density[], vx[], vy[], pressure[]  // linear memory, sweep-friendly

use crate::domain::ScalarField;

/// Injected density is capped here so the renderer's colour ramp stays stable.
pub const MAX_DENSITY: f32 = 255.0;

/// Smallest side that still has an interior cell.
pub const MIN_GRID_SIDE: u32 = 3;

mod indexing;
mod accessors;
mod buffers;
mod diagnostics;

pub use accessors::sampling::bilinear_sample;

/// SoA fluid grid - all per-cell data in separate arrays
#[derive(Clone)]
pub struct FluidGrid {
    width: u32,
    height: u32,
    size: usize,

    // Advected/diffused quantities, each with a ping-pong partner
    pub density: Vec<f32>,
    pub prev_density: Vec<f32>,
    pub vx: Vec<f32>,
    pub prev_vx: Vec<f32>,
    pub vy: Vec<f32>,
    pub prev_vy: Vec<f32>,

    // Projection scratch, recomputed every step
    pub divergence: Vec<f32>,
    pub pressure: Vec<f32>,
    pub prev_pressure: Vec<f32>,

    // 0 = fluid, 1 = solid. Mutated through the obstacle accessors only,
    // so `obstacle_count` stays in sync.
    pub(crate) obstacles: Vec<u8>,
    pub(crate) obstacle_count: usize,
}

impl FluidGrid {
    /// Square grid of side `size`.
    pub fn new(size: u32) -> Self {
        Self::with_dimensions(size, size)
    }

    pub fn with_dimensions(width: u32, height: u32) -> Self {
        let (width, height) = sanitize_dimensions(width, height);
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            size,
            density: vec![0.0; size],
            prev_density: vec![0.0; size],
            vx: vec![0.0; size],
            prev_vx: vec![0.0; size],
            vy: vec![0.0; size],
            prev_vy: vec![0.0; size],
            divergence: vec![0.0; size],
            pressure: vec![0.0; size],
            prev_pressure: vec![0.0; size],
            obstacles: vec![0; size],
            obstacle_count: 0,
        }
    }

    /// Read-only view of one scalar field.
    pub fn field(&self, field: ScalarField) -> &[f32] {
        match field {
            ScalarField::Density => &self.density,
            ScalarField::VelocityX => &self.vx,
            ScalarField::VelocityY => &self.vy,
            ScalarField::Pressure => &self.pressure,
            ScalarField::Divergence => &self.divergence,
        }
    }

    pub fn field_mut(&mut self, field: ScalarField) -> &mut [f32] {
        match field {
            ScalarField::Density => &mut self.density,
            ScalarField::VelocityX => &mut self.vx,
            ScalarField::VelocityY => &mut self.vy,
            ScalarField::Pressure => &mut self.pressure,
            ScalarField::Divergence => &mut self.divergence,
        }
    }

    /// Obstacle flags, one byte per cell.
    pub fn obstacles(&self) -> &[u8] {
        &self.obstacles
    }
}

fn sanitize_dimensions(width: u32, height: u32) -> (u32, u32) {
    if width < MIN_GRID_SIDE || height < MIN_GRID_SIDE {
        log::warn!(
            "grid {}x{} has no interior, raising to at least {}x{}",
            width,
            height,
            MIN_GRID_SIDE,
            MIN_GRID_SIDE
        );
    }
    (width.max(MIN_GRID_SIDE), height.max(MIN_GRID_SIDE))
}
