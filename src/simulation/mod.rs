//! FluidSim - the simulation the host drives
//!
//! Owns the grid and the solver and sequences host commands between steps:
//! injection and brush strokes, obstacles, settings, and read-back for the
//! renderer. All fluid math lives in `systems::solver`; this layer only
//! orchestrates, counts frames, and collects perf numbers.
//!
//! `FluidWorld` in `facade.rs` is the `#[wasm_bindgen]` wrapper JS talks to.

use crate::core::utils::PerfTimer;
use crate::core::EngineError;
use crate::domain::{FieldKind, ScalarField, SolverConfig};
use crate::spatial::FluidGrid;
use crate::systems::FluidSolver;

#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "render/view.rs"]
mod view;
mod facade;

pub use facade::FluidWorld;
pub use perf_stats::PerfStats;
pub use view::ViewMode;

/// The simulation: grid + solver + host-facing state
pub struct FluidSim {
    grid: FluidGrid,
    solver: FluidSolver,

    // State
    frame: u64,
    view_mode: ViewMode,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl FluidSim {
    /// Square `size x size` grid with the default solver settings.
    pub fn new(size: u32) -> Self {
        init::create_fluid_sim(size, size, SolverConfig::default())
    }

    /// Rectangular grid; the solver scales by the longer side.
    pub fn with_dimensions(width: u32, height: u32) -> Self {
        init::create_fluid_sim(width, height, SolverConfig::default())
    }

    pub fn with_config(size: u32, config: SolverConfig) -> Self {
        init::create_fluid_sim(size, size, config)
    }

    /// Parse and validate a JSON config before building the simulation.
    pub fn from_config_json(size: u32, json: &str) -> Result<Self, EngineError> {
        let config = SolverConfig::from_json(json)?;
        Ok(init::create_fluid_sim(size, size, config))
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    /// Cell count of every field.
    pub fn size(&self) -> usize { self.grid.size() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn grid(&self) -> &FluidGrid { &self.grid }

    pub fn grid_mut(&mut self) -> &mut FluidGrid { &mut self.grid }

    // === Settings ===

    /// Replace the solver settings. Invalid configs are refused and the
    /// current settings kept.
    pub fn set_config(&mut self, config: SolverConfig) -> Result<(), EngineError> {
        settings::set_config(self, config)
    }

    pub fn load_config_json(&mut self, json: &str) -> Result<(), EngineError> {
        settings::load_config_json(self, json)
    }

    pub fn config(&self) -> &SolverConfig {
        self.solver.config()
    }

    /// Override the relaxation sweep count without touching the rest of the
    /// config. 0 is run as 1.
    pub fn set_iterations(&mut self, iterations: u32) {
        settings::set_iterations(self, iterations);
    }

    pub fn iterations(&self) -> u32 {
        self.solver.iter
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    // === Commands ===

    pub fn add_density(&mut self, x: f32, y: f32, amount: f32) {
        commands::add_density(self, x, y, amount);
    }

    pub fn add_velocity(&mut self, x: f32, y: f32, dx: f32, dy: f32) {
        commands::add_velocity(self, x, y, dx, dy);
    }

    pub fn add_density_in_radius(&mut self, cx: i32, cy: i32, radius: i32, amount: f32) {
        commands::add_density_in_radius(self, cx, cy, radius, amount);
    }

    pub fn add_velocity_in_radius(&mut self, cx: i32, cy: i32, radius: i32, dx: f32, dy: f32) {
        commands::add_velocity_in_radius(self, cx, cy, radius, dx, dy);
    }

    /// Brush stroke: dye and push in one disc.
    pub fn splat(&mut self, x: f32, y: f32, radius: f32, amount: f32, dx: f32, dy: f32) {
        commands::splat(self, x, y, radius, amount, dx, dy);
    }

    pub fn set_obstacle(&mut self, x: i32, y: i32, solid: bool) {
        commands::set_obstacle(self, x, y, solid);
    }

    pub fn set_obstacle_circle(&mut self, cx: i32, cy: i32, radius: i32, solid: bool) {
        commands::set_obstacle_circle(self, cx, cy, radius, solid);
    }

    pub fn clear_obstacles(&mut self) {
        commands::clear_obstacles(self);
    }

    /// Zero the fluid, keep size, obstacles and frame counter.
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    /// Reallocate at a new size; obstacles and the frame counter go too.
    pub fn reset(&mut self, width: u32, height: u32) {
        commands::reset(self, width, height);
    }

    pub fn swap_field(&mut self, field: FieldKind) {
        self.grid.swap(field);
    }

    pub fn load_field(&mut self, field: ScalarField, data: &[f32]) -> Result<(), EngineError> {
        self.grid.load_field(field, data)
    }

    // === Step ===

    /// Advance by `dt` seconds and bump the frame counter.
    pub fn step(&mut self, dt: f32) {
        step::step(self, dt);
    }

    // === Render access ===

    pub fn density(&self) -> &[f32] {
        &self.grid.density
    }

    pub fn velocity(&self) -> (&[f32], &[f32]) {
        (&self.grid.vx, &self.grid.vy)
    }

    /// The field selected by the current view mode.
    pub fn view_field(&self) -> &[f32] {
        self.grid.field(self.view_mode.into())
    }

    pub fn view_ptr(&self) -> *const f32 {
        self.grid.field_ptr(self.view_mode.into())
    }

    pub fn total_density(&self) -> f32 {
        self.grid.total_density()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
