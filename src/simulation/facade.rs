use wasm_bindgen::prelude::*;

use crate::core::EngineError;
use crate::domain::{FieldKind, ScalarField};

use super::perf_stats::PerfStats;
use super::{FluidSim, ViewMode};

fn to_js(e: EngineError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct FluidWorld {
    sim: FluidSim,
}

#[wasm_bindgen]
impl FluidWorld {
    /// Square grid of `size x size` cells, default settings
    #[wasm_bindgen(constructor)]
    pub fn new(size: u32) -> Self {
        Self {
            sim: FluidSim::new(size),
        }
    }

    #[wasm_bindgen(js_name = withDimensions)]
    pub fn with_dimensions(width: u32, height: u32) -> Self {
        Self {
            sim: FluidSim::with_dimensions(width, height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.sim.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.sim.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.sim.frame() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.sim.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.sim.get_perf_stats()
    }

    // === Settings ===

    /// Replace the solver settings from a camelCase JSON object. Missing keys
    /// take defaults; invalid values are refused and the old settings kept.
    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.sim.load_config_json(&json).map_err(to_js)
    }

    pub fn get_config_json(&self) -> String {
        self.sim.config().to_json()
    }

    pub fn set_iterations(&mut self, iterations: u32) {
        self.sim.set_iterations(iterations);
    }

    #[wasm_bindgen(getter)]
    pub fn iterations(&self) -> u32 { self.sim.iterations() }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.sim.set_view_mode(mode);
    }

    #[wasm_bindgen(getter)]
    pub fn view_mode(&self) -> ViewMode { self.sim.view_mode() }

    // === Injection / brush ===

    pub fn add_density(&mut self, x: f32, y: f32, amount: f32) {
        self.sim.add_density(x, y, amount);
    }

    pub fn add_velocity(&mut self, x: f32, y: f32, dx: f32, dy: f32) {
        self.sim.add_velocity(x, y, dx, dy);
    }

    pub fn add_density_in_radius(&mut self, cx: i32, cy: i32, radius: i32, amount: f32) {
        self.sim.add_density_in_radius(cx, cy, radius, amount);
    }

    pub fn add_velocity_in_radius(&mut self, cx: i32, cy: i32, radius: i32, dx: f32, dy: f32) {
        self.sim.add_velocity_in_radius(cx, cy, radius, dx, dy);
    }

    /// Pointer drag: dye plus the drag vector in one disc
    pub fn splat(&mut self, x: f32, y: f32, radius: f32, amount: f32, dx: f32, dy: f32) {
        self.sim.splat(x, y, radius, amount, dx, dy);
    }

    // === Obstacles ===

    pub fn set_obstacle(&mut self, x: i32, y: i32, solid: bool) {
        self.sim.set_obstacle(x, y, solid);
    }

    pub fn set_obstacle_circle(&mut self, cx: i32, cy: i32, radius: i32, solid: bool) {
        self.sim.set_obstacle_circle(cx, cy, radius, solid);
    }

    pub fn clear_obstacles(&mut self) {
        self.sim.clear_obstacles();
    }

    pub fn obstacle_count(&self) -> usize {
        self.sim.grid().obstacle_count()
    }

    // === Lifecycle ===

    pub fn clear(&mut self) {
        self.sim.clear();
    }

    pub fn reset(&mut self, width: u32, height: u32) {
        self.sim.reset(width, height);
    }

    /// Advance the simulation by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        self.sim.step(dt);
    }

    /// "density", "velocity" or "pressure"
    pub fn swap_field(&mut self, name: String) -> Result<(), JsValue> {
        let field = name.parse::<FieldKind>().map_err(to_js)?;
        self.sim.swap_field(field);
        Ok(())
    }

    /// Copy `data` into a field ("density", "vx", "vy", "pressure",
    /// "divergence"). Length must equal `width * height`.
    pub fn load_field(&mut self, name: String, data: Vec<f32>) -> Result<(), JsValue> {
        let field = name.parse::<ScalarField>().map_err(to_js)?;
        self.sim.load_field(field, &data).map_err(to_js)
    }

    pub fn total_density(&self) -> f32 {
        self.sim.total_density()
    }

    // === Zero-copy read-back ===
    // Buffers trade places during a step; fetch pointers again after each one.

    /// Pointer to density array (for JS rendering)
    pub fn density_ptr(&self) -> *const f32 {
        self.sim.grid().density_ptr()
    }

    pub fn vx_ptr(&self) -> *const f32 {
        self.sim.grid().vx_ptr()
    }

    pub fn vy_ptr(&self) -> *const f32 {
        self.sim.grid().vy_ptr()
    }

    pub fn pressure_ptr(&self) -> *const f32 {
        self.sim.grid().pressure_ptr()
    }

    /// One byte per cell, 1 = solid
    pub fn obstacles_ptr(&self) -> *const u8 {
        self.sim.grid().obstacles_ptr()
    }

    /// Pointer to the field selected by the view mode
    pub fn view_ptr(&self) -> *const f32 {
        self.sim.view_ptr()
    }

    /// Cells per field
    pub fn field_len(&self) -> usize {
        self.sim.size()
    }

    pub fn field_len_bytes(&self) -> usize {
        self.sim.size() * std::mem::size_of::<f32>()
    }
}
