use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) buoyancy_ms: f64,
    pub(super) vorticity_ms: f64,
    pub(super) diffuse_ms: f64,
    pub(super) project_ms: f64,
    pub(super) advect_ms: f64,
    pub(super) dissipate_ms: f64,
    pub(super) total_density: f32,
    pub(super) max_speed: f32,
    pub(super) non_finite_cells: u32,
    pub(super) iterations: u32,
    pub(super) memory_bytes: u32,
    pub(super) grid_size: u32,
    pub(super) frame: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn buoyancy_ms(&self) -> f64 { self.buoyancy_ms }
    #[wasm_bindgen(getter)]
    pub fn vorticity_ms(&self) -> f64 { self.vorticity_ms }
    #[wasm_bindgen(getter)]
    pub fn diffuse_ms(&self) -> f64 { self.diffuse_ms }
    #[wasm_bindgen(getter)]
    pub fn project_ms(&self) -> f64 { self.project_ms }
    #[wasm_bindgen(getter)]
    pub fn advect_ms(&self) -> f64 { self.advect_ms }
    #[wasm_bindgen(getter)]
    pub fn dissipate_ms(&self) -> f64 { self.dissipate_ms }
    #[wasm_bindgen(getter)]
    pub fn total_density(&self) -> f32 { self.total_density }
    #[wasm_bindgen(getter)]
    pub fn max_speed(&self) -> f32 { self.max_speed }
    #[wasm_bindgen(getter)]
    pub fn non_finite_cells(&self) -> u32 { self.non_finite_cells }
    #[wasm_bindgen(getter)]
    pub fn iterations(&self) -> u32 { self.iterations }
    #[wasm_bindgen(getter)]
    pub fn memory_bytes(&self) -> u32 { self.memory_bytes }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u32 { self.frame }
}
