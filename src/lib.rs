//! Fluidart Engine - Stable Fluids for a real-time fluid-art tool, in WASM
//!
//! Architecture:
//! - core/        - macros, errors, logging, perf timer
//! - domain/      - solver config and field vocabulary
//! - spatial/     - FluidGrid (SoA field storage, injection, obstacles)
//! - systems/     - FluidSolver and its kernels
//! - simulation/  - FluidSim orchestration + the `FluidWorld` JS facade

// Utils with safety macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

pub use crate::core::EngineError;
pub use domain::{FieldKind, InstabilityPolicy, RelaxationScheme, ScalarField, SolverConfig};
pub use spatial::FluidGrid;
pub use systems::{FluidSolver, StageTimings};
pub use simulation::{FluidSim, FluidWorld, PerfStats, ViewMode};

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook and console logger.
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    crate::core::logging::init_logger(level);

    log::info!("Fluidart engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
