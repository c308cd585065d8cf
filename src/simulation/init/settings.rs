use crate::core::EngineError;
use crate::domain::SolverConfig;

use super::perf_stats::PerfStats;
use super::FluidSim;

pub(super) fn set_config(sim: &mut FluidSim, config: SolverConfig) -> Result<(), EngineError> {
    if let Err(e) = config.validate() {
        log::warn!("rejected solver config: {}", e);
        return Err(e);
    }
    sim.solver.set_config(&config);
    Ok(())
}

pub(super) fn load_config_json(sim: &mut FluidSim, json: &str) -> Result<(), EngineError> {
    let config = SolverConfig::from_json(json).map_err(|e| {
        log::warn!("rejected solver config: {}", e);
        e
    })?;
    sim.solver.set_config(&config);
    Ok(())
}

pub(super) fn set_iterations(sim: &mut FluidSim, iterations: u32) {
    sim.solver.iter = iterations;
}

pub(super) fn enable_perf_metrics(sim: &mut FluidSim, enabled: bool) {
    sim.perf_enabled = enabled;
    sim.solver.set_timing_enabled(enabled);
    if !enabled {
        sim.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(sim: &FluidSim) -> PerfStats {
    sim.perf_stats.clone()
}
