use super::{FluidSim, PerfTimer};

/// f32 fields per cell: density, vx, vy and their partners, divergence,
/// pressure, prev_pressure.
const F32_FIELDS: u32 = 9;

pub(super) fn step(sim: &mut FluidSim, dt: f32) {
    if !dt.is_finite() {
        log::warn!("step skipped: dt = {}", dt);
        return;
    }

    let perf_on = sim.perf_enabled;
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    sim.solver.step(&mut sim.grid, dt);

    if let Some(start) = step_start {
        let stats = &mut sim.perf_stats;
        stats.reset();
        stats.step_ms = start.elapsed_ms();

        let t = sim.solver.timings();
        stats.buoyancy_ms = t.buoyancy_ms;
        stats.vorticity_ms = t.vorticity_ms;
        stats.diffuse_ms = t.diffuse_ms;
        stats.project_ms = t.project_ms;
        stats.advect_ms = t.advect_ms;
        stats.dissipate_ms = t.dissipate_ms;

        // Diagnostics scan the whole grid, so only when perf is on
        stats.total_density = sim.grid.total_density();
        stats.max_speed = sim.grid.max_speed();
        stats.non_finite_cells = sim.grid.non_finite_count() as u32;
        stats.iterations = sim.solver.iter.max(1);
        stats.grid_size = sim.grid.size() as u32;
        // rough estimate of the SoA arrays (bytes): 9 f32 fields + obstacle flags
        stats.memory_bytes = (sim.grid.size() as u32).saturating_mul(F32_FIELDS * 4 + 1);
        stats.frame = sim.frame as u32;
    }

    sim.frame += 1;
}
