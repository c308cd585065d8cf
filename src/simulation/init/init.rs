use crate::domain::SolverConfig;
use crate::spatial::FluidGrid;
use crate::systems::FluidSolver;

use super::perf_stats::PerfStats;
use super::{FluidSim, ViewMode};

pub(super) fn create_fluid_sim(width: u32, height: u32, config: SolverConfig) -> FluidSim {
    let grid = FluidGrid::with_dimensions(width, height);
    log::debug!(
        "fluid sim {}x{} (iter {}, {:?})",
        grid.width(),
        grid.height(),
        config.iter,
        config.relaxation
    );

    FluidSim {
        grid,
        solver: FluidSolver::new(&config),
        frame: 0,
        view_mode: ViewMode::Density,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
