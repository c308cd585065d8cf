//! FluidSolver - Jos Stam's Stable Fluids on a `FluidGrid`
//!
//! One `step` runs a fixed pipeline:
//! buoyancy -> vorticity (opt-in) -> diffuse velocity -> project ->
//! advect velocity -> project -> diffuse density -> advect density ->
//! dissipate -> health check.
//!
//! The order matters: projecting both before and after velocity advection
//! keeps the field used for backtracing divergence-free, and density is
//! carried by the final, projected velocity.
//!
//! The kernels are free functions over slices so they can be driven one at
//! a time (tests, alternative hosts); `FluidSolver` only sequences them and
//! owns the settings plus the relaxation scratch buffer.

mod boundary;
mod relax;
mod diffuse;
mod project;
mod advect;
mod forces;
mod dissipate;

pub use advect::advect;
pub use boundary::{set_bnd, BoundaryMode, Bounds};
pub use diffuse::diffuse;
pub use forces::{apply_buoyancy, vorticity_confinement};
pub use project::{mean_abs_divergence, project};
pub use relax::{lin_solve, Relaxer};

use boundary::bounds_of;

use crate::core::utils::PerfTimer;
use crate::domain::{FieldKind, InstabilityPolicy, SolverConfig};
use crate::spatial::FluidGrid;

/// Upper bound on the per-step coefficients (`a` in diffusion, the backtrace
/// scale in advection), so a huge finite `dt` never turns them infinite.
const STEP_COEFF_LIMIT: f32 = 1.0e12;

/// Milliseconds spent per pipeline stage during the last timed step.
/// Projection runs twice; `project_ms` is the sum.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StageTimings {
    pub buoyancy_ms: f64,
    pub vorticity_ms: f64,
    pub diffuse_ms: f64,
    pub project_ms: f64,
    pub advect_ms: f64,
    pub dissipate_ms: f64,
}

/// Lap timer that costs nothing when timing is off.
struct StageClock(Option<PerfTimer>);

impl StageClock {
    fn new(enabled: bool) -> Self {
        StageClock(enabled.then(PerfTimer::start))
    }

    #[inline]
    fn lap(&mut self) -> f64 {
        match self.0.as_mut() {
            Some(timer) => timer.lap_ms(),
            None => 0.0,
        }
    }
}

pub struct FluidSolver {
    config: SolverConfig,
    /// Relaxation sweeps per linear solve. Starts as `config.iter`; hosts
    /// may lower it live to trade accuracy for frame time.
    pub iter: u32,
    relaxer: Relaxer,
    timing_enabled: bool,
    timings: StageTimings,
    last_non_finite: usize,
}

impl Default for FluidSolver {
    fn default() -> Self {
        FluidSolver::new(&SolverConfig::default())
    }
}

impl FluidSolver {
    pub fn new(config: &SolverConfig) -> Self {
        FluidSolver {
            config: config.clone(),
            iter: config.iter,
            relaxer: Relaxer::new(config.relaxation),
            timing_enabled: false,
            timings: StageTimings::default(),
            last_non_finite: 0,
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Replace the settings. Resets `iter` to the new `config.iter`.
    pub fn set_config(&mut self, config: &SolverConfig) {
        self.config = config.clone();
        self.iter = config.iter;
        self.relaxer.set_scheme(config.relaxation);
    }

    pub fn set_timing_enabled(&mut self, enabled: bool) {
        self.timing_enabled = enabled;
        if !enabled {
            self.timings = StageTimings::default();
        }
    }

    pub fn timings(&self) -> StageTimings {
        self.timings
    }

    /// Non-finite cells seen by the last health check.
    pub fn last_non_finite(&self) -> usize {
        self.last_non_finite
    }

    /// Advance the grid by `dt`. Never fails; blow-ups are handled by the
    /// configured `InstabilityPolicy`. A non-finite `dt` leaves the grid
    /// untouched.
    pub fn step(&mut self, grid: &mut FluidGrid, dt: f32) {
        if !dt.is_finite() {
            log::warn!("solver step skipped: dt = {}", dt);
            return;
        }

        let iters = self.iter.max(1);
        let visc = self.config.viscosity;
        let diff = self.config.diffusion;
        let relaxer = &mut self.relaxer;

        let mut clock = StageClock::new(self.timing_enabled);
        let mut timings = StageTimings::default();

        // === Forces ===
        if self.config.buoyancy_force != 0.0 {
            apply_buoyancy(&mut grid.vy, &grid.density, self.config.buoyancy_force, dt);
        }
        timings.buoyancy_ms = clock.lap();

        if self.config.vorticity > 0.0 {
            let bounds = bounds_of!(grid);
            vorticity_confinement(
                &mut grid.vx,
                &mut grid.vy,
                &mut grid.divergence,
                self.config.vorticity,
                dt,
                &bounds,
            );
        }
        timings.vorticity_ms = clock.lap();

        // === Velocity ===
        grid.swap(FieldKind::Velocity);
        {
            let bounds = bounds_of!(grid);
            diffuse(BoundaryMode::VelocityX, &mut grid.vx, &grid.prev_vx, visc, dt, iters, &bounds, relaxer);
            diffuse(BoundaryMode::VelocityY, &mut grid.vy, &grid.prev_vy, visc, dt, iters, &bounds, relaxer);
            timings.diffuse_ms += clock.lap();

            project(&mut grid.vx, &mut grid.vy, &mut grid.pressure, &mut grid.divergence, iters, &bounds, relaxer);
            timings.project_ms += clock.lap();
        }

        grid.swap(FieldKind::Velocity);
        {
            let bounds = bounds_of!(grid);
            advect(BoundaryMode::VelocityX, &mut grid.vx, &grid.prev_vx, &grid.prev_vx, &grid.prev_vy, dt, &bounds);
            advect(BoundaryMode::VelocityY, &mut grid.vy, &grid.prev_vy, &grid.prev_vx, &grid.prev_vy, dt, &bounds);
            timings.advect_ms += clock.lap();

            project(&mut grid.vx, &mut grid.vy, &mut grid.pressure, &mut grid.divergence, iters, &bounds, relaxer);
            timings.project_ms += clock.lap();
        }

        // === Density ===
        grid.swap(FieldKind::Density);
        {
            let bounds = bounds_of!(grid);
            diffuse(BoundaryMode::Scalar, &mut grid.density, &grid.prev_density, diff, dt, iters, &bounds, relaxer);
            timings.diffuse_ms += clock.lap();
        }

        grid.swap(FieldKind::Density);
        {
            let bounds = bounds_of!(grid);
            advect(BoundaryMode::Scalar, &mut grid.density, &grid.prev_density, &grid.vx, &grid.vy, dt, &bounds);
            timings.advect_ms += clock.lap();
        }

        // === Decay ===
        dissipate::scale(&mut grid.density, self.config.dissipation);
        dissipate::scale(&mut grid.vx, self.config.velocity_dissipation);
        dissipate::scale(&mut grid.vy, self.config.velocity_dissipation);
        timings.dissipate_ms = clock.lap();

        if self.timing_enabled {
            self.timings = timings;
        }

        self.check_health(grid);
    }

    fn check_health(&mut self, grid: &mut FluidGrid) {
        let policy = self.config.instability_policy;
        if policy == InstabilityPolicy::Ignore {
            self.last_non_finite = 0;
            return;
        }

        let bad = grid.non_finite_count();
        self.last_non_finite = bad;
        if bad == 0 {
            return;
        }

        log::warn!(
            "fluid solver produced {} non-finite cells on a {}x{} grid",
            bad,
            grid.width(),
            grid.height()
        );
        if policy == InstabilityPolicy::Reset {
            let (w, h) = (grid.width(), grid.height());
            grid.reset(w, h);
            log::warn!("grid reset to zero after instability");
        }
    }
}
