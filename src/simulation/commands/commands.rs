use super::FluidSim;

pub(super) fn add_density(sim: &mut FluidSim, x: f32, y: f32, amount: f32) {
    sim.grid.add_density(x, y, amount);
}

pub(super) fn add_velocity(sim: &mut FluidSim, x: f32, y: f32, dx: f32, dy: f32) {
    sim.grid.add_velocity(x, y, dx, dy);
}

pub(super) fn add_density_in_radius(sim: &mut FluidSim, cx: i32, cy: i32, radius: i32, amount: f32) {
    sim.grid.add_density_in_radius(cx, cy, radius, amount);
}

pub(super) fn add_velocity_in_radius(
    sim: &mut FluidSim,
    cx: i32,
    cy: i32,
    radius: i32,
    dx: f32,
    dy: f32,
) {
    sim.grid.add_velocity_in_radius(cx, cy, radius, dx, dy);
}

/// Pointer position is continuous; the disc is centred on the cell under it.
pub(super) fn splat(sim: &mut FluidSim, x: f32, y: f32, radius: f32, amount: f32, dx: f32, dy: f32) {
    if !(x.is_finite() && y.is_finite()) {
        return;
    }
    let cx = x.floor() as i32;
    let cy = y.floor() as i32;
    let r = if radius.is_finite() { radius.max(0.0).round() as i32 } else { 0 };

    sim.grid.add_density_in_radius(cx, cy, r, amount);
    sim.grid.add_velocity_in_radius(cx, cy, r, dx, dy);
}

pub(super) fn set_obstacle(sim: &mut FluidSim, x: i32, y: i32, solid: bool) {
    sim.grid.set_obstacle(x, y, solid);
}

pub(super) fn set_obstacle_circle(sim: &mut FluidSim, cx: i32, cy: i32, radius: i32, solid: bool) {
    sim.grid.set_obstacle_circle(cx, cy, radius, solid);
}

pub(super) fn clear_obstacles(sim: &mut FluidSim) {
    sim.grid.clear_obstacles();
}

pub(super) fn clear(sim: &mut FluidSim) {
    sim.grid.clear();
}

pub(super) fn reset(sim: &mut FluidSim, width: u32, height: u32) {
    sim.grid.reset(width, height);
    sim.frame = 0;
    sim.perf_stats.reset();
}
