//! Wall and obstacle conditions, applied after every relaxation sweep and
//! after every advection pass.

/// Which wall rule a field obeys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryMode {
    /// Density, pressure, divergence: walls copy the interior neighbour
    /// (zero gradient).
    Scalar = 0,
    /// Horizontal velocity: left/right walls negate (no flow through them).
    VelocityX = 1,
    /// Vertical velocity: top/bottom walls negate.
    VelocityY = 2,
}

/// Grid geometry a kernel needs, borrowed from the grid's fields so it can
/// coexist with mutable borrows of the field being solved.
#[derive(Clone, Copy)]
pub struct Bounds<'a> {
    pub width: usize,
    pub height: usize,
    /// Scale length (`N` on a square grid).
    pub side: usize,
    pub obstacles: &'a [u8],
    pub has_obstacles: bool,
}

impl<'a> Bounds<'a> {
    pub fn new(width: usize, height: usize, obstacles: &'a [u8], has_obstacles: bool) -> Self {
        Bounds {
            width,
            height,
            side: width.max(height),
            obstacles,
            has_obstacles,
        }
    }

    /// Interior cells per axis, `N - 2`.
    #[inline]
    pub fn interior(&self) -> f32 {
        (self.side - 2) as f32
    }
}

/// Build `Bounds` from a `FluidGrid` without borrowing the whole grid.
macro_rules! bounds_of {
    ($grid:expr) => {
        $crate::systems::solver::Bounds::new(
            $grid.width() as usize,
            $grid.height() as usize,
            &$grid.obstacles,
            $grid.obstacle_count > 0,
        )
    };
}
pub(crate) use bounds_of;

pub fn set_bnd(mode: BoundaryMode, x: &mut [f32], bounds: &Bounds) {
    let w = bounds.width;
    let h = bounds.height;

    if bounds.has_obstacles {
        zero_obstacles(x, bounds.obstacles);
    }

    let flip_y = if mode == BoundaryMode::VelocityY { -1.0 } else { 1.0 };
    let flip_x = if mode == BoundaryMode::VelocityX { -1.0 } else { 1.0 };

    // Top and bottom walls
    let bottom = (h - 1) * w;
    for i in 1..w - 1 {
        x[i] = flip_y * x[i + w];
        x[bottom + i] = flip_y * x[bottom - w + i];
    }

    // Left and right walls
    for j in 1..h - 1 {
        let row = j * w;
        x[row] = flip_x * x[row + 1];
        x[row + w - 1] = flip_x * x[row + w - 2];
    }

    // Corners: average of the two edge neighbours
    x[0] = 0.5 * (x[1] + x[w]);
    x[bottom] = 0.5 * (x[bottom + 1] + x[bottom - w]);
    x[w - 1] = 0.5 * (x[w - 2] + x[2 * w - 1]);
    x[bottom + w - 1] = 0.5 * (x[bottom + w - 2] + x[bottom - 1]);

    // Solids on the outer ring were just overwritten by the wall rule
    if bounds.has_obstacles {
        zero_ring_obstacles(x, bounds);
    }
}

#[inline]
fn zero_obstacles(x: &mut [f32], obstacles: &[u8]) {
    for (v, &o) in x.iter_mut().zip(obstacles.iter()) {
        if o == 1 {
            *v = 0.0;
        }
    }
}

fn zero_ring_obstacles(x: &mut [f32], bounds: &Bounds) {
    let w = bounds.width;
    let h = bounds.height;
    let bottom = (h - 1) * w;
    for i in 0..w {
        if bounds.obstacles[i] == 1 {
            x[i] = 0.0;
        }
        if bounds.obstacles[bottom + i] == 1 {
            x[bottom + i] = 0.0;
        }
    }
    for j in 1..h - 1 {
        let left = j * w;
        let right = left + w - 1;
        if bounds.obstacles[left] == 1 {
            x[left] = 0.0;
        }
        if bounds.obstacles[right] == 1 {
            x[right] = 0.0;
        }
    }
}
