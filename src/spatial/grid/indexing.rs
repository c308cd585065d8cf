use super::*;

impl FluidGrid {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    /// Cell count (`width * height`).
    #[inline]
    pub fn size(&self) -> usize { self.size }

    /// Scale length the solver works in: `N` for a square grid.
    #[inline]
    pub fn side(&self) -> u32 { self.width.max(self.height) }

    // === Index conversion ===

    /// Caller-facing index: clamps (never wraps) both coordinates into the grid.
    #[inline]
    pub fn ix(&self, x: i32, y: i32) -> usize {
        let x = x.clamp(0, self.width as i32 - 1) as u32;
        let y = y.clamp(0, self.height as i32 - 1) as u32;
        self.index(x, y)
    }

    /// Clamped index for fractional grid-space coordinates (pointer input).
    /// NaN maps to 0 through the saturating float cast.
    #[inline]
    pub fn ix_f32(&self, x: f32, y: f32) -> usize {
        self.ix(x.floor() as i32, y.floor() as i32)
    }

    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let x = (idx as u32) % self.width;
        let y = (idx as u32) / self.width;
        (x, y)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// True for cells on the outer ring, which the boundary pass owns.
    #[inline]
    pub fn is_edge(&self, x: u32, y: u32) -> bool {
        x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1
    }
}
