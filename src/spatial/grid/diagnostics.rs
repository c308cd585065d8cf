use super::*;

impl FluidGrid {
    // === Conservation / health diagnostics ===

    /// Sum of every density cell. Accumulated in f64 so a 512x512 grid does
    /// not lose the small cells to rounding.
    pub fn total_density(&self) -> f32 {
        self.density.iter().map(|&d| d as f64).sum::<f64>() as f32
    }

    /// NaN/inf cells across density and both velocity components.
    pub fn non_finite_count(&self) -> usize {
        [&self.density, &self.vx, &self.vy]
            .iter()
            .map(|field| field.iter().filter(|v| !v.is_finite()).count())
            .sum()
    }

    pub fn max_speed(&self) -> f32 {
        self.vx
            .iter()
            .zip(self.vy.iter())
            .map(|(&u, &v)| (u * u + v * v).sqrt())
            .fold(0.0, f32::max)
    }
}
