//! Wall-clock timer for perf metrics.
//! `std::time::Instant` panics on wasm32-unknown-unknown, so the browser
//! build reads `Date.now()` instead (millisecond resolution is enough there).

#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    #[cfg(target_arch = "wasm32")]
    start_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    start: std::time::Instant,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            PerfTimer { start_ms: js_sys::Date::now() }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            PerfTimer { start: std::time::Instant::now() }
        }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() - self.start_ms
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.start.elapsed().as_secs_f64() * 1000.0
        }
    }

    /// Time since start or the previous lap; restarts the timer.
    pub(crate) fn lap_ms(&mut self) -> f64 {
        let elapsed = self.elapsed_ms();
        *self = PerfTimer::start();
        elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn laps_are_non_negative() {
        let mut timer = PerfTimer::start();
        assert!(timer.lap_ms() >= 0.0);
        assert!(timer.elapsed_ms() >= 0.0);
    }
}
