#[macro_use]
pub mod safety;
pub mod perf_timer;

pub(crate) use perf_timer::PerfTimer;
