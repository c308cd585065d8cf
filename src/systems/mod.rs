pub mod solver;

pub use solver::{FluidSolver, StageTimings};
