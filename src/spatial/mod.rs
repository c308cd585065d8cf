//! Spatial - grid storage for the fluid fields

pub mod grid;

pub use grid::FluidGrid;
