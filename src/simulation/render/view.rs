use wasm_bindgen::prelude::*;

use crate::domain::ScalarField;

/// Which field the renderer colours. Kept out of the solver: switching
/// views never changes the simulation.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Density = 0,
    VelocityX = 1,
    VelocityY = 2,
    Pressure = 3,
    Divergence = 4,
}

impl From<ViewMode> for ScalarField {
    fn from(mode: ViewMode) -> Self {
        match mode {
            ViewMode::Density => ScalarField::Density,
            ViewMode::VelocityX => ScalarField::VelocityX,
            ViewMode::VelocityY => ScalarField::VelocityY,
            ViewMode::Pressure => ScalarField::Pressure,
            ViewMode::Divergence => ScalarField::Divergence,
        }
    }
}

impl ViewMode {
    /// Index as sent by the host UI; unknown values fall back to density.
    pub fn from_index(index: u8) -> Self {
        match index {
            1 => ViewMode::VelocityX,
            2 => ViewMode::VelocityY,
            3 => ViewMode::Pressure,
            4 => ViewMode::Divergence,
            _ => ViewMode::Density,
        }
    }
}
