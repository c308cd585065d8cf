use std::str::FromStr;

use crate::core::EngineError;

/// Buffer pairs that `FluidGrid::swap` knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Density,
    /// Both velocity components; they always swap together.
    Velocity,
    /// Accepted but a no-op: pressure has no ping-pong partner in the solver.
    Pressure,
}

impl FromStr for FieldKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "density" => Ok(FieldKind::Density),
            "velocity" => Ok(FieldKind::Velocity),
            "pressure" => Ok(FieldKind::Pressure),
            other => Err(EngineError::UnknownField(other.to_string())),
        }
    }
}

/// A single per-cell f32 buffer, for loading external data and for view modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalarField {
    Density,
    VelocityX,
    VelocityY,
    Pressure,
    Divergence,
}

impl ScalarField {
    pub fn name(self) -> &'static str {
        match self {
            ScalarField::Density => "density",
            ScalarField::VelocityX => "vx",
            ScalarField::VelocityY => "vy",
            ScalarField::Pressure => "pressure",
            ScalarField::Divergence => "divergence",
        }
    }
}

impl FromStr for ScalarField {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "density" => Ok(ScalarField::Density),
            "vx" | "velocityX" => Ok(ScalarField::VelocityX),
            "vy" | "velocityY" => Ok(ScalarField::VelocityY),
            "pressure" => Ok(ScalarField::Pressure),
            "divergence" => Ok(ScalarField::Divergence),
            other => Err(EngineError::UnknownField(other.to_string())),
        }
    }
}
