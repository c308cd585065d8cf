//! Domain - configuration and field vocabulary shared by grid, solver and API

pub mod fields;
pub mod settings;

pub use fields::{FieldKind, ScalarField};
pub use settings::{InstabilityPolicy, RelaxationScheme, SolverConfig};
