//! Core - building blocks shared by every other module
//!
//! - utils/     - indexing macros (must be first for macro export!)
//! - error      - engine error type
//! - logging    - `log` backend that writes to the browser console

#[macro_use]
pub mod utils;
pub mod error;
pub mod logging;

pub use error::EngineError;
