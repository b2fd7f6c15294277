//! Error types for the SurfaceGate protocol layer.
//!
//! None of these ever reach a caller of the decision engine; they exist so
//! collaborators can report failures that the engine then recovers from.

mod flag;
mod store;
mod signal;
mod metadata;

pub use flag::*;
pub use store::*;
pub use signal::*;
pub use metadata::*;
