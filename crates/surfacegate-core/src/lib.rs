//! # SurfaceGate Core
//!
//! Decides whether the extension presents itself as the default PDF viewer
//! on a web surface, and gates experiment attribution behind A/B flags.
//!
//! - [`ViewershipEngine`] - implicit default viewership decisions
//! - [`gate`] - pure default-viewership transitions over [`SurfaceState`]
//! - [`SurfaceAdapter`] - per page-load glue between engine and touch points
//! - [`ConvertToPdfGate`] - Google Docs convert-to-PDF touch-point rollout
//! - [`VisitReporter`] - monthly surface visit analytics

pub mod locale;
pub mod state;
pub mod engine;
pub mod gate;
pub mod adapter;
pub mod touchpoint;
pub mod visits;

pub use engine::{Collaborators, ViewershipEngine};
pub use gate::SurfaceState;
pub use adapter::{PageLoadOutcome, SurfaceAdapter};
pub use state::{PersistedViewershipState, ViewershipKeys, ViewershipStateStore};
pub use touchpoint::{ConvertToPdfGate, TouchpointConfig, TouchpointMetadata};
pub use visits::{PageContext, VisitReporter};

#[cfg(test)]
pub(crate) mod test_support;
