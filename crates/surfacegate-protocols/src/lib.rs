//! # SurfaceGate Protocols
//!
//! Collaborator traits and shared types for the SurfaceGate decision engine.
//! Contains only interface definitions - no implementations.
//!
//! ## Core Traits
//!
//! - [`FlagStore`] - Remote feature flag lookups
//! - [`PersistentKv`] - Durable string key/value storage
//! - [`ExperimentTracker`] - Analytics experiment attribution
//! - [`Localization`] - Translated UI strings
//! - [`DefaultHandlerSignal`] - "Is the extension the default PDF handler" lookups
//! - [`HostEnvironment`] - Extension identity and add-on status
//! - [`Touchpoints`] - Surface touch-point and toast management
//! - [`AnalyticsSink`] - Analytics event delivery

pub mod error;
pub mod surface;
pub mod flag;
pub mod storage;
pub mod tracker;
pub mod localization;
pub mod host;
pub mod analytics;
pub mod types;

pub use error::{FlagError, MetadataParseError, SignalError, StoreError};
pub use surface::{Arm, ExperimentAssignment, Surface, UnknownSurface};
pub use flag::FlagStore;
pub use storage::PersistentKv;
pub use tracker::ExperimentTracker;
pub use localization::Localization;
pub use host::{DefaultHandlerSignal, HostEnvironment, Touchpoints};
pub use analytics::AnalyticsSink;
pub use types::*;
