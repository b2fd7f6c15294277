//! # SurfaceGate Store
//!
//! Concrete collaborators for the decision engine.
//!
//! ## Features
//!
//! - In-memory and JSON-file backed persistent key/value stores
//! - Static feature flags and host facts built from configuration
//! - Recording experiment tracker and analytics sink
//! - Translation table with positional placeholders

pub mod kv;
pub mod flags;
pub mod tracker;
pub mod translations;
pub mod host;

pub use kv::{FileKv, MemoryKv};
pub use flags::StaticFlagStore;
pub use tracker::{RecordingAnalytics, RecordingTracker};
pub use translations::TranslationTable;
pub use host::{LogTouchpoints, StaticHost};
