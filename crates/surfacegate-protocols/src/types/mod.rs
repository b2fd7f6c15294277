//! Shared value types.

mod tristate;
mod decision;
mod metadata;

pub use tristate::*;
pub use decision::*;
pub use metadata::*;
