//! michelin-rs
//!
//! Umbrella crate re-exporting [`michelin_core`] so the demos under `demos/`
//! can be run from the workspace root.
pub use michelin_core::*;
