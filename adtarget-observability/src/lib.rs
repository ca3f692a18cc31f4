//! # adtarget-observability
//!
//! `tracing` subscriber installation and the span macros each model opens
//! around its entry points.

pub mod tracing_setup;

pub use tracing_setup::init_tracing;
