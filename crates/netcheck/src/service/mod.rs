//! # Service Layer
//!
//! - `probe` - one timed TCP connect (`ProbeEngine`)
//! - `tool` - candidate sampling, races and status bookkeeping (`ConnectivityTool`)

pub mod probe;
pub mod tool;

pub use probe::ProbeEngine;
pub use tool::ConnectivityTool;
