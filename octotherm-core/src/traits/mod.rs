//! Hardware-facing traits owned by the core
//!
//! These define the interface between the telemetry logic and the
//! external sinks it feeds.

pub mod display;

pub use display::{CharDisplay, DisplayError};
