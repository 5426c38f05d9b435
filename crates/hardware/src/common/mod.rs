//! Common types and constants shared across the Cardinal simulator.
//!
//! This module provides the building blocks used by every other component:
//! 1. **Constants:** Register count, instruction stride, NIC address window.
//! 2. **Error Handling:** The host-facing error type for configuration, loading and runs.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for the host-facing simulator surface.
pub mod error;

pub use error::SimError;
