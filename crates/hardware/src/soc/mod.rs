//! System-on-Chip (SoC) Components.
//!
//! This module organizes the components around the processor core: the
//! instruction and data memories, the network interface with its channel
//! buffers, and the router side of the network link.

/// Byte-addressable memory implementation.
pub mod memory;

/// Network interface controller and channel buffers.
pub mod nic;

/// Polarity generator and router models.
pub mod router;

/// Memory port trait definitions.
pub mod traits;

pub use memory::Memory;
pub use nic::Nic;
