//! Single-Entry Channel Buffer.
//!
//! Holds at most one 64-bit packet between the processor and the router.
//! Requests are qualified against the current state before the clock edge:
//! a read is honoured only when full, a write only when empty, and a read
//! takes precedence when both are requested. Unqualified requests are
//! ignored without error.

/// One-entry buffer with a `full` flag and a retained payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChannelBuffer {
    full: bool,
    payload: u64,
}

impl ChannelBuffer {
    /// Creates an empty buffer with a zero payload.
    pub const fn new() -> Self {
        Self {
            full: false,
            payload: 0,
        }
    }

    /// Returns `true` when a packet is held.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.full
    }

    /// Returns `true` when no packet is held.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        !self.full
    }

    /// The last packet written. Draining clears only the flag, so the payload
    /// stays readable after a read.
    #[inline]
    pub const fn payload(&self) -> u64 {
        self.payload
    }

    /// Advances the buffer by one clock edge.
    ///
    /// # Arguments
    ///
    /// * `read` - Read request; drains the buffer if it is full.
    /// * `write` - Write request; captures `data` if the buffer is empty and
    ///   no qualified read is pending.
    /// * `data` - Packet offered with the write request.
    pub fn tick(&mut self, read: bool, write: bool, data: u64) {
        let read_q = read && self.full;
        let write_q = write && !self.full;

        if read_q {
            self.full = false;
        } else if write_q {
            self.full = true;
            self.payload = data;
        }
    }

    /// Synchronous reset: empty, payload cleared.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
