//! Network Interface Controller (NIC).
//!
//! This module implements the bridge between the processor's NIC port and
//! the router. It provides:
//! 1. **Register Interface:** A 2-bit address space over two channel buffers.
//! 2. **Ingress:** Accepts packets from the router whenever the input buffer
//!    is empty.
//! 3. **Egress:** Sends the buffered output packet only while the router is
//!    ready and the polarity admits the packet's virtual channel.
//!
//! | addr | read                                | write                   |
//! |------|-------------------------------------|-------------------------|
//! | `00` | input payload; drains a full buffer | ignored                 |
//! | `01` | input `full` in bit 63              | ignored                 |
//! | `10` | 0                                   | fills the output buffer |
//! | `11` | output `full` in bit 63             | ignored                 |

/// Single-entry channel buffer.
pub mod channel;

pub use channel::ChannelBuffer;

use crate::common::constants::{NIC_STATUS_BIT, VC_MASK};
use crate::core::pipeline::signals::NicRequest;

/// Processor-visible NIC register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NicRegister {
    /// `00`: input buffer data.
    #[default]
    InputData,
    /// `01`: input buffer status.
    InputStatus,
    /// `10`: output buffer data.
    OutputData,
    /// `11`: output buffer status.
    OutputStatus,
}

impl NicRegister {
    /// Decodes the low two bits of an address.
    pub fn from_bits(bits: u16) -> Self {
        match bits & 0b11 {
            0b00 => Self::InputData,
            0b01 => Self::InputStatus,
            0b10 => Self::OutputData,
            _ => Self::OutputStatus,
        }
    }

    /// Returns the 2-bit encoding.
    pub fn bits(self) -> u16 {
        match self {
            Self::InputData => 0b00,
            Self::InputStatus => 0b01,
            Self::OutputData => 0b10,
            Self::OutputStatus => 0b11,
        }
    }
}

/// Signals driven by the router toward the NIC for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouterDrive {
    /// `routerSend`: the router offers `data` to the input buffer.
    pub send: bool,
    /// Packet offered by the router.
    pub data: u64,
    /// `routerReady`: the router can accept an egress packet.
    pub ready: bool,
}

/// Signals driven by the NIC toward the router for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NicLink {
    /// `nicReady`: the input buffer can take a packet.
    pub ready: bool,
    /// `nicSend`: an admitted packet is on `data`.
    pub send: bool,
    /// Egress packet; 0 whenever `send` is low.
    pub data: u64,
}

/// Returns `true` if `packet` may leave under `polarity`.
///
/// The virtual channel is the packet's least-significant bit. Polarity 1
/// admits VC 0 and polarity 0 admits VC 1.
#[inline]
pub fn vc_admitted(packet: u64, polarity: bool) -> bool {
    ((packet & VC_MASK) == 1) != polarity
}

/// Network interface with one input and one output channel buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Nic {
    /// Router-to-processor buffer.
    pub in_buffer: ChannelBuffer,
    /// Processor-to-router buffer.
    pub out_buffer: ChannelBuffer,
}

impl Nic {
    /// Creates a NIC with both buffers empty.
    pub const fn new() -> Self {
        Self {
            in_buffer: ChannelBuffer::new(),
            out_buffer: ChannelBuffer::new(),
        }
    }

    /// Data returned on the processor port for `req`, combinationally.
    ///
    /// Status registers report `full` in bit 63. The output data register,
    /// writes and disabled requests return 0.
    pub fn read_data(&self, req: &NicRequest) -> u64 {
        if !req.enable || req.write_enable {
            return 0;
        }
        match req.reg {
            NicRegister::InputData => self.in_buffer.payload(),
            NicRegister::InputStatus => u64::from(self.in_buffer.is_full()) << NIC_STATUS_BIT,
            NicRegister::OutputData => 0,
            NicRegister::OutputStatus => u64::from(self.out_buffer.is_full()) << NIC_STATUS_BIT,
        }
    }

    /// Link signals toward the router for this tick.
    pub fn link_outputs(&self, router: &RouterDrive, polarity: bool) -> NicLink {
        let send = self.out_buffer.is_full()
            && router.ready
            && vc_admitted(self.out_buffer.payload(), polarity);
        NicLink {
            ready: self.in_buffer.is_empty(),
            send,
            data: if send { self.out_buffer.payload() } else { 0 },
        }
    }

    /// Advances both buffers by one clock edge.
    ///
    /// # Arguments
    ///
    /// * `req` - Processor-side request from EXMEM.
    /// * `router` - Router-side signals.
    /// * `polarity` - Current virtual-channel polarity.
    pub fn tick(&mut self, req: &NicRequest, router: &RouterDrive, polarity: bool) {
        let link = self.link_outputs(router, polarity);

        let cpu_read = req.enable && !req.write_enable && req.reg == NicRegister::InputData;
        let ingress = link.ready && router.send;
        if ingress {
            tracing::debug!(target: "cardinal::nic", packet = format_args!("{:#018x}", router.data), "packet received");
        }
        self.in_buffer.tick(cpu_read, ingress, router.data);

        let cpu_write = req.enable && req.write_enable && req.reg == NicRegister::OutputData;
        let egress = link.send && router.ready;
        if egress {
            tracing::debug!(target: "cardinal::nic", packet = format_args!("{:#018x}", link.data), polarity, "packet sent");
        }
        self.out_buffer.tick(egress, cpu_write, req.data);
    }

    /// Synchronous reset: both buffers empty with zero payloads.
    pub fn reset(&mut self) {
        self.in_buffer.reset();
        self.out_buffer.reset();
    }
}
