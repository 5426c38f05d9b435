//! Router Side of the Network Link.
//!
//! The NIC talks to a router through a `send`/`ready` handshake per
//! direction plus a polarity bit that alternates which virtual channel may
//! egress. This module provides:
//! 1. **Polarity:** The toggling VC-admission bit, held low during reset.
//! 2. **Router trait:** The seam the simulator drives each tick.
//! 3. **Models:** An idle router, a sink that collects egress packets, and a
//!    scripted router for injecting traffic with a readiness pattern.

use std::collections::VecDeque;
use std::fmt::Debug;

use crate::soc::nic::{NicLink, RouterDrive};

/// Polarity generator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Polarity {
    value: bool,
}

impl Polarity {
    /// Creates the generator at 0.
    pub const fn new() -> Self {
        Self { value: false }
    }

    /// Current polarity: `true` admits VC 0, `false` admits VC 1.
    #[inline]
    pub const fn value(&self) -> bool {
        self.value
    }

    /// Advances one tick: toggles, or forces 0 while `reset` is asserted.
    pub fn tick(&mut self, reset: bool) {
        self.value = !reset && !self.value;
    }
}

/// A router attached to the NIC link.
///
/// Each tick the simulator calls [`Router::drive`] to sample the router's
/// outputs, evaluates the NIC, then calls [`Router::observe`] with the NIC's
/// link outputs on the clock edge.
pub trait Router: Debug {
    /// Signals the router drives toward the NIC this tick.
    fn drive(&self) -> RouterDrive;

    /// Commit hook receiving what the NIC drove back this tick.
    fn observe(&mut self, link: &NicLink);
}

/// Router that never sends and never accepts.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdleRouter;

impl Router for IdleRouter {
    fn drive(&self) -> RouterDrive {
        RouterDrive::default()
    }

    fn observe(&mut self, _link: &NicLink) {}
}

/// Router that never sends and collects every packet the NIC delivers.
#[derive(Clone, Debug)]
pub struct SinkRouter {
    /// Drives `routerReady`.
    pub ready: bool,
    /// Packets received from the NIC, oldest first.
    pub delivered: Vec<u64>,
}

impl SinkRouter {
    /// Creates a sink that is always ready.
    pub fn new() -> Self {
        Self {
            ready: true,
            delivered: Vec::new(),
        }
    }
}

impl Default for SinkRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl Router for SinkRouter {
    fn drive(&self) -> RouterDrive {
        RouterDrive {
            ready: self.ready,
            ..RouterDrive::default()
        }
    }

    fn observe(&mut self, link: &NicLink) {
        if link.send {
            self.delivered.push(link.data);
        }
    }
}

/// Router that injects a queue of packets and accepts egress on a schedule.
///
/// The readiness schedule repeats; an empty schedule means always ready.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRouter {
    inbound: VecDeque<u64>,
    ready_schedule: Vec<bool>,
    cycle: usize,
    /// Packets received from the NIC, oldest first.
    pub delivered: Vec<u64>,
}

impl ScriptedRouter {
    /// Creates a router that offers `inbound` packets in order.
    pub fn new(inbound: impl IntoIterator<Item = u64>) -> Self {
        Self {
            inbound: inbound.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Sets the repeating `routerReady` pattern.
    pub fn with_ready_schedule(mut self, schedule: Vec<bool>) -> Self {
        self.ready_schedule = schedule;
        self
    }

    /// Packets not yet accepted by the NIC.
    pub fn pending(&self) -> usize {
        self.inbound.len()
    }

    fn ready_now(&self) -> bool {
        if self.ready_schedule.is_empty() {
            true
        } else {
            self.ready_schedule[self.cycle % self.ready_schedule.len()]
        }
    }
}

impl Router for ScriptedRouter {
    fn drive(&self) -> RouterDrive {
        RouterDrive {
            send: !self.inbound.is_empty(),
            data: self.inbound.front().copied().unwrap_or(0),
            ready: self.ready_now(),
        }
    }

    fn observe(&mut self, link: &NicLink) {
        if link.ready && !self.inbound.is_empty() {
            let _ = self.inbound.pop_front();
        }
        if link.send {
            self.delivered.push(link.data);
        }
        self.cycle = self.cycle.wrapping_add(1);
    }
}
