//! Instruction pipeline implementation.
//!
//! This module contains the implementation of the four-stage instruction pipeline
//! (IF, ID, EXMEM, WB). It includes the following components:
//! 1. **Hazards:** Stall classification and operand forwarding.
//! 2. **Latches:** Inter-stage buffers for communication between pipeline stages.
//! 3. **Signals:** Control signals generated during instruction decoding.
//! 4. **Stall:** Modulo counters that time multi-cycle EXMEM operations.
//! 5. **Stages:** Implementation of the Fetch, Decode, Execute/Memory and Writeback stages.

/// Pipeline hazard detection and forwarding logic.
pub mod hazards;

/// Inter-stage pipeline latches (IF/ID, ID/EXMEM, EXMEM/WB).
pub mod latches;

/// Control signals generated during instruction decode.
pub mod signals;

/// Multi-cycle stall counters.
pub mod stall;

/// Pipeline stage implementations (fetch, decode, execute/memory, writeback).
pub mod stages;
