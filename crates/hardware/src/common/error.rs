//! Simulator error definitions.
//!
//! The hardware model itself never fails: protocol violations, hazards and
//! malformed instructions are all defined no-ops. Errors only arise at the
//! host boundary:
//! 1. **Serialization:** Malformed JSON configuration documents.
//! 2. **Loading:** Unreadable or malformed program images.
//! 3. **Execution:** Bounded runs that do not reach the halt marker.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the host-facing simulator API.
#[derive(Debug, Error)]
pub enum SimError {
    /// A JSON document (configuration or statistics) could not be processed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A program image could not be read from disk.
    #[error("failed to read image '{}': {source}", path.display())]
    Io {
        /// Path of the image that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A token in a hex image is not a valid hexadecimal word.
    #[error("line {line}: invalid hex token '{token}'")]
    InvalidToken {
        /// One-based line number of the offending token.
        line: usize,
        /// The token as written in the image.
        token: String,
    },

    /// A hex image places a word outside the target memory.
    #[error("image word at word address {addr:#x} does not fit in {size} bytes of memory")]
    ImageOverflow {
        /// Word address of the first word that does not fit.
        addr: u64,
        /// Size of the target memory in bytes.
        size: usize,
    },

    /// `run_to_halt` reached its cycle budget before the program halted.
    #[error("simulation did not halt within {0} cycles")]
    CycleLimit(u64),
}
