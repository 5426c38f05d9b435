//! Program Image Loader.
//!
//! This module reads `$readmemh`-style hex images into the simulator's
//! memories. It performs:
//! 1. **Parsing:** Whitespace-separated hex words, `//` line comments, `_`
//!    digit separators and `@addr` directives that move the word address.
//! 2. **Placement:** Writes each word big-endian at `word address × word size`,
//!    rejecting images that run past the end of the target memory.
//!
//! Instruction images use 4-byte words and data images 8-byte words.

use std::fs;
use std::path::Path;

use crate::common::SimError;
use crate::soc::memory::Memory;

/// Word size of instruction memory images.
pub const IMEM_WORD_BYTES: usize = 4;

/// Word size of data memory images.
pub const DMEM_WORD_BYTES: usize = 8;

fn parse_hex(token: &str, line: usize) -> Result<u64, SimError> {
    let digits: String = token.chars().filter(|c| *c != '_').collect();
    u64::from_str_radix(&digits, 16).map_err(|_| SimError::InvalidToken {
        line,
        token: token.to_string(),
    })
}

/// Parses a hex image into `(word address, value)` pairs.
///
/// # Arguments
///
/// * `text` - Image source.
/// * `word_bytes` - Word width; values wider than this are rejected.
///
/// # Returns
///
/// The words in file order, or `SimError::InvalidToken` naming the first
/// malformed token and its line.
pub fn parse_hex_image(text: &str, word_bytes: usize) -> Result<Vec<(u64, u64)>, SimError> {
    let limit = if word_bytes >= 8 {
        u64::MAX
    } else {
        (1u64 << (word_bytes * 8)) - 1
    };

    let mut words = Vec::new();
    let mut addr = 0u64;

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let code = raw.split("//").next().unwrap_or("");
        for token in code.split_whitespace() {
            if let Some(target) = token.strip_prefix('@') {
                addr = parse_hex(target, line)?;
                continue;
            }
            let value = parse_hex(token, line)?;
            if value > limit {
                return Err(SimError::InvalidToken {
                    line,
                    token: token.to_string(),
                });
            }
            words.push((addr, value));
            addr = addr.wrapping_add(1);
        }
    }

    Ok(words)
}

/// Writes parsed words into `mem`.
///
/// # Returns
///
/// `SimError::ImageOverflow` for the first word that would not fit; words
/// before it have already been written.
pub fn place_image(
    words: &[(u64, u64)],
    mem: &mut Memory,
    word_bytes: usize,
) -> Result<(), SimError> {
    let capacity = (mem.size() / word_bytes.max(1)) as u64;
    for &(addr, value) in words {
        if addr >= capacity {
            return Err(SimError::ImageOverflow {
                addr,
                size: mem.size(),
            });
        }
        mem.load_words(&[(addr, value)], word_bytes);
    }
    Ok(())
}

/// Reads a hex image from disk and places it into `mem`.
///
/// # Arguments
///
/// * `path` - Image file.
/// * `mem` - Target memory.
/// * `word_bytes` - [`IMEM_WORD_BYTES`] or [`DMEM_WORD_BYTES`].
pub fn load_hex_file(
    path: impl AsRef<Path>,
    mem: &mut Memory,
    word_bytes: usize,
) -> Result<(), SimError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let words = parse_hex_image(&text, word_bytes)?;
    tracing::info!(path = %path.display(), words = words.len(), "loaded image");
    place_image(&words, mem, word_bytes)
}
