// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Image loader
//!
//! Reads a sequence of 32-bit words from a file or any [`std::io::Read`]
//! source into [`Memory`], one host-native word per instruction slot. A
//! trailing partial word (fewer than 4 bytes left in the source) is
//! silently discarded; a source with more words than memory can hold is
//! truncated with a warning rather than treated as fatal.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::core::error::{EmulatorError, Result};
use crate::core::memory::Memory;

/// Outcome of a successful image load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of 32-bit words copied into memory.
    pub words_loaded: usize,
    /// Whether the source held more words than memory could hold.
    pub truncated: bool,
}

/// Load a word stream from `path` into `memory`.
///
/// If `required_extension` is `Some`, the path's extension must match
/// exactly (case-sensitive, without the leading dot) or this returns
/// [`EmulatorError::WrongSuffix`] without touching `memory` or the
/// filesystem.
pub fn load_from_path(
    path: &Path,
    required_extension: Option<&str>,
    memory: &mut Memory,
) -> Result<LoadReport> {
    if let Some(expected) = required_extension {
        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext == expected)
            .unwrap_or(false);
        if !matches {
            return Err(EmulatorError::WrongSuffix {
                path: path.display().to_string(),
                expected: expected.to_string(),
            });
        }
    }

    let file = File::open(path)
        .map_err(|e| EmulatorError::SourceUnavailable(format!("{}: {e}", path.display())))?;
    load_from_reader(file, memory)
}

/// Load a word stream from any [`Read`] source into `memory`.
pub fn load_from_reader<R: Read>(mut reader: R, memory: &mut Memory) -> Result<LoadReport> {
    let capacity = memory.byte_capacity();
    let mut buf = vec![0u8; capacity];
    let mut total_read = 0usize;

    loop {
        if total_read >= buf.len() {
            // Memory is full; drain the rest of the source to detect
            // truncation without growing the buffer.
            let mut discard = [0u8; 4096];
            let mut more = false;
            loop {
                match reader.read(&mut discard)? {
                    0 => break,
                    _ => more = true,
                }
            }
            let words_loaded = total_read / 4;
            if more {
                log::warn!(
                    "image exceeds memory capacity of {} words; truncating",
                    words_loaded
                );
            }
            memory.bytes_mut()[..total_read].copy_from_slice(&buf[..total_read]);
            return Ok(LoadReport {
                words_loaded,
                truncated: more,
            });
        }

        let n = reader.read(&mut buf[total_read..])?;
        if n == 0 {
            break;
        }
        total_read += n;
    }

    let words_loaded = total_read / 4;
    let used_bytes = words_loaded * 4;
    if total_read % 4 != 0 {
        log::warn!(
            "image source has a trailing partial word ({} byte(s)); discarding",
            total_read - used_bytes
        );
    }

    memory.bytes_mut()[..used_bytes].copy_from_slice(&buf[..used_bytes]);
    Ok(LoadReport {
        words_loaded,
        truncated: false,
    })
}
