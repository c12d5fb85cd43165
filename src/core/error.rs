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

//! Interpreter error types

use thiserror::Error;

/// Result type for interpreter operations
pub type Result<T> = std::result::Result<T, EmulatorError>;

/// Interpreter error types
#[derive(Error, Debug)]
pub enum EmulatorError {
    /// The image source could not be opened (loader, fatal at startup)
    #[error("could not open image source: {0}")]
    SourceUnavailable(String),

    /// The image path did not carry the required filename suffix
    #[error("file {path} does not have the required extension {expected}")]
    WrongSuffix {
        /// Path that was checked
        path: String,
        /// Extension the caller required
        expected: String,
    },

    /// Memory access outside `[0, MEMORY_SIZE)`
    #[error("memory access out of bounds: address 0x{address:08X} ({size}-byte access)")]
    OutOfBounds {
        /// The byte address that was accessed
        address: u32,
        /// Access width in bytes (1, 2, or 4)
        size: u8,
    },

    /// Memory access whose address does not satisfy the access width's alignment
    #[error("unaligned {size}-byte access at address 0x{address:08X}")]
    Unaligned {
        /// The byte address that was accessed
        address: u32,
        /// Access width in bytes (2 or 4)
        size: u8,
    },

    /// Opcode/funct combination not in the instruction tables
    #[error("unknown instruction 0x{instruction:08X} at pc=0x{pc:08X}")]
    UnknownInstruction {
        /// The raw 32-bit instruction word
        instruction: u32,
        /// The program counter it was fetched from
        pc: u32,
    },

    /// I/O error while reading an image source
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
