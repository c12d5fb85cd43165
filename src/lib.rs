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

//! MIPS32 fetch-decode-execute interpreter core
//!
//! This library provides a small MIPS32 interpreter: architectural state
//! (general-purpose registers, HI, LO, PC), a flat byte-addressed memory, an
//! image loader, a decoder, and an executor with one handler per opcode.
//!
//! # Example
//!
//! ```
//! use mipssim::core::system::System;
//!
//! let mut system = System::new();
//! // addi $8, $0, 2
//! let instr: u32 = (0x08 << 26) | (8 << 16) | 2;
//! system.memory_mut().write32(0, instr).unwrap();
//! system.set_word_count(1);
//! system.step().unwrap();
//! assert_eq!(system.cpu().reg(8), 2);
//! ```

pub mod core;
