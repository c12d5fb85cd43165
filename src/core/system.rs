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

//! System integration: the fetch-decode-execute driver
//!
//! This module ties the CPU and memory together into a single machine
//! value and drives the main loop: fetch the word at PC, dispatch it to
//! the executor, advance PC per the dispatch result, repeat until PC
//! leaves the loaded region or a fatal error occurs.

use std::io::Read;
use std::path::Path;

use super::cpu::instructions::{dispatch, Control};
use super::cpu::Cpu;
use super::error::{EmulatorError, Result};
use super::loader::{self, LoadReport};
use super::memory::Memory;

/// MIPS32 machine: CPU state plus memory plus the loaded-image boundary.
///
/// # Example
/// ```
/// use mipssim::core::system::System;
///
/// let mut system = System::new();
/// // addi $8, $0, 2
/// let instr: u32 = (0x08 << 26) | (8 << 16) | 2;
/// system.memory_mut().write32(0, instr).unwrap();
/// system.set_word_count(1);
/// system.step().unwrap();
/// assert_eq!(system.cpu().reg(8), 2);
/// ```
pub struct System {
    cpu: Cpu,
    memory: Memory,
    /// Number of 32-bit words holding valid, loaded instructions.
    /// `step`/`run` terminate once PC advances past this region.
    word_count: usize,
    /// When true, `UnknownInstruction` aborts `step`/`run` instead of
    /// being logged and skipped.
    strict_decoding: bool,
}

/// Summary of a completed `run`/`run_with_limit` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Instructions successfully executed.
    pub instructions_executed: u64,
    /// True if the run stopped because PC left the loaded region
    /// naturally, false if it stopped because `max_instructions` was
    /// reached first.
    pub halted_naturally: bool,
}

impl System {
    /// Create a new machine with the default memory size, all state
    /// zeroed, and no loaded image.
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(),
            memory: Memory::default(),
            word_count: 0,
            strict_decoding: false,
        }
    }

    /// Create a machine with a memory sized to `words` 32-bit words.
    pub fn with_memory_words(words: usize) -> Self {
        Self {
            cpu: Cpu::new(),
            memory: Memory::new(words),
            word_count: 0,
            strict_decoding: false,
        }
    }

    /// Reset CPU state and the loaded-image boundary. Memory contents are
    /// left as-is; load a new image to overwrite them.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.word_count = 0;
    }

    /// Choose whether `UnknownInstruction` is fatal (`true`) or logged and
    /// skipped with a PC advance (`false`, the default).
    pub fn set_strict_decoding(&mut self, strict: bool) {
        self.strict_decoding = strict;
    }

    /// Number of words considered loaded; `step`/`run` stop once PC
    /// reaches `word_count * 4`.
    pub fn set_word_count(&mut self, word_count: usize) {
        self.word_count = word_count;
    }

    /// Immutable access to the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// Mutable access to the CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    /// Immutable access to memory.
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Mutable access to memory.
    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    /// Load an image from a path into memory, honoring an optional
    /// required filename extension. Sets the loaded-image word count and
    /// resets the CPU so PC starts at 0.
    pub fn load_image_from_path(
        &mut self,
        path: &Path,
        required_extension: Option<&str>,
    ) -> Result<LoadReport> {
        let report = loader::load_from_path(path, required_extension, &mut self.memory)?;
        self.cpu.reset();
        self.word_count = report.words_loaded;
        Ok(report)
    }

    /// Load an image from any `Read` source. See
    /// [`System::load_image_from_path`].
    pub fn load_image_from_reader<R: Read>(&mut self, reader: R) -> Result<LoadReport> {
        let report = loader::load_from_reader(reader, &mut self.memory)?;
        self.cpu.reset();
        self.word_count = report.words_loaded;
        Ok(report)
    }

    /// True once PC has advanced past the loaded region.
    pub fn halted(&self) -> bool {
        self.cpu.pc() >= (self.word_count as u32).wrapping_mul(4)
    }

    /// Fetch, decode, and execute the instruction at PC, then advance PC
    /// per the dispatch result.
    ///
    /// Returns a `MemoryFault`-class error (`OutOfBounds`/`Unaligned`) or,
    /// under strict decoding, `UnknownInstruction`, unwound from the
    /// executor. With strict decoding off, `UnknownInstruction` is logged
    /// and treated as a no-op that still advances PC by 4.
    pub fn step(&mut self) -> Result<()> {
        let pc = self.cpu.pc();
        let instruction = self.memory.read32(pc)?;

        match dispatch(&mut self.cpu, &mut self.memory, pc, instruction) {
            Ok(Control::Jump(next_pc)) => {
                self.cpu.set_pc(next_pc);
                Ok(())
            }
            Err(EmulatorError::UnknownInstruction { instruction, pc }) if !self.strict_decoding => {
                log::warn!("unknown instruction 0x{instruction:08X} at pc=0x{pc:08X}, skipping");
                self.cpu.set_pc(pc.wrapping_add(4));
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Run until PC leaves the loaded region or a fatal error occurs.
    pub fn run(&mut self) -> Result<RunSummary> {
        let mut instructions_executed = 0u64;
        while !self.halted() {
            self.step()?;
            instructions_executed += 1;
        }
        Ok(RunSummary {
            instructions_executed,
            halted_naturally: true,
        })
    }

    /// Run until PC leaves the loaded region, a fatal error occurs, or
    /// `max_instructions` have executed, whichever comes first. This is an
    /// ambient safety valve against runaway or looping images; it has no
    /// counterpart in the fetch-execute contract itself.
    pub fn run_with_limit(&mut self, max_instructions: u64) -> Result<RunSummary> {
        let mut instructions_executed = 0u64;
        while !self.halted() {
            if instructions_executed >= max_instructions {
                return Ok(RunSummary {
                    instructions_executed,
                    halted_naturally: false,
                });
            }
            self.step()?;
            instructions_executed += 1;
        }
        Ok(RunSummary {
            instructions_executed,
            halted_naturally: true,
        })
    }
}

impl Default for System {
    fn default() -> Self {
        Self::new()
    }
}
