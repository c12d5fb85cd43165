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

use super::super::Cpu;
use crate::core::error::Result;
use crate::core::memory::Memory;

impl Cpu {
    // === Store instructions ===
    //
    // sh and sb write the low halfword/byte of rt, not the whole word: the
    // source's "whole word write" behavior for these two opcodes is a
    // known divergence from real MIPS semantics and is not reproduced here.

    /// SW: memory[rs + simm] <- rt
    pub(crate) fn op_sw(&self, memory: &mut Memory, rs: u8, rt: u8, imm: u16) -> Result<()> {
        let address = self.effective_address(rs, imm);
        memory.write32(address, self.reg(rt))
    }

    /// SH: memory[rs + simm] <- rt & 0xFFFF
    pub(crate) fn op_sh(&self, memory: &mut Memory, rs: u8, rt: u8, imm: u16) -> Result<()> {
        let address = self.effective_address(rs, imm);
        memory.write16(address, self.reg(rt) as u16)
    }

    /// SB: memory[rs + simm] <- rt & 0xFF
    pub(crate) fn op_sb(&self, memory: &mut Memory, rs: u8, rt: u8, imm: u16) -> Result<()> {
        let address = self.effective_address(rs, imm);
        memory.write8(address, self.reg(rt) as u8)
    }
}
