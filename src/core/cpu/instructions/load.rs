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
    // === Load instructions ===

    /// LB: rt <- sign_extend(memory[rs + simm], 8 -> 32)
    pub(crate) fn op_lb(&mut self, memory: &Memory, rs: u8, rt: u8, imm: u16) -> Result<()> {
        let address = self.effective_address(rs, imm);
        let byte = memory.read8(address)?;
        self.set_reg(rt, byte as i8 as i32 as u32);
        Ok(())
    }

    /// LW: rt <- memory[rs + simm]
    pub(crate) fn op_lw(&mut self, memory: &Memory, rs: u8, rt: u8, imm: u16) -> Result<()> {
        let address = self.effective_address(rs, imm);
        let word = memory.read32(address)?;
        self.set_reg(rt, word);
        Ok(())
    }

    pub(crate) fn effective_address(&self, rs: u8, imm: u16) -> u32 {
        let simm = imm as i16 as i32 as u32;
        self.reg(rs).wrapping_add(simm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lw_reads_word() {
        let mut cpu = Cpu::new();
        let mut memory = Memory::new(4);
        memory.write32(8, 0xDEAD_BEEF).unwrap();
        cpu.set_reg(1, 4);
        cpu.op_lw(&memory, 1, 2, 4).unwrap();
        assert_eq!(cpu.reg(2), 0xDEAD_BEEF);
    }

    #[test]
    fn test_lb_sign_extends() {
        let mut cpu = Cpu::new();
        let mut memory = Memory::new(4);
        memory.write8(0, 0xFF).unwrap();
        cpu.op_lb(&memory, 0, 1, 0).unwrap();
        assert_eq!(cpu.reg(1), 0xFFFF_FFFF);
    }

    #[test]
    fn test_lw_unaligned_errors() {
        let mut cpu = Cpu::new();
        let memory = Memory::new(4);
        cpu.set_reg(1, 1);
        assert!(cpu.op_lw(&memory, 1, 2, 0).is_err());
    }
}
