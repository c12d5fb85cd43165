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
use super::Control;
use crate::core::error::Result;

impl Cpu {
    // === Jump instructions ===

    /// J: PC <- (pc & 0xF000_0000) | (target << 2)
    ///
    /// The high bits come from the jump's own address, not the following
    /// instruction: there is no delay slot here to source them from.
    pub(crate) fn op_j(&self, pc: u32, target: u32) -> Result<Control> {
        Ok(Control::Jump(Self::jump_target(pc, target)))
    }

    /// JAL: ra <- pc + 4; PC <- (pc & 0xF000_0000) | (target << 2)
    pub(crate) fn op_jal(&mut self, pc: u32, target: u32) -> Result<Control> {
        self.set_reg(31, pc.wrapping_add(4));
        Ok(Control::Jump(Self::jump_target(pc, target)))
    }

    /// JR: PC <- rs
    pub(crate) fn op_jr(&self, rs: u8) -> Result<Control> {
        Ok(Control::Jump(self.reg(rs)))
    }

    /// JALR: $ra <- pc + 4; PC <- rs
    pub(crate) fn op_jalr(&mut self, pc: u32, rs: u8, _rd: u8) -> Result<Control> {
        let target = self.reg(rs);
        self.set_reg(31, pc.wrapping_add(4));
        Ok(Control::Jump(target))
    }

    fn jump_target(pc: u32, target: u32) -> u32 {
        (pc & 0xF000_0000) | (target << 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_j_preserves_high_bits_of_own_address() {
        let cpu = Cpu::new();
        let control = cpu.op_j(0x9000_0004, 0x10).unwrap();
        assert_eq!(control, Control::Jump(0x9000_0040));
    }

    #[test]
    fn test_jal_links_return_address() {
        let mut cpu = Cpu::new();
        let control = cpu.op_jal(0x1000, 0x20).unwrap();
        assert_eq!(cpu.reg(31), 0x1004);
        assert_eq!(control, Control::Jump(0x80));
    }

    #[test]
    fn test_jr_jumps_to_register_value() {
        let mut cpu = Cpu::new();
        cpu.set_reg(4, 0x2000);
        let control = cpu.op_jr(4).unwrap();
        assert_eq!(control, Control::Jump(0x2000));
    }

    #[test]
    fn test_jalr_links_and_jumps() {
        let mut cpu = Cpu::new();
        cpu.set_reg(4, 0x3000);
        let control = cpu.op_jalr(0x100, 4, 31).unwrap();
        assert_eq!(cpu.reg(31), 0x104);
        assert_eq!(control, Control::Jump(0x3000));
    }

    #[test]
    fn test_jalr_links_ra_regardless_of_rd_field() {
        let mut cpu = Cpu::new();
        cpu.set_reg(4, 0x3000);
        let control = cpu.op_jalr(0x100, 4, 9).unwrap();
        assert_eq!(cpu.reg(31), 0x104);
        assert_eq!(cpu.reg(9), 0);
        assert_eq!(control, Control::Jump(0x3000));
    }
}
