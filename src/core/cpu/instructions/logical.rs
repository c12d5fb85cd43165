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

impl Cpu {
    // === Logical instructions ===

    /// AND: rd <- rs & rt
    pub(crate) fn op_and(&mut self, rs: u8, rt: u8, rd: u8) -> Result<()> {
        self.set_reg(rd, self.reg(rs) & self.reg(rt));
        Ok(())
    }

    /// OR: rd <- rs | rt
    pub(crate) fn op_or(&mut self, rs: u8, rt: u8, rd: u8) -> Result<()> {
        self.set_reg(rd, self.reg(rs) | self.reg(rt));
        Ok(())
    }

    /// XOR: rd <- rs ^ rt
    pub(crate) fn op_xor(&mut self, rs: u8, rt: u8, rd: u8) -> Result<()> {
        self.set_reg(rd, self.reg(rs) ^ self.reg(rt));
        Ok(())
    }

    /// NOR: rd <- ~(rs | rt)
    pub(crate) fn op_nor(&mut self, rs: u8, rt: u8, rd: u8) -> Result<()> {
        self.set_reg(rd, !(self.reg(rs) | self.reg(rt)));
        Ok(())
    }

    /// ANDI: rt <- rs & zero_extend(imm)
    pub(crate) fn op_andi(&mut self, rs: u8, rt: u8, imm: u16) -> Result<()> {
        self.set_reg(rt, self.reg(rs) & imm as u32);
        Ok(())
    }

    /// ORI: rt <- rs | zero_extend(imm)
    pub(crate) fn op_ori(&mut self, rs: u8, rt: u8, imm: u16) -> Result<()> {
        self.set_reg(rt, self.reg(rs) | imm as u32);
        Ok(())
    }

    /// XORI: rt <- rs ^ zero_extend(imm)
    pub(crate) fn op_xori(&mut self, rs: u8, rt: u8, imm: u16) -> Result<()> {
        self.set_reg(rt, self.reg(rs) ^ imm as u32);
        Ok(())
    }

    /// SLTI: rt <- (signed rs < sign_extend(imm)) ? 1 : 0
    pub(crate) fn op_slti(&mut self, rs: u8, rt: u8, imm: u16) -> Result<()> {
        let simm = imm as i16 as i32;
        let value = (self.reg(rs) as i32) < simm;
        self.set_reg(rt, value as u32);
        Ok(())
    }

    /// SLTIU: rt <- (unsigned rs < unsigned zero_extend(imm)) ? 1 : 0
    pub(crate) fn op_sltiu(&mut self, rs: u8, rt: u8, imm: u16) -> Result<()> {
        let value = self.reg(rs) < (imm as u32);
        self.set_reg(rt, value as u32);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_or_xor_nor() {
        let mut cpu = Cpu::new();
        cpu.set_reg(1, 0b1100);
        cpu.set_reg(2, 0b1010);

        cpu.op_and(1, 2, 3).unwrap();
        assert_eq!(cpu.reg(3), 0b1000);

        cpu.op_or(1, 2, 4).unwrap();
        assert_eq!(cpu.reg(4), 0b1110);

        cpu.op_xor(1, 2, 5).unwrap();
        assert_eq!(cpu.reg(5), 0b0110);

        cpu.op_nor(1, 2, 6).unwrap();
        assert_eq!(cpu.reg(6), !0b1110u32);
    }

    #[test]
    fn test_andi_ori_xori_zero_extend() {
        let mut cpu = Cpu::new();
        cpu.set_reg(1, 0xFFFF_0000);

        cpu.op_andi(1, 2, 0xFFFF).unwrap();
        assert_eq!(cpu.reg(2), 0);

        cpu.op_ori(1, 3, 0x00FF).unwrap();
        assert_eq!(cpu.reg(3), 0xFFFF_00FF);

        cpu.op_xori(1, 4, 0xFFFF).unwrap();
        assert_eq!(cpu.reg(4), 0xFFFF_FFFF);
    }

    #[test]
    fn test_slti_signed_comparison() {
        let mut cpu = Cpu::new();
        cpu.set_reg(1, (-5i32) as u32);
        cpu.op_slti(1, 2, 0xFFFE).unwrap(); // imm = -2, -5 < -2
        assert_eq!(cpu.reg(2), 1);
    }

    #[test]
    fn test_sltiu_unsigned_comparison() {
        let mut cpu = Cpu::new();
        cpu.set_reg(1, 1);
        cpu.op_sltiu(1, 2, 0xFFFE).unwrap();
        assert_eq!(cpu.reg(2), 1);
    }

    #[test]
    fn test_sltiu_zero_extends_immediate() {
        let mut cpu = Cpu::new();
        cpu.set_reg(1, 100_000);
        cpu.op_sltiu(1, 2, 0xFFFE).unwrap(); // zero-extended imm = 65534 < 100000
        assert_eq!(cpu.reg(2), 0);
    }
}
