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
    // === Branch instructions ===
    //
    // Every branch target is relative to the address of the instruction
    // immediately following the branch (pc + 4), matching the "PC + 1"
    // word-offset formula translated to byte addresses. There are no
    // delay slots: a taken branch transfers control on the very next
    // fetch.

    /// BEQ: if rs == rt, PC <- pc + 4 + (simm << 2)
    pub(crate) fn op_beq(&self, pc: u32, rs: u8, rt: u8, imm: u16) -> Result<Control> {
        Ok(self.branch_if(pc, imm, self.reg(rs) == self.reg(rt)))
    }

    /// BNE: if rs != rt, PC <- pc + 4 + (simm << 2)
    pub(crate) fn op_bne(&self, pc: u32, rs: u8, rt: u8, imm: u16) -> Result<Control> {
        Ok(self.branch_if(pc, imm, self.reg(rs) != self.reg(rt)))
    }

    /// BLEZ: if signed rs <= 0, PC <- pc + 4 + (simm << 2)
    pub(crate) fn op_blez(&self, pc: u32, rs: u8, imm: u16) -> Result<Control> {
        Ok(self.branch_if(pc, imm, (self.reg(rs) as i32) <= 0))
    }

    /// BGTZ: if signed rs > 0, PC <- pc + 4 + (simm << 2)
    pub(crate) fn op_bgtz(&self, pc: u32, rs: u8, imm: u16) -> Result<Control> {
        Ok(self.branch_if(pc, imm, (self.reg(rs) as i32) > 0))
    }

    fn branch_if(&self, pc: u32, imm: u16, taken: bool) -> Control {
        let next = pc.wrapping_add(4);
        if !taken {
            return Control::Jump(next);
        }
        let offset = (imm as i16 as i32) << 2;
        Control::Jump(next.wrapping_add(offset as u32))
    }
}
