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
    // === Arithmetic instructions ===
    //
    // add/sub and their unsigned counterparts are both wrapping here: this
    // core does not raise a signed-overflow trap, so add behaves exactly
    // like addu and sub exactly like subu.

    /// ADD: rd <- rs + rt (wrapping)
    pub(crate) fn op_add(&mut self, rs: u8, rt: u8, rd: u8) -> Result<()> {
        self.op_addu(rs, rt, rd)
    }

    /// ADDU: rd <- rs + rt (wrapping)
    pub(crate) fn op_addu(&mut self, rs: u8, rt: u8, rd: u8) -> Result<()> {
        let result = self.reg(rs).wrapping_add(self.reg(rt));
        self.set_reg(rd, result);
        Ok(())
    }

    /// SUB: rd <- rs - rt (wrapping)
    pub(crate) fn op_sub(&mut self, rs: u8, rt: u8, rd: u8) -> Result<()> {
        self.op_subu(rs, rt, rd)
    }

    /// SUBU: rd <- rs - rt (wrapping)
    pub(crate) fn op_subu(&mut self, rs: u8, rt: u8, rd: u8) -> Result<()> {
        let result = self.reg(rs).wrapping_sub(self.reg(rt));
        self.set_reg(rd, result);
        Ok(())
    }

    /// ADDI: rt <- rs + sign_extend(imm) (wrapping)
    pub(crate) fn op_addi(&mut self, rs: u8, rt: u8, imm: u16) -> Result<()> {
        self.op_addiu(rs, rt, imm)
    }

    /// ADDIU: rt <- rs + sign_extend(imm) (wrapping)
    pub(crate) fn op_addiu(&mut self, rs: u8, rt: u8, imm: u16) -> Result<()> {
        let simm = imm as i16 as i32 as u32;
        let result = self.reg(rs).wrapping_add(simm);
        self.set_reg(rt, result);
        Ok(())
    }
}
