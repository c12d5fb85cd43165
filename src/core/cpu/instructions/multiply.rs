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
    // === Multiply / divide instructions ===

    /// MULT: {HI,LO} <- sign_extend(rs) * sign_extend(rt), 64-bit signed product
    pub(crate) fn op_mult(&mut self, rs: u8, rt: u8) -> Result<()> {
        let a = self.reg(rs) as i32 as i64;
        let b = self.reg(rt) as i32 as i64;
        let product = (a * b) as u64;
        self.set_hi((product >> 32) as u32);
        self.set_lo(product as u32);
        Ok(())
    }

    /// MULTU: {HI,LO} <- zero_extend(rs) * zero_extend(rt), 64-bit unsigned product
    pub(crate) fn op_multu(&mut self, rs: u8, rt: u8) -> Result<()> {
        let a = self.reg(rs) as u64;
        let b = self.reg(rt) as u64;
        let product = a * b;
        self.set_hi((product >> 32) as u32);
        self.set_lo(product as u32);
        Ok(())
    }

    /// DIV: signed division. Division by zero leaves HI/LO unchanged.
    pub(crate) fn op_div(&mut self, rs: u8, rt: u8) -> Result<()> {
        let divisor = self.reg(rt) as i32;
        if divisor == 0 {
            log::trace!("DIV by zero, HI/LO left unchanged");
            return Ok(());
        }
        let dividend = self.reg(rs) as i32;
        self.set_lo(dividend.wrapping_div(divisor) as u32);
        self.set_hi(dividend.wrapping_rem(divisor) as u32);
        Ok(())
    }

    /// DIVU: unsigned division. Division by zero leaves HI/LO unchanged.
    pub(crate) fn op_divu(&mut self, rs: u8, rt: u8) -> Result<()> {
        let divisor = self.reg(rt);
        if divisor == 0 {
            log::trace!("DIVU by zero, HI/LO left unchanged");
            return Ok(());
        }
        let dividend = self.reg(rs);
        self.set_lo(dividend / divisor);
        self.set_hi(dividend % divisor);
        Ok(())
    }

    /// MFHI: rd <- HI
    pub(crate) fn op_mfhi(&mut self, rd: u8) -> Result<()> {
        self.set_reg(rd, self.hi());
        Ok(())
    }

    /// MFLO: rd <- LO
    pub(crate) fn op_mflo(&mut self, rd: u8) -> Result<()> {
        self.set_reg(rd, self.lo());
        Ok(())
    }
}
