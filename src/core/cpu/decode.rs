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

//! Instruction decoding: classify a 32-bit word by opcode into one of the
//! three MIPS32 instruction formats.
//!
//! `decode` is a pure, total function: every 32-bit word decodes to
//! exactly one [`Decoded`] variant. Unknown funct/opcode values within a
//! variant are left to the executor, which signals `UnknownInstruction`.

/// A decoded instruction, tagged by format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    /// Register-to-register operation (opcode 0x00).
    ///
    /// Format: | op (6) | rs (5) | rt (5) | rd (5) | shamt (5) | funct (6) |
    RType {
        rs: u8,
        rt: u8,
        rd: u8,
        shamt: u8,
        funct: u8,
    },
    /// Jump (opcode 0x02 or 0x03).
    ///
    /// Format: | op (6) | target (26) |
    JType { opcode: u8, target: u32 },
    /// Immediate, load/store, or branch operation (any other opcode).
    ///
    /// Format: | op (6) | rs (5) | rt (5) | immediate (16) |
    IType { opcode: u8, rs: u8, rt: u8, imm: u16 },
}

/// Opcode value that selects the R-type format.
pub const OPCODE_RTYPE: u8 = 0x00;
/// Opcodes that select the J-type format.
pub const OPCODE_J: u8 = 0x02;
pub const OPCODE_JAL: u8 = 0x03;

/// Decode a raw 32-bit instruction word into its tagged format.
///
/// Total: every possible `u32` maps to exactly one [`Decoded`] variant.
///
/// # Example
/// ```
/// use mipssim::core::cpu::decode::{decode, Decoded};
///
/// // addi $8, $0, 2
/// let instr: u32 = (0x08 << 26) | (8 << 16) | 2;
/// match decode(instr) {
///     Decoded::IType { opcode, rs, rt, imm } => {
///         assert_eq!(opcode, 0x08);
///         assert_eq!(rs, 0);
///         assert_eq!(rt, 8);
///         assert_eq!(imm, 2);
///     }
///     _ => panic!("expected IType"),
/// }
/// ```
pub fn decode(instr: u32) -> Decoded {
    let opcode = ((instr >> 26) & 0x3F) as u8;
    match opcode {
        OPCODE_RTYPE => {
            let rs = ((instr >> 21) & 0x1F) as u8;
            let rt = ((instr >> 16) & 0x1F) as u8;
            let rd = ((instr >> 11) & 0x1F) as u8;
            let shamt = ((instr >> 6) & 0x1F) as u8;
            let funct = (instr & 0x3F) as u8;
            Decoded::RType {
                rs,
                rt,
                rd,
                shamt,
                funct,
            }
        }
        OPCODE_J | OPCODE_JAL => {
            let target = instr & 0x03FF_FFFF;
            Decoded::JType { opcode, target }
        }
        _ => {
            let rs = ((instr >> 21) & 0x1F) as u8;
            let rt = ((instr >> 16) & 0x1F) as u8;
            let imm = (instr & 0xFFFF) as u16;
            Decoded::IType { opcode, rs, rt, imm }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_r_type() {
        // add $3, $1, $2: opcode=0, rs=1, rt=2, rd=3, shamt=0, funct=0x20
        let instr = (0 << 26) | (1 << 21) | (2 << 16) | (3 << 11) | (0 << 6) | 0x20;
        match decode(instr) {
            Decoded::RType {
                rs,
                rt,
                rd,
                shamt,
                funct,
            } => {
                assert_eq!(rs, 1);
                assert_eq!(rt, 2);
                assert_eq!(rd, 3);
                assert_eq!(shamt, 0);
                assert_eq!(funct, 0x20);
            }
            other => panic!("expected RType, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_j_type() {
        let instr = (0x02u32 << 26) | 0x0123_4567;
        match decode(instr) {
            Decoded::JType { opcode, target } => {
                assert_eq!(opcode, 0x02);
                assert_eq!(target, 0x0123_4567 & 0x03FF_FFFF);
            }
            other => panic!("expected JType, got {other:?}"),
        }

        let instr = (0x03u32 << 26) | 0x42;
        match decode(instr) {
            Decoded::JType { opcode, target } => {
                assert_eq!(opcode, 0x03);
                assert_eq!(target, 0x42);
            }
            other => panic!("expected JType, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_i_type() {
        let instr = (0x08u32 << 26) | (5 << 21) | (6 << 16) | 0xABCD;
        match decode(instr) {
            Decoded::IType { opcode, rs, rt, imm } => {
                assert_eq!(opcode, 0x08);
                assert_eq!(rs, 5);
                assert_eq!(rt, 6);
                assert_eq!(imm, 0xABCD);
            }
            other => panic!("expected IType, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_is_total_and_deterministic() {
        // Every u32 decodes to exactly one variant, and decoding twice
        // gives the same result.
        for instr in [0u32, 1, 0xFFFF_FFFF, 0x8000_0000, 0x1234_5678] {
            assert_eq!(decode(instr), decode(instr));
        }
    }

    #[test]
    fn test_unenumerated_opcodes_still_decode_without_panicking() {
        // Opcode 0x10, the source's bogus "beqz", decodes as a plain
        // I-type here; whether it's a valid instruction is the
        // executor's concern, not the decoder's.
        let instr = (0x10u32 << 26) | (1 << 21) | (2 << 16) | 5;
        match decode(instr) {
            Decoded::IType { opcode, .. } => assert_eq!(opcode, 0x10),
            other => panic!("expected IType, got {other:?}"),
        }
    }
}
