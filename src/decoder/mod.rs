//! The 8086 instruction decoder (§4.1 of the spec).
//!
//! `decode` pulls bytes from a forward [`Read`]er, classifies the stream by
//! the top 6 bits of the first byte, and emits a canonical [`Instruction`].
//! It never seeks; relative jumps are the executor's job (§4.2.3).

pub mod effective_address;
pub mod instruction;
pub mod mnemonic;
pub mod operand;
pub mod registers;

use std::io::{self, Read};

use crate::error::{DisasmError, Result};

use effective_address::{is_direct_address, memory_for};
use instruction::Instruction;
use mnemonic::Mnemonic;
use operand::{Memory, Operand, WidthHint};
use registers::register_name;

/// Reads the next instruction from `source`.
///
/// Returns [`DisasmError::EndOfStream`] if `source` is exhausted before any
/// byte of a new instruction is read; returns
/// [`DisasmError::MalformedInstruction`] if the opcode class is unrecognized
/// or the stream ends partway through an instruction.
pub fn decode<R: Read>(source: &mut R, offset: u64) -> Result<Instruction> {
    let b0 = match read_opt_u8(source)? {
        Some(b) => b,
        None => return Err(DisasmError::EndOfStream),
    };

    tracing::debug!(offset, opcode = format!("{b0:#04x}"), "decoding instruction");

    let top6 = b0 >> 2;
    match top6 {
        0b100010 => decode_reg_rm(source, b0, offset, Mnemonic::Mov),
        0b000000 => decode_reg_rm(source, b0, offset, Mnemonic::Add),
        0b001010 => decode_reg_rm(source, b0, offset, Mnemonic::Sub),
        0b001110 => decode_reg_rm(source, b0, offset, Mnemonic::Cmp),
        0b101100..=0b101111 => decode_imm_to_reg_short(source, b0, offset),
        0b100000 => decode_imm_to_rm(source, b0, offset),
        0b000001 => decode_imm_to_acc(source, b0, offset, Mnemonic::Add),
        0b001011 => decode_imm_to_acc(source, b0, offset, Mnemonic::Sub),
        0b001111 => decode_imm_to_acc(source, b0, offset, Mnemonic::Cmp),
        0b011100..=0b011111 | 0b111000 => decode_jump(source, b0, offset),
        _ => Err(malformed(offset, b0, format!("unrecognized opcode class {top6:#08b}"))),
    }
}

fn malformed(offset: u64, opcode: u8, reason: String) -> DisasmError {
    DisasmError::MalformedInstruction {
        offset,
        opcode,
        reason,
    }
}

/// Reads one byte, returning `Ok(None)` on a clean end-of-stream rather than
/// treating it as truncation — only valid at an instruction boundary.
fn read_opt_u8<R: Read>(source: &mut R) -> Result<Option<u8>> {
    let mut buf = [0u8; 1];
    match source.read(&mut buf)? {
        0 => Ok(None),
        _ => Ok(Some(buf[0])),
    }
}

/// Reads `buf.len()` more bytes belonging to the instruction that started
/// with `opcode` at `offset`; an end-of-stream here is truncation, not a
/// normal stream end.
fn read_tail<R: Read>(source: &mut R, buf: &mut [u8], offset: u64, opcode: u8) -> Result<()> {
    match source.read_exact(buf) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
            Err(malformed(offset, opcode, "truncated instruction".to_string()))
        }
        Err(e) => Err(DisasmError::Io(e)),
    }
}

fn read_u8_tail<R: Read>(source: &mut R, offset: u64, opcode: u8) -> Result<u8> {
    let mut buf = [0u8; 1];
    read_tail(source, &mut buf, offset, opcode)?;
    Ok(buf[0])
}

fn read_i8_tail<R: Read>(source: &mut R, offset: u64, opcode: u8) -> Result<i8> {
    Ok(read_u8_tail(source, offset, opcode)? as i8)
}

fn read_u16_le_tail<R: Read>(source: &mut R, offset: u64, opcode: u8) -> Result<u16> {
    let mut buf = [0u8; 2];
    read_tail(source, &mut buf, offset, opcode)?;
    Ok(u16::from_le_bytes(buf))
}

fn read_i16_le_tail<R: Read>(source: &mut R, offset: u64, opcode: u8) -> Result<i16> {
    Ok(read_u16_le_tail(source, offset, opcode)? as i16)
}

/// Decodes the `(mod, rm)` side of a ModR/M byte into an operand, given that
/// `mod != 0b11` (register-direct is handled by the caller). Returns the
/// operand and the number of extra displacement/address bytes consumed.
fn decode_memory_operand<R: Read>(
    source: &mut R,
    mod_: u8,
    rm: u8,
    offset: u64,
    opcode: u8,
    hint: WidthHint,
) -> Result<(Operand, u8)> {
    if is_direct_address(mod_, rm) {
        let addr = read_u16_le_tail(source, offset, opcode)?;
        return Ok((Operand::Memory(Memory::Direct(addr), hint), 2));
    }

    let (disp, extra) = match mod_ {
        0b00 => (0, 0),
        0b01 => (read_i8_tail(source, offset, opcode)? as i32, 1),
        0b10 => (read_i16_le_tail(source, offset, opcode)? as i32, 2),
        _ => unreachable!("mod==11 is register-direct and handled by the caller"),
    };

    Ok((Operand::Memory(memory_for(mod_, rm, disp), hint), extra))
}

fn decode_reg_rm<R: Read>(
    source: &mut R,
    b0: u8,
    offset: u64,
    operator: Mnemonic,
) -> Result<Instruction> {
    let d = (b0 >> 1) & 1;
    let w = b0 & 1;

    let b1 = read_u8_tail(source, offset, b0)?;
    let mod_ = b1 >> 6;
    let reg = (b1 >> 3) & 0b111;
    let rm = b1 & 0b111;

    let reg_operand = Operand::Register(register_name(reg, w));
    let (rm_operand, disp_len) = if mod_ == 0b11 {
        (Operand::Register(register_name(rm, w)), 0)
    } else {
        decode_memory_operand(source, mod_, rm, offset, b0, WidthHint::None)?
    };

    let (operand_left, operand_right) = if d == 0 {
        (rm_operand, reg_operand)
    } else {
        (reg_operand, rm_operand)
    };

    Ok(Instruction {
        operator,
        operand_left,
        operand_right: Some(operand_right),
        w,
        size: 2 + disp_len,
    })
}

fn decode_imm_to_reg_short<R: Read>(source: &mut R, b0: u8, offset: u64) -> Result<Instruction> {
    let w = (b0 >> 3) & 1;
    let reg = b0 & 0b111;

    let operand_left = Operand::Register(register_name(reg, w));
    let (imm, imm_len) = if w == 0 {
        (read_u8_tail(source, offset, b0)? as i32, 1)
    } else {
        (read_u16_le_tail(source, offset, b0)? as i32, 2)
    };

    Ok(Instruction {
        operator: Mnemonic::Mov,
        operand_left,
        operand_right: Some(Operand::Immediate(imm)),
        w,
        size: 1 + imm_len,
    })
}

fn decode_imm_to_rm<R: Read>(source: &mut R, b0: u8, offset: u64) -> Result<Instruction> {
    let s = (b0 >> 1) & 1;
    let w = b0 & 1;

    let b1 = read_u8_tail(source, offset, b0)?;
    let mod_ = b1 >> 6;
    let reg_ext = (b1 >> 3) & 0b111;
    let rm = b1 & 0b111;

    let operator = match reg_ext {
        0b000 => Mnemonic::Add,
        0b101 => Mnemonic::Sub,
        0b111 => Mnemonic::Cmp,
        _ => {
            return Err(malformed(
                offset,
                b0,
                format!("unsupported reg_ext {reg_ext:03b} in immediate-to-r/m form"),
            ))
        }
    };

    let hint = if w == 0 { WidthHint::Byte } else { WidthHint::Word };
    let (operand_left, disp_len) = if mod_ == 0b11 {
        (Operand::Register(register_name(rm, w)), 0)
    } else {
        decode_memory_operand(source, mod_, rm, offset, b0, hint)?
    };

    let (imm, imm_len): (i32, u8) = match (s, w) {
        (0, 0) => (read_u8_tail(source, offset, b0)? as i32, 1),
        (1, 0) => (read_i8_tail(source, offset, b0)? as i32, 1),
        (0, 1) => (read_u16_le_tail(source, offset, b0)? as i32, 2),
        // Sign-extend an 8-bit immediate to the full 16-bit value stored in
        // the Operand; only one byte is consumed from the stream.
        (1, 1) => (read_i8_tail(source, offset, b0)? as i32, 1),
        _ => unreachable!("s and w are each a single bit"),
    };

    Ok(Instruction {
        operator,
        operand_left,
        operand_right: Some(Operand::Immediate(imm)),
        w,
        size: 2 + disp_len + imm_len,
    })
}

fn decode_imm_to_acc<R: Read>(
    source: &mut R,
    b0: u8,
    offset: u64,
    operator: Mnemonic,
) -> Result<Instruction> {
    let w = b0 & 1;
    let operand_left = Operand::Register(if w == 0 { "al" } else { "ax" });
    let (imm, imm_len) = if w == 0 {
        (read_u8_tail(source, offset, b0)? as i32, 1)
    } else {
        (read_u16_le_tail(source, offset, b0)? as i32, 2)
    };

    Ok(Instruction {
        operator,
        operand_left,
        operand_right: Some(Operand::Immediate(imm)),
        w,
        size: 1 + imm_len,
    })
}

fn decode_jump<R: Read>(source: &mut R, b0: u8, offset: u64) -> Result<Instruction> {
    let low5 = b0 & 0b11111;
    let operator = Mnemonic::from_jump_opcode(low5)
        .ok_or_else(|| malformed(offset, b0, format!("unrecognized jump opcode {low5:#07b}")))?;

    let disp = read_i8_tail(source, offset, b0)? as i32;

    Ok(Instruction {
        operator,
        operand_left: Operand::Immediate(disp),
        operand_right: None,
        w: 0,
        size: 2,
    })
}

#[cfg(test)]
mod test;
