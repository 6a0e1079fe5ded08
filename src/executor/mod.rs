//! Applies one decoded [`Instruction`] to a [`Machine`] (§4.2).
//!
//! The tagged `Operand` model (§9's design note) means this is a plain
//! pattern match over `Operand::Register`/`Immediate`/`Memory` instead of
//! the original's string parsing: no bracket-stripping, no `+`-splitting.

use std::io::{Read, Seek};

use crate::decoder::instruction::Instruction;
use crate::decoder::mnemonic::Mnemonic;
use crate::decoder::operand::{Memory, Operand};
use crate::error::{DisasmError, Result};
use crate::machine::Machine;

/// Applies `instr` to `machine`. The caller is responsible for having
/// already called [`Machine::advance`] with `instr.size` before or after
/// this call, per the instruction-pointer discipline of §4.2.3; taken
/// branches call [`Machine::jump`] themselves on top of that.
pub fn execute<R: Read + Seek>(machine: &mut Machine<R>, instr: &Instruction) -> Result<()> {
    use Mnemonic::*;

    match instr.operator {
        Mov => {
            let right = require_right(instr)?;
            let value = operand_value(machine, &right, instr.w)?;
            write_operand(machine, &instr.operand_left, instr.w, value)
        }
        Add | Sub | Cmp => apply_arithmetic(machine, instr),
        _ => {
            debug_assert!(instr.operator.is_unary_branch());
            apply_branch(machine, instr)
        }
    }
}

/// `mov`/`add`/`sub`/`cmp` all require a right-hand operand; the decoder
/// never produces one of these mnemonics without one, so this is really a
/// named unwrap rather than a reachable error path.
fn require_right(instr: &Instruction) -> Result<Operand> {
    instr.operand_right.ok_or_else(|| DisasmError::UnsupportedOperator {
        mnemonic: format!("{} with no right operand", instr.operator),
    })
}

fn apply_arithmetic<R: Read + Seek>(machine: &mut Machine<R>, instr: &Instruction) -> Result<()> {
    let right = require_right(instr)?;
    let left_value = operand_value(machine, &instr.operand_left, instr.w)?;
    let right_value = operand_value(machine, &right, instr.w)?;

    let raw = match instr.operator {
        Mnemonic::Add => left_value.wrapping_add(right_value),
        Mnemonic::Sub | Mnemonic::Cmp => left_value.wrapping_sub(right_value),
        other => {
            return Err(DisasmError::UnsupportedOperator {
                mnemonic: other.to_string(),
            })
        }
    };
    let truncated = truncate(raw, instr.w);
    set_flags(machine, truncated, instr.w);

    if instr.operator != Mnemonic::Cmp {
        write_operand(machine, &instr.operand_left, instr.w, truncated)?;
    }
    Ok(())
}

fn apply_branch<R: Read + Seek>(machine: &mut Machine<R>, instr: &Instruction) -> Result<()> {
    let disp = match instr.operand_left {
        Operand::Immediate(v) => v as i16,
        other => {
            return Err(DisasmError::BadImmediate {
                text: other.to_string(),
            })
        }
    };

    let taken = branch_predicate(machine, instr.operator);
    tracing::debug!(
        mnemonic = %instr.operator,
        taken,
        displacement = disp,
        "branch evaluated"
    );

    if taken {
        machine.jump(disp)?;
    }
    Ok(())
}

/// Evaluates whether a jump/loop mnemonic is taken, given only the flags
/// this machine maintains (ZF, SF — no OF, CF, or PF).
///
/// Predicates that depend on an unmodeled flag degrade to the documented
/// approximation of §4.2.2: overflow (OF) and parity (PF) are assumed
/// clear, and carry (CF) is approximated by SF (the same proxy the signed
/// comparisons use), so e.g. `jbe` collapses to the same rule as `jle`.
fn branch_predicate<R: Read + Seek>(machine: &mut Machine<R>, mnemonic: Mnemonic) -> bool {
    use Mnemonic::*;

    let zf = machine.zf();
    let sf = machine.sf();

    match mnemonic {
        Jmp => true,
        Je => zf,
        Jnz => !zf,
        Js => sf,
        Jns => !sf,
        Jl | Jb => sf,
        Jge | Jnb => !sf,
        Jle | Jbe => zf,
        Jg | Ja => !zf && !sf,
        Jo => false,
        Jno => true,
        Jp => false,
        Jpo => true,
        Loop | Loopz | Loopnz => {
            let cx = machine.read_register("cx").wrapping_sub(1);
            machine.write_register("cx", cx);
            match mnemonic {
                Loop => cx != 0,
                Loopz => cx != 0 && zf,
                Loopnz => cx != 0 && !zf,
                _ => unreachable!(),
            }
        }
        Jcxz => machine.read_register("cx") == 0,
        Mov | Add | Sub | Cmp => unreachable!("not a branch mnemonic"),
    }
}

fn truncate(value: u16, w: u8) -> u16 {
    if w == 0 {
        value & 0x00FF
    } else {
        value
    }
}

fn set_flags<R: Read + Seek>(machine: &mut Machine<R>, truncated: u16, w: u8) {
    let zf = truncated == 0;
    let sf = if w == 0 {
        truncated & 0x80 != 0
    } else {
        truncated & 0x8000 != 0
    };
    machine.set_zf(zf);
    machine.set_sf(sf);
}

fn effective_address<R: Read + Seek>(machine: &Machine<R>, mem: &Memory) -> u16 {
    match mem {
        Memory::Direct(addr) => *addr,
        Memory::Indirect { base, index, disp } => {
            let base_value = machine.read_register(base);
            let index_value = index.map(|name| machine.read_register(name)).unwrap_or(0);
            base_value
                .wrapping_add(index_value)
                .wrapping_add(*disp as i16 as u16)
        }
    }
}

fn operand_value<R: Read + Seek>(machine: &Machine<R>, operand: &Operand, w: u8) -> Result<u16> {
    Ok(match operand {
        Operand::Register(name) => machine.read_register(name),
        // The stored value is already the full signed literal the decoder
        // read; reinterpreting it through i16 sign-extends it to the
        // operand width, per the sign-extension design note in §9.
        Operand::Immediate(value) => (*value as i16) as u16,
        Operand::Memory(mem, _hint) => {
            let addr = effective_address(machine, mem);
            machine.read_memory(addr, if w == 0 { 1 } else { 2 })
        }
    })
}

fn write_operand<R: Read + Seek>(
    machine: &mut Machine<R>,
    operand: &Operand,
    w: u8,
    value: u16,
) -> Result<()> {
    match operand {
        Operand::Register(name) => {
            machine.write_register(name, value);
            Ok(())
        }
        Operand::Memory(mem, _hint) => {
            let addr = effective_address(machine, mem);
            machine.write_memory(addr, if w == 0 { 1 } else { 2 }, value);
            Ok(())
        }
        Operand::Immediate(_) => Err(DisasmError::UnsupportedOperator {
            mnemonic: "cannot write to an immediate operand".to_string(),
        }),
    }
}

#[cfg(test)]
mod test;
