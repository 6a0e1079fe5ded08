#![cfg(test)]

use std::io::Cursor;

use crate::decoder::instruction::Instruction;
use crate::decoder::mnemonic::Mnemonic;
use crate::decoder::operand::{Memory, Operand, WidthHint};
use crate::executor::execute;
use crate::machine::Machine;

fn machine() -> Machine<Cursor<Vec<u8>>> {
    Machine::new(Cursor::new(Vec::new()))
}

#[test]
fn mov_immediate_to_register_leaves_sibling_half_untouched() {
    let mut m = machine();
    m.write_register("cx", 0xFF00);

    let instr = Instruction {
        operator: Mnemonic::Mov,
        operand_left: Operand::Register("cl"),
        operand_right: Some(Operand::Immediate(12)),
        w: 0,
        size: 2,
    };
    execute(&mut m, &instr).unwrap();

    assert_eq!(m.read_register("cl"), 12);
    assert_eq!(m.read_register("ch"), 0xFF);
}

#[test]
fn mov_register_to_register() {
    let mut m = machine();
    m.write_register("bx", 7);

    let instr = Instruction {
        operator: Mnemonic::Mov,
        operand_left: Operand::Register("cx"),
        operand_right: Some(Operand::Register("bx")),
        w: 1,
        size: 2,
    };
    execute(&mut m, &instr).unwrap();

    assert_eq!(m.read_register("cx"), 7);
}

#[test]
fn mov_memory_to_register_reads_little_endian_word() {
    let mut m = machine();
    m.write_register("bx", 0x1000);
    m.write_register("si", 0x0005);
    m.write_memory(0x1005, 2, 0x0001);

    let instr = Instruction {
        operator: Mnemonic::Mov,
        operand_left: Operand::Register("ax"),
        operand_right: Some(Operand::Memory(
            Memory::Indirect {
                base: "bx",
                index: Some("si"),
                disp: 0,
            },
            WidthHint::None,
        )),
        w: 1,
        size: 2,
    };
    execute(&mut m, &instr).unwrap();

    assert_eq!(m.read_register("ax"), 0x0001);
}

#[test]
fn mov_to_direct_address_writes_memory() {
    let mut m = machine();
    m.write_register("ax", 0x00FF);

    let instr = Instruction {
        operator: Mnemonic::Mov,
        operand_left: Operand::Memory(Memory::Direct(0x2000), WidthHint::None),
        operand_right: Some(Operand::Register("ax")),
        w: 1,
        size: 4,
    };
    execute(&mut m, &instr).unwrap();

    assert_eq!(m.read_memory(0x2000, 2), 0x00FF);
}
