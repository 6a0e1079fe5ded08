#![cfg(test)]

use std::io::Cursor;

use crate::decoder::decode;

#[test]
fn mov_immediate_byte_to_register() {
    // mov cl, 12: 1011 0 001, imm=0x0C
    let mut source = Cursor::new(vec![0xB1, 0x0C]);
    let instr = decode(&mut source, 0).unwrap();
    assert_eq!(instr.to_string(), "mov cl, 12");
    assert_eq!(instr.w, 0);
    assert_eq!(instr.size, 2);
}

#[test]
fn mov_immediate_word_to_register() {
    // mov cx, 0x0102: 1011 1 001, imm LE = 02 01
    let mut source = Cursor::new(vec![0xB9, 0x02, 0x01]);
    let instr = decode(&mut source, 0).unwrap();
    assert_eq!(instr.to_string(), "mov cx, 258");
    assert_eq!(instr.w, 1);
    assert_eq!(instr.size, 3);
}

#[test]
fn all_sixteen_reg_width_combinations_decode() {
    for reg in 0u8..8 {
        for w in 0u8..2 {
            let opcode = 0b1011_0000 | (w << 3) | reg;
            let bytes = if w == 0 {
                vec![opcode, 0x01]
            } else {
                vec![opcode, 0x01, 0x00]
            };
            let mut source = Cursor::new(bytes);
            let instr = decode(&mut source, 0).unwrap();
            assert_eq!(instr.operator.to_string(), "mov");
            assert_eq!(instr.w, w);
        }
    }
}
