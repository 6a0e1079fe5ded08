#![cfg(test)]

use std::io::Cursor;

use crate::decoder::decode;

#[test]
fn mov_register_to_register() {
    // mov cx, bx: d=0, w=1, mod=11, reg=011(bx), rm=001(cx)
    let mut source = Cursor::new(vec![0x89, 0xD9]);
    let instr = decode(&mut source, 0).unwrap();
    assert_eq!(instr.to_string(), "mov cx, bx");
    assert_eq!(instr.size, 2);
    assert_eq!(instr.w, 1);
}

#[test]
fn add_register_plus_memory_to_register() {
    // add bx, [bx + si]: opcode 00 000 00d w, d=0 -> reg is source here? check d bit.
    // 03 18: 0000_0011 00_011_000 -> top6=000000 (add), d=1,w=1; mod=00,reg=011(bx),rm=000(bx+si)
    let mut source = Cursor::new(vec![0x03, 0x18]);
    let instr = decode(&mut source, 0).unwrap();
    assert_eq!(instr.to_string(), "add bx, [bx + si]");
    assert_eq!(instr.size, 2);
}

#[test]
fn cmp_ax_cx() {
    let mut source = Cursor::new(vec![0x3B, 0xC1]);
    let instr = decode(&mut source, 0).unwrap();
    assert_eq!(instr.to_string(), "cmp ax, cx");
}

#[test]
fn mod01_reads_one_displacement_byte() {
    // mov al, [bx + si + 4]: 8A 40 04 -> d=1,w=0,mod=01,reg=000(al),rm=000(bx+si)
    let mut source = Cursor::new(vec![0x8A, 0x40, 0x04]);
    let instr = decode(&mut source, 0).unwrap();
    assert_eq!(instr.to_string(), "mov al, [bx + si + 4]");
    assert_eq!(instr.size, 3);
}

#[test]
fn mod00_rm110_decodes_direct_address() {
    // mov ax, [1000]: 8B 06 E8 03 -> d=1,w=1,mod=00,reg=000(ax),rm=110 -> direct address
    let mut source = Cursor::new(vec![0x8B, 0x06, 0xE8, 0x03]);
    let instr = decode(&mut source, 0).unwrap();
    assert_eq!(instr.to_string(), "mov ax, [1000]");
    assert_eq!(instr.size, 4);
}

#[test]
fn truncated_instruction_is_malformed_not_end_of_stream() {
    let mut source = Cursor::new(vec![0x89]);
    let err = decode(&mut source, 0).unwrap_err();
    assert!(matches!(
        err,
        crate::error::DisasmError::MalformedInstruction { .. }
    ));
}

#[test]
fn clean_end_of_stream_at_instruction_boundary() {
    let mut source = Cursor::new(Vec::<u8>::new());
    let err = decode(&mut source, 0).unwrap_err();
    assert!(matches!(err, crate::error::DisasmError::EndOfStream));
}
