//! Final register-state dump (§4.3, §6).
//!
//! The box-drawing layout mirrors the original interpreter's
//! `PrintRegistersHex`/`PrintRegistersBinary`: `ax`/`bx`/`cx`/`dx` split
//! into their high/low halves, `sp`/`bp`/`si`/`di` print as a single
//! 16-bit word.

use std::io::{Read, Seek};

use colored::Colorize;

use crate::machine::Machine;

const PAIR_REGISTERS: [(&str, &str, &str); 4] = [
    ("ax", "ah", "al"),
    ("bx", "bh", "bl"),
    ("cx", "ch", "cl"),
    ("dx", "dh", "dl"),
];

const WORD_REGISTERS: [&str; 4] = ["sp", "bp", "si", "di"];

/// Prints the register file with byte values in hexadecimal.
pub fn print_registers_hex<R: Read + Seek>(machine: &Machine<R>) {
    println!("     ┌─────────────┐");
    println!("     │  {}  │", "REGISTERS".bold());
    println!("┌────┼──────┬──────│");
    for (name, high, low) in PAIR_REGISTERS {
        println!(
            "│ {} │ 0x{:02x} │ 0x{:02x} │",
            name.cyan(),
            machine.read_register(high),
            machine.read_register(low)
        );
    }
    println!("├────┼──────┴──────┤");
    for name in WORD_REGISTERS {
        println!("│ {} │   0x{:04x}   │", name.cyan(), machine.read_register(name));
    }
    println!("└────┴─────────────┘");
}

/// Prints the register file with byte values in binary.
pub fn print_registers_binary<R: Read + Seek>(machine: &Machine<R>) {
    println!("     ┌─────────────────────┐");
    println!("     │      {}      │", "REGISTERS".bold());
    println!("┌────┼──────────┬──────────│");
    for (name, high, low) in PAIR_REGISTERS {
        println!(
            "│ {} │ {:08b} │ {:08b} │",
            name.cyan(),
            machine.read_register(high),
            machine.read_register(low)
        );
    }
    println!("├────┼──────────┴──────────┤");
    for name in WORD_REGISTERS {
        println!(
            "│ {} │      {:016b}      │",
            name.cyan(),
            machine.read_register(name)
        );
    }
    println!("└────┴─────────────────────┘");
}
