//! The fixed 16-entry `(reg, w)` register name table (§6 of the spec).
//!
//! Encoded as `(reg << 1) | w`, matching the bit layout the decoder reads
//! straight off the `reg`/`rm` fields of a ModR/M byte.

/// Register names indexed by `(reg << 1) | w`.
///
/// Index `0b1011` names `bp`, not `dp` — the canonical 8086 name, fixing the
/// table/offset mismatch present in earlier iterations of this decoder.
const REGISTER_NAMES: [&str; 16] = [
    "al", "ax", "cl", "cx", "dl", "dx", "bl", "bx", "ah", "sp", "ch", "bp", "dh", "si", "bh", "di",
];

/// Looks up the register name for a 3-bit `reg`/`rm` field and the `w` bit.
///
/// # Examples
///
/// ```
/// use disasm86::decoder::registers::register_name;
///
/// assert_eq!(register_name(0b011, 1), "bx");
/// assert_eq!(register_name(0b011, 0), "bl");
/// assert_eq!(register_name(0b101, 1), "bp");
/// ```
pub fn register_name(reg: u8, w: u8) -> &'static str {
    REGISTER_NAMES[(((reg & 0b111) << 1) | (w & 1)) as usize]
}
