//! Maps register names to their byte offset/width in the 20-byte backing
//! array (§6). `ax`=0 (ah=0, al=1), `bx`=2 (bh=2, bl=3), `cx`=4 (ch=4, cl=5),
//! `dx`=6 (dh=6, dl=7), `sp`=8, `bp`=10, `si`=12, `di`=14.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegisterSlot {
    pub offset: usize,
    /// 1 for an 8-bit half, 2 for the full 16-bit register.
    pub width: u8,
}

/// Looks up the backing-array slot for a register name produced by the
/// decoder's register table.
///
/// # Panics
///
/// Panics on a name outside the fixed 16-entry register table; the decoder
/// never produces any other name.
pub fn register_slot(name: &str) -> RegisterSlot {
    let (offset, width) = match name {
        "ah" => (0, 1),
        "al" => (1, 1),
        "ax" => (0, 2),
        "bh" => (2, 1),
        "bl" => (3, 1),
        "bx" => (2, 2),
        "ch" => (4, 1),
        "cl" => (5, 1),
        "cx" => (4, 2),
        "dh" => (6, 1),
        "dl" => (7, 1),
        "dx" => (6, 2),
        "sp" => (8, 2),
        "bp" => (10, 2),
        "si" => (12, 2),
        "di" => (14, 2),
        other => panic!("{other:?} is not a register name the decoder can produce"),
    };
    RegisterSlot { offset, width }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixteen_entries_match_the_offset_table() {
        let expected = [
            ("ah", 0, 1),
            ("al", 1, 1),
            ("ax", 0, 2),
            ("bh", 2, 1),
            ("bl", 3, 1),
            ("bx", 2, 2),
            ("ch", 4, 1),
            ("cl", 5, 1),
            ("cx", 4, 2),
            ("dh", 6, 1),
            ("dl", 7, 1),
            ("dx", 6, 2),
            ("sp", 8, 2),
            ("bp", 10, 2),
            ("si", 12, 2),
            ("di", 14, 2),
        ];
        for (name, offset, width) in expected {
            let slot = register_slot(name);
            assert_eq!(slot.offset, offset, "{name} offset");
            assert_eq!(slot.width, width, "{name} width");
        }
    }

    #[test]
    #[should_panic]
    fn unknown_name_panics() {
        register_slot("zz");
    }
}
