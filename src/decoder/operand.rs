//! The tagged `Operand` model (design note in §9 of the spec).
//!
//! The decoder produces these directly instead of pre-rendered strings; a
//! `Display` impl renders the canonical textual form separately, and the
//! executor pattern-matches on the variants instead of re-parsing text.

use std::fmt;

/// A memory expression: `[base]`, `[base + index]`, `[base + disp]`,
/// `[base + index + disp]`, or a direct 16-bit absolute address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Memory {
    /// `base`, and optionally `index`, are register names; `disp` is a
    /// signed displacement folded in from the instruction stream. A `disp`
    /// of zero is never rendered (collapses to no displacement).
    Indirect {
        base: &'static str,
        index: Option<&'static str>,
        disp: i32,
    },
    /// `DIRECT ADDRESS`: a bare 16-bit absolute address read from the stream.
    Direct(u16),
}

impl fmt::Display for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Memory::Direct(addr) => write!(f, "[{addr}]"),
            Memory::Indirect { base, index, disp } => {
                write!(f, "[{base}")?;
                if let Some(index) = index {
                    write!(f, " + {index}")?;
                }
                if *disp != 0 {
                    write!(f, " + {disp}")?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Width qualifier prefixed onto a memory operand when the consumer cannot
/// otherwise infer the width (immediate-to-memory forms).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidthHint {
    None,
    Byte,
    Word,
}

/// A canonical decoded operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    Register(&'static str),
    /// Immediates and jump displacements are stored as the full signed
    /// 16-bit value; `Display` renders the narrow decimal literal the
    /// decoder originally read (see the sign-extension design note in §9),
    /// while arithmetic reads the full-width value directly from here.
    Immediate(i32),
    Memory(Memory, WidthHint),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Register(name) => write!(f, "{name}"),
            Operand::Immediate(value) => write!(f, "{value}"),
            Operand::Memory(mem, hint) => {
                match hint {
                    WidthHint::None => {}
                    WidthHint::Byte => write!(f, "byte ")?,
                    WidthHint::Word => write!(f, "word ")?,
                }
                write!(f, "{mem}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indirect_collapses_zero_displacement() {
        let mem = Memory::Indirect {
            base: "bx",
            index: Some("si"),
            disp: 0,
        };
        assert_eq!(mem.to_string(), "[bx + si]");
    }

    #[test]
    fn indirect_renders_nonzero_displacement() {
        let mem = Memory::Indirect {
            base: "bp",
            index: None,
            disp: -4,
        };
        assert_eq!(mem.to_string(), "[bp + -4]");
    }

    #[test]
    fn direct_address_renders_as_bracketed_decimal() {
        let mem = Memory::Direct(0x1000);
        assert_eq!(mem.to_string(), "[4096]");
    }

    #[test]
    fn width_hint_prefixes_memory_operand() {
        let op = Operand::Memory(
            Memory::Indirect {
                base: "bx",
                index: None,
                disp: 0,
            },
            WidthHint::Byte,
        );
        assert_eq!(op.to_string(), "byte [bx]");
    }
}
