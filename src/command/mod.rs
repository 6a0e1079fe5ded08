//! Command-line surface.

use std::path::PathBuf;

use clap::Parser;

/// Decode, and optionally execute, a raw 8086 instruction stream.
#[derive(Clone, Debug, Parser)]
#[clap(name = "disasm86")]
pub struct Cli {
    /// Path to the raw binary file of 8086 machine code.
    pub input: PathBuf,

    /// Emit the decoded listing only; do not execute.
    #[clap(long)]
    pub decode: bool,

    /// Print the final register dump in binary instead of hex.
    #[clap(long)]
    pub binary: bool,

    /// After execution, write the 64 KiB memory image to `memory.data`.
    #[clap(long)]
    pub dump: bool,
}
