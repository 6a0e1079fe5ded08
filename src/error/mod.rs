//! Error types shared by the decoder, executor, and CLI driver.

/// Every way a decode/execute run can fail.
///
/// `EndOfStream` is not really a failure: it is the decoder's signal that the
/// instruction source is exhausted, and the main loop treats it as a normal,
/// successful end of the run rather than logging or propagating it as an error.
#[derive(thiserror::Error, Debug)]
pub enum DisasmError {
    /// The instruction source has no more bytes to decode.
    #[error("end of instruction stream")]
    EndOfStream,

    /// An opcode class, jump opcode, or `reg_ext` discriminant has no handler,
    /// or the source ended in the middle of an instruction.
    #[error("malformed instruction at offset {offset:#06x} (opcode {opcode:#04x}): {reason}")]
    MalformedInstruction {
        offset: u64,
        opcode: u8,
        reason: String,
    },

    /// The executor has no handler for a decoded mnemonic.
    #[error("unsupported operator {mnemonic:?}")]
    UnsupportedOperator { mnemonic: String },

    /// A control-flow operand was not a parseable signed integer.
    #[error("bad immediate operand {text:?}")]
    BadImmediate { text: String },

    /// The underlying source read/seek or the memory dump write failed.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DisasmError>;
