//! Orchestrates the decoder, machine, and executor around a CLI invocation.

pub mod run;
