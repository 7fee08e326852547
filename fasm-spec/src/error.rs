//! # Error Types for the FASM Data Model

use crate::value::ValueFormat;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FasmError {
    // Literal errors
    #[error("Invalid digit {digit:?} in {format} literal")]
    InvalidDigit { format: ValueFormat, digit: char },

    #[error("Empty {format} literal: no digits after separators")]
    EmptyLiteral { format: ValueFormat },

    // Width errors
    #[error("Value needs {bits} bits but only {width} are available")]
    ValueTooWide { width: u64, bits: u64 },

    // Address errors
    #[error("Reversed address range: [{msb}:{lsb}] requires msb >= lsb")]
    ReversedRange { msb: u32, lsb: u32 },
}

pub type Result<T> = std::result::Result<T, FasmError>;
