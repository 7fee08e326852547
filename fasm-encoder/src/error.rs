//! Encoder errors

use fasm_spec::ValueFormat;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Malformed {format} literal: invalid digit {digit:?}")]
    MalformedLiteral { format: ValueFormat, digit: char },

    #[error("Malformed {format} literal: no digits after separators")]
    EmptyLiteral { format: ValueFormat },

    #[error("Residual bits after normalization: counter={counter}, accumulator={acc:#x}")]
    NormalizationInvariant { counter: u32, acc: u32 },

    #[error("Record payload of {len} bytes exceeds the {max} byte maximum")]
    Overflow { len: usize, max: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EncodeError>;
