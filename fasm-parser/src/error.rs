//! Parser errors

use fasm_spec::FasmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("Unrecognized input at line {line}: {text:?}")]
    Lex { line: usize, text: String },

    #[error("Invalid address at line {line}: {text:?} is not a valid index")]
    InvalidAddress { line: usize, text: String },

    #[error("Invalid width at line {line}: {text:?}")]
    InvalidWidth { line: usize, text: String },

    #[error("Reversed address range at line {line}: [{msb}:{lsb}]")]
    ReversedRange { line: usize, msb: u32, lsb: u32 },

    #[error("Invalid value at line {line}: {source}")]
    Value {
        line: usize,
        #[source]
        source: FasmError,
    },
}

impl ParseError {
    /// Source line number (1-based) the error was raised on
    pub fn line(&self) -> usize {
        match self {
            Self::Syntax { line, .. }
            | Self::Lex { line, .. }
            | Self::InvalidAddress { line, .. }
            | Self::InvalidWidth { line, .. }
            | Self::ReversedRange { line, .. }
            | Self::Value { line, .. } => *line,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
