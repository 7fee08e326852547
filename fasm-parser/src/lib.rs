//! # FASM Parser
//!
//! Parse FASM source text into the typed model from `fasm-spec`.
//!
//! ## Example
//!
//! ```rust
//! use fasm_parser::parse;
//!
//! let lines = parse("LUT.INIT[3:0] = 4'b1010\n").unwrap();
//! assert!(lines[0].set_feature.is_some());
//! ```

pub mod error;
pub mod lexer;
pub mod parser;

pub use error::{ParseError, Result};
pub use lexer::Token;
pub use parser::{parse, parse_line};
