//! FASM Record Encoder
//!
//! Encode parsed FASM statements into a self-describing record stream.
//!
//! ## Example
//!
//! ```rust
//! use fasm_encoder::encode;
//! use fasm_parser::parse;
//!
//! let lines = parse("LUT.INIT[15:0] = 16'hAF\n").unwrap();
//!
//! let mut stream = Vec::new();
//! encode(&lines, &mut stream).unwrap();
//! assert!(stream.starts_with(b"l"));
//! ```

pub mod encoder;
pub mod error;
pub mod normalize;
pub mod tlv;

pub use encoder::{encode, encode_feature, encode_line};
pub use error::{EncodeError, Result};
pub use normalize::normalize;
pub use tlv::{value_tag, wrap};
