//! # Record Framing Constants and Helpers
//!
//! This module provides centralized constants and the framing helper for
//! the self-describing record format.
//!
//! ## Record Format
//!
//! ```text
//! record: [tag:1 byte][length:8 ASCII hex digits][payload:length bytes]
//! ```
//!
//! The length field counts payload bytes only, written as uppercase
//! zero-padded hexadecimal. Payloads nest: a statement record's payload is
//! a concatenation of inner records. A reader can skip any record it does
//! not understand by consuming `length` bytes.

use fasm_spec::ValueFormat;

use crate::error::{EncodeError, Result};

// ============================================================================
// Framing Constants
// ============================================================================

/// Width of the ASCII hex length field.
pub const LENGTH_DIGITS: usize = 8;

/// Largest payload expressible in the length field (2^32 - 1 bytes).
pub const MAX_PAYLOAD: usize = 0xFFFF_FFFF;

// ============================================================================
// Record Tags
// ============================================================================

/// Statement record: one logical source line.
pub const TAG_STATEMENT: u8 = b'l';

/// Feature record: feature name, then optional address and value records.
pub const TAG_FEATURE: u8 = b'f';

/// Address record: start index, then optional end index.
pub const TAG_ADDRESS: u8 = b':';

/// Hexadecimal value record.
pub const TAG_HEX: u8 = b'h';

/// Binary value record.
pub const TAG_BINARY: u8 = b'b';

/// Octal value record.
pub const TAG_OCTAL: u8 = b'o';

/// Decimal value record.
pub const TAG_DECIMAL: u8 = b'd';

/// Plain (undesignated) value record.
pub const TAG_PLAIN: u8 = b'p';

/// Annotation list record: concatenated annotation records.
pub const TAG_ANNOTATIONS: u8 = b'{';

/// Single annotation record: name record, then optional value record.
pub const TAG_ANNOTATION: u8 = b'a';

/// Annotation name record.
pub const TAG_NAME: u8 = b'.';

/// Annotation value record.
pub const TAG_VALUE: u8 = b'=';

/// Comment record: comment text without the marker.
pub const TAG_COMMENT: u8 = b'#';

// ============================================================================
// Helpers
// ============================================================================

/// The value record tag for a literal format.
pub fn value_tag(format: ValueFormat) -> u8 {
    match format {
        ValueFormat::Plain => TAG_PLAIN,
        ValueFormat::VerilogDecimal => TAG_DECIMAL,
        ValueFormat::VerilogHex => TAG_HEX,
        ValueFormat::VerilogBinary => TAG_BINARY,
        ValueFormat::VerilogOctal => TAG_OCTAL,
    }
}

/// Frame a payload under a tag.
///
/// Returns [`EncodeError::Overflow`] when the payload exceeds
/// [`MAX_PAYLOAD`] bytes.
pub fn wrap(tag: u8, payload: &[u8]) -> Result<Vec<u8>> {
    if payload.len() > MAX_PAYLOAD {
        return Err(EncodeError::Overflow {
            len: payload.len(),
            max: MAX_PAYLOAD,
        });
    }

    let mut record = Vec::with_capacity(1 + LENGTH_DIGITS + payload.len());
    record.push(tag);
    record.extend_from_slice(
        format!("{:0width$X}", payload.len(), width = LENGTH_DIGITS).as_bytes(),
    );
    record.extend_from_slice(payload);
    Ok(record)
}
