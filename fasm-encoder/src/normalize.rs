//! # Radix Normalization
//!
//! Turns the raw digit text of a value literal into a canonical uppercase
//! hexadecimal digit string describing the identical bit vector.
//!
//! Bit-grouped radixes (binary: 1 bit/digit, octal: 3 bits/digit, hex:
//! 4 bits/digit) are positional: the canonical string has `ceil(w / 4)`
//! digits for a literal of `w` written bits, zero-extended at the most
//! significant end. Decimal literals carry no bit positions; they are
//! accumulated as an arbitrary-precision integer and re-expressed in hex
//! with no leading zeros.

use num_bigint::BigUint;

use fasm_spec::{ValueFormat, SEPARATOR};

use crate::error::{EncodeError, Result};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Normalize a literal's digit text to canonical hex.
///
/// Separators are legal anywhere in the digit text and carry no bits. Any
/// other character invalid for the radix is a [`EncodeError::MalformedLiteral`];
/// text with no digits at all is a [`EncodeError::EmptyLiteral`].
pub fn normalize(format: ValueFormat, digits: &str) -> Result<String> {
    match format {
        ValueFormat::VerilogHex => normalize_hex(digits),
        ValueFormat::VerilogBinary => normalize_grouped(format, digits, 1),
        ValueFormat::VerilogOctal => normalize_grouped(format, digits, 3),
        ValueFormat::Plain | ValueFormat::VerilogDecimal => normalize_decimal(format, digits),
    }
}

/// Hex is already nibble-aligned: strip separators and uppercase.
fn normalize_hex(digits: &str) -> Result<String> {
    let mut out = String::with_capacity(digits.len());
    for c in digits.chars() {
        if c == SEPARATOR {
            continue;
        }
        if !c.is_ascii_hexdigit() {
            return Err(EncodeError::MalformedLiteral {
                format: ValueFormat::VerilogHex,
                digit: c,
            });
        }
        out.push(c.to_ascii_uppercase());
    }
    if out.is_empty() {
        return Err(EncodeError::EmptyLiteral {
            format: ValueFormat::VerilogHex,
        });
    }
    Ok(out)
}

/// Regroup `group_width`-bit digits into nibbles, MSB first, one pass.
///
/// The counter starts at the number of implicit leading zero bits that
/// complete the first nibble, so every emitted nibble drains exactly 4
/// bits. Emitting takes the top 4 accumulator bits and masks them off;
/// the low `counter - 4` bits stay behind as carry for the next digit.
fn normalize_grouped(format: ValueFormat, digits: &str, group_width: u32) -> Result<String> {
    let radix = 1u32 << group_width;

    let mut values = Vec::with_capacity(digits.len());
    for c in digits.chars() {
        if c == SEPARATOR {
            continue;
        }
        match c.to_digit(radix) {
            Some(value) => values.push(value),
            None => return Err(EncodeError::MalformedLiteral { format, digit: c }),
        }
    }
    if values.is_empty() {
        return Err(EncodeError::EmptyLiteral { format });
    }

    let total_bits = values.len() * group_width as usize;
    let mut counter = ((4 - total_bits % 4) % 4) as u32;
    let mut acc: u32 = 0;
    let mut out = String::with_capacity(total_bits / 4 + 1);

    for value in values {
        acc = (acc << group_width) | value;
        counter += group_width;
        while counter >= 4 {
            let nibble = acc >> (counter - 4);
            out.push(HEX_DIGITS[nibble as usize] as char);
            acc &= (1 << (counter - 4)) - 1;
            counter -= 4;
        }
    }

    // Holds by construction; a residue would mean truncated output
    if counter != 0 || acc != 0 {
        return Err(EncodeError::NormalizationInvariant { counter, acc });
    }

    Ok(out)
}

/// Accumulate decimal digits into an arbitrary-precision integer, then
/// re-express in hex.
fn normalize_decimal(format: ValueFormat, digits: &str) -> Result<String> {
    let mut value = BigUint::from(0u32);
    let mut seen = false;

    for c in digits.chars() {
        if c == SEPARATOR {
            continue;
        }
        match c.to_digit(10) {
            Some(digit) => {
                value = value * 10u32 + digit;
                seen = true;
            }
            None => return Err(EncodeError::MalformedLiteral { format, digit: c }),
        }
    }
    if !seen {
        return Err(EncodeError::EmptyLiteral { format });
    }

    Ok(format!("{:X}", value))
}
