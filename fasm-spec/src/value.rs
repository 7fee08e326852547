//! Value literals: radix formats and sized numeric values

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FasmError, Result};

/// Digit-group separator, legal in any literal and carrying no bits
pub const SEPARATOR: char = '_';

/// Radix of a value literal as tagged in source text
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueFormat {
    /// Unprefixed decimal integer (`F = 42`)
    Plain,
    /// Sized decimal literal (`8'd42`)
    VerilogDecimal,
    /// Sized hexadecimal literal (`8'h2A`)
    VerilogHex,
    /// Sized binary literal (`8'b101010`)
    VerilogBinary,
    /// Sized octal literal (`8'o52`)
    VerilogOctal,
}

impl ValueFormat {
    /// Numeral base of digits in this format
    pub fn radix(self) -> u32 {
        match self {
            Self::Plain | Self::VerilogDecimal => 10,
            Self::VerilogHex => 16,
            Self::VerilogBinary => 2,
            Self::VerilogOctal => 8,
        }
    }

    /// Base designator letter in source text (`'h`, `'b`, ...), if any
    pub fn designator(self) -> Option<char> {
        match self {
            Self::Plain => None,
            Self::VerilogDecimal => Some('d'),
            Self::VerilogHex => Some('h'),
            Self::VerilogBinary => Some('b'),
            Self::VerilogOctal => Some('o'),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain decimal",
            Self::VerilogDecimal => "decimal",
            Self::VerilogHex => "hex",
            Self::VerilogBinary => "binary",
            Self::VerilogOctal => "octal",
        }
    }
}

impl fmt::Display for ValueFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A value literal as written in source text.
///
/// `digits` is the raw digit text including separators; `value` is the
/// numeric reading of those digits; `width` is the declared bit width of
/// sized literals (`16'hAF` has width 16) and `None` for plain integers and
/// unsized literals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureValue {
    pub format: ValueFormat,
    pub digits: String,
    pub value: BigUint,
    pub width: Option<u32>,
}

impl FeatureValue {
    /// Build a value from raw digit text, validating digits against the
    /// radix and the numeric value against the declared width.
    pub fn new(format: ValueFormat, digits: impl Into<String>, width: Option<u32>) -> Result<Self> {
        let digits = digits.into();

        let mut stripped = String::with_capacity(digits.len());
        for c in digits.chars() {
            if c == SEPARATOR {
                continue;
            }
            if c.to_digit(format.radix()).is_none() {
                return Err(FasmError::InvalidDigit { format, digit: c });
            }
            stripped.push(c);
        }

        let value = BigUint::parse_bytes(stripped.as_bytes(), format.radix())
            .ok_or(FasmError::EmptyLiteral { format })?;

        if let Some(width) = width {
            if value.bits() > u64::from(width) {
                return Err(FasmError::ValueTooWide {
                    width: u64::from(width),
                    bits: value.bits(),
                });
            }
        }

        Ok(Self {
            format,
            digits,
            value,
            width,
        })
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.format == ValueFormat::Plain {
            return write!(f, "{}", self.value);
        }
        if let Some(width) = self.width {
            write!(f, "{}", width)?;
        }
        match self.format {
            ValueFormat::Plain | ValueFormat::VerilogDecimal => write!(f, "'d{}", self.value),
            ValueFormat::VerilogHex => write!(f, "'h{:X}", self.value),
            ValueFormat::VerilogBinary => write!(f, "'b{:b}", self.value),
            ValueFormat::VerilogOctal => write!(f, "'o{:o}", self.value),
        }
    }
}
