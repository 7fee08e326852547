//! Feature assignments and bit addresses

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value::FeatureValue;

/// Bit address of a feature: a single index or an inclusive range.
///
/// Source text `F[msb:lsb]` is stored low-bit-first: `start = lsb`,
/// `end = Some(msb)`, with `end >= start`. A single `F[n]` has `end = None`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureAddress {
    pub start: u32,
    pub end: Option<u32>,
}

impl FeatureAddress {
    /// Number of bits addressed. A range covering the whole index space is
    /// one past `u32::MAX`, so the count is 64-bit.
    pub fn width(&self) -> u64 {
        match self.end {
            Some(end) => u64::from(end) - u64::from(self.start) + 1,
            None => 1,
        }
    }
}

impl fmt::Display for FeatureAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "[{}:{}]", end, self.start),
            None => write!(f, "[{}]", self.start),
        }
    }
}

/// One feature assignment: `NAME[addr] = value`.
///
/// The feature name is an opaque dotted identifier; it is never interpreted.
/// A missing value means the feature is set to 1; a missing address means
/// the feature is one bit wide.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetFasmFeature {
    pub feature: String,
    pub address: Option<FeatureAddress>,
    pub value: Option<FeatureValue>,
}

impl SetFasmFeature {
    /// Number of bits this assignment covers, from the address range
    pub fn width(&self) -> u64 {
        match &self.address {
            Some(address) => address.width(),
            None => 1,
        }
    }
}

impl fmt::Display for SetFasmFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.feature)?;
        if let Some(address) = &self.address {
            write!(f, "{}", address)?;
        }
        if let Some(value) = &self.value {
            write!(f, " = {}", value)?;
        }
        Ok(())
    }
}
