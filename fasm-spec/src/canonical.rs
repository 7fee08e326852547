//! Canonical form: expanding assignments into single-bit features
//!
//! A canonical feature is one bit wide with an implicit value of 1, so a
//! canonical FASM file is a plain set of enabled feature bits. Expansion
//! drops annotations and comments.

use num_bigint::BigUint;

use crate::error::{FasmError, Result};
use crate::feature::{FeatureAddress, SetFasmFeature};
use crate::line::FasmLine;

/// Expand one assignment into canonical single-bit assignments.
///
/// Clear bits produce nothing, so a value of 0 expands to an empty list.
/// Bit 0 of a feature is addressed bare (`F`, not `F[0]`).
pub fn canonical_features(set_feature: &SetFasmFeature) -> Result<Vec<SetFasmFeature>> {
    let value = match &set_feature.value {
        Some(value) => value.value.clone(),
        None => BigUint::from(1u32),
    };

    if value.bits() == 0 {
        return Ok(Vec::new());
    }

    let address = match &set_feature.address {
        Some(address) => address,
        None => {
            if value.bits() > 1 {
                return Err(FasmError::ValueTooWide {
                    width: 1,
                    bits: value.bits(),
                });
            }
            return Ok(vec![bit_feature(&set_feature.feature, 0)]);
        }
    };

    match address.end {
        None => {
            if value.bits() > 1 {
                return Err(FasmError::ValueTooWide {
                    width: 1,
                    bits: value.bits(),
                });
            }
            Ok(vec![bit_feature(&set_feature.feature, address.start)])
        }
        Some(end) => {
            if end < address.start {
                return Err(FasmError::ReversedRange {
                    msb: end,
                    lsb: address.start,
                });
            }
            let width = u64::from(end) - u64::from(address.start) + 1;
            if value.bits() > width {
                return Err(FasmError::ValueTooWide {
                    width,
                    bits: value.bits(),
                });
            }
            let mut features = Vec::new();
            // Bits at or past value.bits() are clear and produce nothing
            for bit in 0..value.bits() {
                if value.bit(bit) {
                    features.push(bit_feature(&set_feature.feature, address.start + bit as u32));
                }
            }
            Ok(features)
        }
    }
}

fn bit_feature(feature: &str, address: u32) -> SetFasmFeature {
    let address = if address == 0 {
        None
    } else {
        Some(FeatureAddress {
            start: address,
            end: None,
        })
    };
    SetFasmFeature {
        feature: feature.to_string(),
        address,
        value: None,
    }
}

/// Render a parsed model back to FASM text, one statement per line,
/// newline-terminated.
///
/// With `canonical` set, every assignment is expanded with
/// [`canonical_features`], annotations and comments are dropped, and the
/// result is sorted and deduplicated.
pub fn to_fasm_string(model: &[FasmLine], canonical: bool) -> Result<String> {
    let mut rendered = Vec::new();

    for line in model {
        if canonical {
            if let Some(set_feature) = &line.set_feature {
                for feature in canonical_features(set_feature)? {
                    rendered.push(feature.to_string());
                }
            }
        } else {
            rendered.push(line.to_string());
        }
    }

    if canonical {
        rendered.sort();
        rendered.dedup();
    }

    Ok(format!("{}\n", rendered.join("\n")))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::value::{FeatureValue, ValueFormat};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_expansion_len_is_popcount(value in 0u64..=u64::MAX) {
            let feature = SetFasmFeature {
                feature: "F".to_string(),
                address: Some(FeatureAddress { start: 0, end: Some(63) }),
                value: Some(
                    FeatureValue::new(ValueFormat::Plain, value.to_string(), None).unwrap(),
                ),
            };
            let expanded = canonical_features(&feature).unwrap();
            prop_assert_eq!(expanded.len() as u32, value.count_ones());
        }

        #[test]
        fn prop_expanded_features_are_canonical(value in 1u64..=u64::MAX, start in 0u32..1000) {
            let feature = SetFasmFeature {
                feature: "F".to_string(),
                address: Some(FeatureAddress { start, end: Some(start + 63) }),
                value: Some(
                    FeatureValue::new(ValueFormat::Plain, value.to_string(), None).unwrap(),
                ),
            };
            for expanded in canonical_features(&feature).unwrap() {
                prop_assert!(expanded.value.is_none());
                prop_assert_eq!(expanded.width(), 1);
                if let Some(address) = expanded.address {
                    prop_assert!(address.start != 0);
                    prop_assert!(address.end.is_none());
                }
            }
        }
    }
}
