//! # Statement Encoder
//!
//! Lowers parsed statements into the record stream. Each non-blank
//! statement becomes one statement record holding its feature, annotation
//! list, and comment records in that order; blank statements produce
//! nothing. Input order is preserved.

use std::io::Write;

use fasm_spec::{Annotation, FasmLine, FeatureAddress, FeatureValue, SetFasmFeature};

use crate::error::Result;
use crate::normalize::normalize;
use crate::tlv::{self, wrap};

/// Encode statements into a byte sink, one record per non-blank statement.
///
/// A newline byte follows each record. The newline is a stream separator,
/// not part of the record; the record's own length field never counts it.
pub fn encode<W: Write>(lines: &[FasmLine], sink: &mut W) -> Result<()> {
    let mut records = 0usize;
    for line in lines {
        if let Some(record) = encode_line(line)? {
            sink.write_all(&record)?;
            sink.write_all(b"\n")?;
            records += 1;
        }
    }
    tracing::debug!("encoded {} records from {} statements", records, lines.len());
    Ok(())
}

/// Encode one statement, or `None` when it is blank.
pub fn encode_line(line: &FasmLine) -> Result<Option<Vec<u8>>> {
    if line.is_blank() {
        return Ok(None);
    }

    let mut payload = Vec::new();
    if let Some(feature) = &line.set_feature {
        payload.extend_from_slice(&encode_feature(feature)?);
    }
    if !line.annotations.is_empty() {
        payload.extend_from_slice(&encode_annotations(&line.annotations)?);
    }
    if let Some(comment) = &line.comment {
        payload.extend_from_slice(&wrap(tlv::TAG_COMMENT, comment.as_bytes())?);
    }

    Ok(Some(wrap(tlv::TAG_STATEMENT, &payload)?))
}

/// Encode a feature: name bytes verbatim, then the address and value
/// records when present.
pub fn encode_feature(feature: &SetFasmFeature) -> Result<Vec<u8>> {
    let mut payload = Vec::from(feature.feature.as_bytes());
    if let Some(address) = &feature.address {
        payload.extend_from_slice(&encode_address(address)?);
    }
    if let Some(value) = &feature.value {
        payload.extend_from_slice(&encode_value(value)?);
    }
    wrap(tlv::TAG_FEATURE, &payload)
}

/// Start index first, end index after it when the address is a range.
fn encode_address(address: &FeatureAddress) -> Result<Vec<u8>> {
    let mut payload = Vec::from(hex_index(address.start).as_bytes());
    if let Some(end) = address.end {
        payload.extend_from_slice(hex_index(end).as_bytes());
    }
    wrap(tlv::TAG_ADDRESS, &payload)
}

fn encode_value(value: &FeatureValue) -> Result<Vec<u8>> {
    let normalized = normalize(value.format, &value.digits)?;
    wrap(tlv::value_tag(value.format), normalized.as_bytes())
}

fn encode_annotations(annotations: &[Annotation]) -> Result<Vec<u8>> {
    let mut payload = Vec::new();
    for annotation in annotations {
        payload.extend_from_slice(&encode_annotation(annotation)?);
    }
    wrap(tlv::TAG_ANNOTATIONS, &payload)
}

/// An annotation always has a name record; the value record is present
/// exactly when the source carried `= "..."`, even for an empty string.
fn encode_annotation(annotation: &Annotation) -> Result<Vec<u8>> {
    let mut payload = wrap(tlv::TAG_NAME, annotation.name.as_bytes())?;
    if let Some(value) = &annotation.value {
        payload.extend_from_slice(&wrap(tlv::TAG_VALUE, value.as_bytes())?);
    }
    wrap(tlv::TAG_ANNOTATION, &payload)
}

/// Address index, same width and case as the length field.
fn hex_index(index: u32) -> String {
    format!("{:0width$X}", index, width = tlv::LENGTH_DIGITS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fasm_spec::ValueFormat;

    fn feature(
        name: &str,
        address: Option<FeatureAddress>,
        value: Option<FeatureValue>,
    ) -> SetFasmFeature {
        SetFasmFeature {
            feature: name.to_string(),
            address,
            value,
        }
    }

    #[test]
    fn test_bare_feature() {
        let record = encode_feature(&feature("CLB.SLICE.FF", None, None)).unwrap();
        assert_eq!(record, b"f0000000CCLB.SLICE.FF".as_slice());
    }

    #[test]
    fn test_feature_with_bit_address_and_binary_value() {
        let record = encode_feature(&feature(
            "X",
            Some(FeatureAddress {
                start: 3,
                end: None,
            }),
            Some(FeatureValue::new(ValueFormat::VerilogBinary, "1010", Some(4)).unwrap()),
        ))
        .unwrap();
        assert_eq!(
            record,
            b"f0000001CX:0000000800000003b00000001A".as_slice()
        );
    }

    #[test]
    fn test_feature_with_ranged_address() {
        let record = encode_feature(&feature(
            "LUT.INIT",
            Some(FeatureAddress {
                start: 0,
                end: Some(15),
            }),
            Some(FeatureValue::new(ValueFormat::VerilogHex, "af", Some(16)).unwrap()),
        ))
        .unwrap();
        assert_eq!(
            record,
            b"f0000002CLUT.INIT:00000010000000000000000Fh00000002AF".as_slice()
        );
    }

    #[test]
    fn test_annotation_with_value() {
        let record = encode_annotation(&Annotation {
            name: "src".to_string(),
            value: Some("v1".to_string()),
        })
        .unwrap();
        assert_eq!(record, b"a00000017.00000003src=00000002v1".as_slice());
    }

    #[test]
    fn test_annotation_empty_value_differs_from_absent() {
        let present = encode_annotation(&Annotation {
            name: "flag".to_string(),
            value: Some(String::new()),
        })
        .unwrap();
        let absent = encode_annotation(&Annotation {
            name: "flag".to_string(),
            value: None,
        })
        .unwrap();
        assert_eq!(present, b"a00000016.00000004flag=00000000".as_slice());
        assert_eq!(absent, b"a0000000D.00000004flag".as_slice());
        assert_ne!(present, absent);
    }

    #[test]
    fn test_comment_only_line() {
        let line = FasmLine {
            comment: Some(" hello".to_string()),
            ..FasmLine::default()
        };
        let record = encode_line(&line).unwrap().unwrap();
        assert_eq!(record, b"l0000000F#00000006 hello".as_slice());
    }

    #[test]
    fn test_blank_line_encodes_to_nothing() {
        assert_eq!(encode_line(&FasmLine::default()).unwrap(), None);
    }

    #[test]
    fn test_line_part_order_is_fixed() {
        let line = FasmLine {
            set_feature: Some(feature("F", None, None)),
            annotations: vec![Annotation {
                name: "a".to_string(),
                value: None,
            }],
            comment: Some("c".to_string()),
        };
        let record = encode_line(&line).unwrap().unwrap();
        let payload = &record[9..];
        let feature_at = payload.iter().position(|b| *b == b'f').unwrap();
        let annotations_at = payload.iter().position(|b| *b == b'{').unwrap();
        let comment_at = payload.iter().position(|b| *b == b'#').unwrap();
        assert!(feature_at < annotations_at);
        assert!(annotations_at < comment_at);
    }

    #[test]
    fn test_stream_writes_newline_after_each_record() {
        let lines = vec![
            FasmLine {
                set_feature: Some(feature("A", None, None)),
                ..FasmLine::default()
            },
            FasmLine::default(),
            FasmLine {
                set_feature: Some(feature("B", None, None)),
                ..FasmLine::default()
            },
        ];
        let mut sink = Vec::new();
        encode(&lines, &mut sink).unwrap();

        let expected_a = encode_line(&lines[0]).unwrap().unwrap();
        let expected_b = encode_line(&lines[2]).unwrap().unwrap();
        let mut expected = expected_a;
        expected.push(b'\n');
        expected.extend_from_slice(&expected_b);
        expected.push(b'\n');
        assert_eq!(sink, expected);
    }

    #[test]
    fn test_stream_preserves_input_order() {
        let lines: Vec<FasmLine> = ["FIRST", "SECOND", "THIRD"]
            .iter()
            .map(|name| FasmLine {
                set_feature: Some(feature(name, None, None)),
                ..FasmLine::default()
            })
            .collect();
        let mut sink = Vec::new();
        encode(&lines, &mut sink).unwrap();

        let first = sink.windows(5).position(|w| w == b"FIRST").unwrap();
        let second = sink.windows(6).position(|w| w == b"SECOND").unwrap();
        let third = sink.windows(5).position(|w| w == b"THIRD").unwrap();
        assert!(first < second);
        assert!(second < third);
    }
}
