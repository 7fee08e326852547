//! Integration tests for the FASM data model
//!
//! Tests the public API of the model crate including FeatureValue and
//! canonical expansion.

use fasm_spec::{
    canonical_features, to_fasm_string, Annotation, FasmError, FasmLine, FeatureAddress,
    FeatureValue, SetFasmFeature, ValueFormat,
};

#[test]
fn test_assignment_construction_and_rendering() {
    let assignment = SetFasmFeature {
        feature: "CLB.SLICE_X0Y0.ALUT.INIT".to_string(),
        address: Some(FeatureAddress {
            start: 0,
            end: Some(63),
        }),
        value: Some(
            FeatureValue::new(ValueFormat::VerilogHex, "DEAD_BEEF_CAFE_F00D", Some(64)).unwrap(),
        ),
    };
    assert_eq!(assignment.width(), 64);
    assert_eq!(
        assignment.to_string(),
        "CLB.SLICE_X0Y0.ALUT.INIT[63:0] = 64'hDEADBEEFCAFEF00D"
    );
}

#[test]
fn test_sized_literal_formats_agree() {
    // The same bit pattern written four ways reads back identically
    let hex = FeatureValue::new(ValueFormat::VerilogHex, "2A", Some(8)).unwrap();
    let dec = FeatureValue::new(ValueFormat::VerilogDecimal, "42", Some(8)).unwrap();
    let bin = FeatureValue::new(ValueFormat::VerilogBinary, "101010", Some(8)).unwrap();
    let oct = FeatureValue::new(ValueFormat::VerilogOctal, "52", Some(8)).unwrap();
    assert_eq!(hex.value, dec.value);
    assert_eq!(dec.value, bin.value);
    assert_eq!(bin.value, oct.value);
}

#[test]
fn test_value_beyond_machine_width() {
    // 256-bit LUT initialization vector
    let digits = "AA".repeat(32);
    let value = FeatureValue::new(ValueFormat::VerilogHex, digits.as_str(), Some(256)).unwrap();
    assert_eq!(value.value.bits(), 256);
    assert_eq!(value.value.count_ones(), 128);
}

#[test]
fn test_value_fits_addressed_range() {
    let address = FeatureAddress {
        start: 8,
        end: Some(15),
    };
    let value = FeatureValue::new(ValueFormat::VerilogDecimal, "255", Some(8)).unwrap();
    assert_eq!(address.width(), 8);
    assert!(value.value.bits() <= address.width());
}

#[test]
fn test_format_accessors() {
    assert_eq!(ValueFormat::VerilogHex.radix(), 16);
    assert_eq!(ValueFormat::VerilogBinary.radix(), 2);
    assert_eq!(ValueFormat::VerilogHex.designator(), Some('h'));
    assert_eq!(ValueFormat::Plain.designator(), None);
    assert_eq!(ValueFormat::VerilogOctal.to_string(), "octal");
}

#[test]
fn test_annotation_value_presence() {
    // Empty-but-present is distinct from absent
    let present = Annotation {
        name: "flag".to_string(),
        value: Some(String::new()),
    };
    let absent = Annotation {
        name: "flag".to_string(),
        value: None,
    };
    assert_ne!(present, absent);
    assert_eq!(present.to_string(), "flag = \"\"");
    assert_eq!(absent.to_string(), "flag");
}

#[test]
fn test_empty_comment_is_content() {
    let mut line = FasmLine::default();
    assert!(line.is_blank());
    line.comment = Some(String::new());
    assert!(!line.is_blank());
}

#[test]
fn test_render_plain_preserves_everything() {
    let model = vec![
        FasmLine {
            set_feature: Some(SetFasmFeature {
                feature: "MUX.SEL".to_string(),
                address: None,
                value: None,
            }),
            annotations: vec![Annotation {
                name: "stage".to_string(),
                value: Some("2".to_string()),
            }],
            comment: None,
        },
        FasmLine::default(),
        FasmLine {
            set_feature: None,
            annotations: vec![],
            comment: Some(" routing below".to_string()),
        },
    ];
    assert_eq!(
        to_fasm_string(&model, false).unwrap(),
        "MUX.SEL { stage = \"2\" }\n\n# routing below\n"
    );
}

#[test]
fn test_render_canonical_expands_and_sorts() {
    let model = vec![
        FasmLine {
            set_feature: Some(SetFasmFeature {
                feature: "ZROUTE".to_string(),
                address: Some(FeatureAddress {
                    start: 1,
                    end: None,
                }),
                value: None,
            }),
            annotations: vec![],
            comment: Some(" dropped in canonical form".to_string()),
        },
        FasmLine {
            set_feature: Some(SetFasmFeature {
                feature: "LUT.INIT".to_string(),
                address: Some(FeatureAddress {
                    start: 0,
                    end: Some(3),
                }),
                value: Some(FeatureValue::new(ValueFormat::VerilogHex, "9", Some(4)).unwrap()),
            }),
            annotations: vec![],
            comment: None,
        },
    ];
    // 0x9 = 0b1001: bits 0 and 3
    assert_eq!(
        to_fasm_string(&model, true).unwrap(),
        "LUT.INIT\nLUT.INIT[3]\nZROUTE[1]\n"
    );
}

#[test]
fn test_canonical_rejects_value_wider_than_range() {
    let feature = SetFasmFeature {
        feature: "F".to_string(),
        address: Some(FeatureAddress {
            start: 0,
            end: Some(3),
        }),
        value: Some(FeatureValue::new(ValueFormat::VerilogHex, "1F", None).unwrap()),
    };
    let err = canonical_features(&feature).unwrap_err();
    assert_eq!(err, FasmError::ValueTooWide { width: 4, bits: 5 });
}
