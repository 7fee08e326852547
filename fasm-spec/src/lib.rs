//! # FASM Data Model
//!
//! Typed model of FASM (FPGA assembly) files: feature assignments with
//! optional bit addresses and sized value literals, annotations, and
//! comments, one [`FasmLine`] per source line.
//!
//! ## Key Features
//! - Value literals keep their source radix, raw digit text, numeric value
//!   (arbitrary precision), and declared bit width
//! - Declared widths are validated (`value < 2^width`)
//! - Canonical expansion into single-bit features
//! - `Display` impls render parsable FASM text back out
//!
//! ## Example
//!
//! ```rust
//! use fasm_spec::{FeatureValue, ValueFormat};
//!
//! let value = FeatureValue::new(ValueFormat::VerilogHex, "a_f", Some(16)).unwrap();
//! assert_eq!(value.to_string(), "16'hAF");
//! ```

pub mod canonical;
pub mod error;
pub mod feature;
pub mod line;
pub mod value;

pub use canonical::{canonical_features, to_fasm_string};
pub use error::{FasmError, Result};
pub use feature::{FeatureAddress, SetFasmFeature};
pub use line::{Annotation, FasmLine};
pub use value::{FeatureValue, ValueFormat, SEPARATOR};
