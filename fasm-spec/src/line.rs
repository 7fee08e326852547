//! Statements: one parsed FASM line

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::feature::SetFasmFeature;

/// One `name = "value"` metadata pair attached to a statement.
///
/// An empty-but-present value (`x = ""`) is distinct from an absent one
/// (`x`); both are preserved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub name: String,
    pub value: Option<String>,
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} = \"{}\"", self.name, value),
            None => write!(f, "{}", self.name),
        }
    }
}

/// One line of a FASM file: optional feature assignment, annotations,
/// comment. A line with none of these is blank and encodes to nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FasmLine {
    pub set_feature: Option<SetFasmFeature>,
    pub annotations: Vec<Annotation>,
    pub comment: Option<String>,
}

impl FasmLine {
    /// True when the line carries no feature, annotations, or comment
    pub fn is_blank(&self) -> bool {
        self.set_feature.is_none() && self.annotations.is_empty() && self.comment.is_none()
    }
}

impl fmt::Display for FasmLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();

        if let Some(set_feature) = &self.set_feature {
            parts.push(set_feature.to_string());
        }

        if !self.annotations.is_empty() {
            let inner = self
                .annotations
                .iter()
                .map(|annotation| annotation.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            parts.push(format!("{{ {} }}", inner));
        }

        if let Some(comment) = &self.comment {
            parts.push(format!("#{}", comment));
        }

        write!(f, "{}", parts.join(" "))
    }
}
