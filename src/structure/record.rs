// Fri Oct 16 2026 - Alex

use crate::structure::layout::{self, Layout};
use crate::structure::Field;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named, ordered field sequence. Field order is the declared layout
/// order and the contract every strategy consumes and produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Structure {
    pub name: String,
    #[serde(default)]
    pub comment: Vec<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Structure {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_comment(mut self, line: &str) -> Self {
        self.comment.push(line.to_string());
        self
    }

    /// Copy of the struct metadata carrying `fields` instead.
    pub fn with_fields(&self, fields: Vec<Field>) -> Self {
        Self {
            name: self.name.clone(),
            comment: self.comment.clone(),
            fields,
        }
    }

    pub fn layout(&self) -> Layout {
        layout::compute(&self.fields)
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.name)?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ";")?;
            }
            write!(f, " {}", field)?;
        }
        write!(f, " }}")
    }
}
