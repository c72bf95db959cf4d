// Fri Oct 16 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;

pub const PAD_NAME: &str = "_";

/// One struct member, or a synthetic pad when `name` is `_`.
///
/// `ptr` counts the leading bytes of the field that hold scannable
/// pointer data. An `align` of 0 is laid out as 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub size: i64,
    pub align: i64,
    #[serde(default)]
    pub ptr: i64,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub comment: Vec<String>,
    #[serde(default)]
    pub exported: bool,
    #[serde(default)]
    pub embedded: bool,
}

impl Field {
    pub fn new(name: &str, type_name: &str, size: i64, align: i64) -> Self {
        Self {
            name: name.to_string(),
            type_name: type_name.to_string(),
            size,
            align,
            ..Default::default()
        }
    }

    pub fn with_ptr(mut self, ptr: i64) -> Self {
        self.ptr = ptr;
        self
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = tag.to_string();
        self
    }

    pub fn with_comment(mut self, line: &str) -> Self {
        self.comment.push(line.to_string());
        self
    }

    pub fn is_pad(&self) -> bool {
        self.name == PAD_NAME
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} (size {}, align {})", self.name, self.type_name, self.size, self.align)
    }
}
