// Fri Oct 16 2026 - Alex

use crate::structure::{Alignment, Field};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Natural (non-packed) layout of a field sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Layout {
    pub size: i64,
    pub align: i64,
    /// Leading bytes a precise collector has to scan for pointers.
    pub ptr: i64,
}

impl Layout {
    pub fn empty() -> Self {
        Self { size: 0, align: 1, ptr: 0 }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "struct size: {} bytes; struct align: {} bytes; struct ptr scan size: {} bytes",
            self.size, self.align, self.ptr
        )
    }
}

pub fn compute(fields: &[Field]) -> Layout {
    let mut offset = 0i64;
    let mut ptr = 0i64;
    let mut max_align = 1i64;

    for field in fields {
        let align = Alignment::new(field.align);
        max_align = max_align.max(align.as_i64());
        offset = align.align(offset);
        if field.ptr > 0 {
            ptr = ptr.max(offset + field.ptr);
        }
        offset += field.size;
    }

    let struct_align = Alignment::new(max_align);
    Layout {
        size: struct_align.align(offset),
        align: struct_align.as_i64(),
        ptr,
    }
}

/// Start offset of every field under the same rules as `compute`.
pub fn offsets(fields: &[Field]) -> Vec<i64> {
    let mut offset = 0i64;
    fields
        .iter()
        .map(|field| {
            let start = Alignment::new(field.align).align(offset);
            offset = start + field.size;
            start
        })
        .collect()
}
