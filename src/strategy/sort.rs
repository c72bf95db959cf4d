// Fri Oct 16 2026 - Alex

use crate::engine::Context;
use crate::error::Result;
use crate::strategy::Strategy;
use crate::structure::{Field, Structure};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    SizeDescending,
    NameAscending,
    NameDescending,
    TypeAscending,
}

impl SortKey {
    fn compare(&self, a: &Field, b: &Field) -> Ordering {
        match self {
            SortKey::SizeDescending => b.size.cmp(&a.size),
            SortKey::NameAscending => a.name.cmp(&b.name),
            SortKey::NameDescending => b.name.cmp(&a.name),
            SortKey::TypeAscending => a.type_name.cmp(&b.type_name),
        }
    }
}

/// Stable field sort; ties keep their declared relative order.
#[derive(Debug, Clone, Copy)]
pub struct Sort {
    key: SortKey,
}

impl Sort {
    pub fn new(key: SortKey) -> Self {
        Self { key }
    }
}

impl Strategy for Sort {
    fn apply(&self, ctx: &Context, o: &Structure) -> Result<Structure> {
        ctx.check()?;
        let mut fields = o.fields.clone();
        fields.sort_by(|a, b| self.key.compare(a, b));
        Ok(o.with_fields(fields))
    }
}
