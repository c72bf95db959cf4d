// Fri Oct 16 2026 - Alex

use crate::curator::Curator;
use crate::engine::Context;
use crate::error::Result;
use crate::strategy::Strategy;
use crate::structure::{pad_field, Alignment, Structure};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadKind {
    /// Every field boundary and the struct end land on the system alignment.
    SystemAlignment,
    /// Pads only where a field's own alignment forces an implicit gap.
    TypeNatural,
}

/// Makes implicit compiler padding visible as explicit pad fields.
pub struct Pad {
    kind: PadKind,
    curator: Arc<dyn Curator>,
}

impl Pad {
    pub fn new(kind: PadKind, curator: Arc<dyn Curator>) -> Self {
        Self { kind, curator }
    }
}

impl Strategy for Pad {
    fn apply(&self, ctx: &Context, o: &Structure) -> Result<Structure> {
        ctx.check()?;
        if o.fields.is_empty() {
            return Ok(o.clone());
        }

        let sys = Alignment::new(self.curator.sys_align());
        let mut fields = Vec::with_capacity(o.fields.len() * 2);
        let mut offset = 0i64;
        let mut struct_align = Alignment::default();

        for field in &o.fields {
            let align = match self.kind {
                PadKind::SystemAlignment => sys,
                PadKind::TypeNatural => Alignment::new(field.align),
            };
            if align.as_i64() > struct_align.as_i64() {
                struct_align = align;
            }
            let gap = align.gap(offset);
            if gap > 0 {
                fields.push(pad_field(gap));
            }
            fields.push(field.clone());
            offset += gap + field.size;
        }

        let tail = struct_align.gap(offset);
        if tail > 0 {
            fields.push(pad_field(tail));
        }
        Ok(o.with_fields(fields))
    }
}
