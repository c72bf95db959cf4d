// Fri Oct 16 2026 - Alex

use crate::curator::{CacheLevel, Curator};
use crate::engine::Context;
use crate::error::Result;
use crate::strategy::Strategy;
use crate::structure::{pad_field, Alignment, Structure};
use std::sync::Arc;

/// Pads after every field up to the next cache line boundary so that
/// fields updated from different cores never share a line.
pub struct FalseSharing {
    level: CacheLevel,
    curator: Arc<dyn Curator>,
}

impl FalseSharing {
    pub fn new(level: CacheLevel, curator: Arc<dyn Curator>) -> Self {
        Self { level, curator }
    }
}

impl Strategy for FalseSharing {
    fn apply(&self, ctx: &Context, o: &Structure) -> Result<Structure> {
        ctx.check()?;
        let line = self.curator.sys_cache(self.level.index());
        if line <= 0 {
            return Ok(o.clone());
        }

        let line = Alignment::new(line);
        let mut fields = Vec::with_capacity(o.fields.len() * 2);
        let mut offset = 0i64;
        for field in &o.fields {
            fields.push(field.clone());
            offset += field.size;
            let gap = line.gap(offset);
            if gap > 0 {
                fields.push(pad_field(gap));
                offset += gap;
            }
        }
        Ok(o.with_fields(fields))
    }
}
