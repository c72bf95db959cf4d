// Fri Oct 16 2026 - Alex

use crate::curator::{CacheLevel, Curator};
use crate::engine::Context;
use crate::error::Result;
use crate::strategy::Strategy;
use crate::structure::{pad_field, Alignment, Structure};
use std::sync::Arc;

/// Rounds the whole struct up to a multiple of the cache line with one
/// trailing pad, so consecutive array elements start on a fresh line.
pub struct CacheRounding {
    level: CacheLevel,
    curator: Arc<dyn Curator>,
}

impl CacheRounding {
    pub fn new(level: CacheLevel, curator: Arc<dyn Curator>) -> Self {
        Self { level, curator }
    }
}

impl Strategy for CacheRounding {
    fn apply(&self, ctx: &Context, o: &Structure) -> Result<Structure> {
        ctx.check()?;
        let line = self.curator.sys_cache(self.level.index());
        if line <= 0 {
            return Ok(o.clone());
        }

        let gap = Alignment::new(line).gap(o.layout().size);
        let mut r = o.clone();
        if gap > 0 {
            r.fields.push(pad_field(gap));
        }
        Ok(r)
    }
}
