// Fri Oct 16 2026 - Alex

use crate::engine::Context;
use crate::error::Result;
use crate::strategy::Strategy;
use crate::structure::Structure;

/// Drops synthetic pad fields, usually ahead of a re-padding pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterPads;

impl Strategy for FilterPads {
    fn apply(&self, ctx: &Context, o: &Structure) -> Result<Structure> {
        ctx.check()?;
        let fields = o.fields.iter().filter(|f| !f.is_pad()).cloned().collect();
        Ok(o.with_fields(fields))
    }
}
