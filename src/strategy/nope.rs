// Fri Oct 16 2026 - Alex

use crate::engine::Context;
use crate::error::Result;
use crate::strategy::Strategy;
use crate::structure::Structure;

/// Returns the struct unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nope;

impl Strategy for Nope {
    fn apply(&self, _ctx: &Context, o: &Structure) -> Result<Structure> {
        Ok(o.clone())
    }
}
