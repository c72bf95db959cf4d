// Fri Oct 16 2026 - Alex

use crate::engine::Context;
use crate::error::Result;
use crate::strategy::Strategy;
use crate::structure::Structure;

/// Appends the computed layout of the struct to its doc comment.
#[derive(Debug, Clone, Copy, Default)]
pub struct Annotate;

impl Strategy for Annotate {
    fn apply(&self, ctx: &Context, o: &Structure) -> Result<Structure> {
        ctx.check()?;
        let mut r = o.clone();
        r.comment.push(format!("// {}", o.layout()));
        Ok(r)
    }
}
