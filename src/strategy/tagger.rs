// Fri Oct 16 2026 - Alex

use crate::engine::Context;
use crate::error::Result;
use crate::strategy::tag::{self, TAG_KEY};
use crate::strategy::{Strategy, TAG_GROUP};
use crate::structure::Structure;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagMode {
    /// Leaves fields that already carry a layout tag alone.
    Soft,
    /// Overwrites any existing layout tag.
    Force,
}

/// Stamps every field with the layout tag the group strategy reads back,
/// listing the strategies of the pipeline this stage was built into.
/// Discrete tags put the fields into a bucket named after the struct.
#[derive(Debug, Clone)]
pub struct Tagger {
    strategies: String,
    mode: TagMode,
    discrete: bool,
}

impl Tagger {
    pub fn new(names: &[String], mode: TagMode) -> Self {
        let strategies = names
            .iter()
            .filter(|name| name.as_str() != TAG_GROUP)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",");
        Self {
            strategies,
            mode,
            discrete: false,
        }
    }

    pub fn discrete(mut self) -> Self {
        self.discrete = true;
        self
    }

    fn value(&self, o: &Structure) -> String {
        if self.discrete {
            format!("group:{};{}", o.name, self.strategies)
        } else {
            self.strategies.clone()
        }
    }
}

impl Strategy for Tagger {
    fn apply(&self, ctx: &Context, o: &Structure) -> Result<Structure> {
        ctx.check()?;
        let value = self.value(o);
        let force = self.mode == TagMode::Force;
        let mut r = o.clone();
        for field in &mut r.fields {
            field.tag = tag::set(&field.tag, TAG_KEY, &value, force);
        }
        Ok(r)
    }
}
