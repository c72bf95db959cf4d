// Fri Oct 16 2026 - Alex

use crate::engine::Context;
use crate::error::Result;
use crate::strategy::{SharedStrategy, Strategy};
use crate::structure::Structure;

/// Sequential composition: each stage consumes the previous stage's
/// output. The first failing stage aborts the whole pipe.
#[derive(Clone, Default)]
pub struct Pipe {
    stages: Vec<SharedStrategy>,
}

impl Pipe {
    pub fn new(stages: Vec<SharedStrategy>) -> Self {
        Self { stages }
    }

    pub fn push(&mut self, stage: SharedStrategy) {
        self.stages.push(stage);
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl Strategy for Pipe {
    fn apply(&self, ctx: &Context, o: &Structure) -> Result<Structure> {
        let mut r = o.clone();
        for stage in &self.stages {
            ctx.check()?;
            r = stage.apply(ctx, &r)?;
        }
        Ok(r)
    }
}
