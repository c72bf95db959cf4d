// Fri Oct 16 2026 - Alex

use crate::engine::Context;
use crate::error::{Error, Result};
use parking_lot::Mutex;

/// Fan-out scope: one rayon task per unit of work, a shared first-error
/// slot and a child context cancelled as soon as that slot is filled.
pub struct TaskGroup {
    ctx: Context,
    first: Mutex<Option<Error>>,
}

impl TaskGroup {
    pub fn new(parent: &Context) -> Self {
        Self {
            ctx: parent.child(),
            first: Mutex::new(None),
        }
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Records `err` if no failure was recorded yet. Returns whether it won.
    pub fn fail(&self, err: Error) -> bool {
        let mut slot = self.first.lock();
        if slot.is_some() {
            return false;
        }
        *slot = Some(err);
        self.ctx.cancel();
        true
    }

    /// Runs `task` for every item in parallel and blocks until all spawned
    /// tasks have returned. Items not yet started when the group is
    /// cancelled are skipped.
    pub fn spawn_each<I, T, F>(&self, items: I, task: F)
    where
        I: IntoIterator<Item = T>,
        T: Send,
        F: Fn(&Context, T) -> Result<()> + Sync,
    {
        let items: Vec<T> = items.into_iter().collect();
        let task = &task;
        rayon::scope(|scope| {
            for item in items {
                if self.ctx.is_done() {
                    break;
                }
                scope.spawn(move |_| {
                    if let Err(err) = self.ctx.check() {
                        self.fail(err);
                        return;
                    }
                    if let Err(err) = task(&self.ctx, item) {
                        self.fail(err);
                    }
                });
            }
        });
    }

    /// Single join point: the first recorded failure, or the context error
    /// if the parent was cancelled before anything failed.
    pub fn wait(self) -> Result<()> {
        if let Some(err) = self.first.into_inner() {
            return Err(err);
        }
        self.ctx.check()
    }
}
