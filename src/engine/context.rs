// Fri Oct 16 2026 - Alex

use crate::error::{Error, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Cancellation scope shared by every task of one visit.
///
/// Cancelling a context cancels all contexts derived from it, never its
/// parent. A deadline fires lazily: it is observed on the next check.
#[derive(Debug, Clone)]
pub struct Context {
    inner: Arc<ContextInner>,
}

#[derive(Debug)]
struct ContextInner {
    parent: Option<Context>,
    cancelled: AtomicBool,
    deadline: Option<Instant>,
}

impl Context {
    pub fn background() -> Self {
        Self {
            inner: Arc::new(ContextInner {
                parent: None,
                cancelled: AtomicBool::new(false),
                deadline: None,
            }),
        }
    }

    pub fn child(&self) -> Self {
        self.derive(None)
    }

    pub fn with_timeout(&self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn with_deadline(&self, deadline: Instant) -> Self {
        self.derive(Some(deadline))
    }

    fn derive(&self, deadline: Option<Instant>) -> Self {
        Self {
            inner: Arc::new(ContextInner {
                parent: Some(self.clone()),
                cancelled: AtomicBool::new(false),
                deadline,
            }),
        }
    }

    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn err(&self) -> Option<Error> {
        if self.inner.cancelled.load(Ordering::SeqCst) {
            return Some(Error::Cancelled);
        }
        if let Some(deadline) = self.inner.deadline {
            if Instant::now() >= deadline {
                return Some(Error::DeadlineExceeded);
            }
        }
        self.inner.parent.as_ref().and_then(|parent| parent.err())
    }

    pub fn check(&self) -> Result<()> {
        match self.err() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    pub fn is_done(&self) -> bool {
        self.err().is_some()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::background()
    }
}
