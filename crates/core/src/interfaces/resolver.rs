//! Identifier resolution interface

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::error::{Error, Result};
use crate::types::EntityKind;

/// Trait for turning an opaque entity ID into a display name
pub trait Resolver: Send + Sync {
    /// Resolve `id` of the given kind.
    ///
    /// An unknown entity is not an error: implementations return `id`
    /// unchanged. `Err` is reserved for failures of the lookup itself.
    fn resolve(&self, ctx: &ResolveContext, kind: EntityKind, id: &str) -> Result<String>;
}

impl<R: Resolver + ?Sized> Resolver for &R {
    fn resolve(&self, ctx: &ResolveContext, kind: EntityKind, id: &str) -> Result<String> {
        (**self).resolve(ctx, kind, id)
    }
}

/// Cancellation and deadline carried through to every resolve call
///
/// Clones share the same cancellation flag.
#[derive(Debug, Clone, Default)]
pub struct ResolveContext {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl ResolveContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
            || self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Fail with [`Error::Cancelled`] once cancelled or past the deadline
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            return Err(Error::Cancelled);
        }
        Ok(())
    }
}
