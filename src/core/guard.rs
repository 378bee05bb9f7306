//! Stale-result guard for rendering surfaces.
//!
//! A surface may be unmounted, or start a newer load, while a fetch is still
//! in flight. Each load takes a [`Ticket`]; a result is only applied when
//! its ticket is still the latest one issued and the surface was not
//! unmounted since.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

/// Proof that a load was started at a given generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Generation counter for one surface
#[derive(Debug, Default)]
pub struct SurfaceGuard {
    generation: AtomicU64,
}

impl SurfaceGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load, invalidating any earlier ticket
    pub fn begin(&self) -> Ticket {
        Ticket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Invalidate every outstanding ticket
    pub fn unmount(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }
}

/// A rendered value guarded against stale writes
#[derive(Debug)]
pub struct RenderSlot<T> {
    guard: SurfaceGuard,
    value: Mutex<T>,
}

impl<T: Clone> RenderSlot<T> {
    /// Create a slot showing `initial` (usually the section defaults)
    pub fn new(initial: T) -> Self {
        Self {
            guard: SurfaceGuard::new(),
            value: Mutex::new(initial),
        }
    }

    fn lock(&self) -> MutexGuard<'_, T> {
        self.value.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn begin(&self) -> Ticket {
        let _slot = self.lock();
        self.guard.begin()
    }

    /// Once this returns, no earlier ticket can write to the slot
    pub fn unmount(&self) {
        let _slot = self.lock();
        self.guard.unmount();
    }

    /// Store `value` if `ticket` is still current. Returns whether it was applied.
    pub fn apply(&self, ticket: Ticket, value: T) -> bool {
        // Generation only moves under this lock, so the check holds until the write
        let mut slot = self.lock();
        if !self.guard.is_current(ticket) {
            tracing::debug!("Discarding stale render result");
            return false;
        }
        *slot = value;
        true
    }

    /// Run a load and apply its result unless it went stale meanwhile
    pub async fn load<F>(&self, fut: F) -> bool
    where
        F: Future<Output = T>,
    {
        let ticket = self.begin();
        let value = fut.await;
        self.apply(ticket, value)
    }

    /// Current value
    pub fn get(&self) -> T {
        self.lock().clone()
    }
}
