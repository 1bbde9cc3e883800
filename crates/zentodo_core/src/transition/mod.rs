//! Transition timers for the add/delete lifecycle.
//!
//! # Responsibility
//! - Run one-shot deferred callbacks for visual sequencing.
//! - Tie pending-timer cancellation to handle lifetime.
//! - Gate the input control while an add is in flight.
//!
//! # Invariants
//! - Dropping a [`DeferHandle`] cancels the pending action unless detached.
//! - A detached action runs exactly once regardless of handle lifetime.
//! - The store never schedules or observes these timers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Delay between submitting a new item and committing it to the list.
pub const ADD_SETTLE_DELAY: Duration = Duration::from_millis(300);

/// Delay between requesting a removal and committing it to the list.
pub const REMOVE_SETTLE_DELAY: Duration = Duration::from_millis(300);

/// Schedules `action` to run once after `delay`.
///
/// The returned handle is the cancellation token: dropping it before the
/// delay elapses cancels the action. Call [`DeferHandle::detach`] when the
/// effect must survive the handle, as a committed removal does.
pub fn defer<F>(delay: Duration, action: F) -> DeferHandle
where
    F: FnOnce() + Send + 'static,
{
    let cancelled = Arc::new(AtomicBool::new(false));
    let observed = Arc::clone(&cancelled);
    thread::spawn(move || {
        thread::sleep(delay);
        if !observed.load(Ordering::SeqCst) {
            action();
        }
    });
    DeferHandle {
        cancelled,
        detached: false,
    }
}

/// Cancellation token for one deferred action.
pub struct DeferHandle {
    cancelled: Arc<AtomicBool>,
    detached: bool,
}

impl DeferHandle {
    /// Cancels the pending action if it has not fired yet.
    pub fn cancel(self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Lets the action run even after this handle is gone.
    pub fn detach(mut self) {
        self.detached = true;
    }
}

impl Drop for DeferHandle {
    fn drop(&mut self) {
        if !self.detached {
            self.cancelled.store(true, Ordering::SeqCst);
        }
    }
}

/// Suppresses duplicate submissions while an add is in flight.
#[derive(Debug, Default)]
pub struct InputGate {
    busy: Arc<AtomicBool>,
}

impl InputGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the gate. Returns `None` while a previous pass is still held.
    pub fn try_acquire(&self) -> Option<GatePass> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            Some(GatePass {
                busy: Arc::clone(&self.busy),
            })
        } else {
            None
        }
    }

    /// Whether a pass is currently held.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }
}

/// Held for the lifetime of one in-flight add. Dropping re-enables input.
pub struct GatePass {
    busy: Arc<AtomicBool>,
}

impl Drop for GatePass {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::SeqCst);
    }
}
