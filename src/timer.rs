//! Timer scheduling abstraction.
//!
//! The animation and the contact-form simulation are both driven by
//! one-shot timers. Pure code never sleeps: it asks a [`Scheduler`] for a
//! timer and reacts when the corresponding id comes back through the app
//! event stream. Cancelling an id guarantees it never fires, which is what
//! lets teardown stop every pending callback.
//!
//! Two implementations:
//! - [`ChannelScheduler`]: real timers, one sleeping thread per timer,
//!   delivering into the app's mpsc channel.
//! - [`ManualScheduler`]: a virtual clock for tests.

use std::collections::HashSet;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

// ============================================================================
// SCHEDULER
// ============================================================================

/// Handle to a pending timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// One-shot timer facility.
///
/// `schedule_after` arms a timer; `cancel` disarms it. Cancelling an id
/// that already fired (or was never issued) is a no-op.
pub trait Scheduler {
    /// Arm a one-shot timer that fires after `delay`.
    fn schedule_after(&mut self, delay: Duration) -> TimerId;

    /// Disarm a pending timer. After this returns, the id will not fire.
    fn cancel(&mut self, id: TimerId);
}

// ============================================================================
// CHANNEL SCHEDULER
// ============================================================================

/// Scheduler backed by sleeping threads and an mpsc channel.
///
/// Each armed timer spawns a thread that sleeps for the delay, then sends
/// `E::from(id)` to the channel if the id is still live. Cancellation
/// removes the id from the live set, so the fire-time check makes
/// cancellation race-free: either the id is removed before the sleep ends
/// and nothing is sent, or the event was already delivered.
pub struct ChannelScheduler<E> {
    next_id: u64,
    live: Arc<Mutex<HashSet<u64>>>,
    tx: mpsc::Sender<E>,
}

impl<E> ChannelScheduler<E> {
    /// Create a scheduler delivering timer events to `tx`.
    pub fn new(tx: mpsc::Sender<E>) -> Self {
        ChannelScheduler {
            next_id: 0,
            live: Arc::new(Mutex::new(HashSet::new())),
            tx,
        }
    }
}

/// Lock that shrugs off poisoning: the set of live ids is valid even if
/// a timer thread panicked mid-update.
fn lock_live(live: &Mutex<HashSet<u64>>) -> std::sync::MutexGuard<'_, HashSet<u64>> {
    live.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<E: From<TimerId> + Send + 'static> Scheduler for ChannelScheduler<E> {
    fn schedule_after(&mut self, delay: Duration) -> TimerId {
        self.next_id += 1;
        let id = self.next_id;
        lock_live(&self.live).insert(id);

        let live = Arc::clone(&self.live);
        let tx = self.tx.clone();
        thread::spawn(move || {
            thread::sleep(delay);
            if lock_live(&live).remove(&id) {
                // Receiver gone means the app already shut down.
                let _ = tx.send(E::from(TimerId(id)));
            }
        });

        TimerId(id)
    }

    fn cancel(&mut self, id: TimerId) {
        lock_live(&self.live).remove(&id.0);
    }
}

// ============================================================================
// MANUAL SCHEDULER (tests)
// ============================================================================

/// Deterministic scheduler driven by an explicit virtual clock.
///
/// `advance` moves the clock and returns the ids that came due, in firing
/// order. Nothing fires unless the clock is advanced past its deadline.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    now_ms: u64,
    /// Pending timers: (id, absolute due time in virtual ms).
    pending: Vec<(TimerId, u64)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the virtual clock by `delta`, returning fired timer ids
    /// ordered by due time (ties in scheduling order).
    pub fn advance(&mut self, delta: Duration) -> Vec<TimerId> {
        self.now_ms += delta.as_millis() as u64;
        let now = self.now_ms;

        let mut due: Vec<(TimerId, u64)> = Vec::new();
        self.pending.retain(|&(id, at)| {
            if at <= now {
                due.push((id, at));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(_, at)| at);
        due.into_iter().map(|(id, _)| id).collect()
    }

    /// Number of timers still armed.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_after(&mut self, delay: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.pending.push((id, self.now_ms + delay.as_millis() as u64));
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.retain(|&(pending_id, _)| pending_id != id);
    }
}

// ============================================================================
// TESTS
// ============================================================================
