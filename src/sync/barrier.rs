//! A reusable countdown barrier with a dynamically sized party set.
//!
//! Unlike [`std::sync::Barrier`], the number of parties is not fixed at
//! construction: workers join a phase with [`register`](WavefrontBarrier::register)
//! and leave it with [`count_down`](WavefrontBarrier::count_down), while a
//! single driver blocks in [`wait`](WavefrontBarrier::wait) until every
//! registered worker has reported completion. After `wait` returns the
//! barrier is immediately ready for the next phase; no external reset is
//! needed.

use parking_lot::{Condvar, Mutex};
use std::sync::atomic::{AtomicI64, Ordering};

/// A reusable rendezvous between one driver and a varying number of workers.
///
/// The internal counter starts at 1: the driver itself holds a standing
/// registration, so the counter can only reach zero while the driver is
/// blocked in [`wait`](Self::wait). Counter updates are atomic; the
/// wake/block handshake goes through a mutex-protected condition variable so
/// the waiter re-checks the `counter == 0` predicate instead of consuming a
/// release token, which keeps racing `count_down` calls from losing a wakeup.
#[derive(Debug)]
pub struct WavefrontBarrier {
    outstanding: AtomicI64,
    lock: Mutex<()>,
    released: Condvar,
}

impl Default for WavefrontBarrier {
    fn default() -> Self {
        Self::new()
    }
}

impl WavefrontBarrier {
    /// Create a barrier holding only the driver's standing registration.
    pub fn new() -> Self {
        Self {
            outstanding: AtomicI64::new(1),
            lock: Mutex::new(()),
            released: Condvar::new(),
        }
    }

    /// Record one unit of outstanding work.
    ///
    /// Must be called before the corresponding work is dispatched, so the
    /// driver can never observe a zero counter while that work is in flight.
    pub fn register(&self) {
        self.outstanding.fetch_add(1, Ordering::SeqCst);
    }

    /// Report one unit of work as complete, waking the driver if this was
    /// the last outstanding registration.
    pub fn count_down(&self) {
        let previous = self.outstanding.fetch_sub(1, Ordering::SeqCst);
        debug_assert!(previous >= 1, "count_down without matching register");
        if previous == 1 {
            // Taking the lock orders this notify after any waiter's
            // predicate check, so the wakeup cannot be lost.
            let _guard = self.lock.lock();
            self.released.notify_all();
        }
    }

    /// Release the driver's standing registration, block until the counter
    /// reaches zero, then re-register the driver for the next phase.
    ///
    /// If no workers are outstanding the driver's own release brings the
    /// counter to zero and the call returns immediately.
    pub fn wait(&self) {
        self.count_down();
        let mut guard = self.lock.lock();
        while self.outstanding.load(Ordering::SeqCst) != 0 {
            self.released.wait(&mut guard);
        }
        drop(guard);
        self.register();
    }

    /// Current number of outstanding registrations, including the driver's.
    pub fn outstanding(&self) -> i64 {
        self.outstanding.load(Ordering::SeqCst)
    }
}
