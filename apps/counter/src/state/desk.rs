//! # Desk State
//!
//! Wraps the `CashDesk` for callers that may share it across threads.
//!
//! `order` and `done` both read-modify-write the running order and the
//! loyalty history, so the whole desk sits behind a single `Mutex` and every
//! operation holds it for its full duration.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use coffee_core::CashDesk;

/// Shared, lock-protected cash desk.
#[derive(Debug, Clone)]
pub struct SharedDesk {
    desk: Arc<Mutex<CashDesk>>,
}

impl SharedDesk {
    pub fn new(desk: CashDesk) -> Self {
        SharedDesk {
            desk: Arc::new(Mutex::new(desk)),
        }
    }

    /// Executes a function with read access to the desk.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let idle = shared.with_desk(|desk| desk.current_order().is_empty());
    /// ```
    pub fn with_desk<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CashDesk) -> R,
    {
        f(&self.lock())
    }

    /// Executes a function with write access to the desk.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let reply = shared.with_desk_mut(|desk| desk.order("small coffee"))?;
    /// ```
    pub fn with_desk_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CashDesk) -> R,
    {
        f(&mut self.lock())
    }

    // order/done mutate only after every check has passed, so a poisoned
    // lock still guards a consistent desk.
    fn lock(&self) -> MutexGuard<'_, CashDesk> {
        self.desk.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
