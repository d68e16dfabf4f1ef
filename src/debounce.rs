//! Event debouncing over the host timer
//!
//! A [`Debouncer`] holds at most one pending timeout. Each `schedule` call
//! cancels whatever was pending and arms a fresh timer, so a burst of
//! events collapses into a single callback roughly one delay after the
//! burst's last event.

use crate::host::{DeferredCallback, HostEnvironment, TimerId};
use std::time::Duration;

/// Single-slot debounce timer (last write wins).
#[derive(Debug)]
pub struct Debouncer {
  delay: Duration,
  pending: Option<TimerId>,
}

impl Debouncer {
  pub fn new(delay: Duration) -> Self {
    Self {
      delay,
      pending: None,
    }
  }

  pub fn delay(&self) -> Duration {
    self.delay
  }

  pub fn is_pending(&self) -> bool {
    self.pending.is_some()
  }

  /// Supersedes any pending timer and arms a new one.
  ///
  /// The callback must call [`Debouncer::mark_fired`] when it runs, so the
  /// slot is released for the next burst.
  pub fn schedule(&mut self, host: &dyn HostEnvironment, callback: DeferredCallback) {
    if let Some(superseded) = self.pending.take() {
      log::trace!("debounce: superseding pending timer");
      host.clear_timeout(superseded);
    }
    self.pending = Some(host.schedule_timeout(self.delay, callback));
  }

  /// Releases the pending slot once the armed callback has run.
  pub fn mark_fired(&mut self) {
    self.pending = None;
  }
}
