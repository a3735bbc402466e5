//! Trailing-edge debounce.
//!
//! The debouncer does not own a timer. [`Debouncer::call`] records the latest
//! arguments and hands back a [`Ticket`]; the host arms a timer for the window and
//! reports back with [`Debouncer::fire`]. Only the ticket from the most recent call
//! releases the arguments, so a burst of calls collapses into one trailing call
//! carrying the last arguments.

use std::time::Duration;

/// Identifies one armed timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub(crate) fn new(n: u64) -> Self {
        Self(n)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    window: Duration,
    latest: u64,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    pub const DEFAULT_WINDOW: Duration = Duration::from_millis(300);

    pub fn new(window: Duration) -> Self {
        Self {
            window,
            latest: 0,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Replace the pending arguments and restart the quiet window.
    pub fn call(&mut self, args: T) -> Ticket {
        self.latest += 1;
        self.pending = Some(args);
        Ticket(self.latest)
    }

    /// The pending arguments, if `ticket` is from the latest call.
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        if ticket.0 == self.latest {
            self.pending.take()
        } else {
            None
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW)
    }
}
