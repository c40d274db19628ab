//! Wall-clock sources
//!
//! Instants are local wall-clock times; their date component is the calendar
//! day used to pick the log file.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use parking_lot::Mutex;

/// Source of the current instant
pub trait Clock: Send + Sync {
    /// Read the current instant
    fn now(&self) -> NaiveDateTime;
}

/// Type alias for an Arc-wrapped clock
pub type SharedClock = Arc<dyn Clock>;

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// The process clock, in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stuck at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// A clock that hands out a scripted list of instants
///
/// Each read consumes one instant; once the list runs dry the last instant
/// repeats.
pub struct SequenceClock {
    state: Mutex<SequenceState>,
}

struct SequenceState {
    pending: VecDeque<NaiveDateTime>,
    last: NaiveDateTime,
}

impl SequenceClock {
    /// Create a clock from a non-empty list of instants
    ///
    /// Returns `None` when `instants` is empty.
    pub fn new(instants: impl IntoIterator<Item = NaiveDateTime>) -> Option<Self> {
        let pending: VecDeque<_> = instants.into_iter().collect();
        let first = *pending.front()?;
        Some(Self {
            state: Mutex::new(SequenceState { pending, last: first }),
        })
    }

    /// Number of scripted instants not yet read
    pub fn remaining(&self) -> usize {
        self.state.lock().pending.len()
    }
}

impl Clock for SequenceClock {
    fn now(&self) -> NaiveDateTime {
        let mut state = self.state.lock();
        if let Some(next) = state.pending.pop_front() {
            state.last = next;
        }
        state.last
    }
}

impl fmt::Debug for SequenceClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceClock")
            .field("remaining", &self.remaining())
            .finish()
    }
}
