use crate::timespec::Timespec;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Monotonic clock source backed by `std::time::Instant`.
///
/// Readings are the time elapsed since the clock was created, so they are
/// unaffected by wall-clock adjustments and never decrease.
pub struct Clock {
    origin: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Clock {
            origin: Instant::now(),
        }
    }

    pub fn now(&self) -> Timespec {
        self.origin.elapsed().into()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Clock::new()
    }
}
