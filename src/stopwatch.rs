use crate::timespec::Timespec;
use log::{debug, trace};

#[cfg(not(feature = "mocks"))]
use crate::clock::Clock;
#[cfg(feature = "mocks")]
use crate::fake_clock::Clock;

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

#[derive(Default, Debug)]
/// Measures elapsed time over a monotonic clock, with pause and resume.
///
/// A `Stopwatch` is either stopped or running. Time spent running is added
/// to an accumulated total; time spent stopped is not counted. A new
/// stopwatch is stopped with nothing accumulated.
///
/// | state   | `start()`      | `stop()`         | `resume()`  |
/// |---------|----------------|------------------|-------------|
/// | stopped | run from zero  | no-op            | run, keep total |
/// | running | restart (reset)| commit, stop     | no-op       |
///
/// # Example
///
/// ```
/// # use stopwatch::stopwatch::Stopwatch;
/// #
/// let mut watch = Stopwatch::new();
/// assert_eq!(watch.read(), 0);
///
/// watch.start();
/// watch.stop();
/// let total = watch.read();
/// assert_eq!(watch.read(), total);
/// ```
pub struct Stopwatch {
    // Some while running
    start_instant: Option<Timespec>,
    accumulated: Timespec,
    clock: Arc<Mutex<Clock>>,
}

/// A builder for configuring a [`Stopwatch`].
#[derive(Default, Debug)]
pub struct StopwatchBuilder {
    clock: Arc<Mutex<Clock>>,
}

impl StopwatchBuilder {
    /// Creates a builder using a fresh clock.
    pub fn new() -> Self {
        StopwatchBuilder {
            ..Default::default()
        }
    }

    /// Sets the clock the stopwatch reads.
    ///
    /// The clock is shared, which lets the caller keep a handle on it, for
    /// instance to drive a fake clock from a test.
    pub fn clock(mut self, clock: Arc<Mutex<Clock>>) -> Self {
        self.clock = clock;
        self
    }

    /// Builds a stopped `Stopwatch` with nothing accumulated.
    pub fn build(self) -> Stopwatch {
        Stopwatch {
            clock: self.clock,
            ..Default::default()
        }
    }
}

impl Stopwatch {
    /// Creates a stopped stopwatch reading its own monotonic clock.
    pub fn new() -> Self {
        StopwatchBuilder::new().build()
    }

    /// Starts the stopwatch, or restarts it if it is already running.
    ///
    /// Any previously accumulated time is discarded.
    pub fn start(&mut self) {
        let now = self.now();
        debug!("START at {now:?}");

        self.start_instant = Some(now);
        self.accumulated = Timespec::ZERO;
    }

    /// Stops the stopwatch, adding the interval since the last start or
    /// resume to the accumulated time. Does nothing if already stopped.
    pub fn stop(&mut self) {
        let Some(start) = self.start_instant.take() else {
            debug!("STOP ignored, not running");
            return;
        };

        let interval = self.now().elapsed_since(&start);
        self.accumulated = self.accumulated + interval;
        debug!("STOP after {interval:?}, accumulated {:?}", self.accumulated);
    }

    /// Resumes a stopped stopwatch without clearing the accumulated time.
    /// Does nothing if already running.
    pub fn resume(&mut self) {
        if self.start_instant.is_some() {
            debug!("RESUME ignored, already running");
            return;
        }

        let now = self.now();
        debug!("RESUME at {now:?}, accumulated {:?}", self.accumulated);
        self.start_instant = Some(now);
    }

    /// Returns the total running time in whole milliseconds.
    ///
    /// While running this includes the interval in progress. The stopwatch
    /// itself is left untouched.
    pub fn read(&self) -> u64 {
        let millis = self.total().as_millis();
        trace!("READ {millis}ms");
        millis
    }

    /// Same as [`Stopwatch::read`], at full precision.
    pub fn elapsed(&self) -> Duration {
        self.total().into()
    }

    pub fn is_running(&self) -> bool {
        self.start_instant.is_some()
    }

    fn total(&self) -> Timespec {
        match self.start_instant {
            Some(start) => self.accumulated + self.now().elapsed_since(&start),
            None => self.accumulated,
        }
    }

    fn now(&self) -> Timespec {
        // The clock holds plain data, a poisoned lock is still consistent.
        self.clock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .now()
    }
}
