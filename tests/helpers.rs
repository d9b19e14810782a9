use std::sync::{Arc, Mutex};
use stopwatch::fake_clock::Clock;
use stopwatch::stopwatch::{Stopwatch, StopwatchBuilder};

pub type ClockGuard = Arc<Mutex<Clock>>;

pub fn stopwatch_with_clock(clock: Clock) -> (Stopwatch, ClockGuard) {
    let fake_clock = Arc::new(Mutex::new(clock));
    let watch = StopwatchBuilder::new().clock(fake_clock.clone()).build();

    (watch, fake_clock)
}

pub fn new_stopwatch() -> (Stopwatch, ClockGuard) {
    stopwatch_with_clock(Clock::new())
}

pub fn advance(clock: &ClockGuard, millisecs: u64) {
    clock.lock().unwrap().add_millisecs(millisecs);
}
