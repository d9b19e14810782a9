mod helpers;

use helpers::*;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use stopwatch::fake_clock::Clock;
use stopwatch::stopwatch::StopwatchBuilder;

#[test]
fn stopped_periods_are_not_counted() {
    let (mut watch, clock) = new_stopwatch();

    watch.start();
    advance(&clock, 3000);
    watch.stop();
    advance(&clock, 60_000);
    watch.resume();
    advance(&clock, 3000);

    assert_eq!(watch.read(), 6000);
}

#[test]
fn sample_program_sequence_reports_expected_totals() {
    let (mut watch, clock) = new_stopwatch();

    watch.start();
    advance(&clock, 3000);
    let free_running1 = watch.read();
    advance(&clock, 3000);
    let free_running2 = watch.read();

    watch.stop();
    advance(&clock, 3000);
    let stopped = watch.read();

    watch.resume();
    advance(&clock, 3000);
    let resumed = watch.read();

    watch.start();
    advance(&clock, 3000);
    let restarted = watch.read();

    let mut looped = Vec::new();
    for _ in 0..25 {
        advance(&clock, 1000);
        looped.push(watch.read());
    }

    assert_eq!(free_running1, 3000);
    assert_eq!(free_running2, 6000);
    assert_eq!(stopped, 6000);
    assert_eq!(resumed, 9000);
    assert_eq!(restarted, 3000);
    assert_eq!(looped.first(), Some(&4000));
    assert_eq!(looped.last(), Some(&28000));
}

#[test]
fn stop_borrows_a_second_when_the_start_fraction_is_larger() {
    // start at x.900, stop at (x+1).100
    let (mut watch, clock) = stopwatch_with_clock(Clock::at(10, 900_000_000));

    watch.start();
    clock.lock().unwrap().set(11, 100_000_000);
    watch.stop();

    assert_eq!(watch.read(), 200);
    assert_eq!(watch.elapsed(), Duration::from_millis(200));
}

#[test]
fn read_borrows_a_second_when_the_start_fraction_is_larger() {
    let (mut watch, clock) = stopwatch_with_clock(Clock::at(10, 900_000_000));

    watch.start();
    clock.lock().unwrap().set(11, 100_000_000);

    assert_eq!(watch.read(), 200);
}

#[test]
fn accumulated_fractions_carry_into_seconds() {
    let (mut watch, clock) = stopwatch_with_clock(Clock::at(0, 300_000_000));

    watch.start();
    advance(&clock, 600);
    watch.stop();
    watch.resume();
    advance(&clock, 600);
    watch.stop();

    assert_eq!(watch.read(), 1200);
    assert_eq!(watch.elapsed(), Duration::from_millis(1200));
}

#[test]
fn read_truncates_sub_millisecond_remainders() {
    let (mut watch, clock) = new_stopwatch();

    watch.start();
    clock.lock().unwrap().add_nanos(999_999);
    assert_eq!(watch.read(), 0);

    clock.lock().unwrap().add_nanos(1);
    assert_eq!(watch.read(), 1);
}

#[test]
fn many_short_intervals_add_up_exactly() {
    let (mut watch, clock) = new_stopwatch();

    watch.start();
    watch.stop();
    for _ in 0..1000 {
        watch.resume();
        clock.lock().unwrap().add_nanos(1_000_001);
        watch.stop();
        advance(&clock, 5);
    }

    assert_eq!(watch.elapsed(), Duration::from_nanos(1_000_001_000));
    assert_eq!(watch.read(), 1000);
}

#[test]
fn clock_moving_backward_does_not_reduce_the_total() {
    let (mut watch, clock) = stopwatch_with_clock(Clock::at(20, 0));

    watch.start();
    advance(&clock, 500);
    watch.stop();
    watch.resume();
    clock.lock().unwrap().set(5, 0);

    assert_eq!(watch.read(), 500);

    watch.stop();
    assert_eq!(watch.read(), 500);
}

#[test]
fn stopwatches_sharing_a_clock_measure_independently() {
    let clock = Arc::new(Mutex::new(Clock::new()));
    let mut first = StopwatchBuilder::new().clock(clock.clone()).build();
    let mut second = StopwatchBuilder::new().clock(clock.clone()).build();

    first.start();
    advance(&clock, 100);
    second.start();
    advance(&clock, 100);
    first.stop();
    advance(&clock, 100);

    assert_eq!(first.read(), 200);
    assert_eq!(second.read(), 200);
}
