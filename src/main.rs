//! # Stopwatch sample
//!
//! Runs a stopwatch through start, stop, resume and restart cycles, sleeping
//! between reads and printing the expected time next to the reported one.

use env_logger::Builder;
use log::{info, LevelFilter};
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;
use stopwatch::config::DemoConfig;
use stopwatch::stopwatch::Stopwatch;

const LOOP_SLEEP: Duration = Duration::from_secs(1);

fn log_init(level: LevelFilter) {
    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            let filename = Path::new(record.file().unwrap_or_default())
                .file_name()
                .unwrap_or_default()
                .to_string_lossy();
            writeln!(
                buf,
                "[{:4}] [{:13}] [l.{:03}]: {}",
                record.level(),
                filename,
                record.line().unwrap_or_default(),
                record.args()
            )
        })
        .init();
}

fn report(expected: u128, watch: &Stopwatch) {
    println!("\tExpected: {}\tReported: {}", expected, watch.read());
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let config = match DemoConfig::from_args(args.iter().skip(1).cloned()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("[Usage]: {} [interval_secs] [loop_count] [-v]", args[0]);
            return ExitCode::FAILURE;
        }
    };

    log_init(config.log_level);
    info!("Running with {config:?}");

    let interval = config.interval;
    let step = interval.as_millis();
    let mut watch = Stopwatch::new();
    let mut total_sleep;

    println!("Measuring Sleep Time");

    // verify free running
    watch.start();
    thread::sleep(interval);
    total_sleep = step;
    report(total_sleep, &watch);
    thread::sleep(interval);
    total_sleep += step;
    report(total_sleep, &watch);

    // stop and verify no change
    watch.stop();
    println!("Stopwatch Timer Stopped");
    thread::sleep(interval);
    report(total_sleep, &watch);

    // resume and verify continuation
    watch.resume();
    println!("Stopwatch Timer Resumed");
    thread::sleep(interval);
    total_sleep += step;
    report(total_sleep, &watch);

    // verify restart
    watch.start();
    println!("Stopwatch Timer Restarted");
    thread::sleep(interval);
    total_sleep = step;
    report(total_sleep, &watch);

    // drifts ahead of expected, each iteration costs more than the sleep
    println!(
        "One Second Sleep Inside Loop ({} seconds)",
        config.loop_count
    );
    for _ in 0..config.loop_count {
        thread::sleep(LOOP_SLEEP);
        total_sleep += LOOP_SLEEP.as_millis();
        report(total_sleep, &watch);
    }

    watch.stop();
    info!("Done, measured {:?}", watch.elapsed());

    ExitCode::SUCCESS
}
