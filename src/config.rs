use crate::errors::StopwatchError;
use log::LevelFilter;
use std::time::Duration;

const MAX_POSITIONAL_ARGS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Settings of the demonstration program.
///
/// Parsed from `[interval_secs] [loop_count] [-v|--verbose]`, where missing
/// positional arguments keep their defaults.
pub struct DemoConfig {
    pub interval: Duration,
    pub loop_count: u32,
    pub log_level: LevelFilter,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            interval: DemoConfig::DEFAULT_INTERVAL,
            loop_count: DemoConfig::DEFAULT_LOOP_COUNT,
            log_level: LevelFilter::Info,
        }
    }
}

impl DemoConfig {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(3);
    pub const DEFAULT_LOOP_COUNT: u32 = 25;

    /// Parses the program arguments, without the program name.
    pub fn from_args<I>(args: I) -> Result<Self, StopwatchError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = DemoConfig::default();
        let mut positional = Vec::new();

        for arg in args {
            if arg == "-v" || arg == "--verbose" {
                config.log_level = LevelFilter::Debug;
            } else if arg.starts_with('-') {
                return Err(StopwatchError::UnknownFlag(arg));
            } else {
                positional.push(arg);
            }
        }

        if positional.len() > MAX_POSITIONAL_ARGS {
            return Err(StopwatchError::TooManyArguments(positional.len()));
        }

        let mut positional = positional.into_iter();
        if let Some(interval) = positional.next() {
            let secs: u64 = interval.parse().map_err(StopwatchError::BadInterval)?;
            if secs == 0 {
                return Err(StopwatchError::ZeroInterval);
            }
            config.interval = Duration::from_secs(secs);
        }
        if let Some(loop_count) = positional.next() {
            config.loop_count = loop_count.parse().map_err(StopwatchError::BadLoopCount)?;
        }

        Ok(config)
    }
}
