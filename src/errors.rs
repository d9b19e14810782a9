use std::error::Error;
use std::fmt;
use std::num::ParseIntError;

#[derive(Debug)]
pub enum StopwatchError {
    BadInterval(ParseIntError),
    BadLoopCount(ParseIntError),
    ZeroInterval,
    UnknownFlag(String),
    TooManyArguments(usize),
}

impl fmt::Display for StopwatchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StopwatchError::BadInterval(e) => write!(f, "Error: Bad interval : {}", e),
            StopwatchError::BadLoopCount(e) => write!(f, "Error: Bad loop count : {}", e),
            StopwatchError::ZeroInterval => {
                write!(f, "Error: Interval must be at least one second")
            }
            StopwatchError::UnknownFlag(flag) => write!(f, "Error: Unknown flag : {}", flag),
            StopwatchError::TooManyArguments(count) => {
                write!(f, "Error: Too many arguments : {}", count)
            }
        }
    }
}

impl Error for StopwatchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StopwatchError::BadInterval(e) | StopwatchError::BadLoopCount(e) => Some(e),
            _ => None,
        }
    }
}
