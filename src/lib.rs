pub mod clock;
pub mod config;
pub mod errors;
#[cfg(feature = "mocks")]
pub mod fake_clock;
pub mod stopwatch;
pub mod timespec;

extern crate ctor;
extern crate log;
