use crate::timespec::{Timespec, NANOS_PER_SEC};

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Clock {
    current: Timespec,
}

impl Clock {
    pub fn new() -> Self {
        Clock {
            ..Default::default()
        }
    }

    pub fn at(secs: u64, nanos: u32) -> Self {
        Clock {
            current: Timespec::new(secs, nanos),
        }
    }

    pub fn add_millisecs(&mut self, value: u64) {
        self.current = self.current + Timespec::from_millis(value);
    }

    pub fn add_nanos(&mut self, value: u64) {
        let step = Timespec::new(
            value / u64::from(NANOS_PER_SEC),
            (value % u64::from(NANOS_PER_SEC)) as u32,
        );
        self.current = self.current + step;
    }

    pub fn set(&mut self, secs: u64, nanos: u32) {
        self.current = Timespec::new(secs, nanos);
    }

    pub fn now(&self) -> Timespec {
        self.current
    }
}
