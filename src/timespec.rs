use log::warn;
use std::ops::Add;
use std::time::Duration;

pub const NANOS_PER_SEC: u32 = 1_000_000_000;
pub const NANOS_PER_MILLI: u32 = 1_000_000;
pub const MILLIS_PER_SEC: u64 = 1_000;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A duration split into whole seconds and a sub-second fraction.
///
/// The fraction is always kept in `[0, NANOS_PER_SEC)`: every operation
/// resolves its carry or borrow against `secs` before returning. Field order
/// matters, the derived ordering compares `secs` first.
pub struct Timespec {
    secs: u64,
    nanos: u32,
}

impl Timespec {
    pub const ZERO: Timespec = Timespec { secs: 0, nanos: 0 };

    /// Creates a normalized `Timespec`, folding whole seconds out of `nanos`.
    pub fn new(secs: u64, nanos: u32) -> Self {
        Timespec {
            secs: secs.saturating_add(u64::from(nanos / NANOS_PER_SEC)),
            nanos: nanos % NANOS_PER_SEC,
        }
    }

    pub fn from_millis(millis: u64) -> Self {
        Timespec {
            secs: millis / MILLIS_PER_SEC,
            nanos: (millis % MILLIS_PER_SEC) as u32 * NANOS_PER_MILLI,
        }
    }

    pub fn secs(&self) -> u64 {
        self.secs
    }

    pub fn nanos(&self) -> u32 {
        self.nanos
    }

    /// Returns `self - earlier`.
    ///
    /// Seconds and fractions are subtracted separately. When the fraction
    /// difference would be negative, one second is borrowed from the seconds
    /// difference. An `earlier` that lies after `self` yields `ZERO`.
    pub fn elapsed_since(&self, earlier: &Timespec) -> Timespec {
        if self < earlier {
            warn!("Clock went backward: {earlier:?} -> {self:?}");
            return Timespec::ZERO;
        }

        let mut secs = self.secs - earlier.secs;
        let nanos = if self.nanos < earlier.nanos {
            // borrow second
            secs -= 1;
            self.nanos + NANOS_PER_SEC - earlier.nanos
        } else {
            self.nanos - earlier.nanos
        };

        Timespec { secs, nanos }
    }

    /// Whole milliseconds, truncated.
    pub fn as_millis(&self) -> u64 {
        self.secs
            .saturating_mul(MILLIS_PER_SEC)
            .saturating_add(u64::from(self.nanos / NANOS_PER_MILLI))
    }
}

impl Add for Timespec {
    type Output = Timespec;

    fn add(self, rhs: Timespec) -> Timespec {
        let mut secs = self.secs.saturating_add(rhs.secs);
        let mut nanos = self.nanos + rhs.nanos;
        if nanos >= NANOS_PER_SEC {
            // carry second
            nanos -= NANOS_PER_SEC;
            secs = secs.saturating_add(1);
        }

        Timespec { secs, nanos }
    }
}

impl From<Duration> for Timespec {
    fn from(value: Duration) -> Self {
        Timespec {
            secs: value.as_secs(),
            nanos: value.subsec_nanos(),
        }
    }
}

impl From<Timespec> for Duration {
    fn from(value: Timespec) -> Self {
        Duration::new(value.secs, value.nanos)
    }
}
