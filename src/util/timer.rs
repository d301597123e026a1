use std::fmt::{Debug, Error, Formatter};
use std::ops::AddAssign;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug)]
pub struct TgTimer {
    instant: Instant,
}

/// Wall time of one or more timed steps.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct TgDuration {
    duration: Duration,
}

impl TgTimer {
    pub fn now() -> Self {
        Self { instant: Instant::now() }
    }

    pub fn elapsed(&self) -> TgDuration {
        TgDuration { duration: self.instant.elapsed() }
    }
}

impl TgDuration {
    pub fn to_millis_string(&self) -> String {
        const MICRO_PER_MILLI: u128 = 1_000;
        let micros = self.duration.as_micros();
        format!("{}.{:03} ms", micros / MICRO_PER_MILLI, micros % MICRO_PER_MILLI)
    }

    pub fn to_seconds_string(&self) -> String {
        format!("{}.{:06} s", self.duration.as_secs(), self.duration.subsec_micros())
    }
}

impl Debug for TgDuration {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{:?}", self.duration)
    }
}

impl AddAssign for TgDuration {
    fn add_assign(&mut self, rhs: Self) {
        self.duration += rhs.duration;
    }
}
