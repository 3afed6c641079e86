use chrono::{Local, NaiveTime};

/// Source of the local wall-clock time used to pick greetings.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveTime;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveTime);

impl FixedClock {
    /// Clock pinned to `hour:00`. Out of range hours clamp to midnight.
    pub fn at_hour(hour: u32) -> Self {
        Self(NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}
