// src/core/clock.rs
use chrono::{DateTime, Local};

/// Source of "now". Injected everywhere time is read so tests can pin the
/// clock instead of sampling the real one.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// The zero-padded 24-hour minute stamp the matcher compares against.
pub fn minute_stamp(clock: &dyn Clock) -> String {
    clock.now().format("%H:%M").to_string()
}

#[cfg(test)]
pub(crate) use testing::FixedClock;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minute_stamp_is_zero_padded() {
        assert_eq!(minute_stamp(&FixedClock::at(9, 5, 0)), "09:05");
        assert_eq!(minute_stamp(&FixedClock::at(14, 5, 59)), "14:05");
    }
}
