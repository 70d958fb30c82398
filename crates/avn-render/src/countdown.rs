//! Time remaining until an event starts.

use chrono::NaiveDateTime;
use serde::Serialize;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_DAY: u64 = 86_400;

/// Whole days, hours, minutes and seconds until a target time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    /// Whole days remaining.
    pub days: u64,
    /// Hours past the whole days (0--23).
    pub hours: u64,
    /// Minutes past the whole hours (0--59).
    pub minutes: u64,
    /// Seconds past the whole minutes (0--59).
    pub seconds: u64,
    /// The target time has passed; all parts are zero.
    pub started: bool,
}

impl Countdown {
    /// Break down the time from `now` until `target`.
    pub fn between(target: NaiveDateTime, now: NaiveDateTime) -> Self {
        let remaining = target.signed_duration_since(now).num_seconds();
        let Ok(total) = u64::try_from(remaining) else {
            return Self {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 0,
                started: true,
            };
        };
        Self {
            days: total / SECONDS_PER_DAY,
            hours: (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
            started: false,
        }
    }

    /// Days, hours, minutes and seconds as zero-padded two-digit labels.
    pub fn padded(&self) -> [String; 4] {
        [
            format!("{:02}", self.days),
            format!("{:02}", self.hours),
            format!("{:02}", self.minutes),
            format!("{:02}", self.seconds),
        ]
    }
}
