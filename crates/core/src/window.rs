//! Time windows for ledger aggregation.

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Half-open interval `[start, end)` over UTC instants.
///
/// A window whose `end` is not after its `start` is empty.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Closed interval `[start, end_inclusive]`, expressed as a half-open window
    /// ending one nanosecond (the clock resolution) after `end_inclusive`.
    pub fn through(start: DateTime<Utc>, end_inclusive: DateTime<Utc>) -> Self {
        let end = end_inclusive
            .checked_add_signed(Duration::nanoseconds(1))
            .unwrap_or(end_inclusive);
        Self { start, end }
    }

    /// "Today" as seen from `tz`: `[local_midnight(now), now]`.
    pub fn today<Tz: TimeZone>(now: DateTime<Utc>, tz: &Tz) -> Self {
        Self::through(local_midnight(now, tz), now)
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Truncate `now` to 00:00:00.000 of its calendar day in `tz`.
///
/// Where a DST transition removes local midnight, the first instant that does
/// exist on that day is used. An ambiguous midnight resolves to the earlier
/// instant.
pub fn local_midnight<Tz: TimeZone>(now: DateTime<Utc>, tz: &Tz) -> DateTime<Utc> {
    let day = now.with_timezone(tz).date_naive();
    let mut candidate = day.and_time(NaiveTime::MIN);

    while candidate.date() == day {
        if let Some(start) = tz.from_local_datetime(&candidate).earliest() {
            return start.with_timezone(&Utc);
        }
        candidate += Duration::minutes(1);
    }

    now
}
