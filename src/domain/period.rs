use chrono::{Days as ChronoDays, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{Days, format_date};

/// An inclusive range of calendar days `[start, end]`.
/// A one-day booking has `start == end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl BookingPeriod {
    /// Returns `None` when `end` falls before `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Period covering `days` consecutive days from `start`, so
    /// `end = start + days - 1`. Returns `None` for zero days or when the
    /// end would fall outside the representable calendar.
    pub fn from_duration(start: NaiveDate, days: Days) -> Option<Self> {
        let extra = days.checked_sub(1)?;
        let end = start.checked_add_days(ChronoDays::new(u64::from(extra)))?;
        Some(Self { start, end })
    }

    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Two periods overlap when they share at least one day.
    /// Touching periods (one ends the day the other starts) overlap.
    pub fn overlaps(&self, other: &BookingPeriod) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days covered, counting both ends.
    pub fn num_days(&self) -> Days {
        // The whole chrono calendar spans fewer days than Days::MAX
        (self.end - self.start).num_days() as Days + 1
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        let end = self.end;
        (0..=(end - start).num_days()).map(move |i| start + chrono::Duration::days(i))
    }
}

impl std::fmt::Display for BookingPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", format_date(self.start), format_date(self.end))
    }
}
