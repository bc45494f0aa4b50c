use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{BookingPeriod, Days, ItemMatching};

pub type ReservationId = Uuid;

/// A booking of a named item over an inclusive range of days.
/// Reservations are never edited once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    /// Label of the booked item (e.g. "Car", "House")
    pub item: String,
    pub start_date: NaiveDate,
    /// Last booked day, inclusive
    pub end_date: NaiveDate,
    /// Always equals the number of days in `start_date..=end_date`
    pub duration: Days,
    /// When the reservation was recorded
    pub booked_at: DateTime<Utc>,
}

impl Reservation {
    pub fn new(item: impl Into<String>, period: BookingPeriod) -> Self {
        Self {
            id: Uuid::new_v4(),
            item: item.into(),
            start_date: period.start,
            end_date: period.end,
            duration: period.num_days(),
            booked_at: Utc::now(),
        }
    }

    pub fn period(&self) -> BookingPeriod {
        BookingPeriod {
            start: self.start_date,
            end: self.end_date,
        }
    }

    /// True if this reservation books `item` on any day of `period`.
    pub fn conflicts_with(
        &self,
        item: &str,
        period: &BookingPeriod,
        matching: ItemMatching,
    ) -> bool {
        matching.matches(&self.item, item) && self.period().overlaps(period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(start: &str, days: Days) -> BookingPeriod {
        let start = NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap();
        BookingPeriod::from_duration(start, days).unwrap()
    }

    #[test]
    fn test_new_derives_end_and_duration() {
        let reservation = Reservation::new("Car", period("2024-01-01", 3));
        assert_eq!(reservation.item, "Car");
        assert_eq!(reservation.start_date.to_string(), "2024-01-01");
        assert_eq!(reservation.end_date.to_string(), "2024-01-03");
        assert_eq!(reservation.duration, 3);
        assert_eq!(reservation.period(), period("2024-01-01", 3));
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Reservation::new("Car", period("2024-01-01", 1));
        let b = Reservation::new("Car", period("2024-01-01", 1));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_conflicts_with_same_item_only() {
        let reservation = Reservation::new("Car", period("2024-01-01", 3));

        assert!(reservation.conflicts_with("Car", &period("2024-01-03", 2), ItemMatching::Exact));
        assert!(!reservation.conflicts_with("Car", &period("2024-01-04", 2), ItemMatching::Exact));
        assert!(!reservation.conflicts_with("House", &period("2024-01-01", 3), ItemMatching::Exact));
    }

    #[test]
    fn test_conflicts_with_respects_matching() {
        let reservation = Reservation::new("Car", period("2024-01-01", 3));
        let same_days = period("2024-01-02", 1);

        assert!(!reservation.conflicts_with("car", &same_days, ItemMatching::Exact));
        assert!(reservation.conflicts_with("car", &same_days, ItemMatching::CaseInsensitive));
    }

    #[test]
    fn test_serializes_dates_as_iso() {
        let reservation = Reservation::new("Car", period("2024-01-01", 3));
        let json = serde_json::to_value(&reservation).unwrap();
        assert_eq!(json["start_date"], "2024-01-01");
        assert_eq!(json["end_date"], "2024-01-03");
        assert_eq!(json["duration"], 3);
    }
}
