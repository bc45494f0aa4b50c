use chrono::NaiveDate;
use tracing::{debug, info};

use crate::domain::{
    BookingPeriod, Days, DurationError, ItemMatching, Reservation, parse_date, parse_duration,
};

use super::ReservationError;

/// Settings that change how the ledger scopes overlap checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct LedgerOptions {
    pub item_matching: ItemMatching,
}

/// In-memory, insertion-ordered record of every reservation made during a session.
///
/// Invariant: no two reservations for the same item cover a common day.
/// Reservations for different items may overlap freely.
#[derive(Debug, Default)]
pub struct ReservationLedger {
    reservations: Vec<Reservation>,
    options: LedgerOptions,
}

/// Result of a successful reservation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationConfirmation {
    pub item: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration: Days,
}

impl From<&Reservation> for ReservationConfirmation {
    fn from(reservation: &Reservation) -> Self {
        Self {
            item: reservation.item.clone(),
            start_date: reservation.start_date,
            end_date: reservation.end_date,
            duration: reservation.duration,
        }
    }
}

/// Snapshot of the ledger contents, with an explicit empty case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationList<'a> {
    Empty,
    Entries(&'a [Reservation]),
}

impl<'a> ReservationList<'a> {
    pub fn entries(&self) -> &'a [Reservation] {
        match self {
            ReservationList::Empty => &[],
            ReservationList::Entries(entries) => entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ReservationList::Empty)
    }
}

impl ReservationLedger {
    /// Create an empty ledger with exact item matching.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: LedgerOptions) -> Self {
        Self {
            reservations: Vec::new(),
            options,
        }
    }

    // ========================
    // Mutations
    // ========================

    /// Validate raw user input and book `item` for `duration_text` days
    /// starting on `start_date_text`.
    ///
    /// The duration is checked before the date. `item` is expected to be
    /// validated by the caller already (see [`crate::domain::validate_item`]).
    pub fn attempt_reservation(
        &mut self,
        start_date_text: &str,
        duration_text: &str,
        item: &str,
    ) -> Result<ReservationConfirmation, ReservationError> {
        let result = self.parse_and_reserve(start_date_text, duration_text, item);
        if let Err(e) = &result {
            info!(item, error = %e, "reservation rejected");
        }
        result
    }

    fn parse_and_reserve(
        &mut self,
        start_date_text: &str,
        duration_text: &str,
        item: &str,
    ) -> Result<ReservationConfirmation, ReservationError> {
        let duration = parse_duration(duration_text)?;
        let start = parse_date(start_date_text)?;
        let period = BookingPeriod::from_duration(start, duration)
            .ok_or(DurationError::OutOfRange(i64::from(duration)))?;

        self.reserve(item, period).map(ReservationConfirmation::from)
    }

    /// Book `item` over an already-parsed period.
    pub fn reserve(
        &mut self,
        item: &str,
        period: BookingPeriod,
    ) -> Result<&Reservation, ReservationError> {
        if let Some(existing) = self.find_conflict(item, &period) {
            return Err(ReservationError::OverlapConflict {
                item: item.to_string(),
                existing: existing.period(),
            });
        }

        let reservation = Reservation::new(item, period);
        debug!(
            id = %reservation.id,
            item,
            start = %reservation.start_date,
            end = %reservation.end_date,
            "reservation recorded"
        );

        self.reservations.push(reservation);
        // Just pushed, so the vector is non-empty
        Ok(&self.reservations[self.reservations.len() - 1])
    }

    // ========================
    // Queries
    // ========================

    pub fn list_reservations(&self) -> ReservationList<'_> {
        if self.reservations.is_empty() {
            ReservationList::Empty
        } else {
            ReservationList::Entries(&self.reservations)
        }
    }

    /// First reservation of `item` sharing at least one day with `period`.
    pub fn find_conflict(&self, item: &str, period: &BookingPeriod) -> Option<&Reservation> {
        self.reservations
            .iter()
            .find(|r| r.conflicts_with(item, period, self.options.item_matching))
    }

    pub fn is_period_reserved(&self, item: &str, period: &BookingPeriod) -> bool {
        self.find_conflict(item, period).is_some()
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ReservationErrorKind;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = ReservationLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.list_reservations(), ReservationList::Empty);
        assert!(ledger.list_reservations().entries().is_empty());
    }

    #[test]
    fn test_attempt_reservation_confirms() {
        let mut ledger = ReservationLedger::new();
        let confirmation = ledger.attempt_reservation("2024-01-01", "3", "Car").unwrap();

        assert_eq!(confirmation.item, "Car");
        assert_eq!(confirmation.start_date, date("2024-01-01"));
        assert_eq!(confirmation.end_date, date("2024-01-03"));
        assert_eq!(confirmation.duration, 3);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_duration_is_checked_before_date() {
        let mut ledger = ReservationLedger::new();
        let err = ledger.attempt_reservation("not-a-date", "abc", "Car").unwrap_err();
        assert_eq!(err.kind(), ReservationErrorKind::InvalidDuration);
    }

    #[test]
    fn test_end_beyond_calendar_is_invalid_duration() {
        let mut ledger = ReservationLedger::new();
        let err = ledger
            .attempt_reservation("2024-01-01", "4000000000", "Car")
            .unwrap_err();
        assert_eq!(err.kind(), ReservationErrorKind::InvalidDuration);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_reserve_returns_stored_record() {
        let mut ledger = ReservationLedger::new();
        let period = BookingPeriod::from_duration(date("2024-06-01"), 7).unwrap();
        let id = ledger.reserve("Boat", period).unwrap().id;

        assert_eq!(ledger.reservations()[0].id, id);
        assert!(ledger.is_period_reserved("Boat", &BookingPeriod::single_day(date("2024-06-07"))));
        assert!(!ledger.is_period_reserved("Boat", &BookingPeriod::single_day(date("2024-06-08"))));
    }

    #[test]
    fn test_find_conflict_returns_first_overlap() {
        let mut ledger = ReservationLedger::new();
        ledger.attempt_reservation("2024-01-01", "2", "Car").unwrap();
        ledger.attempt_reservation("2024-01-05", "2", "Car").unwrap();

        let wide = BookingPeriod::new(date("2024-01-01"), date("2024-01-31")).unwrap();
        let conflict = ledger.find_conflict("Car", &wide).unwrap();
        assert_eq!(conflict.start_date, date("2024-01-01"));
    }

    #[test]
    fn test_overlap_error_names_item_and_existing_period() {
        let mut ledger = ReservationLedger::new();
        ledger.attempt_reservation("2024-01-01", "3", "Car").unwrap();
        let err = ledger.attempt_reservation("2024-01-02", "1", "Car").unwrap_err();

        assert_eq!(
            err,
            ReservationError::OverlapConflict {
                item: "Car".to_string(),
                existing: BookingPeriod::new(date("2024-01-01"), date("2024-01-03")).unwrap(),
            }
        );
        assert!(err.to_string().contains("Car"));
    }

    #[test]
    fn test_case_insensitive_matching() {
        let mut ledger = ReservationLedger::with_options(LedgerOptions {
            item_matching: ItemMatching::CaseInsensitive,
        });
        ledger.attempt_reservation("2024-01-01", "3", "Car").unwrap();

        let err = ledger.attempt_reservation("2024-01-02", "1", "CAR").unwrap_err();
        assert_eq!(err.kind(), ReservationErrorKind::OverlapConflict);
        assert_eq!(ledger.len(), 1);
    }
}
