use thiserror::Error;

use crate::domain::{BookingPeriod, DateError, DurationError};

/// Why a reservation attempt was refused. The ledger is unchanged in every case.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReservationError {
    #[error("Invalid date: {0}")]
    InvalidDate(#[from] DateError),

    #[error("Invalid duration: {0}")]
    InvalidDuration(#[from] DurationError),

    #[error("This period is already reserved for {item} (booked {existing})")]
    OverlapConflict {
        item: String,
        existing: BookingPeriod,
    },
}

/// Tag of a [`ReservationError`], for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservationErrorKind {
    InvalidDate,
    InvalidDuration,
    OverlapConflict,
}

impl ReservationError {
    pub fn kind(&self) -> ReservationErrorKind {
        match self {
            ReservationError::InvalidDate(_) => ReservationErrorKind::InvalidDate,
            ReservationError::InvalidDuration(_) => ReservationErrorKind::InvalidDuration,
            ReservationError::OverlapConflict { .. } => ReservationErrorKind::OverlapConflict,
        }
    }
}
