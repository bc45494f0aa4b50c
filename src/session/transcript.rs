use crate::application::{ReservationConfirmation, ReservationError, ReservationList};
use crate::domain::{Reservation, format_date};

pub const WELCOME: &str = "Welcome to the reservation system!";
pub const GOODBYE: &str = "Goodbye!";

pub const ITEM_PROMPT: &str = "Enter the item to rent (e.g. Car, House): ";
pub const CHOICE_PROMPT: &str = "Enter your choice (1-3): ";
pub const START_DATE_PROMPT: &str = "Enter the start date (YYYY-MM-DD): ";
pub const DURATION_PROMPT: &str = "Enter the duration in days (minimum 1): ";
pub const ANOTHER_PROMPT: &str = "Would you like to make another reservation? (y/n): ";

pub const INVALID_CHOICE: &str = "Invalid choice, please enter 1, 2 or 3";
pub const INVALID_YES_NO: &str = "Please enter 'y' or 'n'";
pub const NO_RESERVATIONS: &str = "No reservations";

pub fn item_menu(item: &str) -> String {
    format!(
        "\n=== Reservation System for {} ===\n\
         1. Make a reservation\n\
         2. View all reservations\n\
         3. Quit",
        item
    )
}

pub fn options_menu() -> &'static str {
    "\n=== Options ===\n\
     1. Make a new reservation\n\
     2. View reservations\n\
     3. Quit the program"
}

pub fn confirmation(confirmation: &ReservationConfirmation) -> String {
    format!(
        "Reservation confirmed for {} from {} for {} day(s)",
        confirmation.item,
        format_date(confirmation.start_date),
        confirmation.duration
    )
}

pub fn error(error: &dyn std::fmt::Display) -> String {
    format!("Error: {}", error)
}

pub fn reservation_outcome(outcome: &Result<ReservationConfirmation, ReservationError>) -> String {
    match outcome {
        Ok(c) => confirmation(c),
        Err(e) => error(e),
    }
}

/// One line per reservation, numbered from 1 in booking order.
pub fn listing(list: ReservationList<'_>) -> String {
    match list {
        ReservationList::Empty => NO_RESERVATIONS.to_string(),
        ReservationList::Entries(entries) => entries
            .iter()
            .enumerate()
            .map(|(i, r)| listing_line(i + 1, r))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn listing_line(number: usize, reservation: &Reservation) -> String {
    format!(
        "Reservation {}: {} - from {} to {} ({} day(s))",
        number,
        reservation.item,
        format_date(reservation.start_date),
        format_date(reservation.end_date),
        reservation.duration
    )
}
