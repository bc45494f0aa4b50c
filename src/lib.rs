pub mod application;
pub mod cli;
pub mod domain;
pub mod io;
pub mod logger;
pub mod session;

pub use application::{ReservationError, ReservationLedger};
pub use domain::*;
