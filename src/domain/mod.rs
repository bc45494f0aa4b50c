mod calendar;
mod item;
mod period;
mod reservation;

pub use calendar::*;
pub use item::*;
pub use period::*;
pub use reservation::*;
