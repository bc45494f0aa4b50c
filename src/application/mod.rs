// Application layer - use cases on top of the domain types.
// The ledger is owned by its caller and lives for one session.

pub mod error;
pub mod ledger;

pub use error::*;
pub use ledger::*;
