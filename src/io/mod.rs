pub mod export;

pub use export::{ExportFormat, Exporter, LedgerSnapshot};
