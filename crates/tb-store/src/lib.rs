//! tb-store: flat CSV persistence for Ticketbox.
//!
//! - [`CsvTicketStore`]: whole-file load/save of string records.
//! - [`TicketBook`]: the ordered ticket list bound to its store.
//! - [`TicketReport`]: per-category and per-priority summary.

pub mod book;
pub mod record;
pub mod report;
pub mod store;

pub use book::TicketBook;
pub use record::{record_to_ticket, ticket_to_record, Record};
pub use report::TicketReport;
pub use store::CsvTicketStore;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}
