//! tb-core: Shared types for Ticketbox
//!
//! This crate has zero internal crate dependencies and defines the
//! canonical types used across all other tb-* crates: the keyword
//! vocabulary, the priority table, the ticket record and the classifier
//! configuration that bundles them.

pub mod config;
pub mod priority;
pub mod ticket;
pub mod vocabulary;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid vocabulary: {0}")]
    InvalidVocabulary(String),
    #[error("category has no priority: {0}")]
    MissingPriority(String),
    #[error("unknown priority level: {0}")]
    UnknownPriority(String),
    #[error("unknown ticket status: {0}")]
    UnknownStatus(String),
    #[error("configuration error: {0}")]
    Config(String),
}

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::config::ClassifierConfig;
    pub use crate::priority::{PriorityLevel, PriorityTable};
    pub use crate::ticket::{Ticket, TicketStatus};
    pub use crate::vocabulary::{CategoryKeywords, Vocabulary, FALLBACK_CATEGORY};
}
