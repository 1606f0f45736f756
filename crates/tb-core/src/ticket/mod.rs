//! Ticket types — one incident report as submitted by a resident.

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::priority::PriorityLevel;
use crate::CoreError;

/// Timestamp layout used in the persisted store.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Persisted column names, in canonical order.
pub mod columns {
    pub const SUBMITTER: &str = "nombre";
    pub const CATEGORY: &str = "categoria";
    pub const PRIORITY: &str = "prioridad";
    pub const DESCRIPTION: &str = "descripcion";
    pub const CREATED_AT: &str = "fecha";
    pub const STATUS: &str = "estado";

    pub const ALL: [&str; 6] = [SUBMITTER, CATEGORY, PRIORITY, DESCRIPTION, CREATED_AT, STATUS];
}

// ---------------------------------------------------------------------------
// Ticket
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Resident who reported the incident.
    pub submitter: String,

    /// Inferred at creation; never edited afterwards.
    pub category: String,

    /// Inferred at creation; never edited afterwards.
    pub priority: PriorityLevel,

    /// Free-text description as typed.
    pub description: String,

    /// Local wall-clock time of submission.
    pub created_at: NaiveDateTime,

    pub status: TicketStatus,
}

impl Ticket {
    /// New ticket stamped with the current local time, status `Pending`.
    pub fn new(
        submitter: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        priority: PriorityLevel,
    ) -> Self {
        Self::at(
            submitter,
            description,
            category,
            priority,
            Local::now().naive_local(),
        )
    }

    pub fn at(
        submitter: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        priority: PriorityLevel,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            submitter: submitter.into(),
            category: category.into(),
            priority,
            description: description.into(),
            // Sub-second precision is not persisted.
            created_at: created_at.with_nanosecond(0).unwrap_or(created_at),
            status: TicketStatus::Pending,
        }
    }

    pub fn formatted_timestamp(&self) -> String {
        self.created_at.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
        NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT)
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// New tickets are always `Pending`. The other states are never produced
/// here; they are recognized so a hand-edited store loads and re-saves
/// unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketStatus {
    #[default]
    #[serde(rename = "Pendiente")]
    Pending,
    #[serde(rename = "En proceso")]
    InProgress,
    #[serde(rename = "Resuelto")]
    Resolved,
}

impl TicketStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Pending => "Pendiente",
            TicketStatus::InProgress => "En proceso",
            TicketStatus::Resolved => "Resuelto",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TicketStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        [Self::Pending, Self::InProgress, Self::Resolved]
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownStatus(s.to_string()))
    }
}
