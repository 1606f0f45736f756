//! Summary of stored tickets by category and by priority.

use crate::record::Record;
use indexmap::IndexMap;
use std::fmt;
use tb_core::ticket::columns;

/// Counts keep the order in which each value first appears.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketReport {
    total: usize,
    by_category: IndexMap<String, usize>,
    by_priority: IndexMap<String, usize>,
}

impl TicketReport {
    /// `None` when there is nothing to report.
    pub fn from_records(records: &[Record]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let mut by_category = IndexMap::new();
        let mut by_priority = IndexMap::new();
        for record in records {
            let category = record.get(columns::CATEGORY).cloned().unwrap_or_default();
            let priority = record.get(columns::PRIORITY).cloned().unwrap_or_default();
            *by_category.entry(category).or_insert(0) += 1;
            *by_priority.entry(priority).or_insert(0) += 1;
        }

        Some(Self {
            total: records.len(),
            by_category,
            by_priority,
        })
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn by_category(&self) -> &IndexMap<String, usize> {
        &self.by_category
    }

    pub fn by_priority(&self) -> &IndexMap<String, usize> {
        &self.by_priority
    }
}

impl fmt::Display for TicketReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total de tickets: {}", self.total)?;
        writeln!(f)?;
        writeln!(f, "Tickets por categoría:")?;
        for (category, count) in &self.by_category {
            writeln!(f, "- {category}: {count}")?;
        }
        writeln!(f)?;
        writeln!(f, "Tickets por prioridad:")?;
        for (priority, count) in &self.by_priority {
            writeln!(f, "- {priority}: {count}")?;
        }
        Ok(())
    }
}
