//! Ticket book — the in-memory ticket list bound to its store.

use crate::record::{record_to_ticket, ticket_to_record, Record};
use crate::report::TicketReport;
use crate::store::CsvTicketStore;
use crate::StoreError;
use tb_core::ticket::Ticket;

/// Memory and disk hold the same rows after every successful call.
#[derive(Debug)]
pub struct TicketBook {
    store: CsvTicketStore,
    records: Vec<Record>,
}

impl TicketBook {
    pub fn open(store: CsvTicketStore) -> Result<Self, StoreError> {
        let records = store.load_all()?;
        tracing::info!(
            "Opened ticket book at {} ({} tickets)",
            store.path().display(),
            records.len()
        );
        Ok(Self { store, records })
    }

    /// Append `ticket` and rewrite the store. On a failed save the append
    /// is undone and the error returned.
    pub fn submit(&mut self, ticket: &Ticket) -> Result<(), StoreError> {
        self.records.push(ticket_to_record(ticket));
        if let Err(e) = self.store.save_all(&self.records) {
            self.records.pop();
            tracing::warn!("ticket from '{}' not saved: {e}", ticket.submitter);
            return Err(e);
        }
        Ok(())
    }

    /// Rows as stored, including columns this version does not know.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn tickets(&self) -> Result<Vec<Ticket>, StoreError> {
        self.records.iter().map(record_to_ticket).collect()
    }

    pub fn report(&self) -> Option<TicketReport> {
        TicketReport::from_records(&self.records)
    }

    pub fn store(&self) -> &CsvTicketStore {
        &self.store
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;
    use tb_core::priority::PriorityLevel;
    use tempfile::TempDir;

    fn ticket(name: &str, category: &str, priority: PriorityLevel) -> Ticket {
        let at = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        Ticket::at(name, "descripción", category, priority, at)
    }

    #[test]
    fn submit_appends_and_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tickets.csv");

        let mut book = TicketBook::open(CsvTicketStore::new(&path)).unwrap();
        assert!(book.is_empty());
        book.submit(&ticket("Ana", "agua", PriorityLevel::Medium)).unwrap();
        book.submit(&ticket("Luis", "fuego", PriorityLevel::High)).unwrap();
        assert_eq!(book.len(), 2);

        let reopened = TicketBook::open(CsvTicketStore::new(&path)).unwrap();
        assert_eq!(reopened.records(), book.records());
        let tickets = reopened.tickets().unwrap();
        assert_eq!(tickets[1].submitter, "Luis");
        assert_eq!(tickets[1].priority, PriorityLevel::High);
    }

    #[test]
    fn failed_save_rolls_back_the_append() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tickets.csv");
        let mut book = TicketBook::open(CsvTicketStore::new(&path)).unwrap();

        // A directory at the target path makes the final rename fail.
        fs::create_dir(&path).unwrap();
        let err = book
            .submit(&ticket("Ana", "agua", PriorityLevel::Medium))
            .unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert!(book.is_empty());
    }

    #[test]
    fn legacy_columns_are_kept_on_append() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tickets.csv");
        fs::write(&path, "nombre,piso\nEva,2\n").unwrap();

        let mut book = TicketBook::open(CsvTicketStore::new(&path)).unwrap();
        book.submit(&ticket("Ana", "agua", PriorityLevel::Medium)).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text.lines().next(),
            Some("nombre,piso,categoria,prioridad,descripcion,fecha,estado")
        );
        let reopened = TicketBook::open(CsvTicketStore::new(&path)).unwrap();
        assert_eq!(reopened.records()[0]["piso"], "2");
        assert_eq!(reopened.records()[1]["piso"], "");
    }

    #[test]
    fn report_reflects_submissions() {
        let dir = TempDir::new().unwrap();
        let mut book = TicketBook::open(CsvTicketStore::new(dir.path().join("t.csv"))).unwrap();
        assert!(book.report().is_none());
        book.submit(&ticket("Ana", "agua", PriorityLevel::Medium)).unwrap();
        book.submit(&ticket("Eva", "agua", PriorityLevel::Medium)).unwrap();
        let report = book.report().unwrap();
        assert_eq!(report.total(), 2);
        assert_eq!(report.by_category()["agua"], 2);
    }
}
