//! Flat records and their mapping to typed tickets.

use crate::StoreError;
use indexmap::IndexMap;
use tb_core::priority::PriorityLevel;
use tb_core::ticket::{columns, Ticket, TicketStatus};

/// One CSV row: field name → value, in column order.
pub type Record = IndexMap<String, String>;

pub fn ticket_to_record(ticket: &Ticket) -> Record {
    [
        (columns::SUBMITTER, ticket.submitter.clone()),
        (columns::CATEGORY, ticket.category.clone()),
        (columns::PRIORITY, ticket.priority.to_string()),
        (columns::DESCRIPTION, ticket.description.clone()),
        (columns::CREATED_AT, ticket.formatted_timestamp()),
        (columns::STATUS, ticket.status.to_string()),
    ]
    .into_iter()
    .map(|(field, value)| (field.to_string(), value))
    .collect()
}

/// Every field is trimmed before use. Missing text columns read as empty,
/// a missing priority as the default level and a missing status as
/// `Pendiente`. The timestamp is required.
pub fn record_to_ticket(record: &Record) -> Result<Ticket, StoreError> {
    let field = |name| text(record, name);

    let priority = match field(columns::PRIORITY) {
        "" => PriorityLevel::default(),
        raw => raw
            .parse::<PriorityLevel>()
            .map_err(|e| StoreError::InvalidRecord(e.to_string()))?,
    };
    let status = match field(columns::STATUS) {
        "" => TicketStatus::default(),
        raw => raw
            .parse::<TicketStatus>()
            .map_err(|e| StoreError::InvalidRecord(e.to_string()))?,
    };
    let created_at = Ticket::parse_timestamp(field(columns::CREATED_AT)).map_err(|e| {
        StoreError::InvalidRecord(format!(
            "bad '{}' value '{}': {e}",
            columns::CREATED_AT,
            field(columns::CREATED_AT)
        ))
    })?;

    Ok(Ticket {
        submitter: field(columns::SUBMITTER).to_string(),
        category: field(columns::CATEGORY).to_string(),
        priority,
        description: field(columns::DESCRIPTION).to_string(),
        created_at,
        status,
    })
}

fn text<'a>(record: &'a Record, name: &str) -> &'a str {
    record.get(name).map(|v| v.trim()).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> Ticket {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(21, 5, 0)
            .unwrap();
        Ticket::at("Ana", "hay una fuga de agua", "agua", PriorityLevel::Medium, at)
    }

    #[test]
    fn record_uses_persisted_column_order() {
        let record = ticket_to_record(&sample());
        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, columns::ALL);
        assert_eq!(record[columns::PRIORITY], "Media");
        assert_eq!(record[columns::CREATED_AT], "2024-03-09 21:05:00");
        assert_eq!(record[columns::STATUS], "Pendiente");
    }

    #[test]
    fn ticket_survives_record_form() {
        let ticket = sample();
        assert_eq!(record_to_ticket(&ticket_to_record(&ticket)).unwrap(), ticket);
    }

    #[test]
    fn extra_and_missing_columns_are_tolerated() {
        let mut record = Record::new();
        record.insert("fecha".into(), "2024-01-01 08:00:00".into());
        record.insert("piso".into(), "3".into());
        let ticket = record_to_ticket(&record).unwrap();
        assert_eq!(ticket.submitter, "");
        assert_eq!(ticket.priority, PriorityLevel::Medium);
        assert_eq!(ticket.status, TicketStatus::Pending);
    }

    #[test]
    fn every_field_is_trimmed() {
        let mut record = ticket_to_record(&sample());
        for value in record.values_mut() {
            *value = format!("  {value} ");
        }
        assert_eq!(record_to_ticket(&record).unwrap(), sample());
    }

    #[test]
    fn hand_edited_status_is_kept() {
        let mut record = ticket_to_record(&sample());
        record.insert(columns::STATUS.into(), "Resuelto".into());
        let ticket = record_to_ticket(&record).unwrap();
        assert_eq!(ticket.status, TicketStatus::Resolved);
        assert_eq!(ticket_to_record(&ticket), record);

        record.insert(columns::STATUS.into(), "en proceso".into());
        let ticket = record_to_ticket(&record).unwrap();
        assert_eq!(ticket.status, TicketStatus::InProgress);
        assert_eq!(ticket_to_record(&ticket)[columns::STATUS], "En proceso");
    }

    #[test]
    fn bad_values_are_rejected() {
        let mut record = ticket_to_record(&sample());
        record.insert(columns::PRIORITY.into(), "Urgente".into());
        assert!(matches!(
            record_to_ticket(&record),
            Err(StoreError::InvalidRecord(_))
        ));

        let mut record = ticket_to_record(&sample());
        record.insert(columns::CREATED_AT.into(), "ayer".into());
        assert!(record_to_ticket(&record).is_err());

        let mut record = ticket_to_record(&sample());
        record.shift_remove(columns::CREATED_AT);
        assert!(record_to_ticket(&record).is_err());
    }
}
