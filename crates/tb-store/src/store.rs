//! CSV store — the whole ticket list as one flat file.
//!
//! The header is the union of every record's field names in first-seen
//! order. Rows written before a column existed load with that field empty.

use crate::record::Record;
use crate::StoreError;
use csv::{ReaderBuilder, Writer};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Clone)]
pub struct CsvTicketStore {
    path: PathBuf,
}

impl CsvTicketStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All rows in file order. A missing file is an empty store.
    ///
    /// Short rows are padded with empty fields. A row longer than the
    /// header, or a repeated column name, is rejected since re-saving could
    /// not reproduce it.
    pub fn load_all(&self) -> Result<Vec<Record>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("no store at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_reader(BufReader::new(file));
        let headers = reader.headers()?.clone();
        let mut seen = HashSet::new();
        if let Some(dup) = headers.iter().find(|field| !seen.insert(*field)) {
            return Err(StoreError::InvalidRecord(format!(
                "duplicate column '{dup}' in {}",
                self.path.display()
            )));
        }

        let mut records = Vec::new();
        for (line, row) in reader.records().enumerate() {
            let row = row?;
            if row.len() > headers.len() {
                return Err(StoreError::InvalidRecord(format!(
                    "row {} of {} has {} fields but the header has {}",
                    line + 1,
                    self.path.display(),
                    row.len(),
                    headers.len()
                )));
            }
            let record: Record = headers
                .iter()
                .enumerate()
                .map(|(i, field)| (field.to_string(), row.get(i).unwrap_or("").to_string()))
                .collect();
            records.push(record);
        }

        tracing::debug!("loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }

    /// Overwrite the file with `records`. An empty slice leaves the file
    /// untouched.
    ///
    /// Rows go to a temporary file next to the target which then replaces
    /// it, so a failed save never leaves a truncated store behind.
    pub fn save_all(&self, records: &[Record]) -> Result<(), StoreError> {
        if records.is_empty() {
            tracing::debug!("nothing to save to {}", self.path.display());
            return Ok(());
        }

        let header = union_header(records);
        let parent = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;

        let temp = NamedTempFile::new_in(parent).map_err(|e| self.io_error(e))?;
        {
            let mut writer = Writer::from_writer(BufWriter::new(temp.as_file()));
            writer.write_record(&header)?;
            for record in records {
                writer.write_record(
                    header
                        .iter()
                        .map(|field| record.get(*field).map(String::as_str).unwrap_or("")),
                )?;
            }
            writer.flush().map_err(|e| self.io_error(e))?;
        }
        temp.as_file().sync_all().map_err(|e| self.io_error(e))?;
        temp.persist(&self.path).map_err(|e| self.io_error(e.error))?;

        tracing::debug!("saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// Field names across all records, each once, in first-seen order.
fn union_header(records: &[Record]) -> Vec<&str> {
    let mut header: Vec<&str> = Vec::new();
    for record in records {
        for field in record.keys() {
            if !header.contains(&field.as_str()) {
                header.push(field);
            }
        }
    }
    header
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn store_in(dir: &TempDir) -> CsvTicketStore {
        CsvTicketStore::new(dir.path().join("tickets.csv"))
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = CsvTicketStore::new(dir.path().join("nope").join("tickets.csv"));
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_preserves_rows() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let records = vec![
            record(&[("nombre", "Ana"), ("descripcion", "fuga, en el baño")]),
            record(&[("nombre", "Luis"), ("descripcion", "dijo \"hola\"\ny se fue")]),
        ];
        store.save_all(&records).unwrap();
        assert_eq!(store.load_all().unwrap(), records);
    }

    #[test]
    fn header_is_union_in_first_seen_order() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let records = vec![
            record(&[("nombre", "Ana"), ("estado", "Pendiente")]),
            record(&[("nombre", "Luis"), ("piso", "3"), ("estado", "Resuelto")]),
        ];
        store.save_all(&records).unwrap();

        let text = fs::read_to_string(store.path()).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("nombre,estado,piso"));
        assert_eq!(lines.next(), Some("Ana,Pendiente,"));
        assert_eq!(lines.next(), Some("Luis,Resuelto,3"));

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded[0]["piso"], "");
        assert_eq!(loaded[1]["piso"], "3");
    }

    #[test]
    fn short_rows_are_padded() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "nombre,categoria,estado\nAna,agua\n").unwrap();
        let loaded = store.load_all().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0]["categoria"], "agua");
        assert_eq!(loaded[0]["estado"], "");
    }

    #[test]
    fn long_rows_are_rejected() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "nombre,categoria\nAna,agua,extra\n").unwrap();
        assert!(matches!(
            store.load_all(),
            Err(StoreError::InvalidRecord(_))
        ));
        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "nombre,categoria\nAna,agua,extra\n"
        );
    }

    #[test]
    fn duplicate_columns_are_rejected() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "nombre,nombre\nAna,Eva\n").unwrap();
        assert!(matches!(
            store.load_all(),
            Err(StoreError::InvalidRecord(_))
        ));
    }

    #[test]
    fn saving_nothing_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "nombre\nAna\n").unwrap();
        store.save_all(&[]).unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "nombre\nAna\n");

        let fresh = CsvTicketStore::new(dir.path().join("fresh.csv"));
        fresh.save_all(&[]).unwrap();
        assert!(!fresh.path().exists());
    }

    #[test]
    fn resave_is_stable() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            "nombre,categoria,prioridad\nAna,agua,Media\nLuis,,Alta\n",
        )
        .unwrap();
        let before = fs::read_to_string(store.path()).unwrap();
        store.save_all(&store.load_all().unwrap()).unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn overwrite_replaces_previous_content() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store
            .save_all(&[record(&[("nombre", "Ana")]), record(&[("nombre", "Luis")])])
            .unwrap();
        store.save_all(&[record(&[("nombre", "Eva")])]).unwrap();
        let loaded = store.load_all().unwrap();
        assert_eq!(loaded, vec![record(&[("nombre", "Eva")])]);
    }
}
