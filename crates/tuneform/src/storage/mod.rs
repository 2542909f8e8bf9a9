//! Storage layer for tuneform.
//!
//! This module provides `SQLite`-based persistent storage for form records.
//! The `Storage` handle owns the connection: it is opened once at startup,
//! lent to whatever needs it, and the connection closes when the handle drops
//! on any exit path. Records are append-only; no update or delete is exposed.

pub mod migrations;
pub mod schema;

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::order::FormRecord;

/// Storage engine for form records.
#[derive(Debug)]
pub struct Storage {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    conn: Connection,
}

impl Storage {
    /// Open or create a storage database at the given path.
    ///
    /// Creates the parent directories and database file if they don't exist.
    /// Schema initialization runs on every open and is idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or schema initialization fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Opening database at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| Error::DatabaseOpen {
            path: path.clone(),
            source,
        })?;

        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;

        migrations::initialize_schema(&conn)?;

        info!("Database ready at {}", path.display());
        Ok(Self { path, conn })
    }

    /// Create an in-memory storage instance for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::DatabaseOpen {
            path: PathBuf::from(":memory:"),
            source,
        })?;

        migrations::initialize_schema(&conn)?;

        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn,
        })
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a form record and return its assigned identifier.
    ///
    /// Identifiers are unique, strictly increasing, and never reused.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn insert(&self, record: &FormRecord) -> Result<i64> {
        self.conn.execute(
            r"
            INSERT INTO forms (
                form_base, client_suffix, date_iso, time, name, address, contact,
                plate, car, make, model, transmission, sw_id, hw_id, service,
                total_price, technician
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)
            ",
            params![
                record.form_base,
                record.client_suffix,
                record.date_iso,
                record.time,
                record.name,
                record.address,
                record.contact,
                record.plate,
                record.car,
                record.make,
                record.model,
                record.transmission,
                record.sw_id,
                record.hw_id,
                record.service,
                record.total_price,
                record.technician,
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!("Inserted form record with id {}", id);
        Ok(id)
    }

    /// Get the most recently inserted record, or `None` if the table is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn latest(&self) -> Result<Option<FormRecord>> {
        let result = self
            .conn
            .query_row(
                &format!("{SELECT_COLUMNS} ORDER BY id DESC LIMIT 1"),
                [],
                Self::row_to_record,
            )
            .optional()?;
        Ok(result)
    }

    /// Get a record by its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn get(&self, id: i64) -> Result<Option<FormRecord>> {
        let result = self
            .conn
            .query_row(
                &format!("{SELECT_COLUMNS} WHERE id = ?1"),
                [id],
                Self::row_to_record,
            )
            .optional()?;
        Ok(result)
    }

    /// Count total records in storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM forms", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Convert a database row to a `FormRecord`.
    fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<FormRecord> {
        Ok(FormRecord {
            id: Some(row.get(0)?),
            form_base: row.get(1)?,
            client_suffix: row.get(2)?,
            date_iso: row.get(3)?,
            time: row.get(4)?,
            name: row.get(5)?,
            address: row.get(6)?,
            contact: row.get(7)?,
            plate: row.get(8)?,
            car: row.get(9)?,
            make: row.get(10)?,
            model: row.get(11)?,
            transmission: row.get(12)?,
            sw_id: row.get(13)?,
            hw_id: row.get(14)?,
            service: row.get(15)?,
            total_price: row.get(16)?,
            technician: row.get(17)?,
        })
    }
}

/// Shared column list so every query maps rows identically.
const SELECT_COLUMNS: &str = r"
    SELECT id, form_base, client_suffix, date_iso, time, name, address, contact,
           plate, car, make, model, transmission, sw_id, hw_id, service,
           total_price, technician
    FROM forms";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{Field, Stamp};

    fn create_test_storage() -> Storage {
        Storage::open_in_memory().expect("failed to create test storage")
    }

    fn create_test_record(form_base: &str) -> FormRecord {
        let mut record = FormRecord::started(
            form_base.to_string(),
            Stamp {
                date_iso: "Fri 10-03-2025".to_string(),
                time: "09:15:00".to_string(),
                client_suffix: "10-03-25".to_string(),
            },
        );
        record.name = "NAPOLEON TYRONE CAEL".to_string();
        record.address = "KM3 L.T.B.".to_string();
        record.contact = "09070457154".to_string();
        record.plate = "UID277".to_string();
        record.car = "HILUX".to_string();
        record.make = "TOYOTA".to_string();
        record.model = "2012".to_string();
        record.transmission = "M/T".to_string();
        record.sw_id = "89663-0KN51".to_string();
        record.hw_id = "89661".to_string();
        record.service = "STANDARD TUNNING".to_string();
        record.total_price = "₱10.000".to_string();
        record.technician = "REY".to_string();
        record
    }

    #[test]
    fn test_open_in_memory() {
        let storage = Storage::open_in_memory();
        assert!(storage.is_ok());
    }

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let storage = create_test_storage();

        let id1 = storage.insert(&create_test_record("005-A")).unwrap();
        let id2 = storage.insert(&create_test_record("006-A")).unwrap();

        assert_eq!(id1, 1);
        assert_eq!(id2, 2);
    }

    #[test]
    fn test_insert_latest_roundtrip() {
        let storage = create_test_storage();
        let record = create_test_record("005-A");

        let id = storage.insert(&record).unwrap();
        let stored = storage.latest().unwrap().expect("record should exist");

        assert_eq!(stored.id, Some(id));
        // every attribute comes back byte-for-byte
        assert_eq!(stored.form_base, record.form_base);
        assert_eq!(stored.client_suffix, record.client_suffix);
        assert_eq!(stored.date_iso, record.date_iso);
        assert_eq!(stored.time, record.time);
        for field in Field::ALL {
            assert_eq!(stored.field(field), record.field(field), "{field:?}");
        }
    }

    #[test]
    fn test_latest_empty_store() {
        let storage = create_test_storage();
        assert!(storage.latest().unwrap().is_none());
    }

    #[test]
    fn test_latest_returns_highest_id() {
        let storage = create_test_storage();

        storage.insert(&create_test_record("005-A")).unwrap();
        storage.insert(&create_test_record("006-A")).unwrap();

        let latest = storage.latest().unwrap().unwrap();
        assert_eq!(latest.form_base, "006-A");
        assert_eq!(latest.id, Some(2));
    }

    #[test]
    fn test_get_by_id() {
        let storage = create_test_storage();

        let id = storage.insert(&create_test_record("005-A")).unwrap();
        storage.insert(&create_test_record("006-A")).unwrap();

        let first = storage.get(id).unwrap().unwrap();
        assert_eq!(first.form_base, "005-A");
    }

    #[test]
    fn test_get_nonexistent() {
        let storage = create_test_storage();
        assert!(storage.get(99999).unwrap().is_none());
    }

    #[test]
    fn test_count() {
        let storage = create_test_storage();
        assert_eq!(storage.count().unwrap(), 0);

        storage.insert(&create_test_record("005-A")).unwrap();
        storage.insert(&create_test_record("006-A")).unwrap();

        assert_eq!(storage.count().unwrap(), 2);
    }

    #[test]
    fn test_empty_technician_roundtrip() {
        let storage = create_test_storage();
        let mut record = create_test_record("005-A");
        record.technician = String::new();

        storage.insert(&record).unwrap();
        let stored = storage.latest().unwrap().unwrap();
        assert_eq!(stored.technician, "");
    }

    #[test]
    fn test_unicode_fields_roundtrip() {
        let storage = create_test_storage();
        let mut record = create_test_record("005-A");
        record.total_price = "₱12.500".to_string();
        record.name = "JOSÉ RIZAL".to_string();

        storage.insert(&record).unwrap();
        let stored = storage.latest().unwrap().unwrap();
        assert_eq!(stored.total_price, "₱12.500");
        assert_eq!(stored.name, "JOSÉ RIZAL");
    }

    #[test]
    fn test_path() {
        let storage = create_test_storage();
        assert_eq!(storage.path().to_string_lossy(), ":memory:");
    }

    #[test]
    fn test_open_file_based_persists_across_reopen() {
        let temp_dir = std::env::temp_dir();
        let db_path = temp_dir.join(format!("tuneform_test_{}.db", std::process::id()));

        {
            let storage = Storage::open(&db_path).unwrap();
            storage.insert(&create_test_record("005-A")).unwrap();
            assert_eq!(storage.count().unwrap(), 1);
        }

        // Reopen: schema init must not drop or duplicate anything
        {
            let storage = Storage::open(&db_path).unwrap();
            assert_eq!(storage.count().unwrap(), 1);
            let latest = storage.latest().unwrap().unwrap();
            assert_eq!(latest.form_base, "005-A");
        }

        let _ = std::fs::remove_file(&db_path);
        let _ = std::fs::remove_file(db_path.with_extension("db-wal"));
        let _ = std::fs::remove_file(db_path.with_extension("db-shm"));
    }

    #[test]
    fn test_open_creates_parent_dirs() {
        let temp_dir = std::env::temp_dir();
        let nested_path = temp_dir.join(format!(
            "tuneform_test_{}/nested/forms.db",
            std::process::id()
        ));

        if let Some(parent) = nested_path.parent() {
            let _ = std::fs::remove_dir_all(parent);
        }

        let storage = Storage::open(&nested_path).unwrap();
        assert!(nested_path.exists());

        drop(storage);
        if let Some(parent) = nested_path.parent() {
            let _ = std::fs::remove_dir_all(parent.parent().unwrap());
        }
    }
}
