//! `SQLite` schema definitions for tuneform.
//!
//! This module contains the SQL statements for creating and managing
//! the database schema.

/// SQL statement to create the forms table.
///
/// One row per completed service order; all operator fields are stored as
/// text. Rows are append-only.
pub const CREATE_FORMS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS forms (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    form_base TEXT NOT NULL,
    client_suffix TEXT NOT NULL,
    date_iso TEXT NOT NULL,
    time TEXT NOT NULL,
    name TEXT NOT NULL,
    address TEXT NOT NULL,
    contact TEXT NOT NULL,
    plate TEXT NOT NULL,
    car TEXT NOT NULL,
    make TEXT NOT NULL,
    model TEXT NOT NULL,
    transmission TEXT NOT NULL,
    sw_id TEXT NOT NULL,
    hw_id TEXT NOT NULL,
    service TEXT NOT NULL,
    total_price TEXT NOT NULL,
    technician TEXT NOT NULL
)
";

/// SQL statement to create the metadata table for storing key-value pairs.
pub const CREATE_METADATA_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS metadata (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)
";

/// All schema creation statements in order.
pub const SCHEMA_STATEMENTS: &[&str] = &[CREATE_FORMS_TABLE, CREATE_METADATA_TABLE];
