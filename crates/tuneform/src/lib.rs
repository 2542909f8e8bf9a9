//! `tuneform` - offline service-order entry and receipts for a tuning shop
//!
//! This library provides the record, persist, render, export pipeline behind
//! the `tuneform` binary: a local `SQLite` store of service-order forms, a
//! sequential form-number scheme, and a fixed-layout receipt renderer that
//! produces a client copy and a shop copy per order.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod collect;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod order;
pub mod receipt;
pub mod sequence;
pub mod storage;

pub use collect::Collector;
pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use order::{Field, FormRecord, Stamp, Variant};
pub use storage::Storage;
