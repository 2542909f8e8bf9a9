//! Form-number sequence for tuneform.
//!
//! Form bases look like `005-A`, `006-A`, ... The next base is derived from
//! the most recently stored one; there is no uniqueness enforcement beyond
//! increment-from-last, since exactly one operator runs at a time.

use tracing::debug;

/// Numeric value the sequence starts from when the store is empty.
const SEQUENCE_START: u32 = 5;

/// Numeric value used when a stored form base has an unparseable prefix.
const SEQUENCE_FALLBACK: u32 = 1;

/// Literal suffix carried by every form base.
const SEQUENCE_SUFFIX: char = 'A';

/// Derive the next form base from the most recently stored one.
///
/// The numeric prefix (everything before the first `-`) is incremented and
/// zero-padded to three digits. A malformed prefix silently falls back to
/// `001`; an empty store starts the sequence at `005`.
#[must_use]
pub fn next_form_base(last: Option<&str>) -> String {
    let num = match last {
        Some(prev) => match prev.split('-').next().and_then(|p| p.parse::<u32>().ok()) {
            Some(n) => n + 1,
            None => {
                debug!("unparseable form base {prev:?}, restarting sequence");
                SEQUENCE_FALLBACK
            }
        },
        None => SEQUENCE_START,
    };
    format!("{num:03}-{SEQUENCE_SUFFIX}")
}
