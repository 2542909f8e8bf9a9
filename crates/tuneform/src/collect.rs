//! Interactive collection of form records.
//!
//! The collector walks the 13 operator fields in order, showing the default
//! drawn from the previous record (or the configured fallback) and accepting
//! an empty line as "take the default". It is generic over its input and
//! output streams so tests can drive it with in-memory buffers; the binary
//! hands it locked stdin/stdout.

use std::io::{BufRead, Write};

use crate::config::PromptDefaults;
use crate::error::{Error, Result};
use crate::order::{Field, FormRecord};

/// Prompts the operator for field values, one line per field.
#[derive(Debug)]
pub struct Collector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Collector<R, W> {
    /// Create a collector reading from `input` and prompting on `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Fill in the operator fields of a started record.
    ///
    /// The default for each field is the previous record's value when present
    /// and non-empty, otherwise the configured fallback. No validation of
    /// content is performed; whatever the operator types is accepted as-is
    /// after trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputClosed`] if the input stream ends mid-form, or
    /// an I/O error if a prompt cannot be written.
    pub fn collect(
        &mut self,
        mut record: FormRecord,
        previous: Option<&FormRecord>,
        fallbacks: &PromptDefaults,
    ) -> Result<FormRecord> {
        for field in Field::ALL {
            let default = previous
                .map(|prev| prev.field(field))
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| fallbacks.fallback(field));
            let value = self.prompt(field.prompt_label(), default)?;
            record.set_field(field, value);
        }
        Ok(record)
    }

    /// Show one prompt and read the answer.
    ///
    /// An empty answer accepts `default` (which may itself be empty, in which
    /// case the accepted value is empty).
    fn prompt(&mut self, label: &str, default: &str) -> Result<String> {
        if default.is_empty() {
            write!(self.output, "{label}: ")?;
        } else {
            write!(self.output, "{label} [{default}]: ")?;
        }
        self.output.flush()?;

        let mut line = String::new();
        let bytes = self.input.read_line(&mut line)?;
        if bytes == 0 {
            return Err(Error::InputClosed);
        }

        let answer = line.trim();
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer.to_string())
        }
    }
}
