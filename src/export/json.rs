//! JSON Export functionality
//!
//! Writes a collection as a pretty-printed JSON array of records, optionally
//! passing each record through the redaction filter first.

use std::io::Write;

use serde::Serialize;
use serde_json::Value;

use crate::error::{TaskflowError, TaskflowResult};
use crate::privacy::redact;

/// Export records as a JSON array
pub fn export_json<T, W>(records: &[T], writer: &mut W, redacted: bool) -> TaskflowResult<()>
where
    T: Serialize,
    W: Write,
{
    let values = records
        .iter()
        .map(|record| {
            if redacted {
                redact(record)
            } else {
                Ok(serde_json::to_value(record)?)
            }
        })
        .collect::<TaskflowResult<Vec<Value>>>()?;

    serde_json::to_writer_pretty(&mut *writer, &values)
        .map_err(|e| TaskflowError::Export(e.to_string()))?;
    writeln!(writer)?;

    Ok(())
}
