//! Redaction of sensitive data
//!
//! Strips currency amounts, card numbers, SSNs, e-mail addresses and phone
//! numbers from text, and masks the `amount` of whole records, before
//! anything is handed to another process or written to a shareable export.

pub mod redact;

pub use redact::{redact, redact_text, redact_value, REDACTED};
