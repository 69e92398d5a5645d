//! Pattern-based redaction

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::error::TaskflowResult;

/// Marker substituted for every redacted value
pub const REDACTED: &str = "[REDACTED]";

/// Patterns applied in this order against the progressively redacted text
static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"\$[0-9]+(?:\.[0-9]{2})?").unwrap(), // dollar amounts
        Regex::new(r"\b[0-9]{16}\b").unwrap(),           // card numbers
        Regex::new(r"\b[0-9]{3}-[0-9]{2}-[0-9]{4}\b").unwrap(), // SSN
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").unwrap(), // e-mail
        Regex::new(r"\b[0-9]{3}[-.]?[0-9]{3}[-.]?[0-9]{4}\b").unwrap(), // phone
    ]
});

/// Replace every sensitive substring with [`REDACTED`]
pub fn redact_text(text: &str) -> String {
    PATTERNS.iter().fold(text.to_string(), |acc, pattern| {
        pattern.replace_all(&acc, REDACTED).into_owned()
    })
}

/// Redacted deep copy of a JSON record
///
/// A non-null `amount` becomes the string [`REDACTED`], whatever its type
/// was. Zero is masked as well, so an export never reveals which records
/// had no amount. String `title` and `description` fields go through
/// [`redact_text`]. Anything that is not an object is returned unchanged.
pub fn redact_value(record: &Value) -> Value {
    let mut redacted = record.clone();

    if let Value::Object(fields) = &mut redacted {
        if let Some(amount) = fields.get_mut("amount") {
            if !amount.is_null() {
                *amount = Value::String(REDACTED.to_string());
            }
        }
        for key in ["description", "title"] {
            if let Some(Value::String(text)) = fields.get_mut(key) {
                *text = redact_text(text);
            }
        }
    }

    redacted
}

/// Serialize a typed record and redact it
pub fn redact<T: Serialize>(record: &T) -> TaskflowResult<Value> {
    let value = serde_json::to_value(record)?;
    Ok(redact_value(&value))
}
