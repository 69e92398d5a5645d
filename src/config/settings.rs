//! User settings for TaskFlow
//!
//! Manages user preferences including the assist feature toggles, privacy
//! mode and display defaults. Every field has a serde default so a partial
//! settings file is merged over the defaults on load.

use serde::{Deserialize, Serialize};

use super::paths::TaskflowPaths;
use crate::error::TaskflowError;

/// Toggles for the heuristic assist features
///
/// Passed by value into the call sites that classify or suggest, never read
/// from global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistSettings {
    /// Master switch for every assist feature
    pub enabled: bool,
    /// Redact text before it is handed to a non-local classifier
    pub privacy_mode: bool,
    /// Allow classifier-assisted task creation
    pub task_parsing: bool,
    /// Allow automatic expense categorization
    pub expense_categorization: bool,
    /// Show suggestions alongside the summary
    pub suggestions: bool,
    /// Reserved for generated summaries; no local backend produces them
    pub summaries: bool,
}

impl Default for AssistSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            privacy_mode: true,
            task_parsing: true,
            expense_categorization: true,
            suggestions: true,
            summaries: false,
        }
    }
}

impl AssistSettings {
    /// Task parsing is usable only when the master switch is on too
    pub fn task_parsing_active(&self) -> bool {
        self.enabled && self.task_parsing
    }

    /// Expense categorization is usable only when the master switch is on too
    pub fn expense_categorization_active(&self) -> bool {
        self.enabled && self.expense_categorization
    }

    /// Suggestions are shown only when the master switch is on too
    pub fn suggestions_active(&self) -> bool {
        self.enabled && self.suggestions
    }
}

/// User settings for TaskFlow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Category given to tasks created without one
    #[serde(default = "default_task_category")]
    pub default_task_category: String,

    /// Category given to transactions created without one
    #[serde(default = "default_expense_category")]
    pub default_expense_category: String,

    /// Assist feature toggles
    #[serde(default)]
    pub assist: AssistSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_task_category() -> String {
    "General".to_string()
}

fn default_expense_category() -> String {
    "Other".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_task_category: default_task_category(),
            default_expense_category: default_expense_category(),
            assist: AssistSettings::default(),
        }
    }
}

/// Keys accepted by [`Settings::set`]
pub const SETTING_KEYS: &[&str] = &[
    "currency_symbol",
    "date_format",
    "default_task_category",
    "default_expense_category",
    "assist.enabled",
    "assist.privacy_mode",
    "assist.task_parsing",
    "assist.expense_categorization",
    "assist.suggestions",
    "assist.summaries",
];

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &TaskflowPaths) -> Result<Self, TaskflowError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                TaskflowError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TaskflowError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TaskflowPaths) -> Result<(), TaskflowError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            TaskflowError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            TaskflowError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Update a single setting by its dotted key
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), TaskflowError> {
        match key {
            "currency_symbol" => self.currency_symbol = value.to_string(),
            "date_format" => self.date_format = value.to_string(),
            "default_task_category" => self.default_task_category = non_empty(key, value)?,
            "default_expense_category" => self.default_expense_category = non_empty(key, value)?,
            "assist.enabled" => self.assist.enabled = parse_flag(key, value)?,
            "assist.privacy_mode" => self.assist.privacy_mode = parse_flag(key, value)?,
            "assist.task_parsing" => self.assist.task_parsing = parse_flag(key, value)?,
            "assist.expense_categorization" => {
                self.assist.expense_categorization = parse_flag(key, value)?
            }
            "assist.suggestions" => self.assist.suggestions = parse_flag(key, value)?,
            "assist.summaries" => self.assist.summaries = parse_flag(key, value)?,
            _ => {
                return Err(TaskflowError::Config(format!(
                    "Unknown setting '{}'. Valid keys: {}",
                    key,
                    SETTING_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, TaskflowError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        other => Err(TaskflowError::Config(format!(
            "Invalid value '{}' for {}: expected true or false",
            other, key
        ))),
    }
}

fn non_empty(key: &str, value: &str) -> Result<String, TaskflowError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(TaskflowError::Config(format!("{} cannot be empty", key)));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.assist.enabled);
        assert!(settings.assist.privacy_mode);
        assert!(settings.assist.task_parsing);
        assert!(settings.assist.expense_categorization);
        assert!(settings.assist.suggestions);
        assert!(!settings.assist.summaries);
        assert_eq!(settings.default_expense_category, "Other");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TaskflowPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.assist.privacy_mode = false;
        settings.currency_symbol = "€".into();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(!loaded.assist.privacy_mode);
        assert_eq!(loaded.currency_symbol, "€");
    }

    #[test]
    fn test_partial_file_merges_over_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TaskflowPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"assist": {"suggestions": false}}"#,
        )
        .unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(!loaded.assist.suggestions);
        assert!(loaded.assist.enabled);
        assert!(loaded.assist.task_parsing);
        assert_eq!(loaded.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TaskflowPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, TaskflowError::Config(_)));
    }

    #[test]
    fn test_set_keys() {
        let mut settings = Settings::default();
        settings.set("assist.enabled", "off").unwrap();
        settings.set("default_task_category", "Work").unwrap();

        assert!(!settings.assist.enabled);
        assert!(!settings.assist.task_parsing_active());
        assert_eq!(settings.default_task_category, "Work");

        assert!(settings.set("assist.enabled", "maybe").is_err());
        assert!(settings.set("no.such.key", "1").is_err());
        assert!(settings.set("default_task_category", "  ").is_err());
    }
}
