//! TaskFlow - terminal task list and income/expense ledger
//!
//! This library provides the core functionality for the TaskFlow CLI: task
//! and transaction records kept in local JSON files, plus three pure
//! components that work over them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `classify`: Rule-based task parsing and expense categorization
//! - `privacy`: Pattern-based redaction of sensitive text
//! - `reports`: Monthly summary statistics and suggestions
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (tasks, transactions, money, IDs)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `export`: CSV and JSON export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `taskflow` binary
//!
//! # Example
//!
//! ```rust
//! use taskflow::classify::{classify_expense, ExpenseCategory};
//! use taskflow::models::Money;
//! use taskflow::privacy::redact_text;
//!
//! let guess = classify_expense("Lunch with client", Money::from_units(45));
//! assert_eq!(guess.result.category, ExpenseCategory::Meals);
//!
//! assert_eq!(redact_text("Call 555-123-4567"), "Call [REDACTED]");
//! ```

pub mod classify;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod privacy;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::TaskflowError;
