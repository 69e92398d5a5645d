//! Configuration module for TaskFlow
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Assist feature toggles

pub mod paths;
pub mod settings;

pub use paths::TaskflowPaths;
pub use settings::{AssistSettings, Settings};
