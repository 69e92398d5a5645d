//! CLI commands for data export
//!
//! Provides commands for exporting tasks and transactions to files.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Subcommand, ValueEnum};

use crate::error::{TaskflowError, TaskflowResult};
use crate::export::{export_json, export_tasks_csv, export_transactions_csv};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (spreadsheet-compatible)
    Csv,
    /// JSON array of records
    Json,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export tasks to a file
    Tasks {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Mask sensitive text before writing
        #[arg(long)]
        redact: bool,
    },

    /// Export transactions to a file
    Transactions {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Mask sensitive text and amounts before writing
        #[arg(long)]
        redact: bool,
    },
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> TaskflowResult<()> {
    match cmd {
        ExportCommands::Tasks {
            output,
            format,
            redact,
        } => {
            let tasks = storage.tasks.get_all()?;
            let mut writer = create_output(&output)?;
            match format {
                ExportFormat::Csv => export_tasks_csv(&tasks, &mut writer, redact)?,
                ExportFormat::Json => export_json(&tasks, &mut writer, redact)?,
            }
            writer.flush()?;
            println!("Exported {} tasks to: {}", tasks.len(), output.display());
        }
        ExportCommands::Transactions {
            output,
            format,
            redact,
        } => {
            let transactions = storage.transactions.get_all()?;
            let mut writer = create_output(&output)?;
            match format {
                ExportFormat::Csv => export_transactions_csv(&transactions, &mut writer, redact)?,
                ExportFormat::Json => export_json(&transactions, &mut writer, redact)?,
            }
            writer.flush()?;
            println!(
                "Exported {} transactions to: {}",
                transactions.len(),
                output.display()
            );
        }
    }

    Ok(())
}

fn create_output(path: &Path) -> TaskflowResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        TaskflowError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
