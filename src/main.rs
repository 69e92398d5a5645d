use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use taskflow::cli::{
    handle_classify_command, handle_config_command, handle_export_command, handle_stats_command,
    handle_task_command, handle_transaction_command, ClassifyCommands, ConfigCommands,
    ExportCommands, TaskCommands, TransactionCommands,
};
use taskflow::config::{Settings, TaskflowPaths};
use taskflow::storage::Storage;

#[derive(Parser)]
#[command(
    name = "taskflow",
    version,
    about = "Terminal task list and expense ledger",
    long_about = "TaskFlow keeps a task list and an income/expense ledger in local JSON \
                  files. Optional rule-based assist guesses task priority and effort, \
                  suggests expense categories, and can redact sensitive text on export."
)]
struct Cli {
    /// Log verbosity when RUST_LOG is not set
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and default settings
    Init,

    /// Show or change settings
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Task management commands
    #[command(subcommand)]
    Task(TaskCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "transaction")]
    Txn(TransactionCommands),

    /// Monthly summary and suggestions
    Stats {
        /// Month to summarize (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Preview classifier guesses
    #[command(subcommand)]
    Classify(ClassifyCommands),

    /// Export tasks or transactions
    #[command(subcommand)]
    Export(ExportCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level);

    let paths = TaskflowPaths::new()?;
    debug!(base_dir = %paths.base_dir().display(), "resolved paths");
    let mut settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!("TaskFlow is already initialized at: {}", paths.base_dir().display());
                return Ok(());
            }
            settings.save(&paths)?;
            storage.save_all()?;
            info!(base_dir = %paths.base_dir().display(), "initialized");
            println!("Initialized TaskFlow at: {}", paths.base_dir().display());
            println!();
            println!("Try:");
            println!("  taskflow task add \"Urgent: send the Q3 report\" --smart");
            println!("  taskflow txn add \"Lunch with client\" 45.00 --auto-categorize");
            println!("  taskflow stats");
        }
        Some(Commands::Config(cmd)) => {
            handle_config_command(&paths, &mut settings, cmd)?;
        }
        Some(Commands::Task(cmd)) => {
            handle_task_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Txn(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Stats { month }) => {
            handle_stats_command(&storage, &settings, month)?;
        }
        Some(Commands::Classify(cmd)) => {
            handle_classify_command(&settings, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, cmd)?;
        }
        None => {
            println!("TaskFlow - tasks and expenses from the terminal");
            println!();
            println!("Run 'taskflow --help' for usage information.");
            println!("Run 'taskflow init' to get started.");
        }
    }

    Ok(())
}

/// Install the stderr subscriber; `RUST_LOG` wins over `--log-level`
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
