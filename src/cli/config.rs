//! Config CLI commands
//!
//! Shows the resolved paths and settings, and edits single settings.

use clap::Subcommand;

use crate::config::settings::SETTING_KEYS;
use crate::config::{Settings, TaskflowPaths};
use crate::error::TaskflowResult;

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show paths and current settings
    Show,
    /// Change a setting (e.g. `assist.privacy_mode false`)
    Set {
        /// Setting key
        #[arg(value_parser = clap::builder::PossibleValuesParser::new(SETTING_KEYS.iter().copied()))]
        key: String,
        /// New value
        value: String,
    },
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

/// Handle a config command
pub fn handle_config_command(
    paths: &TaskflowPaths,
    settings: &mut Settings,
    cmd: ConfigCommands,
) -> TaskflowResult<()> {
    match cmd {
        ConfigCommands::Show => {
            println!("TaskFlow Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  currency_symbol:               {}", settings.currency_symbol);
            println!("  date_format:                   {}", settings.date_format);
            println!("  default_task_category:         {}", settings.default_task_category);
            println!("  default_expense_category:      {}", settings.default_expense_category);
            let assist = &settings.assist;
            println!("  assist.enabled:                {}", on_off(assist.enabled));
            println!("  assist.privacy_mode:           {}", on_off(assist.privacy_mode));
            println!("  assist.task_parsing:           {}", on_off(assist.task_parsing));
            println!(
                "  assist.expense_categorization: {}",
                on_off(assist.expense_categorization)
            );
            println!("  assist.suggestions:            {}", on_off(assist.suggestions));
            println!("  assist.summaries:              {}", on_off(assist.summaries));
        }
        ConfigCommands::Set { key, value } => {
            settings.set(&key, &value)?;
            settings.save(paths)?;
            println!("Set {} = {}", key, value);
        }
    }

    Ok(())
}
