//! Configuration commands for CLI.

use clap::Subcommand;
use habitcoach_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value by dot-separated key
    Get {
        /// Key, e.g. ui.dark_mode
        key: String,
    },
    /// Set a config value
    Set {
        /// Key, e.g. ui.dark_mode
        key: String,
        /// New value
        value: String,
    },
    /// Show the full configuration
    Show,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let cfg = Config::load_or_default();
            match cfg.get(&key) {
                Some(value) => println!("{value}"),
                None => println!("Unknown key: {key}"),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut cfg = Config::load_or_default();
            cfg.set(&key, &value)?;
            cfg.save()?;
            println!("{key} = {value}");
        }
        ConfigAction::Show => {
            let cfg = Config::load_or_default();
            println!("{}", serde_json::to_string_pretty(&cfg)?);
        }
    }
    Ok(())
}
