//! Config command - show or initialize configuration

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager};
use crate::error::{PackratError, PackratResult};

/// Execute the config command
pub async fn execute(args: ConfigArgs, manager: &ConfigManager, config: &Config) -> PackratResult<()> {
    match args.action.unwrap_or(ConfigAction::Show) {
        ConfigAction::Show => {
            let content = toml::to_string_pretty(config)?;
            print!("{}", content);
            Ok(())
        }
        ConfigAction::Path => {
            println!("{}", manager.path().display());
            Ok(())
        }
        ConfigAction::Init { force } => {
            if manager.path().exists() && !force {
                return Err(PackratError::User(format!(
                    "Configuration already exists at {} (use --force to overwrite)",
                    manager.path().display()
                )));
            }
            manager.save(&Config::default()).await?;
            println!("Wrote default configuration to {}", manager.path().display());
            Ok(())
        }
    }
}
