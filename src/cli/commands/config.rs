use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = &cli.command {
        let path = cli
            .conf
            .clone()
            .unwrap_or_else(|| Config::config_file().to_string_lossy().to_string());

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path);
            println!("{}", cfg.to_yaml()?);
        } else {
            info(format!("Configuration file: {}", path));
        }
    }
    Ok(())
}
