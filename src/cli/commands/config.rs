use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        let path = Config::config_file();

        if !*print_config {
            info(format!("Configuration file: {}", path.display()));
            return Ok(());
        }

        if !path.exists() {
            warning(format!(
                "{} not found, showing defaults (run `bikeshare init` to create it)",
                path.display()
            ));
        }

        println!("📄 Current configuration:\n");
        print!("{}", serde_yaml::to_string(cfg)?);
    }

    Ok(())
}
