use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` subcommand: write the default configuration file.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        let existed = Config::config_file().exists();
        let path = Config::init_file(*force)?;

        if existed && !*force {
            info(format!(
                "Config file already present: {} (use --force to overwrite)",
                path.display()
            ));
        } else {
            success(format!("Config file: {}", path.display()));
        }
    }
    Ok(())
}
