use crate::cli::prompt::Prompter;
use crate::config::Config;
use crate::data::load_data;
use crate::errors::AppResult;
use crate::ui::report::{RenderOptions, print_report};
use std::io::{self, BufRead, Write};
use tracing::info;

/// Handle the interactive `explore` loop on stdin/stdout
pub fn handle(cfg: &Config) -> AppResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());
    run_session(&mut prompter, cfg)
}

/// Collect filters, load, report, and repeat while the user answers "yes".
pub fn run_session<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    cfg: &Config,
) -> AppResult<()> {
    let opts = RenderOptions::from(cfg);
    let data_dir = cfg.data_path();
    let mut round = 1;

    loop {
        let filters = prompter.get_filters()?;
        info!(round, %filters, "filters collected");

        let table = load_data(&data_dir, &filters)?;
        writeln!(
            prompter.output(),
            "{} trips match {}",
            table.len(),
            filters
        )?;

        print_report(prompter.output(), &table, opts)?;

        if !prompter.ask_restart()? {
            break;
        }
        round += 1;
    }

    Ok(())
}
