use crate::cli::parser::{Commands, WindowPreset};
use crate::config::Config;
use crate::core::categorize::MealWindows;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command: write a fresh configuration file.
pub fn handle(cmd: &Commands, config_path: &Path) -> AppResult<()> {
    if let Commands::Init { windows, force } = cmd {
        let windows = match windows {
            WindowPreset::Extended => MealWindows::extended(),
            WindowPreset::Narrow => MealWindows::narrow(),
        };

        info("Initializing punchcat…");
        Config::init_at(config_path, windows, *force)?;

        for (cat, w) in windows.iter() {
            info(format!("{:<10} {}", cat.label(), w));
        }

        success("punchcat initialization completed!");
    }
    Ok(())
}
