use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::parse::parse_time;
use crate::errors::{AppError, AppResult};

/// Print `<time>  <category>` for every argument, `-` when no window matches.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Classify { times } = cmd {
        cfg.windows.validate()?;

        for raw in times {
            let t = parse_time(raw).ok_or_else(|| AppError::InvalidTimeArg(raw.clone()))?;
            let label = cfg
                .windows
                .categorize(t)
                .map(|c| c.label())
                .unwrap_or("-");
            println!("{}  {}", t.format("%H:%M:%S"), label);
        }
    }
    Ok(())
}
