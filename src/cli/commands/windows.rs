use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};

/// Print the meal windows in the order they are checked.
pub fn handle(cfg: &Config) -> AppResult<()> {
    cfg.windows.validate()?;

    header("Meal windows (checked in this order)");
    for (i, (cat, w)) in cfg.windows.iter().enumerate() {
        println!("{}. {:<10} {}", i + 1, cat.label(), w);
    }

    for (a, b) in cfg.windows.overlapping_pairs() {
        warning(format!("{a} and {b} overlap: times in both count as {a}"));
    }
    Ok(())
}
