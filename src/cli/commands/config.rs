use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{migrate_missing_fields, missing_fields};
use crate::errors::AppResult;
use crate::ui::messages::{detail, error, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, config_path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            let cfg = Config::load_from(config_path)?;
            println!("📄 Current configuration ({}):\n", config_path.display());
            println!("{}", cfg.to_yaml()?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            let missing = missing_fields(config_path)?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!(
                    "Configuration file is missing {} field(s) (run `punchcat config --migrate`):",
                    missing.len()
                ));
                for field in &missing {
                    detail(field);
                }
            }
        }

        // ---- MIGRATE CONFIG ----
        if *migrate {
            migrate_missing_fields(config_path)?;
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit_file(config_path, editor.clone());
        }
    }

    Ok(())
}

fn edit_file(path: &Path, requested_editor: Option<String>) {
    // Default editor basato sulla piattaforma
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested_editor.unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using '{}'",
                editor_to_use
            ));
        }
        _ => {
            warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            ));

            match Command::new(&default_editor).arg(path).status() {
                Ok(s) if s.success() => success(format!(
                    "Configuration file edited successfully using fallback '{}'",
                    default_editor
                )),
                _ => error(format!(
                    "Failed to edit configuration file using fallback '{}'",
                    default_editor
                )),
            }
        }
    }
}
