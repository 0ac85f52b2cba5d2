//! Bring an existing configuration file up to date with the fields the
//! current version knows about, keeping the user's values.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Dotted paths (e.g. `windows.lunch`) present in the defaults but absent
/// from the file at `path`.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let (current, defaults) = load_pair(path)?;
    let mut missing = Vec::new();
    collect_missing(&current, &defaults, "", &mut missing);
    Ok(missing)
}

/// Insert every missing field with its default value and rewrite the file.
/// Returns the fields that were added; the file is untouched when none are.
pub fn migrate_missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let (mut current, defaults) = load_pair(path)?;
    let mut added = Vec::new();
    fill_missing(&mut current, &defaults, "", &mut added);

    if added.is_empty() {
        info("Configuration is up to date, nothing to migrate.");
        return Ok(added);
    }

    let serialized = serde_yaml::to_string(&Value::Mapping(current))?;

    // the result must still load as a valid Config
    let parsed: Config = serde_yaml::from_str(&serialized)?;
    parsed.validate()?;

    fs::write(path, serialized)?;

    success(format!(
        "Configuration migrated: added {}",
        added.join(", ")
    ));
    Ok(added)
}

fn load_pair(path: &Path) -> AppResult<(Mapping, Mapping)> {
    if !path.exists() {
        return Err(AppError::Config(format!(
            "Configuration file not found: {} (run `punchcat init` first)",
            path.display()
        )));
    }

    let content = fs::read_to_string(path)?;
    let current = match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(m) => m,
        Value::Null => Mapping::new(),
        _ => {
            return Err(AppError::Config(format!(
                "{} is not a YAML mapping",
                path.display()
            )));
        }
    };

    let defaults = match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => m,
        _ => return Err(AppError::Other("default config is not a mapping".into())),
    };

    Ok((current, defaults))
}

fn join_path(prefix: &str, key: &Value) -> String {
    let key = key.as_str().unwrap_or("?");
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn collect_missing(current: &Mapping, defaults: &Mapping, prefix: &str, out: &mut Vec<String>) {
    for (key, default_val) in defaults {
        let path = join_path(prefix, key);
        match (current.get(key), default_val) {
            (None, _) => out.push(path),
            (Some(Value::Mapping(cur)), Value::Mapping(def)) => {
                collect_missing(cur, def, &path, out)
            }
            _ => {}
        }
    }
}

fn fill_missing(current: &mut Mapping, defaults: &Mapping, prefix: &str, added: &mut Vec<String>) {
    for (key, default_val) in defaults {
        let path = join_path(prefix, key);
        match current.get_mut(key) {
            None => {
                current.insert(key.clone(), default_val.clone());
                added.push(path);
            }
            Some(Value::Mapping(cur)) => {
                if let Value::Mapping(def) = default_val {
                    fill_missing(cur, def, &path, added);
                }
            }
            Some(_) => {}
        }
    }
}
