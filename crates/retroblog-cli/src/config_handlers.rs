//! Handler functions for config CLI commands.
//!
//! Implements `retroblog config {path,get,set,init,export}` subcommands
//! and TOML dotted-key helper functions.

use crate::cli::ConfigAction;
use crate::config::RetroblogConfig;
use retroblog_core::{Error, Result};
use std::path::PathBuf;

// ============================================================================
// Command dispatch
// ============================================================================

/// Handle a config subcommand.
///
/// Receives the raw `--config` path (not a loaded config) because some
/// commands (path, init) work before a config file exists.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Get { key } => cmd_config_get(config_path, &key),
        ConfigAction::Set { key, value } => cmd_config_set(config_path, &key, &value),
        ConfigAction::Init { file, force } => cmd_config_init(file.as_deref(), force),
        ConfigAction::Export { docker_env } => {
            let config = RetroblogConfig::load(config_path)?;
            cmd_config_export(&config, docker_env)
        }
    }
}

// ============================================================================
// Command handlers
// ============================================================================

fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    match RetroblogConfig::resolve_config_path(config_path) {
        Some(path) => {
            println!("{}", path.display());
            if !path.exists() {
                eprintln!("(file does not exist; run `retroblog config init` to create it)");
            }
            Ok(())
        }
        None => Err(Error::config(
            "Could not determine config directory for this platform",
        )),
    }
}

fn cmd_config_get(config_path: Option<&str>, key: &str) -> Result<()> {
    let config = RetroblogConfig::load(config_path)?;
    println!("{}", config_value(&config, key)?);
    Ok(())
}

fn cmd_config_set(config_path: Option<&str>, key: &str, value: &str) -> Result<()> {
    let path = RetroblogConfig::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory"))?;

    if !path.exists() {
        return Err(Error::config(format!(
            "Config file does not exist at {}. Run `retroblog config init` first.",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(&path)?;
    let mut doc: toml::Value = toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;

    set_nested_value(&mut doc, key, parse_value(value))?;

    // Refuse to write a file that would no longer load.
    let updated: RetroblogConfig = doc
        .clone()
        .try_into()
        .map_err(|e| Error::config(format!("Invalid value for {key}: {e}")))?;
    updated.validate()?;

    let toml_str = toml::to_string_pretty(&doc).map_err(|e| Error::config(e.to_string()))?;
    std::fs::write(&path, toml_str)?;

    println!("Set {key} = {value} in {}", path.display());
    Ok(())
}

fn cmd_config_init(file: Option<&str>, force: bool) -> Result<()> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => RetroblogConfig::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml_str = RetroblogConfig::default().to_toml_string()?;
    std::fs::write(&path, &toml_str)?;

    println!("Config file created at {}", path.display());
    Ok(())
}

fn cmd_config_export(config: &RetroblogConfig, docker_env: bool) -> Result<()> {
    for (key, value) in config.to_env_vars()? {
        if docker_env {
            println!("--env {key}={value}");
        } else {
            println!("{key}={value}");
        }
    }
    Ok(())
}

// ============================================================================
// TOML dotted-key helpers
// ============================================================================

/// Look up a dotted key in a loaded config and format it for stdout.
fn config_value(config: &RetroblogConfig, key: &str) -> Result<String> {
    let value = toml::Value::try_from(config).map_err(|e| Error::config(e.to_string()))?;
    get_nested_value(&value, key)
        .map(format_toml_value)
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))
}

/// Navigate a dotted key path in a TOML value tree.
fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    let mut current = value;
    for part in key.split('.') {
        current = current.as_table()?.get(part)?;
    }
    Some(current)
}

/// Set a value at a dotted key path, creating intermediate tables as needed.
fn set_nested_value(root: &mut toml::Value, key: &str, value: toml::Value) -> Result<()> {
    let (parents, leaf) = match key.rsplit_once('.') {
        Some((parents, leaf)) => (Some(parents), leaf),
        None => (None, key),
    };
    if leaf.is_empty() {
        return Err(Error::config("Empty key path"));
    }

    let mut current = root;
    for part in parents.into_iter().flat_map(|p| p.split('.')) {
        let table = current
            .as_table_mut()
            .ok_or_else(|| Error::config("Cannot navigate into a non-table value"))?;
        current = table
            .entry(part.to_string())
            .or_insert(toml::Value::Table(toml::map::Map::new()));
    }

    current
        .as_table_mut()
        .ok_or_else(|| Error::config("Cannot set key on a non-table value"))?
        .insert(leaf.to_string(), value);
    Ok(())
}

/// Parse a string value into a TOML value, auto-detecting the type.
///
/// Priority: bool → integer → float → string.
fn parse_value(s: &str) -> toml::Value {
    match s {
        "true" => return toml::Value::Boolean(true),
        "false" => return toml::Value::Boolean(false),
        _ => {}
    }
    if let Ok(i) = s.parse::<i64>() {
        return toml::Value::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return toml::Value::Float(f);
    }
    toml::Value::String(s.to_string())
}

/// Format a TOML value for display on stdout.
fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn write_default(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, RetroblogConfig::default().to_toml_string().unwrap()).unwrap();
        path
    }

    #[test]
    fn test_cmd_config_path_explicit() {
        assert!(cmd_config_path(Some("/explicit/config.toml")).is_ok());
    }

    #[test]
    fn test_config_value_nested_key() {
        let config = RetroblogConfig::default();
        assert_eq!(config_value(&config, "site.listing_path").unwrap(), "/blog");
        assert_eq!(config_value(&config, "output.format").unwrap(), "text");
    }

    #[test]
    fn test_config_value_missing_key() {
        let err = config_value(&RetroblogConfig::default(), "nonexistent.key").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_cmd_config_get_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_default(&dir);
        assert!(cmd_config_get(Some(path.to_str().unwrap()), "project_name").is_ok());
    }

    #[test]
    fn test_cmd_config_set_nested_key() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_default(&dir);

        cmd_config_set(Some(path.to_str().unwrap()), "output.format", "json").unwrap();

        let loaded = RetroblogConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(loaded.output.format, crate::config::OutputFormat::Json);
    }

    #[test]
    fn test_cmd_config_set_rejects_bad_format() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_default(&dir);

        let result = cmd_config_set(Some(path.to_str().unwrap()), "output.format", "yaml");
        assert!(result.is_err());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("format = \"text\""));
    }

    #[test]
    fn test_cmd_config_set_rejects_relative_listing_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_default(&dir);
        let result = cmd_config_set(Some(path.to_str().unwrap()), "site.listing_path", "blog");
        assert!(result.is_err());
    }

    #[test]
    fn test_cmd_config_set_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        let err = cmd_config_set(Some(path.to_str().unwrap()), "project_name", "x").unwrap_err();
        assert!(err.to_string().contains("config init"));
    }

    #[test]
    fn test_cmd_config_init_creates_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        cmd_config_init(Some(path.to_str().unwrap()), false).unwrap();
        assert!(path.exists());

        let err = cmd_config_init(Some(path.to_str().unwrap()), false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert!(cmd_config_init(Some(path.to_str().unwrap()), true).is_ok());
    }

    #[test]
    fn test_set_nested_value_creates_tables() {
        let mut doc = toml::Value::Table(toml::map::Map::new());
        set_nested_value(&mut doc, "a.b.c", toml::Value::Integer(1)).unwrap();
        assert_eq!(
            get_nested_value(&doc, "a.b.c"),
            Some(&toml::Value::Integer(1))
        );
    }

    #[test]
    fn test_set_nested_value_through_scalar_fails() {
        let mut doc: toml::Value = toml::from_str("a = 1").unwrap();
        assert!(set_nested_value(&mut doc, "a.b", toml::Value::Integer(2)).is_err());
    }

    #[test]
    fn test_set_nested_value_empty_leaf() {
        let mut doc = toml::Value::Table(toml::map::Map::new());
        assert!(set_nested_value(&mut doc, "a.", toml::Value::Integer(1)).is_err());
    }

    #[test]
    fn test_parse_value_types() {
        assert_eq!(parse_value("true"), toml::Value::Boolean(true));
        assert_eq!(parse_value("42"), toml::Value::Integer(42));
        assert_eq!(parse_value("1.5"), toml::Value::Float(1.5));
        assert_eq!(parse_value("/blog"), toml::Value::String("/blog".into()));
    }

    #[test]
    fn test_format_toml_value_scalars() {
        assert_eq!(format_toml_value(&toml::Value::String("x".into())), "x");
        assert_eq!(format_toml_value(&toml::Value::Boolean(false)), "false");
    }
}
