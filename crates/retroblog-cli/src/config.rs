//! Configuration for the Retroblog CLI.
//!
//! Provides the [`RetroblogConfig`] struct that loads from TOML files,
//! environment variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `RETROBLOG_CONFIG` environment variable
//! 3. XDG default: `~/.config/retroblog/config.toml`
//! 4. Built-in defaults

use confyg::{Confygery, env};
use retroblog_core::{Error, Result, SiteConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for the Retroblog CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetroblogConfig {
    /// Project name, shown by `version` and used in messages.
    pub project_name: String,

    /// Site layout.
    pub site: SiteSection,

    /// Output settings.
    pub output: OutputConfig,
}

/// Where pages live on the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Path of the listing page; article pages live beneath it.
    pub listing_path: String,
}

/// Output configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// How commands print their results.
    pub format: OutputFormat,
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON page models.
    Json,
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for RetroblogConfig {
    fn default() -> Self {
        Self {
            project_name: "retroblog".to_string(),
            site: SiteSection::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            listing_path: "/blog".to_string(),
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl RetroblogConfig {
    /// Load configuration from file, environment, and defaults.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let mut env_opts = env::Options::with_top_level("RETROBLOG");
        env_opts.add_section("site");
        env_opts.add_section("output");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would produce broken links.
    pub fn validate(&self) -> Result<()> {
        if !self.site.listing_path.starts_with('/') {
            return Err(Error::config(format!(
                "site.listing_path must start with '/', got '{}'",
                self.site.listing_path
            )));
        }
        Ok(())
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var("RETROBLOG_CONFIG") {
            return Some(PathBuf::from(path));
        }

        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("retroblog").join("config.toml"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Flatten this config into environment variable pairs with `RETROBLOG_` prefix.
    pub fn to_env_vars(&self) -> Result<Vec<(String, String)>> {
        let value: toml::Value =
            toml::Value::try_from(self).map_err(|e| Error::config(e.to_string()))?;
        let mut vars = Vec::new();
        flatten_toml_value(&value, "RETROBLOG", &mut vars);
        Ok(vars)
    }
}

impl SiteConfig for RetroblogConfig {
    fn listing_path(&self) -> &str {
        &self.site.listing_path
    }
}

// ============================================================================
// Helper: flatten TOML to env vars
// ============================================================================

/// Recursively flatten a TOML value into `KEY=value` pairs.
fn flatten_toml_value(value: &toml::Value, prefix: &str, out: &mut Vec<(String, String)>) {
    match value {
        toml::Value::Table(table) => {
            for (key, val) in table {
                let env_key = format!("{}_{}", prefix, key.to_uppercase());
                flatten_toml_value(val, &env_key, out);
            }
        }
        toml::Value::Array(arr) => {
            if let Ok(json) = serde_json::to_string(arr) {
                out.push((prefix.to_string(), json));
            }
        }
        toml::Value::String(s) => out.push((prefix.to_string(), s.clone())),
        toml::Value::Integer(i) => out.push((prefix.to_string(), i.to_string())),
        toml::Value::Float(f) => out.push((prefix.to_string(), f.to_string())),
        toml::Value::Boolean(b) => out.push((prefix.to_string(), b.to_string())),
        toml::Value::Datetime(dt) => out.push((prefix.to_string(), dt.to_string())),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_retroblog_config_default() {
        let config = RetroblogConfig::default();
        assert_eq!(config.project_name, "retroblog");
        assert_eq!(config.site.listing_path, "/blog");
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_retroblog_config_from_toml() {
        let toml_str = r#"
            project_name = "team-blog"

            [site]
            listing_path = "/resources/blog"

            [output]
            format = "json"
        "#;

        let config: RetroblogConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.project_name, "team-blog");
        assert_eq!(config.site.listing_path, "/resources/blog");
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_retroblog_config_partial_toml_uses_defaults() {
        let config: RetroblogConfig = toml::from_str("project_name = \"x\"").unwrap();
        assert_eq!(config.site.listing_path, "/blog");
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_retroblog_config_to_toml_round_trip() {
        let config = RetroblogConfig::default();
        let toml_str = config.to_toml_string().unwrap();
        assert!(toml_str.contains("project_name = \"retroblog\""));
        assert!(toml_str.contains("[site]"));

        let parsed: RetroblogConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.site.listing_path, config.site.listing_path);
        assert_eq!(parsed.output.format, config.output.format);
    }

    #[test]
    fn test_retroblog_config_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
                project_name = "loaded"
                [site]
                listing_path = "/articles"
            "#,
        )
        .unwrap();

        let config = RetroblogConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.project_name, "loaded");
        assert_eq!(config.site.listing_path, "/articles");
    }

    #[test]
    fn test_retroblog_config_load_defaults() {
        let config = RetroblogConfig::load(Some("/nonexistent/config.toml")).unwrap();
        assert_eq!(config.project_name, "retroblog");
        assert_eq!(config.site.listing_path, "/blog");
    }

    #[test]
    fn test_retroblog_config_rejects_relative_listing_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[site]\nlisting_path = \"blog\"\n").unwrap();

        let err = RetroblogConfig::load(Some(path.to_str().unwrap())).unwrap_err();
        assert!(err.to_string().contains("listing_path"));
    }

    #[test]
    fn test_resolve_config_path_explicit() {
        let path = RetroblogConfig::resolve_config_path(Some("/explicit/config.toml"));
        assert_eq!(path, Some(PathBuf::from("/explicit/config.toml")));
    }

    #[test]
    fn test_site_config_article_path() {
        let config = RetroblogConfig::default();
        assert_eq!(config.listing_path(), "/blog");
        assert_eq!(config.article_path("remote-icebreakers"), "/blog/remote-icebreakers");
    }

    #[test]
    fn test_retroblog_config_to_env_vars() {
        let config = RetroblogConfig::default();
        let vars = config.to_env_vars().unwrap();
        let map: HashMap<_, _> = vars.into_iter().collect();
        assert_eq!(map.get("RETROBLOG_PROJECT_NAME").unwrap(), "retroblog");
        assert_eq!(map.get("RETROBLOG_SITE_LISTING_PATH").unwrap(), "/blog");
        assert_eq!(map.get("RETROBLOG_OUTPUT_FORMAT").unwrap(), "text");
    }

    #[test]
    fn test_retroblog_config_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RetroblogConfig>();
    }
}
