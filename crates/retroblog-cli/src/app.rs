//! RetroblogCli application.
//!
//! Wires configuration, logging, the compiled-in catalog, and the renderer
//! behind the commands defined in [`crate::cli`].

use crate::cli::{CliArgs, Command};
use crate::config::RetroblogConfig;
use crate::{config_handlers, output};
use retroblog_catalog::{Catalog, builtin};
use retroblog_core::Result;
use retroblog_render::{ArticleProvider, Lookup, Renderer, StructuredDataTag};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

// ============================================================================
// RetroblogCli
// ============================================================================

/// The command-line application.
pub struct RetroblogCli {
    name: String,
    config: RetroblogConfig,
    version: String,
}

impl RetroblogCli {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(name: impl Into<String>, args: &CliArgs) -> Result<Self> {
        let config = RetroblogConfig::load(args.config.as_deref())?;
        Ok(Self::new(name, config))
    }

    /// Create a new CLI application.
    pub fn new(name: impl Into<String>, config: RetroblogConfig) -> Self {
        Self {
            name: name.into(),
            config,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Override the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Get a reference to the loaded configuration.
    pub fn config(&self) -> &RetroblogConfig {
        &self.config
    }

    /// Initialise tracing-based logging.
    ///
    /// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity
    /// flags. Library crates log through `log`; those records are forwarded.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // Ignore error if a subscriber is already set (e.g. in tests).
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Run the CLI with the given arguments.
    pub fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);

        match args.command {
            Some(Command::Version) => {
                println!("{} {}", self.name, self.version);
                Ok(())
            }
            Some(Command::Config(config_cmd)) => {
                config_handlers::handle_config_command(args.config.as_deref(), config_cmd.command)
            }
            Some(command) => {
                let catalog = builtin()?;
                println!("{}", self.execute(catalog, command)?);
                Ok(())
            }
            None => {
                println!("{} {}: use --help for usage", self.name, self.version);
                Ok(())
            }
        }
    }

    /// Run a catalog command and return what it prints.
    pub fn execute(&self, catalog: &Catalog, command: Command) -> Result<String> {
        let renderer = Renderer::new(catalog, self.config.clone());
        let format = self.config.output.format;

        match command {
            Command::List { query } => {
                let page = renderer.listing(&query)?;
                debug!(query = %query, matches = page.cards.len(), "listing rendered");
                output::listing(&page, format)
            }
            Command::Show { slug } => {
                let lookup = renderer.detail(&slug)?;
                if !lookup.is_found() {
                    info!(slug = %slug, "article not found");
                }
                output::detail(&lookup, format)
            }
            Command::Head { slug } => match renderer.detail(&slug)? {
                Lookup::Found(page) => Ok(page
                    .structured_data
                    .as_ref()
                    .map(StructuredDataTag::to_html)
                    .unwrap_or_default()),
                not_found @ Lookup::NotFound(_) => output::detail(&not_found, format),
            },
            Command::Check => self.check(catalog),
            Command::Version | Command::Config(_) => Ok(String::new()),
        }
    }

    fn check(&self, catalog: &Catalog) -> Result<String> {
        let total = catalog.count()?;
        let with_faqs = catalog.iter().filter(|r| !r.faqs.is_empty()).count();
        let with_metadata = catalog
            .iter()
            .filter(|r| r.structured_data.is_some())
            .count();
        let with_hero = catalog.iter().filter(|r| r.has_hero_image()).count();
        info!(total, "catalog ok");
        Ok(format!(
            "{}: {} {} ({} with FAQs, {} with structured data, {} with hero images)",
            self.config.project_name,
            total,
            catalog.content_type_name_plural(),
            with_faqs,
            with_metadata,
            with_hero
        ))
    }
}

// ============================================================================
// Tests
// ============================================================================
