//! Command-line front end for the Retroblog catalog.
//!
//! # Key Abstractions
//!
//! - [`RetroblogCli`]: loads config, sets up logging, dispatches commands
//! - [`RetroblogConfig`]: file/env/default configuration via `confyg`
//! - [`output`]: text and JSON formatting of page models

#![doc = include_str!("../README.md")]

pub mod app;
pub mod cli;
pub mod config;
pub mod config_handlers;
pub mod output;

pub use app::RetroblogCli;
pub use cli::{CliArgs, Command, ConfigAction, ConfigCommand};
pub use config::{OutputFormat, RetroblogConfig};
