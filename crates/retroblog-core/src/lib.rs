//! Retroblog Core — shared types, traits, and errors.
//!
//! This crate provides the foundational types used across all Retroblog
//! crates. It has no internal Retroblog dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`record`]: The content record and its opaque payload types
//! - [`traits`]: Extension points for content sources and site configuration

#![doc = include_str!("../README.md")]

pub mod error;
pub mod record;
pub mod traits;

// Re-export key types at crate root for convenience
pub use error::{Error, IdentifierKind, Result};
pub use record::{ContentRecord, Faq, Markup, StructuredData};
pub use traits::{ContentSource, SiteConfig};
