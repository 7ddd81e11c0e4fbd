//! Article catalog and search filter for Retroblog.
//!
//! # Modules
//!
//! - [`catalog`]: The ordered, immutable record collection and its builder
//! - [`filter`]: Case-insensitive, order-preserving title/keyword filter
//! - [`source`]: TOML-authored content sources
//! - [`builtin`]: The compiled-in catalog
//!
//! # Example
//!
//! ```
//! use retroblog_catalog::{filter, Catalog};
//! use retroblog_core::ContentRecord;
//!
//! let catalog = Catalog::builder()
//!     .record(
//!         ContentRecord::new("1", "start-stop-continue", "Start Stop Continue", "s", "<p/>")
//!             .with_keywords("templates, agile"),
//!     )
//!     .record(
//!         ContentRecord::new("2", "remote-icebreakers", "Remote Icebreakers", "r", "<p/>")
//!             .with_keywords("remote, zoom"),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let hits = filter("REMOTE", catalog.all());
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].title, "Remote Icebreakers");
//! ```

#![doc = include_str!("../README.md")]

pub mod builtin;
pub mod catalog;
pub mod filter;
pub mod source;

pub use builtin::builtin;
pub use catalog::{Catalog, CatalogBuilder};
pub use filter::{SearchFilter, filter};
pub use source::TomlSource;
