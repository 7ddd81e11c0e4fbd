//! The compiled-in catalog.
//!
//! Content lives in `content/*.toml` next to this crate and is embedded at
//! compile time. The documents are concatenated in the order listed in
//! [`SOURCES`]; within each document, `[[article]]` order is kept.

use std::sync::OnceLock;

use retroblog_core::Result;

use crate::{Catalog, TomlSource};

/// Authored documents, in editorial order.
pub const SOURCES: &[(&str, &str)] = &[
    (
        "retrospectives.toml",
        include_str!("../content/retrospectives.toml"),
    ),
    ("remote.toml", include_str!("../content/remote.toml")),
    ("facilitation.toml", include_str!("../content/facilitation.toml")),
];

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Assemble a fresh catalog from [`SOURCES`].
///
/// # Errors
///
/// Any source, validation, or duplicate-identifier error; all are fatal.
pub fn build_builtin() -> Result<Catalog> {
    SOURCES
        .iter()
        .fold(Catalog::builder(), |builder, &(name, text)| {
            builder.source(TomlSource::new(name, text))
        })
        .build()
}

/// The process-wide compiled-in catalog, built on first use.
///
/// # Errors
///
/// Returns the build error if the embedded content is inconsistent. The
/// caller should refuse to start.
pub fn builtin() -> Result<&'static Catalog> {
    if let Some(catalog) = CATALOG.get() {
        return Ok(catalog);
    }
    let catalog = build_builtin()?;
    Ok(CATALOG.get_or_init(|| catalog))
}
