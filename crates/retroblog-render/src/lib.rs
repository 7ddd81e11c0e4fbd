//! Rendering contract between the Retroblog catalog and the page layer.
//!
//! # Key Abstractions
//!
//! - [`views`]: per-record projections (preview card, detail view, FAQ
//!   block, structured-data tag)
//! - [`pages`]: listing, detail, and not-found page models plus the
//!   [`Renderer`] that builds them
//! - [`traits`]: the [`ArticleProvider`] listing/lookup trait

#![doc = include_str!("../README.md")]

pub mod pages;
pub mod traits;
pub mod views;

pub use pages::{DetailPage, ListingPage, Lookup, NotFoundPage, Renderer};
pub use traits::ArticleProvider;
pub use views::{DetailView, FaqBlock, PreviewCard, StructuredDataTag};
