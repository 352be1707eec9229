//! bibleviz-cli
//! ============
//!
//! Command-line interface for the `bibleviz-core` map overlay toolkit.
//!
//! This crate primarily provides a binary (`bibleviz-cli`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Basic usage:
//!
//! ```text
//! bibleviz-cli --help
//! bibleviz-cli edges --pretty
//! bibleviz-cli --features cache.json search dav
//! bibleviz-cli --style ancestry-style.json plan "Tribe of Levi"
//! bibleviz-cli route second
//! ```
//!
//! For programmatic access use the [`bibleviz-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
