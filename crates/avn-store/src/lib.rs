//! Content store for the AVN club site.
//!
//! Events and articles live as JSON-encoded arrays in a string key-value
//! store (the browser's local storage on the live site). Every operation is a
//! full read-modify-write of one collection with no locking; the last writer
//! wins.
//!
//! # Layout
//!
//! | Key | Value |
//! |-----|-------|
//! | `avnEvents` | JSON array of [`avn_types::Event`] |
//! | `avnArticles` | JSON array of [`avn_types::Article`] |
//! | `theme` | `light` or `dark` |
//!
//! # Modules
//!
//! - [`kv`] -- The [`KvStore`] interface and the in-memory backend
//! - [`file`] -- JSON-file backend for the operator tooling
//! - [`content`] -- [`ContentStore`]: append, seed, load
//! - [`naming`] -- Sequential `assets/article<N>.jpg` image naming
//! - [`seed`] -- Canned sample events and articles
//! - [`query`] -- Event filters, upcoming selection, countdown target
//! - [`error`] -- Shared error type

pub mod content;
pub mod error;
pub mod file;
pub mod kv;
pub mod naming;
pub mod query;
pub mod seed;

pub use content::{ARTICLES_KEY, ContentStore, EVENTS_KEY, SeedReport, THEME_KEY};
pub use error::StoreError;
pub use file::FileStore;
pub use kv::{KvStore, MemoryStore};
pub use query::EventFilter;
