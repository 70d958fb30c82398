//! The content store: events and articles over a [`KvStore`].
//!
//! Collections are read whole, changed, and written back whole. Existing
//! entries are carried through as raw JSON so an append never rewrites a
//! record the typed model cannot fully represent.

use std::collections::HashSet;

use avn_types::de::id_text;
use avn_types::{Article, Event, Theme};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::StoreError;
use crate::kv::KvStore;
use crate::naming::{FEATURED_IMAGE_FIELD, assign_featured_image, image_text, next_article_index};
use crate::seed::{default_articles, default_events};

/// Key of the event collection.
pub const EVENTS_KEY: &str = "avnEvents";

/// Key of the article collection.
pub const ARTICLES_KEY: &str = "avnArticles";

/// Key of the colour scheme preference.
pub const THEME_KEY: &str = "theme";

/// Ids inserted by a seeding pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Event ids that were missing and have been added.
    pub events_added: Vec<String>,
    /// Article ids that were missing and have been added.
    pub articles_added: Vec<String>,
}

impl SeedReport {
    /// Whether the pass added nothing.
    pub fn is_empty(&self) -> bool {
        self.events_added.is_empty() && self.articles_added.is_empty()
    }
}

/// Events and articles persisted in a [`KvStore`].
#[derive(Debug)]
pub struct ContentStore<S> {
    kv: S,
}

impl<S: KvStore> ContentStore<S> {
    /// Wrap a key-value backend.
    pub const fn new(kv: S) -> Self {
        Self { kv }
    }

    /// The underlying backend.
    pub const fn kv(&self) -> &S {
        &self.kv
    }

    /// Give back the underlying backend.
    pub fn into_inner(self) -> S {
        self.kv
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Append `event` to the event collection.
    ///
    /// See [`Self::append_event_value`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the event cannot be encoded or the write fails.
    pub fn append_event(&mut self, event: &Event) -> Result<(), StoreError> {
        self.append_event_value(serde_json::to_value(event)?)
    }

    /// Append a raw event record exactly as given.
    ///
    /// No fields are checked, converted or filled in, so values the typed
    /// model would not accept are stored unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the write fails.
    pub fn append_event_value(&mut self, event: Value) -> Result<(), StoreError> {
        let id = event.get("id").and_then(id_text).unwrap_or_default();
        let mut events = self.read_collection(EVENTS_KEY);
        events.push(event);
        self.write_collection(EVENTS_KEY, &events)?;
        tracing::info!(id = id.as_str(), "event saved");
        Ok(())
    }

    /// All stored events in insertion order.
    ///
    /// Entries that are not JSON objects are skipped.
    pub fn events(&self) -> Vec<Event> {
        decode_entries(EVENTS_KEY, self.read_collection(EVENTS_KEY))
    }

    // =========================================================================
    // Articles
    // =========================================================================

    /// Append `article`, normalising its `featuredImage` first.
    ///
    /// See [`Self::append_article_value`]. Returns the record as stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the article cannot be encoded or the write fails.
    pub fn append_article(&mut self, article: Article) -> Result<Article, StoreError> {
        let stored = self.append_article_value(serde_json::to_value(&article)?)?;
        Ok(serde_json::from_value(stored)?)
    }

    /// Append a raw article record, normalising its `featuredImage` first.
    ///
    /// The image number is one more than the highest `article<N>.jpg` among
    /// the articles stored right now. Only `featuredImage`, `_imageData` and
    /// `_originalImage` are rewritten; every other field is stored as given.
    /// Returns the record as stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the write fails.
    pub fn append_article_value(&mut self, mut article: Value) -> Result<Value, StoreError> {
        let mut articles = self.read_collection(ARTICLES_KEY);

        let existing: Vec<String> = articles
            .iter()
            .filter_map(|a| a.get(FEATURED_IMAGE_FIELD))
            .filter_map(image_text)
            .collect();
        let next_index = next_article_index(existing.iter().map(String::as_str));

        let assignment = match &mut article {
            Value::Object(record) => Some(assign_featured_image(record, next_index)),
            _ => {
                tracing::debug!("article is not an object, storing unchanged");
                None
            }
        };

        articles.push(article.clone());
        self.write_collection(ARTICLES_KEY, &articles)?;

        tracing::info!(
            id = %article.get("id").and_then(id_text).unwrap_or_default(),
            featured_image = article
                .get(FEATURED_IMAGE_FIELD)
                .and_then(serde_json::Value::as_str)
                .unwrap_or_default(),
            ?assignment,
            "article saved"
        );
        Ok(article)
    }

    /// All stored articles in insertion order.
    ///
    /// Entries that are not JSON objects are skipped.
    pub fn articles(&self) -> Vec<Article> {
        decode_entries(ARTICLES_KEY, self.read_collection(ARTICLES_KEY))
    }

    // =========================================================================
    // Seeding
    // =========================================================================

    /// Insert the canned events and articles that are not stored yet.
    ///
    /// See [`Self::seed_defaults_at`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if a write fails.
    pub fn seed_defaults(&mut self) -> Result<SeedReport, StoreError> {
        self.seed_defaults_at(Utc::now())
    }

    /// Insert the canned records whose id is not already present, stamping
    /// new ones with `now`.
    ///
    /// Ids compare as strings, so a stored numeric id `1` matches `"1"`.
    /// Existing entries are never modified, and a collection is only written
    /// when something was added. Running this twice leaves exactly one entry
    /// per canned id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if a write fails.
    pub fn seed_defaults_at(&mut self, now: DateTime<Utc>) -> Result<SeedReport, StoreError> {
        let created_at = now.to_rfc3339_opts(SecondsFormat::Millis, true);

        let events_added =
            self.seed_collection(EVENTS_KEY, default_events(&created_at), |e: &Event| {
                e.id.clone()
            })?;
        let articles_added =
            self.seed_collection(ARTICLES_KEY, default_articles(&created_at), |a: &Article| {
                a.id.clone()
            })?;

        let report = SeedReport {
            events_added,
            articles_added,
        };
        if report.is_empty() {
            tracing::debug!("seed content already present");
        }
        Ok(report)
    }

    fn seed_collection<T, F>(
        &mut self,
        key: &str,
        candidates: Vec<T>,
        id_of: F,
    ) -> Result<Vec<String>, StoreError>
    where
        T: Serialize,
        F: Fn(&T) -> Option<String>,
    {
        let mut entries = self.read_collection(key);
        let mut present: HashSet<String> = entries
            .iter()
            .filter_map(|entry| entry.get("id"))
            .filter_map(id_text)
            .collect();

        let mut added = Vec::new();
        for candidate in candidates {
            let Some(id) = id_of(&candidate) else {
                continue;
            };
            if !present.insert(id.clone()) {
                continue;
            }
            entries.push(serde_json::to_value(&candidate)?);
            added.push(id);
        }

        if !added.is_empty() {
            self.write_collection(key, &entries)?;
            tracing::info!(collection = key, ids = ?added, "seed content added");
        }
        Ok(added)
    }

    // =========================================================================
    // Theme
    // =========================================================================

    /// The saved colour scheme, if one was saved and is recognised.
    pub fn theme(&self) -> Option<Theme> {
        self.kv.get(THEME_KEY).and_then(|raw| raw.parse().ok())
    }

    /// Persist the colour scheme preference.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the write fails.
    pub fn set_theme(&mut self, theme: Theme) -> Result<(), StoreError> {
        self.kv.set(THEME_KEY, theme.as_str())
    }

    // =========================================================================
    // Raw collection access
    // =========================================================================

    /// Read a collection as raw JSON entries. Absent, undecodable or
    /// non-array values read as empty.
    fn read_collection(&self, key: &str) -> Vec<Value> {
        let Some(raw) = self.kv.get(key) else {
            return Vec::new();
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(entries)) => entries,
            Ok(Value::Null) => Vec::new(),
            Ok(_) => {
                tracing::warn!(collection = key, "stored collection is not an array, treating as empty");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(collection = key, error = %e, "stored collection is not valid JSON, treating as empty");
                Vec::new()
            }
        }
    }

    fn write_collection(&mut self, key: &str, entries: &[Value]) -> Result<(), StoreError> {
        let json = serde_json::to_string(entries)?;
        self.kv.set(key, &json)
    }
}

fn decode_entries<T: DeserializeOwned>(key: &str, entries: Vec<Value>) -> Vec<T> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::debug!(collection = key, index, error = %e, "skipping undecodable entry");
                None
            }
        })
        .collect()
}
