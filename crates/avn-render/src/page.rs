//! Page containers that rendered fragments are written into.

use std::collections::BTreeMap;

/// A page whose elements can be addressed by id.
pub trait Document {
    /// Whether an element with `id` exists.
    fn has_container(&self, id: &str) -> bool;

    /// Replace the content of element `id` with `html`.
    ///
    /// Returns `false`, changing nothing, when no such element exists.
    fn replace_content(&mut self, id: &str, html: &str) -> bool;
}

/// In-memory [`Document`]: a set of named containers and their content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    containers: BTreeMap<String, String>,
}

impl Page {
    /// A page with no containers.
    pub const fn new() -> Self {
        Self {
            containers: BTreeMap::new(),
        }
    }

    /// A page with the given empty containers.
    pub fn with_containers<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            containers: ids.into_iter().map(|id| (id.into(), String::new())).collect(),
        }
    }

    /// Add an empty container, keeping existing content if it is already there.
    pub fn add_container(&mut self, id: impl Into<String>) {
        self.containers.entry(id.into()).or_default();
    }

    /// Current content of container `id`.
    pub fn content(&self, id: &str) -> Option<&str> {
        self.containers.get(id).map(String::as_str)
    }
}

impl Document for Page {
    fn has_container(&self, id: &str) -> bool {
        self.containers.contains_key(id)
    }

    fn replace_content(&mut self, id: &str, html: &str) -> bool {
        match self.containers.get_mut(id) {
            Some(slot) => {
                html.clone_into(slot);
                true
            }
            None => false,
        }
    }
}
