//! Dataset catalog types mirroring the backend `/datasets` payload.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Dataset record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRecord {
    pub name: String,
    pub provider: String,
    pub coverage: String,
    pub preview_url: String,
    pub api_url: String,
    /// Older backends omit the columns link.
    #[serde(default)]
    pub columns_url: String,
}

impl DatasetRecord {
    /// Case-insensitive substring match over name, provider and coverage.
    /// An empty (or whitespace-only) needle matches everything; otherwise the
    /// needle is matched as typed, surrounding spaces included.
    pub fn matches(&self, needle: &str) -> bool {
        if needle.trim().is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        [&self.name, &self.provider, &self.coverage]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Domain key → dataset record, in the order the backend sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatasetCatalog {
    entries: IndexMap<String, DatasetRecord>,
}

impl DatasetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, domain: impl Into<String>, record: DatasetRecord) {
        self.entries.insert(domain.into(), record);
    }

    pub fn get(&self, domain: &str) -> Option<&DatasetRecord> {
        self.entries.get(domain)
    }

    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DatasetRecord)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, DatasetRecord)> for DatasetCatalog {
    fn from_iter<I: IntoIterator<Item = (String, DatasetRecord)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}
