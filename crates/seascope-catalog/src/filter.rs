//! Filter state over a loaded catalog.

use seascope_common::{DatasetCatalog, DatasetRecord};

/// Tab selected when the data hub opens.
pub const DEFAULT_DOMAIN: &str = "oceanographic";

/// User-controlled filter inputs. Only user actions change it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub active_domain: String,
    pub search_text: String,
}

impl FilterState {
    pub fn new(active_domain: impl Into<String>) -> Self {
        Self { active_domain: active_domain.into(), search_text: String::new() }
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(DEFAULT_DOMAIN)
    }
}

/// Records of the active domain matching the search text.
///
/// Each domain holds a single record, so the result has at most one element.
/// An unknown domain yields an empty list.
pub fn visible_records<'a>(catalog: &'a DatasetCatalog, filter: &FilterState) -> Vec<&'a DatasetRecord> {
    catalog
        .get(&filter.active_domain)
        .filter(|record| record.matches(&filter.search_text))
        .into_iter()
        .collect()
}
