//! Data hub: loads the catalog once and serves filtered views of it.

use tracing::{debug, info, warn};

use seascope_client::CatalogBackend;
use seascope_common::{DatasetCatalog, DatasetRecord};

use crate::filter::{visible_records, FilterState};

/// Catalog lifecycle. Nothing is visible until the fetch has finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogLoad {
    Loading,
    Ready(DatasetCatalog),
    /// The fetch failed; the hub behaves as if the catalog were empty.
    Failed { message: String },
}

/// One tab of the domain switcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainTab {
    pub key: String,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct DataHub {
    load: CatalogLoad,
    filter: FilterState,
}

impl Default for DataHub {
    fn default() -> Self {
        Self::new()
    }
}

impl DataHub {
    pub fn new() -> Self {
        Self::with_filter(FilterState::default())
    }

    pub fn with_filter(filter: FilterState) -> Self {
        Self { load: CatalogLoad::Loading, filter }
    }

    /// Fetch the catalog. Only the first call reaches the backend; later calls
    /// return the settled state unchanged.
    pub async fn load(&mut self, backend: &dyn CatalogBackend) -> &CatalogLoad {
        if !self.is_loading() {
            debug!("catalog already loaded, skipping fetch");
            return &self.load;
        }
        self.load = match backend.list_datasets().await {
            Ok(catalog) => {
                info!(domains = catalog.len(), "dataset catalog loaded");
                CatalogLoad::Ready(catalog)
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch datasets");
                CatalogLoad::Failed { message: e.to_string() }
            }
        };
        &self.load
    }

    pub fn state(&self) -> &CatalogLoad {
        &self.load
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, CatalogLoad::Loading)
    }

    pub fn catalog(&self) -> Option<&DatasetCatalog> {
        match &self.load {
            CatalogLoad::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn select_domain(&mut self, domain: impl Into<String>) {
        self.filter.active_domain = domain.into();
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.filter.search_text = text.into();
    }

    pub fn clear_search(&mut self) {
        self.filter.search_text.clear();
    }

    pub fn visible_records(&self) -> Vec<&DatasetRecord> {
        match self.catalog() {
            Some(catalog) => visible_records(catalog, &self.filter),
            None => Vec::new(),
        }
    }

    /// Domain tabs in catalog order.
    pub fn tabs(&self) -> Vec<DomainTab> {
        self.catalog()
            .map(|catalog| {
                catalog
                    .domains()
                    .map(|key| DomainTab { key: key.to_string(), label: domain_label(key) })
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// `"fisheries"` → `"Fisheries"`.
pub fn domain_label(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
