//! Backend traits consumed by the search session and the data hub.

use async_trait::async_trait;

use seascope_common::{DatasetCatalog, ImageFile, Result};

use crate::wire::{AiSearchResponse, ClassifyResponse, DataPage, DataRow, PageQuery};

/// The two search capabilities of the landing page.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// `POST /ai-search` with `{query}`.
    async fn ai_search(&self, query: &str) -> Result<AiSearchResponse>;

    /// `POST /classify-image` with the image as multipart field `file`.
    async fn classify_image(&self, image: &ImageFile) -> Result<ClassifyResponse>;
}

/// Dataset catalog and exploration endpoints used by the data hub.
#[async_trait]
pub trait CatalogBackend: Send + Sync {
    /// `GET /datasets`.
    async fn list_datasets(&self) -> Result<DatasetCatalog>;

    /// `GET /preview/{domain}?n=`: the first `rows` rows.
    async fn preview(&self, domain: &str, rows: u32) -> Result<Vec<DataRow>>;

    /// `GET /columns/{domain}`.
    async fn columns(&self, domain: &str) -> Result<Vec<String>>;

    /// `GET /data/{domain}?limit=&offset=`.
    async fn data_page(&self, domain: &str, page: PageQuery) -> Result<DataPage>;
}
