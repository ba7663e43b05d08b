//! reqwest client for the ocean data backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

use seascope_common::{DatasetCatalog, ImageFile, Result, SeascopeError};

use crate::backend::{CatalogBackend, SearchBackend};
use crate::wire::{
    error_detail, AiSearchRequest, AiSearchResponse, ClassifyResponse, DataPage, DataRow,
    HealthStatus, ModelStatus, PageQuery,
};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP backend rooted at a base URL (e.g. `http://localhost:8000`).
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: Url,
    client: Client,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(SeascopeError::Config(format!(
                "backend URL cannot carry paths: {base_url}"
            )));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SeascopeError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL with `segments` appended, each percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SeascopeError::Config(format!("invalid backend URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `GET /`: liveness probe.
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<HealthStatus> {
        let resp = self.client.get(self.base_url.clone()).send().await?;
        read_json(resp).await
    }

    /// `GET /models/status`.
    #[instrument(skip(self))]
    pub async fn model_status(&self) -> Result<ModelStatus> {
        let url = self.endpoint(&["models", "status"])?;
        let resp = self.client.get(url).send().await?;
        read_json(resp).await
    }
}

#[async_trait]
impl SearchBackend for HttpBackend {
    #[instrument(skip(self, query), fields(query_len = query.len()))]
    async fn ai_search(&self, query: &str) -> Result<AiSearchResponse> {
        let url = self.endpoint(&["ai-search"])?;
        let resp = self
            .client
            .post(url)
            .json(&AiSearchRequest { query })
            .send()
            .await?;
        read_json(resp).await
    }

    #[instrument(skip(self, image), fields(file = image.name(), mime = image.mime_type()))]
    async fn classify_image(&self, image: &ImageFile) -> Result<ClassifyResponse> {
        let url = self.endpoint(&["classify-image"])?;

        let part = reqwest::multipart::Part::bytes(image.bytes().to_vec())
            .file_name(image.name().to_string())
            .mime_str(image.mime_type())?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let resp = self.client.post(url).multipart(form).send().await?;
        let body = read_body(resp).await?;
        ClassifyResponse::from_slice(&body)
    }
}

#[async_trait]
impl CatalogBackend for HttpBackend {
    #[instrument(skip(self))]
    async fn list_datasets(&self) -> Result<DatasetCatalog> {
        let url = self.endpoint(&["datasets"])?;
        let resp = self.client.get(url).send().await?;
        let catalog: DatasetCatalog = read_json(resp).await?;
        debug!(domains = catalog.len(), "dataset catalog fetched");
        Ok(catalog)
    }

    #[instrument(skip(self))]
    async fn preview(&self, domain: &str, rows: u32) -> Result<Vec<DataRow>> {
        let mut url = self.endpoint(&["preview", domain])?;
        url.query_pairs_mut().append_pair("n", &rows.to_string());
        let resp = self.client.get(url).send().await?;
        read_json(resp).await
    }

    #[instrument(skip(self))]
    async fn columns(&self, domain: &str) -> Result<Vec<String>> {
        let url = self.endpoint(&["columns", domain])?;
        let resp = self.client.get(url).send().await?;
        read_json(resp).await
    }

    #[instrument(skip(self))]
    async fn data_page(&self, domain: &str, page: PageQuery) -> Result<DataPage> {
        let mut url = self.endpoint(&["data", domain])?;
        url.query_pairs_mut()
            .append_pair("limit", &page.limit().to_string())
            .append_pair("offset", &page.offset().to_string());
        let resp = self.client.get(url).send().await?;
        read_json(resp).await
    }
}

/// Read the whole body, mapping non-2xx responses to [`SeascopeError::Status`].
async fn read_body(resp: Response) -> Result<Vec<u8>> {
    let status = resp.status();
    let body = resp.bytes().await?;
    if !status.is_success() {
        let err = status_error(status, &body);
        warn!(status = status.as_u16(), error = %err, "backend returned an error status");
        return Err(err);
    }
    Ok(body.to_vec())
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let body = read_body(resp).await?;
    Ok(serde_json::from_slice(&body)?)
}

fn status_error(status: StatusCode, body: &[u8]) -> SeascopeError {
    SeascopeError::Status {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Unknown error").to_string(),
        detail: error_detail(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_segments() {
        let backend = HttpBackend::new("http://localhost:8000").unwrap();
        assert_eq!(
            backend.endpoint(&["ai-search"]).unwrap().as_str(),
            "http://localhost:8000/ai-search"
        );
        assert_eq!(
            backend.endpoint(&["models", "status"]).unwrap().as_str(),
            "http://localhost:8000/models/status"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let backend = HttpBackend::new("https://ocean.example.org/api").unwrap();
        assert_eq!(
            backend.endpoint(&["datasets"]).unwrap().as_str(),
            "https://ocean.example.org/api/datasets"
        );
    }

    #[test]
    fn test_endpoint_escapes_domain() {
        let backend = HttpBackend::new("http://localhost:8000/").unwrap();
        assert_eq!(
            backend.endpoint(&["columns", "deep sea/vents"]).unwrap().as_str(),
            "http://localhost:8000/columns/deep%20sea%2Fvents"
        );
    }

    #[test]
    fn test_rejects_non_base_url() {
        assert!(matches!(HttpBackend::new("mailto:ocean@example.org"), Err(SeascopeError::Config(_))));
        assert!(matches!(HttpBackend::new("not a url"), Err(SeascopeError::Url(_))));
    }

    #[test]
    fn test_status_error_falls_back_to_reason() {
        let err = status_error(StatusCode::BAD_GATEWAY, b"<html>upstream</html>");
        match err {
            SeascopeError::Status { status, reason, detail } => {
                assert_eq!(status, 502);
                assert_eq!(reason, "Bad Gateway");
                assert_eq!(detail, None);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
