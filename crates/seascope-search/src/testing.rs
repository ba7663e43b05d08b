//! In-memory search backend for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;

use seascope_client::{AiSearchResponse, ClassifyResponse, SearchBackend};
use seascope_common::{ImageFile, Result, SeascopeError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    AiSearch(String),
    ClassifyImage(String),
}

enum Reply {
    Json(String),
    Status(u16, Option<String>),
}

/// Echoes text queries as `"answer: {query}"` and classifies every image as a
/// success unless scripted otherwise.
pub struct FakeBackend {
    calls: Mutex<Vec<BackendCall>>,
    search_failure: Option<(u16, Option<String>)>,
    /// Returned by the next `ai_search` call only.
    search_error: Mutex<Option<SeascopeError>>,
    classify: Reply,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            search_failure: None,
            search_error: Mutex::new(None),
            classify: Reply::Json(
                r#"{"status":"success","classification":"Green sea turtle"}"#.to_string(),
            ),
        }
    }

    pub fn search_status(mut self, status: u16, detail: Option<String>) -> Self {
        self.search_failure = Some((status, detail));
        self
    }

    /// Fail the next text search with `err`, as a dropped connection would.
    pub fn search_error(self, err: SeascopeError) -> Self {
        *self.search_error.lock().unwrap() = Some(err);
        self
    }

    pub fn classify_json(mut self, body: &str) -> Self {
        self.classify = Reply::Json(body.to_string());
        self
    }

    pub fn classify_status(mut self, status: u16, detail: Option<String>) -> Self {
        self.classify = Reply::Status(status, detail);
        self
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().unwrap().clone()
    }
}

fn status_error(status: u16, detail: Option<String>) -> SeascopeError {
    let reason = match status {
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown error",
    };
    SeascopeError::Status { status, reason: reason.to_string(), detail }
}

#[async_trait]
impl SearchBackend for FakeBackend {
    async fn ai_search(&self, query: &str) -> Result<AiSearchResponse> {
        self.calls.lock().unwrap().push(BackendCall::AiSearch(query.to_string()));
        let injected = self.search_error.lock().unwrap().take();
        if let Some(err) = injected {
            return Err(err);
        }
        if let Some((status, detail)) = &self.search_failure {
            return Err(status_error(*status, detail.clone()));
        }
        Ok(AiSearchResponse { result: format!("answer: {query}") })
    }

    async fn classify_image(&self, image: &ImageFile) -> Result<ClassifyResponse> {
        self.calls
            .lock()
            .unwrap()
            .push(BackendCall::ClassifyImage(image.name().to_string()));
        match &self.classify {
            Reply::Json(body) => ClassifyResponse::from_slice(body.as_bytes()),
            Reply::Status(status, detail) => Err(status_error(*status, detail.clone())),
        }
    }
}
