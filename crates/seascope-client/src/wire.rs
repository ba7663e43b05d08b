//! Request and response bodies exchanged with the backend.
//!
//! Responses are validated here, at the boundary. Anything that does not fit
//! the expected shape becomes [`SeascopeError::Application`] rather than being
//! read defensively further down.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use seascope_common::{Result, SeascopeError, ValidationError};

// ── /ai-search ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct AiSearchRequest<'a> {
    pub query: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AiSearchResponse {
    pub result: String,
}

// ── /classify-image ───────────────────────────────────────────────────────────

const STATUS_SUCCESS: &str = "success";
const STATUS_PARTIAL: &str = "partial_success";

/// Body as the backend sends it; every field optional.
#[derive(Debug, Default, Deserialize)]
struct RawClassifyResponse {
    status: Option<String>,
    classification: Option<String>,
    note: Option<String>,
    error: Option<String>,
    suggestion: Option<String>,
    detected_object: Option<String>,
    confidence: Option<Value>,
}

/// An accepted classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub label: String,
    /// Informational caveat, e.g. "low confidence".
    pub note: Option<String>,
    pub detected_object: Option<String>,
    pub confidence: Option<String>,
    /// True for `partial_success`.
    pub partial: bool,
}

/// Classification response after status discrimination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifyResponse {
    Accepted(Classification),
    Rejected {
        status: String,
        error: Option<String>,
        suggestion: Option<String>,
    },
}

impl ClassifyResponse {
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let raw: RawClassifyResponse = serde_json::from_slice(body)?;
        Self::try_from(raw)
    }
}

impl TryFrom<RawClassifyResponse> for ClassifyResponse {
    type Error = SeascopeError;

    fn try_from(raw: RawClassifyResponse) -> Result<Self> {
        let status = raw.status.ok_or_else(|| {
            SeascopeError::Application("classification response has no status".to_string())
        })?;

        match status.as_str() {
            STATUS_SUCCESS | STATUS_PARTIAL => {
                let label = raw.classification.ok_or_else(|| {
                    SeascopeError::Application(format!(
                        "classification missing from '{status}' response"
                    ))
                })?;
                Ok(ClassifyResponse::Accepted(Classification {
                    label,
                    note: raw.note,
                    detected_object: raw.detected_object,
                    confidence: raw.confidence.as_ref().map(display_value),
                    partial: status == STATUS_PARTIAL,
                }))
            }
            _ => Ok(ClassifyResponse::Rejected {
                status,
                error: raw.error,
                suggestion: raw.suggestion,
            }),
        }
    }
}

// ── Error bodies ──────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<Value>,
}

/// Pull a FastAPI-style `detail` out of an error body.
/// Unparsable bodies and blank details yield `None`.
pub(crate) fn error_detail(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .map(|d| display_value(&d))
        .filter(|d| !d.trim().is_empty())
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ── Dataset exploration ───────────────────────────────────────────────────────

pub type DataRow = serde_json::Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DataPage {
    pub total: u64,
    pub offset: u64,
    pub limit: u32,
    pub rows: Vec<DataRow>,
}

/// Pagination for `/data/{domain}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageQuery {
    limit: u32,
    offset: u64,
}

impl PageQuery {
    pub const DEFAULT_LIMIT: u32 = 100;
    pub const MAX_LIMIT: u32 = 1000;

    pub fn new(limit: u32, offset: u64) -> std::result::Result<Self, ValidationError> {
        if limit == 0 || limit > Self::MAX_LIMIT {
            return Err(ValidationError::PageLimit { limit, max: Self::MAX_LIMIT });
        }
        Ok(Self { limit, offset })
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// The page after this one.
    pub fn next(&self) -> Self {
        Self { limit: self.limit, offset: self.offset.saturating_add(u64::from(self.limit)) }
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { limit: Self::DEFAULT_LIMIT, offset: 0 }
    }
}

// ── Status ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub message: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModelStatus {
    pub hugging_face_loaded: bool,
    pub model_name: Option<String>,
}
