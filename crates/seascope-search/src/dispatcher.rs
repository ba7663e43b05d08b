//! Request dispatcher: sends one [`SearchRequest`] and normalizes the reply.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use seascope_client::{ClassifyResponse, SearchBackend};
use seascope_common::{ImageFile, SeascopeError};

use crate::outcome::SearchOutcome;
use crate::request::{description_prompt, SearchRequest};

/// Shown when the backend rejects an image without saying why.
pub const UNKNOWN_ERROR: &str = "Unknown error occurred";

/// Dispatches search requests to a [`SearchBackend`]. Every call resolves to an
/// outcome; backend errors become [`SearchOutcome::Failure`].
#[derive(Clone)]
pub struct Dispatcher {
    backend: Arc<dyn SearchBackend>,
}

impl Dispatcher {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self { backend }
    }

    #[instrument(skip_all, fields(kind = request.kind()))]
    pub async fn dispatch(&self, request: &SearchRequest) -> SearchOutcome {
        let outcome = match request {
            SearchRequest::TextQuery { text } => self.query(text).await,
            SearchRequest::ImageDescription { description, fallback_notice } => {
                if *fallback_notice {
                    info!("no description given, analyzing with placeholder");
                }
                self.query(&description_prompt(description)).await
            }
            SearchRequest::ImageUpload { file } => self.classify(file).await,
        };

        match &outcome {
            SearchOutcome::Success { note, .. } => {
                info!(has_note = note.is_some(), "search succeeded")
            }
            SearchOutcome::Failure { message } => warn!(%message, "search failed"),
        }
        outcome
    }

    async fn query(&self, query: &str) -> SearchOutcome {
        match self.backend.ai_search(query).await {
            Ok(resp) => SearchOutcome::success(resp.result, None),
            // Status errors already read "Server returned {status}: {reason}".
            Err(e) => SearchOutcome::failure(e.to_string()),
        }
    }

    async fn classify(&self, file: &ImageFile) -> SearchOutcome {
        match self.backend.classify_image(file).await {
            Ok(ClassifyResponse::Accepted(c)) => {
                info!(
                    detected_object = c.detected_object.as_deref().unwrap_or("-"),
                    confidence = c.confidence.as_deref().unwrap_or("-"),
                    partial = c.partial,
                    "image classified"
                );
                SearchOutcome::success(c.label, c.note)
            }
            Ok(ClassifyResponse::Rejected { status, error, .. }) => {
                warn!(%status, "classification rejected");
                let message = error.filter(|e| !e.trim().is_empty());
                SearchOutcome::failure(message.unwrap_or_else(|| UNKNOWN_ERROR.to_string()))
            }
            Err(SeascopeError::Status { status, reason, detail }) => {
                let detail = detail.filter(|d| !d.trim().is_empty());
                SearchOutcome::failure(format!(
                    "Classification failed: {status} - {}",
                    detail.unwrap_or(reason)
                ))
            }
            Err(e) => SearchOutcome::failure(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::PLACEHOLDER_DESCRIPTION;
    use crate::testing::{BackendCall, FakeBackend};

    fn reef() -> ImageFile {
        ImageFile::new("reef.jpg", "image/jpeg", b"jpeg".to_vec())
    }

    fn upload() -> SearchRequest {
        SearchRequest::ImageUpload { file: reef() }
    }

    #[tokio::test]
    async fn test_text_query_success() {
        let backend = Arc::new(FakeBackend::new());
        let dispatcher = Dispatcher::new(backend.clone());

        let outcome = dispatcher
            .dispatch(&SearchRequest::TextQuery { text: "tuna".to_string() })
            .await;

        assert_eq!(outcome, SearchOutcome::success("answer: tuna", None));
        assert_eq!(backend.calls(), vec![BackendCall::AiSearch("tuna".to_string())]);
    }

    #[tokio::test]
    async fn test_text_query_status_failure() {
        let backend = Arc::new(FakeBackend::new().search_status(503, None));
        let outcome = Dispatcher::new(backend)
            .dispatch(&SearchRequest::TextQuery { text: "tuna".to_string() })
            .await;
        assert_eq!(outcome, SearchOutcome::failure("Server returned 503: Service Unavailable"));
    }

    #[tokio::test]
    async fn test_transport_error_message_is_kept() {
        let backend = Arc::new(
            FakeBackend::new().search_error(SeascopeError::Application("connection reset".to_string())),
        );
        let outcome = Dispatcher::new(backend)
            .dispatch(&SearchRequest::TextQuery { text: "tuna".to_string() })
            .await;
        assert_eq!(outcome, SearchOutcome::failure("Unexpected response: connection reset"));
    }

    #[tokio::test]
    async fn test_description_sends_prompt() {
        let backend = Arc::new(FakeBackend::new());
        let dispatcher = Dispatcher::new(backend.clone());

        let outcome = dispatcher.dispatch(&SearchRequest::describe("")).await;

        assert!(outcome.is_success());
        let calls = backend.calls();
        let [BackendCall::AiSearch(prompt)] = calls.as_slice() else {
            panic!("expected one ai-search call, got {calls:?}");
        };
        assert_eq!(prompt, &description_prompt(PLACEHOLDER_DESCRIPTION));
    }

    #[tokio::test]
    async fn test_partial_success_note_is_informational() {
        let backend = Arc::new(FakeBackend::new().classify_json(
            r#"{"status":"partial_success","classification":"Clownfish","note":"low confidence"}"#,
        ));
        let dispatcher = Dispatcher::new(backend.clone());

        let outcome = dispatcher.dispatch(&upload()).await;

        assert_eq!(
            outcome,
            SearchOutcome::success("Clownfish", Some("low confidence".to_string()))
        );
        assert_eq!(backend.calls(), vec![BackendCall::ClassifyImage("reef.jpg".to_string())]);
    }

    #[tokio::test]
    async fn test_error_status_uses_error_field() {
        let backend = Arc::new(
            FakeBackend::new().classify_json(r#"{"status":"error","error":"unsupported format"}"#),
        );
        let outcome = Dispatcher::new(backend).dispatch(&upload()).await;
        assert_eq!(outcome, SearchOutcome::failure("unsupported format"));
    }

    #[tokio::test]
    async fn test_error_status_without_error_field() {
        let backend = Arc::new(FakeBackend::new().classify_json(
            r#"{"status":"error","classification":"AI model is still loading.","suggestion":"describe it"}"#,
        ));
        let outcome = Dispatcher::new(backend).dispatch(&upload()).await;
        assert_eq!(outcome, SearchOutcome::failure(UNKNOWN_ERROR));
    }

    #[tokio::test]
    async fn test_classify_status_with_detail() {
        let backend = Arc::new(
            FakeBackend::new().classify_status(400, Some("Empty file received".to_string())),
        );
        let outcome = Dispatcher::new(backend).dispatch(&upload()).await;
        assert_eq!(outcome, SearchOutcome::failure("Classification failed: 400 - Empty file received"));
    }

    #[tokio::test]
    async fn test_classify_status_without_body_uses_reason() {
        let backend = Arc::new(FakeBackend::new().classify_status(500, None));
        let outcome = Dispatcher::new(backend).dispatch(&upload()).await;
        assert_eq!(
            outcome,
            SearchOutcome::failure("Classification failed: 500 - Internal Server Error")
        );
    }

    #[tokio::test]
    async fn test_classify_status_blank_detail_uses_reason() {
        let backend = Arc::new(FakeBackend::new().classify_status(400, Some(String::new())));
        let outcome = Dispatcher::new(backend).dispatch(&upload()).await;
        assert_eq!(outcome, SearchOutcome::failure("Classification failed: 400 - Bad Request"));
    }

    #[tokio::test]
    async fn test_malformed_classification_fails_closed() {
        let backend = Arc::new(FakeBackend::new().classify_json(r#"{"status":"success"}"#));
        let outcome = Dispatcher::new(backend).dispatch(&upload()).await;
        let message = outcome.error_message().unwrap();
        assert!(message.starts_with("Unexpected response"), "got {message}");
    }
}
