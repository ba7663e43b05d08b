//! Search session: the landing page's search state machine.
//!
//! A session is always in exactly one [`Phase`]: nothing has run yet, a
//! request is in flight, or an outcome is settled. Starting a search clears
//! the previous outcome; completions are applied only for the most recently
//! started request.

use tracing::{debug, info, warn};

use seascope_common::ImageFile;

use crate::composer::QueryComposer;
use crate::dispatcher::Dispatcher;
use crate::mode::SearchMode;
use crate::outcome::SearchOutcome;
use crate::request::SearchRequest;

/// Quick-search topics offered under the search box.
pub const SUGGESTED_TOPICS: [&str; 6] = [
    "Sea surface temp",
    "Chondrichthyes",
    "eDNA",
    "AIS/VMS",
    "MPAs",
    "Coral reefs",
];

/// Monotonic per-session request number.
pub type RequestSeq = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    InFlight { seq: RequestSeq, mode: SearchMode },
    Settled { mode: SearchMode, outcome: SearchOutcome },
}

/// A started search waiting to be dispatched and completed.
#[derive(Debug, Clone)]
pub struct PendingSearch {
    pub seq: RequestSeq,
    pub request: SearchRequest,
}

pub struct SearchSession {
    composer: QueryComposer,
    dispatcher: Dispatcher,
    phase: Phase,
    last_seq: RequestSeq,
    /// Input rejected while a request was in flight.
    input_error: Option<String>,
}

impl SearchSession {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self::with_composer(dispatcher, QueryComposer::new())
    }

    pub fn with_composer(dispatcher: Dispatcher, composer: QueryComposer) -> Self {
        Self { composer, dispatcher, phase: Phase::Idle, last_seq: 0, input_error: None }
    }

    pub fn composer(&self) -> &QueryComposer {
        &self.composer
    }

    pub fn composer_mut(&mut self) -> &mut QueryComposer {
        &mut self.composer
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::InFlight { .. })
    }

    /// Whether the submit affordance should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_busy()
    }

    /// The settled outcome, if any. `None` while a request is in flight.
    pub fn outcome(&self) -> Option<&SearchOutcome> {
        match &self.phase {
            Phase::Settled { outcome, .. } => Some(outcome),
            _ => None,
        }
    }

    /// Validation message for input rejected while a request was in flight.
    /// The pending request keeps running and its outcome is still applied.
    pub fn input_error(&self) -> Option<&str> {
        self.input_error.as_deref()
    }

    /// Progress text for the in-flight request.
    pub fn busy_label(&self) -> Option<&'static str> {
        match self.phase {
            Phase::InFlight { mode, .. } => Some(mode.busy_label()),
            _ => None,
        }
    }

    /// Badge for a successful settled outcome.
    pub fn result_label(&self) -> Option<&'static str> {
        match &self.phase {
            Phase::Settled { mode, outcome } if outcome.is_success() => Some(mode.result_label()),
            _ => None,
        }
    }

    pub fn set_mode(&mut self, mode: SearchMode) {
        self.composer.set_mode(mode);
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.composer.set_text(text);
    }

    /// Select an image. A rejected file surfaces as a settled failure (or as
    /// [`input_error`](Self::input_error) while busy), and the previous
    /// selection is kept.
    pub fn select_image(&mut self, file: ImageFile) -> bool {
        match self.composer.select_image(file) {
            Ok(_) => true,
            Err(e) => {
                self.reject_input(e.to_string());
                false
            }
        }
    }

    /// Start a search from the current input.
    ///
    /// Clears any previous outcome. Returns `None` when validation fails; the
    /// session then holds the validation failure and nothing is sent. A
    /// request already in flight is left untouched in that case.
    pub fn begin(&mut self) -> Option<PendingSearch> {
        let mode = self.composer.mode();
        match self.composer.compose() {
            Ok(request) => {
                self.last_seq += 1;
                let seq = self.last_seq;
                if let Phase::InFlight { seq: superseded, .. } = self.phase {
                    debug!(superseded, seq, "search superseded while in flight");
                }
                self.phase = Phase::InFlight { seq, mode };
                self.input_error = None;
                info!(seq, kind = request.kind(), "search started");
                Some(PendingSearch { seq, request })
            }
            Err(e) => {
                debug!(error = %e, "search rejected before dispatch");
                self.reject_input(e.to_string());
                None
            }
        }
    }

    /// Apply the outcome of request `seq`. Returns `false` (and drops the
    /// outcome) when `seq` is no longer the request the session waits for.
    pub fn complete(&mut self, seq: RequestSeq, outcome: SearchOutcome) -> bool {
        match self.phase {
            Phase::InFlight { seq: current, mode } if current == seq => {
                self.phase = Phase::Settled { mode, outcome };
                true
            }
            _ => {
                warn!(seq, latest = self.last_seq, "discarding stale search response");
                false
            }
        }
    }

    /// Compose, dispatch and apply one search.
    pub async fn submit(&mut self) -> Option<&SearchOutcome> {
        if let Some(pending) = self.begin() {
            let outcome = self.dispatcher.dispatch(&pending.request).await;
            self.complete(pending.seq, outcome);
        }
        self.outcome()
    }

    /// Run one of the [`SUGGESTED_TOPICS`] (or any topic) as a text search.
    pub async fn search_topic(&mut self, topic: &str) -> Option<&SearchOutcome> {
        self.set_mode(SearchMode::Text);
        self.set_text(topic);
        self.submit().await
    }

    fn reject_input(&mut self, message: String) {
        if let Phase::InFlight { seq, .. } = self.phase {
            debug!(seq, %message, "input rejected while search in flight");
            self.input_error = Some(message);
            return;
        }
        self.input_error = None;
        self.phase = Phase::Settled {
            mode: self.composer.mode(),
            outcome: SearchOutcome::failure(message),
        };
    }
}
