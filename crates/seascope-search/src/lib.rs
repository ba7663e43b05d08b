//! seascope-search: multi-modal search orchestration for the landing page.
//!
//! UI state lives in a [`QueryComposer`], which turns it into exactly one
//! [`SearchRequest`]. A [`Dispatcher`] sends that request to a
//! [`SearchBackend`](seascope_client::SearchBackend) and normalizes the reply
//! into a [`SearchOutcome`]. [`SearchSession`] ties the two together and
//! sequences requests so a slow, superseded response never overwrites a
//! newer one.

pub mod composer;
pub mod dispatcher;
pub mod mode;
pub mod outcome;
pub mod preview;
pub mod request;
pub mod session;

#[cfg(test)]
mod testing;

pub use composer::{QueryComposer, SelectedImage};
pub use dispatcher::Dispatcher;
pub use mode::SearchMode;
pub use outcome::SearchOutcome;
pub use preview::{PreviewHandle, PreviewRegistry};
pub use request::{SearchRequest, PLACEHOLDER_DESCRIPTION};
pub use session::{PendingSearch, Phase, RequestSeq, SearchSession, SUGGESTED_TOPICS};
