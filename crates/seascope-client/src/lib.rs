//! seascope-client: HTTP access to the ocean data backend.
//!
//! Backends:
//!   HttpBackend: the FastAPI service (`/ai-search`, `/classify-image`, `/datasets`, …)
//!
//! Callers depend on the [`SearchBackend`] and [`CatalogBackend`] traits so the
//! search and catalog state machines can run against in-memory fakes.

pub mod backend;
pub mod http;
pub mod wire;

pub use backend::{CatalogBackend, SearchBackend};
pub use http::HttpBackend;
pub use wire::{
    AiSearchResponse, Classification, ClassifyResponse, DataPage, DataRow, HealthStatus,
    ModelStatus, PageQuery,
};
