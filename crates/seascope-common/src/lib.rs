//! seascope-common: Shared types and errors used across all Seascope crates.

pub mod catalog;
pub mod error;
pub mod image;

// Re-export commonly used types
pub use catalog::{DatasetCatalog, DatasetRecord};
pub use error::{Result, SeascopeError, ValidationError};
pub use image::ImageFile;
