//! seascope-catalog: the data hub's dataset catalog and its filter.

pub mod filter;
pub mod hub;

pub use filter::{visible_records, FilterState, DEFAULT_DOMAIN};
pub use hub::{CatalogLoad, DataHub, DomainTab};
