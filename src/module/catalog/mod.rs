///! Catalog lookup module
///!
///! Resolves publication dates for book titles via the O'Reilly catalog
///! search API, with an on-disk cache of raw responses.

pub mod api_client;
pub mod cache;
pub mod runner;
pub mod selector;
pub mod titles;
pub mod types;

pub use api_client::CatalogClient;
pub use runner::LookupRunner;
pub use types::{SearchResponse, SearchResult};
