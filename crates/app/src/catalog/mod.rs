//! Generic catalog: record identity, schema trait, and the in-memory
//! repository both resource types instantiate.

pub mod errors;
pub mod records;
pub mod repository;

pub use errors::CatalogError;
pub use records::{CatalogRecord, RecordId, merge_field};
pub use repository::CatalogRepository;
