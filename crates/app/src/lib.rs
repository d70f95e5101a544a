//! Curio domain layer: generic in-memory catalog repositories and the
//! two record schemas (craft products, story plots) built on them.

pub mod catalog;
pub mod context;
pub mod products;
pub mod stories;
