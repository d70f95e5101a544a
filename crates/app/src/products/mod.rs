//! Craft products catalog schema.

pub mod models;

pub use models::{NewProduct, Product, ProductUpdate};
