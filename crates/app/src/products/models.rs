//! Product models.

use jiff::Timestamp;

use crate::catalog::{CatalogError, CatalogRecord, RecordId, merge_field};

/// Image shown when a product is created without one.
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1513475382585-d06e58bcb0e0?w=300&h=300&fit=crop";

/// Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Repository-assigned identifier.
    pub id: RecordId,
    /// Product name.
    pub name: String,
    /// Product description.
    pub description: String,
    /// Price in the catalog's display currency.
    pub price: f64,
    /// Product category, e.g. `"Ceramics"`.
    pub category: String,
    /// Image URL.
    pub image: String,
    /// Stamped once at creation, immutable thereafter.
    pub date_added: Timestamp,
}

/// New Product Model
///
/// Name, description, price, and category are required; price counts
/// as missing when absent or zero. Image is optional and falls back to
/// [`PLACEHOLDER_IMAGE`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewProduct {
    /// Product name (required).
    pub name: String,
    /// Product description (required).
    pub description: String,
    /// Price (required, nonzero).
    pub price: Option<f64>,
    /// Product category (required).
    pub category: String,
    /// Image URL (optional).
    pub image: Option<String>,
}

/// Product Update Model
///
/// Fields absent or empty keep their stored values; a zero price also
/// keeps the stored price.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement price.
    pub price: Option<f64>,
    /// Replacement category.
    pub category: Option<String>,
    /// Replacement image URL.
    pub image: Option<String>,
}

impl CatalogRecord for Product {
    type Draft = NewProduct;
    type Patch = ProductUpdate;

    const RESOURCE: &'static str = "Product";

    fn validate(draft: &Self::Draft) -> Result<(), CatalogError> {
        let has_price = draft.price.is_some_and(|price| price != 0.0);

        if draft.name.is_empty()
            || draft.description.is_empty()
            || draft.category.is_empty()
            || !has_price
        {
            return Err(CatalogError::MissingRequiredFields);
        }

        Ok(())
    }

    fn from_draft(id: RecordId, created_at: Timestamp, draft: Self::Draft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price.unwrap_or_default(),
            category: draft.category,
            image: draft
                .image
                .filter(|image| !image.is_empty())
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            date_added: created_at,
        }
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn apply(&mut self, patch: Self::Patch) {
        merge_field(&mut self.name, patch.name);
        merge_field(&mut self.description, patch.description);
        merge_field(&mut self.category, patch.category);
        merge_field(&mut self.image, patch.image);

        if let Some(price) = patch.price.filter(|price| *price != 0.0) {
            self.price = price;
        }
    }

    fn matches(&self, needle: &str) -> bool {
        [&self.name, &self.description, &self.category]
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}
