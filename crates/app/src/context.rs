//! App Context

use std::sync::Arc;

use crate::{
    catalog::{CatalogError, CatalogRepository},
    products::{NewProduct, Product},
    stories::{NewStory, Story},
};

/// Owns the repositories the HTTP layer serves from.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Craft products catalog.
    pub products: Arc<CatalogRepository<Product>>,
    /// Story plots catalog.
    pub stories: Arc<CatalogRepository<Story>>,
}

impl AppContext {
    /// Context with empty repositories.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            products: Arc::new(CatalogRepository::new()),
            stories: Arc::new(CatalogRepository::new()),
        }
    }

    /// Context seeded with the starter catalogs (ids 1–3 each).
    ///
    /// # Errors
    ///
    /// Returns an error when a seed draft fails validation.
    pub fn seeded() -> Result<Self, CatalogError> {
        Ok(Self {
            products: Arc::new(CatalogRepository::seeded(seed_products())?),
            stories: Arc::new(CatalogRepository::seeded(seed_stories())?),
        })
    }
}

fn seed_products() -> Vec<NewProduct> {
    vec![
        NewProduct {
            name: "Handmade Ceramic Vase".to_string(),
            description: "Beautiful blue ceramic vase perfect for home decoration".to_string(),
            price: Some(45.99),
            category: "Ceramics".to_string(),
            image: Some(
                "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=300&h=300&fit=crop"
                    .to_string(),
            ),
        },
        NewProduct {
            name: "Wooden Jewelry Box".to_string(),
            description: "Handcrafted wooden jewelry box with intricate carvings".to_string(),
            price: Some(89.99),
            category: "Woodwork".to_string(),
            image: Some(
                "https://images.unsplash.com/photo-1544441892-794166f1e3be?w=300&h=300&fit=crop"
                    .to_string(),
            ),
        },
        NewProduct {
            name: "Knitted Wool Scarf".to_string(),
            description: "Soft and warm hand-knitted wool scarf in multiple colors".to_string(),
            price: Some(29.99),
            category: "Textiles".to_string(),
            image: Some(
                "https://images.unsplash.com/photo-1520903920243-00d872a2d1c9?w=300&h=300&fit=crop"
                    .to_string(),
            ),
        },
    ]
}

fn seed_stories() -> Vec<NewStory> {
    vec![
        NewStory {
            title: "The Lighthouse Keeper's Secret".to_string(),
            genre: "Mystery".to_string(),
            plot: "A reclusive keeper on a storm-battered island guards a light that has not \
                   failed in forty years, and a logbook that says otherwise"
                .to_string(),
            characters: "Eleanor Voss, Captain Marsh, the harbormaster".to_string(),
            image: None,
        },
        NewStory {
            title: "Embers of the Fallen Sky".to_string(),
            genre: "Fantasy".to_string(),
            plot: "When fragments of a shattered moon begin to land, a smith's apprentice \
                   discovers the metal remembers the hands that forge it"
                .to_string(),
            characters: "Ashka, Master Ferren, the Warden of the Reach".to_string(),
            image: None,
        },
        NewStory {
            title: "Last Train to Meridian".to_string(),
            genre: "Science Fiction".to_string(),
            plot: "The final overnight service out of a drowning coastal city carries one \
                   passenger who bought a ticket sixty years ago"
                .to_string(),
            characters: "Jun Okafor, the conductor, the woman in seat 14C".to_string(),
            image: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::catalog::RecordId;

    use super::*;

    #[tokio::test]
    async fn test_seeded_context_starts_at_id_one() -> TestResult {
        let context = AppContext::seeded()?;

        let products = context.products.list().await;
        let stories = context.stories.list().await;

        assert_eq!(products.len(), 3);
        assert_eq!(stories.len(), 3);
        assert_eq!(products[0].id, RecordId::new(1));
        assert_eq!(products[0].name, "Handmade Ceramic Vase");

        // The next created record continues after the seeds.
        let created = context
            .stories
            .create(crate::stories::NewStory::default())
            .await?;

        assert_eq!(created.id, RecordId::new(4));

        Ok(())
    }
}
