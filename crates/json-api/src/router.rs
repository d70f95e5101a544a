//! App Router

use salvo::Router;

use crate::{config::Catalog, products, stories};

/// Routes for the catalog this process serves.
///
/// Both catalogs expose the same shape: the collection at
/// `/api/<resource>`, single records at `/api/<resource>/{id}`, and
/// keyword search at `/api/search`.
pub(crate) fn api_router(catalog: Catalog) -> Router {
    match catalog {
        Catalog::Products => products_router(),
        Catalog::Stories => stories_router(),
    }
}

fn products_router() -> Router {
    Router::with_path("api")
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
        .push(Router::with_path("search").get(products::search::handler))
}

fn stories_router() -> Router {
    Router::with_path("api")
        .push(
            Router::with_path("stories")
                .get(stories::index::handler)
                .post(stories::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(stories::get::handler)
                        .put(stories::update::handler)
                        .delete(stories::delete::handler),
                ),
        )
        .push(Router::with_path("search").get(stories::search::handler))
}
