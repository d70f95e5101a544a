//! Test helpers.

use std::sync::Arc;

use curio_app::context::AppContext;
use salvo::{affix_state::inject, prelude::*};

use crate::state::State;

/// Wraps a route in a service with the given context injected, so
/// handler tests exercise the real in-memory repositories.
pub(crate) fn catalog_service(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(Arc::new(State::new(app))))
            .push(route),
    )
}
