pub mod extract;
pub mod filters;
pub mod handlers;

use std::sync::Arc;

use axum::Router;
use events_dao::EventStore;
use events_models::Clock;

pub use extract::EventBody;
pub use filters::*;
pub use handlers::*;

/// Event routes bound to `store`, ready to be nested under `/api/events`.
pub fn event_routes(
    store: Arc<dyn EventStore>, clock: Arc<dyn Clock>,
) -> Router {
    let services = EventServices::new(store, clock);
    EventHandlers::routes().with_state(services)
}
