use std::sync::Arc;

use events_dao::EventStore;
use events_errors::EventError;
use events_models::Event;
use serde::Deserialize;
use tracing::{debug, instrument};
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GlobalSearchQuery {
    /// Either an event id or a fragment of an event name.
    pub query: String,
}

#[derive(Clone)]
pub struct SearchEventsQueryHandler {
    store: Arc<dyn EventStore>,
}

impl SearchEventsQueryHandler {
    pub fn new(store: Arc<dyn EventStore>) -> Self { Self { store } }

    /// The event whose id equals the query comes first, followed by every
    /// other event whose name contains it.
    #[instrument(skip(self))]
    pub async fn execute(
        &self, query: GlobalSearchQuery,
    ) -> Result<Vec<Event>, EventError> {
        let mut results = Vec::new();

        if let Ok(id) = query.query.trim().parse::<i64>() {
            if let Some(event) = self.store.find_by_id(id).await? {
                debug!(event_id = id, "global search matched id");
                results.push(event);
            }
        }

        let by_name = self.store.find_by_name_containing(&query.query).await?;
        for event in by_name {
            if !results.iter().any(|found: &Event| found.id == event.id) {
                results.push(event);
            }
        }

        Ok(results)
    }
}
