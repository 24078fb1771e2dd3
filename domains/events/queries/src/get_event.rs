use std::sync::Arc;

use events_dao::EventStore;
use events_errors::EventError;
use events_models::Event;
use serde::Deserialize;
use tracing::instrument;

#[derive(Debug, Deserialize)]
pub struct GetEventQuery {
    pub event_id: i64,
}

#[derive(Clone)]
pub struct GetEventQueryHandler {
    store: Arc<dyn EventStore>,
}

impl GetEventQueryHandler {
    pub fn new(store: Arc<dyn EventStore>) -> Self { Self { store } }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, query: GetEventQuery,
    ) -> Result<Event, EventError> {
        self.store
            .find_by_id(query.event_id)
            .await?
            .ok_or(EventError::NotFound {
                event_id: query.event_id,
            })
    }
}
