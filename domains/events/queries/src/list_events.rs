use std::sync::Arc;

use events_dao::EventStore;
use events_errors::EventError;
use events_models::Event;
use tracing::instrument;

#[derive(Clone)]
pub struct ListEventsQueryHandler {
    store: Arc<dyn EventStore>,
}

impl ListEventsQueryHandler {
    pub fn new(store: Arc<dyn EventStore>) -> Self { Self { store } }

    /// Every stored event, ordered by id.
    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<Vec<Event>, EventError> {
        self.store.find_all().await
    }
}
