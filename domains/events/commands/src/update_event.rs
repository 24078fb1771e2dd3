use std::sync::Arc;

use events_dao::EventStore;
use events_errors::EventError;
use events_models::{Clock, Event, EventRecord, validate};
use serde::Deserialize;
use tracing::{info, instrument};

#[derive(Debug, Deserialize)]
pub struct UpdateEventCommand {
    pub event_id: i64,
    /// Full replacement. Any `id` inside the record is ignored.
    pub event: EventRecord,
}

#[derive(Clone)]
pub struct UpdateEventHandler {
    store: Arc<dyn EventStore>,
    clock: Arc<dyn Clock>,
}

impl UpdateEventHandler {
    pub fn new(store: Arc<dyn EventStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// An unknown id is reported as not found even when the body is invalid.
    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: UpdateEventCommand,
    ) -> Result<Event, EventError> {
        let id = command.event_id;
        if !self.store.exists_by_id(id).await? {
            return Err(EventError::not_found(id));
        }

        let replacement = validate(&command.event, self.clock.today())?;
        let updated = self.store.replace(id, replacement).await?;
        info!(event_id = id, "event updated");
        Ok(updated)
    }
}
