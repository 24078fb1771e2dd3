use std::sync::Arc;

use events_dao::EventStore;
use events_errors::EventError;
use events_models::{Clock, Event, EventRecord, validate};
use serde::Deserialize;
use tracing::{info, instrument};

#[derive(Debug, Deserialize)]
pub struct CreateEventCommand {
    pub event: EventRecord,
}

#[derive(Clone)]
pub struct CreateEventHandler {
    store: Arc<dyn EventStore>,
    clock: Arc<dyn Clock>,
}

impl CreateEventHandler {
    pub fn new(store: Arc<dyn EventStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: CreateEventCommand,
    ) -> Result<Event, EventError> {
        let event = validate(&command.event, self.clock.today())?;
        let saved = self.store.insert(event).await?;
        info!(event_id = saved.id, "event created");
        Ok(saved)
    }
}
