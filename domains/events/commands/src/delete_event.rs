use std::sync::Arc;

use events_dao::EventStore;
use events_errors::EventError;
use serde::Deserialize;
use tracing::{info, instrument};

#[derive(Debug, Deserialize)]
pub struct DeleteEventCommand {
    pub event_id: i64,
}

#[derive(Clone)]
pub struct DeleteEventHandler {
    store: Arc<dyn EventStore>,
}

impl DeleteEventHandler {
    pub fn new(store: Arc<dyn EventStore>) -> Self { Self { store } }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: DeleteEventCommand,
    ) -> Result<(), EventError> {
        let id = command.event_id;
        if !self.store.exists_by_id(id).await? {
            return Err(EventError::not_found(id));
        }

        // A concurrent delete between the check and here is still a miss.
        if !self.store.delete_by_id(id).await? {
            return Err(EventError::not_found(id));
        }
        info!(event_id = id, "event deleted");
        Ok(())
    }
}
