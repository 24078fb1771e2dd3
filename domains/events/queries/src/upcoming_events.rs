use std::sync::Arc;

use events_dao::EventStore;
use events_errors::EventError;
use events_models::{Clock, Event, EventCategory};
use tracing::instrument;

/// Date-relative listings. "Today" is read from the clock on every call.
#[derive(Clone)]
pub struct UpcomingEventsQueryHandler {
    store: Arc<dyn EventStore>,
    clock: Arc<dyn Clock>,
}

impl UpcomingEventsQueryHandler {
    pub fn new(store: Arc<dyn EventStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Events dated after today; today's events are excluded.
    #[instrument(skip(self))]
    pub async fn all(&self) -> Result<Vec<Event>, EventError> {
        self.store.find_after(self.clock.today()).await
    }

    /// Events of `category` dated today or later.
    #[instrument(skip(self))]
    pub async fn by_category(
        &self, category: EventCategory,
    ) -> Result<Vec<Event>, EventError> {
        self.store
            .find_upcoming_by_category(category, self.clock.today())
            .await
    }
}
