use std::sync::Arc;

use chrono::NaiveDate;
use events_dao::EventStore;
use events_errors::EventError;
use events_models::{Event, EventCategory};
use serde::Deserialize;
use tracing::instrument;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DateRangeQuery {
    /// First day of the range, inclusive.
    pub start_date: NaiveDate,
    /// Last day of the range, inclusive.
    pub end_date: NaiveDate,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrganizerQuery {
    /// Case-insensitive fragment of the organizer.
    pub organizer: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NameSearchQuery {
    /// Case-insensitive fragment of the event name.
    pub name: String,
}

/// Attribute filters over the whole catalog.
#[derive(Clone)]
pub struct FilterEventsQueryHandler {
    store: Arc<dyn EventStore>,
}

impl FilterEventsQueryHandler {
    pub fn new(store: Arc<dyn EventStore>) -> Self { Self { store } }

    #[instrument(skip(self))]
    pub async fn by_category(
        &self, category: EventCategory,
    ) -> Result<Vec<Event>, EventError> {
        self.store.find_by_category(category).await
    }

    /// An inverted range matches nothing.
    #[instrument(skip(self))]
    pub async fn by_date_range(
        &self, query: DateRangeQuery,
    ) -> Result<Vec<Event>, EventError> {
        if query.start_date > query.end_date {
            return Ok(Vec::new());
        }
        self.store
            .find_by_date_range(query.start_date, query.end_date)
            .await
    }

    #[instrument(skip(self))]
    pub async fn by_organizer(
        &self, query: OrganizerQuery,
    ) -> Result<Vec<Event>, EventError> {
        self.store
            .find_by_organizer_containing(&query.organizer)
            .await
    }

    #[instrument(skip(self))]
    pub async fn by_name(
        &self, query: NameSearchQuery,
    ) -> Result<Vec<Event>, EventError> {
        self.store.find_by_name_containing(&query.name).await
    }
}
