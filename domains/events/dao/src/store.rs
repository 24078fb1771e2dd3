use async_trait::async_trait;
use chrono::NaiveDate;
use events_errors::EventError;
use events_models::{Event, EventCategory, NewEvent};

/// Storage for events.
///
/// Listings come back ordered by id. Substring lookups ignore case.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Persist a new event and assign it an id.
    async fn insert(&self, event: NewEvent) -> Result<Event, EventError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Event>, EventError>;

    async fn find_all(&self) -> Result<Vec<Event>, EventError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, EventError>;

    /// Overwrite every attribute of an existing event in one step.
    ///
    /// Fails with [`EventError::NotFound`] when `id` is absent.
    async fn replace(
        &self, id: i64, event: NewEvent,
    ) -> Result<Event, EventError>;

    /// Returns whether a row was removed.
    async fn delete_by_id(&self, id: i64) -> Result<bool, EventError>;

    async fn find_by_category(
        &self, category: EventCategory,
    ) -> Result<Vec<Event>, EventError>;

    /// Events dated within `[start, end]`.
    async fn find_by_date_range(
        &self, start: NaiveDate, end: NaiveDate,
    ) -> Result<Vec<Event>, EventError>;

    async fn find_by_organizer_containing(
        &self, organizer: &str,
    ) -> Result<Vec<Event>, EventError>;

    async fn find_by_name_containing(
        &self, name: &str,
    ) -> Result<Vec<Event>, EventError>;

    /// Events of `category` dated on or after `from`.
    async fn find_upcoming_by_category(
        &self, category: EventCategory, from: NaiveDate,
    ) -> Result<Vec<Event>, EventError>;

    /// Events dated strictly after `date`.
    async fn find_after(
        &self, date: NaiveDate,
    ) -> Result<Vec<Event>, EventError>;
}
