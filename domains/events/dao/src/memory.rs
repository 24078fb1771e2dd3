use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use events_errors::EventError;
use events_models::{Event, EventCategory, NewEvent};
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::store::EventStore;

#[derive(Debug)]
struct State {
    events: BTreeMap<i64, Event>,
    next_id: i64,
}

/// Process-local store. Ids start at 1 and are never reused.
#[derive(Debug)]
pub struct InMemoryEventStore {
    state: RwLock<State>,
}

impl Default for InMemoryEventStore {
    fn default() -> Self { Self::new() }
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State {
                events: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    pub async fn len(&self) -> usize { self.state.read().await.events.len() }

    pub async fn is_empty(&self) -> bool { self.len().await == 0 }

    async fn filter<F>(&self, predicate: F) -> Vec<Event>
    where
        F: Fn(&Event) -> bool,
    {
        let state = self.state.read().await;
        state
            .events
            .values()
            .filter(|event| predicate(event))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    #[instrument(skip(self, event), fields(name = %event.name))]
    async fn insert(&self, event: NewEvent) -> Result<Event, EventError> {
        let mut state = self.state.write().await;
        let id = state.next_id;
        state.next_id += 1;

        let event = event.with_id(id);
        state.events.insert(id, event.clone());
        debug!(id, "event stored");
        Ok(event)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Event>, EventError> {
        Ok(self.state.read().await.events.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Event>, EventError> {
        Ok(self.filter(|_| true).await)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, EventError> {
        Ok(self.state.read().await.events.contains_key(&id))
    }

    #[instrument(skip(self, event))]
    async fn replace(
        &self, id: i64, event: NewEvent,
    ) -> Result<Event, EventError> {
        let mut state = self.state.write().await;
        let slot = state
            .events
            .get_mut(&id)
            .ok_or(EventError::NotFound { event_id: id })?;

        *slot = event.with_id(id);
        Ok(slot.clone())
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: i64) -> Result<bool, EventError> {
        Ok(self.state.write().await.events.remove(&id).is_some())
    }

    async fn find_by_category(
        &self, category: EventCategory,
    ) -> Result<Vec<Event>, EventError> {
        Ok(self.filter(|e| e.category == Some(category)).await)
    }

    async fn find_by_date_range(
        &self, start: NaiveDate, end: NaiveDate,
    ) -> Result<Vec<Event>, EventError> {
        Ok(self
            .filter(|e| start <= e.event_date && e.event_date <= end)
            .await)
    }

    async fn find_by_organizer_containing(
        &self, organizer: &str,
    ) -> Result<Vec<Event>, EventError> {
        Ok(self.filter(|e| e.organizer_contains(organizer)).await)
    }

    async fn find_by_name_containing(
        &self, name: &str,
    ) -> Result<Vec<Event>, EventError> {
        Ok(self.filter(|e| e.name_contains(name)).await)
    }

    async fn find_upcoming_by_category(
        &self, category: EventCategory, from: NaiveDate,
    ) -> Result<Vec<Event>, EventError> {
        Ok(self
            .filter(|e| e.category == Some(category) && e.event_date >= from)
            .await)
    }

    async fn find_after(
        &self, date: NaiveDate,
    ) -> Result<Vec<Event>, EventError> {
        Ok(self.filter(|e| e.event_date > date).await)
    }
}
