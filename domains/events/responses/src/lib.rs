use chrono::{NaiveDate, NaiveTime};
use events_models::{Event, EventCategory};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: i64,
    pub name: String,
    pub event_date: NaiveDate,
    #[serde(with = "events_models::time_format")]
    #[schema(value_type = String, example = "09:00")]
    pub start_time: NaiveTime,
    #[serde(with = "events_models::time_format")]
    #[schema(value_type = String, example = "17:00")]
    pub end_time: NaiveTime,
    pub location: String,
    pub organizer: String,
    pub capacity: i32,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<EventCategory>,
    /// Human-readable name of `category`.
    pub category_label: Option<String>,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            name: event.name,
            event_date: event.event_date,
            start_time: event.start_time,
            end_time: event.end_time,
            location: event.location,
            organizer: event.organizer,
            capacity: event.capacity,
            description: event.description,
            price: event.price,
            category_label: event
                .category
                .map(|category| category.display_name().to_string()),
            category: event.category,
        }
    }
}

/// One entry of the category picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    #[schema(example = "CONFERENCE")]
    pub value: EventCategory,
    #[schema(example = "Conferência")]
    pub label: String,
}

impl From<EventCategory> for CategoryResponse {
    fn from(category: EventCategory) -> Self {
        Self {
            value: category,
            label: category.display_name().to_string(),
        }
    }
}

impl CategoryResponse {
    pub fn all() -> Vec<Self> {
        EventCategory::ALL.into_iter().map(Self::from).collect()
    }
}
