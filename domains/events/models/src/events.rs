use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;
use utoipa::ToSchema;

use crate::category::EventCategory;

/// Candidate event as submitted by a client.
///
/// Every attribute is optional so that missing required values can be
/// reported by [`crate::validation::validate`] instead of failing
/// deserialization. A client-supplied `id` is accepted and ignored.
#[derive(
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    TypedBuilder,
    ToSchema,
)]
#[serde(default, rename_all = "camelCase")]
pub struct EventRecord {
    #[builder(default, setter(strip_option))]
    pub id: Option<i64>,
    #[builder(default, setter(into, strip_option))]
    #[schema(example = "Tech Summit")]
    pub name: Option<String>,
    #[builder(default, setter(strip_option))]
    pub event_date: Option<NaiveDate>,
    #[builder(default, setter(strip_option))]
    #[serde(with = "crate::time_format::option")]
    #[schema(value_type = Option<String>, example = "09:00")]
    pub start_time: Option<NaiveTime>,
    #[builder(default, setter(strip_option))]
    #[serde(with = "crate::time_format::option")]
    #[schema(value_type = Option<String>, example = "17:00")]
    pub end_time: Option<NaiveTime>,
    #[builder(default, setter(into, strip_option))]
    pub location: Option<String>,
    #[builder(default, setter(into, strip_option))]
    pub organizer: Option<String>,
    #[builder(default, setter(strip_option))]
    pub capacity: Option<i32>,
    #[builder(default, setter(into, strip_option))]
    pub description: Option<String>,
    #[builder(default, setter(strip_option))]
    pub price: Option<Decimal>,
    #[builder(default, setter(strip_option))]
    pub category: Option<EventCategory>,
}

/// Event attributes that passed validation, without an identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    #[builder(setter(into))]
    pub name: String,
    pub event_date: NaiveDate,
    #[serde(with = "crate::time_format")]
    pub start_time: NaiveTime,
    #[serde(with = "crate::time_format")]
    pub end_time: NaiveTime,
    #[builder(setter(into))]
    pub location: String,
    #[builder(setter(into))]
    pub organizer: String,
    pub capacity: i32,
    #[builder(default, setter(into, strip_option))]
    pub description: Option<String>,
    #[builder(default, setter(strip_option))]
    pub price: Option<Decimal>,
    #[builder(default, setter(strip_option))]
    pub category: Option<EventCategory>,
}

impl NewEvent {
    /// Attach a store-assigned identifier.
    pub fn with_id(self, id: i64) -> Event {
        Event {
            id,
            name: self.name,
            event_date: self.event_date,
            start_time: self.start_time,
            end_time: self.end_time,
            location: self.location,
            organizer: self.organizer,
            capacity: self.capacity,
            description: self.description,
            price: self.price,
            category: self.category,
        }
    }
}

/// A persisted event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub event_date: NaiveDate,
    #[serde(with = "crate::time_format")]
    pub start_time: NaiveTime,
    #[serde(with = "crate::time_format")]
    pub end_time: NaiveTime,
    pub location: String,
    pub organizer: String,
    pub capacity: i32,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<EventCategory>,
}

impl Event {
    pub fn name_contains(&self, term: &str) -> bool {
        contains_ignore_case(&self.name, term)
    }

    pub fn organizer_contains(&self, term: &str) -> bool {
        contains_ignore_case(&self.organizer, term)
    }
}

impl From<Event> for NewEvent {
    fn from(event: Event) -> Self {
        Self {
            name: event.name,
            event_date: event.event_date,
            start_time: event.start_time,
            end_time: event.end_time,
            location: event.location,
            organizer: event.organizer,
            capacity: event.capacity,
            description: event.description,
            price: event.price,
            category: event.category,
        }
    }
}

impl From<NewEvent> for EventRecord {
    fn from(event: NewEvent) -> Self {
        Self {
            id: None,
            name: Some(event.name),
            event_date: Some(event.event_date),
            start_time: Some(event.start_time),
            end_time: Some(event.end_time),
            location: Some(event.location),
            organizer: Some(event.organizer),
            capacity: Some(event.capacity),
            description: event.description,
            price: event.price,
            category: event.category,
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summit() -> NewEvent {
        NewEvent::builder()
            .name("Test Event")
            .event_date(NaiveDate::from_ymd_opt(2030, 5, 20).unwrap())
            .start_time(NaiveTime::from_hms_opt(10, 0, 0).unwrap())
            .end_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap())
            .location("Test Location")
            .organizer("Test Organizer")
            .capacity(100)
            .category(EventCategory::Conference)
            .build()
    }

    #[test]
    fn test_with_id_keeps_every_attribute() {
        let event = summit().with_id(7);
        assert_eq!(event.id, 7);
        assert_eq!(NewEvent::from(event), summit());
    }

    #[test]
    fn test_organizer_match_ignores_case() {
        let event = summit().with_id(1);
        assert!(event.organizer_contains("test"));
        assert!(event.organizer_contains("ORGANIZER"));
        assert!(event.organizer_contains("t Org"));
        assert!(!event.organizer_contains("Acme"));
    }

    #[test]
    fn test_record_deserializes_camel_case_wire_format() {
        let record: EventRecord = serde_json::from_str(
            r#"{
                "name": "Tech Summit",
                "eventDate": "2030-05-20",
                "startTime": "09:00",
                "endTime": "17:00",
                "location": "Hall A",
                "organizer": "Acme",
                "capacity": 50,
                "price": "49.90",
                "category": "CONFERENCE"
            }"#,
        )
        .unwrap();

        assert_eq!(record.name.as_deref(), Some("Tech Summit"));
        assert_eq!(record.start_time, NaiveTime::from_hms_opt(9, 0, 0));
        assert_eq!(record.capacity, Some(50));
        assert_eq!(record.price, Some(Decimal::new(499, 1)));
        assert_eq!(record.category, Some(EventCategory::Conference));
        assert!(record.description.is_none());
        assert!(record.id.is_none());
    }

    #[test]
    fn test_record_tolerates_missing_fields() {
        let record: EventRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record, EventRecord::default());
    }
}
