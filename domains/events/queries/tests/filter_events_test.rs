use std::sync::Arc;

use events_dao::{EventStore, InMemoryEventStore};
use events_models::EventCategory;
use events_queries::{
    DateRangeQuery, FilterEventsQueryHandler, NameSearchQuery, OrganizerQuery,
};
use test_utils::fixtures::{date, new_event, new_event_in};

async fn setup() -> FilterEventsQueryHandler {
    let store = Arc::new(InMemoryEventStore::new());

    let mut summit = new_event("Tech Summit", date(2030, 3, 1));
    summit.organizer = "Test Organizer".to_string();
    store.insert(summit).await.unwrap();

    store
        .insert(new_event_in(
            "Rust Workshop",
            date(2030, 3, 15),
            EventCategory::Workshop,
        ))
        .await
        .unwrap();

    let mut meetup =
        new_event_in("Summit Meetup", date(2030, 3, 31), EventCategory::Meetup);
    meetup.organizer = "Community".to_string();
    store.insert(meetup).await.unwrap();

    FilterEventsQueryHandler::new(store)
}

fn names(events: &[events_models::Event]) -> Vec<&str> {
    events.iter().map(|e| e.name.as_str()).collect()
}

#[tokio::test]
async fn test_filter_by_category() {
    let handler = setup().await;

    let workshops = handler.by_category(EventCategory::Workshop).await.unwrap();
    assert_eq!(names(&workshops), vec!["Rust Workshop"]);

    let courses = handler.by_category(EventCategory::Course).await.unwrap();
    assert!(courses.is_empty());
}

#[tokio::test]
async fn test_organizer_filter_is_case_insensitive_substring() {
    let handler = setup().await;

    for term in ["test", "ORGANIZER", "t Org"] {
        let found = handler
            .by_organizer(OrganizerQuery {
                organizer: term.to_string(),
            })
            .await
            .unwrap();
        assert_eq!(names(&found), vec!["Tech Summit"], "term {term:?}");
    }
}

#[tokio::test]
async fn test_name_search_is_case_insensitive_substring() {
    let handler = setup().await;

    let found = handler
        .by_name(NameSearchQuery {
            name: "SUMMIT".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(names(&found), vec!["Tech Summit", "Summit Meetup"]);
}

#[tokio::test]
async fn test_date_range_includes_both_ends() {
    let handler = setup().await;

    let found = handler
        .by_date_range(DateRangeQuery {
            start_date: date(2030, 3, 1),
            end_date: date(2030, 3, 15),
        })
        .await
        .unwrap();

    assert_eq!(names(&found), vec!["Tech Summit", "Rust Workshop"]);
}

#[tokio::test]
async fn test_single_day_range() {
    let handler = setup().await;

    let found = handler
        .by_date_range(DateRangeQuery {
            start_date: date(2030, 3, 31),
            end_date: date(2030, 3, 31),
        })
        .await
        .unwrap();

    assert_eq!(names(&found), vec!["Summit Meetup"]);
}

#[tokio::test]
async fn test_inverted_date_range_is_empty() {
    let handler = setup().await;

    let found = handler
        .by_date_range(DateRangeQuery {
            start_date: date(2030, 4, 1),
            end_date: date(2030, 3, 1),
        })
        .await
        .unwrap();

    assert!(found.is_empty());
}
