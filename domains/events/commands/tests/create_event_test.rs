use std::sync::Arc;

use events_commands::{CreateEventCommand, CreateEventHandler};
use events_dao::{EventStore, InMemoryEventStore};
use events_errors::EventError;
use events_models::{EventCategory, EventRecord, FixedClock};
use test_utils::fixtures::{date, time, today, valid_record};

fn setup() -> (Arc<InMemoryEventStore>, CreateEventHandler) {
    let store = Arc::new(InMemoryEventStore::new());
    let handler =
        CreateEventHandler::new(store.clone(), Arc::new(FixedClock(today())));
    (store, handler)
}

#[tokio::test]
async fn test_create_event_success() {
    let (store, handler) = setup();

    let event = handler
        .execute(CreateEventCommand {
            event: valid_record("Tech Summit"),
        })
        .await
        .unwrap();

    assert_eq!(event.id, 1);
    assert_eq!(event.name, "Tech Summit");
    assert_eq!(event.category, Some(EventCategory::Conference));
    assert_eq!(store.find_by_id(1).await.unwrap(), Some(event));
}

#[tokio::test]
async fn test_create_ignores_client_supplied_id() {
    let (_store, handler) = setup();
    let mut record = valid_record("Tech Summit");
    record.id = Some(500);

    let event = handler
        .execute(CreateEventCommand { event: record })
        .await
        .unwrap();

    assert_eq!(event.id, 1);
}

#[tokio::test]
async fn test_create_rejects_event_dated_today() {
    let (store, handler) = setup();
    let mut record = valid_record("Tech Summit");
    record.event_date = Some(today());

    let err = handler
        .execute(CreateEventCommand { event: record })
        .await
        .unwrap_err();

    match err {
        EventError::Validation(errors) => {
            assert_eq!(errors.fields(), vec!["eventDate"]);
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_create_reports_every_violation() {
    let (store, handler) = setup();
    let record = EventRecord::builder()
        .name("ab")
        .event_date(date(2020, 1, 1))
        .start_time(time(18, 0))
        .end_time(time(9, 0))
        .location("")
        .organizer("Acme")
        .capacity(0)
        .build();

    let err = handler
        .execute(CreateEventCommand { event: record })
        .await
        .unwrap_err();

    let EventError::Validation(errors) = err
    else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.fields(), vec![
        "name",
        "eventDate",
        "location",
        "capacity",
        "timeRange"
    ]);
    assert!(store.is_empty().await);
}
