use events_dao::{EventDao, EventStore};
use events_errors::EventError;
use events_models::{Event, EventCategory};
use rust_decimal::Decimal;
use test_utils::{
    TestPostgresContainer,
    fixtures::{date, new_event, new_event_in},
};

async fn setup() -> (TestPostgresContainer, EventDao) {
    let container = TestPostgresContainer::new().await.unwrap();
    let dao = EventDao::new(container.sql_connect());
    (container, dao)
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_insert_and_find_round_trip() {
    let (_container, dao) = setup().await;

    let mut event = new_event("Tech Summit", date(2030, 5, 20));
    event.price = Some(Decimal::new(4990, 2));
    event.description = Some("Annual summit".to_string());

    let stored = dao.insert(event.clone()).await.unwrap();
    assert!(stored.id > 0);
    assert_eq!(stored, event.with_id(stored.id));

    let found = dao.find_by_id(stored.id).await.unwrap();
    assert_eq!(found, Some(stored.clone()));
    assert_eq!(dao.find_by_id(stored.id + 1000).await.unwrap(), None);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_replace_and_delete() {
    let (_container, dao) = setup().await;
    let stored = dao
        .insert(new_event("Original", date(2030, 5, 20)))
        .await
        .unwrap();

    let replaced = dao
        .replace(stored.id, new_event("Renamed", date(2030, 6, 1)))
        .await
        .unwrap();
    assert_eq!(replaced.id, stored.id);
    assert_eq!(replaced.name, "Renamed");

    let missing = dao.replace(-1, new_event("Ghost", date(2030, 6, 1))).await;
    assert!(matches!(missing, Err(EventError::NotFound { event_id: -1 })));

    assert!(dao.exists_by_id(stored.id).await.unwrap());
    assert!(dao.delete_by_id(stored.id).await.unwrap());
    assert!(!dao.exists_by_id(stored.id).await.unwrap());
    assert!(!dao.delete_by_id(stored.id).await.unwrap());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_filters() {
    let (_container, dao) = setup().await;
    dao.insert(new_event_in(
        "Rust 100%",
        date(2030, 2, 1),
        EventCategory::Workshop,
    ))
    .await
    .unwrap();
    dao.insert(new_event_in(
        "Data Day",
        date(2030, 2, 10),
        EventCategory::Conference,
    ))
    .await
    .unwrap();

    assert_eq!(dao.find_all().await.unwrap().len(), 2);
    assert_eq!(
        dao.find_by_category(EventCategory::Workshop).await.unwrap().len(),
        1
    );
    assert_eq!(
        dao.find_by_date_range(date(2030, 2, 1), date(2030, 2, 10))
            .await
            .unwrap()
            .len(),
        2
    );
    assert_eq!(dao.find_by_name_containing("100%").await.unwrap().len(), 1);
    assert_eq!(dao.find_by_name_containing("_").await.unwrap().len(), 0);
    assert_eq!(
        dao.find_by_organizer_containing("TECH").await.unwrap().len(),
        2
    );
    assert_eq!(
        dao.find_upcoming_by_category(
            EventCategory::Conference,
            date(2030, 2, 10)
        )
        .await
        .unwrap()
        .len(),
        1
    );
    assert!(dao.find_after(date(2030, 2, 10)).await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_wildcard_characters_match_literally() {
    let (_container, dao) = setup().await;
    for name in ["Sale 50% off", "Rust_Meetup", "Rustacean Meetup"] {
        dao.insert(new_event(name, date(2030, 3, 1))).await.unwrap();
    }

    let names = |events: Vec<Event>| {
        events.into_iter().map(|e| e.name).collect::<Vec<_>>()
    };

    assert_eq!(
        names(dao.find_by_name_containing("%").await.unwrap()),
        vec!["Sale 50% off"]
    );
    assert_eq!(
        names(dao.find_by_name_containing("_").await.unwrap()),
        vec!["Rust_Meetup"]
    );
    assert_eq!(
        names(dao.find_by_name_containing("rust_m").await.unwrap()),
        vec!["Rust_Meetup"]
    );
    assert!(dao.find_by_name_containing("R%p").await.unwrap().is_empty());
    assert!(
        dao.find_by_organizer_containing("t_ch")
            .await
            .unwrap()
            .is_empty()
    );
    assert_eq!(dao.find_by_name_containing("").await.unwrap().len(), 3);
}
