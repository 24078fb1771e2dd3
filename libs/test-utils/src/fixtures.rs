use chrono::{NaiveDate, NaiveTime};
use events_models::{EventCategory, EventRecord, NewEvent};

/// Reference date used as "today" across the test suites.
pub fn today() -> NaiveDate { date(2030, 1, 15) }

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// A valid conference held on `event_date`, 09:00 to 17:00.
pub fn new_event(name: &str, event_date: NaiveDate) -> NewEvent {
    NewEvent::builder()
        .name(name)
        .event_date(event_date)
        .start_time(time(9, 0))
        .end_time(time(17, 0))
        .location("Main Hall")
        .organizer("Tech Corp")
        .capacity(100)
        .category(EventCategory::Conference)
        .build()
}

pub fn new_event_in(
    name: &str, event_date: NaiveDate, category: EventCategory,
) -> NewEvent {
    NewEvent {
        category: Some(category),
        ..new_event(name, event_date)
    }
}

/// Candidate record that passes validation against [`today`].
pub fn valid_record(name: &str) -> EventRecord {
    EventRecord::from(new_event(name, date(2030, 6, 1)))
}
