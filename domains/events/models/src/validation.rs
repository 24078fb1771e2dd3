//! Field rules for candidate events.
//!
//! [`validate`] checks every rule and reports all violations at once, in
//! attribute order, with the start/end ordering rule last. It never touches
//! storage and reads no ambient time: the caller supplies `today`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::events::{EventRecord, NewEvent};

/// Wire names reported in [`FieldViolation::field`].
pub mod fields {
    pub const NAME: &str = "name";
    pub const EVENT_DATE: &str = "eventDate";
    pub const START_TIME: &str = "startTime";
    pub const END_TIME: &str = "endTime";
    pub const LOCATION: &str = "location";
    pub const ORGANIZER: &str = "organizer";
    pub const CAPACITY: &str = "capacity";
    pub const DESCRIPTION: &str = "description";
    pub const PRICE: &str = "price";
    pub const TIME_RANGE: &str = "timeRange";
}

pub const NAME_MIN_CHARS: usize = 3;
pub const NAME_MAX_CHARS: usize = 100;
pub const LOCATION_MAX_CHARS: usize = 200;
pub const ORGANIZER_MAX_CHARS: usize = 200;
pub const DESCRIPTION_MAX_CHARS: usize = 500;
pub const MIN_CAPACITY: i32 = 1;
pub const PRICE_MAX_INTEGER_DIGITS: u32 = 8;
pub const PRICE_MAX_FRACTION_DIGITS: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("Validation failed: {}", summarize(.violations))]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    fn add(&mut self, field: &str, message: &str) {
        self.violations.push(FieldViolation {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn is_empty(&self) -> bool { self.violations.is_empty() }

    pub fn violations(&self) -> &[FieldViolation] { &self.violations }

    pub fn into_violations(self) -> Vec<FieldViolation> { self.violations }

    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    pub fn fields(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.field.as_str()).collect()
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Check a candidate against every field rule.
///
/// On success the fully populated [`NewEvent`] is returned; the candidate's
/// `id` is not carried over.
pub fn validate(
    record: &EventRecord, today: NaiveDate,
) -> Result<NewEvent, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = required_text(
        &mut errors,
        fields::NAME,
        &record.name,
        "Event name is required",
    );
    if let Some(name) = name {
        let len = name.chars().count();
        if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
            errors.add(
                fields::NAME,
                "Name must be between 3 and 100 characters",
            );
        }
    }

    match record.event_date {
        None => errors.add(fields::EVENT_DATE, "Event date is required"),
        Some(date) if date <= today => {
            errors.add(fields::EVENT_DATE, "Event date must be in the future")
        }
        Some(_) => {}
    }

    if record.start_time.is_none() {
        errors.add(fields::START_TIME, "Start time is required");
    }
    if record.end_time.is_none() {
        errors.add(fields::END_TIME, "End time is required");
    }

    let location = required_text(
        &mut errors,
        fields::LOCATION,
        &record.location,
        "Location is required",
    );
    if location.is_some_and(|l| l.chars().count() > LOCATION_MAX_CHARS) {
        errors.add(
            fields::LOCATION,
            "Location must not exceed 200 characters",
        );
    }

    let organizer = required_text(
        &mut errors,
        fields::ORGANIZER,
        &record.organizer,
        "Organizer is required",
    );
    if organizer.is_some_and(|o| o.chars().count() > ORGANIZER_MAX_CHARS) {
        errors.add(
            fields::ORGANIZER,
            "Organizer must not exceed 200 characters",
        );
    }

    match record.capacity {
        None => errors.add(fields::CAPACITY, "Capacity is required"),
        Some(capacity) if capacity < MIN_CAPACITY => {
            errors.add(fields::CAPACITY, "Capacity must be at least 1")
        }
        Some(_) => {}
    }

    if record
        .description
        .as_deref()
        .is_some_and(|d| d.chars().count() > DESCRIPTION_MAX_CHARS)
    {
        errors.add(
            fields::DESCRIPTION,
            "Description must not exceed 500 characters",
        );
    }

    if let Some(price) = record.price {
        if price <= Decimal::ZERO {
            errors.add(fields::PRICE, "Price must be greater than zero");
        }
        if !has_price_digits(price) {
            errors.add(
                fields::PRICE,
                "Price must have at most 8 integer digits and 2 decimals",
            );
        }
    }

    if !is_valid_time_range(record) {
        errors.add(fields::TIME_RANGE, "Start time must be before end time");
    }

    match (
        name,
        record.event_date,
        record.start_time,
        record.end_time,
        location,
        organizer,
        record.capacity,
    ) {
        (
            Some(name),
            Some(event_date),
            Some(start_time),
            Some(end_time),
            Some(location),
            Some(organizer),
            Some(capacity),
        ) if errors.is_empty() => {
            Ok(NewEvent {
                name: name.to_string(),
                event_date,
                start_time,
                end_time,
                location: location.to_string(),
                organizer: organizer.to_string(),
                capacity,
                description: record.description.clone(),
                price: record.price,
                category: record.category,
            })
        }
        _ => Err(errors),
    }
}

/// Start must be strictly before end. A missing time is not this rule's
/// concern; the required rules report it.
pub fn is_valid_time_range(record: &EventRecord) -> bool {
    match (record.start_time, record.end_time) {
        (Some(start), Some(end)) => start < end,
        _ => true,
    }
}

/// A missing or whitespace-only value records only `message`; the caller
/// skips length checks for it, so `"  "` never also reports a size error.
fn required_text<'a>(
    errors: &mut ValidationErrors, field: &str, value: &'a Option<String>,
    message: &str,
) -> Option<&'a str> {
    match value.as_deref() {
        Some(text) if !text.trim().is_empty() => Some(text),
        _ => {
            errors.add(field, message);
            None
        }
    }
}

/// Trailing zeros do not count, so `10.500` has two fractional digits.
fn has_price_digits(price: Decimal) -> bool {
    let normalized = price.normalize();
    let integer_limit = Decimal::from(10_i64.pow(PRICE_MAX_INTEGER_DIGITS));
    normalized.scale() <= PRICE_MAX_FRACTION_DIGITS
        && normalized.abs().trunc() < integer_limit
}

#[cfg(test)]
mod tests {
    use chrono::{Days, NaiveTime};

    use super::*;
    use crate::category::EventCategory;

    fn today() -> NaiveDate { NaiveDate::from_ymd_opt(2026, 3, 10).unwrap() }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn valid_record() -> EventRecord {
        EventRecord::builder()
            .name("Tech Summit")
            .event_date(today() + Days::new(10))
            .start_time(time(9, 0))
            .end_time(time(17, 0))
            .location("Hall A")
            .organizer("Acme")
            .capacity(50)
            .category(EventCategory::Conference)
            .build()
    }

    fn violations_for(record: &EventRecord) -> ValidationErrors {
        validate(record, today()).unwrap_err()
    }

    #[test]
    fn test_valid_record_passes() {
        let event = validate(&valid_record(), today()).unwrap();
        assert_eq!(event.name, "Tech Summit");
        assert_eq!(event.capacity, 50);
        assert_eq!(event.category, Some(EventCategory::Conference));
        assert!(event.price.is_none());
    }

    #[test]
    fn test_id_is_not_carried_over() {
        let mut record = valid_record();
        record.id = Some(99);
        let event = validate(&record, today()).unwrap();
        assert_eq!(event.with_id(1).id, 1);
    }

    #[test]
    fn test_empty_record_reports_every_required_field_in_order() {
        let errors = violations_for(&EventRecord::default());
        assert_eq!(
            errors.fields(),
            vec![
                fields::NAME,
                fields::EVENT_DATE,
                fields::START_TIME,
                fields::END_TIME,
                fields::LOCATION,
                fields::ORGANIZER,
                fields::CAPACITY,
            ]
        );
        assert!(!errors.has_field(fields::TIME_RANGE));
    }

    #[test]
    fn test_name_length_bounds() {
        for (name, ok) in [
            ("ab", false),
            ("abc", true),
            (&"x".repeat(100)[..], true),
            (&"x".repeat(101)[..], false),
        ] {
            let mut record = valid_record();
            record.name = Some(name.to_string());
            assert_eq!(validate(&record, today()).is_ok(), ok, "{name}");
        }
    }

    #[test]
    fn test_name_length_counts_characters_not_bytes() {
        let mut record = valid_record();
        record.name = Some("Açaí".to_string());
        assert!(validate(&record, today()).is_ok());
    }

    #[test]
    fn test_blank_name_is_reported_as_missing_only() {
        let mut record = valid_record();
        record.name = Some("   ".to_string());
        let errors = violations_for(&record);
        assert_eq!(errors.violations().len(), 1);
        assert_eq!(errors.violations()[0].message, "Event name is required");
    }

    #[test]
    fn test_event_date_must_be_after_today() {
        for (offset, ok) in [(-1_i64, false), (0, false), (1, true)] {
            let mut record = valid_record();
            record.event_date = today()
                .checked_add_signed(chrono::Duration::days(offset));
            let result = validate(&record, today());
            assert_eq!(result.is_ok(), ok, "offset {offset}");
            if !ok {
                let errors = result.unwrap_err();
                assert_eq!(errors.fields(), vec![fields::EVENT_DATE]);
                assert_eq!(
                    errors.violations()[0].message,
                    "Event date must be in the future"
                );
            }
        }
    }

    #[test]
    fn test_time_range_violation_iff_start_not_before_end() {
        let cases = [
            (time(10, 0), time(12, 0), false),
            (time(12, 0), time(10, 0), true),
            (time(10, 0), time(10, 0), true),
            (time(23, 59), time(0, 0), true),
        ];
        for (start, end, violated) in cases {
            let mut record = valid_record();
            record.start_time = Some(start);
            record.end_time = Some(end);
            let result = validate(&record, today());
            assert_eq!(
                result
                    .as_ref()
                    .err()
                    .is_some_and(|e| e.has_field(fields::TIME_RANGE)),
                violated,
                "{start} - {end}"
            );
        }
    }

    #[test]
    fn test_time_range_rule_ignores_missing_times() {
        let mut record = valid_record();
        record.start_time = None;
        let errors = violations_for(&record);
        assert_eq!(errors.fields(), vec![fields::START_TIME]);

        let mut record = valid_record();
        record.end_time = None;
        let errors = violations_for(&record);
        assert_eq!(errors.fields(), vec![fields::END_TIME]);

        record.start_time = None;
        assert!(is_valid_time_range(&record));
    }

    #[test]
    fn test_time_range_reported_after_other_fields() {
        let mut record = valid_record();
        record.capacity = Some(0);
        record.start_time = Some(time(18, 0));
        let errors = violations_for(&record);
        assert_eq!(
            errors.fields(),
            vec![fields::CAPACITY, fields::TIME_RANGE]
        );
    }

    #[test]
    fn test_location_and_organizer_limits() {
        let mut record = valid_record();
        record.location = Some("l".repeat(201));
        record.organizer = Some("o".repeat(201));
        let errors = violations_for(&record);
        assert_eq!(
            errors.fields(),
            vec![fields::LOCATION, fields::ORGANIZER]
        );

        record.location = Some("l".repeat(200));
        record.organizer = Some("o".repeat(200));
        assert!(validate(&record, today()).is_ok());
    }

    #[test]
    fn test_capacity_must_be_positive() {
        let mut record = valid_record();
        record.capacity = Some(-5);
        let errors = violations_for(&record);
        assert_eq!(
            errors.violations()[0].message,
            "Capacity must be at least 1"
        );

        record.capacity = Some(1);
        assert!(validate(&record, today()).is_ok());
    }

    #[test]
    fn test_description_is_optional_but_bounded() {
        let mut record = valid_record();
        record.description = Some("d".repeat(500));
        assert!(validate(&record, today()).is_ok());

        record.description = Some("d".repeat(501));
        assert_eq!(violations_for(&record).fields(), vec![fields::DESCRIPTION]);
    }

    #[test]
    fn test_price_rules() {
        let cases = [
            ("0.01", 0),
            ("50.00", 0),
            ("99999999.99", 0),
            ("10.500", 0),
            ("0", 1),
            ("-3", 1),
            ("100000000", 1),
            ("1.999", 1),
            ("-123456789.123", 2),
        ];
        for (price, expected) in cases {
            let mut record = valid_record();
            record.price = Some(price.parse().unwrap());
            let count = validate(&record, today())
                .err()
                .map_or(0, |e| e.violations().len());
            assert_eq!(count, expected, "price {price}");
        }
    }

    #[test]
    fn test_display_lists_every_violation() {
        let mut record = valid_record();
        record.name = None;
        record.capacity = None;
        let message = violations_for(&record).to_string();
        assert_eq!(
            message,
            "Validation failed: name: Event name is required; capacity: \
             Capacity is required"
        );
    }
}
