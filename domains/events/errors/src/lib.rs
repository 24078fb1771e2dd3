use common_errors::{ApiFieldError, AppError};
use events_models::ValidationErrors;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("Database error: {0}")]
    Database(#[from] sql_connection::PgError),
    #[error("Connection error: {0}")]
    Connection(#[from] sql_connection::PoolError),
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error("Event not found with id: {event_id}")]
    NotFound { event_id: i64 },
}

impl EventError {
    pub fn not_found(event_id: i64) -> Self { Self::NotFound { event_id } }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<EventError> for AppError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::NotFound { .. } => {
                AppError::not_found("EVENT_NOT_FOUND", &err.to_string())
            }
            EventError::Validation(errors) => {
                let fields = errors
                    .into_violations()
                    .into_iter()
                    .map(|violation| ApiFieldError {
                        field: violation.field,
                        message: violation.message,
                    })
                    .collect();
                AppError::validation_failed(
                    "VALIDATION_FAILED",
                    "Event validation failed",
                    fields,
                )
            }
            EventError::Database(_) | EventError::Connection(_) => {
                error!(error = %err, "event storage failure");
                AppError::internal_server_error("Event storage is unavailable")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use chrono::NaiveDate;
    use events_models::{EventRecord, validate};

    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let app: AppError = EventError::not_found(42).into();
        assert_eq!(app.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(app.info().code, "EVENT_NOT_FOUND");
        assert!(app.info().message.contains("42"));
    }

    #[test]
    fn test_validation_maps_to_400_with_fields() {
        let today = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let errors = validate(&EventRecord::default(), today).unwrap_err();
        let expected = errors.violations().len();

        let app: AppError = EventError::from(errors).into();
        assert_eq!(app.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(app.info().code, "VALIDATION_FAILED");
        assert_eq!(app.info().fields.len(), expected);
        assert!(app.info().fields.iter().any(|f| f.field == "name"));
    }
}
